use crate::models::decimal::deserialize_opt_f64;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Onboarding-extended profile attached to a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ProfileRecord {
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub zodiac_sign: Option<String>,
    #[serde(default)]
    pub zodiac_symbol: Option<String>,
    #[serde(default)]
    pub zodiac_element: Option<String>,
    #[serde(default)]
    pub investing_style: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_f64")]
    pub starting_balance: Option<f64>,
    #[serde(default)]
    pub onboarding_completed: bool,

    // Audit
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// User as returned by `/api/users/me/` and `/api/register/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub email: String,
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub date_joined: Option<DateTime<Utc>>,
    #[serde(default = "default_active")]
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<ProfileRecord>,
}

fn default_active() -> bool {
    true
}

impl UserRecord {
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() {
            self.username.clone()
        } else {
            full.to_string()
        }
    }

    pub fn onboarding_completed(&self) -> bool {
        self.profile
            .as_ref()
            .is_some_and(|profile| profile.onboarding_completed)
    }
}
