use crate::UserRecord;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/onboarding/`
#[derive(Debug, Clone, Serialize)]
pub struct OnboardingRequest {
    pub date_of_birth: NaiveDate,
    pub zodiac_sign: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zodiac_symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zodiac_element: Option<String>,
    pub investing_style: String,
    pub starting_balance: f64,
}

/// Body of `GET /api/onboarding/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnboardingStatus {
    pub onboarding_completed: bool,
    pub user: UserRecord,
}

/// Body returned after a successful onboarding submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnboardingResponse {
    pub message: String,
    pub user: UserRecord,
}
