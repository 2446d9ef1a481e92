use serde::{Deserialize, Serialize};

/// Bearer credentials issued by `/api/auth/token/` and `/api/auth/token/refresh/`.
///
/// Always replaced wholesale: login, refresh and logout never patch a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

impl TokenPair {
    pub fn new(access: impl Into<String>, refresh: impl Into<String>) -> Self {
        Self {
            access: access.into(),
            refresh: refresh.into(),
        }
    }

    /// An access token is usable only when non-empty
    pub fn has_access(&self) -> bool {
        !self.access.is_empty()
    }

    pub fn has_refresh(&self) -> bool {
        !self.refresh.is_empty()
    }

    /// Shortened access token for log lines
    pub fn access_preview(&self) -> String {
        let preview: String = self.access.chars().take(12).collect();
        format!("{preview}...")
    }
}
