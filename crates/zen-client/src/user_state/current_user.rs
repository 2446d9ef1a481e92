use serde::Serialize;
use zen_core::UserRecord;

/// Who is signed in right now
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", content = "user", rename_all = "snake_case")]
pub enum CurrentUser {
    /// Backed by a real account and bearer tokens
    Live(UserRecord),
    /// Synthesized locally by demo mode
    Demo(UserRecord),
}

impl CurrentUser {
    pub fn user(&self) -> &UserRecord {
        match self {
            CurrentUser::Live(user) | CurrentUser::Demo(user) => user,
        }
    }

    pub fn is_demo(&self) -> bool {
        matches!(self, CurrentUser::Demo(_))
    }
}
