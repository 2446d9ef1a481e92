//! Lifecycle of a single authenticated request.
//!
//! ```text
//! Unauthenticated                         (no access token: fail)
//! Authenticated(Initial) --401--> Refreshing --ok--> Authenticated(Retry)
//!                                     |
//!                                     +--fail--> Failed
//! ```
//!
//! Any response other than a 401 on the initial attempt, and every response
//! on the retry, ends the request. There is no edge back into `Refreshing`
//! from `Authenticated(Retry)`, so one call refreshes at most once.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attempt {
    Initial,
    Retry,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    Unauthenticated,
    Authenticated(Attempt),
    Refreshing,
    Failed,
}

impl AuthState {
    pub fn start(has_access_token: bool) -> Self {
        if has_access_token {
            AuthState::Authenticated(Attempt::Initial)
        } else {
            AuthState::Unauthenticated
        }
    }

    /// State after a response with `status` arrived.
    ///
    /// `None` means the request is finished and the response belongs to the caller.
    pub fn after_response(self, status: u16) -> Option<Self> {
        match self {
            AuthState::Authenticated(Attempt::Initial) if status == 401 => {
                Some(AuthState::Refreshing)
            }
            _ => None,
        }
    }

    pub fn after_refresh(self, refreshed: bool) -> Self {
        match self {
            AuthState::Refreshing if refreshed => AuthState::Authenticated(Attempt::Retry),
            _ => AuthState::Failed,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, AuthState::Unauthenticated | AuthState::Failed)
    }
}
