use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

/// Side effect run when a session cannot continue and the user has to sign in again
pub trait LoginRedirect: Send + Sync {
    fn redirect_to_login(&self, login_path: &str);
}

/// Logs the redirect; used by the CLI where there is no page to navigate
#[derive(Debug, Default)]
pub struct LogRedirect;

impl LoginRedirect for LogRedirect {
    fn redirect_to_login(&self, login_path: &str) {
        log::warn!("Session ended, sign in again ({login_path})");
    }
}

/// Remembers redirects instead of performing them
#[derive(Debug, Default)]
pub struct RedirectRecorder {
    count: AtomicUsize,
    last_path: Mutex<Option<String>>,
}

impl RedirectRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    pub fn last_path(&self) -> Option<String> {
        self.last_path
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl LoginRedirect for RedirectRecorder {
    fn redirect_to_login(&self, login_path: &str) {
        self.count.fetch_add(1, Ordering::SeqCst);
        *self
            .last_path
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(login_path.to_string());
    }
}
