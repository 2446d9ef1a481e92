//! Observable "current user", kept in line with the backend and with other
//! handles onto the same storage.
//!
//! Three things trigger reconciliation: mounting, a poll tick while signed in,
//! and a change to a session or demo key made through another handle. They
//! all run the same [`UserState::reconcile`].

use crate::user_state::CurrentUser;
use crate::{
    AuthSession, DEMO_MODE_KEY, DEMO_PROFILE_KEY, DEMO_USER_KEY, DemoMode, TOKENS_KEY, TtlCache,
    USER_KEY,
};

use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, warn};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Storage keys whose change in another handle can change who is signed in
const WATCHED_KEYS: [&str; 5] = [
    TOKENS_KEY,
    USER_KEY,
    DEMO_MODE_KEY,
    DEMO_USER_KEY,
    DEMO_PROFILE_KEY,
];

pub struct UserState {
    session: Arc<AuthSession>,
    demo: DemoMode,
    cache: TtlCache,
    sender: watch::Sender<Option<CurrentUser>>,
}

impl UserState {
    /// Build the state and seed it from storage without touching the network
    pub fn new(session: Arc<AuthSession>, demo: DemoMode, cache: TtlCache) -> Self {
        let seed = Self::seed(&session, &demo);
        let (sender, _) = watch::channel(seed);
        Self {
            session,
            demo,
            cache,
            sender,
        }
    }

    fn seed(session: &AuthSession, demo: &DemoMode) -> Option<CurrentUser> {
        if session.is_authenticated() {
            session.stored_user().map(CurrentUser::Live)
        } else if demo.is_enabled() {
            demo.complete_user().map(CurrentUser::Demo)
        } else {
            None
        }
    }

    pub fn current(&self) -> Option<CurrentUser> {
        self.sender.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.sender.borrow().is_some()
    }

    /// Receiver notified whenever the current user actually changes
    pub fn subscribe(&self) -> watch::Receiver<Option<CurrentUser>> {
        self.sender.subscribe()
    }

    /// Work out who is signed in and publish it.
    ///
    /// A signed-in session is checked against the backend. If that fetch fails
    /// while the tokens survive, the stored user (or the current value) is
    /// kept rather than dropping to nobody.
    pub async fn reconcile(&self) -> Option<CurrentUser> {
        let next = self.resolve().await;
        self.publish(next.clone());
        next
    }

    async fn resolve(&self) -> Option<CurrentUser> {
        if self.session.is_authenticated() {
            match self.session.fetch_current_user().await {
                Ok(user) => return Some(CurrentUser::Live(user)),
                Err(e) => {
                    warn!("Failed to refresh current user: {e}");
                    if self.session.is_authenticated() {
                        return self
                            .session
                            .stored_user()
                            .map(CurrentUser::Live)
                            .or_else(|| self.current());
                    }
                }
            }
        }

        if self.demo.is_enabled() {
            return self.demo.complete_user().map(CurrentUser::Demo);
        }

        None
    }

    fn publish(&self, next: Option<CurrentUser>) {
        let changed = self.sender.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        });

        if changed {
            debug!("Current user changed");
        }
    }

    /// Sign out of both the real session and demo mode.
    ///
    /// Takes effect immediately: no backend round trip happens before
    /// observers see nobody signed in.
    pub fn logout(&self) {
        info!("Signing out");
        self.session.logout();
        self.demo.clear();
        self.cache.clear_all();
        self.publish(None);
    }

    /// Start keeping the state current in the background.
    ///
    /// Reconciles once straight away, then every `poll_interval` while signed
    /// in to a real account, and whenever another handle changes a session or
    /// demo key. Dropping the returned guard stops all of it.
    pub fn mount(self: &Arc<Self>, poll_interval: Duration) -> UserStateGuard {
        let state = Arc::clone(self);
        let mut events = state.session.storage().subscribe();

        let handle = tokio::spawn(async move {
            state.reconcile().await;

            let mut ticker = tokio::time::interval(poll_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately
            ticker.tick().await;

            let mut events_open = true;
            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        if state.session.is_authenticated() {
                            state.reconcile().await;
                        }
                    }
                    event = events.recv(), if events_open => match event {
                        Some(event) if event.concerns(&WATCHED_KEYS) => {
                            debug!("Storage changed elsewhere ({:?}), reconciling", event.key);
                            state.reconcile().await;
                        }
                        Some(_) => {}
                        None => {
                            debug!("Storage event channel closed, polling only");
                            events_open = false;
                        }
                    },
                }
            }
        });

        UserStateGuard { handle }
    }
}

/// Keeps a mounted [`UserState`] running; dropping it stops polling and listening
pub struct UserStateGuard {
    handle: JoinHandle<()>,
}

impl UserStateGuard {
    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }
}

impl Drop for UserStateGuard {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
