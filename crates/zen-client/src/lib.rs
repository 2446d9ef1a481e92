//! zen-client library
//!
//! Session handling, client-side storage, the TTL cache, demo mode and the
//! typed ZEN Traders API client. The `zen` binary is a thin front end over it.

pub mod cache;
pub mod client;
pub mod clock;
pub mod demo;
pub mod logger;
pub mod session;
pub mod storage;
pub mod user_state;

#[cfg(test)]
mod tests;

pub use cache::{CacheEntry, TtlCache};
pub use client::{ClientError, ClientResult, ZenClient};
pub use clock::{Clock, ManualClock, SystemClock};
pub use demo::{DemoMode, PreferenceChange};
pub use session::{
    ApiRequest, Attempt, AuthOutcome, AuthSession, AuthState, LogRedirect, LoginRedirect,
    RedirectRecorder,
};
pub use storage::{
    FileStorage, MemoryStorage, Storage, StorageError, StorageEvent, StorageResult,
    StorageSubscription,
};
pub use user_state::{CurrentUser, UserState, UserStateGuard};

// Persisted session keys
pub const TOKENS_KEY: &str = "zenTraderTokens";
pub const USER_KEY: &str = "zenTraderUser";

// Demo mode keys
pub const DEMO_MODE_KEY: &str = "zenTraderDemoMode";
pub const DEMO_USER_KEY: &str = "zenTraderDemoUser";
pub const DEMO_PROFILE_KEY: &str = "zenTraderDemoProfile";
pub const DEMO_HOLDINGS_KEY: &str = "zenTraderDemoHoldings";
pub const DEMO_WATCHLIST_KEY: &str = "zenTraderDemoWatchlist";
pub const DEMO_DISLIKE_LIST_KEY: &str = "zenTraderDemoDislikeList";

// Cache keys
pub const HEALTH_CACHE_KEY: &str = "api_health";
pub const ZODIAC_CACHE_KEY: &str = "zodiac_matched_stocks";

// Demo identity
const DEMO_USER_ID: i64 = 999_999;
const DEMO_EMAIL: &str = "demo@zentraders.com";
const DEMO_USERNAME: &str = "DemoUser";

const STORAGE_EVENT_CAPACITY: usize = 64;
