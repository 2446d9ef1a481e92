//! Shared fixtures for the wiremock-backed integration tests
#![allow(dead_code)]

use zen_client::{ManualClock, MemoryStorage, RedirectRecorder, Storage, TOKENS_KEY, USER_KEY, ZenClient};
use zen_config::Config;
use zen_core::TokenPair;

use std::sync::Arc;

use serde_json::{Value, json};

/// 2024-01-01T00:00:00Z
pub const START_MILLIS: i64 = 1_704_067_200_000;

pub struct Harness {
    pub memory: Arc<MemoryStorage>,
    pub storage: Arc<dyn Storage>,
    pub clock: Arc<ManualClock>,
    pub redirect: Arc<RedirectRecorder>,
    pub client: ZenClient,
}

impl Harness {
    pub fn new(server_uri: &str) -> Self {
        Self::with_storage(server_uri, MemoryStorage::new())
    }

    pub fn with_storage(server_uri: &str, memory: MemoryStorage) -> Self {
        let memory = Arc::new(memory);
        let storage: Arc<dyn Storage> = memory.clone();
        let clock = Arc::new(ManualClock::new(START_MILLIS));
        let redirect = Arc::new(RedirectRecorder::new());

        let client = ZenClient::new(
            &config(server_uri),
            Arc::clone(&storage),
            clock.clone(),
            redirect.clone(),
        );

        Self {
            memory,
            storage,
            clock,
            redirect,
            client,
        }
    }

    /// Store a token pair and the matching user as a previous login would
    pub fn sign_in(&self, access: &str, refresh: &str) {
        self.client
            .session()
            .store_tokens(&TokenPair::new(access, refresh))
            .unwrap();
        self.storage
            .set_item(USER_KEY, &user_json(1, "jane@example.com").to_string())
            .unwrap();
    }

    pub fn tokens(&self) -> Option<TokenPair> {
        self.client.session().current_tokens()
    }

    pub fn has_tokens_key(&self) -> bool {
        self.storage.get_item(TOKENS_KEY).is_some()
    }
}

pub fn config(server_uri: &str) -> Config {
    let mut config = Config::default();
    config.api.public_url = server_uri.to_string();
    config.api.internal_url = server_uri.to_string();
    config
}

pub fn user_json(id: i64, email: &str) -> Value {
    json!({
        "id": id,
        "email": email,
        "username": "jane",
        "first_name": "Jane",
        "last_name": "Doe",
        "date_joined": "2024-01-01T00:00:00Z",
        "is_active": true
    })
}

pub fn tokens_json(access: &str, refresh: &str) -> Value {
    json!({ "access": access, "refresh": refresh })
}
