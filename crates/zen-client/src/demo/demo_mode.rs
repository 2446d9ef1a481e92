//! Client-only simulated session.
//!
//! Demo mode needs no backend account: the user, profile, portfolio and
//! preference lists all live in client storage and trades are settled locally.

use crate::demo::demo_stocks::demo_matched_stocks;
use crate::storage::{read_json, write_json};
use crate::{
    ClientError, ClientResult, Clock, DEMO_DISLIKE_LIST_KEY, DEMO_EMAIL, DEMO_HOLDINGS_KEY,
    DEMO_MODE_KEY, DEMO_PROFILE_KEY, DEMO_USER_ID, DEMO_USER_KEY, DEMO_USERNAME,
    DEMO_WATCHLIST_KEY, Storage,
};

use std::sync::Arc;

use log::{error, info};
use serde::{Deserialize, Serialize};
use zen_core::{
    PreferenceType, ProfileRecord, StockHolding, StockPreference, TradeAction, TradeRequest,
    TradeResponse, UserHoldings, UserRecord, ZodiacMatchedStocks,
};

/// Outcome of adding a ticker to a preference list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreferenceChange {
    pub message: String,
    pub preference: StockPreference,
}

#[derive(Clone)]
pub struct DemoMode {
    storage: Arc<dyn Storage>,
    clock: Arc<dyn Clock>,
}

impl DemoMode {
    pub fn new(storage: Arc<dyn Storage>, clock: Arc<dyn Clock>) -> Self {
        Self { storage, clock }
    }

    pub fn is_enabled(&self) -> bool {
        self.storage.get_item(DEMO_MODE_KEY).as_deref() == Some("true")
    }

    /// Switch demo mode on with a freshly synthesized user and the given profile.
    /// Returns the complete demo user.
    pub fn enable(&self, profile: ProfileRecord) -> ClientResult<UserRecord> {
        let now = self.clock.now();
        let user = UserRecord {
            id: DEMO_USER_ID,
            email: DEMO_EMAIL.to_string(),
            username: DEMO_USERNAME.to_string(),
            first_name: "Demo".to_string(),
            last_name: "User".to_string(),
            date_joined: Some(now),
            is_active: true,
            profile: None,
        };

        self.storage.set_item(DEMO_MODE_KEY, "true")?;
        write_json(self.storage.as_ref(), DEMO_USER_KEY, &user)?;
        let profile = self.update_profile(profile)?;

        info!("Demo mode enabled");
        Ok(UserRecord {
            profile: Some(profile),
            ..user
        })
    }

    /// Store a new demo profile. Onboarding counts as completed and the
    /// original creation time is kept.
    pub fn update_profile(&self, profile: ProfileRecord) -> ClientResult<ProfileRecord> {
        let now = self.clock.now();
        let created_at = self
            .profile()
            .and_then(|existing| existing.created_at)
            .unwrap_or(now);

        let profile = ProfileRecord {
            onboarding_completed: true,
            created_at: Some(created_at),
            updated_at: Some(now),
            ..profile
        };

        write_json(self.storage.as_ref(), DEMO_PROFILE_KEY, &profile)?;
        Ok(profile)
    }

    /// Turn demo mode off and forget the demo user and profile
    pub fn disable(&self) {
        self.remove_keys(&[DEMO_MODE_KEY, DEMO_USER_KEY, DEMO_PROFILE_KEY]);
        info!("Demo mode disabled");
    }

    /// Remove every trace of demo mode, including the simulated portfolio and lists
    pub fn clear(&self) {
        self.disable();
        self.remove_keys(&[
            DEMO_HOLDINGS_KEY,
            DEMO_WATCHLIST_KEY,
            DEMO_DISLIKE_LIST_KEY,
        ]);
    }

    fn remove_keys(&self, keys: &[&str]) {
        for key in keys {
            if let Err(e) = self.storage.remove_item(key) {
                error!("Failed to remove '{key}' from storage: {e}");
            }
        }
    }

    pub fn user(&self) -> Option<UserRecord> {
        read_json(self.storage.as_ref(), DEMO_USER_KEY)
    }

    pub fn profile(&self) -> Option<ProfileRecord> {
        read_json(self.storage.as_ref(), DEMO_PROFILE_KEY)
    }

    /// Demo user with its profile attached, if both are stored
    pub fn complete_user(&self) -> Option<UserRecord> {
        let user = self.user()?;
        let profile = self.profile()?;
        Some(UserRecord {
            profile: Some(profile),
            ..user
        })
    }

    // =========================================================================
    // Portfolio
    // =========================================================================

    /// Stored demo holdings, else a fresh portfolio funded from the profile's
    /// starting balance, else the default balance
    pub fn holdings(&self) -> UserHoldings {
        if let Some(holdings) = read_json(self.storage.as_ref(), DEMO_HOLDINGS_KEY) {
            return holdings;
        }

        let now = self.clock.now();
        match self.profile() {
            Some(profile) => UserHoldings {
                created_at: profile.created_at.unwrap_or(now),
                updated_at: profile.updated_at.unwrap_or(now),
                ..UserHoldings::seeded(profile.starting_balance, now)
            },
            None => UserHoldings::seeded(None, now),
        }
    }

    /// Settle a trade against the simulated portfolio
    pub fn execute_trade(&self, trade: &TradeRequest) -> ClientResult<TradeResponse> {
        trade.validate()?;

        let now = self.clock.now();
        let mut holdings = self.holdings();

        match trade.action {
            TradeAction::Buy => {
                if holdings.balance < trade.total_value {
                    return Err(ClientError::trade(format!(
                        "Insufficient balance. You have ${:.2} but need ${:.2}",
                        holdings.balance, trade.total_value
                    )));
                }

                match holdings
                    .positions
                    .iter()
                    .position(|p| p.ticker == trade.ticker)
                {
                    Some(index) => {
                        let position = &mut holdings.positions[index];
                        position.quantity += trade.quantity;
                        position.total_value += trade.total_value;
                        position.updated_at = now;
                    }
                    None => {
                        let id = next_id(holdings.positions.iter().map(|p| p.id));
                        holdings.positions.push(StockHolding {
                            id,
                            ticker: trade.ticker.clone(),
                            quantity: trade.quantity,
                            total_value: trade.total_value,
                            created_at: now,
                            updated_at: now,
                        });
                    }
                }

                holdings.balance -= trade.total_value;
            }
            TradeAction::Sell => {
                let Some(position) = holdings
                    .positions
                    .iter_mut()
                    .find(|p| p.ticker == trade.ticker)
                else {
                    return Err(ClientError::trade(format!(
                        "You do not own any shares of {}",
                        trade.ticker
                    )));
                };

                if position.quantity < trade.quantity {
                    return Err(ClientError::trade(format!(
                        "You only own {} shares of {}",
                        position.quantity, trade.ticker
                    )));
                }

                position.quantity -= trade.quantity;
                position.total_value -= trade.total_value;
                position.updated_at = now;

                if position.quantity <= 0.0 {
                    holdings.positions.retain(|p| p.ticker != trade.ticker);
                }

                holdings.balance += trade.total_value;
            }
        }

        holdings.updated_at = now;
        write_json(self.storage.as_ref(), DEMO_HOLDINGS_KEY, &holdings)?;

        Ok(TradeResponse {
            message: format!(
                "Successfully {} {} shares of {}",
                trade.action.past_tense(),
                trade.quantity,
                trade.ticker
            ),
            holdings,
        })
    }

    pub fn matched_stocks(&self) -> ZodiacMatchedStocks {
        demo_matched_stocks(self.clock.now())
    }

    // =========================================================================
    // Watchlist / dislike list
    // =========================================================================

    fn list_key(kind: PreferenceType) -> &'static str {
        match kind {
            PreferenceType::Watchlist => DEMO_WATCHLIST_KEY,
            PreferenceType::Dislike => DEMO_DISLIKE_LIST_KEY,
        }
    }

    pub fn preferences(&self, kind: PreferenceType) -> Vec<StockPreference> {
        read_json(self.storage.as_ref(), Self::list_key(kind)).unwrap_or_default()
    }

    /// Add `ticker` to a list; adding one that is already there changes nothing
    pub fn add_preference(&self, kind: PreferenceType, ticker: &str) -> ClientResult<PreferenceChange> {
        let mut list = self.preferences(kind);

        if let Some(existing) = list.iter().find(|p| p.ticker == ticker) {
            return Ok(PreferenceChange {
                message: format!("Already in {}", kind.list_name()),
                preference: existing.clone(),
            });
        }

        let preference = StockPreference {
            id: next_id(list.iter().map(|p| p.id)),
            ticker: ticker.to_string(),
            preference_type: kind,
            created_at: self.clock.now(),
        };
        list.push(preference.clone());
        write_json(self.storage.as_ref(), Self::list_key(kind), &list)?;

        Ok(PreferenceChange {
            message: format!("Added to {}", kind.list_name()),
            preference,
        })
    }

    pub fn remove_preference(&self, kind: PreferenceType, ticker: &str) -> ClientResult<String> {
        let mut list = self.preferences(kind);
        list.retain(|p| p.ticker != ticker);
        write_json(self.storage.as_ref(), Self::list_key(kind), &list)?;

        Ok(format!("Removed {} from {}", ticker, kind.list_name()))
    }
}

/// One past the largest id in use, so ids stay unique after removals
fn next_id(ids: impl Iterator<Item = i64>) -> i64 {
    ids.max().unwrap_or(0) + 1
}
