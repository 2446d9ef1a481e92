use crate::client::response;
use crate::demo::PreferenceChange;
use crate::{
    ApiRequest, AuthSession, ClientError, ClientResult, Clock, DemoMode, HEALTH_CACHE_KEY,
    LoginRedirect, Storage, TtlCache, UserState, ZODIAC_CACHE_KEY,
};

use std::sync::Arc;
use std::time::Duration;

use log::{debug, info, warn};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client as ReqwestClient, Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::json;
use zen_config::Config;
use zen_core::{
    HealthCheckResult, MarketStatus, OnboardingRequest, OnboardingResponse, OnboardingStatus,
    PreferenceType, ProfileRecord, StockPreference, TradeRequest, TradeResponse, UserHoldings,
    UserRecord, ZodiacMatchedStocks,
};

#[derive(Deserialize)]
struct WatchlistBody {
    #[serde(default)]
    watchlist: Vec<StockPreference>,
}

#[derive(Deserialize)]
struct DislikeListBody {
    #[serde(default)]
    dislike_list: Vec<StockPreference>,
}

#[derive(Deserialize)]
struct MessageBody {
    message: String,
}

/// Typed client for the ZEN Traders REST API.
///
/// Signed-in calls go through the [`AuthSession`]; while demo mode is on,
/// portfolio and preference calls are answered locally instead.
pub struct ZenClient {
    http: ReqwestClient,
    session: Arc<AuthSession>,
    cache: TtlCache,
    demo: DemoMode,
    health_timeout: Duration,
    market_timeout: Duration,
    health_ttl: Duration,
    zodiac_ttl: Duration,
    poll_interval: Duration,
}

impl ZenClient {
    pub fn new(
        config: &Config,
        storage: Arc<dyn Storage>,
        clock: Arc<dyn Clock>,
        redirect: Arc<dyn LoginRedirect>,
    ) -> Self {
        let http = ReqwestClient::new();
        let session = Arc::new(AuthSession::with_http(
            http.clone(),
            config.api.base_url(),
            Arc::clone(&storage),
            redirect,
            &config.session.login_path,
        ));

        Self {
            http,
            session,
            cache: TtlCache::new(Arc::clone(&storage), Arc::clone(&clock), &config.cache),
            demo: DemoMode::new(storage, clock),
            health_timeout: config.api.health_timeout(),
            market_timeout: config.api.market_timeout(),
            health_ttl: config.cache.health_ttl(),
            zodiac_ttl: config.cache.zodiac_ttl(),
            poll_interval: config.session.poll_interval(),
        }
    }

    pub fn session(&self) -> &Arc<AuthSession> {
        &self.session
    }

    pub fn cache(&self) -> &TtlCache {
        &self.cache
    }

    pub fn demo(&self) -> &DemoMode {
        &self.demo
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    /// Observable current user sharing this client's session, demo state and cache
    pub fn user_state(&self) -> Arc<UserState> {
        Arc::new(UserState::new(
            Arc::clone(&self.session),
            self.demo.clone(),
            self.cache.clone(),
        ))
    }

    /// Decode a successful response; a 401 that survived the refresh means
    /// the user has to sign in again
    async fn expect_json<T: DeserializeOwned>(
        response: Response,
        fallback: &str,
    ) -> ClientResult<T> {
        if response.status() == StatusCode::UNAUTHORIZED {
            return Err(ClientError::authentication_required());
        }
        response::parse_json(response, fallback).await
    }

    // =========================================================================
    // Public endpoints
    // =========================================================================

    /// Probe `/health/`. Healthy and unhealthy results are both cached briefly.
    pub async fn check_health(&self) -> HealthCheckResult {
        if let Some(cached) = self.cache.get::<HealthCheckResult>(HEALTH_CACHE_KEY) {
            debug!("Using cached health result");
            return cached;
        }

        let url = format!("{}/health/", self.session.base_url());
        let result = match self
            .http
            .get(&url)
            .header(CONTENT_TYPE, "application/json")
            .timeout(self.health_timeout)
            .send()
            .await
        {
            Ok(response) if response.status().is_success() => HealthCheckResult::healthy(),
            Ok(response) => {
                HealthCheckResult::unhealthy(format!("API returned {}", response.status()))
            }
            Err(e) => HealthCheckResult::unhealthy(e.to_string()),
        };

        if !result.is_healthy {
            warn!("Health check failed: {:?}", result.error);
        }

        self.cache
            .set_with_ttl(HEALTH_CACHE_KEY, &result, self.health_ttl);
        result
    }

    pub fn clear_health_cache(&self) {
        self.cache.clear(HEALTH_CACHE_KEY);
    }

    pub async fn market_status(&self) -> ClientResult<MarketStatus> {
        let response = self
            .http
            .get(self.session.api_url("market/status"))
            .header(CONTENT_TYPE, "application/json")
            .timeout(self.market_timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::api(
                status.as_u16(),
                format!("Failed to fetch market status: {status}"),
            ));
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    // =========================================================================
    // Onboarding
    // =========================================================================

    pub async fn onboarding_status(&self) -> ClientResult<OnboardingStatus> {
        let response = self
            .session
            .authenticated_request(ApiRequest::get(self.session.api_url("onboarding")))
            .await?;

        Self::expect_json(response, "Failed to fetch onboarding status").await
    }

    pub async fn submit_onboarding(
        &self,
        data: &OnboardingRequest,
    ) -> ClientResult<OnboardingResponse> {
        let request =
            ApiRequest::post(self.session.api_url("onboarding"), serde_json::to_value(data)?);
        let response = self.session.authenticated_request(request).await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(ClientError::authentication_required());
        }
        if !status.is_success() {
            return Err(
                response::validation_error(response, "Failed to submit onboarding data").await,
            );
        }

        let result: OnboardingResponse =
            response::parse_json(response, "Failed to submit onboarding data").await?;
        self.session.store_user(&result.user)?;

        info!("Onboarding completed for {}", result.user.email);
        Ok(result)
    }

    // =========================================================================
    // Watchlist / dislike list
    // =========================================================================

    fn preference_path(kind: PreferenceType) -> &'static str {
        match kind {
            PreferenceType::Watchlist => "watchlist",
            PreferenceType::Dislike => "dislike-list",
        }
    }

    pub async fn preferences(&self, kind: PreferenceType) -> ClientResult<Vec<StockPreference>> {
        if self.demo.is_enabled() {
            return Ok(self.demo.preferences(kind));
        }

        let url = self.session.api_url(Self::preference_path(kind));
        let response = self
            .session
            .authenticated_request(ApiRequest::get(url))
            .await?;
        let fallback = format!("Failed to fetch {}", kind.list_name());

        Ok(match kind {
            PreferenceType::Watchlist => {
                Self::expect_json::<WatchlistBody>(response, &fallback)
                    .await?
                    .watchlist
            }
            PreferenceType::Dislike => {
                Self::expect_json::<DislikeListBody>(response, &fallback)
                    .await?
                    .dislike_list
            }
        })
    }

    pub async fn add_preference(
        &self,
        kind: PreferenceType,
        ticker: &str,
    ) -> ClientResult<PreferenceChange> {
        if self.demo.is_enabled() {
            return self.demo.add_preference(kind, ticker);
        }

        let url = self.session.api_url(Self::preference_path(kind));
        let response = self
            .session
            .authenticated_request(ApiRequest::post(url, json!({ "ticker": ticker })))
            .await?;

        Self::expect_json(response, &format!("Failed to add to {}", kind.list_name())).await
    }

    pub async fn remove_preference(&self, kind: PreferenceType, ticker: &str) -> ClientResult<String> {
        if self.demo.is_enabled() {
            return self.demo.remove_preference(kind, ticker);
        }

        let url = self.session.api_url(Self::preference_path(kind));
        let response = self
            .session
            .authenticated_request(ApiRequest::delete(url, json!({ "ticker": ticker })))
            .await?;

        let body: MessageBody = Self::expect_json(
            response,
            &format!("Failed to remove from {}", kind.list_name()),
        )
        .await?;
        Ok(body.message)
    }

    pub async fn watchlist(&self) -> ClientResult<Vec<StockPreference>> {
        self.preferences(PreferenceType::Watchlist).await
    }

    pub async fn add_to_watchlist(&self, ticker: &str) -> ClientResult<PreferenceChange> {
        self.add_preference(PreferenceType::Watchlist, ticker).await
    }

    pub async fn remove_from_watchlist(&self, ticker: &str) -> ClientResult<String> {
        self.remove_preference(PreferenceType::Watchlist, ticker).await
    }

    pub async fn dislike_list(&self) -> ClientResult<Vec<StockPreference>> {
        self.preferences(PreferenceType::Dislike).await
    }

    pub async fn add_to_dislike_list(&self, ticker: &str) -> ClientResult<PreferenceChange> {
        self.add_preference(PreferenceType::Dislike, ticker).await
    }

    pub async fn remove_from_dislike_list(&self, ticker: &str) -> ClientResult<String> {
        self.remove_preference(PreferenceType::Dislike, ticker).await
    }

    // =========================================================================
    // Holdings
    // =========================================================================

    pub async fn holdings(&self) -> ClientResult<UserHoldings> {
        if self.demo.is_enabled() {
            return Ok(self.demo.holdings());
        }

        let response = self
            .session
            .authenticated_request(ApiRequest::get(self.session.api_url("holdings")))
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ClientError::api(
                404,
                "Holdings not found. Please complete onboarding first.",
            ));
        }

        Self::expect_json(response, "Failed to fetch holdings").await
    }

    pub async fn execute_trade(&self, trade: &TradeRequest) -> ClientResult<TradeResponse> {
        trade.validate()?;

        if self.demo.is_enabled() {
            return self.demo.execute_trade(trade);
        }

        info!(
            "Executing {} of {} {}",
            trade.action, trade.quantity, trade.ticker
        );

        let request =
            ApiRequest::post(self.session.api_url("holdings"), serde_json::to_value(trade)?);
        let response = self.session.authenticated_request(request).await?;

        let fallback = match response.status() {
            StatusCode::BAD_REQUEST => "Invalid trade request",
            StatusCode::NOT_FOUND => "Holdings or position not found",
            _ => "Failed to execute trade",
        };
        Self::expect_json(response, fallback).await
    }

    // =========================================================================
    // Demo mode
    // =========================================================================

    // Switching modes drops cached zodiac matches

    pub fn enable_demo(&self, profile: ProfileRecord) -> ClientResult<UserRecord> {
        let user = self.demo.enable(profile)?;
        self.cache.clear(ZODIAC_CACHE_KEY);
        Ok(user)
    }

    pub fn disable_demo(&self) {
        self.demo.disable();
        self.cache.clear(ZODIAC_CACHE_KEY);
    }

    /// Leave demo mode and drop its portfolio and lists
    pub fn reset_demo(&self) {
        self.demo.clear();
        self.cache.clear(ZODIAC_CACHE_KEY);
    }

    // =========================================================================
    // Zodiac matches
    // =========================================================================

    /// Stocks matched to the user's sign, served from cache unless `force_refresh`
    pub async fn zodiac_matched_stocks(
        &self,
        force_refresh: bool,
    ) -> ClientResult<ZodiacMatchedStocks> {
        if !force_refresh
            && let Some(cached) = self.cache.get::<ZodiacMatchedStocks>(ZODIAC_CACHE_KEY)
        {
            debug!("Using cached zodiac matched stocks");
            return Ok(cached);
        }

        let result = if self.demo.is_enabled() {
            self.demo.matched_stocks()
        } else {
            let response = self
                .session
                .authenticated_request(ApiRequest::get(
                    self.session.api_url("zodiac/matched-stocks"),
                ))
                .await?;
            Self::expect_json(response, "Failed to fetch zodiac matched stocks").await?
        };

        self.cache
            .set_with_ttl(ZODIAC_CACHE_KEY, &result, self.zodiac_ttl);
        Ok(result)
    }
}
