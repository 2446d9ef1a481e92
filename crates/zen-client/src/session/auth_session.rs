use crate::client::response;
use crate::session::{ApiRequest, AuthState, LoginRedirect};
use crate::storage::{read_json, write_json};
use crate::{ClientError, ClientResult, Storage, TOKENS_KEY, USER_KEY};

use std::sync::Arc;

use log::{debug, error, info, warn};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client as ReqwestClient, Response};
use serde_json::json;
use zen_config::Config;
use zen_core::{LoginCredentials, RegisterRequest, TokenPair, UserRecord};

/// Tokens and user returned by a successful login or registration
#[derive(Debug, Clone, PartialEq)]
pub struct AuthOutcome {
    pub user: UserRecord,
    pub tokens: TokenPair,
}

/// Bearer-token session persisted in client storage.
///
/// Owns the token pair and the cached user record. Requests made through
/// [`AuthSession::authenticated_request`] recover from one expired access
/// token by refreshing and retrying once; anything beyond that ends the
/// session and sends the user to the login page.
pub struct AuthSession {
    http: ReqwestClient,
    base_url: String,
    storage: Arc<dyn Storage>,
    redirect: Arc<dyn LoginRedirect>,
    login_path: String,
}

impl AuthSession {
    /// Create a session against `base_url` (e.g., "http://localhost:42069")
    pub fn new(
        base_url: &str,
        storage: Arc<dyn Storage>,
        redirect: Arc<dyn LoginRedirect>,
        login_path: &str,
    ) -> Self {
        Self::with_http(ReqwestClient::new(), base_url, storage, redirect, login_path)
    }

    pub fn with_http(
        http: ReqwestClient,
        base_url: &str,
        storage: Arc<dyn Storage>,
        redirect: Arc<dyn LoginRedirect>,
        login_path: &str,
    ) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            storage,
            redirect,
            login_path: login_path.to_string(),
        }
    }

    pub fn from_config(
        config: &Config,
        storage: Arc<dyn Storage>,
        redirect: Arc<dyn LoginRedirect>,
    ) -> Self {
        Self::new(
            config.api.base_url(),
            storage,
            redirect,
            &config.session.login_path,
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn storage(&self) -> &Arc<dyn Storage> {
        &self.storage
    }

    /// `/api/<path>/` under the backend root, always with one trailing slash
    pub fn api_url(&self, path: &str) -> String {
        format!("{}/api/{}/", self.base_url, path.trim_matches('/'))
    }

    // =========================================================================
    // Persisted state
    // =========================================================================

    pub fn current_tokens(&self) -> Option<TokenPair> {
        read_json(self.storage.as_ref(), TOKENS_KEY)
    }

    pub fn stored_user(&self) -> Option<UserRecord> {
        read_json(self.storage.as_ref(), USER_KEY)
    }

    /// True when a token pair with a non-empty access token is stored.
    /// The refresh token plays no part.
    pub fn is_authenticated(&self) -> bool {
        self.current_tokens().is_some_and(|tokens| tokens.has_access())
    }

    pub fn store_tokens(&self, tokens: &TokenPair) -> ClientResult<()> {
        write_json(self.storage.as_ref(), TOKENS_KEY, tokens)?;
        Ok(())
    }

    pub fn store_user(&self, user: &UserRecord) -> ClientResult<()> {
        write_json(self.storage.as_ref(), USER_KEY, user)?;
        Ok(())
    }

    /// Forget the token pair and the stored user
    pub fn clear_auth_state(&self) {
        for key in [TOKENS_KEY, USER_KEY] {
            if let Err(e) = self.storage.remove_item(key) {
                error!("Failed to remove '{key}' from storage: {e}");
            }
        }
    }

    pub fn logout(&self) {
        info!("Logging out");
        self.clear_auth_state();
    }

    fn end_session(&self) {
        self.clear_auth_state();
        self.redirect.redirect_to_login(&self.login_path);
    }

    // =========================================================================
    // Authenticated requests
    // =========================================================================

    /// Send `request` with the stored bearer token.
    ///
    /// Any response other than a 401 is returned as is. A 401 triggers one
    /// token refresh; if that works the request is sent again with the new
    /// token and the second response is returned whatever its status. When
    /// there is no token to begin with, or the refresh fails, stored auth
    /// state is cleared, the login redirect fires and the call fails.
    pub async fn authenticated_request(&self, request: ApiRequest) -> ClientResult<Response> {
        let mut access = self
            .current_tokens()
            .filter(TokenPair::has_access)
            .map(|tokens| tokens.access);
        let mut state = AuthState::start(access.is_some());

        loop {
            match state {
                AuthState::Unauthenticated => {
                    debug!("No access token for {} {}", request.method, request.url);
                    self.end_session();
                    return Err(ClientError::authentication_required());
                }
                AuthState::Authenticated(attempt) => {
                    let token = access.as_deref().unwrap_or_default();
                    let response = self.send(&request, token).await?;
                    debug!(
                        "{} {} -> {} ({:?})",
                        request.method,
                        request.url,
                        response.status(),
                        attempt
                    );

                    match state.after_response(response.status().as_u16()) {
                        Some(next) => state = next,
                        None => return Ok(response),
                    }
                }
                AuthState::Refreshing => {
                    info!("Access token rejected, refreshing");
                    let refreshed = self.refresh_tokens().await;
                    state = state.after_refresh(refreshed.is_some());
                    access = refreshed.map(|tokens| tokens.access);
                }
                AuthState::Failed => {
                    warn!("Token refresh failed, ending session");
                    self.end_session();
                    return Err(ClientError::session_expired());
                }
            }
        }
    }

    async fn send(&self, request: &ApiRequest, access: &str) -> ClientResult<Response> {
        let headers = Self::build_headers(request, access)?;
        let mut builder = self
            .http
            .request(request.method.clone(), &request.url)
            .headers(headers);

        if let Some(ref body) = request.body {
            builder = builder.json(body);
        }

        Ok(builder.send().await?)
    }

    fn build_headers(request: &ApiRequest, access: &str) -> ClientResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        for (name, value) in &request.headers {
            let name = HeaderName::try_from(name.as_str())
                .map_err(|_| ClientError::validation(format!("Invalid header name '{name}'")))?;
            if name == AUTHORIZATION {
                continue;
            }
            let value = HeaderValue::try_from(value.as_str())
                .map_err(|_| ClientError::validation(format!("Invalid value for header '{name}'")))?;
            headers.insert(name, value);
        }

        let bearer = HeaderValue::try_from(format!("Bearer {access}"))
            .map_err(|_| ClientError::validation("Stored access token is not a valid header"))?;
        headers.insert(AUTHORIZATION, bearer);

        Ok(headers)
    }

    // =========================================================================
    // Token lifecycle
    // =========================================================================

    /// Exchange the stored refresh token for a new pair.
    ///
    /// Never fails: on any problem the stored auth state is cleared and `None`
    /// comes back, which callers treat as "session is over".
    pub async fn refresh_tokens(&self) -> Option<TokenPair> {
        let refresh = match self.current_tokens() {
            Some(tokens) if tokens.has_refresh() => tokens.refresh,
            _ => {
                debug!("No refresh token stored");
                self.clear_auth_state();
                return None;
            }
        };

        match self.request_refresh(&refresh).await {
            Ok(tokens) => {
                debug!("Refreshed tokens, access {}", tokens.access_preview());
                Some(tokens)
            }
            Err(e) => {
                warn!("Token refresh failed: {e}");
                self.clear_auth_state();
                None
            }
        }
    }

    async fn request_refresh(&self, refresh: &str) -> ClientResult<TokenPair> {
        let response = self
            .http
            .post(self.api_url("auth/token/refresh"))
            .json(&json!({ "refresh": refresh }))
            .send()
            .await?;

        let tokens: TokenPair = response::parse_json(response, "Token refresh failed").await?;
        if !tokens.has_access() {
            return Err(ClientError::validation("Refresh returned an empty access token"));
        }

        self.store_tokens(&tokens)?;
        Ok(tokens)
    }

    pub async fn login(&self, credentials: &LoginCredentials) -> ClientResult<AuthOutcome> {
        info!("Logging in as {}", credentials.email);

        let tokens = self.obtain_tokens(credentials, "Login failed").await?;
        let user = self.fetch_user_with(&tokens.access).await?;

        self.store_tokens(&tokens)?;
        self.store_user(&user)?;

        Ok(AuthOutcome { user, tokens })
    }

    /// Create an account, then sign in with the same credentials
    pub async fn register(&self, data: &RegisterRequest) -> ClientResult<AuthOutcome> {
        info!("Registering {}", data.email);

        let response = self
            .http
            .post(self.api_url("register"))
            .json(data)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(response::validation_error(response, "Registration failed").await);
        }

        let user: UserRecord = response::parse_json(response, "Registration failed").await?;
        let tokens = self
            .obtain_tokens(
                &data.credentials(),
                "Registration successful but auto-login failed",
            )
            .await?;

        self.store_tokens(&tokens)?;
        self.store_user(&user)?;

        Ok(AuthOutcome { user, tokens })
    }

    async fn obtain_tokens(
        &self,
        credentials: &LoginCredentials,
        fallback: &str,
    ) -> ClientResult<TokenPair> {
        let response = self
            .http
            .post(self.api_url("auth/token"))
            .json(credentials)
            .send()
            .await?;

        response::parse_json(response, fallback).await
    }

    async fn fetch_user_with(&self, access: &str) -> ClientResult<UserRecord> {
        let response = self
            .http
            .get(self.api_url("users/me"))
            .bearer_auth(access)
            .send()
            .await?;

        response::parse_json(response, "Failed to fetch user data").await
    }

    /// Fetch the signed-in user and remember it
    pub async fn fetch_current_user(&self) -> ClientResult<UserRecord> {
        let response = self
            .authenticated_request(ApiRequest::get(self.api_url("users/me")))
            .await?;

        let user: UserRecord = response::parse_json(response, "Failed to fetch user data").await?;
        self.store_user(&user)?;
        Ok(user)
    }
}
