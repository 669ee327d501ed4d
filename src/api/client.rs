//! Authenticated client for the SHL Open API.
//!
//! The client owns nothing but credentials and the current auth snapshot;
//! the HTTP session is supplied by the caller. Every fetch operation funnels
//! through one request executor that bounds the whole exchange with a fixed
//! timeout and maps failures onto [`ApiError`].

use chrono::{DateTime, Duration, Utc};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, Method, StatusCode};
use serde_json::Value;
use std::sync::RwLock;
use std::time::Duration as StdDuration;
use tracing::{debug, error, info, instrument};

use super::models::{CombinedData, TokenResponse};
use super::urls::{build_game_url, build_team_url, generate_url, join_team_ids};
use crate::constants::{AUTH_PATH, BASE_URL, REQUEST_TIMEOUT_SECONDS};
use crate::error::ApiError;

/// Immutable auth snapshot, swapped whole on every successful `connect()` so
/// a request racing a reconnect sees either the old pair or the new pair,
/// never a mix.
#[derive(Debug, Clone)]
struct AuthState {
    headers: HeaderMap,
    expires: DateTime<Utc>,
}

/// Access the Open API of the Swedish national hockey league (SHL).
///
/// All fetch operations are read-only GETs returning the parsed JSON payload
/// for the resource. The only write the client ever issues is the OAuth2
/// token POST in [`connect`](Self::connect).
pub struct ShlApiClient {
    client_id: String,
    client_secret: String,
    team_ids: Vec<String>,
    session: Client,
    api_domain: String,
    timeout: StdDuration,
    auth: RwLock<Option<AuthState>>,
}

impl ShlApiClient {
    /// Creates a client against the production API host.
    ///
    /// `team_ids` is the default team filter for callers that scope by
    /// configuration rather than per call; an empty filter means no scoping.
    /// `session` is caller-owned and may be shared with unrelated traffic.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        team_ids: Vec<String>,
        session: Client,
    ) -> Self {
        Self::with_base_url(client_id, client_secret, team_ids, session, BASE_URL)
    }

    /// Creates a client against a custom API host. Used by tests and
    /// self-hosted mirrors.
    pub fn with_base_url(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        team_ids: Vec<String>,
        session: Client,
        api_domain: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            team_ids,
            session,
            api_domain: api_domain.into(),
            timeout: StdDuration::from_secs(REQUEST_TIMEOUT_SECONDS),
            auth: RwLock::new(None),
        }
    }

    /// Overrides the per-call timeout. The default is 10 seconds.
    pub fn with_request_timeout(mut self, timeout: StdDuration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The default team filter supplied at construction.
    pub fn default_team_ids(&self) -> &[String] {
        &self.team_ids
    }

    /// Authorizes the client using the supplied credentials.
    ///
    /// Issues the OAuth2 client-credentials POST, stores the bearer token
    /// with its absolute expiry and builds the default header set used by
    /// every subsequent request. Returns the raw token response body.
    #[instrument(skip(self))]
    pub async fn connect(&self) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.api_domain, AUTH_PATH);
        let form = [
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
            ("grant_type", "client_credentials"),
        ];

        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, user_agent_value()?);

        info!("Requesting access token from {}", url);
        let (_, body_text) = self
            .request_text(Method::POST, &url, Some(&form), headers, None)
            .await?;

        let body: Value = parse_json(&body_text, &url)?;
        let token: TokenResponse =
            serde_json::from_value(body.clone()).map_err(|e| log_parse_error(&url, &e))?;

        let expires = Utc::now() + Duration::seconds(token.expires_in);
        let headers = default_headers(&token.access_token)?;
        info!(
            "Access token acquired, valid for {} seconds",
            token.expires_in
        );

        let mut guard = self.auth.write().unwrap_or_else(|p| p.into_inner());
        *guard = Some(AuthState { headers, expires });
        drop(guard);

        Ok(body)
    }

    /// Checks if the stored authorization is still valid. Pure, no I/O.
    pub fn is_connected(&self) -> bool {
        let guard = self.auth.read().unwrap_or_else(|p| p.into_inner());
        matches!(&*guard, Some(auth) if auth.expires > Utc::now())
    }

    /// Fetches the latest articles, optionally scoped to a team filter.
    #[instrument(skip(self))]
    pub async fn get_articles(&self, team_ids: &[String]) -> Result<Value, ApiError> {
        let url = generate_url(&self.api_domain, "articles.json", 0);
        let params = scoping_params("teamIds", team_ids, &[]);
        self.get_json(&url, params).await
    }

    /// Fetches the games of a season, optionally scoped to a team filter.
    #[instrument(skip(self))]
    pub async fn get_games(&self, season: u32, team_ids: &[String]) -> Result<Value, ApiError> {
        let url = generate_url(&self.api_domain, "games.json", season);
        let params = scoping_params("teamIds", team_ids, &[]);
        self.get_json(&url, params).await
    }

    /// Fetches a single game of a season by match id.
    #[instrument(skip(self))]
    pub async fn get_game(&self, season: u32, match_id: &str) -> Result<Value, ApiError> {
        let url = build_game_url(&self.api_domain, season, match_id);
        self.get_json(&url, None).await
    }

    /// Fetches the top players of a season ranked by `sort`.
    ///
    /// `sort` may be `assists`, `goals`, `points`, `pim`, `hits` or
    /// `plusminus` (see [`constants::sort_keys::PLAYER`](crate::constants::sort_keys::PLAYER)).
    /// The key is passed through unvalidated; unknown keys fail upstream.
    #[instrument(skip(self))]
    pub async fn get_player_stats(
        &self,
        season: u32,
        sort: &str,
        team_ids: &[String],
    ) -> Result<Value, ApiError> {
        let url = generate_url(&self.api_domain, "statistics/players.json", season);
        let params = scoping_params("team_ids", team_ids, &[("sort", sort.to_string())]);
        self.get_json(&url, params).await
    }

    /// Fetches the top goalkeepers of a season ranked by `sort`.
    ///
    /// `sort` may be `saves`, `savesPercent`, `goalsAgainst`,
    /// `goalsAgainstAverage`, `won`, `tied`, `lost`, `shootOuts` or
    /// `minutesInPlay` (see [`constants::sort_keys::GOALIE`](crate::constants::sort_keys::GOALIE)).
    #[instrument(skip(self))]
    pub async fn get_goalie_stats(
        &self,
        season: u32,
        sort: &str,
        team_ids: &[String],
    ) -> Result<Value, ApiError> {
        let url = generate_url(&self.api_domain, "statistics/goalkeepers.json", season);
        let params = scoping_params("team_ids", team_ids, &[("sort", sort.to_string())]);
        self.get_json(&url, params).await
    }

    /// Fetches all current SHL teams.
    #[instrument(skip(self))]
    pub async fn get_teams(&self) -> Result<Value, ApiError> {
        let url = generate_url(&self.api_domain, "teams.json", 0);
        self.get_json(&url, None).await
    }

    /// Fetches the team standings of a season, optionally scoped to a team
    /// filter. Note the snake_case parameter name on statistics endpoints.
    #[instrument(skip(self))]
    pub async fn get_team_stats(
        &self,
        season: u32,
        team_ids: &[String],
    ) -> Result<Value, ApiError> {
        let url = generate_url(&self.api_domain, "statistics/teams/standings.json", season);
        let params = scoping_params("team_ids", team_ids, &[]);
        self.get_json(&url, params).await
    }

    /// Fetches one team's roster, staff and team facts by team code.
    #[instrument(skip(self))]
    pub async fn get_team(&self, team_code: &str) -> Result<Value, ApiError> {
        let url = build_team_url(&self.api_domain, team_code);
        self.get_json(&url, None).await
    }

    /// Fetches the latest videos, optionally scoped to a team filter.
    #[instrument(skip(self))]
    pub async fn get_videos(&self, team_ids: &[String]) -> Result<Value, ApiError> {
        let url = generate_url(&self.api_domain, "videos.json", 0);
        let params = scoping_params("team_ids", team_ids, &[]);
        self.get_json(&url, params).await
    }

    /// Fetches the season's games and the latest articles in one call.
    /// The two sub-fetches run sequentially; a failure in either aborts the
    /// aggregate with that failure.
    #[instrument(skip(self))]
    pub async fn get_data(&self, season: u32, team_ids: &[String]) -> Result<CombinedData, ApiError> {
        let games = self.get_games(season, team_ids).await?;
        let articles = self.get_articles(team_ids).await?;
        Ok(CombinedData { games, articles })
    }

    /// Performs a GET through the request executor and parses the JSON body.
    async fn get_json(
        &self,
        url: &str,
        params: Option<Vec<(&'static str, String)>>,
    ) -> Result<Value, ApiError> {
        match self
            .api_wrapper(Method::GET, url, None, None, params)
            .await?
        {
            Some(value) => Ok(value),
            // GET always carries a payload; reaching this means the executor
            // contract was broken.
            None => Err(log_unexpected(format!("empty response body from {url}"))),
        }
    }

    /// Shared low-level request executor.
    ///
    /// Without an explicit header override the executor reconnects first
    /// whenever the stored token is missing or expired. GETs return the
    /// parsed JSON body; PUT/PATCH/POST are fire-and-forget and return no
    /// payload. Every failure is logged once here with a category-specific
    /// message and returned as a typed error.
    async fn api_wrapper(
        &self,
        method: Method,
        url: &str,
        form: Option<&[(&str, &str)]>,
        headers: Option<HeaderMap>,
        params: Option<Vec<(&'static str, String)>>,
    ) -> Result<Option<Value>, ApiError> {
        let headers = match headers {
            Some(headers) => headers,
            None => {
                if !self.is_connected() {
                    info!("Not connected, acquiring a fresh access token");
                    self.connect().await?;
                }
                self.auth_headers()
                    .ok_or_else(|| log_unexpected(format!("no auth headers available for {url}")))?
            }
        };

        let is_get = method == Method::GET;
        let (_, body_text) = self
            .request_text(method, url, form, headers, params)
            .await?;

        if is_get {
            let value = parse_json(&body_text, url)?;
            Ok(Some(value))
        } else {
            Ok(None)
        }
    }

    /// Issues one HTTP call bounded by the per-call timeout, including
    /// connection setup and body download. Maps transport failures and
    /// non-success statuses onto the error taxonomy.
    async fn request_text(
        &self,
        method: Method,
        url: &str,
        form: Option<&[(&str, &str)]>,
        headers: HeaderMap,
        params: Option<Vec<(&'static str, String)>>,
    ) -> Result<(StatusCode, String), ApiError> {
        debug!("Issuing {} {}", method, url);
        let exchange = async {
            let mut request = self.session.request(method, url).headers(headers);
            if let Some(params) = &params {
                request = request.query(params);
            }
            if let Some(form) = form {
                request = request.form(form);
            }
            let response = request.send().await?;
            let status = response.status();
            let body = response.text().await?;
            Ok::<(StatusCode, String), reqwest::Error>((status, body))
        };

        let (status, body) = match tokio::time::timeout(self.timeout, exchange).await {
            Err(_) => {
                error!("Timeout error fetching information from {}", url);
                return Err(ApiError::network_timeout(url));
            }
            Ok(Err(e)) => {
                error!("Error fetching information from {} - {}", url, e);
                return Err(ApiError::network_connection(url, e.to_string()));
            }
            Ok(Ok(result)) => result,
        };

        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or("Unknown error");
            error!("API request failed ({}) for {}: {}", status, url, reason);
            return Err(ApiError::api_failure(status.as_u16(), reason, url));
        }

        debug!("Response from {}: {} bytes", url, body.len());
        Ok((status, body))
    }

    /// Clones the current header snapshot if the token is still valid.
    fn auth_headers(&self) -> Option<HeaderMap> {
        let guard = self.auth.read().unwrap_or_else(|p| p.into_inner());
        guard
            .as_ref()
            .filter(|auth| auth.expires > Utc::now())
            .map(|auth| auth.headers.clone())
    }
}

impl std::fmt::Debug for ShlApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShlApiClient")
            .field("client_id", &self.client_id)
            .field("team_ids", &self.team_ids)
            .field("api_domain", &self.api_domain)
            .field("connected", &self.is_connected())
            .finish_non_exhaustive()
    }
}

/// Builds the optional query parameter list for a fetch operation. An empty
/// team filter contributes no parameter at all, never an empty string.
fn scoping_params(
    param_name: &'static str,
    team_ids: &[String],
    base: &[(&'static str, String)],
) -> Option<Vec<(&'static str, String)>> {
    let mut params: Vec<(&'static str, String)> = base.to_vec();
    if let Some(joined) = join_team_ids(team_ids) {
        params.push((param_name, joined));
    }
    if params.is_empty() { None } else { Some(params) }
}

/// Default header set for authenticated calls.
fn default_headers(access_token: &str) -> Result<HeaderMap, ApiError> {
    let mut headers = HeaderMap::new();
    headers.insert(
        CONTENT_TYPE,
        HeaderValue::from_static("application/json; charset=UTF-8"),
    );
    headers.insert(USER_AGENT, user_agent_value()?);
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {access_token}"))
            .map_err(|e| ApiError::unexpected(format!("invalid access token: {e}")))?,
    );
    Ok(headers)
}

fn user_agent_value() -> Result<HeaderValue, ApiError> {
    HeaderValue::from_str(&format!("{}/{}", crate::NAME, crate::VERSION))
        .map_err(|e| ApiError::unexpected(format!("invalid user agent: {e}")))
}

fn parse_json(body: &str, url: &str) -> Result<Value, ApiError> {
    serde_json::from_str(body).map_err(|e| log_parse_error(url, &e))
}

fn log_parse_error(url: &str, e: &dyn std::fmt::Display) -> ApiError {
    error!("Error parsing information from {} - {}", url, e);
    ApiError::api_parse(e.to_string(), url)
}

fn log_unexpected(message: String) -> ApiError {
    error!("Something really wrong happened! - {}", message);
    ApiError::unexpected(message)
}
