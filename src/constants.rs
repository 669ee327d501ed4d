//! Application-wide constants and configuration values
//!
//! This module centralizes the upstream API endpoints, timeouts and the
//! documented statistics sort keys so they are defined in exactly one place.

#![allow(dead_code)]

/// Base host for the SHL Open API
pub const BASE_URL: &str = "https://openapi.shl.se";

/// OAuth2 token endpoint, relative to the base host
pub const AUTH_PATH: &str = "/oauth2/token";

/// Per-call timeout in seconds, bounding the whole exchange including
/// connection setup
pub const REQUEST_TIMEOUT_SECONDS: u64 = 10;

/// Maximum number of idle connections per host kept by the convenience
/// HTTP client builder
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 10;

/// Documented sort keys for the two statistics endpoints.
///
/// The upstream API accepts these as the `sort` query parameter. The client
/// passes the parameter through unvalidated, so unknown keys reach the API
/// untouched and fail there.
pub mod sort_keys {
    /// Sort keys accepted by `statistics/players.json`
    pub const PLAYER: &[&str] = &["assists", "goals", "points", "pim", "hits", "plusminus"];

    /// Default player sort key
    pub const PLAYER_DEFAULT: &str = "plusminus";

    /// Sort keys accepted by `statistics/goalkeepers.json`
    pub const GOALIE: &[&str] = &[
        "saves",
        "savesPercent",
        "goalsAgainst",
        "goalsAgainstAverage",
        "won",
        "tied",
        "lost",
        "shootOuts",
        "minutesInPlay",
    ];

    /// Default goalie sort key
    pub const GOALIE_DEFAULT: &str = "savesPercent";
}

/// Environment variable names
pub mod env_vars {
    /// Override the API host (used by tests and self-hosted mirrors)
    pub const API_DOMAIN: &str = "SHL_API_DOMAIN";

    /// Override the OAuth2 client id from the config file
    pub const CLIENT_ID: &str = "SHL_CLIENT_ID";

    /// Override the OAuth2 client secret from the config file
    pub const CLIENT_SECRET: &str = "SHL_CLIENT_SECRET";

    /// Override the default team filter, comma-separated (e.g. "HV71,LHC")
    pub const TEAM_IDS: &str = "SHL_TEAM_IDS";

    /// Override the log file path
    pub const LOG_FILE: &str = "SHL_LOG_FILE";
}
