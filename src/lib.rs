//! Swedish Hockey League (SHL) Open API client library
//!
//! This library authenticates against the SHL Open API using the OAuth2
//! client-credentials flow and provides read-only access to games, articles,
//! player/goalie/team statistics, teams and videos.
//!
//! # Examples
//!
//! ```rust,no_run
//! use shl_api::api::{create_http_client, ShlApiClient};
//! use shl_api::error::ApiError;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), ApiError> {
//!     let session = create_http_client()
//!         .map_err(|e| ApiError::config_error(e.to_string()))?;
//!     let client = ShlApiClient::new(
//!         "my-client-id",
//!         "my-client-secret",
//!         vec!["HV71".to_string()],
//!         session,
//!     );
//!
//!     client.connect().await?;
//!
//!     // Games of the 2022 season, scoped to the default team filter
//!     let games = client.get_games(2022, client.default_team_ids()).await?;
//!     println!("{games}");
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;

// Re-export commonly used types for convenience
pub use api::{create_http_client, CombinedData, ShlApiClient, TokenResponse};
pub use config::Config;
pub use error::ApiError;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
