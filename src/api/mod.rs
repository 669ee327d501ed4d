//! SHL Open API access: the authenticated client, URL builders and response
//! models.

pub mod client;
pub mod http;
pub mod models;
pub mod urls;

pub use client::ShlApiClient;
pub use http::create_http_client;
pub use models::{CombinedData, TokenResponse};
pub use urls::{build_game_url, build_team_url, generate_url, join_team_ids};
