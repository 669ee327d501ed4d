//! Response models for the SHL Open API.
//!
//! Resource payloads are returned as raw `serde_json::Value` because the
//! upstream schema differs per resource and the consumer republished them
//! wholesale. Only the token response is strongly typed since the client
//! itself depends on its fields.

use serde::{Deserialize, Serialize};

/// Body of a successful `POST /oauth2/token` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Opaque bearer credential sent on subsequent requests
    pub access_token: String,
    /// Token lifetime in seconds from the time of issue
    pub expires_in: i64,
}

/// Combined payload returned by the aggregate fetch: the latest games for a
/// season together with the latest articles, both scoped by the same team
/// filter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombinedData {
    pub games: serde_json::Value,
    pub articles: serde_json::Value,
}
