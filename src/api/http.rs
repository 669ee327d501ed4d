//! HTTP client creation and configuration utilities.
//!
//! `ShlApiClient` never builds or drops the session it uses; the owner
//! supplies one. This builder exists for callers who do not already pool a
//! `reqwest::Client` elsewhere.

use reqwest::Client;

/// Creates an HTTP client with connection pooling suitable for handing to
/// [`ShlApiClient`](crate::api::ShlApiClient). The per-call timeout is
/// applied by the client itself, not here, so the session stays usable for
/// unrelated traffic.
pub fn create_http_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .pool_max_idle_per_host(crate::constants::HTTP_POOL_MAX_IDLE_PER_HOST)
        .build()
}

/// Creates an HTTP client for testing
#[cfg(test)]
pub fn create_test_http_client() -> Client {
    create_http_client().expect("Failed to create test HTTP client")
}
