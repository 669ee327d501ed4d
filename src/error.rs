use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Timeout error fetching information from {url}")]
    NetworkTimeout { url: String },

    #[error("Error fetching information from {url} - {message}")]
    NetworkConnection { url: String, message: String },

    #[error("Error parsing information from {url} - {message}")]
    ApiParse { message: String, url: String },

    #[error("API request failed ({status}): {message} (URL: {url})")]
    ApiFailure {
        status: u16,
        message: String,
        url: String,
    },

    #[error("Something really wrong happened! - {message}")]
    Unexpected { message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),
}

impl ApiError {
    /// Create a network timeout error
    pub fn network_timeout(url: impl Into<String>) -> Self {
        Self::NetworkTimeout { url: url.into() }
    }

    /// Create a network connection error
    pub fn network_connection(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NetworkConnection {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a parse error for malformed JSON or missing fields
    pub fn api_parse(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiParse {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an error for a non-success HTTP status
    pub fn api_failure(status: u16, message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiFailure {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an error for failures outside the other categories
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
        }
    }

    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Check if the error came from the network rather than the payload,
    /// so the caller's next poll tick may simply succeed
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            ApiError::NetworkTimeout { .. }
                | ApiError::NetworkConnection { .. }
                | ApiError::ApiFailure { status: 500..=599, .. }
        )
    }
}
