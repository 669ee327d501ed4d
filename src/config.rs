use crate::constants::{env_vars, BASE_URL};
use crate::error::ApiError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Configuration for the CLI binary.
///
/// The library takes credentials as explicit arguments; this struct only
/// exists so the binary can keep them in a TOML file in the platform config
/// directory, with environment variables taking precedence.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// OAuth2 client id issued by the SHL Open API portal.
    pub client_id: String,
    /// OAuth2 client secret. Redacted when the config is displayed.
    pub client_secret: String,
    /// Default team filter, e.g. ["HV71", "LHC"]. Empty means no scoping.
    #[serde(default)]
    pub team_ids: Vec<String>,
    /// API host. Should include the https:// prefix.
    #[serde(default = "default_api_domain")]
    pub api_domain: String,
    /// Path to the log file. If not specified, logs go to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
}

fn default_api_domain() -> String {
    BASE_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            client_id: String::new(),
            client_secret: String::new(),
            team_ids: Vec::new(),
            api_domain: default_api_domain(),
            log_file_path: None,
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location, then
    /// applies environment variable overrides (`SHL_CLIENT_ID`,
    /// `SHL_CLIENT_SECRET`, `SHL_TEAM_IDS`, `SHL_API_DOMAIN`,
    /// `SHL_LOG_FILE`) and validates the result.
    pub async fn load() -> Result<Self, ApiError> {
        Self::load_from_path(&Self::get_config_path()).await
    }

    /// Loads configuration from an explicit path. Missing file yields the
    /// defaults, which only pass validation once env overrides fill in the
    /// credentials.
    pub async fn load_from_path(config_path: &str) -> Result<Self, ApiError> {
        let mut config = if Path::new(config_path).exists() {
            let content = fs::read_to_string(config_path).await?;
            toml::from_str(&content)?
        } else {
            Config::default()
        };

        if let Ok(client_id) = std::env::var(env_vars::CLIENT_ID) {
            config.client_id = client_id;
        }
        if let Ok(client_secret) = std::env::var(env_vars::CLIENT_SECRET) {
            config.client_secret = client_secret;
        }
        if let Ok(team_ids) = std::env::var(env_vars::TEAM_IDS) {
            config.team_ids = team_ids
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
        }
        if let Ok(api_domain) = std::env::var(env_vars::API_DOMAIN) {
            config.api_domain = api_domain;
        }
        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            config.log_file_path = Some(log_file_path);
        }

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration settings.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.client_id.trim().is_empty() {
            return Err(ApiError::config_error(
                "client_id is missing; set it in the config file or via SHL_CLIENT_ID",
            ));
        }
        if self.client_secret.trim().is_empty() {
            return Err(ApiError::config_error(
                "client_secret is missing; set it in the config file or via SHL_CLIENT_SECRET",
            ));
        }
        if !self.api_domain.starts_with("http://") && !self.api_domain.starts_with("https://") {
            return Err(ApiError::config_error(format!(
                "api_domain must include an http(s):// prefix: {}",
                self.api_domain
            )));
        }
        Ok(())
    }

    /// Saves the configuration to the default config file location,
    /// creating the config directory if needed.
    pub async fn save(&self) -> Result<(), ApiError> {
        self.save_to_path(&Self::get_config_path()).await
    }

    /// Saves the configuration to an explicit path.
    pub async fn save_to_path(&self, config_path: &str) -> Result<(), ApiError> {
        if let Some(parent) = Path::new(config_path).parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).await?;
            }
        }
        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(config_path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Returns the platform-specific path for the config file, falling back
    /// to the current directory if no config directory is available.
    pub fn get_config_path() -> String {
        dirs::config_dir()
            .unwrap_or_else(|| Path::new(".").to_path_buf())
            .join("shl-api")
            .join("config.toml")
            .to_string_lossy()
            .to_string()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        dirs::config_dir()
            .unwrap_or_else(|| Path::new(".").to_path_buf())
            .join("shl-api")
            .join("logs")
            .to_string_lossy()
            .to_string()
    }

    /// Displays the current configuration to stdout, with the client secret
    /// redacted.
    pub async fn display() -> Result<(), ApiError> {
        let config_path = Self::get_config_path();
        let log_dir = Self::get_log_dir_path();

        if Path::new(&config_path).exists() {
            let config = Config::load().await?;
            println!("\nCurrent Configuration");
            println!("────────────────────────────────────");
            println!("Config Location:");
            println!("{config_path}");
            println!("────────────────────────────────────");
            println!("Client ID:");
            println!("{}", config.client_id);
            println!("────────────────────────────────────");
            println!("Client Secret:");
            println!("{}", redact(&config.client_secret));
            println!("────────────────────────────────────");
            println!("Team Filter:");
            if config.team_ids.is_empty() {
                println!("(none - unscoped queries)");
            } else {
                println!("{}", config.team_ids.join(", "));
            }
            println!("────────────────────────────────────");
            println!("API Domain:");
            println!("{}", config.api_domain);
            println!("────────────────────────────────────");
            println!("Log File Location:");
            if let Some(custom_path) = &config.log_file_path {
                println!("{custom_path}");
            } else {
                println!("{log_dir}/shl-api.log");
                println!("(Default location)");
            }
        } else {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
        }

        Ok(())
    }
}

fn redact(secret: &str) -> String {
    if secret.chars().count() <= 4 {
        "****".to_string()
    } else {
        let prefix: String = secret.chars().take(4).collect();
        format!("{prefix}****")
    }
}
