mod api;
mod cli;
mod commands;
mod config;
mod constants;
mod error;
mod logging;

use clap::Parser;
use cli::Args;
use commands::{
    handle_config_update_command, handle_fetch_command, handle_list_config_command,
    handle_version_command,
};
use config::Config;
use error::ApiError;
use tracing::info;

/// Current version of the binary
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Binary name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[tokio::main]
async fn main() -> Result<(), ApiError> {
    let args = Args::parse();

    if args.version {
        handle_version_command();
        return Ok(());
    }

    if args.list_config {
        return handle_list_config_command().await;
    }

    if args.new_api_domain.is_some() || args.new_log_file_path.is_some() || args.clear_log_file_path
    {
        return handle_config_update_command(&args).await;
    }

    let Some(command) = &args.command else {
        eprintln!("No command given; try --help");
        return Ok(());
    };

    let config_log_path = Config::load()
        .await
        .ok()
        .and_then(|config| config.log_file_path);
    let custom_log_path = args.log_file.as_ref().or(config_log_path.as_ref());

    // The guard must stay alive until exit so buffered logs are flushed.
    let (log_file_path, _guard) = logging::setup_logging(custom_log_path, args.debug).await?;
    info!("{} {} starting, logging to {}", NAME, VERSION, log_file_path);

    handle_fetch_command(command).await
}
