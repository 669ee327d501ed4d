use crate::config::Config;
use crate::error::ApiError;
use std::io::stdout;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Sets up logging for the CLI binary.
///
/// Logs always go to a daily-rolling file; with `debug` they are mirrored to
/// stdout as well. Returns the log file path and the guard that must be kept
/// alive for the duration of the program so the non-blocking writer flushes.
pub async fn setup_logging(
    custom_log_path: Option<&String>,
    debug: bool,
) -> Result<(String, WorkerGuard), ApiError> {
    let (log_dir, log_file_name) = match custom_log_path {
        Some(custom_path) => {
            let path = Path::new(custom_path);
            let parent = path.parent().unwrap_or(Path::new("."));
            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("shl-api.log");
            (parent.to_string_lossy().to_string(), file_name.to_string())
        }
        None => (Config::get_log_dir_path(), "shl-api.log".to_string()),
    };

    if !Path::new(&log_dir).exists() {
        tokio::fs::create_dir_all(&log_dir).await.map_err(|e| {
            ApiError::log_setup_error(format!("Failed to create log directory: {e}"))
        })?;
    }

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, &log_file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let default_directive = "shl_api=info"
        .parse()
        .map_err(|e| ApiError::log_setup_error(format!("Invalid log directive: {e}")))?;

    let registry = tracing_subscriber::registry().with(
        fmt::Layer::new()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_filter(EnvFilter::from_default_env().add_directive(default_directive)),
    );

    if debug {
        let stdout_directive = "shl_api=debug"
            .parse()
            .map_err(|e| ApiError::log_setup_error(format!("Invalid log directive: {e}")))?;
        registry
            .with(
                fmt::Layer::new()
                    .with_writer(stdout)
                    .with_ansi(true)
                    .with_filter(EnvFilter::from_default_env().add_directive(stdout_directive)),
            )
            .init();
    } else {
        registry.init();
    }

    let log_file_path = format!("{log_dir}/{log_file_name}");
    Ok((log_file_path, guard))
}
