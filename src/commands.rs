use crate::api::{create_http_client, ShlApiClient};
use crate::cli::{Args, Command};
use crate::config::Config;
use crate::error::ApiError;
use serde_json::Value;
use tracing::{error, info};

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), ApiError> {
    Config::display().await
}

/// Handles configuration update commands (--config, --set-log-file,
/// --clear-log-file). Updates the stored configuration and saves it.
pub async fn handle_config_update_command(args: &Args) -> Result<(), ApiError> {
    let mut config = Config::load().await.unwrap_or_default();

    if let Some(new_domain) = &args.new_api_domain {
        config.api_domain = new_domain.clone();
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
    }

    config.save().await?;
    println!("Configuration updated: {}", Config::get_config_path());
    Ok(())
}

/// Handles the --version command.
pub fn handle_version_command() {
    println!("{} {}", crate::NAME, crate::VERSION);
}

/// Runs one fetch command against the API and prints the payload as JSON.
///
/// Failures are reported and logged but never escalate to a non-zero exit:
/// a periodic caller's next tick may simply succeed, so the process edge
/// keeps the never-crash-the-poll-loop policy.
pub async fn handle_fetch_command(command: &Command) -> Result<(), ApiError> {
    let config = Config::load().await?;
    let session = create_http_client()
        .map_err(|e| ApiError::config_error(format!("Failed to build HTTP client: {e}")))?;
    let client = ShlApiClient::with_base_url(
        config.client_id.clone(),
        config.client_secret.clone(),
        config.team_ids.clone(),
        session,
        config.api_domain.clone(),
    );

    match run_fetch(&client, command).await {
        Ok(payload) => {
            let rendered = serde_json::to_string_pretty(&payload)
                .unwrap_or_else(|_| payload.to_string());
            println!("{rendered}");
            Ok(())
        }
        Err(e) => {
            error!("Fetch failed: {}", e);
            if e.is_transient() {
                eprintln!("No data: {e} (transient, retry on the next poll)");
            } else {
                eprintln!("No data: {e}");
            }
            Ok(())
        }
    }
}

/// Dispatches a single command to the matching client operation.
async fn run_fetch(client: &ShlApiClient, command: &Command) -> Result<Value, ApiError> {
    info!("Running command: {:?}", command);
    match command {
        Command::Games { season, teams } => {
            client
                .get_games(*season, effective_teams(teams, client))
                .await
        }
        Command::Game { season, match_id } => client.get_game(*season, match_id).await,
        Command::Articles { teams } => client.get_articles(effective_teams(teams, client)).await,
        Command::Players { season, sort, teams } => {
            client
                .get_player_stats(*season, sort, effective_teams(teams, client))
                .await
        }
        Command::Goalies { season, sort, teams } => {
            client
                .get_goalie_stats(*season, sort, effective_teams(teams, client))
                .await
        }
        Command::Teams => client.get_teams().await,
        Command::Standings { season, teams } => {
            client
                .get_team_stats(*season, effective_teams(teams, client))
                .await
        }
        Command::Team { code } => client.get_team(code).await,
        Command::Videos { teams } => client.get_videos(effective_teams(teams, client)).await,
        Command::All { season, teams } => {
            let data = client
                .get_data(*season, effective_teams(teams, client))
                .await?;
            serde_json::to_value(data)
                .map_err(|e| ApiError::unexpected(format!("failed to render payload: {e}")))
        }
    }
}

/// Command-line team flags win over the configured default filter; the
/// filter applies only when no flags were given.
fn effective_teams<'a>(teams: &'a [String], client: &'a ShlApiClient) -> &'a [String] {
    if teams.is_empty() {
        client.default_team_ids()
    } else {
        teams
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_with_teams(teams: &[&str]) -> ShlApiClient {
        let session = create_http_client().expect("Failed to build HTTP client");
        ShlApiClient::new(
            "id",
            "secret",
            teams.iter().map(|s| s.to_string()).collect(),
            session,
        )
    }

    #[tokio::test]
    async fn test_effective_teams_prefers_cli_flags() {
        let client = client_with_teams(&["HV71"]);
        let flags = vec!["LHC".to_string()];
        assert_eq!(effective_teams(&flags, &client), &["LHC".to_string()]);
    }

    #[tokio::test]
    async fn test_effective_teams_falls_back_to_default_filter() {
        let client = client_with_teams(&["HV71", "LHC"]);
        assert_eq!(
            effective_teams(&[], &client),
            &["HV71".to_string(), "LHC".to_string()]
        );
    }

    #[tokio::test]
    async fn test_effective_teams_both_empty_means_unscoped() {
        let client = client_with_teams(&[]);
        assert!(effective_teams(&[], &client).is_empty());
    }
}
