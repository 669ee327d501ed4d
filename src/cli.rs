use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Swedish Hockey League (SHL) Open API client
///
/// Authenticates against the SHL Open API using OAuth2 client credentials
/// and prints the requested resource as JSON. Credentials are read from the
/// config file or from the SHL_CLIENT_ID / SHL_CLIENT_SECRET environment
/// variables.
#[derive(Parser, Debug)]
#[command(author = "Dennis Granåsen", about, long_about = None)]
#[command(disable_version_flag = true)]
#[command(styles = get_styles())]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Update the API domain in config (for tests or self-hosted mirrors).
    #[arg(
        long = "config",
        help_heading = "Configuration",
        value_name = "API_DOMAIN"
    )]
    pub new_api_domain: Option<String>,

    /// Update log file path in config. Sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config, reverting to the default location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings (client secret redacted)
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Override the log file path for this invocation only
    #[arg(long = "log-file", help_heading = "Configuration")]
    pub log_file: Option<String>,

    /// Mirror logs to stdout at debug level
    #[arg(long, help_heading = "Debug")]
    pub debug: bool,

    /// Show version information
    #[arg(short = 'V', long)]
    pub version: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch the games of a season
    Games {
        /// Season year, e.g. 2022
        #[arg(short, long)]
        season: u32,
        /// Team codes to scope by, repeatable (e.g. -t HV71 -t LHC)
        #[arg(short, long = "team")]
        teams: Vec<String>,
    },
    /// Fetch a single game by match id
    Game {
        #[arg(short, long)]
        season: u32,
        /// Match id as returned by the games listing
        match_id: String,
    },
    /// Fetch the latest articles
    Articles {
        #[arg(short, long = "team")]
        teams: Vec<String>,
    },
    /// Fetch player statistics for a season
    Players {
        #[arg(short, long)]
        season: u32,
        /// Stat to rank by: assists, goals, points, pim, hits or plusminus
        #[arg(long, default_value = crate::constants::sort_keys::PLAYER_DEFAULT)]
        sort: String,
        #[arg(short, long = "team")]
        teams: Vec<String>,
    },
    /// Fetch goalkeeper statistics for a season
    Goalies {
        #[arg(short, long)]
        season: u32,
        /// Stat to rank by: saves, savesPercent, goalsAgainst,
        /// goalsAgainstAverage, won, tied, lost, shootOuts or minutesInPlay
        #[arg(long, default_value = crate::constants::sort_keys::GOALIE_DEFAULT)]
        sort: String,
        #[arg(short, long = "team")]
        teams: Vec<String>,
    },
    /// Fetch all current SHL teams
    Teams,
    /// Fetch team standings for a season
    Standings {
        #[arg(short, long)]
        season: u32,
        #[arg(short, long = "team")]
        teams: Vec<String>,
    },
    /// Fetch one team's roster, staff and facts by team code
    Team {
        /// Team code, e.g. HV71
        code: String,
    },
    /// Fetch the latest videos
    Videos {
        #[arg(short, long = "team")]
        teams: Vec<String>,
    },
    /// Fetch games and articles together
    All {
        #[arg(short, long)]
        season: u32,
        #[arg(short, long = "team")]
        teams: Vec<String>,
    },
}
