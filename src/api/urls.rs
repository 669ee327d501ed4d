//! URL building utilities for the SHL Open API endpoints

/// Builds the URL for a resource, optionally scoped to a season.
/// A season of `0` means the resource is not season-scoped.
///
/// # Example
/// ```
/// use shl_api::api::generate_url;
///
/// let url = generate_url("https://openapi.shl.se", "games.json", 2022);
/// assert_eq!(url, "https://openapi.shl.se/seasons/2022/games.json");
///
/// let url = generate_url("https://openapi.shl.se", "games.json", 0);
/// assert_eq!(url, "https://openapi.shl.se/games.json");
/// ```
pub fn generate_url(api_domain: &str, query: &str, season: u32) -> String {
    if season != 0 {
        format!("{api_domain}/seasons/{season}/{query}")
    } else {
        format!("{api_domain}/{query}")
    }
}

/// Builds the URL for a single game within a season.
///
/// # Example
/// ```
/// use shl_api::api::build_game_url;
///
/// let url = build_game_url("https://openapi.shl.se", 2022, "m1234");
/// assert_eq!(url, "https://openapi.shl.se/seasons/2022/games/m1234.json");
/// ```
pub fn build_game_url(api_domain: &str, season: u32, match_id: &str) -> String {
    generate_url(api_domain, &format!("games/{match_id}.json"), season)
}

/// Builds the URL for a single team's roster, staff and facts.
///
/// # Example
/// ```
/// use shl_api::api::build_team_url;
///
/// let url = build_team_url("https://openapi.shl.se", "HV71");
/// assert_eq!(url, "https://openapi.shl.se/teams/HV71.json");
/// ```
pub fn build_team_url(api_domain: &str, team_code: &str) -> String {
    generate_url(api_domain, &format!("teams/{team_code}.json"), 0)
}

/// Joins a team filter into the comma-separated value the API expects.
/// Returns `None` for an empty filter so no scoping parameter is sent at
/// all, never an empty-string parameter.
///
/// # Example
/// ```
/// use shl_api::api::join_team_ids;
///
/// assert_eq!(join_team_ids(&["HV71".to_string()]), Some("HV71".to_string()));
/// assert_eq!(
///     join_team_ids(&["HV71".to_string(), "LHC".to_string()]),
///     Some("HV71,LHC".to_string())
/// );
/// assert_eq!(join_team_ids(&[]), None);
/// ```
pub fn join_team_ids(team_ids: &[String]) -> Option<String> {
    if team_ids.is_empty() {
        None
    } else {
        Some(team_ids.join(","))
    }
}
