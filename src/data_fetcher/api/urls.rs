//! URL building utilities for API endpoints

/// Builds the standings URL for a league and season.
///
/// # Example
/// ```
/// use courtside::data_fetcher::api::build_standings_url;
///
/// let url = build_standings_url("https://api.example.com", 12, "2023-2024");
/// assert_eq!(url, "https://api.example.com/standings?league=12&season=2023-2024");
/// ```
pub fn build_standings_url(api_domain: &str, league: u32, season: &str) -> String {
    format!("{api_domain}/standings?league={league}&season={season}")
}

/// Builds the teams URL for a league and season.
///
/// # Example
/// ```
/// use courtside::data_fetcher::api::build_teams_url;
///
/// let url = build_teams_url("https://api.example.com", 12, "2023");
/// assert_eq!(url, "https://api.example.com/teams?league=12&season=2023");
/// ```
pub fn build_teams_url(api_domain: &str, league: u32, season: &str) -> String {
    format!("{api_domain}/teams?league={league}&season={season}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standings_url_shape() {
        let url = build_standings_url("https://api-basketball.p.rapidapi.com", 12, "2023-2024");
        assert_eq!(
            url,
            "https://api-basketball.p.rapidapi.com/standings?league=12&season=2023-2024"
        );
    }

    #[test]
    fn test_teams_url_shape() {
        let url = build_teams_url("http://localhost:8080", 117, "2019");
        assert_eq!(url, "http://localhost:8080/teams?league=117&season=2019");
    }
}
