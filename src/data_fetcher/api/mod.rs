//! Endpoint wrappers for the api-basketball statistics service

mod fetch_utils;
mod http_client;
mod urls;

pub use http_client::create_http_client;
#[cfg(test)]
pub(crate) use http_client::create_test_http_client;
pub use urls::{build_standings_url, build_teams_url};

use reqwest::Client;
use tracing::{info, instrument};

use crate::config::Config;
use crate::data_fetcher::models::{StandingsEntry, StandingsResponse, Team, TeamsResponse};
use crate::error::AppError;
use fetch_utils::fetch;

/// Fetches the standings table for a league and season.
///
/// The service nests the rows one level deep in the response envelope;
/// callers receive the flattened rows. An empty result is a valid outcome
/// and is returned as an empty vector, not an error.
#[instrument(skip(client, config))]
pub async fn fetch_standings(
    client: &Client,
    config: &Config,
    league: u32,
    season: &str,
) -> Result<Vec<StandingsEntry>, AppError> {
    let url = build_standings_url(&config.api_domain, league, season);
    let response: StandingsResponse = fetch(client, &url).await?;
    let entries = response.into_entries();
    info!(
        "Fetched {} standings entries for league {} season {}",
        entries.len(),
        league,
        season
    );
    Ok(entries)
}

/// Fetches the team list for a league and season.
#[instrument(skip(client, config))]
pub async fn fetch_teams(
    client: &Client,
    config: &Config,
    league: u32,
    season: &str,
) -> Result<Vec<Team>, AppError> {
    let url = build_teams_url(&config.api_domain, league, season);
    let response: TeamsResponse = fetch(client, &url).await?;
    info!(
        "Fetched {} teams for league {} season {}",
        response.response.len(),
        league,
        season
    );
    Ok(response.response)
}
