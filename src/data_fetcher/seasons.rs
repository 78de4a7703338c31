//! Season resolution for leagues with inconsistent season coverage
//!
//! The statistics service indexes each league under whichever season strings
//! it happens to have data for, and the format differs per league ("2023" vs
//! "2023-2024"). Rather than guessing, the probe walks a fixed candidate
//! list in order and stops at the first season with data.

use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use tracing::{info, warn};

use crate::config::Config;
use crate::constants::{leagues, retry};
use crate::data_fetcher::api;
use crate::data_fetcher::models::Team;
use crate::error::AppError;

/// True when the league expresses seasons in the multi-year "YYYY-YYYY" format.
pub fn uses_multi_year_seasons(league: u32) -> bool {
    leagues::MULTI_YEAR_SEASON_LEAGUES.contains(&league)
}

/// The season string a league would nominally be queried under. This is the
/// first guess only; the probe walks the full candidate list regardless.
pub fn preferred_season(league: u32) -> &'static str {
    // First candidate is the current multi-year season; its prefix is the
    // single-year form.
    let current = leagues::SEASON_CANDIDATES[0];
    if uses_multi_year_seasons(league) {
        current
    } else {
        &current[..4]
    }
}

/// Probes the fixed season candidate list with `fetch_season`, returning the
/// first non-empty result.
///
/// Behavior per candidate:
/// - non-empty result: stop, return it
/// - empty result: move on immediately
/// - rate limit (429): sleep `cooldown`, then move on; the next candidate is
///   still issued
/// - any other error: log and move on
///
/// Exhausting every candidate yields an empty vector. That is a normal
/// terminal state; this function never fails.
pub async fn probe_seasons<T, F, Fut>(cooldown: Duration, mut fetch_season: F) -> Vec<T>
where
    F: FnMut(&'static str) -> Fut,
    Fut: Future<Output = Result<Vec<T>, AppError>>,
{
    for &season in leagues::SEASON_CANDIDATES {
        info!("Trying season: {season}");
        match fetch_season(season).await {
            Ok(results) if !results.is_empty() => {
                info!("Season {} has {} records", season, results.len());
                return results;
            }
            Ok(_) => {
                info!("Season {season} returned no data");
            }
            Err(e) if e.is_rate_limit() => {
                warn!(
                    "Rate limited on season {}, cooling down for {:?} before the next candidate",
                    season, cooldown
                );
                tokio::time::sleep(cooldown).await;
            }
            Err(e) => {
                warn!("Failed to fetch season {season}: {e}");
            }
        }
    }

    warn!("No season candidate yielded data");
    Vec::new()
}

/// Default cooldown applied after a 429 from the service.
pub fn rate_limit_cooldown() -> Duration {
    Duration::from_secs(retry::RATE_LIMIT_COOLDOWN_SECONDS)
}

/// Fetches the team list for a league, falling back across season candidates.
pub async fn fetch_teams_with_fallback(
    client: &Client,
    config: &Config,
    league: u32,
) -> Vec<Team> {
    info!(
        "Resolving teams for league {} (preferred season {})",
        league,
        preferred_season(league)
    );
    probe_seasons(rate_limit_cooldown(), |season| {
        api::fetch_teams(client, config, league, season)
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::time::Instant;

    fn scripted(
        responses: Vec<Result<Vec<u32>, AppError>>,
    ) -> (
        RefCell<Vec<Result<Vec<u32>, AppError>>>,
        RefCell<Vec<&'static str>>,
    ) {
        let mut responses = responses;
        responses.reverse();
        (RefCell::new(responses), RefCell::new(Vec::new()))
    }

    #[tokio::test]
    async fn test_stops_at_first_non_empty_candidate() {
        let (responses, seen) = scripted(vec![Ok(vec![]), Ok(vec![]), Ok(vec![7, 8])]);

        let result = probe_seasons(Duration::from_millis(1), |season| {
            seen.borrow_mut().push(season);
            let next = responses.borrow_mut().pop().unwrap_or(Ok(vec![]));
            async move { next }
        })
        .await;

        assert_eq!(result, vec![7, 8]);
        // Exactly three requests: the two empty seasons plus the hit.
        assert_eq!(
            seen.borrow().as_slice(),
            &["2023-2024", "2023", "2022"][..]
        );
    }

    #[tokio::test]
    async fn test_exhaustion_returns_empty_not_error() {
        let calls = RefCell::new(0u32);
        let result: Vec<u32> = probe_seasons(Duration::from_millis(1), |_| {
            *calls.borrow_mut() += 1;
            async { Ok(vec![]) }
        })
        .await;

        assert!(result.is_empty());
        assert_eq!(*calls.borrow(), leagues::SEASON_CANDIDATES.len() as u32);
    }

    #[tokio::test]
    async fn test_rate_limit_cools_down_without_skipping() {
        let cooldown = Duration::from_millis(50);
        let (responses, seen) = scripted(vec![
            Err(AppError::api_rate_limit("Too Many Requests", "http://t")),
            Ok(vec![3]),
        ]);

        let started = Instant::now();
        let result = probe_seasons(cooldown, |season| {
            seen.borrow_mut().push(season);
            let next = responses.borrow_mut().pop().unwrap_or(Ok(vec![]));
            async move { next }
        })
        .await;

        assert_eq!(result, vec![3]);
        // The candidate after the 429 was still issued, after the cooldown.
        assert_eq!(seen.borrow().as_slice(), &["2023-2024", "2023"][..]);
        assert!(started.elapsed() >= cooldown);
    }

    #[tokio::test]
    async fn test_non_rate_limit_errors_are_swallowed() {
        let (responses, seen) = scripted(vec![
            Err(AppError::api_server_error(500, "Internal Server Error", "http://t")),
            Err(AppError::api_not_found("http://t")),
            Ok(vec![1]),
        ]);

        let result = probe_seasons(Duration::from_millis(1), |season| {
            seen.borrow_mut().push(season);
            let next = responses.borrow_mut().pop().unwrap_or(Ok(vec![]));
            async move { next }
        })
        .await;

        assert_eq!(result, vec![1]);
        assert_eq!(seen.borrow().len(), 3);
    }

    #[test]
    fn test_preferred_season_format_by_league_type() {
        assert_eq!(preferred_season(leagues::NBA), "2023-2024");
        // League 117 is not in the multi-year set
        assert_eq!(preferred_season(117), "2023");
    }
}
