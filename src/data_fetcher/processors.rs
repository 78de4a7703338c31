//! Normalization pipeline for fetched team and standings data
//!
//! Everything here is a pure function over its input: dedup, denylist
//! filtering, conference partitioning and free-text search. Order is always
//! preserved and the first occurrence always wins.

use std::collections::HashSet;

use crate::constants::{DENIED_COUNTRY_NAMES, conferences};
use crate::data_fetcher::models::{StandingsEntry, Team};

/// NBA conference, used to partition standings views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conference {
    Eastern,
    Western,
}

impl Conference {
    fn roster(self) -> &'static [&'static str] {
        match self {
            Conference::Eastern => conferences::EASTERN_TEAM_NAMES,
            Conference::Western => conferences::WESTERN_TEAM_NAMES,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Conference::Eastern => "Eastern Conference",
            Conference::Western => "Western Conference",
        }
    }
}

impl std::str::FromStr for Conference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "east" | "eastern" => Ok(Conference::Eastern),
            "west" | "western" => Ok(Conference::Western),
            other => Err(format!("unknown conference: {other} (use east or west)")),
        }
    }
}

/// Removes duplicate standings rows, keyed by team name. The first-seen row
/// for a name is retained and input order is preserved.
pub fn dedup_standings(entries: Vec<StandingsEntry>) -> Vec<StandingsEntry> {
    let mut seen = HashSet::new();
    entries
        .into_iter()
        .filter(|entry| seen.insert(entry.team.name.clone()))
        .collect()
}

/// Removes duplicate teams, keyed by id. First occurrence wins.
pub fn dedup_teams(teams: Vec<Team>) -> Vec<Team> {
    let mut seen = HashSet::new();
    teams
        .into_iter()
        .filter(|team| seen.insert(team.id))
        .collect()
}

/// Drops teams whose country name exactly matches the curation denylist.
/// Idempotent: filtering an already filtered list is a no-op.
pub fn remove_denied_countries(teams: Vec<Team>) -> Vec<Team> {
    teams
        .into_iter()
        .filter(|team| !DENIED_COUNTRY_NAMES.contains(&team.country_name()))
        .collect()
}

/// True when the team name places it in the given conference.
///
/// Matching is by substring against the fixed conference rosters, mirroring
/// the product's behavior: "Los Angeles Lakers" contains "Lakers". A name
/// matching neither roster belongs to no conference.
pub fn is_in_conference(team_name: &str, conference: Conference) -> bool {
    conference
        .roster()
        .iter()
        .any(|roster_name| team_name.contains(roster_name))
}

/// Partitions standings rows into one conference's view, preserving order.
pub fn filter_by_conference(
    entries: &[StandingsEntry],
    conference: Conference,
) -> Vec<StandingsEntry> {
    entries
        .iter()
        .filter(|entry| is_in_conference(&entry.team.name, conference))
        .cloned()
        .collect()
}

/// Case-insensitive substring search over team names. Applied after
/// conference partitioning. An empty search term matches everything.
pub fn filter_by_search(entries: &[StandingsEntry], search_term: &str) -> Vec<StandingsEntry> {
    let needle = search_term.to_lowercase();
    entries
        .iter()
        .filter(|entry| entry.team.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
