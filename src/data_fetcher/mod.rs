//! Fetching and normalization of league data
//!
//! `api` talks to the statistics service, `seasons` resolves which season
//! string a league answers to, and `processors` cleans the results up for
//! display.

pub mod api;
pub mod models;
pub mod processors;
pub mod seasons;

pub use api::{fetch_standings, fetch_teams};
pub use models::{StandingsEntry, Team};
pub use processors::{
    Conference, dedup_standings, dedup_teams, filter_by_conference, filter_by_search,
    remove_denied_countries,
};
pub use seasons::{fetch_teams_with_fallback, preferred_season};
