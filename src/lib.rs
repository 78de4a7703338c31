//! Basketball standings and teams terminal client library
//!
//! This library fetches basketball league data from the api-basketball REST
//! service, normalizes it (dedup, curation denylist, conference partition,
//! search), and manages local favorites and a per-user profile.
//!
//! # Examples
//!
//! ```rust,no_run
//! use courtside::config::Config;
//! use courtside::data_fetcher::api::{create_http_client, fetch_standings};
//! use courtside::data_fetcher::processors::{Conference, dedup_standings, filter_by_conference};
//! use courtside::error::AppError;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let client = create_http_client(&config)?;
//!
//!     let entries = fetch_standings(&client, &config, 12, "2023-2024").await?;
//!     let entries = dedup_standings(entries);
//!
//!     for entry in filter_by_conference(&entries, Conference::Western) {
//!         println!("{} {}-{}", entry.team.name, entry.games.win.total, entry.games.lose.total);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod display;
pub mod error;
pub mod favorites;
pub mod logging;
pub mod profile;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::models::{StandingsEntry, Team};
pub use data_fetcher::processors::Conference;
pub use error::AppError;
pub use favorites::FavoritesStore;
pub use profile::{ProfileStore, UserProfile, UserSession};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
