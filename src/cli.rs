use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

use crate::data_fetcher::processors::Conference;

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

fn parse_conference(s: &str) -> Result<Conference, String> {
    s.parse()
}

/// Basketball standings and teams in your terminal
///
/// Fetches league standings and team lists from the api-basketball service,
/// splits NBA standings into conferences, and keeps a local list of favorite
/// teams plus a per-user profile.
///
/// With no flags, shows the NBA standings for both conferences.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// League id to query (12 is the NBA).
    #[arg(
        long = "league",
        short = 'g',
        default_value_t = crate::constants::leagues::NBA,
        help_heading = "Data Selection"
    )]
    pub league: u32,

    /// Show only one conference of the standings (east or west).
    #[arg(
        long = "conference",
        short = 'c',
        value_parser = parse_conference,
        help_heading = "Data Selection"
    )]
    pub conference: Option<Conference>,

    /// Filter standings by team name, case-insensitive substring match.
    #[arg(long = "search", short = 's', help_heading = "Data Selection")]
    pub search: Option<String>,

    /// List the league's teams instead of standings. Probes season
    /// candidates until one has data.
    #[arg(long = "teams", short = 't', help_heading = "Data Selection")]
    pub teams: bool,

    /// Show your favorite teams, hydrated against the league's team list.
    #[arg(long = "favorites", short = 'f', help_heading = "Favorites")]
    pub favorites: bool,

    /// Add or remove a team id from your favorites.
    #[arg(
        long = "toggle-favorite",
        value_name = "TEAM_ID",
        help_heading = "Favorites"
    )]
    pub toggle_favorite: Option<u32>,

    /// Show the user profile.
    #[arg(long = "profile", help_heading = "Profile")]
    pub profile: bool,

    /// User id for profile operations.
    #[arg(
        long = "user",
        default_value = "default",
        value_name = "USER_ID",
        help_heading = "Profile"
    )]
    pub user: String,

    /// Update the profile display name.
    #[arg(long = "set-name", value_name = "NAME", help_heading = "Profile")]
    pub set_name: Option<String>,

    /// Update the profile email.
    #[arg(long = "set-email", value_name = "EMAIL", help_heading = "Profile")]
    pub set_email: Option<String>,

    /// Set the profile avatar to a local image path.
    #[arg(long = "set-avatar", value_name = "PATH", help_heading = "Profile")]
    pub set_avatar: Option<String>,

    /// Update the API key in config. Will prompt for the key if not provided.
    #[arg(
        long = "config",
        help_heading = "Configuration",
        value_name = "API_KEY",
        num_args = 0..=1,
        default_missing_value = ""
    )]
    pub new_api_key: Option<String>,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// Enable debug mode: info logs are echoed to stdout as well as the log file.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path for this run only.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["courtside"]);
        assert_eq!(args.league, crate::constants::leagues::NBA);
        assert!(args.conference.is_none());
        assert!(!args.teams);
        assert_eq!(args.user, "default");
    }

    #[test]
    fn test_conference_flag_parses() {
        let args = Args::parse_from(["courtside", "--conference", "west"]);
        assert_eq!(args.conference, Some(Conference::Western));
    }

    #[test]
    fn test_invalid_conference_rejected() {
        assert!(Args::try_parse_from(["courtside", "-c", "north"]).is_err());
    }

    #[test]
    fn test_config_flag_with_and_without_value() {
        let args = Args::parse_from(["courtside", "--config", "my-key"]);
        assert_eq!(args.new_api_key.as_deref(), Some("my-key"));

        let args = Args::parse_from(["courtside", "--config"]);
        assert_eq!(args.new_api_key.as_deref(), Some(""));
    }
}
