//! Plain terminal rendering of standings, teams and profile data
//!
//! Output is written through a buffered writer in one pass so partially
//! drawn tables never hit the terminal.

use std::io::Write;

use chrono::Local;

use crate::data_fetcher::models::{StandingsEntry, Team};
use crate::data_fetcher::processors::Conference;
use crate::error::AppError;
use crate::profile::UserProfile;

fn render_header(w: &mut impl Write, title: &str) -> Result<(), AppError> {
    let today = Local::now().format("%Y-%m-%d");
    writeln!(w, "{title}  ·  {today}")?;
    writeln!(w, "{}", "─".repeat(40))?;
    Ok(())
}

/// Renders one conference's standings table: rank, team, wins, losses.
pub fn render_standings(
    w: &mut impl Write,
    conference: Conference,
    entries: &[StandingsEntry],
) -> Result<(), AppError> {
    render_header(w, conference.label())?;

    if entries.is_empty() {
        writeln!(w, "No teams found.")?;
        return Ok(());
    }

    writeln!(w, "{:>3}  {:<28} {:>3} {:>3}", "#", "Team", "W", "L")?;
    for (index, entry) in entries.iter().enumerate() {
        writeln!(
            w,
            "{:>3}  {:<28} {:>3} {:>3}",
            index + 1,
            entry.team.name,
            entry.games.win.total,
            entry.games.lose.total
        )?;
    }
    Ok(())
}

/// Renders a team list with country names.
pub fn render_teams(w: &mut impl Write, league: u32, teams: &[Team]) -> Result<(), AppError> {
    render_header(w, &format!("Teams — league {league}"))?;

    if teams.is_empty() {
        writeln!(w, "No teams found for this league.")?;
        return Ok(());
    }

    for team in teams {
        let country = team.country_name();
        if country.is_empty() {
            writeln!(w, "{:>5}  {}", team.id, team.name)?;
        } else {
            writeln!(w, "{:>5}  {} ({country})", team.id, team.name)?;
        }
    }
    Ok(())
}

/// Renders the hydrated favorites list.
pub fn render_favorites(w: &mut impl Write, teams: &[Team]) -> Result<(), AppError> {
    render_header(w, "Favorite teams")?;

    if teams.is_empty() {
        writeln!(w, "No favorites yet.")?;
        return Ok(());
    }

    for team in teams {
        writeln!(w, "{:>5}  {}", team.id, team.name)?;
    }
    Ok(())
}

/// Renders the user profile card.
pub fn render_profile(w: &mut impl Write, user_id: &str, profile: &UserProfile) -> Result<(), AppError> {
    render_header(w, "Profile")?;
    writeln!(w, "User:   {user_id}")?;
    writeln!(w, "Name:   {}", profile.display_name)?;
    writeln!(w, "Email:  {}", profile.email)?;
    match &profile.avatar_path {
        Some(path) => writeln!(w, "Avatar: {path}")?,
        None => writeln!(w, "Avatar: (none)")?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::models::{GameTotals, GamesRecord, StandingsTeam};

    fn entry(name: &str, wins: u32, losses: u32) -> StandingsEntry {
        StandingsEntry {
            position: None,
            team: StandingsTeam {
                id: None,
                name: name.to_string(),
                logo: None,
            },
            games: GamesRecord {
                win: GameTotals { total: wins },
                lose: GameTotals { total: losses },
            },
        }
    }

    fn rendered(f: impl FnOnce(&mut Vec<u8>)) -> String {
        let mut buf = Vec::new();
        f(&mut buf);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_standings_table_rows_in_order() {
        let entries = vec![entry("Boston Celtics", 64, 18), entry("New York Knicks", 50, 32)];
        let out = rendered(|buf| {
            render_standings(buf, Conference::Eastern, &entries).unwrap();
        });

        assert!(out.contains("Eastern Conference"));
        let celtics = out.find("Boston Celtics").unwrap();
        let knicks = out.find("New York Knicks").unwrap();
        assert!(celtics < knicks);
        assert!(out.contains(" 64  18"));
    }

    #[test]
    fn test_empty_standings_message() {
        let out = rendered(|buf| {
            render_standings(buf, Conference::Western, &[]).unwrap();
        });
        assert!(out.contains("No teams found."));
    }

    #[test]
    fn test_teams_listing_includes_country() {
        let teams = vec![Team {
            id: 139,
            name: "Los Angeles Lakers".to_string(),
            logo: None,
            country: Some(crate::data_fetcher::models::Country {
                id: None,
                name: Some("USA".to_string()),
                code: None,
            }),
        }];
        let out = rendered(|buf| {
            render_teams(buf, 12, &teams).unwrap();
        });
        assert!(out.contains("Los Angeles Lakers (USA)"));
    }

    #[test]
    fn test_profile_card() {
        let profile = UserProfile {
            display_name: "Jordan".to_string(),
            email: "jordan@example.com".to_string(),
            avatar_path: None,
        };
        let out = rendered(|buf| {
            render_profile(buf, "user-1", &profile).unwrap();
        });
        assert!(out.contains("Name:   Jordan"));
        assert!(out.contains("Avatar: (none)"));
    }
}
