use std::io::{BufWriter, Write, stdout};
use std::path::Path;

use clap::Parser;
use tracing::info;

use courtside::cli::Args;
use courtside::config::{Config, user_prompts};
use courtside::data_fetcher::processors::Conference;
use courtside::data_fetcher::{api, processors, seasons};
use courtside::display;
use courtside::error::AppError;
use courtside::favorites::FavoritesStore;
use courtside::logging;
use courtside::profile::ProfileStore;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    let (log_file_path, _guard) = logging::setup_logging(&args).await?;
    info!("Logs are being written to: {log_file_path}");

    if args.list_config {
        Config::display().await?;
        return Ok(());
    }

    // Handle configuration updates
    if args.new_api_key.is_some() || args.new_log_file_path.is_some() || args.clear_log_file_path {
        let mut config = if Path::new(&Config::get_config_path()).exists() {
            Config::load().await?
        } else {
            Config::default()
        };

        if let Some(new_key) = args.new_api_key {
            config.api_key = if new_key.is_empty() {
                user_prompts::prompt_for_api_key().await?
            } else {
                new_key
            };
        }

        if let Some(new_log_path) = args.new_log_file_path {
            config.log_file_path = Some(new_log_path);
        } else if args.clear_log_file_path {
            config.log_file_path = None;
            println!("Custom log file path cleared. Using default location.");
        }

        config.save().await?;
        println!("Config updated successfully!");
        return Ok(());
    }

    // Profile operations need no network access
    if args.profile
        || args.set_name.is_some()
        || args.set_email.is_some()
        || args.set_avatar.is_some()
    {
        let store = ProfileStore::new();
        let session = store.open_session(&args.user).await?;

        if let Some(name) = &args.set_name {
            session.set_display_name(name).await?;
        }
        if let Some(email) = &args.set_email {
            session.set_email(email).await?;
        }
        if let Some(path) = &args.set_avatar {
            session.set_avatar(path).await?;
        }

        let mut out = BufWriter::new(stdout());
        display::render_profile(&mut out, session.user_id(), &session.profile())?;
        out.flush()?;
        return Ok(());
    }

    if let Some(team_id) = args.toggle_favorite {
        let store = FavoritesStore::new();
        if store.toggle(team_id).await? {
            println!("Team {team_id} added to favorites.");
        } else {
            println!("Team {team_id} removed from favorites.");
        }
        return Ok(());
    }

    // Everything below talks to the statistics service
    let config = Config::load().await?;
    let client = api::create_http_client(&config)?;

    if args.favorites {
        // Hydrate stored ids against a fresh team list so names stay current
        let teams = tokio::select! {
            teams = seasons::fetch_teams_with_fallback(&client, &config, args.league) => teams,
            _ = tokio::signal::ctrl_c() => {
                info!("Fetch cancelled");
                return Ok(());
            }
        };
        let teams = processors::dedup_teams(teams);
        let hydrated = FavoritesStore::new().hydrate(&teams).await;

        let mut out = BufWriter::new(stdout());
        display::render_favorites(&mut out, &hydrated)?;
        out.flush()?;
        return Ok(());
    }

    if args.teams {
        let teams = tokio::select! {
            teams = seasons::fetch_teams_with_fallback(&client, &config, args.league) => teams,
            _ = tokio::signal::ctrl_c() => {
                info!("Fetch cancelled");
                return Ok(());
            }
        };
        let teams = processors::remove_denied_countries(processors::dedup_teams(teams));

        let mut out = BufWriter::new(stdout());
        display::render_teams(&mut out, args.league, &teams)?;
        out.flush()?;
        return Ok(());
    }

    // Default view: standings for the preferred season, split by conference
    let season = seasons::preferred_season(args.league);
    let entries = tokio::select! {
        result = api::fetch_standings(&client, &config, args.league, season) => match result {
            Ok(entries) => entries,
            Err(e) => {
                eprintln!("Error fetching standings: {e}");
                eprintln!("Check your network connection and API key, then try again.");
                return Err(e);
            }
        },
        _ = tokio::signal::ctrl_c() => {
            info!("Fetch cancelled");
            return Ok(());
        }
    };

    let entries = processors::dedup_standings(entries);
    let search = args.search.unwrap_or_default();
    let conferences = match args.conference {
        Some(conference) => vec![conference],
        None => vec![Conference::Eastern, Conference::Western],
    };

    let mut out = BufWriter::new(stdout());
    for conference in conferences {
        let view = processors::filter_by_conference(&entries, conference);
        let view = processors::filter_by_search(&view, &search);
        display::render_standings(&mut out, conference, &view)?;
        writeln!(out)?;
    }
    out.flush()?;

    Ok(())
}
