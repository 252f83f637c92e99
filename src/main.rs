// src/main.rs
use clap::Parser;
use mlb_teletext::cli::Args;
use mlb_teletext::config::Config;
use mlb_teletext::constants::dataset::TEAM_COUNT;
use mlb_teletext::error::AppError;
use mlb_teletext::league_data::{
    divisions, divisions_by_league_id, leagues, team_by_abbreviation, team_by_id,
    team_by_venue_id, teams, teams_by_division, venue_by_id, venue_by_short_name, venues,
};
use mlb_teletext::logging::setup_logging;
use mlb_teletext::teletext_ui::{RosterPage, team_card, venue_card};
use std::io::stdout;
use tracing::{info, warn};

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Validate argument combinations
    if args.team.is_some() && args.venue.is_some() {
        return Err(AppError::config_error(
            "Cannot use both --team and --venue in the same invocation",
        ));
    }

    // Handle configuration operations first; they don't need logging
    if args.list_config {
        Config::display()?;
        return Ok(());
    }

    if args.new_log_file_path.is_some() || args.clear_log_file_path {
        let mut config = Config::load().unwrap_or_default();

        if let Some(new_log_path) = args.new_log_file_path {
            config.log_file_path = Some(new_log_path);
        } else if args.clear_log_file_path {
            config.log_file_path = None;
            println!("Custom log file path cleared. Using default location.");
        }

        config.save()?;
        println!("Config updated successfully!");
        return Ok(());
    }

    // The guard must be kept alive for the duration of the program
    // to ensure logs are flushed properly
    let (log_file_path, _guard) = setup_logging(&args)?;
    info!("Logs are being written to: {log_file_path}");

    if let Some(query) = args.team.as_deref() {
        return run_team_lookup(query, &args);
    }
    if let Some(query) = args.venue.as_deref() {
        return run_venue_lookup(query, &args);
    }

    run_roster(&args)
}

/// Resolves a team by abbreviation first, then by id, and prints its
/// card. A miss is an answer, not an error: the process still exits
/// with success.
fn run_team_lookup(query: &str, args: &Args) -> Result<(), AppError> {
    let team = team_by_abbreviation(query).or_else(|| team_by_id(query));

    if args.json {
        println!("{}", serde_json::to_string_pretty(&team)?);
        return Ok(());
    }

    match team {
        Some(team) => {
            info!("Resolved team query {query} to {}", team.name);
            print!("{}", team_card(team, venue_by_id(&team.venue_id), args.plain));
        }
        None => println!("No team found for \"{query}\""),
    }
    Ok(())
}

/// Resolves a venue by short name first, then by id, and prints its card.
fn run_venue_lookup(query: &str, args: &Args) -> Result<(), AppError> {
    let venue = venue_by_short_name(query).or_else(|| venue_by_id(query));

    if args.json {
        println!("{}", serde_json::to_string_pretty(&venue)?);
        return Ok(());
    }

    match venue {
        Some(venue) => {
            info!("Resolved venue query {query} to {}", venue.name);
            print!(
                "{}",
                venue_card(venue, team_by_venue_id(&venue.id), args.plain)
            );
        }
        None => println!("No venue found for \"{query}\""),
    }
    Ok(())
}

/// Walks League → Division → Team → Venue through the accessors and
/// renders the roster page (or dumps the dataset as JSON). Exits with a
/// failure status unless exactly 30 teams were enumerated, so a run
/// doubles as a dataset smoke test.
fn run_roster(args: &Args) -> Result<(), AppError> {
    let mut page = RosterPage::new(
        "MLB TELETEXT".to_string(),
        "ORGANIZATIONAL DIRECTORY".to_string(),
        args.plain,
    );
    let mut team_count = 0;

    for league in leagues() {
        let Some(league_divisions) = divisions_by_league_id(&league.id) else {
            warn!("No divisions for league {}", league.name);
            continue;
        };

        for division in league_divisions {
            let Some(division_teams) = teams_by_division(&division.id) else {
                warn!("No teams for division {}", division.name);
                continue;
            };

            page.add_division_header(league, division);
            for team in division_teams {
                team_count += 1;
                page.add_team_line(team, venue_by_id(&team.venue_id));
            }
        }
    }

    if args.json {
        let dataset = serde_json::json!({
            "leagues": leagues(),
            "divisions": divisions(),
            "teams": teams(),
            "venues": venues(),
        });
        println!("{}", serde_json::to_string_pretty(&dataset)?);
    } else {
        page.render_buffered(&mut stdout())?;
        println!();
    }

    if team_count != TEAM_COUNT {
        return Err(AppError::roster_incomplete(TEAM_COUNT, team_count));
    }

    info!("Enumerated {team_count} teams");
    Ok(())
}
