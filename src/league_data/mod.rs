//! Static MLB organizational reference data.
//!
//! Holds the four hand-curated tables (leagues, divisions, teams, venues)
//! and the pure lookup accessors over them. The tables are built once on
//! first access via [`std::sync::LazyLock`] and are never mutated;
//! accessors hand out `&'static` shared references, so the data can be
//! read from any number of threads without locking.

pub mod models;
pub mod store;

mod tables;

pub use models::{Division, League, Team, Venue};
pub use store::{
    division_by_abbreviation, division_by_id, divisions, divisions_by_league_id,
    league_by_abbreviation, league_by_id, leagues, team_by_abbreviation, team_by_id,
    team_by_venue_id, teams, teams_by_division, venue_by_id, venue_by_short_name, venues,
};
