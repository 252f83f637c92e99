//! MLB Reference Teletext Viewer Library
//!
//! This library holds a hand-curated snapshot of MLB's organizational
//! hierarchy (leagues, divisions, teams, venues) together with pure
//! lookup accessors over it, and renders the roster in a teletext-style
//! format.
//!
//! # Examples
//!
//! ```rust
//! use mlb_teletext::league_data::{
//!     divisions_by_league_id, leagues, teams_by_division, venue_by_id,
//! };
//! use mlb_teletext::teletext_ui::RosterPage;
//!
//! let mut page = RosterPage::new(
//!     "MLB TELETEXT".to_string(),
//!     "ORGANIZATIONAL DIRECTORY".to_string(),
//!     true,
//! );
//!
//! for league in leagues() {
//!     for division in divisions_by_league_id(&league.id).unwrap() {
//!         page.add_division_header(league, division);
//!         for team in teams_by_division(&division.id).unwrap() {
//!             page.add_team_line(team, venue_by_id(&team.venue_id));
//!         }
//!     }
//! }
//!
//! assert_eq!(page.team_count(), 30);
//!
//! let mut output = Vec::new();
//! page.render_buffered(&mut output).unwrap();
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod league_data;
pub mod logging;
pub mod teletext_ui;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::AppError;
pub use league_data::{Division, League, Team, Venue};
pub use teletext_ui::{RosterPage, parse_hex_color, team_card, venue_card};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
