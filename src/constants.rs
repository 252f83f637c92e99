//! Application-wide constants and configuration values
//!
//! This module centralizes the expected dataset shape and display layout
//! values so the renderer and the smoke-test exit contract agree.

#![allow(dead_code)]

/// Expected shape of the shipped reference dataset
pub mod dataset {
    /// Number of leagues (AL, NL)
    pub const LEAGUE_COUNT: usize = 2;

    /// Divisions per league (East, Central, West)
    pub const DIVISIONS_PER_LEAGUE: usize = 3;

    /// Teams per division
    pub const TEAMS_PER_DIVISION: usize = 5;

    /// Total number of teams; the roster run exits with failure unless
    /// exactly this many teams are enumerated
    pub const TEAM_COUNT: usize = 30;
}

/// Display layout constants
pub mod ui {
    /// Margin for page content from the terminal border
    pub const CONTENT_MARGIN: usize = 2;

    /// Column width for team abbreviations ("BOS", "CWS", ...)
    pub const ABBREVIATION_WIDTH: usize = 5;

    /// Column width for full team names ("Philadelphia Phillies" is 21)
    pub const TEAM_NAME_WIDTH: usize = 22;

    /// Column width for venue names ("Oriole Park at Camden Yards" is 27)
    pub const VENUE_NAME_WIDTH: usize = 28;
}
