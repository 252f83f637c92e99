//! Lookup accessors over the reference tables.
//!
//! Every accessor is a pure linear scan over a fixed table. The only
//! failure mode is not-found, expressed as `None`; no accessor panics,
//! and unknown or malformed input is indistinguishable from a valid key
//! with no match.

use std::fmt::Display;

use super::models::{Division, League, Team, Venue};
use super::tables::{DIVISIONS, LEAGUES, TEAMS, VENUES};

/// Looks up a team by its abbreviation.
///
/// Matching is exact and case-sensitive.
///
/// # Arguments
/// * `abbreviation` - Like "BOS", "LAD", "KC", ...
///
/// # Examples
/// ```
/// use mlb_teletext::league_data::team_by_abbreviation;
///
/// assert_eq!(team_by_abbreviation("LAD").unwrap().id, "119");
/// assert!(team_by_abbreviation("MTL").is_none());
/// ```
pub fn team_by_abbreviation(abbreviation: &str) -> Option<&'static Team> {
    TEAMS.iter().find(|team| team.abbreviation == abbreviation)
}

/// Looks up a team by its statsapi id.
///
/// The id may be given as a string or an integer; it is normalized to its
/// decimal string form before comparison, so `team_by_id(111)` and
/// `team_by_id("111")` return the same record. Non-numeric input simply
/// fails to match.
///
/// # Examples
/// ```
/// use mlb_teletext::league_data::team_by_id;
///
/// assert_eq!(team_by_id(111).unwrap().abbreviation, "BOS");
/// assert_eq!(team_by_id("111").unwrap().abbreviation, "BOS");
/// ```
pub fn team_by_id(id: impl Display) -> Option<&'static Team> {
    let id = id.to_string();
    TEAMS.iter().find(|team| team.id == id)
}

/// Returns the teams of a division in table order.
///
/// Returns `None` when no team belongs to `division_id`, so callers can
/// tell an unrecognized key from a present-but-empty one.
pub fn teams_by_division(division_id: &str) -> Option<Vec<&'static Team>> {
    let teams: Vec<&'static Team> = TEAMS
        .iter()
        .filter(|team| team.division_id == division_id)
        .collect();

    if teams.is_empty() { None } else { Some(teams) }
}

/// Looks up the team occupying a venue.
///
/// When several teams share a venue the first in table order wins.
pub fn team_by_venue_id(venue_id: &str) -> Option<&'static Team> {
    TEAMS.iter().find(|team| team.venue_id == venue_id)
}

/// Looks up a league by its abbreviation ("AL" or "NL").
pub fn league_by_abbreviation(abbreviation: &str) -> Option<&'static League> {
    LEAGUES
        .iter()
        .find(|league| league.abbreviation == abbreviation)
}

/// Looks up a league by its statsapi id ("103" is AL, "104" is NL).
///
/// Accepts the id as a string or an integer, like [`team_by_id`].
pub fn league_by_id(id: impl Display) -> Option<&'static League> {
    let id = id.to_string();
    LEAGUES.iter().find(|league| league.id == id)
}

/// Returns both leagues in table order.
pub fn leagues() -> &'static [League] {
    &LEAGUES
}

/// Returns the divisions of a league in table order.
///
/// Returns `None` when no division belongs to `league_id`.
pub fn divisions_by_league_id(league_id: &str) -> Option<Vec<&'static Division>> {
    let divisions: Vec<&'static Division> = DIVISIONS
        .iter()
        .filter(|division| division.league_id == league_id)
        .collect();

    if divisions.is_empty() {
        None
    } else {
        Some(divisions)
    }
}

/// Looks up a division by its abbreviation within a league.
///
/// Division abbreviations repeat across leagues ("E" exists in both), so
/// the owning league's abbreviation is a required co-key. The league is
/// resolved first; when it is unknown the result is `None` without any
/// cross-league fallback scan.
///
/// # Examples
/// ```
/// use mlb_teletext::league_data::division_by_abbreviation;
///
/// let al_east = division_by_abbreviation("AL", "E").unwrap();
/// let nl_east = division_by_abbreviation("NL", "E").unwrap();
/// assert_ne!(al_east.id, nl_east.id);
/// ```
pub fn division_by_abbreviation(
    league_abbreviation: &str,
    division_abbreviation: &str,
) -> Option<&'static Division> {
    let league = league_by_abbreviation(league_abbreviation)?;

    DIVISIONS.iter().find(|division| {
        division.abbreviation == division_abbreviation && division.league_id == league.id
    })
}

/// Looks up a division by its statsapi id ("201" is AL East, ...).
///
/// Accepts the id as a string or an integer, like [`team_by_id`].
pub fn division_by_id(id: impl Display) -> Option<&'static Division> {
    let id = id.to_string();
    DIVISIONS.iter().find(|division| division.id == id)
}

/// Looks up a venue by its statsapi id ("3" is Fenway Park, ...).
///
/// Accepts the id as a string or an integer, like [`team_by_id`].
pub fn venue_by_id(id: impl Display) -> Option<&'static Venue> {
    let id = id.to_string();
    VENUES.iter().find(|venue| venue.id == id)
}

/// Looks up a venue by its short name ("Fenway", ...).
///
/// Matching is exact. Most venues have no short alias and store an empty
/// string, so querying `""` returns the first such venue in table order.
pub fn venue_by_short_name(short_name: &str) -> Option<&'static Venue> {
    VENUES.iter().find(|venue| venue.short_name == short_name)
}

/// Returns all 30 teams in table order.
pub fn teams() -> &'static [Team] {
    &TEAMS
}

/// Returns all six divisions in table order.
pub fn divisions() -> &'static [Division] {
    &DIVISIONS
}

/// Returns all venues in table order.
pub fn venues() -> &'static [Venue] {
    &VENUES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_by_id_string_form() {
        assert_eq!(team_by_id("111").unwrap().abbreviation, "BOS");
    }

    #[test]
    fn test_team_by_id_numeric_form() {
        assert_eq!(team_by_id(109).unwrap().abbreviation, "ARI");
    }

    #[test]
    fn test_team_by_id_numeric_and_string_forms_agree() {
        assert_eq!(team_by_id(109), team_by_id("109"));
    }

    #[test]
    fn test_team_by_id_unknown() {
        assert!(team_by_id("000").is_none());
    }

    #[test]
    fn test_team_by_id_non_numeric_input_is_not_an_error() {
        assert!(team_by_id("not-an-id").is_none());
        assert!(team_by_id("").is_none());
    }

    #[test]
    fn test_team_by_abbreviation_known() {
        assert_eq!(team_by_abbreviation("LAD").unwrap().id, "119");
    }

    #[test]
    fn test_team_by_abbreviation_unknown() {
        assert!(team_by_abbreviation("MTL").is_none());
    }

    #[test]
    fn test_team_by_abbreviation_is_case_sensitive() {
        assert!(team_by_abbreviation("bos").is_none());
    }

    #[test]
    fn test_league_by_abbreviation() {
        assert_eq!(league_by_abbreviation("AL").unwrap().id, "103");
        assert!(league_by_abbreviation("XL").is_none());
    }

    #[test]
    fn test_league_by_id() {
        assert_eq!(league_by_id("104").unwrap().abbreviation, "NL");
        assert_eq!(league_by_id(103).unwrap().abbreviation, "AL");
        assert!(league_by_id("000").is_none());
    }

    #[test]
    fn test_leagues_returns_both() {
        assert_eq!(leagues().len(), 2);
    }

    #[test]
    fn test_divisions_by_league_id() {
        let divisions = divisions_by_league_id("104").unwrap();
        assert_eq!(divisions.len(), 3);
        assert!(divisions_by_league_id("999").is_none());
    }

    #[test]
    fn test_division_by_abbreviation_disambiguates_leagues() {
        assert_eq!(division_by_abbreviation("AL", "E").unwrap().id, "201");
        assert_eq!(division_by_abbreviation("NL", "E").unwrap().id, "204");
    }

    #[test]
    fn test_division_by_abbreviation_unknown_division() {
        assert!(division_by_abbreviation("NL", "X").is_none());
    }

    #[test]
    fn test_division_by_abbreviation_unknown_league_short_circuits() {
        // "E" exists in both leagues, but an unknown league must not fall
        // back to a cross-league scan
        assert!(division_by_abbreviation("YZ", "E").is_none());
    }

    #[test]
    fn test_division_by_id() {
        assert_eq!(division_by_id("203").unwrap().name, "NL West");
        assert!(division_by_id("999").is_none());
    }

    #[test]
    fn test_teams_by_division_order_and_count() {
        let teams = teams_by_division("204").unwrap();
        assert_eq!(teams.len(), 5);
        assert_eq!(teams[0].name, "Atlanta Braves");
    }

    #[test]
    fn test_teams_by_division_unknown() {
        assert!(teams_by_division("500").is_none());
    }

    #[test]
    fn test_team_by_venue_id() {
        assert_eq!(team_by_venue_id("3").unwrap().abbreviation, "BOS");
        assert!(team_by_venue_id("99999").is_none());
    }

    #[test]
    fn test_venue_by_id() {
        assert_eq!(venue_by_id("19").unwrap().name, "Coors Field");
        assert_eq!(venue_by_id(3).unwrap().name, "Fenway Park");
        assert!(venue_by_id("99999").is_none());
    }

    #[test]
    fn test_venue_by_short_name() {
        assert_eq!(venue_by_short_name("Fenway").unwrap().name, "Fenway Park");
        assert!(venue_by_short_name("Shea").is_none());
    }

    #[test]
    fn test_venue_by_short_name_empty_string_matches_first_unset() {
        // Several venues have no short alias; the first in table order wins
        let venue = venue_by_short_name("").unwrap();
        assert_eq!(venue.name, "Oriole Park at Camden Yards");
    }

    #[test]
    fn test_full_table_views() {
        assert_eq!(teams().len(), 30);
        assert_eq!(divisions().len(), 6);
        assert_eq!(venues().len(), 30);
    }
}
