//! Integration tests exercising the public reference-data API end to end.

use mlb_teletext::constants::dataset::{
    DIVISIONS_PER_LEAGUE, LEAGUE_COUNT, TEAM_COUNT, TEAMS_PER_DIVISION,
};
use mlb_teletext::league_data::{
    division_by_abbreviation, division_by_id, divisions, divisions_by_league_id,
    league_by_abbreviation, league_by_id, leagues, team_by_abbreviation, team_by_id,
    team_by_venue_id, teams, teams_by_division, venue_by_id, venue_by_short_name, venues,
};
use std::collections::HashSet;

#[test]
fn every_team_is_found_by_its_own_id_and_abbreviation() {
    for team in teams() {
        assert_eq!(team_by_id(&team.id), Some(team), "id lookup for {}", team.id);
        assert_eq!(
            team_by_abbreviation(&team.abbreviation),
            Some(team),
            "abbreviation lookup for {}",
            team.abbreviation
        );
    }
}

#[test]
fn every_league_division_and_venue_is_found_by_its_own_id() {
    for league in leagues() {
        assert_eq!(league_by_id(&league.id), Some(league));
        assert_eq!(league_by_abbreviation(&league.abbreviation), Some(league));
    }
    for division in divisions() {
        assert_eq!(division_by_id(&division.id), Some(division));
    }
    for venue in venues() {
        assert_eq!(venue_by_id(&venue.id), Some(venue));
    }
}

#[test]
fn unknown_keys_yield_not_found_from_every_singular_accessor() {
    assert!(team_by_id("000").is_none());
    assert!(team_by_abbreviation("MTL").is_none());
    assert!(team_by_venue_id("424242").is_none());
    assert!(league_by_id("000").is_none());
    assert!(league_by_abbreviation("XL").is_none());
    assert!(division_by_id("999").is_none());
    assert!(division_by_abbreviation("YZ", "E").is_none());
    assert!(venue_by_id("424242").is_none());
    assert!(venue_by_short_name("Shea").is_none());
}

#[test]
fn canonical_dataset_has_expected_shape() {
    assert_eq!(leagues().len(), LEAGUE_COUNT);
    assert_eq!(divisions().len(), LEAGUE_COUNT * DIVISIONS_PER_LEAGUE);
    assert_eq!(teams().len(), TEAM_COUNT);

    for league in leagues() {
        let league_divisions = divisions_by_league_id(&league.id).unwrap();
        assert_eq!(league_divisions.len(), DIVISIONS_PER_LEAGUE);
    }
    assert!(divisions_by_league_id("999").is_none());

    for division in divisions() {
        let division_teams = teams_by_division(&division.id).unwrap();
        assert_eq!(
            division_teams.len(),
            TEAMS_PER_DIVISION,
            "team count for {}",
            division.name
        );
    }
    assert!(teams_by_division("500").is_none());
}

#[test]
fn division_abbreviations_disambiguate_by_league() {
    let al_east = division_by_abbreviation("AL", "E").unwrap();
    let nl_east = division_by_abbreviation("NL", "E").unwrap();

    assert_eq!(al_east.id, "201");
    assert_eq!(nl_east.id, "204");
    assert_ne!(al_east.id, nl_east.id);
}

#[test]
fn numeric_and_string_id_forms_are_equivalent() {
    assert_eq!(team_by_id(109), team_by_id("109"));
    assert_eq!(league_by_id(103), league_by_id("103"));
    assert_eq!(division_by_id(203), division_by_id("203"));
    assert_eq!(venue_by_id(3), venue_by_id("3"));
}

#[test]
fn documented_lookup_scenarios_hold() {
    assert_eq!(team_by_id("111").unwrap().abbreviation, "BOS");
    assert_eq!(team_by_abbreviation("LAD").unwrap().id, "119");
    assert!(team_by_abbreviation("MTL").is_none());
    assert_eq!(division_by_id("203").unwrap().name, "NL West");
    assert_eq!(team_by_venue_id("3").unwrap().abbreviation, "BOS");
    assert_eq!(venue_by_short_name("Fenway").unwrap().name, "Fenway Park");
}

#[test]
fn plural_accessors_preserve_table_order() {
    let nl_east_teams = teams_by_division("204").unwrap();
    assert_eq!(nl_east_teams[0].name, "Atlanta Braves");

    let al_divisions = divisions_by_league_id("103").unwrap();
    let names: Vec<&str> = al_divisions
        .iter()
        .map(|division| division.name.as_str())
        .collect();
    assert_eq!(names, vec!["AL East", "AL Central", "AL West"]);
}

#[test]
fn every_foreign_key_in_the_dataset_resolves() {
    for division in divisions() {
        assert!(
            league_by_id(&division.league_id).is_some(),
            "league {} referenced by {}",
            division.league_id,
            division.name
        );
    }
    for team in teams() {
        assert!(
            division_by_id(&team.division_id).is_some(),
            "division {} referenced by {}",
            team.division_id,
            team.name
        );
        assert!(
            league_by_id(&team.league_id).is_some(),
            "league {} referenced by {}",
            team.league_id,
            team.name
        );
        assert!(
            venue_by_id(&team.venue_id).is_some(),
            "venue {} referenced by {}",
            team.venue_id,
            team.name
        );
    }
}

#[test]
fn membership_lists_agree_with_member_assignments() {
    for league in leagues() {
        for division_id in &league.divisions {
            let division = division_by_id(division_id).unwrap();
            assert_eq!(
                division.league_id, league.id,
                "{} listed under {}",
                division.name, league.name
            );
        }
    }
    for division in divisions() {
        for team_id in &division.teams {
            let team = team_by_id(team_id).unwrap();
            assert_eq!(
                team.division_id, division.id,
                "{} listed under {}",
                team.name, division.name
            );
        }
    }
}

#[test]
fn abbreviations_are_unique_within_their_scope() {
    let mut team_abbreviations = HashSet::new();
    for team in teams() {
        assert!(
            team_abbreviations.insert(team.abbreviation.as_str()),
            "duplicate team abbreviation {}",
            team.abbreviation
        );
    }

    let mut league_abbreviations = HashSet::new();
    for league in leagues() {
        assert!(league_abbreviations.insert(league.abbreviation.as_str()));
    }

    // Division abbreviations repeat across leagues but not within one
    for league in leagues() {
        let mut division_abbreviations = HashSet::new();
        for division in divisions_by_league_id(&league.id).unwrap() {
            assert!(
                division_abbreviations.insert(division.abbreviation.as_str()),
                "duplicate division abbreviation {} in {}",
                division.abbreviation,
                league.name
            );
        }
    }
}

#[test]
fn hierarchy_walk_enumerates_all_thirty_teams() {
    let mut team_count = 0;

    for league in leagues() {
        for division in divisions_by_league_id(&league.id).unwrap() {
            for team in teams_by_division(&division.id).unwrap() {
                team_count += 1;
                assert!(venue_by_id(&team.venue_id).is_some());
            }
        }
    }

    assert_eq!(team_count, TEAM_COUNT);
}

#[test]
fn serialized_records_use_the_camel_case_wire_names() {
    let boston = team_by_abbreviation("BOS").unwrap();
    let json = serde_json::to_string(boston).unwrap();
    assert!(json.contains("\"franchiseName\""));
    assert!(json.contains("\"divisionId\""));
    assert!(json.contains("\"venueId\""));

    let fenway = venue_by_id("3").unwrap();
    let json = serde_json::to_string(fenway).unwrap();
    assert!(json.contains("\"shortName\""));
    assert!(json.contains("\"backgroundColor2\""));
}

#[test]
fn unset_venue_short_names_resolve_first_in_table_order() {
    // Many venues have no short alias; the empty-string query documents
    // first-match-wins rather than treating it as invalid input
    let first_unset = venue_by_short_name("").unwrap();
    assert_eq!(first_unset.name, "Oriole Park at Camden Yards");
}
