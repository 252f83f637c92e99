use serde::{Deserialize, Serialize};

/// Top-level grouping of divisions (American League, National League).
///
/// `divisions` lists the ids of the member divisions in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct League {
    pub name: String,
    pub abbreviation: String,
    pub id: String,
    pub divisions: Vec<String>,
}

/// Mid-level grouping of teams within a league (e.g. AL East).
///
/// Division abbreviations ("E", "C", "W") are only unique within their
/// league, so lookups by abbreviation take the owning league as a co-key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Division {
    pub name: String,
    pub abbreviation: String,
    pub id: String,
    #[serde(rename = "leagueId")]
    pub league_id: String,
    pub teams: Vec<String>,
}

/// A franchise entry: identity, colors and home venue.
///
/// Ids are the statsapi.mlb.com numeric ids stored as strings, e.g. "111"
/// for Boston. Colors are `#RRGGBB` hex strings taken from each club's
/// brand palette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    #[serde(rename = "franchiseName")]
    pub franchise_name: String,
    #[serde(rename = "clubName")]
    pub club_name: String,
    pub abbreviation: String,
    #[serde(rename = "leagueId")]
    pub league_id: String,
    #[serde(rename = "divisionId")]
    pub division_id: String,
    #[serde(rename = "backgroundColor")]
    pub background_color: String,
    #[serde(rename = "accentColor")]
    pub accent_color: String,
    #[serde(rename = "textColor")]
    pub text_color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
    #[serde(rename = "timeZone")]
    pub time_zone: String,
    #[serde(rename = "venueId")]
    pub venue_id: String,
}

/// A ballpark. An empty `short_name` means no short alias is defined.
///
/// Venues carry their own color scheme (e.g. Fenway's Green Monster)
/// separate from the occupying team's colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub id: String,
    #[serde(rename = "shortName")]
    pub short_name: String,
    pub name: String,
    #[serde(rename = "backgroundColor")]
    pub background_color: String,
    #[serde(rename = "backgroundColor2")]
    pub background_color_2: String,
    #[serde(rename = "accentColor")]
    pub accent_color: String,
    #[serde(rename = "textColor")]
    pub text_color: String,
    #[serde(rename = "timeZone")]
    pub time_zone: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_team() -> Team {
        Team {
            id: "111".to_string(),
            name: "Boston Red Sox".to_string(),
            franchise_name: "Boston".to_string(),
            club_name: "Red Sox".to_string(),
            abbreviation: "BOS".to_string(),
            league_id: "103".to_string(),
            division_id: "201".to_string(),
            background_color: "#BD3039".to_string(),
            accent_color: "#0C2340".to_string(),
            text_color: "#FFFFFF".to_string(),
            redirect: None,
            time_zone: "America/New_York".to_string(),
            venue_id: "3".to_string(),
        }
    }

    #[test]
    fn test_team_serialization_uses_wire_names() {
        let team = create_test_team();

        let json = serde_json::to_string(&team).unwrap();
        assert!(json.contains("\"franchiseName\":\"Boston\""));
        assert!(json.contains("\"clubName\":\"Red Sox\""));
        assert!(json.contains("\"leagueId\":\"103\""));
        assert!(json.contains("\"divisionId\":\"201\""));
        assert!(json.contains("\"backgroundColor\":\"#BD3039\""));
        assert!(json.contains("\"timeZone\":\"America/New_York\""));
        assert!(json.contains("\"venueId\":\"3\""));
        // Unset redirect is omitted entirely, matching the source data shape
        assert!(!json.contains("redirect"));

        let deserialized: Team = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, team);
    }

    #[test]
    fn test_team_redirect_defaults_to_none() {
        let json = r#"{
            "id": "119",
            "name": "Los Angeles Dodgers",
            "franchiseName": "Los Angeles",
            "clubName": "Dodgers",
            "abbreviation": "LAD",
            "leagueId": "104",
            "divisionId": "203",
            "backgroundColor": "#005A9C",
            "accentColor": "#EF3E42",
            "textColor": "#FFFFFF",
            "timeZone": "America/Los_Angeles",
            "venueId": "22"
        }"#;

        let team: Team = serde_json::from_str(json).unwrap();
        assert_eq!(team.redirect, None);
        assert_eq!(team.abbreviation, "LAD");
    }

    #[test]
    fn test_venue_serialization_uses_wire_names() {
        let venue = Venue {
            id: "3".to_string(),
            short_name: "Fenway".to_string(),
            name: "Fenway Park".to_string(),
            background_color: "#54796D".to_string(),
            background_color_2: "#44655D".to_string(),
            accent_color: "#E0E0E0".to_string(),
            text_color: "#E0E0E0".to_string(),
            time_zone: "America/New_York".to_string(),
        };

        let json = serde_json::to_string(&venue).unwrap();
        assert!(json.contains("\"shortName\":\"Fenway\""));
        assert!(json.contains("\"backgroundColor\":\"#54796D\""));
        assert!(json.contains("\"backgroundColor2\":\"#44655D\""));

        let deserialized: Venue = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, venue);
    }

    #[test]
    fn test_division_serialization_uses_wire_names() {
        let division = Division {
            name: "AL East".to_string(),
            abbreviation: "E".to_string(),
            id: "201".to_string(),
            league_id: "103".to_string(),
            teams: vec!["111".to_string(), "110".to_string()],
        };

        let json = serde_json::to_string(&division).unwrap();
        assert!(json.contains("\"leagueId\":\"103\""));

        let deserialized: Division = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, division);
    }

    #[test]
    fn test_league_round_trip() {
        let league = League {
            name: "American League".to_string(),
            abbreviation: "AL".to_string(),
            id: "103".to_string(),
            divisions: vec!["201".to_string(), "202".to_string(), "200".to_string()],
        };

        let json = serde_json::to_string(&league).unwrap();
        let deserialized: League = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, league);
    }
}
