//! The hand-curated reference tables.
//!
//! Record values mirror statsapi.mlb.com (see e.g.
//! <https://statsapi.mlb.com/api/v1/teams/111> for Boston), with colors
//! taken from each club's brand palette. Tables are built once on first
//! access and never mutated; row order is load-bearing because the plural
//! accessors and the first-match lookups preserve it.

use std::sync::LazyLock;

use super::models::{Division, League, Team, Venue};

pub(super) static LEAGUES: LazyLock<Vec<League>> = LazyLock::new(|| {
    vec![
        League {
            name: "American League".to_string(),
            abbreviation: "AL".to_string(),
            id: "103".to_string(),
            divisions: vec!["201".to_string(), "202".to_string(), "200".to_string()],
        },
        League {
            name: "National League".to_string(),
            abbreviation: "NL".to_string(),
            id: "104".to_string(),
            divisions: vec!["204".to_string(), "205".to_string(), "203".to_string()],
        },
    ]
});

pub(super) static DIVISIONS: LazyLock<Vec<Division>> = LazyLock::new(|| {
    vec![
        Division {
            name: "AL East".to_string(),
            abbreviation: "E".to_string(),
            id: "201".to_string(),
            league_id: "103".to_string(),
            teams: vec![
                "111".to_string(),
                "110".to_string(),
                "147".to_string(),
                "141".to_string(),
                "139".to_string(),
            ],
        },
        Division {
            name: "AL Central".to_string(),
            abbreviation: "C".to_string(),
            id: "202".to_string(),
            league_id: "103".to_string(),
            teams: vec![
                "114".to_string(),
                "145".to_string(),
                "142".to_string(),
                "118".to_string(),
                "116".to_string(),
            ],
        },
        Division {
            name: "AL West".to_string(),
            abbreviation: "W".to_string(),
            id: "200".to_string(),
            league_id: "103".to_string(),
            teams: vec![
                "108".to_string(),
                "136".to_string(),
                "133".to_string(),
                "117".to_string(),
                "140".to_string(),
            ],
        },
        Division {
            name: "NL East".to_string(),
            abbreviation: "E".to_string(),
            id: "204".to_string(),
            league_id: "104".to_string(),
            teams: vec![
                "121".to_string(),
                "143".to_string(),
                "144".to_string(),
                "146".to_string(),
                "120".to_string(),
            ],
        },
        Division {
            name: "NL Central".to_string(),
            abbreviation: "C".to_string(),
            id: "205".to_string(),
            league_id: "104".to_string(),
            teams: vec![
                "112".to_string(),
                "158".to_string(),
                "113".to_string(),
                "138".to_string(),
                "134".to_string(),
            ],
        },
        Division {
            name: "NL West".to_string(),
            abbreviation: "W".to_string(),
            id: "203".to_string(),
            league_id: "104".to_string(),
            teams: vec![
                "119".to_string(),
                "137".to_string(),
                "135".to_string(),
                "115".to_string(),
                "109".to_string(),
            ],
        },
    ]
});

pub(super) static TEAMS: LazyLock<Vec<Team>> = LazyLock::new(|| {
    vec![
        Team {
            id: "109".to_string(),
            name: "Arizona Diamondbacks".to_string(),
            franchise_name: "Arizona".to_string(),
            club_name: String::new(),
            abbreviation: "ARI".to_string(),
            league_id: "104".to_string(),
            division_id: "203".to_string(),
            background_color: "#A71930".to_string(),
            accent_color: "#E3D4AD".to_string(),
            text_color: "#FFFFFF".to_string(),
            redirect: None,
            time_zone: "America/Los_Angeles".to_string(),
            venue_id: "15".to_string(),
        },
        Team {
            id: "144".to_string(),
            name: "Atlanta Braves".to_string(),
            franchise_name: "Atlanta".to_string(),
            club_name: "Braves".to_string(),
            abbreviation: "ATL".to_string(),
            league_id: "104".to_string(),
            division_id: "204".to_string(),
            background_color: "#13274F".to_string(),
            accent_color: "#CE1141".to_string(),
            text_color: "#FFFFFF".to_string(),
            redirect: None,
            time_zone: "America/New_York".to_string(),
            venue_id: "4705".to_string(),
        },
        Team {
            id: "110".to_string(),
            name: "Baltimore Orioles".to_string(),
            franchise_name: "Baltimore".to_string(),
            club_name: "Orioles".to_string(),
            abbreviation: "BAL".to_string(),
            league_id: "103".to_string(),
            division_id: "201".to_string(),
            background_color: "#DF4601".to_string(),
            accent_color: "#000000".to_string(),
            text_color: "#FFFFFF".to_string(),
            redirect: None,
            time_zone: "America/New_York".to_string(),
            venue_id: "2".to_string(),
        },
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
        },
        Team {
            id: "112".to_string(),
            name: "Chicago Cubs".to_string(),
            franchise_name: "Chicago".to_string(),
            club_name: "Cubs".to_string(),
            abbreviation: "CHC".to_string(),
            league_id: "104".to_string(),
            division_id: "205".to_string(),
            background_color: "#0E3386".to_string(),
            accent_color: "#CC3433".to_string(),
            text_color: "#FFFFFF".to_string(),
            redirect: None,
            time_zone: "America/Chicago".to_string(),
            venue_id: "17".to_string(),
        },
        Team {
            id: "145".to_string(),
            name: "Chicago White Sox".to_string(),
            franchise_name: "Chicago".to_string(),
            club_name: "White Sox".to_string(),
            abbreviation: "CWS".to_string(),
            league_id: "103".to_string(),
            division_id: "202".to_string(),
            background_color: "#27251F".to_string(),
            accent_color: "#C4CED4".to_string(),
            text_color: "#FFFFFF".to_string(),
            redirect: None,
            time_zone: "America/Chicago".to_string(),
            venue_id: "4".to_string(),
        },
        Team {
            id: "113".to_string(),
            name: "Cincinnati Reds".to_string(),
            franchise_name: "Cincinnati".to_string(),
            club_name: "Reds".to_string(),
            abbreviation: "CIN".to_string(),
            league_id: "104".to_string(),
            division_id: "205".to_string(),
            background_color: "#C6011F".to_string(),
            accent_color: "#000000".to_string(),
            text_color: "#FFFFFF".to_string(),
            redirect: None,
            time_zone: "America/New_York".to_string(),
            venue_id: "2602".to_string(),
        },
        Team {
            id: "115".to_string(),
            name: "Colorado Rockies".to_string(),
            franchise_name: "Colorado".to_string(),
            club_name: "Rockies".to_string(),
            abbreviation: "COL".to_string(),
            league_id: "104".to_string(),
            division_id: "203".to_string(),
            background_color: "#33006F".to_string(),
            accent_color: "#C4CED4".to_string(),
            text_color: "#C4CED4".to_string(),
            redirect: None,
            time_zone: "America/Denver".to_string(),
            venue_id: "19".to_string(),
        },
        Team {
            id: "114".to_string(),
            name: "Cleveland Guardians".to_string(),
            franchise_name: "Cleveland".to_string(),
            club_name: "Guardians".to_string(),
            abbreviation: "CLE".to_string(),
            league_id: "103".to_string(),
            division_id: "202".to_string(),
            background_color: "#0C2340".to_string(),
            accent_color: "#E31937".to_string(),
            text_color: "#FFFFFF".to_string(),
            redirect: None,
            time_zone: "America/New_York".to_string(),
            venue_id: "5".to_string(),
        },
        Team {
            id: "116".to_string(),
            name: "Detroit Tigers".to_string(),
            franchise_name: "Detroit".to_string(),
            club_name: "Tigers".to_string(),
            abbreviation: "DET".to_string(),
            league_id: "103".to_string(),
            division_id: "202".to_string(),
            background_color: "#0C2340".to_string(),
            accent_color: "#FA4616".to_string(),
            text_color: "#FFFFFF".to_string(),
            redirect: None,
            time_zone: "America/Chicago".to_string(),
            venue_id: "2394".to_string(),
        },
        Team {
            id: "117".to_string(),
            name: "Houston Astros".to_string(),
            franchise_name: "Houston".to_string(),
            club_name: "Astros".to_string(),
            abbreviation: "HOU".to_string(),
            league_id: "103".to_string(),
            division_id: "200".to_string(),
            background_color: "#002D62".to_string(),
            accent_color: "#EB6E1F".to_string(),
            text_color: "#FFFFFF".to_string(),
            redirect: None,
            time_zone: "America/Chicago".to_string(),
            venue_id: "2392".to_string(),
        },
        Team {
            id: "118".to_string(),
            name: "Kansas City Royals".to_string(),
            franchise_name: "Kansas City".to_string(),
            club_name: "Royals".to_string(),
            abbreviation: "KC".to_string(),
            league_id: "103".to_string(),
            division_id: "202".to_string(),
            background_color: "#004687".to_string(),
            accent_color: "#BD9B60".to_string(),
            text_color: "#FFFFFF".to_string(),
            redirect: None,
            time_zone: "America/Chicago".to_string(),
            venue_id: "7".to_string(),
        },
        Team {
            id: "108".to_string(),
            name: "Los Angeles Angels".to_string(),
            franchise_name: "Anaheim".to_string(),
            club_name: "Angels".to_string(),
            abbreviation: "LAA".to_string(),
            league_id: "103".to_string(),
            division_id: "200".to_string(),
            background_color: "#BA0021".to_string(),
            accent_color: "#003263".to_string(),
            text_color: "#C4CED4".to_string(),
            redirect: None,
            time_zone: "America/Los_Angeles".to_string(),
            venue_id: "1".to_string(),
        },
        Team {
            id: "119".to_string(),
            name: "Los Angeles Dodgers".to_string(),
            franchise_name: "Los Angeles".to_string(),
            club_name: "Dodgers".to_string(),
            abbreviation: "LAD".to_string(),
            league_id: "104".to_string(),
            division_id: "203".to_string(),
            background_color: "#005A9C".to_string(),
            accent_color: "#EF3E42".to_string(),
            text_color: "#FFFFFF".to_string(),
            redirect: None,
            time_zone: "America/Los_Angeles".to_string(),
            venue_id: "22".to_string(),
        },
        Team {
            id: "146".to_string(),
            name: "Miami Marlins".to_string(),
            franchise_name: "Miami".to_string(),
            club_name: "Marlins".to_string(),
            abbreviation: "MIA".to_string(),
            league_id: "104".to_string(),
            division_id: "204".to_string(),
            background_color: "#000000".to_string(),
            accent_color: "#00A3E0".to_string(),
            text_color: "#FFFFFF".to_string(),
            redirect: None,
            time_zone: "America/New_York".to_string(),
            venue_id: "4169".to_string(),
        },
        Team {
            id: "158".to_string(),
            name: "Milwaukee Brewers".to_string(),
            franchise_name: "Milwaukee".to_string(),
            club_name: "Brewers".to_string(),
            abbreviation: "MIL".to_string(),
            league_id: "104".to_string(),
            division_id: "205".to_string(),
            background_color: "#12284B".to_string(),
            accent_color: "#FFC52F".to_string(),
            text_color: "#FFFFFF".to_string(),
            redirect: None,
            time_zone: "America/Chicago".to_string(),
            venue_id: "32".to_string(),
        },
        Team {
            id: "142".to_string(),
            name: "Minnesota Twins".to_string(),
            franchise_name: "Minnesota".to_string(),
            club_name: "Twins".to_string(),
            abbreviation: "MIN".to_string(),
            league_id: "103".to_string(),
            division_id: "202".to_string(),
            background_color: "#002B5C".to_string(),
            accent_color: "#D31145".to_string(),
            text_color: "#FFFFFF".to_string(),
            redirect: None,
            time_zone: "America/Chicago".to_string(),
            venue_id: "3312".to_string(),
        },
        Team {
            id: "121".to_string(),
            name: "New York Mets".to_string(),
            franchise_name: "New York".to_string(),
            club_name: "Mets".to_string(),
            abbreviation: "NYM".to_string(),
            league_id: "104".to_string(),
            division_id: "204".to_string(),
            background_color: "#002D72".to_string(),
            accent_color: "#FF5910".to_string(),
            text_color: "#FFFFFF".to_string(),
            redirect: None,
            time_zone: "America/New_York".to_string(),
            venue_id: "3289".to_string(),
        },
        Team {
            id: "147".to_string(),
            name: "New York Yankees".to_string(),
            franchise_name: "New York".to_string(),
            club_name: "Yankees".to_string(),
            abbreviation: "NYY".to_string(),
            league_id: "103".to_string(),
            division_id: "201".to_string(),
            background_color: "#003087".to_string(),
            accent_color: "#E4002C".to_string(),
            text_color: "#FFFFFF".to_string(),
            redirect: None,
            time_zone: "America/New_York".to_string(),
            venue_id: "3313".to_string(),
        },
        Team {
            id: "133".to_string(),
            name: "Oakland Athletics".to_string(),
            franchise_name: "Oakland".to_string(),
            club_name: "Athletics".to_string(),
            abbreviation: "OAK".to_string(),
            league_id: "103".to_string(),
            division_id: "200".to_string(),
            background_color: "#003831".to_string(),
            accent_color: "#EFB21E".to_string(),
            text_color: "#FFFFFF".to_string(),
            redirect: None,
            time_zone: "America/Los_Angeles".to_string(),
            venue_id: "10".to_string(),
        },
        Team {
            id: "143".to_string(),
            name: "Philadelphia Phillies".to_string(),
            franchise_name: "Philadelphia".to_string(),
            club_name: "Phillies".to_string(),
            abbreviation: "PHI".to_string(),
            league_id: "104".to_string(),
            division_id: "204".to_string(),
            background_color: "#E81828".to_string(),
            accent_color: "#002D72".to_string(),
            text_color: "#FFFFFF".to_string(),
            redirect: None,
            time_zone: "America/New_York".to_string(),
            venue_id: "2681".to_string(),
        },
        Team {
            id: "134".to_string(),
            name: "Pittsburgh Pirates".to_string(),
            franchise_name: "Pittsburgh".to_string(),
            club_name: "Pirates".to_string(),
            abbreviation: "PIT".to_string(),
            league_id: "104".to_string(),
            division_id: "205".to_string(),
            background_color: "#27251F".to_string(),
            accent_color: "#FDB827".to_string(),
            text_color: "#FFFFFF".to_string(),
            redirect: None,
            time_zone: "America/New_York".to_string(),
            venue_id: "31".to_string(),
        },
        Team {
            id: "135".to_string(),
            name: "San Diego Padres".to_string(),
            franchise_name: "San Diego".to_string(),
            club_name: "Padres".to_string(),
            abbreviation: "SD".to_string(),
            league_id: "104".to_string(),
            division_id: "203".to_string(),
            background_color: "#2F241D".to_string(),
            accent_color: "#FFC425".to_string(),
            text_color: "#FFFFFF".to_string(),
            redirect: None,
            time_zone: "America/Los_Angeles".to_string(),
            venue_id: "2680".to_string(),
        },
        Team {
            id: "137".to_string(),
            name: "San Francisco Giants".to_string(),
            franchise_name: "San Francisco".to_string(),
            club_name: "Giants".to_string(),
            abbreviation: "SF".to_string(),
            league_id: "104".to_string(),
            division_id: "203".to_string(),
            background_color: "#FD5A1E".to_string(),
            accent_color: "#27251F".to_string(),
            text_color: "#FFFFFF".to_string(),
            redirect: None,
            time_zone: "America/Los_Angeles".to_string(),
            venue_id: "2395".to_string(),
        },
        Team {
            id: "136".to_string(),
            name: "Seattle Mariners".to_string(),
            franchise_name: "Seattle".to_string(),
            club_name: "Mariners".to_string(),
            abbreviation: "SEA".to_string(),
            league_id: "103".to_string(),
            division_id: "200".to_string(),
            background_color: "#0C2C56".to_string(),
            accent_color: "#005C5C".to_string(),
            text_color: "#C4CED4".to_string(),
            redirect: None,
            time_zone: "America/Los_Angeles".to_string(),
            venue_id: "680".to_string(),
        },
        Team {
            id: "138".to_string(),
            name: "St Louis Cardinals".to_string(),
            franchise_name: "St Louis".to_string(),
            club_name: "Cardinals".to_string(),
            abbreviation: "STL".to_string(),
            league_id: "104".to_string(),
            division_id: "205".to_string(),
            background_color: "#C41E3A".to_string(),
            accent_color: "#FEDB00".to_string(),
            text_color: "#FFFFFF".to_string(),
            redirect: None,
            time_zone: "America/Chicago".to_string(),
            venue_id: "2889".to_string(),
        },
        Team {
            id: "139".to_string(),
            name: "Tampa Bay Rays".to_string(),
            franchise_name: "Tampa Bay".to_string(),
            club_name: "Rays".to_string(),
            abbreviation: "TB".to_string(),
            league_id: "103".to_string(),
            division_id: "201".to_string(),
            background_color: "#092C5C".to_string(),
            accent_color: "#8FBCE6".to_string(),
            text_color: "#F5D130".to_string(),
            redirect: None,
            time_zone: "America/New_York".to_string(),
            venue_id: "12".to_string(),
        },
        Team {
            id: "140".to_string(),
            name: "Texas Rangers".to_string(),
            franchise_name: "Texas".to_string(),
            club_name: "Rangers".to_string(),
            abbreviation: "TEX".to_string(),
            league_id: "103".to_string(),
            division_id: "200".to_string(),
            background_color: "#003278".to_string(),
            accent_color: "#C0111F".to_string(),
            text_color: "#FFFFFF".to_string(),
            redirect: None,
            time_zone: "America/Chicago".to_string(),
            venue_id: "5325".to_string(),
        },
        Team {
            id: "141".to_string(),
            name: "Toronto Blue Jays".to_string(),
            franchise_name: "Toronto".to_string(),
            club_name: "Blue Jays".to_string(),
            abbreviation: "TOR".to_string(),
            league_id: "103".to_string(),
            division_id: "201".to_string(),
            background_color: "#134A8E".to_string(),
            accent_color: "#E8291C".to_string(),
            text_color: "#FFFFFF".to_string(),
            redirect: None,
            time_zone: "America/New_York".to_string(),
            venue_id: "14".to_string(),
        },
        Team {
            id: "120".to_string(),
            name: "Washington Nationals".to_string(),
            franchise_name: "Washington".to_string(),
            club_name: "Nationals".to_string(),
            abbreviation: "WSH".to_string(),
            league_id: "104".to_string(),
            division_id: "204".to_string(),
            background_color: "#AB0003".to_string(),
            accent_color: "#14225A".to_string(),
            text_color: "#FFFFFF".to_string(),
            redirect: None,
            time_zone: "America/New_York".to_string(),
            venue_id: "3309".to_string(),
        },
    ]
});

pub(super) static VENUES: LazyLock<Vec<Venue>> = LazyLock::new(|| {
    vec![
        Venue {
            id: "2".to_string(),
            short_name: String::new(),
            name: "Oriole Park at Camden Yards".to_string(),
            background_color: "#0066DD".to_string(),
            background_color_2: "#004D99".to_string(),
            accent_color: "#E0E0E0".to_string(),
            text_color: "#E0E0E0".to_string(),
            time_zone: "America/New_York".to_string(),
        },
        Venue {
            id: "3".to_string(),
            short_name: "Fenway".to_string(),
            name: "Fenway Park".to_string(),
            background_color: "#54796D".to_string(),
            background_color_2: "#44655D".to_string(),
            accent_color: "#E0E0E0".to_string(),
            text_color: "#E0E0E0".to_string(),
            time_zone: "America/New_York".to_string(),
        },
        Venue {
            id: "3313".to_string(),
            short_name: String::new(),
            name: "Yankee Stadium".to_string(),
            background_color: "#0066DD".to_string(),
            background_color_2: "#004D99".to_string(),
            accent_color: "#E0E0E0".to_string(),
            text_color: "#E0E0E0".to_string(),
            time_zone: "America/New_York".to_string(),
        },
        Venue {
            id: "12".to_string(),
            short_name: String::new(),
            name: "Tropicana Field".to_string(),
            background_color: "#0066DD".to_string(),
            background_color_2: "#004D99".to_string(),
            accent_color: "#E0E0E0".to_string(),
            text_color: "#E0E0E0".to_string(),
            time_zone: "America/New_York".to_string(),
        },
        Venue {
            id: "14".to_string(),
            short_name: String::new(),
            name: "Rogers Centre".to_string(),
            background_color: "#0066DD".to_string(),
            background_color_2: "#004D99".to_string(),
            accent_color: "#E0E0E0".to_string(),
            text_color: "#E0E0E0".to_string(),
            time_zone: "America/New_York".to_string(),
        },
        Venue {
            id: "4".to_string(),
            short_name: String::new(),
            name: "Guaranteed Rate Field".to_string(),
            background_color: "#0066DD".to_string(),
            background_color_2: "#004D99".to_string(),
            accent_color: "#E0E0E0".to_string(),
            text_color: "#E0E0E0".to_string(),
            time_zone: "America/Chicago".to_string(),
        },
        Venue {
            id: "5".to_string(),
            short_name: String::new(),
            name: "Progressive Field".to_string(),
            background_color: "#0066DD".to_string(),
            background_color_2: "#004D99".to_string(),
            accent_color: "#E0E0E0".to_string(),
            text_color: "#E0E0E0".to_string(),
            time_zone: "America/New_York".to_string(),
        },
        Venue {
            id: "2394".to_string(),
            short_name: String::new(),
            name: "Comerica Park".to_string(),
            background_color: "#0066DD".to_string(),
            background_color_2: "#004D99".to_string(),
            accent_color: "#E0E0E0".to_string(),
            text_color: "#E0E0E0".to_string(),
            time_zone: "America/Chicago".to_string(),
        },
        Venue {
            id: "7".to_string(),
            short_name: String::new(),
            name: "Kauffman Stadium".to_string(),
            background_color: "#0066DD".to_string(),
            background_color_2: "#004D99".to_string(),
            accent_color: "#E0E0E0".to_string(),
            text_color: "#E0E0E0".to_string(),
            time_zone: "America/Chicago".to_string(),
        },
        Venue {
            id: "3312".to_string(),
            short_name: String::new(),
            name: "Target Field".to_string(),
            background_color: "#0066DD".to_string(),
            background_color_2: "#004D99".to_string(),
            accent_color: "#E0E0E0".to_string(),
            text_color: "#E0E0E0".to_string(),
            time_zone: "America/Chicago".to_string(),
        },
        Venue {
            id: "2392".to_string(),
            short_name: String::new(),
            name: "Minute Maid Park".to_string(),
            background_color: "#0066DD".to_string(),
            background_color_2: "#004D99".to_string(),
            accent_color: "#E0E0E0".to_string(),
            text_color: "#E0E0E0".to_string(),
            time_zone: "America/Chicago".to_string(),
        },
        Venue {
            id: "1".to_string(),
            short_name: String::new(),
            name: "Angel Stadium".to_string(),
            background_color: "#0066DD".to_string(),
            background_color_2: "#004D99".to_string(),
            accent_color: "#E0E0E0".to_string(),
            text_color: "#E0E0E0".to_string(),
            time_zone: "America/Los_Angeles".to_string(),
        },
        Venue {
            id: "10".to_string(),
            short_name: String::new(),
            name: "Oakland Coliseum".to_string(),
            background_color: "#0066DD".to_string(),
            background_color_2: "#004D99".to_string(),
            accent_color: "#E0E0E0".to_string(),
            text_color: "#E0E0E0".to_string(),
            time_zone: "America/Los_Angeles".to_string(),
        },
        Venue {
            id: "680".to_string(),
            short_name: String::new(),
            name: "T-Mobile Park".to_string(),
            background_color: "#0066DD".to_string(),
            background_color_2: "#004D99".to_string(),
            accent_color: "#E0E0E0".to_string(),
            text_color: "#E0E0E0".to_string(),
            time_zone: "America/Los_Angeles".to_string(),
        },
        Venue {
            id: "5325".to_string(),
            short_name: String::new(),
            name: "Globe Life Field".to_string(),
            background_color: "#0066DD".to_string(),
            background_color_2: "#004D99".to_string(),
            accent_color: "#E0E0E0".to_string(),
            text_color: "#E0E0E0".to_string(),
            time_zone: "America/Los_Angeles".to_string(),
        },
        Venue {
            id: "4705".to_string(),
            short_name: String::new(),
            name: "Truist Park".to_string(),
            background_color: "#0066DD".to_string(),
            background_color_2: "#004D99".to_string(),
            accent_color: "#E0E0E0".to_string(),
            text_color: "#E0E0E0".to_string(),
            time_zone: "America/New_York".to_string(),
        },
        Venue {
            id: "4169".to_string(),
            short_name: String::new(),
            name: "loanDepot park".to_string(),
            background_color: "#0066DD".to_string(),
            background_color_2: "#004D99".to_string(),
            accent_color: "#E0E0E0".to_string(),
            text_color: "#E0E0E0".to_string(),
            time_zone: "America/New_York".to_string(),
        },
        Venue {
            id: "3289".to_string(),
            short_name: String::new(),
            name: "Citi Field".to_string(),
            background_color: "#0066DD".to_string(),
            background_color_2: "#004D99".to_string(),
            accent_color: "#E0E0E0".to_string(),
            text_color: "#E0E0E0".to_string(),
            time_zone: "America/New_York".to_string(),
        },
        Venue {
            id: "2681".to_string(),
            short_name: String::new(),
            name: "Citizens Bank Park".to_string(),
            background_color: "#0066DD".to_string(),
            background_color_2: "#004D99".to_string(),
            accent_color: "#E0E0E0".to_string(),
            text_color: "#E0E0E0".to_string(),
            time_zone: "America/New_York".to_string(),
        },
        Venue {
            id: "3309".to_string(),
            short_name: String::new(),
            name: "Nationals Park".to_string(),
            background_color: "#0066DD".to_string(),
            background_color_2: "#004D99".to_string(),
            accent_color: "#E0E0E0".to_string(),
            text_color: "#E0E0E0".to_string(),
            time_zone: "America/New_York".to_string(),
        },
        Venue {
            id: "17".to_string(),
            short_name: String::new(),
            name: "Wrigley Field".to_string(),
            background_color: "#0066DD".to_string(),
            background_color_2: "#004D99".to_string(),
            accent_color: "#E0E0E0".to_string(),
            text_color: "#E0E0E0".to_string(),
            time_zone: "America/Chicago".to_string(),
        },
        Venue {
            id: "2602".to_string(),
            short_name: String::new(),
            name: "Great American Ball Park".to_string(),
            background_color: "#0066DD".to_string(),
            background_color_2: "#004D99".to_string(),
            accent_color: "#E0E0E0".to_string(),
            text_color: "#E0E0E0".to_string(),
            time_zone: "America/New_York".to_string(),
        },
        Venue {
            id: "32".to_string(),
            short_name: String::new(),
            name: "American Family Field".to_string(),
            background_color: "#0066DD".to_string(),
            background_color_2: "#004D99".to_string(),
            accent_color: "#E0E0E0".to_string(),
            text_color: "#E0E0E0".to_string(),
            time_zone: "America/Chicago".to_string(),
        },
        Venue {
            id: "31".to_string(),
            short_name: String::new(),
            name: "PNC Park".to_string(),
            background_color: "#0066DD".to_string(),
            background_color_2: "#004D99".to_string(),
            accent_color: "#E0E0E0".to_string(),
            text_color: "#E0E0E0".to_string(),
            time_zone: "America/New_York".to_string(),
        },
        Venue {
            id: "2889".to_string(),
            short_name: String::new(),
            name: "Busch Stadium".to_string(),
            background_color: "#0066DD".to_string(),
            background_color_2: "#004D99".to_string(),
            accent_color: "#E0E0E0".to_string(),
            text_color: "#E0E0E0".to_string(),
            time_zone: "America/Chicago".to_string(),
        },
        Venue {
            id: "15".to_string(),
            short_name: String::new(),
            name: "Chase Field".to_string(),
            background_color: "#0066DD".to_string(),
            background_color_2: "#004D99".to_string(),
            accent_color: "#E0E0E0".to_string(),
            text_color: "#E0E0E0".to_string(),
            time_zone: "America/Los_Angeles".to_string(),
        },
        Venue {
            id: "19".to_string(),
            short_name: String::new(),
            name: "Coors Field".to_string(),
            background_color: "#0066DD".to_string(),
            background_color_2: "#004D99".to_string(),
            accent_color: "#E0E0E0".to_string(),
            text_color: "#E0E0E0".to_string(),
            time_zone: "America/Denver".to_string(),
        },
        Venue {
            id: "22".to_string(),
            short_name: String::new(),
            name: "Dodger Stadium".to_string(),
            background_color: "#0066DD".to_string(),
            background_color_2: "#004D99".to_string(),
            accent_color: "#E0E0E0".to_string(),
            text_color: "#E0E0E0".to_string(),
            time_zone: "America/Los_Angeles".to_string(),
        },
        Venue {
            id: "2680".to_string(),
            short_name: String::new(),
            name: "Petco Park".to_string(),
            background_color: "#0066DD".to_string(),
            background_color_2: "#004D99".to_string(),
            accent_color: "#E0E0E0".to_string(),
            text_color: "#E0E0E0".to_string(),
            time_zone: "America/Los_Angeles".to_string(),
        },
        Venue {
            id: "2395".to_string(),
            short_name: String::new(),
            name: "Oracle Park".to_string(),
            background_color: "#0066DD".to_string(),
            background_color_2: "#004D99".to_string(),
            accent_color: "#E0E0E0".to_string(),
            text_color: "#E0E0E0".to_string(),
            time_zone: "America/Los_Angeles".to_string(),
        },
    ]
});
