// src/teletext_ui.rs - teletext-style rendering of the reference dataset

use crate::constants::ui::{ABBREVIATION_WIDTH, CONTENT_MARGIN, TEAM_NAME_WIDTH, VENUE_NAME_WIDTH};
use crate::error::AppError;
use crate::league_data::{Division, League, Team, Venue, division_by_id, league_by_id};
use crossterm::style::Color;
use std::io::Write;

// Teletext appearance: bright blue header band, green subheaders,
// white body text (256-color ANSI values)
const HEADER_BG: u8 = 21;
const HEADER_FG: u8 = 231;
const SUBHEADER_FG: u8 = 46;
const TEXT_FG: u8 = 231;

/// Parses a `#RRGGBB` color string into an RGB terminal color.
///
/// Anything that is not a 7-character hex triplet with a leading `#`
/// yields `None`; callers fall back to the default terminal colors.
///
/// # Examples
/// ```
/// use crossterm::style::Color;
/// use mlb_teletext::teletext_ui::parse_hex_color;
///
/// assert_eq!(
///     parse_hex_color("#BD3039"),
///     Some(Color::Rgb { r: 189, g: 48, b: 57 })
/// );
/// assert_eq!(parse_hex_color("BD3039"), None);
/// ```
pub fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb { r, g, b })
}

/// Paints `text` with an optional truecolor foreground/background pair,
/// resetting attributes afterwards. Non-RGB colors are ignored.
fn paint(text: &str, foreground: Option<Color>, background: Option<Color>) -> String {
    let mut painted = String::new();
    if let Some(Color::Rgb { r, g, b }) = foreground {
        painted.push_str(&format!("\x1b[38;2;{r};{g};{b}m"));
    }
    if let Some(Color::Rgb { r, g, b }) = background {
        painted.push_str(&format!("\x1b[48;2;{r};{g};{b}m"));
    }
    painted.push_str(text);
    painted.push_str("\x1b[0m");
    painted
}

#[derive(Debug)]
enum RosterRow {
    DivisionHeader {
        league: &'static League,
        division: &'static Division,
    },
    TeamLine {
        team: &'static Team,
        venue: Option<&'static Venue>,
    },
}

/// One teletext page listing the roster grouped by league and division.
///
/// Rows are accumulated in insertion order and rendered in one pass into
/// a string buffer that is written out with a single call, so partially
/// drawn pages never reach the terminal.
#[derive(Debug)]
pub struct RosterPage {
    title: String,
    subheader: String,
    rows: Vec<RosterRow>,
    plain: bool,
}

impl RosterPage {
    /// Creates an empty page.
    ///
    /// # Arguments
    /// * `title` - The page title, shown in the header band
    /// * `subheader` - The subtitle below the title
    /// * `plain` - Disable all coloring (no escape codes in the output)
    pub fn new(title: String, subheader: String, plain: bool) -> Self {
        RosterPage {
            title,
            subheader,
            rows: Vec::new(),
            plain,
        }
    }

    /// Starts a new division block.
    pub fn add_division_header(&mut self, league: &'static League, division: &'static Division) {
        self.rows.push(RosterRow::DivisionHeader { league, division });
    }

    /// Adds one team line. A team whose venue id does not resolve is
    /// still listed; the venue column is left blank.
    pub fn add_team_line(&mut self, team: &'static Team, venue: Option<&'static Venue>) {
        self.rows.push(RosterRow::TeamLine { team, venue });
    }

    /// Number of team lines on the page.
    pub fn team_count(&self) -> usize {
        self.rows
            .iter()
            .filter(|row| matches!(row, RosterRow::TeamLine { .. }))
            .count()
    }

    fn push_header(&self, buffer: &mut String) {
        if self.plain {
            buffer.push_str(&format!("{} - {}\n", self.title, self.subheader));
            return;
        }
        let band = format!(" {:<width$}", self.title, width = 39);
        buffer.push_str(&format!(
            "\x1b[48;5;{HEADER_BG}m\x1b[38;5;{HEADER_FG}m{band}\x1b[0m\n"
        ));
        buffer.push_str(&format!(
            "\x1b[38;5;{SUBHEADER_FG}m {}\x1b[0m\n",
            self.subheader
        ));
    }

    fn push_division_header(&self, buffer: &mut String, league: &League, division: &Division) {
        buffer.push('\n');
        let heading = format!("{} {}", league.name, division.name);
        if self.plain {
            buffer.push_str(&heading);
        } else {
            buffer.push_str(&format!("\x1b[38;5;{SUBHEADER_FG}m{heading}\x1b[0m"));
        }
        buffer.push('\n');
    }

    fn push_team_line(&self, buffer: &mut String, team: &Team, venue: Option<&Venue>) {
        let identity = format!(
            " {:<abbr$} {:<name$}",
            team.abbreviation,
            team.name,
            abbr = ABBREVIATION_WIDTH,
            name = TEAM_NAME_WIDTH,
        );
        let venue_name = venue.map(|v| v.name.as_str()).unwrap_or("");
        let rest = format!(
            " play at {:<width$} {}",
            venue_name,
            team.time_zone,
            width = VENUE_NAME_WIDTH,
        );

        buffer.push_str(&" ".repeat(CONTENT_MARGIN));
        if self.plain {
            buffer.push_str(&identity);
            buffer.push_str(&rest);
        } else {
            buffer.push_str(&paint(
                &identity,
                parse_hex_color(&team.text_color),
                parse_hex_color(&team.background_color),
            ));
            buffer.push_str(&format!("\x1b[38;5;{TEXT_FG}m{rest}\x1b[0m"));
        }
        buffer.push('\n');
    }

    /// Renders the whole page into the given writer in one write.
    pub fn render_buffered<W: Write>(&self, writer: &mut W) -> Result<(), AppError> {
        let mut buffer = String::new();
        self.push_header(&mut buffer);

        for row in &self.rows {
            match row {
                RosterRow::DivisionHeader { league, division } => {
                    self.push_division_header(&mut buffer, league, division);
                }
                RosterRow::TeamLine { team, venue } => {
                    self.push_team_line(&mut buffer, team, venue);
                }
            }
        }

        writer.write_all(buffer.as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

/// Formats a detail card for one team.
///
/// Colored mode paints the headline in the club's colors; the body lists
/// the record's fields with the division, league and venue references
/// resolved to their names where possible.
pub fn team_card(team: &Team, venue: Option<&Venue>, plain: bool) -> String {
    let mut card = String::new();

    let headline = format!(" {} {} ", team.abbreviation, team.name);
    if plain {
        card.push_str(&headline);
    } else {
        card.push_str(&paint(
            &headline,
            parse_hex_color(&team.text_color),
            parse_hex_color(&team.background_color),
        ));
    }
    card.push('\n');

    let league_name = league_by_id(&team.league_id)
        .map(|league| league.name.as_str())
        .unwrap_or("(unknown league)");
    let division_name = division_by_id(&team.division_id)
        .map(|division| division.name.as_str())
        .unwrap_or("(unknown division)");
    let venue_name = venue.map(|v| v.name.as_str()).unwrap_or("(unknown venue)");

    card.push_str(&format!("Franchise:  {}\n", team.franchise_name));
    card.push_str(&format!("Club:       {}\n", team.club_name));
    card.push_str(&format!("League:     {league_name}\n"));
    card.push_str(&format!("Division:   {division_name}\n"));
    card.push_str(&format!("Venue:      {venue_name}\n"));
    card.push_str(&format!("Time zone:  {}\n", team.time_zone));
    card.push_str(&format!(
        "Colors:     {} / {} / {}\n",
        team.background_color, team.accent_color, team.text_color
    ));
    if let Some(redirect) = &team.redirect {
        card.push_str(&format!("Redirect:   {redirect}\n"));
    }

    card
}

/// Formats a detail card for one venue, including the occupying team
/// when one is found.
pub fn venue_card(venue: &Venue, occupant: Option<&Team>, plain: bool) -> String {
    let mut card = String::new();

    let headline = if venue.short_name.is_empty() {
        format!(" {} ", venue.name)
    } else {
        format!(" {} ({}) ", venue.name, venue.short_name)
    };
    if plain {
        card.push_str(&headline);
    } else {
        card.push_str(&paint(
            &headline,
            parse_hex_color(&venue.text_color),
            parse_hex_color(&venue.background_color),
        ));
    }
    card.push('\n');

    let occupant_name = occupant.map(|team| team.name.as_str()).unwrap_or("(none)");
    card.push_str(&format!("Home of:    {occupant_name}\n"));
    card.push_str(&format!("Time zone:  {}\n", venue.time_zone));
    card.push_str(&format!(
        "Colors:     {} / {} / {} / {}\n",
        venue.background_color, venue.background_color_2, venue.accent_color, venue.text_color
    ));

    card
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::league_data::{
        divisions_by_league_id, leagues, team_by_abbreviation, teams_by_division, venue_by_id,
    };

    #[test]
    fn test_parse_hex_color_valid() {
        assert_eq!(
            parse_hex_color("#BD3039"),
            Some(Color::Rgb { r: 189, g: 48, b: 57 })
        );
        assert_eq!(
            parse_hex_color("#000000"),
            Some(Color::Rgb { r: 0, g: 0, b: 0 })
        );
        assert_eq!(
            parse_hex_color("#FFFFFF"),
            Some(Color::Rgb { r: 255, g: 255, b: 255 })
        );
    }

    #[test]
    fn test_parse_hex_color_invalid() {
        assert_eq!(parse_hex_color(""), None);
        assert_eq!(parse_hex_color("BD3039"), None);
        assert_eq!(parse_hex_color("#BD30"), None);
        assert_eq!(parse_hex_color("#BD30391"), None);
        assert_eq!(parse_hex_color("#GGGGGG"), None);
    }

    fn build_full_roster(plain: bool) -> RosterPage {
        let mut page = RosterPage::new(
            "MLB TELETEXT".to_string(),
            "ORGANIZATIONAL DIRECTORY".to_string(),
            plain,
        );
        for league in leagues() {
            for division in divisions_by_league_id(&league.id).unwrap() {
                page.add_division_header(league, division);
                for team in teams_by_division(&division.id).unwrap() {
                    page.add_team_line(team, venue_by_id(&team.venue_id));
                }
            }
        }
        page
    }

    #[test]
    fn test_roster_page_counts_team_lines_only() {
        let page = build_full_roster(true);
        assert_eq!(page.team_count(), 30);
    }

    #[test]
    fn test_plain_render_has_no_escape_codes() {
        let page = build_full_roster(true);
        let mut output = Vec::new();
        page.render_buffered(&mut output).unwrap();
        let rendered = String::from_utf8(output).unwrap();

        assert!(!rendered.contains('\x1b'));
        assert!(rendered.contains("American League AL East"));
        assert!(rendered.contains("BOS"));
        assert!(rendered.contains("Fenway Park"));
        assert!(rendered.contains("America/New_York"));
    }

    #[test]
    fn test_plain_render_lists_every_team() {
        let page = build_full_roster(true);
        let mut output = Vec::new();
        page.render_buffered(&mut output).unwrap();
        let rendered = String::from_utf8(output).unwrap();

        for team in crate::league_data::teams() {
            assert!(
                rendered.contains(&team.abbreviation),
                "missing {} from roster page",
                team.abbreviation
            );
        }
    }

    #[test]
    fn test_colored_render_embeds_rgb_codes() {
        let page = build_full_roster(false);
        let mut output = Vec::new();
        page.render_buffered(&mut output).unwrap();
        let rendered = String::from_utf8(output).unwrap();

        // Boston's background #BD3039 as a truecolor background sequence
        assert!(rendered.contains("\x1b[48;2;189;48;57m"));
    }

    #[test]
    fn test_team_card_resolves_references() {
        let team = team_by_abbreviation("BOS").unwrap();
        let card = team_card(team, venue_by_id(&team.venue_id), true);

        assert!(card.contains("BOS Boston Red Sox"));
        assert!(card.contains("American League"));
        assert!(card.contains("AL East"));
        assert!(card.contains("Fenway Park"));
        assert!(card.contains("#BD3039"));
    }

    #[test]
    fn test_venue_card_names_occupant() {
        let venue = venue_by_id("3").unwrap();
        let card = venue_card(venue, crate::league_data::team_by_venue_id(&venue.id), true);

        assert!(card.contains("Fenway Park (Fenway)"));
        assert!(card.contains("Boston Red Sox"));
    }

    #[test]
    fn test_venue_card_without_short_name_has_no_parenthetical() {
        let venue = venue_by_id("17").unwrap();
        let card = venue_card(venue, None, true);

        assert!(card.contains("Wrigley Field"));
        assert!(!card.contains("()"));
        assert!(card.contains("(none)"));
    }
}
