use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// MLB Reference Teletext Viewer
///
/// A teletext-style viewer for MLB's organizational hierarchy. Without
/// arguments it renders the full roster, one line per team, grouped by
/// league and division and painted in each club's colors. The run exits
/// with a failure status unless all 30 teams are enumerated, which makes
/// it usable as a dataset smoke test in scripts.
///
/// Point lookups (--team, --venue) resolve a single record and print a
/// detail card instead of the roster.
#[derive(Parser, Debug)]
#[command(author = "Niko Salonen", version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Look up a single team by abbreviation ("BOS") or statsapi id ("111")
    /// and print its detail card.
    #[arg(
        short = 't',
        long = "team",
        help_heading = "Lookups",
        value_name = "ABBR_OR_ID"
    )]
    pub team: Option<String>,

    /// Look up a single venue by short name ("Fenway") or statsapi id ("3")
    /// and print its detail card.
    #[arg(long = "venue", help_heading = "Lookups", value_name = "NAME_OR_ID")]
    pub venue: Option<String>,

    /// Plain text output without colors.
    /// Useful for terminals without truecolor support or for piping.
    #[arg(short = 'p', long = "plain", help_heading = "Display Options")]
    pub plain: bool,

    /// Emit the result as pretty-printed JSON instead of a teletext page.
    /// In roster mode this dumps the whole dataset.
    #[arg(short = 'j', long = "json", help_heading = "Display Options")]
    pub json: bool,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(short = 'l', long = "list-config", help_heading = "Configuration")]
    pub list_config: bool,

    /// Enable debug mode. Info logs are written to stdout in addition to the log file.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
