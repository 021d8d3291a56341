use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::listing::{build_ignore_set, ListingOptions};

const AFTER_HELP: &str = "\
Examples:
  cli-ls -la             long listing, hidden entries included
  cli-ls -Rm src         recursive comma separated listing of src
  cli-ls -lh --no-color  human-readable sizes, no styling

Exit status:
  0  if OK
  1  if minor problems (e.g., cannot access subdirectory)
  2  if serious trouble (e.g., cannot access command-line argument)";

// `-h` means --human-readable, so clap's short help flag is disabled.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "cli-ls",
    version,
    about = "List directory contents in terminal-width aware columns",
    disable_help_flag = true,
    after_help = AFTER_HELP
)]
pub struct Args {
    /// Directory to list (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Do not ignore hidden entries and/or entries starting with .
    #[arg(short = 'a', long = "all")]
    pub all: bool,

    /// Do not ignore hidden entries and do not list implied . and ..
    #[arg(short = 'A', long = "almost-all")]
    pub almost_all: bool,

    /// Use a long listing format
    #[arg(short = 'l', long = "list")]
    pub long_format: bool,

    /// Fill width with a comma separated list of entries
    #[arg(short = 'm', long = "comma")]
    pub comma: bool,

    /// List one entry per line
    #[arg(short = '1', long = "one-per-line")]
    pub one_per_line: bool,

    /// Append indicator (one of /@*) to entries
    #[arg(short = 'F', long = "classify")]
    pub classify: bool,

    /// Append / indicator to directories
    #[arg(short = 'p', long = "indicator-style")]
    pub indicator_style: bool,

    /// With -l, print human readable sizes (e.g., 1K 234M 2G)
    #[arg(short = 'h', long = "human-readable")]
    pub human_readable: bool,

    /// Reverse order while sorting
    #[arg(short = 'r', long = "reverse")]
    pub reverse: bool,

    /// List subdirectories recursively
    #[arg(short = 'R', long = "recursive")]
    pub recursive: bool,

    /// Glob patterns of entries to hide (repeatable)
    #[arg(short = 'I', long = "ignore", value_name = "PATTERN", action = ArgAction::Append)]
    pub ignore: Vec<String>,

    /// Assume the screen is COLS columns wide
    #[arg(short = 'w', long = "width", value_name = "COLS")]
    pub width: Option<usize>,

    /// Print entry names without escaping control characters
    #[arg(long = "show-control-chars")]
    pub show_control_chars: bool,

    /// Disable colored output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Display some debugging information and exit
    #[arg(short = 'd', long = "debug")]
    pub debug: bool,

    /// Increase log verbosity on stderr (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(long = "quiet")]
    pub quiet: bool,

    /// Print help
    #[arg(long = "help", action = ArgAction::Help)]
    #[allow(dead_code)]
    help: Option<bool>,
}

impl Args {
    /// Enforce invariants after parsing.
    pub fn validated(mut self) -> Self {
        // Respect NO_COLOR env var
        if std::env::var_os("NO_COLOR").is_some() {
            self.no_color = true;
        }
        if self.quiet {
            self.verbose = 0;
        }
        if self.width == Some(0) {
            self.width = None;
        }
        self
    }

    /// Snapshot the flags into the options every component reads.
    pub fn listing_options(&self) -> ListingOptions {
        ListingOptions {
            show_hidden: self.all,
            show_almost_all: self.almost_all,
            long_format: self.long_format,
            comma_format: self.comma,
            one_per_line: self.one_per_line,
            classify: self.classify,
            indicator_dirs: self.indicator_style,
            human_readable: self.human_readable,
            reverse: self.reverse,
            recursive: self.recursive,
            use_color: !self.no_color,
            show_control_chars: self.show_control_chars,
            ignore_patterns: build_ignore_set(&self.ignore),
        }
    }

    /// Default log filter directive for the chosen verbosity.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
