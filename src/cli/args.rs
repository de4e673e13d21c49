//! CLI argument definitions
//!
//! Global CLI options and configuration merging logic.

use std::io::IsTerminal;

use clap::{Parser, ValueEnum};

use crate::config::{Config, ConfigColorMode, ConfigSortOrder};

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum SortOrder {
    /// A to Z by file name (default)
    #[default]
    Asc,
    /// Z to A by file name
    Desc,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq)]
pub(crate) enum ColorMode {
    /// Auto-detect based on terminal (default)
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

const EXAMPLES: &str = "\
Examples:
  List every test in a directory:
    testscan --directory /path/to/logs

  List tests within the inclusive range 2020-01-15 to 2020-01-23:
    testscan --directory /path/to/logs --date-range 2020-01-15 2020-01-23

  List tests for one participant in that range:
    testscan --directory /path/to/logs --date-range 2020-01-15 2020-01-23 --participant MCWA004

  List only the 'Reading(2)' tests:
    testscan --directory /path/to/logs --test 'Reading(2)'

  List only the file names that could not be parsed:
    testscan --directory /path/to/logs --list-invalid-files";

#[derive(Parser)]
#[command(name = "testscan")]
#[command(about = "List test-session information for a directory of log files", version)]
#[command(after_help = EXAMPLES)]
pub(crate) struct Cli {
    /// Read the test files within this directory
    #[arg(short, long)]
    pub(crate) directory: String,

    /// Display results within this inclusive date range (YYYYMMDD or YYYY-MM-DD)
    #[arg(long, num_args = 2, value_names = ["START", "END"])]
    pub(crate) date_range: Option<Vec<String>>,

    /// Display results for this participant only
    #[arg(short, long)]
    pub(crate) participant: Option<String>,

    /// List only information regarding this test
    #[arg(short, long)]
    pub(crate) test: Option<String>,

    /// Print only the missing-test list and exit
    #[arg(long)]
    pub(crate) missing_tests: bool,

    /// Print only the invalid file names and exit
    #[arg(long)]
    pub(crate) list_invalid_files: bool,

    /// Require more than two underscores per file name and normalize
    /// hyphens to underscores while scanning
    #[arg(short, long)]
    pub(crate) strict: bool,

    /// Abort on the first file whose timestamp cannot be detected
    #[arg(long)]
    pub(crate) fail_fast: bool,

    /// Compute missing tests from observed test names only, skipping the
    /// built-in expected-test table
    #[arg(long)]
    pub(crate) observed_only: bool,

    /// Sort order for the report table
    #[arg(short, long, value_enum, default_value = "asc")]
    pub(crate) order: SortOrder,

    /// Output as JSON
    #[arg(short, long)]
    pub(crate) json: bool,

    /// Color output mode
    #[arg(long, value_enum, default_value = "auto")]
    pub(crate) color: ColorMode,

    /// Disable colored output (shorthand for --color=never)
    #[arg(long)]
    pub(crate) no_color: bool,

    /// Enable debug output (show per-file parse details)
    #[arg(long)]
    pub(crate) debug: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        // For boolean flags, config only applies if CLI is false (default)
        if !self.strict && config.strict {
            self.strict = true;
        }
        if !self.fail_fast && config.fail_fast {
            self.fail_fast = true;
        }
        if !self.observed_only && config.observed_only {
            self.observed_only = true;
        }
        if !self.no_color && config.no_color {
            self.no_color = true;
        }
        if !self.debug && config.debug {
            self.debug = true;
        }

        // For enum values, apply config only if CLI is at its default
        if let Some(order) = config.order
            && self.order == SortOrder::Asc
        {
            self.order = match order {
                ConfigSortOrder::Asc => SortOrder::Asc,
                ConfigSortOrder::Desc => SortOrder::Desc,
            };
        }
        if let Some(color) = config.color
            && self.color == ColorMode::Auto
        {
            self.color = match color {
                ConfigColorMode::Auto => ColorMode::Auto,
                ConfigColorMode::Always => ColorMode::Always,
                ConfigColorMode::Never => ColorMode::Never,
            };
        }

        self
    }

    pub(crate) fn use_color(&self) -> bool {
        if self.no_color {
            return false;
        }
        match self.color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => std::io::stdout().is_terminal(),
        }
    }
}
