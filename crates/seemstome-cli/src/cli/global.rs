//! Flags accepted by every subcommand, in any position.

use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Increase logging verbosity. Conflicts with `--quiet`.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase verbosity (-v, -vv, -vvv)",
        long_help = "Increase logging verbosity (logs go to stderr):
    (none)  - Warnings and errors
    -v      - Info level (which files, which command line)
    -vv     - Debug level (payloads, exit statuses)
    -vvv    - Trace level"
    )]
    pub verbose: u8,

    /// Suppress non-error output. Scaffolder diagnostics and per-file
    /// failures are still printed.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Suppress non-error output"
    )]
    pub quiet: bool,

    /// Also set by `NO_COLOR` with any value other than empty, `0`,
    /// `false`, `no` or `off`.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new(),
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Configuration file, layered over the global and local files.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Configuration file path"
    )]
    pub config: Option<PathBuf>,

    /// `json` replaces human output of `scaffold` and `concat` with one
    /// summary document.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Output format"
    )]
    pub output_format: OutputFormat,
}

/// Rendering of command output on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human on a terminal, plain otherwise.
    #[default]
    Auto,
    /// Human-readable with colors.
    Human,
    /// Plain text without colors.
    Plain,
    /// A single JSON summary document.
    Json,
}
