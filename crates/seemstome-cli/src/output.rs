//! Everything the commands print to stdout goes through [`OutputManager`].
//!
//! Logs and fatal errors go to stderr elsewhere; this module only deals
//! with command output.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::{AnsiColors, OwoColorize};

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Marker and colour of a status line.
#[derive(Debug, Clone, Copy)]
enum Tone {
    Success,
    Error,
    Warning,
    Info,
}

impl Tone {
    fn marker(self) -> &'static str {
        match self {
            Tone::Success => "\u{2713}",
            Tone::Error => "\u{2717}",
            Tone::Warning => "\u{26a0}",
            Tone::Info => "\u{2139}",
        }
    }

    fn color(self) -> AnsiColors {
        match self {
            Tone::Success => AnsiColors::Green,
            Tone::Error => AnsiColors::Red,
            Tone::Warning => AnsiColors::Yellow,
            Tone::Info => AnsiColors::Blue,
        }
    }
}

pub struct OutputManager {
    format: OutputFormat,
    quiet: bool,
    color: bool,
    term: Term,
}

impl OutputManager {
    /// `Auto` becomes `Human` on a terminal and `Plain` otherwise. Only
    /// `Human` output is ever coloured.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let format = match args.output_format {
            OutputFormat::Auto if io::stdout().is_terminal() => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            other => other,
        };

        Self {
            format,
            quiet: args.quiet,
            color: format == OutputFormat::Human && !args.no_color && !config.output.no_color,
            term: Term::stdout(),
        }
    }

    /// Ordinary progress text. Dropped under `--quiet`.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.status(Tone::Success, msg)
    }

    /// Always printed, quiet or not.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        self.line(Tone::Error, msg)
    }

    pub fn warning(&self, msg: &str) -> io::Result<()> {
        self.status(Tone::Warning, msg)
    }

    pub fn info(&self, msg: &str) -> io::Result<()> {
        self.status(Tone::Info, msg)
    }

    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        if self.color {
            self.term.write_line(&text.cyan().bold().to_string())
        } else {
            self.term.write_line(text)
        }
    }

    /// Verbatim text that survives `--quiet`: captured scaffolder streams,
    /// per-file failures.
    pub fn raw(&self, msg: &str) -> io::Result<()> {
        self.term.write_line(msg)
    }

    /// The single document printed under `--output-format json`.
    pub fn json(&self, value: &serde_json::Value) -> io::Result<()> {
        let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.term.write_line(&text)
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    fn status(&self, tone: Tone, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.line(tone, msg)
    }

    fn line(&self, tone: Tone, msg: &str) -> io::Result<()> {
        let text = if self.color {
            format!(
                "{} {}",
                tone.marker().color(tone.color()).bold(),
                msg.color(tone.color())
            )
        } else {
            format!("{} {msg}", tone.marker())
        };
        self.term.write_line(&text)
    }
}
