//! Subscriber setup for the `seemstome` binary.
//!
//! The library crates only emit events. Everything is written to stderr, so
//! stdout carries nothing but command output. `--quiet` keeps errors only,
//! each `-v` raises the level one step from `warn`, and `RUST_LOG` replaces
//! the computed filter entirely.

use std::io::IsTerminal as _;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{GlobalArgs, OutputFormat};

/// Crates whose events follow the verbosity flags; dependencies stay at `warn`.
const TARGETS: [&str; 3] = ["seemstome", "seemstome_core", "seemstome_adapters"];

/// Install the global subscriber. Call once, first thing after parsing.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(from_env) => from_env,
        Err(_) => EnvFilter::new(directives(level_for(args))),
    };

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(use_ansi(args, std::io::stderr().is_terminal()))
        .with_target(false)
        .without_time();

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("could not install tracing subscriber: {e}"))
}

fn level_for(args: &GlobalArgs) -> LevelFilter {
    if args.quiet {
        return LevelFilter::ERROR;
    }
    [
        LevelFilter::WARN,
        LevelFilter::INFO,
        LevelFilter::DEBUG,
        LevelFilter::TRACE,
    ][usize::from(args.verbose.min(3))]
}

fn directives(level: LevelFilter) -> String {
    let mut parts = vec![LevelFilter::WARN.to_string().to_lowercase()];
    parts.extend(
        TARGETS
            .iter()
            .map(|target| format!("{target}={}", level.to_string().to_lowercase())),
    );
    parts.join(",")
}

/// Colour only on a terminal, and never alongside machine-readable output.
fn use_ansi(args: &GlobalArgs, stderr_is_terminal: bool) -> bool {
    stderr_is_terminal
        && !args.no_color
        && !matches!(args.output_format, OutputFormat::Json | OutputFormat::Plain)
}
