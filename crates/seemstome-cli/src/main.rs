//! # SeemsToMe CLI
//!
//! Bridge to an external SDD component scaffolder, plus a documentation
//! concatenator.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments (clap handles `--help` / `--version` early-exit).
//! 2. Initialise the tracing subscriber (logging).
//! 3. Load configuration (file + env + defaults).
//! 4. Build the [`OutputManager`].
//! 5. Dispatch to the appropriate command handler.
//! 6. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                 |
//! |------|-------------------------|
//! |  0   | Success                 |
//! |  1   | Internal / system error |
//! |  2   | User / input error      |
//! |  3   | Resource not found      |
//! |  4   | Configuration error     |

use std::io::IsTerminal as _;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // A missing .env is not an error.
    let _ = dotenvy::dotenv();

    // --help and --version arrive as errors printed to stdout; exit 0 for those.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(2)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );

    let verbose = cli.global.verbose > 0;
    let color = !cli.global.no_color && std::io::stderr().is_terminal();

    // `init` and `config set` may be the ones creating the `--config` file.
    let require_file = !cli.command.writes_config();
    let config = match AppConfig::load(cli.global.config.as_ref(), require_file) {
        Ok(cfg) => cfg,
        Err(e) => {
            let err = CliError::ConfigError {
                message: format!("{e:#}"),
                source: None,
            };
            return handle_error(err, verbose, color);
        }
    };

    let output = OutputManager::new(&cli.global, &config);

    match run(cli, config, output) {
        Ok(()) => {
            info!("SeemsToMe completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose, color),
    }
}

/// Dispatch to the correct command handler.
#[instrument(skip_all)]
fn run(cli: Cli, config: AppConfig, output: OutputManager) -> CliResult<()> {
    match cli.command {
        Commands::Scaffold(cmd) => commands::scaffold::execute(cmd, config, output),
        Commands::Concat(cmd) => commands::concat::execute(cmd, config, output),
        Commands::Init(cmd) => commands::init::execute(cmd, output),
        Commands::Completions(cmd) => commands::completions::execute(cmd),
        Commands::Config(cmd) => {
            commands::config::execute(cmd, cli.global.config.as_ref(), config, output)
        }
    }
}

/// Log the error, print it to stderr and pick the exit code.
fn handle_error(err: CliError, verbose: bool, color: bool) -> ExitCode {
    err.log();

    // stderr, so redirected stdout keeps only command output.
    eprint!("{}", err.render(verbose, color));

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_version_matches_cargo() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_version(), Some(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn cli_has_author() {
        let cmd = Cli::command();
        assert!(cmd.get_author().is_some());
    }
}
