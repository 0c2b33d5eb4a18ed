//! CLI error type and its presentation.
//!
//! Every failure that reaches `main` is a [`CliError`]. Its [`ErrorCategory`]
//! decides the process exit code and the log level; [`CliError::render`]
//! turns it into the block printed on stderr.

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use seemstome_core::error::{ErrorCategory as CoreCategory, SeemsError};

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// An argument or value was rejected before any work started.
    #[error("Invalid input: {message}")]
    InvalidInput {
        message: String,
        #[source]
        source: Option<Box<dyn Error + Send + Sync>>,
    },

    /// Configuration could not be loaded, parsed or written.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn Error + Send + Sync>>,
    },

    /// Anything raised by the core services. Category and suggestions are
    /// taken from the wrapped error.
    #[error("{0}")]
    Core(#[from] SeemsError),

    /// `--strict` was given and the scaffolder did not confirm success.
    /// Diagnostics were already printed when this is raised.
    #[error("Scaffolding did not succeed: {outcome}")]
    ScaffoldUnsuccessful { outcome: String },

    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(source: std::io::Error) -> Self {
        Self::IoError {
            message: source.to_string(),
            source,
        }
    }
}

/// How the CLI classifies a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad arguments or values; exit 2.
    UserError,
    /// A path that had to exist did not; exit 3.
    NotFound,
    /// Configuration sources are unusable; exit 4.
    Configuration,
    /// Everything else, including a misbehaving scaffolder; exit 1.
    Internal,
}

impl ErrorCategory {
    pub fn exit_code(self) -> u8 {
        match self {
            Self::Internal => 1,
            Self::UserError => 2,
            Self::NotFound => 3,
            Self::Configuration => 4,
        }
    }
}

impl From<CoreCategory> for ErrorCategory {
    fn from(category: CoreCategory) -> Self {
        match category {
            CoreCategory::Validation => Self::UserError,
            CoreCategory::NotFound => Self::NotFound,
            CoreCategory::External | CoreCategory::Internal => Self::Internal,
        }
    }
}

impl CliError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } => ErrorCategory::UserError,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => core.category().into(),
            Self::ScaffoldUnsuccessful { .. } | Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.category().exit_code()
    }

    /// Hints shown under the error message.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { .. } => vec!["Run with --help to see the expected arguments".into()],
            Self::ConfigError { .. } => vec![
                "Show the active config file: seemstome config path".into(),
                "Recreate a default config: seemstome init --force".into(),
            ],
            Self::Core(core) => core.suggestions(),
            Self::ScaffoldUnsuccessful { .. } => vec![
                "See the scaffolder output above".into(),
                "Drop --strict to always exit 0 after reporting".into(),
            ],
            Self::IoError { .. } => vec![
                "Check that the path exists and is writable".into(),
            ],
        }
    }

    /// The error, its causes (only when `verbose`) and its suggestions.
    ///
    /// `color` switches between ANSI styling and plain text.
    pub fn render(&self, verbose: bool, color: bool) -> String {
        let paint = |text: &str, style: &dyn Fn(&str) -> String| {
            if color { style(text) } else { text.to_string() }
        };

        let mut out = format!("\n{} {self}\n", paint("Error:", &|t| t.red().bold().to_string()));

        if verbose {
            for cause in self.causes() {
                out += &format!("  {} {cause}\n", paint("Caused by:", &|t| t.dimmed().to_string()));
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out += &format!("\n{}\n", paint("Suggestions:", &|t| t.yellow().bold().to_string()));
            for suggestion in &suggestions {
                out += &format!("  - {suggestion}\n");
            }
        }

        if !verbose {
            out += &format!(
                "\n{}\n",
                paint("Run again with -v for more detail.", &|t| t.dimmed().to_string())
            );
        }
        out
    }

    fn causes(&self) -> Vec<String> {
        let mut causes = Vec::new();
        let mut next = self.source();
        while let Some(err) = next {
            causes.push(err.to_string());
            next = err.source();
        }
        causes
    }

    /// Emit one tracing event for this error. Causes go out at debug level.
    pub fn log(&self) {
        let category = self.category();
        let exit_code = category.exit_code();
        match category {
            ErrorCategory::UserError | ErrorCategory::NotFound => {
                tracing::warn!(?category, exit_code, "{self}");
            }
            ErrorCategory::Configuration | ErrorCategory::Internal => {
                tracing::error!(?category, exit_code, "{self}");
            }
        }
        for cause in self.causes() {
            tracing::debug!(cause = %cause, "caused by");
        }
    }
}

// ── IntoCli ───────────────────────────────────────────────────────────────────

/// Attach a context message while converting a foreign error.
///
/// I/O failures become [`CliError::IoError`]; TOML parse failures become
/// [`CliError::ConfigError`].
pub trait IntoCli<T> {
    fn with_cli_context<F, S>(self, context: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T> IntoCli<T> for Result<T, std::io::Error> {
    fn with_cli_context<F, S>(self, context: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|source| CliError::IoError {
            message: context().into(),
            source,
        })
    }
}

impl<T> IntoCli<T> for Result<T, toml::de::Error> {
    fn with_cli_context<F, S>(self, context: F) -> CliResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        self.map_err(|e| CliError::ConfigError {
            message: context().into(),
            source: Some(Box::new(e)),
        })
    }
}
