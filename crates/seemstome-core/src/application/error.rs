//! Application layer errors.
//!
//! These errors represent failures in orchestration and at the port
//! boundary, not validation. Validation errors are `DomainError` from
//! `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while talking to the outside world.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The external scaffolder could not be started at all.
    #[error("Scaffolder executable '{program}' could not be started: {reason}")]
    ToolUnavailable { program: String, reason: String },

    /// The external scaffolder ran and exited unsuccessfully.
    ///
    /// `exit_code` is `None` when the process was terminated by a signal.
    #[error("Scaffolder exited with {}", describe_exit(*exit_code))]
    ToolFailed {
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
    },

    /// The external scaffolder did not finish within the configured bound.
    #[error("Scaffolder '{program}' did not finish within {timeout_secs}s and was killed")]
    ToolTimedOut { program: String, timeout_secs: u64 },

    /// Exit code zero, but stdout was not a JSON document.
    #[error("Could not parse scaffolder output as JSON: {reason}")]
    MalformedResponse { raw: String, reason: String },

    /// Any other failure while invoking the scaffolder (pipes, waits, ...).
    #[error("Scaffolder invocation failed: {reason}")]
    InvocationFailed { reason: String },

    /// The request could not be serialized.
    #[error("Failed to serialize scaffold request: {reason}")]
    Serialization { reason: String },

    /// The concatenation source is missing or not a directory.
    #[error("Source directory not found: {path}")]
    SourceNotDirectory { path: PathBuf },

    /// One document could not be read. Contained per document by the
    /// concatenator; never aborts a run.
    #[error("{reason}")]
    DocumentUnreadable { path: PathBuf, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },
}

fn describe_exit(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("error code: {code}"),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ToolUnavailable { program, .. } => vec![
                format!("Is '{program}' installed and in your PATH?"),
                "The scaffolder runs on Node.js; install it or point scaffolder.program at it"
                    .into(),
                "Override with: seemstome scaffold --program <PATH> ...".into(),
            ],
            Self::ToolFailed { .. } => vec![
                "Check the scaffolder's stderr above for details".into(),
                "Verify scaffolder.args points at a built scaffolder (e.g. dist/index.js)".into(),
            ],
            Self::ToolTimedOut { .. } => vec![
                "Raise scaffolder.timeout_secs or unset it to wait indefinitely".into(),
            ],
            Self::MalformedResponse { .. } => vec![
                "The raw scaffolder output is shown above for manual inspection".into(),
                "The scaffolder must print exactly one JSON document on stdout".into(),
            ],
            Self::SourceNotDirectory { path } => vec![
                format!("'{}' does not exist or is not a directory", path.display()),
                "Pass the documentation directory: seemstome concat <DIR>".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ToolUnavailable { .. } | Self::SourceNotDirectory { .. } => {
                ErrorCategory::NotFound
            }
            Self::ToolFailed { .. } | Self::ToolTimedOut { .. } | Self::MalformedResponse { .. } => {
                ErrorCategory::External
            }
            Self::InvocationFailed { .. }
            | Self::Serialization { .. }
            | Self::DocumentUnreadable { .. }
            | Self::FilesystemError { .. } => ErrorCategory::Internal,
        }
    }
}
