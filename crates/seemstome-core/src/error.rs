//! Crate-wide error type.
//!
//! [`SeemsError`] is what every public service returns. The CLI reads its
//! [`ErrorCategory`] to choose an exit code and its suggestions to print hints.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

#[derive(Debug, Error, Clone)]
pub enum SeemsError {
    /// Input rejected before anything ran.
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Failure at a port: scaffolder process, filesystem.
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// A broken invariant inside this crate or an adapter.
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl SeemsError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec!["Re-run with -vv and include the log in a bug report".into()],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(_) => ErrorCategory::Validation,
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Coarse classification shared by every error in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    /// The external tool misbehaved.
    External,
    Internal,
}

pub type SeemsResult<T> = Result<T, SeemsError>;
