//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `seemstome-adapters` crate provides implementations.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::domain::{DocumentFilter, DocumentRecord, ScaffoldRequest, ScaffoldResponse};
use crate::error::SeemsResult;

/// Port for the external scaffolding capability.
///
/// Implemented by:
/// - `seemstome_adapters::scaffolder::ProcessScaffolder` (external process)
///
/// The transport is opaque to the application: a process, an in-process
/// call, or a network hop all satisfy the same contract.
///
/// Implementations report transport failures as `ApplicationError`
/// variants (`ToolUnavailable`, `ToolFailed`, `ToolTimedOut`,
/// `MalformedResponse`, `InvocationFailed`).
#[cfg_attr(test, mockall::automock)]
pub trait Scaffolder: Send + Sync {
    /// Send one request and wait for the response.
    fn scaffold(&self, request: &ScaffoldRequest) -> SeemsResult<ScaffoldResponse>;

    /// Human-readable description of what will be invoked, for diagnostics.
    fn describe(&self) -> String;
}

/// Port for reading documents and writing the combined output.
///
/// Implemented by:
/// - `seemstome_adapters::documents::LocalDocumentStore` (production)
/// - `seemstome_adapters::documents::MemoryDocumentStore` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait DocumentStore: Send + Sync {
    /// Whether `path` is an existing directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Recursively find every file under `root` accepted by `filter`.
    ///
    /// Order is unspecified; the caller sorts.
    fn discover(&self, root: &Path, filter: &DocumentFilter) -> SeemsResult<Vec<DocumentRecord>>;

    /// Read one document as UTF-8 text.
    ///
    /// Failures are returned as `ApplicationError::DocumentUnreadable`.
    fn read_document(&self, record: &DocumentRecord) -> SeemsResult<String>;

    /// Create (or truncate) the output file.
    fn create_output(&self, path: &Path) -> SeemsResult<Box<dyn Write>>;

    /// Resolve `path` to an absolute path for identity comparisons.
    fn resolve(&self, path: &Path) -> PathBuf;
}
