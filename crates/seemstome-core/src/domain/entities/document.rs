//! Documents discovered by the concatenator and the blocks written for them.
//!
//! The block format is the file contract of the combined output:
//!
//! ```text
//! --- START OF FILE: <label> ---
//!
//! <content>
//!
//! --- END OF FILE: <label> ---
//!
//! ```
//!
//! or, when a document could not be read:
//!
//! ```text
//! --- ERROR PROCESSING FILE: <label> ---
//! Error: <reason>
//! --- END OF ERROR FOR FILE: <label> ---
//!
//! ```

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Extensions collected when no override is configured.
pub const DEFAULT_EXTENSIONS: [&str; 3] = ["md", "txt", "doc"];

// ── DocumentRecord ────────────────────────────────────────────────────────────

/// A file found under the source directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentRecord {
    /// Path as discovered (source directory joined with the relative part).
    pub path: PathBuf,
    /// Path relative to the source directory, always `/`-separated.
    pub label: String,
}

impl DocumentRecord {
    /// Build a record from a discovered path and its source-relative part.
    pub fn new(path: impl Into<PathBuf>, relative: &Path) -> Self {
        Self {
            path: path.into(),
            label: relative_label(relative),
        }
    }
}

/// Render a relative path with `/` separators regardless of platform.
pub fn relative_label(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

// ── DocumentFilter ────────────────────────────────────────────────────────────

/// Which files the concatenator collects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentFilter {
    extensions: Vec<String>,
    include_hidden: bool,
}

impl DocumentFilter {
    /// Extensions may be given with or without the leading dot.
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            extensions: extensions
                .into_iter()
                .map(|e| e.as_ref().trim_start_matches('.').to_string())
                .filter(|e| !e.is_empty())
                .collect(),
            include_hidden: false,
        }
    }

    pub fn include_hidden(mut self, include: bool) -> Self {
        self.include_hidden = include;
        self
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    pub fn includes_hidden(&self) -> bool {
        self.include_hidden
    }

    /// Case-sensitive extension match on the file name.
    pub fn matches(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|allowed| allowed == ext))
    }

    /// Whether a single path component should be skipped as hidden.
    pub fn skips_name(&self, name: &str) -> bool {
        !self.include_hidden && name.starts_with('.')
    }
}

impl Default for DocumentFilter {
    fn default() -> Self {
        Self::new(DEFAULT_EXTENSIONS)
    }
}

// ── DocumentBlock ─────────────────────────────────────────────────────────────

/// One block of the combined output. Rendered via `Display`.
#[derive(Debug, Clone, Copy)]
pub enum DocumentBlock<'a> {
    Content { label: &'a str, content: &'a str },
    Error { label: &'a str, reason: &'a str },
}

impl fmt::Display for DocumentBlock<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Content { label, content } => {
                write!(f, "--- START OF FILE: {label} ---\n\n")?;
                f.write_str(content)?;
                write!(f, "\n\n--- END OF FILE: {label} ---\n\n")
            }
            Self::Error { label, reason } => {
                writeln!(f, "--- ERROR PROCESSING FILE: {label} ---")?;
                writeln!(f, "Error: {reason}")?;
                write!(f, "--- END OF ERROR FOR FILE: {label} ---\n\n")
            }
        }
    }
}

// ── Report ────────────────────────────────────────────────────────────────────

/// What happened to one document during a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum DocumentStatus {
    Included { bytes: usize },
    Failed { reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentOutcome {
    #[serde(flatten)]
    pub record: DocumentRecord,
    #[serde(flatten)]
    pub status: DocumentStatus,
}

impl DocumentOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self.status, DocumentStatus::Failed { .. })
    }
}

/// Result of one concatenation run, in output order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConcatReport {
    pub output: PathBuf,
    pub documents: Vec<DocumentOutcome>,
}

impl ConcatReport {
    pub fn included_count(&self) -> usize {
        self.documents.iter().filter(|d| !d.is_failure()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.documents.iter().filter(|d| d.is_failure()).count()
    }
}
