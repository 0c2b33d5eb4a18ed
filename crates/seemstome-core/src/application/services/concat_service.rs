//! Concat Service - merges a documentation tree into one file.
//!
//! Workflow:
//! 1. Check the source is a directory
//! 2. Discover matching documents, drop the output file itself, sort by label
//! 3. Write one block per document; unreadable documents become error blocks
//!
//! Per-document read failures are contained. Only failures on the output
//! file abort a run.

use std::io::Write;
use std::path::Path;

use tracing::{info, instrument, warn};

use crate::{
    application::{ApplicationError, ports::DocumentStore},
    domain::{ConcatReport, DocumentBlock, DocumentFilter, DocumentOutcome, DocumentStatus},
    error::{SeemsError, SeemsResult},
};

/// Documentation concatenation service.
pub struct ConcatService {
    store: Box<dyn DocumentStore>,
    filter: DocumentFilter,
}

impl ConcatService {
    /// Create a service using the default extension allow-list.
    pub fn new(store: Box<dyn DocumentStore>) -> Self {
        Self::with_filter(store, DocumentFilter::default())
    }

    pub fn with_filter(store: Box<dyn DocumentStore>, filter: DocumentFilter) -> Self {
        Self { store, filter }
    }

    /// Concatenate every matching document under `source` into `output`.
    pub fn concatenate(
        &self,
        source: impl AsRef<Path>,
        output: impl AsRef<Path>,
    ) -> SeemsResult<ConcatReport> {
        self.concatenate_with_progress(source, output, |_| {})
    }

    /// Like [`Self::concatenate`], calling `on_document` as soon as each
    /// document's block has been written.
    #[instrument(
        skip_all,
        fields(source = %source.as_ref().display(), output = %output.as_ref().display())
    )]
    pub fn concatenate_with_progress(
        &self,
        source: impl AsRef<Path>,
        output: impl AsRef<Path>,
        mut on_document: impl FnMut(&DocumentOutcome),
    ) -> SeemsResult<ConcatReport> {
        let source = source.as_ref();
        let output = output.as_ref();

        if !self.store.is_dir(source) {
            return Err(ApplicationError::SourceNotDirectory {
                path: source.to_path_buf(),
            }
            .into());
        }

        // Discovery happens before the output is created, so a fresh output
        // can never be picked up; a stale one is excluded by identity.
        let excluded = self.store.resolve(output);
        let mut records = self.store.discover(source, &self.filter)?;
        records.retain(|record| self.store.resolve(&record.path) != excluded);
        records.sort_by(|a, b| a.label.cmp(&b.label));

        info!(documents = records.len(), "Documents discovered");

        let mut writer = self.store.create_output(output)?;
        let mut documents = Vec::with_capacity(records.len());

        for record in records {
            let status = match self.store.read_document(&record) {
                Ok(content) => {
                    let block = DocumentBlock::Content {
                        label: &record.label,
                        content: &content,
                    };
                    write_block(&mut writer, &block, output)?;
                    info!(document = %record.label, "Processed");
                    DocumentStatus::Included {
                        bytes: content.len(),
                    }
                }
                Err(err) => {
                    let reason = err.to_string();
                    let block = DocumentBlock::Error {
                        label: &record.label,
                        reason: &reason,
                    };
                    write_block(&mut writer, &block, output)?;
                    warn!(document = %record.label, error = %reason, "Document unreadable");
                    DocumentStatus::Failed { reason }
                }
            };
            let outcome = DocumentOutcome { record, status };
            on_document(&outcome);
            documents.push(outcome);
        }

        writer.flush().map_err(|e| output_error(output, "flush", &e))?;

        let report = ConcatReport {
            output: output.to_path_buf(),
            documents,
        };
        info!(
            included = report.included_count(),
            failed = report.failed_count(),
            "Concatenation finished"
        );
        Ok(report)
    }
}

fn write_block(writer: &mut dyn Write, block: &DocumentBlock<'_>, output: &Path) -> SeemsResult<()> {
    write!(writer, "{block}").map_err(|e| output_error(output, "write", &e))
}

fn output_error(output: &Path, operation: &str, e: &std::io::Error) -> SeemsError {
    ApplicationError::FilesystemError {
        path: output.to_path_buf(),
        reason: format!("Failed to {operation} output: {e}"),
    }
    .into()
}
