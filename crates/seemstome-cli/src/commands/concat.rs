//! `seemstome concat`: merge a documentation tree into one file.

use std::path::PathBuf;

use tracing::instrument;

use seemstome_adapters::LocalDocumentStore;
use seemstome_core::{
    application::ConcatService,
    domain::{DocumentOutcome, DocumentStatus},
};

use crate::{cli::ConcatArgs, config::AppConfig, error::CliResult, output::OutputManager};

/// Resolve source and output, run the concatenation and print progress.
#[instrument(skip_all)]
pub fn execute(args: ConcatArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let (source, destination) = resolve_paths(&args, &config);

    let store = Box::new(LocalDocumentStore::new());
    let service = ConcatService::with_filter(store, config.docs.filter());

    if output.is_json() {
        let report = service.concatenate(&source, &destination)?;
        output.json(&serde_json::to_value(&report).map_err(std::io::Error::other)?)?;
        return Ok(());
    }

    // Lines are printed as each block lands; the first failed print is
    // returned once the run is over.
    let mut print_failure = None;
    let report = service.concatenate_with_progress(&source, &destination, |document| {
        if print_failure.is_none() {
            print_failure = print_progress(&output, document).err();
        }
    })?;
    if let Some(err) = print_failure {
        return Err(err.into());
    }

    output.success(&format!(
        "All specified documents have been concatenated into: {}",
        report.output.display()
    ))?;
    Ok(())
}

/// CLI arguments win over `docs.*` config keys.
fn resolve_paths(args: &ConcatArgs, config: &AppConfig) -> (PathBuf, PathBuf) {
    let source = args
        .source
        .clone()
        .unwrap_or_else(|| config.docs.source_dir.clone());
    let destination = args
        .output
        .clone()
        .unwrap_or_else(|| config.docs.output_for(&source));
    (source, destination)
}

fn print_progress(output: &OutputManager, document: &DocumentOutcome) -> std::io::Result<()> {
    let path = document.record.path.display();
    match &document.status {
        DocumentStatus::Included { .. } => output.print(&format!("Successfully processed: {path}")),
        // Failures stay visible under --quiet.
        DocumentStatus::Failed { reason } => {
            output.raw(&format!("Error processing file {path}: {reason}"))
        }
    }
}
