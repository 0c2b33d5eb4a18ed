//! Local document store using walkdir and std::fs.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use seemstome_core::{
    application::{ApplicationError, ports::DocumentStore},
    domain::{DocumentFilter, DocumentRecord},
    error::{SeemsError, SeemsResult},
};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Production document store backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalDocumentStore;

impl LocalDocumentStore {
    /// Create a new local document store.
    pub fn new() -> Self {
        Self
    }
}

impl DocumentStore for LocalDocumentStore {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn discover(&self, root: &Path, filter: &DocumentFilter) -> SeemsResult<Vec<DocumentRecord>> {
        let walker = WalkDir::new(root)
            .follow_links(false)
            .min_depth(1)
            .into_iter()
            .filter_entry(|entry| {
                entry
                    .file_name()
                    .to_str()
                    .is_none_or(|name| !filter.skips_name(name))
            });

        let mut records = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    // An unreadable subdirectory costs its contents only.
                    warn!(error = %e, "Skipping unreadable entry");
                    continue;
                }
            };

            if !entry.file_type().is_file() || !filter.matches(entry.path()) {
                continue;
            }

            let Ok(relative) = entry.path().strip_prefix(root) else {
                continue;
            };
            debug!(path = %entry.path().display(), "Discovered document");
            records.push(DocumentRecord::new(entry.path(), relative));
        }

        Ok(records)
    }

    fn read_document(&self, record: &DocumentRecord) -> SeemsResult<String> {
        std::fs::read_to_string(&record.path).map_err(|e| {
            ApplicationError::DocumentUnreadable {
                path: record.path.clone(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    fn create_output(&self, path: &Path) -> SeemsResult<Box<dyn Write>> {
        let file = File::create(path).map_err(|e| map_io_error(path, e, "create output file"))?;
        Ok(Box::new(BufWriter::new(file)))
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        path.canonicalize()
            .or_else(|_| std::path::absolute(path))
            .unwrap_or_else(|_| path.to_path_buf())
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> SeemsError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn tree() -> TempDir {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("guides/deep")).unwrap();
        fs::create_dir_all(root.join(".git")).unwrap();
        fs::write(root.join("README.md"), "readme").unwrap();
        fs::write(root.join("guides/intro.txt"), "intro").unwrap();
        fs::write(root.join("guides/deep/legacy.doc"), "legacy").unwrap();
        fs::write(root.join("guides/app.js"), "code").unwrap();
        fs::write(root.join("UPPER.MD"), "upper").unwrap();
        fs::write(root.join(".hidden.md"), "hidden").unwrap();
        fs::write(root.join(".git/notes.md"), "git").unwrap();
        dir
    }

    fn labels(records: &[DocumentRecord]) -> Vec<String> {
        let mut labels: Vec<_> = records.iter().map(|r| r.label.clone()).collect();
        labels.sort();
        labels
    }

    #[test]
    fn test_discover_matches_extensions_recursively() {
        let dir = tree();
        let store = LocalDocumentStore::new();

        let records = store
            .discover(dir.path(), &DocumentFilter::default())
            .unwrap();

        assert_eq!(
            labels(&records),
            vec!["README.md", "guides/deep/legacy.doc", "guides/intro.txt"]
        );
    }

    #[test]
    fn test_discover_includes_hidden_when_asked() {
        let dir = tree();
        let store = LocalDocumentStore::new();
        let filter = DocumentFilter::default().include_hidden(true);

        let found = labels(&store.discover(dir.path(), &filter).unwrap());

        assert!(found.contains(&".hidden.md".to_string()));
        assert!(found.contains(&".git/notes.md".to_string()));
    }

    #[test]
    fn test_hidden_root_is_still_walked() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join(".docs");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join("a.md"), "a").unwrap();

        let records = LocalDocumentStore::new()
            .discover(&root, &DocumentFilter::default())
            .unwrap();
        assert_eq!(labels(&records), vec!["a.md"]);
    }

    #[test]
    fn test_read_invalid_utf8_is_unreadable() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bin.md");
        fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        let record = DocumentRecord::new(&path, Path::new("bin.md"));
        let err = LocalDocumentStore::new().read_document(&record).unwrap_err();

        assert!(matches!(
            err,
            SeemsError::Application(ApplicationError::DocumentUnreadable { .. })
        ));
    }

    #[test]
    fn test_create_output_in_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let result = LocalDocumentStore::new().create_output(&dir.path().join("nope/out.txt"));
        assert!(result.is_err());
    }

    #[test]
    fn test_resolve_relative_and_absolute_agree() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");
        fs::write(&path, "").unwrap();

        let store = LocalDocumentStore::new();
        let dotted = dir.path().join(".").join("out.txt");
        assert_eq!(store.resolve(&path), store.resolve(&dotted));
    }
}
