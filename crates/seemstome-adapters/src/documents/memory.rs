//! In-memory document store for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    io::{self, Write},
    path::{Component, Path, PathBuf},
    sync::{Arc, RwLock},
};

use seemstome_core::{
    application::{ApplicationError, ports::DocumentStore},
    domain::{DocumentFilter, DocumentRecord},
    error::{SeemsError, SeemsResult},
};

/// In-memory document store for testing.
///
/// Files hold raw bytes so that non-UTF-8 content can be exercised.
/// Cloning shares the underlying storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocumentStore {
    inner: Arc<RwLock<MemoryStoreInner>>,
}

#[derive(Debug, Default)]
struct MemoryStoreInner {
    files: BTreeMap<PathBuf, Vec<u8>>,
    directories: BTreeSet<PathBuf>,
}

impl MemoryDocumentStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, creating its parent directories (testing helper).
    pub fn add_file(&self, path: impl AsRef<Path>, content: impl AsRef<[u8]>) {
        let path = normalize(path.as_ref());
        let mut inner = self.inner.write().unwrap_or_else(|e| e.into_inner());
        if let Some(parent) = path.parent() {
            let mut current = PathBuf::new();
            for component in parent.components() {
                current.push(component);
                inner.directories.insert(current.clone());
            }
        }
        inner.files.insert(path, content.as_ref().to_vec());
    }

    /// Add an empty directory (testing helper).
    pub fn add_dir(&self, path: impl AsRef<Path>) {
        let path = normalize(path.as_ref());
        let mut inner = self.inner.write().unwrap_or_else(|e| e.into_inner());
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }
    }

    /// Read a file back as text (testing helper).
    pub fn read_file(&self, path: impl AsRef<Path>) -> Option<String> {
        let inner = self.inner.read().ok()?;
        let bytes = inner.files.get(&normalize(path.as_ref()))?;
        String::from_utf8(bytes.clone()).ok()
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap_or_else(|e| e.into_inner());
        inner.files.keys().cloned().collect()
    }

    fn lock_error() -> SeemsError {
        SeemsError::Internal {
            message: "memory document store lock poisoned".into(),
        }
    }
}

impl DocumentStore for MemoryDocumentStore {
    fn is_dir(&self, path: &Path) -> bool {
        self.inner
            .read()
            .is_ok_and(|inner| inner.directories.contains(&normalize(path)))
    }

    fn discover(&self, root: &Path, filter: &DocumentFilter) -> SeemsResult<Vec<DocumentRecord>> {
        let root = normalize(root);
        let inner = self.inner.read().map_err(|_| Self::lock_error())?;

        Ok(inner
            .files
            .keys()
            .filter_map(|path| {
                let relative = path.strip_prefix(&root).ok()?;
                let hidden = relative
                    .components()
                    .any(|c| filter.skips_name(&c.as_os_str().to_string_lossy()));
                (!hidden && filter.matches(path)).then(|| DocumentRecord::new(path, relative))
            })
            .collect())
    }

    fn read_document(&self, record: &DocumentRecord) -> SeemsResult<String> {
        let inner = self.inner.read().map_err(|_| Self::lock_error())?;
        let unreadable = |reason: String| -> SeemsError {
            ApplicationError::DocumentUnreadable {
                path: record.path.clone(),
                reason,
            }
            .into()
        };

        let bytes = inner
            .files
            .get(&normalize(&record.path))
            .ok_or_else(|| unreadable("No such file".into()))?;
        String::from_utf8(bytes.clone()).map_err(|e| unreadable(e.to_string()))
    }

    fn create_output(&self, path: &Path) -> SeemsResult<Box<dyn Write>> {
        let path = normalize(path);
        {
            let mut inner = self.inner.write().map_err(|_| Self::lock_error())?;
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                    return Err(ApplicationError::FilesystemError {
                        path,
                        reason: "Parent directory does not exist".into(),
                    }
                    .into());
                }
            }
            inner.files.insert(path.clone(), Vec::new());
        }

        Ok(Box::new(MemoryWriter {
            inner: Arc::clone(&self.inner),
            path,
        }))
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        normalize(path)
    }
}

/// Appends straight into the shared file map.
struct MemoryWriter {
    inner: Arc<RwLock<MemoryStoreInner>>,
    path: PathBuf,
}

impl Write for MemoryWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| io::Error::other("memory document store lock poisoned"))?;
        inner
            .files
            .entry(self.path.clone())
            .or_default()
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Lexical normalization: drops `.` and resolves `..` without touching disk.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other),
        }
    }
    out
}
