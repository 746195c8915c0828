//! In-memory filesystem

use super::FileSystem;
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Default)]
struct State {
    files: BTreeMap<PathBuf, Vec<u8>>,
    denied: BTreeSet<PathBuf>,
}

/// A filesystem held entirely in memory
///
/// Directories exist implicitly as prefixes of file paths. Clones share the same state,
/// so a fake tool runner can "clone" into the same tree the pipeline reads.
#[derive(Debug, Clone, Default)]
pub struct MemoryFileSystem {
    state: Arc<Mutex<State>>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Create or replace a file
    pub fn insert(&self, path: impl Into<PathBuf>, contents: impl AsRef<[u8]>) {
        self.state()
            .files
            .insert(path.into(), contents.as_ref().to_vec());
    }

    /// File contents as UTF-8, if the file exists
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        self.state()
            .files
            .get(path.as_ref())
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    /// Every file path currently stored
    pub fn paths(&self) -> Vec<PathBuf> {
        self.state().files.keys().cloned().collect()
    }

    /// Make every mutating operation at or below `path` fail with `PermissionDenied`
    pub fn deny(&self, path: impl Into<PathBuf>) {
        self.state().denied.insert(path.into());
    }

    fn check_allowed(state: &State, path: &Path) -> io::Result<()> {
        if state.denied.iter().any(|d| path.starts_with(d)) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("permission denied: {}", path.display()),
            ));
        }
        Ok(())
    }

    fn not_found(path: &Path) -> io::Error {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("no such file or directory: {}", path.display()),
        )
    }
}

impl FileSystem for MemoryFileSystem {
    fn exists(&self, path: &Path) -> io::Result<bool> {
        Ok(self.state().files.keys().any(|p| p.starts_with(path)))
    }

    fn remove_dir_all(&self, path: &Path) -> io::Result<()> {
        let mut state = self.state();
        Self::check_allowed(&state, path)?;

        let before = state.files.len();
        state.files.retain(|p, _| !p.starts_with(path));
        if state.files.len() == before {
            return Err(Self::not_found(path));
        }
        Ok(())
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        self.state()
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| Self::not_found(path))
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        let mut state = self.state();
        Self::check_allowed(&state, path)?;

        match state.files.get_mut(path) {
            Some(existing) => {
                *existing = contents.to_vec();
                Ok(())
            }
            None => Err(Self::not_found(path)),
        }
    }

    fn walk_files(&self, root: &Path) -> io::Result<Vec<PathBuf>> {
        let files: Vec<PathBuf> = self
            .state()
            .files
            .keys()
            .filter(|p| p.starts_with(root))
            .cloned()
            .collect();

        if files.is_empty() {
            return Err(Self::not_found(root));
        }
        Ok(files)
    }
}
