//! Filesystem access for the scaffolding pipeline
//!
//! The pipeline never touches `std::fs` directly. It goes through [`FileSystem`] so the
//! "which files" and "how to rewrite them" logic can run against [`MemoryFileSystem`]
//! in tests and [`OsFileSystem`] in the CLI.

pub mod memory;
pub mod os;

use crate::error::{Result, ScaffoldError};
use std::io;
use std::path::{Path, PathBuf};

pub use memory::MemoryFileSystem;
pub use os::OsFileSystem;

/// Operations the pipeline needs from a filesystem
pub trait FileSystem {
    /// Whether a file or directory exists at `path`
    fn exists(&self, path: &Path) -> io::Result<bool>;

    /// Recursively remove a directory and everything below it
    fn remove_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Read a whole file
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Overwrite an existing file in place, keeping its permissions
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;

    /// All regular files below `root` (or links to them), in a stable order
    fn walk_files(&self, root: &Path) -> io::Result<Vec<PathBuf>>;
}

/// Result of a [`transform_files`] pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformSummary {
    /// Files that matched the predicate and were read
    pub scanned: usize,
    /// Files whose contents changed and were written back
    pub rewritten: Vec<PathBuf>,
}

/// Walk `root`, and for every file accepted by `predicate` run `transform` on its bytes.
///
/// `transform` returns `None` when the file should stay as it is. The first read or
/// write error aborts the walk.
pub fn transform_files<F, P, T>(
    fs: &F,
    root: &Path,
    predicate: P,
    mut transform: T,
) -> Result<TransformSummary>
where
    F: FileSystem + ?Sized,
    P: Fn(&Path) -> bool,
    T: FnMut(&[u8]) -> Option<Vec<u8>>,
{
    let files = fs
        .walk_files(root)
        .map_err(|e| ScaffoldError::filesystem("walk", root, e))?;

    let mut summary = TransformSummary::default();
    for path in files.into_iter().filter(|p| predicate(p)) {
        let data = fs
            .read(&path)
            .map_err(|e| ScaffoldError::filesystem("read", &path, e))?;
        summary.scanned += 1;

        if let Some(updated) = transform(&data) {
            fs.write(&path, &updated)
                .map_err(|e| ScaffoldError::filesystem("write", &path, e))?;
            summary.rewritten.push(path);
        }
    }

    Ok(summary)
}
