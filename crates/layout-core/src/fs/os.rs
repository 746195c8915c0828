//! On-disk filesystem backed by `std::fs` and `walkdir`

use super::FileSystem;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// The real filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
    fn exists(&self, path: &Path) -> io::Result<bool> {
        path.try_exists()
    }

    fn remove_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::remove_dir_all(path)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        // Truncating an existing file keeps its mode bits.
        std::fs::write(path, contents)
    }

    /// Symlinks to files are included and later read and written through the link.
    /// Symlinked directories are not descended into.
    fn walk_files(&self, root: &Path) -> io::Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry.map_err(io::Error::from)?;
            if entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file()) {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }
}
