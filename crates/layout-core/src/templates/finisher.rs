//! Last steps: `go mod tidy`, then dropping the template's git history

use crate::config::ScaffoldSettings;
use crate::error::Result;
use crate::fs::FileSystem;
use crate::runtime::{ToolCommand, ToolRunner};
use std::path::Path;
use tracing::debug;

/// `go mod tidy`, run inside the project folder
pub fn tidy_command(settings: &ScaffoldSettings, dest: &Path) -> ToolCommand {
    ToolCommand::new(settings.go_program.as_str(), ["mod", "tidy"]).current_dir(dest)
}

/// Reconcile the project's dependencies with what its code imports
pub async fn tidy<R>(runner: &R, settings: &ScaffoldSettings, dest: &Path) -> Result<()>
where
    R: ToolRunner + ?Sized,
{
    runner.run(&tidy_command(settings, dest)).await
}

/// Remove the VCS metadata directory the clone left behind
///
/// Best effort: a failure is logged at debug level and otherwise ignored. Returns
/// whether the directory is gone.
pub fn remove_vcs_metadata<F>(fs: &F, settings: &ScaffoldSettings, dest: &Path) -> bool
where
    F: FileSystem + ?Sized,
{
    let vcs_dir = dest.join(&settings.vcs_dir);
    match fs.remove_dir_all(&vcs_dir) {
        Ok(()) => true,
        Err(e) => {
            debug!(path = %vcs_dir.display(), error = %e, "could not remove VCS metadata");
            false
        }
    }
}
