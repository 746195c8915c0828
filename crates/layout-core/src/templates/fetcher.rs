//! Materializing a template repository into the project folder

use crate::config::ScaffoldSettings;
use crate::error::{Result, ScaffoldError};
use crate::fs::FileSystem;
use crate::pipeline::Outcome;
use crate::prompt::{overwrite_message, Confirm};
use crate::runtime::{ToolCommand, ToolRunner};
use crate::templates::TemplateSource;
use std::path::Path;
use tracing::debug;

/// Make sure `dest` is free for a fresh clone
///
/// An existing folder is only removed after the operator agrees. Declining is an
/// [`Outcome::Declined`], not an error, and leaves the folder untouched.
pub fn prepare_destination<F, C>(
    fs: &F,
    confirm: &C,
    dest: &Path,
    folder_name: &str,
) -> Result<Outcome<()>>
where
    F: FileSystem + ?Sized,
    C: Confirm + ?Sized,
{
    let exists = fs
        .exists(dest)
        .map_err(|e| ScaffoldError::filesystem("check", dest, e))?;
    if !exists {
        return Ok(Outcome::Completed(()));
    }

    let overwrite = confirm
        .confirm(&overwrite_message(folder_name))
        .map_err(ScaffoldError::Prompt)?;
    if !overwrite {
        return Ok(Outcome::Declined);
    }

    debug!(dest = %dest.display(), "removing existing project folder");
    fs.remove_dir_all(dest)
        .map_err(|e| ScaffoldError::filesystem("remove old project", dest, e))?;

    Ok(Outcome::Completed(()))
}

/// `git clone <source> <folder>`, run from `root`
pub fn clone_command(
    settings: &ScaffoldSettings,
    source: &TemplateSource,
    folder_name: &str,
    root: &Path,
) -> ToolCommand {
    ToolCommand::new(
        settings.git_program.as_str(),
        ["clone".to_string(), source.location(), folder_name.to_string()],
    )
    .current_dir(root)
}

/// Clone the template into `root/folder_name`
pub async fn clone_template<R>(
    runner: &R,
    settings: &ScaffoldSettings,
    source: &TemplateSource,
    folder_name: &str,
    root: &Path,
) -> Result<()>
where
    R: ToolRunner + ?Sized,
{
    let command = clone_command(settings, source, folder_name, root);
    runner.run(&command).await
}
