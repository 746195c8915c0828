//! The scaffolding pipeline
//!
//! ```text
//! Start -> TemplateResolved -> Fetched -> Rewritten -> Tidied -> Cleaned
//! ```
//!
//! Template resolution happens before a [`Project`] exists; everything after it is
//! driven by [`Scaffolder::run`]. Each stage either completes, is declined by the
//! operator, or fails. Declining or failing stops the pipeline where it is: nothing is
//! retried and a half-rewritten folder is left on disk as is.

use crate::config::ScaffoldSettings;
use crate::error::Result;
use crate::fs::FileSystem;
use crate::project::Project;
use crate::prompt::Confirm;
use crate::runtime::ToolRunner;
use crate::templates::{fetcher, finisher, rewriter};
use std::fmt;
use std::path::PathBuf;

/// How a stage ended, when it did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Completed(T),
    /// The operator chose not to overwrite an existing folder
    Declined,
}

/// Steps reported to a [`Progress`] observer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Clone,
    Rewrite,
    Tidy,
}

impl Step {
    pub fn description(&self) -> &'static str {
        match self {
            Step::Clone => "Cloning template",
            Step::Rewrite => "Renaming module",
            Step::Tidy => "Tidying dependencies",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Observer for long-running steps, e.g. to drive spinners
///
/// Both methods default to doing nothing. A step that fails gets no `step_finished`.
pub trait Progress {
    fn step_started(&mut self, _step: Step, _project: &Project) {}
    fn step_finished(&mut self, _step: Step, _detail: &str) {}
}

impl Progress for () {}

/// Result of a completed scaffold
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub destination: PathBuf,
    /// Module path the template declared before renaming
    pub old_module: String,
    pub files_scanned: usize,
    pub files_rewritten: usize,
    /// Whether the template's VCS metadata was removed
    pub vcs_removed: bool,
}

/// Runs the fetch, rewrite, tidy and clean stages for a [`Project`]
pub struct Scaffolder<F, R, C> {
    fs: F,
    runner: R,
    confirm: C,
    settings: ScaffoldSettings,
    root: PathBuf,
}

impl<F, R, C> Scaffolder<F, R, C>
where
    F: FileSystem,
    R: ToolRunner,
    C: Confirm,
{
    /// `root` is the directory the project folder is created in
    pub fn new(
        fs: F,
        runner: R,
        confirm: C,
        settings: ScaffoldSettings,
        root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            fs,
            runner,
            confirm,
            settings,
            root: root.into(),
        }
    }

    /// Folder the project ends up in
    pub fn destination(&self, project: &Project) -> PathBuf {
        self.root.join(&project.folder_name)
    }

    pub async fn run(&self, project: &Project) -> Result<Outcome<ScaffoldReport>> {
        self.run_with(project, &mut ()).await
    }

    pub async fn run_with<P>(
        &self,
        project: &Project,
        progress: &mut P,
    ) -> Result<Outcome<ScaffoldReport>>
    where
        P: Progress + ?Sized,
    {
        let dest = self.destination(project);

        // Fetched
        let prepared =
            fetcher::prepare_destination(&self.fs, &self.confirm, &dest, &project.folder_name)?;
        if let Outcome::Declined = prepared {
            return Ok(Outcome::Declined);
        }

        progress.step_started(Step::Clone, project);
        fetcher::clone_template(
            &self.runner,
            &self.settings,
            &project.template,
            &project.folder_name,
            &self.root,
        )
        .await?;
        progress.step_finished(
            Step::Clone,
            &format!("Cloned {} into {}", project.template.repo_name(), project.folder_name),
        );

        // Rewritten
        progress.step_started(Step::Rewrite, project);
        let rewrite =
            rewriter::rewrite_module(&self.fs, &self.runner, &self.settings, &dest, &project.name)
                .await?;
        progress.step_finished(
            Step::Rewrite,
            &format!(
                "Renamed module {} to {} in {} file(s)",
                rewrite.old_module,
                project.name,
                rewrite.rewritten.len()
            ),
        );

        // Tidied
        progress.step_started(Step::Tidy, project);
        finisher::tidy(&self.runner, &self.settings, &dest).await?;
        progress.step_finished(Step::Tidy, "Dependencies tidied");

        // Cleaned
        let vcs_removed = finisher::remove_vcs_metadata(&self.fs, &self.settings, &dest);

        Ok(Outcome::Completed(ScaffoldReport {
            destination: dest,
            old_module: rewrite.old_module,
            files_scanned: rewrite.scanned,
            files_rewritten: rewrite.rewritten.len(),
            vcs_removed,
        }))
    }
}
