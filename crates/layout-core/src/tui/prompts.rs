//! Charm-style CLI prompts using cliclack

use crate::config::ScaffoldSettings;
use crate::fs::OsFileSystem;
use crate::pipeline::{Outcome, Progress, ScaffoldReport, Scaffolder, Step};
use crate::product::LayoutConfig;
use crate::project::{Project, TemplateChoice, TemplateUrls};
use crate::prompt::{AssumeYes, Confirm};
use crate::runtime::{check, ProcessRunner};
use crate::templates::TemplateSource;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io;

/// CLI arguments for the new command
#[derive(Debug, Clone, Default)]
pub struct NewArgs {
    /// Project name, e.g. `example.com/org/app`
    pub name: String,

    /// Template selection (`--repo`, `--advanced`)
    pub template: TemplateChoice,

    /// Skip the git/go availability check
    pub skip_tool_check: bool,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,
}

/// Asks through a cliclack confirm prompt, defaulting to "no"
#[derive(Debug, Clone, Copy, Default)]
pub struct ClackConfirm;

impl Confirm for ClackConfirm {
    fn confirm(&self, message: &str) -> io::Result<bool> {
        cliclack::log::remark("Overwriting removes the old project and creates a new one.")?;
        cliclack::confirm(message).initial_value(false).interact()
    }
}

/// Drives one cliclack spinner per pipeline step
#[derive(Default)]
struct SpinnerProgress {
    active: Option<cliclack::ProgressBar>,
}

impl SpinnerProgress {
    /// Stop a spinner left running by a failed step
    fn fail(&mut self) {
        if let Some(spinner) = self.active.take() {
            spinner.error("Failed");
        }
    }
}

impl Progress for SpinnerProgress {
    fn step_started(&mut self, step: Step, project: &Project) {
        let spinner = cliclack::spinner();
        let message = match step {
            Step::Clone => format!("{} from {}...", step, project.template),
            _ => format!("{}...", step),
        };
        spinner.start(message);
        self.active = Some(spinner);
    }

    fn step_finished(&mut self, _step: Step, detail: &str) {
        if let Some(spinner) = self.active.take() {
            spinner.stop(detail);
        }
    }
}

/// Run the CLI with interactive prompts
pub async fn run<C: LayoutConfig>(config: &C, args: NewArgs) -> Result<()> {
    cliclack::intro(config.display_name())?;

    // Step 1: Resolve the template
    let urls = TemplateUrls::from_config(config);
    let template = TemplateSource::parse(&args.template.resolve(&urls));
    let project = Project::new(args.name.as_str(), template)?;
    cliclack::log::info(format!(
        "Creating project {} from {}",
        project.name.cyan(),
        project.template
    ))?;

    // Step 2: Check tools (advisory)
    let settings = config.settings();
    if args.skip_tool_check {
        cliclack::log::info("Skipping tool check")?;
    } else {
        check_tools(&settings)?;
    }

    // Step 3: Run the pipeline
    let root = std::env::current_dir().context("Failed to determine current directory")?;

    let mut progress = SpinnerProgress::default();
    let outcome = if args.yes {
        Scaffolder::new(OsFileSystem, ProcessRunner, AssumeYes, settings, root)
            .run_with(&project, &mut progress)
            .await
    } else {
        Scaffolder::new(OsFileSystem, ProcessRunner, ClackConfirm, settings, root)
            .run_with(&project, &mut progress)
            .await
    };

    match outcome {
        Ok(Outcome::Completed(report)) => {
            cliclack::log::success(format!("Project {} created successfully!", project.name))?;
            print_next_steps(config, &project, &report)?;
            Ok(())
        }
        Ok(Outcome::Declined) => {
            cliclack::outro_cancel("Kept the existing folder, nothing was created.")?;
            Ok(())
        }
        Err(e) => {
            progress.fail();
            cliclack::log::error(format!("{}", e))?;
            anyhow::bail!("Project {} was not created.", project.name);
        }
    }
}

fn check_tools(settings: &ScaffoldSettings) -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start("Checking tools...");

    let tools = check::check_tools(settings);
    let missing = check::missing_tools(&tools);

    if missing.is_empty() {
        let found: Vec<String> = tools
            .iter()
            .map(|t| format!("{} ({})", t.name, t.version.as_deref().unwrap_or("unknown")))
            .collect();
        spinner.stop(format!("Detected tools: {}", found.join(", ")));
        return Ok(());
    }

    spinner.stop("Missing tools");
    for tool in missing {
        cliclack::log::warning(format!(
            "{} not found (install from {})",
            tool.name, tool.install_hint
        ))?;
    }
    Ok(())
}

fn print_next_steps<C: LayoutConfig>(
    config: &C,
    project: &Project,
    report: &ScaffoldReport,
) -> Result<()> {
    let steps = config.next_steps(project);

    if report.files_rewritten > 0 {
        cliclack::log::info(format!(
            "Replaced {} with {} in {} of {} source file(s)",
            report.old_module,
            project.name,
            report.files_rewritten,
            report.files_scanned
        ))?;
    }

    println!();
    println!("  Now run:");
    println!();

    for step in &steps {
        println!("  › {}", step.cyan());
    }

    println!();
    cliclack::outro("Happy coding!")?;

    Ok(())
}
