//! Layout Core - scaffolding Go projects from layout template repositories
//!
//! A new project is created by cloning a template repository, renaming the template's
//! Go module to the project name, tidying dependencies and dropping the template's git
//! history. The heavy lifting is done by `git` and `go`; this library orchestrates them.
//!
//! # Architecture
//!
//! - **Seams** - [`fs::FileSystem`], [`runtime::ToolRunner`] and [`prompt::Confirm`]
//!   isolate disk access, subprocesses and operator questions
//! - **Stages** - [`templates`] holds the fetch, rewrite and finish steps
//! - **Pipeline** - [`pipeline::Scaffolder`] runs the stages in order and stops at the
//!   first failure or declined prompt
//! - **CLI/TUI Interface** - optional cliclack front end (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use layout_core::{AssumeYes, OsFileSystem, ProcessRunner, Project, Scaffolder, TemplateSource};
//!
//! let template = TemplateSource::parse("https://github.com/q1mi/gin-base-layout.git");
//! let project = Project::new("example.com/org/app", template)?;
//! let scaffolder = Scaffolder::new(OsFileSystem, ProcessRunner, AssumeYes, Default::default(), ".");
//! let outcome = scaffolder.run(&project).await?;
//! ```

pub mod config;
pub mod error;
pub mod fs;
pub mod pipeline;
pub mod product;
pub mod project;
pub mod prompt;
pub mod runtime;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::ScaffoldSettings;
pub use error::{Result, ScaffoldError};
pub use fs::{FileSystem, MemoryFileSystem, OsFileSystem};
pub use pipeline::{Outcome, Progress, ScaffoldReport, Scaffolder, Step};
pub use product::LayoutConfig;
pub use project::{folder_name, resolve_template, Project, TemplateChoice, TemplateUrls};
pub use prompt::{AssumeYes, Confirm};
pub use runtime::{ProcessRunner, ToolCommand, ToolRunner};
pub use templates::TemplateSource;

#[cfg(feature = "tui")]
pub use tui::run;
