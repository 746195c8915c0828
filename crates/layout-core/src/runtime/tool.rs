//! Running external tools (git, go)
//!
//! Every subprocess the pipeline needs is described as a [`ToolCommand`] and handed to
//! a [`ToolRunner`]. Only success or failure matters; output is kept for error reports.

use crate::error::{Result, ScaffoldError};
use std::fmt;
use std::future::Future;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command as TokioCommand;
use tracing::debug;

/// A single external command invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    pub program: String,
    pub args: Vec<String>,
    /// Working directory; the current directory when `None`
    pub dir: Option<PathBuf>,
}

impl ToolCommand {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            dir: None,
        }
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.dir = Some(dir.into());
        self
    }
}

impl fmt::Display for ToolCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Executes [`ToolCommand`]s
pub trait ToolRunner {
    /// Run the command to completion. A non-zero exit is an error.
    fn run(&self, command: &ToolCommand) -> impl Future<Output = Result<()>> + Send;
}

/// Runs commands as real child processes
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl ToolRunner for ProcessRunner {
    async fn run(&self, command: &ToolCommand) -> Result<()> {
        debug!(command = %command, dir = ?command.dir, "running external tool");

        let mut cmd = TokioCommand::new(&command.program);
        cmd.args(&command.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = &command.dir {
            cmd.current_dir(dir);
        }

        let output = cmd.output().await.map_err(|source| ScaffoldError::Spawn {
            command: command.to_string(),
            source,
        })?;

        if output.status.success() {
            return Ok(());
        }

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));
        Err(ScaffoldError::Command {
            command: command.to_string(),
            status: output.status.to_string(),
            output: combined,
        })
    }
}
