//! Error types for layout-core

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using layout-core's Error type
pub type Result<T> = std::result::Result<T, ScaffoldError>;

/// Scaffolding error types
///
/// A declined overwrite is not an error; it is reported as
/// [`Outcome::Declined`](crate::pipeline::Outcome::Declined).
#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// The project name has no final path segment to use as a folder
    #[error("Invalid project name '{name}': it has no final path segment")]
    InvalidProjectName { name: String },

    /// A stat/remove/read/write on the destination tree failed
    #[error("Failed to {action} {}", .path.display())]
    Filesystem {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An external tool could not be started at all
    #[error("Failed to run `{command}`")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    /// An external tool exited unsuccessfully
    #[error("`{command}` failed ({status}){}", format_output(.output))]
    Command {
        command: String,
        status: String,
        output: String,
    },

    /// The dependency manifest is missing
    #[error("Could not determine module name: {} does not exist", .path.display())]
    ManifestMissing { path: PathBuf },

    /// The dependency manifest has no `module <name>` declaration
    #[error("Could not determine module name: no module declaration in {}", .path.display())]
    ModuleNotFound { path: PathBuf },

    /// The overwrite prompt could not be shown or answered
    #[error("Failed to read confirmation")]
    Prompt(#[source] io::Error),
}

impl ScaffoldError {
    pub(crate) fn filesystem(
        action: &'static str,
        path: impl Into<PathBuf>,
        source: io::Error,
    ) -> Self {
        Self::Filesystem {
            action,
            path: path.into(),
            source,
        }
    }
}

fn format_output(output: &str) -> String {
    let trimmed = output.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(":\n{}", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_error_includes_output() {
        let err = ScaffoldError::Command {
            command: "git clone https://example.com/repo.git app".to_string(),
            status: "exit status: 128".to_string(),
            output: "fatal: repository not found\n".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("git clone https://example.com/repo.git app"));
        assert!(message.contains("exit status: 128"));
        assert!(message.ends_with("fatal: repository not found"));
    }

    #[test]
    fn test_command_error_without_output() {
        let err = ScaffoldError::Command {
            command: "go mod tidy".to_string(),
            status: "exit status: 1".to_string(),
            output: "  \n".to_string(),
        };
        assert_eq!(err.to_string(), "`go mod tidy` failed (exit status: 1)");
    }

    #[test]
    fn test_manifest_errors_mention_module_name() {
        let missing = ScaffoldError::ManifestMissing {
            path: PathBuf::from("app/go.mod"),
        };
        let mismatch = ScaffoldError::ModuleNotFound {
            path: PathBuf::from("app/go.mod"),
        };
        assert!(missing.to_string().starts_with("Could not determine module name"));
        assert!(mismatch.to_string().starts_with("Could not determine module name"));
    }
}
