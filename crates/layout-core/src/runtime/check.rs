//! Detection of the external tools the pipeline shells out to

use crate::config::ScaffoldSettings;
use std::process::Command;

/// Tool detection result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolInfo {
    pub name: String,
    pub version: Option<String>,
    pub available: bool,
    /// Where to get the tool when it is missing
    pub install_hint: &'static str,
}

/// Probe a tool by running it with a version argument
pub fn check_tool(program: &str, version_arg: &str, install_hint: &'static str) -> ToolInfo {
    let output = Command::new(program).arg(version_arg).output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            ToolInfo {
                name: program.to_string(),
                version: Some(version).filter(|v| !v.is_empty()),
                available: true,
                install_hint,
            }
        }
        _ => ToolInfo {
            name: program.to_string(),
            version: None,
            available: false,
            install_hint,
        },
    }
}

/// Check git
pub fn check_git(settings: &ScaffoldSettings) -> ToolInfo {
    check_tool(&settings.git_program, "--version", "https://git-scm.com/downloads")
}

/// Check the Go toolchain
pub fn check_go(settings: &ScaffoldSettings) -> ToolInfo {
    check_tool(&settings.go_program, "version", "https://go.dev/dl/")
}

/// Check every tool the pipeline needs
///
/// Nothing fails here: a missing tool only surfaces as a real error once the
/// pipeline tries to run it.
pub fn check_tools(settings: &ScaffoldSettings) -> Vec<ToolInfo> {
    vec![check_git(settings), check_go(settings)]
}

/// Tools from `infos` that could not be found
pub fn missing_tools(infos: &[ToolInfo]) -> Vec<&ToolInfo> {
    infos.iter().filter(|info| !info.available).collect()
}
