//! External tool detection and execution
//!
//! This module provides:
//! - Detection of git and the Go toolchain
//! - The [`ToolRunner`] seam every subprocess goes through

pub mod check;
pub mod tool;

pub use check::{check_go, check_git, check_tools, missing_tools, ToolInfo};
pub use tool::{ProcessRunner, ToolCommand, ToolRunner};
