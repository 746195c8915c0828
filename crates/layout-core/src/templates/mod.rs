//! Template stages of the pipeline
//!
//! This module provides:
//! - Template source classification
//! - Fetching: overwrite confirmation and `git clone`
//! - Rewriting: renaming the Go module across the cloned sources
//! - Finishing: `go mod tidy` and removal of the template's git history

pub mod fetcher;
pub mod finisher;
pub mod rewriter;
pub mod source;

pub use fetcher::{clone_template, prepare_destination};
pub use finisher::{remove_vcs_metadata, tidy};
pub use rewriter::{parse_module_name, rewrite_module, RewriteSummary};
pub use source::TemplateSource;
