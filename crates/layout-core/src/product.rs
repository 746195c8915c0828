//! Product configuration trait for CLI binaries
//!
//! Each binary implements this trait to say which layout templates it scaffolds from
//! and what to tell the user once the project exists.

use crate::config::ScaffoldSettings;
use crate::project::Project;

/// Configuration trait for scaffolding products
pub trait LayoutConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for the CLI command)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Template repository used when neither `--repo` nor `--advanced` is given
    fn base_template_url(&self) -> &'static str;

    /// Template repository used with `--advanced`
    fn advanced_template_url(&self) -> &'static str;

    /// Environment variable overriding [`base_template_url`](Self::base_template_url)
    fn template_url_env(&self) -> &'static str;

    /// Environment variable overriding [`advanced_template_url`](Self::advanced_template_url)
    fn advanced_template_url_env(&self) -> &'static str;

    /// Commands to show once the project has been created
    fn next_steps(&self, project: &Project) -> Vec<String>;

    /// Manifest, extensions and tool names the pipeline works with
    fn settings(&self) -> ScaffoldSettings {
        ScaffoldSettings::default()
    }
}
