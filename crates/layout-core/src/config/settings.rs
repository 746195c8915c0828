//! Fixed names the pipeline works with: manifest, source extensions, tool binaries

use std::path::Path;

/// Names and programs the scaffolding pipeline relies on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldSettings {
    /// Dependency manifest, relative to the project folder
    pub manifest_file: String,
    /// Extensions (without the dot) of files whose module references get rewritten
    pub source_extensions: Vec<String>,
    /// Version-control metadata directory removed at the end
    pub vcs_dir: String,
    /// Version-control executable used for cloning
    pub git_program: String,
    /// Dependency-manager executable used for `mod edit` / `mod tidy`
    pub go_program: String,
}

impl Default for ScaffoldSettings {
    fn default() -> Self {
        Self {
            manifest_file: "go.mod".to_string(),
            source_extensions: vec!["go".to_string()],
            vcs_dir: ".git".to_string(),
            git_program: "git".to_string(),
            go_program: "go".to_string(),
        }
    }
}

impl ScaffoldSettings {
    /// Whether `path` has one of the source extensions
    pub fn is_source_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.source_extensions.iter().any(|s| s == ext))
    }
}
