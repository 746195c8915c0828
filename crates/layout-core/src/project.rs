//! The project being scaffolded and the template it starts from

use crate::error::{Result, ScaffoldError};
use crate::product::LayoutConfig;
use crate::templates::TemplateSource;

/// One scaffolding request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    /// Module identifier for the new project, e.g. `example.com/org/app`
    pub name: String,
    /// Directory the template is cloned into, e.g. `app`
    pub folder_name: String,
    /// Where the template comes from
    pub template: TemplateSource,
}

impl Project {
    pub fn new(name: impl Into<String>, template: TemplateSource) -> Result<Self> {
        let name = name.into();
        let folder_name = folder_name(&name)
            .ok_or_else(|| ScaffoldError::InvalidProjectName { name: name.clone() })?
            .to_string();

        Ok(Self {
            name,
            folder_name,
            template,
        })
    }
}

/// Final path segment of a project name: `github.com/org/app/` -> `app`
///
/// `.` and `..` segments are resolved lexically first, so `org/app/..` -> `org`.
/// Returns `None` when nothing is left to name a folder with: an empty name, only
/// separators, or a path that climbs out of the working directory.
pub fn folder_name(name: &str) -> Option<&str> {
    let mut segments: Vec<&str> = Vec::new();
    for segment in name.split(['/', '\\']) {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                _ => segments.push(".."),
            },
            _ => segments.push(segment),
        }
    }

    segments.last().copied().filter(|segment| *segment != "..")
}

/// Template selection flags, as given on the command line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateChoice {
    /// Explicit template repository (`--repo`)
    pub repo: Option<String>,
    /// Use the advanced layout (`--advanced`)
    pub advanced: bool,
}

impl TemplateChoice {
    pub fn resolve(&self, urls: &TemplateUrls) -> String {
        resolve_template(
            self.repo.as_deref(),
            self.advanced,
            &urls.base,
            &urls.advanced,
        )
    }
}

/// The two built-in template locations after environment overrides
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateUrls {
    pub base: String,
    pub advanced: String,
}

impl TemplateUrls {
    /// Product defaults, each replaceable through its environment variable
    pub fn from_config<C: LayoutConfig>(config: &C) -> Self {
        let from_env = |var: &str, default: &str| {
            std::env::var(var)
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            base: from_env(config.template_url_env(), config.base_template_url()),
            advanced: from_env(
                config.advanced_template_url_env(),
                config.advanced_template_url(),
            ),
        }
    }
}

/// Pick the template source: explicit repo, then advanced, then base
///
/// An empty `repo` counts as not given. Nothing is validated here; a bad location
/// fails later when it is cloned.
pub fn resolve_template(
    repo: Option<&str>,
    advanced: bool,
    base_url: &str,
    advanced_url: &str,
) -> String {
    match repo {
        Some(repo) if !repo.is_empty() => repo.to_string(),
        _ if advanced => advanced_url.to_string(),
        _ => base_url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://github.com/q1mi/gin-base-layout.git";
    const ADVANCED: &str = "https://github.com/q1mi/gin-advanced-layout.git";
    const CUSTOM: &str = "https://example.com/custom-layout.git";

    #[test]
    fn test_folder_name_takes_last_segment() {
        assert_eq!(folder_name("example.com/org/app"), Some("app"));
        assert_eq!(folder_name("app"), Some("app"));
        assert_eq!(folder_name("github.com/org/app/"), Some("app"));
        assert_eq!(folder_name("/github.com/org/app"), Some("app"));
        assert_eq!(folder_name("github.com//org/app//"), Some("app"));
        assert_eq!(folder_name("github.com/org/app/."), Some("app"));
    }

    #[test]
    fn test_folder_name_rejects_empty_names() {
        assert_eq!(folder_name(""), None);
        assert_eq!(folder_name("/"), None);
        assert_eq!(folder_name("//"), None);
    }

    #[test]
    fn test_folder_name_resolves_dot_dot() {
        assert_eq!(folder_name("example.com/org/app/.."), Some("org"));
        assert_eq!(folder_name("a/b/.."), Some("a"));
        assert_eq!(folder_name("a/../b"), Some("b"));
        assert_eq!(folder_name("../app"), Some("app"));
        assert_eq!(folder_name("app/./.."), None);
    }

    #[test]
    fn test_folder_name_rejects_parent_directories() {
        assert_eq!(folder_name(".."), None);
        assert_eq!(folder_name("../.."), None);
        assert_eq!(folder_name("a/../.."), None);
        assert_eq!(folder_name("/.."), None);
        assert_eq!(folder_name("app\\.."), None);

        let project = Project::new("example.com/..", TemplateSource::parse(BASE)).unwrap();
        assert_eq!(project.folder_name, "example.com");
        let err = Project::new("app/../..", TemplateSource::parse(BASE)).unwrap_err();
        assert!(matches!(err, ScaffoldError::InvalidProjectName { .. }));
    }

    #[test]
    fn test_project_new() {
        let project = Project::new("example.com/org/app", TemplateSource::parse(BASE)).unwrap();
        assert_eq!(project.name, "example.com/org/app");
        assert_eq!(project.folder_name, "app");

        let err = Project::new("/", TemplateSource::parse(BASE)).unwrap_err();
        assert!(matches!(err, ScaffoldError::InvalidProjectName { .. }));
    }

    #[test]
    fn test_resolve_template_precedence() {
        let cases = [
            (None, false, BASE),
            (None, true, ADVANCED),
            (Some(CUSTOM), false, CUSTOM),
            (Some(CUSTOM), true, CUSTOM),
        ];

        for (repo, advanced, expected) in cases {
            assert_eq!(
                resolve_template(repo, advanced, BASE, ADVANCED),
                expected,
                "repo={:?} advanced={}",
                repo,
                advanced
            );
        }
    }

    #[test]
    fn test_empty_repo_counts_as_unset() {
        assert_eq!(resolve_template(Some(""), false, BASE, ADVANCED), BASE);
        assert_eq!(resolve_template(Some(""), true, BASE, ADVANCED), ADVANCED);
    }

    #[test]
    fn test_template_choice_resolve() {
        let urls = TemplateUrls {
            base: BASE.to_string(),
            advanced: ADVANCED.to_string(),
        };
        let choice = TemplateChoice {
            repo: None,
            advanced: true,
        };
        assert_eq!(choice.resolve(&urls), ADVANCED);
        assert_eq!(TemplateChoice::default().resolve(&urls), BASE);
    }
}
