//! Template source locations
//!
//! A source is whatever `git clone` accepts. It is classified only so it can be
//! described to the user; nothing here checks that it is reachable.

use std::fmt;
use std::path::PathBuf;
use url::Url;

/// Where a layout template is cloned from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// A URL with a scheme (`https://`, `ssh://`, `git://`, `file://`)
    Remote(Url),
    /// scp-like syntax: `git@github.com:org/repo.git`
    Scp(String),
    /// A path on this machine
    Local(PathBuf),
}

impl TemplateSource {
    pub fn parse(location: &str) -> Self {
        match Url::parse(location) {
            // Single-letter schemes are Windows drive letters
            Ok(url) if url.scheme().len() > 1 => Self::Remote(url),
            _ if is_scp_like(location) => Self::Scp(location.to_string()),
            _ => Self::Local(PathBuf::from(location)),
        }
    }

    /// The argument handed to `git clone`
    pub fn location(&self) -> String {
        match self {
            Self::Remote(url) => url.as_str().to_string(),
            Self::Scp(location) => location.clone(),
            Self::Local(path) => path.display().to_string(),
        }
    }

    /// Repository name without a trailing `.git`, for display
    pub fn repo_name(&self) -> String {
        let location = self.location();
        let last = location
            .trim_end_matches(['/', '\\'])
            .rsplit(['/', '\\', ':'])
            .next()
            .unwrap_or_default()
            .to_string();
        let name = last.strip_suffix(".git").unwrap_or(&last);
        if name.is_empty() {
            location
        } else {
            name.to_string()
        }
    }
}

impl fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.location())
    }
}

/// `host:path` where the colon comes before any slash
fn is_scp_like(location: &str) -> bool {
    match location.split_once(':') {
        Some((host, _)) => host.len() > 1 && !host.contains(['/', '\\']),
        None => false,
    }
}
