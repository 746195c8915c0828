//! Renaming the template's Go module to the new project name
//!
//! The old module path is read from `go.mod`, every literal occurrence of it in source
//! files is replaced, and finally `go mod edit -module` updates the manifest itself.
//! Replacement is plain substring matching, so occurrences inside comments and string
//! literals are rewritten too.

use crate::config::ScaffoldSettings;
use crate::error::{Result, ScaffoldError};
use crate::fs::{transform_files, FileSystem, TransformSummary};
use crate::runtime::{ToolCommand, ToolRunner};
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// What a module rewrite did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteSummary {
    /// Module path the template declared
    pub old_module: String,
    /// Source files read
    pub scanned: usize,
    /// Source files that contained the old module path
    pub rewritten: Vec<PathBuf>,
}

/// Extract the module path from the `module <path>` directive of a `go.mod`
pub fn parse_module_name(manifest: &str) -> Option<String> {
    manifest.lines().find_map(|line| {
        let rest = line.trim().strip_prefix("module")?;
        if !rest.starts_with(char::is_whitespace) {
            return None;
        }

        let rest = rest.split("//").next().unwrap_or_default();
        let token = rest.split_whitespace().next()?;
        let token = token
            .strip_prefix('"')
            .and_then(|t| t.strip_suffix('"'))
            .or_else(|| token.strip_prefix('`').and_then(|t| t.strip_suffix('`')))
            .unwrap_or(token);

        (!token.is_empty() && token != "(").then(|| token.to_string())
    })
}

/// Read the module path declared in the manifest at `path`
pub fn read_module_name<F>(fs: &F, path: &Path) -> Result<String>
where
    F: FileSystem + ?Sized,
{
    let data = fs.read(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ScaffoldError::ManifestMissing {
            path: path.to_path_buf(),
        },
        _ => ScaffoldError::filesystem("read", path, e),
    })?;

    parse_module_name(&String::from_utf8_lossy(&data)).ok_or_else(|| {
        ScaffoldError::ModuleNotFound {
            path: path.to_path_buf(),
        }
    })
}

/// Replace every occurrence of `needle` in `haystack`
///
/// Returns `None` when there is nothing to replace, so unchanged files are never written.
pub fn replace_literal(haystack: &[u8], needle: &[u8], replacement: &[u8]) -> Option<Vec<u8>> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }

    let mut out: Option<Vec<u8>> = None;
    let mut copied_to = 0;
    let mut i = 0;
    while i + needle.len() <= haystack.len() {
        if haystack[i..].starts_with(needle) {
            let buf = out.get_or_insert_with(|| Vec::with_capacity(haystack.len()));
            buf.extend_from_slice(&haystack[copied_to..i]);
            buf.extend_from_slice(replacement);
            i += needle.len();
            copied_to = i;
        } else {
            i += 1;
        }
    }

    out.map(|mut buf| {
        buf.extend_from_slice(&haystack[copied_to..]);
        buf
    })
}

/// Replace `old` with `new` in every source file under `dest`
pub fn rewrite_sources<F>(
    fs: &F,
    settings: &ScaffoldSettings,
    dest: &Path,
    old: &str,
    new: &str,
) -> Result<TransformSummary>
where
    F: FileSystem + ?Sized,
{
    transform_files(
        fs,
        dest,
        |path| settings.is_source_file(path),
        |data| replace_literal(data, old.as_bytes(), new.as_bytes()),
    )
}

/// `go mod edit -module <name>`, run inside the project folder
pub fn set_module_command(settings: &ScaffoldSettings, dest: &Path, name: &str) -> ToolCommand {
    ToolCommand::new(settings.go_program.as_str(), ["mod", "edit", "-module", name])
        .current_dir(dest)
}

/// Rename the module of the project cloned into `dest` to `new_name`
pub async fn rewrite_module<F, R>(
    fs: &F,
    runner: &R,
    settings: &ScaffoldSettings,
    dest: &Path,
    new_name: &str,
) -> Result<RewriteSummary>
where
    F: FileSystem + ?Sized,
    R: ToolRunner + ?Sized,
{
    let manifest = dest.join(&settings.manifest_file);
    let old_module = read_module_name(fs, &manifest)?;
    debug!(old = %old_module, new = %new_name, "renaming module");

    let summary = rewrite_sources(fs, settings, dest, &old_module, new_name)?;

    runner
        .run(&set_module_command(settings, dest, new_name))
        .await?;

    Ok(RewriteSummary {
        old_module,
        scanned: summary.scanned,
        rewritten: summary.rewritten,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MemoryFileSystem;

    #[test]
    fn test_parse_module_name() {
        let manifest = "module github.com/q1mi/gin-base-layout\n\ngo 1.21\n";
        assert_eq!(
            parse_module_name(manifest).as_deref(),
            Some("github.com/q1mi/gin-base-layout")
        );
    }

    #[test]
    fn test_parse_module_name_variants() {
        assert_eq!(
            parse_module_name("// layout\n\nmodule\tlayout // comment\n").as_deref(),
            Some("layout")
        );
        assert_eq!(
            parse_module_name("module \"example.com/quoted\"\n").as_deref(),
            Some("example.com/quoted")
        );
        assert_eq!(
            parse_module_name("go 1.22\nmodule late/decl\n").as_deref(),
            Some("late/decl")
        );
    }

    #[test]
    fn test_parse_module_name_rejects_non_directives() {
        assert_eq!(parse_module_name(""), None);
        assert_eq!(parse_module_name("go 1.21\nrequire x v1\n"), None);
        assert_eq!(parse_module_name("modules are fun\n"), None);
        assert_eq!(parse_module_name("module\n"), None);
        assert_eq!(parse_module_name("module // nothing\n"), None);
    }

    #[test]
    fn test_read_module_name_errors() {
        let fs = MemoryFileSystem::new();
        let err = read_module_name(&fs, Path::new("app/go.mod")).unwrap_err();
        assert!(matches!(err, ScaffoldError::ManifestMissing { .. }));

        fs.insert("app/go.mod", "go 1.21\n");
        let err = read_module_name(&fs, Path::new("app/go.mod")).unwrap_err();
        assert!(matches!(err, ScaffoldError::ModuleNotFound { .. }));
    }

    #[test]
    fn test_replace_literal() {
        assert_eq!(
            replace_literal(b"import \"old/mod/pkg\"", b"old/mod", b"new/app").unwrap(),
            b"import \"new/app/pkg\"".to_vec()
        );
        assert_eq!(
            replace_literal(b"old old", b"old", b"new-longer").unwrap(),
            b"new-longer new-longer".to_vec()
        );
        assert_eq!(replace_literal(b"aaa", b"aa", b"b").unwrap(), b"ba".to_vec());
    }

    #[test]
    fn test_replace_literal_without_match_is_none() {
        assert_eq!(replace_literal(b"package main", b"old/mod", b"new"), None);
        assert_eq!(replace_literal(b"short", b"much longer", b"x"), None);
        assert_eq!(replace_literal(b"anything", b"", b"x"), None);
    }

    #[test]
    fn test_rewrite_sources_replaces_everywhere_in_go_files() {
        let fs = MemoryFileSystem::new();
        fs.insert(
            "app/cmd/server/main.go",
            "package main\n\nimport \"layout/internal/server\" // layout/internal\n",
        );
        fs.insert("app/internal/server/server.go", "package server\n");
        fs.insert("app/README.md", "go get layout/internal\n");

        let settings = ScaffoldSettings::default();
        let summary =
            rewrite_sources(&fs, &settings, Path::new("app"), "layout", "example.com/org/app")
                .unwrap();

        assert_eq!(summary.scanned, 2);
        assert_eq!(
            summary.rewritten,
            vec![PathBuf::from("app/cmd/server/main.go")]
        );
        let main = fs.contents("app/cmd/server/main.go").unwrap();
        assert!(!main.contains("\"layout/"));
        assert_eq!(
            main,
            "package main\n\nimport \"example.com/org/app/internal/server\" // example.com/org/app/internal\n"
        );
        assert_eq!(fs.contents("app/internal/server/server.go").unwrap(), "package server\n");
        assert_eq!(fs.contents("app/README.md").unwrap(), "go get layout/internal\n");
    }

    #[test]
    fn test_rewrite_sources_write_failure_aborts() {
        let fs = MemoryFileSystem::new();
        fs.insert("app/main.go", "import \"layout/pkg\"");
        fs.deny("app/main.go");

        let err = rewrite_sources(
            &fs,
            &ScaffoldSettings::default(),
            Path::new("app"),
            "layout",
            "demo",
        )
        .unwrap_err();

        assert!(matches!(err, ScaffoldError::Filesystem { action: "write", .. }));
    }

    #[test]
    fn test_set_module_command() {
        let cmd = set_module_command(
            &ScaffoldSettings::default(),
            Path::new("app"),
            "example.com/org/app",
        );
        assert_eq!(cmd.to_string(), "go mod edit -module example.com/org/app");
        assert_eq!(cmd.dir.as_deref(), Some(Path::new("app")));
    }
}
