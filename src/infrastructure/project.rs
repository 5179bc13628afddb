//! Project configuration loading
//!
//! Reads `tsconfig.json`, parses it, and resolves the source files that
//! belong to the project relative to the configuration file's directory.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;

use crate::domain::entities::{Diagnostic, ProjectConfig, ResolvedProject};
use crate::domain::services::parse_project_config;

use super::fs::{normalize, slash_path};

/// Read, parse and resolve a project configuration.
///
/// `extra_excludes` are paths (relative to the current directory or
/// absolute) that never count as sources, such as the compiler's output
/// directory.
pub fn load_project(
    config_path: &Path,
    extra_excludes: &[PathBuf],
) -> Result<ResolvedProject, Vec<Diagnostic>> {
    let text = fs::read_to_string(config_path).map_err(|e| {
        vec![Diagnostic::error(format!(
            "Cannot read file '{}': {}.",
            config_path.display(),
            e
        ))
        .with_code(5083)]
    })?;

    let config = parse_project_config(config_path, &text)?;

    let root_dir = match config_path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let file_names = resolve_files(config_path, &root_dir, &config, extra_excludes)?;

    Ok(ResolvedProject {
        config_path: config_path.to_path_buf(),
        root_dir,
        config,
        file_names,
    })
}

fn resolve_files(
    config_path: &Path,
    root_dir: &Path,
    config: &ProjectConfig,
    extra_excludes: &[PathBuf],
) -> Result<Vec<PathBuf>, Vec<Diagnostic>> {
    let mut diagnostics = Vec::new();
    let mut files: BTreeSet<PathBuf> = BTreeSet::new();

    for file in config.files.iter().flatten() {
        let rel = normalize(Path::new(file));
        if root_dir.join(&rel).is_file() {
            files.insert(rel);
        } else {
            diagnostics.push(
                Diagnostic::error(format!(
                    "File '{}' not found.",
                    root_dir.join(&rel).display()
                ))
                .in_file(config_path)
                .with_code(6053),
            );
        }
    }

    let include = config.effective_include();
    let mut exclude = config.effective_exclude();
    let root_norm = normalize(root_dir);
    for extra in extra_excludes {
        if let Ok(rel) = normalize(extra).strip_prefix(&root_norm) {
            if !rel.as_os_str().is_empty() {
                exclude.push(slash_path(rel));
            }
        }
    }

    let include_set = build_set(config_path, &include, &mut diagnostics, include_patterns);
    let exclude_set = build_set(config_path, &exclude, &mut diagnostics, exclude_patterns);

    if let (Some(include_set), Some(exclude_set)) = (include_set, exclude_set) {
        if !include.is_empty() {
            let extensions = config.supported_extensions();
            for rel in walk_sources(root_dir, exclude_set) {
                let name = slash_path(&rel);
                if extensions.iter().any(|ext| name.ends_with(ext)) && include_set.is_match(&name) {
                    files.insert(rel);
                }
            }
        }
    }

    if !diagnostics.is_empty() {
        return Err(diagnostics);
    }

    if files.is_empty() {
        return Err(vec![Diagnostic::error(format!(
            "No inputs were found in config file '{}'. Specified 'include' paths were '{:?}' and 'exclude' paths were '{:?}'.",
            config_path.display(),
            include,
            exclude
        ))
        .with_code(18003)]);
    }

    Ok(files.into_iter().collect())
}

/// Files below `root` (relative), skipping excluded subtrees entirely
fn walk_sources(root: &Path, exclude: GlobSet) -> Vec<PathBuf> {
    let prefix = root.to_path_buf();
    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .sort_by_file_path(|a, b| a.cmp(b))
        .filter_entry(move |entry| match entry.path().strip_prefix(&prefix) {
            Ok(rel) if !rel.as_os_str().is_empty() => !exclude.is_match(slash_path(rel)),
            _ => true,
        })
        .build();

    walker
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_some_and(|ft| ft.is_file()))
        .filter_map(|entry| entry.path().strip_prefix(root).ok().map(Path::to_path_buf))
        .collect()
}

/// `src` means `src/**/*`; a leading `./` is dropped
fn include_patterns(pattern: &str) -> Vec<String> {
    let pattern = pattern.trim_start_matches("./").trim_end_matches('/');
    let last = pattern.rsplit('/').next().unwrap_or(pattern);
    let has_wildcard = pattern.contains(['*', '?']);
    if pattern.ends_with("**") {
        vec![format!("{pattern}/*")]
    } else if !has_wildcard && !last.contains('.') {
        vec![format!("{pattern}/**/*")]
    } else {
        vec![pattern.to_string()]
    }
}

/// An exclude matches the path itself and everything below it
fn exclude_patterns(pattern: &str) -> Vec<String> {
    let pattern = pattern.trim_start_matches("./").trim_end_matches('/');
    vec![pattern.to_string(), format!("{pattern}/**")]
}

fn build_set(
    config_path: &Path,
    patterns: &[String],
    diagnostics: &mut Vec<Diagnostic>,
    expand: fn(&str) -> Vec<String>,
) -> Option<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    let mut ok = true;
    for pattern in patterns {
        for expanded in expand(pattern) {
            match GlobBuilder::new(&expanded).literal_separator(true).build() {
                Ok(glob) => {
                    builder.add(glob);
                }
                Err(e) => {
                    ok = false;
                    diagnostics.push(
                        Diagnostic::error(format!("Invalid pattern '{pattern}': {e}"))
                            .in_file(config_path)
                            .with_code(5010),
                    );
                }
            }
        }
    }
    if !ok {
        return None;
    }
    match builder.build() {
        Ok(set) => Some(set),
        Err(e) => {
            diagnostics.push(Diagnostic::error(e.to_string()).in_file(config_path));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn names(project: &ResolvedProject) -> Vec<String> {
        project.file_names.iter().map(|p| slash_path(p)).collect()
    }

    #[test]
    fn resolves_include_relative_to_config_dir() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        write(root, "tsconfig.json", r#"{ "include": ["src"] }"#);
        write(root, "src/background.ts", "");
        write(root, "src/lib/util.ts", "");
        write(root, "src/types.d.ts", "");
        write(root, "src/viewer.css", "");
        write(root, "other/skip.ts", "");

        let project = load_project(&root.join("tsconfig.json"), &[]).unwrap();

        assert_eq!(
            names(&project),
            vec!["src/background.ts", "src/lib/util.ts", "src/types.d.ts"]
        );
        assert_eq!(project.root_dir(), root);
    }

    #[test]
    fn default_include_skips_node_modules_and_out_dir() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        write(
            root,
            "tsconfig.json",
            r#"{ "compilerOptions": { "outDir": "ts-out" } }"#,
        );
        write(root, "src/a.ts", "");
        write(root, "node_modules/pkg/index.d.ts", "");
        write(root, "ts-out/a.d.ts", "");

        let project = load_project(&root.join("tsconfig.json"), &[]).unwrap();
        assert_eq!(names(&project), vec!["src/a.ts"]);
    }

    #[test]
    fn extra_excludes_are_honored() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        write(root, "tsconfig.json", "{}");
        write(root, "src/a.ts", "");
        write(root, "gen/b.d.ts", "");

        let project = load_project(&root.join("tsconfig.json"), &[root.join("gen")]).unwrap();
        assert_eq!(names(&project), vec!["src/a.ts"]);
    }

    #[test]
    fn allow_js_picks_up_js_sources() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        write(
            root,
            "tsconfig.json",
            r#"{ "compilerOptions": { "allowJs": true }, "include": ["src/**/*"] }"#,
        );
        write(root, "src/a.js", "");
        write(root, "src/b.ts", "");

        let project = load_project(&root.join("tsconfig.json"), &[]).unwrap();
        assert_eq!(names(&project), vec!["src/a.js", "src/b.ts"]);
    }

    #[test]
    fn explicit_missing_file_is_reported() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        write(root, "tsconfig.json", r#"{ "files": ["src/missing.ts"] }"#);

        let errors = load_project(&root.join("tsconfig.json"), &[]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].code, Some(6053));
    }

    #[test]
    fn no_inputs_is_an_error() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        write(root, "tsconfig.json", r#"{ "include": ["src"] }"#);

        let errors = load_project(&root.join("tsconfig.json"), &[]).unwrap_err();
        assert_eq!(errors[0].code, Some(18003));
    }

    #[test]
    fn missing_config_file_is_a_diagnostic() {
        let dir = tempdir().unwrap();
        let errors = load_project(&dir.path().join("tsconfig.json"), &[]).unwrap_err();
        assert_eq!(errors[0].code, Some(5083));
        assert!(errors[0].message.contains("tsconfig.json"));
    }

    #[test]
    fn include_pattern_expansion() {
        assert_eq!(include_patterns("./src"), vec!["src/**/*"]);
        assert_eq!(include_patterns("src/**"), vec!["src/**/*"]);
        assert_eq!(include_patterns("src/*.ts"), vec!["src/*.ts"]);
        assert_eq!(include_patterns("src/main.ts"), vec!["src/main.ts"]);
    }
}
