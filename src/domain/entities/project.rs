//! Project configuration entities
//!
//! `ProjectConfig` is the parsed form of `tsconfig.json`; `ResolvedProject`
//! adds the concrete list of source files that belong to it.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

/// Parsed `tsconfig.json`, before file resolution
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectConfig {
    pub compiler_options: Map<String, Value>,
    pub files: Option<Vec<String>>,
    pub include: Option<Vec<String>>,
    pub exclude: Option<Vec<String>>,
}

impl ProjectConfig {
    /// `compilerOptions.outDir`, if set
    pub fn out_dir(&self) -> Option<&str> {
        self.compiler_options.get("outDir").and_then(Value::as_str)
    }

    /// `compilerOptions.allowJs`, defaulting to false
    pub fn allow_js(&self) -> bool {
        self.compiler_options
            .get("allowJs")
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    /// Include patterns in effect
    ///
    /// Falls back to `**/*` only when neither `files` nor `include` is given.
    pub fn effective_include(&self) -> Vec<String> {
        match (&self.files, &self.include) {
            (_, Some(include)) => include.clone(),
            (Some(_), None) => Vec::new(),
            (None, None) => vec!["**/*".to_string()],
        }
    }

    /// Exclude patterns in effect
    pub fn effective_exclude(&self) -> Vec<String> {
        if let Some(exclude) = &self.exclude {
            return exclude.clone();
        }
        let mut defaults: Vec<String> = ["node_modules", "bower_components", "jspm_packages"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        if let Some(out_dir) = self.out_dir() {
            defaults.push(out_dir.to_string());
        }
        defaults
    }

    /// File extensions the compiler accepts as inputs
    pub fn supported_extensions(&self) -> &'static [&'static str] {
        if self.allow_js() {
            &[".ts", ".tsx", ".d.ts", ".js", ".jsx"]
        } else {
            &[".ts", ".tsx", ".d.ts"]
        }
    }
}

/// A project configuration with its source files resolved
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedProject {
    /// Path of the configuration file that was read
    pub config_path: PathBuf,
    /// Directory all relative paths are resolved against
    pub root_dir: PathBuf,
    pub config: ProjectConfig,
    /// Source files, sorted, relative to `root_dir`
    pub file_names: Vec<PathBuf>,
}

impl ResolvedProject {
    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    pub fn source_count(&self) -> usize {
        self.file_names.len()
    }
}
