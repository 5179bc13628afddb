//! External tool lookup and invocation
//!
//! Tools are searched in order: explicit configuration, the project's
//! `node_modules/.bin`, then `PATH`.

use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use crate::error::{BuildError, BuildResult};

/// Finds executables for a project
#[derive(Debug, Clone)]
pub struct ToolLocator {
    project_root: PathBuf,
}

impl ToolLocator {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
        }
    }

    /// Locate `tool`, honoring an explicit override
    pub fn locate(&self, tool: &str, configured: Option<&Path>) -> BuildResult<PathBuf> {
        let Some(path) = configured else {
            return self.search(tool);
        };

        // A bare name is searched like the default one
        if !path.is_absolute() && path.components().count() == 1 {
            return self.search(&path.to_string_lossy());
        }

        let path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.project_root.join(path)
        };
        if path.is_file() {
            Ok(path)
        } else {
            Err(BuildError::ToolNotFound {
                tool: tool.to_string(),
                searched: path.display().to_string(),
            })
        }
    }

    fn search(&self, tool: &str) -> BuildResult<PathBuf> {
        let local_bin = self.project_root.join("node_modules").join(".bin");
        for name in executable_names(tool) {
            let candidate = local_bin.join(&name);
            if candidate.is_file() {
                return Ok(candidate);
            }
        }

        if let Some(paths) = env::var_os("PATH") {
            for dir in env::split_paths(&paths) {
                for name in executable_names(tool) {
                    let candidate = dir.join(&name);
                    if candidate.is_file() {
                        return Ok(candidate);
                    }
                }
            }
        }

        Err(BuildError::ToolNotFound {
            tool: tool.to_string(),
            searched: format!("{} and PATH", local_bin.display()),
        })
    }
}

fn executable_names(tool: &str) -> Vec<String> {
    if cfg!(windows) {
        vec![
            format!("{tool}.cmd"),
            format!("{tool}.exe"),
            tool.to_string(),
        ]
    } else {
        vec![tool.to_string()]
    }
}

/// Check that `program --version` runs successfully
pub fn responds_to_version(program: &Path) -> bool {
    Command::new(program)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Run a tool to completion, capturing its output
pub fn run_tool<I, S>(program: &Path, args: I) -> BuildResult<Output>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    tracing::debug!(program = %program.display(), "spawn");
    Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .output()
        .map_err(|e| BuildError::fs(program, e))
}

/// stdout and stderr joined, trimmed, for error messages
pub fn combined_output(output: &Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    let mut text = String::new();
    for part in [stdout.trim(), stderr.trim()] {
        if part.is_empty() {
            continue;
        }
        if !text.is_empty() {
            text.push('\n');
        }
        text.push_str(part);
    }
    text
}
