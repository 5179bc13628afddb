//! Rollup Bundler Strategy
//!
//! Preferred bundler: the extension's scripts were always built with it.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::domain::ports::{BundleRequest, Bundler};
use crate::error::{BuildError, BuildResult};
use crate::infrastructure::tools::{combined_output, responds_to_version, run_tool};

/// Bundler strategy using the rollup CLI
#[derive(Debug, Clone)]
pub struct RollupBundler {
    program: PathBuf,
}

impl RollupBundler {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl Bundler for RollupBundler {
    fn name(&self) -> &'static str {
        "rollup"
    }

    fn is_available(&self) -> bool {
        responds_to_version(&self.program)
    }

    fn bundle(&self, request: &BundleRequest<'_>) -> BuildResult<()> {
        let args: [&OsStr; 9] = [
            OsStr::new("--input"),
            request.input.as_os_str(),
            OsStr::new("--format"),
            OsStr::new(request.format.as_str()),
            OsStr::new("--name"),
            OsStr::new(request.global_name),
            OsStr::new("--file"),
            request.output.as_os_str(),
            OsStr::new("--silent"),
        ];
        let output = run_tool(&self.program, args)?;

        if output.status.success() {
            Ok(())
        } else {
            Err(BuildError::Bundle {
                entry: request.entry.to_string(),
                message: format!("{}: {}", output.status, combined_output(&output)),
            })
        }
    }
}
