//! esbuild Bundler Strategy
//!
//! Fallback when rollup is not installed.

use std::path::{Path, PathBuf};

use crate::domain::ports::{BundleRequest, Bundler};
use crate::error::{BuildError, BuildResult};
use crate::infrastructure::tools::{combined_output, responds_to_version, run_tool};

/// Bundler strategy using the esbuild CLI
#[derive(Debug, Clone)]
pub struct EsbuildBundler {
    program: PathBuf,
}

impl EsbuildBundler {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl Bundler for EsbuildBundler {
    fn name(&self) -> &'static str {
        "esbuild"
    }

    fn is_available(&self) -> bool {
        responds_to_version(&self.program)
    }

    fn bundle(&self, request: &BundleRequest<'_>) -> BuildResult<()> {
        let args = vec![
            request.input.display().to_string(),
            "--bundle".to_string(),
            format!("--format={}", request.format.as_str()),
            format!("--global-name={}", request.global_name),
            format!("--outfile={}", request.output.display()),
            "--log-level=warning".to_string(),
        ];
        let output = run_tool(&self.program, &args)?;

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
