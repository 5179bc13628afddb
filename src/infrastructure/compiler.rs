//! TypeScript compiler adapter
//!
//! Runs `tsc` as a child process and parses its plain-text diagnostics.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::domain::entities::ResolvedProject;
use crate::domain::ports::{CompileOutput, Compiler};
use crate::domain::services::parse_tsc_output;
use crate::error::{BuildError, BuildResult};

use super::tools::{combined_output, run_tool, ToolLocator};

/// tsc exit code when diagnostics were reported and nothing was emitted
const EXIT_OUTPUTS_SKIPPED: i32 = 1;

/// Compiler strategy backed by the `tsc` executable
#[derive(Debug, Clone)]
pub struct TscCompiler {
    program: PathBuf,
}

impl TscCompiler {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Find `tsc` for the project (override, `node_modules/.bin`, `PATH`)
    pub fn locate(locator: &ToolLocator, configured: Option<&Path>) -> BuildResult<Self> {
        locator.locate("tsc", configured).map(Self::new)
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl Compiler for TscCompiler {
    fn name(&self) -> &'static str {
        "tsc"
    }

    fn compile(&self, project: &ResolvedProject, out_dir: &Path) -> BuildResult<CompileOutput> {
        let args: [&OsStr; 6] = [
            OsStr::new("--project"),
            project.config_path.as_os_str(),
            OsStr::new("--outDir"),
            out_dir.as_os_str(),
            OsStr::new("--pretty"),
            OsStr::new("false"),
        ];
        let output = run_tool(&self.program, args)?;

        let mut diagnostics = parse_tsc_output(&String::from_utf8_lossy(&output.stdout));
        diagnostics.extend(parse_tsc_output(&String::from_utf8_lossy(&output.stderr)));

        if !output.status.success() && diagnostics.is_empty() {
            return Err(BuildError::ToolFailed {
                tool: self.name().to_string(),
                status: output.status.to_string(),
                output: combined_output(&output),
            });
        }

        Ok(CompileOutput {
            diagnostics,
            emit_skipped: output.status.code() == Some(EXIT_OUTPUTS_SKIPPED),
        })
    }
}
