//! Compiler port - type-check and transpile a resolved project

use std::path::Path;

use crate::domain::entities::{Diagnostic, ResolvedProject};
use crate::error::BuildResult;

/// Outcome of a compiler run that did not fail to start
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompileOutput {
    /// Pre-emit and emit diagnostics, in the order the compiler reported them
    pub diagnostics: Vec<Diagnostic>,
    /// True when the compiler wrote no files
    pub emit_skipped: bool,
}

impl CompileOutput {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty() && !self.emit_skipped
    }
}

/// Type-checks and transpiles sources into an output directory
///
/// Implementations:
/// - `TscCompiler` - runs the TypeScript compiler as a child process
/// - test doubles that write canned output
pub trait Compiler: Send + Sync {
    /// Name of the tool (for logging)
    fn name(&self) -> &'static str;

    /// Compile `project`, writing transpiled files below `out_dir`
    ///
    /// Diagnostics are returned in `CompileOutput`; `Err` is reserved for
    /// failures to run the compiler at all.
    fn compile(&self, project: &ResolvedProject, out_dir: &Path) -> BuildResult<CompileOutput>;
}
