//! Toolchain port - supplies the external tools a build drives
//!
//! Tools are resolved on demand, so a stage that never runs never has to
//! find its tool: `check` needs no bundler, and a broken `tsconfig.json`
//! is reported even when nothing is installed.

use crate::error::BuildResult;

use super::bundler::Bundler;
use super::compiler::Compiler;

pub trait Toolchain: Send + Sync {
    type Compiler: Compiler;
    type Bundler: Bundler;

    /// Resolve the compiler
    fn compiler(&self) -> BuildResult<Self::Compiler>;

    /// Resolve the bundler
    fn bundler(&self) -> BuildResult<Self::Bundler>;
}
