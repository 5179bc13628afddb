//! Node toolchain
//!
//! Wires the project-local (or `PATH`) tsc and bundler into the
//! `Toolchain` port.

use crate::config::{BuildConfig, ToolsConfig};
use crate::domain::ports::{Bundler, Toolchain};
use crate::domain::value_objects::BundlerKind;
use crate::error::BuildResult;

use super::bundler::select_bundler;
use super::compiler::TscCompiler;
use super::tools::ToolLocator;

/// Tools found through `ToolLocator` and the `[tools]` overrides
#[derive(Debug, Clone)]
pub struct NodeToolchain {
    locator: ToolLocator,
    tools: ToolsConfig,
    bundler: BundlerKind,
}

impl NodeToolchain {
    pub fn new(locator: ToolLocator, config: &BuildConfig) -> Self {
        Self {
            locator,
            tools: config.tools.clone(),
            bundler: config.bundle.bundler,
        }
    }
}

impl Toolchain for NodeToolchain {
    type Compiler = TscCompiler;
    type Bundler = Box<dyn Bundler>;

    fn compiler(&self) -> BuildResult<TscCompiler> {
        let compiler = TscCompiler::locate(&self.locator, self.tools.tsc.as_deref())?;
        tracing::debug!(program = %compiler.program().display(), "using tsc");
        Ok(compiler)
    }

    fn bundler(&self) -> BuildResult<Box<dyn Bundler>> {
        let bundler = select_bundler(self.bundler, &self.locator, &self.tools)?;
        tracing::debug!(bundler = bundler.name(), "using bundler");
        Ok(bundler)
    }
}
