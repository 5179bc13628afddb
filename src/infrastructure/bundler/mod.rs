//! Bundler strategies
//!
//! Defines the available bundlers and picks one for the build.

mod esbuild;
mod rollup;

pub use esbuild::EsbuildBundler;
pub use rollup::RollupBundler;

use crate::config::ToolsConfig;
use crate::domain::ports::Bundler;
use crate::domain::value_objects::BundlerKind;
use crate::error::{BuildError, BuildResult};

use super::tools::ToolLocator;

/// Pick the bundler to drive for this build
///
/// An explicit kind must be installed. `Auto` tries rollup first (preferred),
/// then esbuild.
pub fn select_bundler(
    kind: BundlerKind,
    locator: &ToolLocator,
    tools: &ToolsConfig,
) -> BuildResult<Box<dyn Bundler>> {
    match kind {
        BundlerKind::Rollup => Ok(Box::new(RollupBundler::new(
            locator.locate("rollup", tools.rollup.as_deref())?,
        ))),
        BundlerKind::Esbuild => Ok(Box::new(EsbuildBundler::new(
            locator.locate("esbuild", tools.esbuild.as_deref())?,
        ))),
        BundlerKind::Auto => detect_bundler(locator, tools),
    }
}

fn detect_bundler(locator: &ToolLocator, tools: &ToolsConfig) -> BuildResult<Box<dyn Bundler>> {
    if let Ok(program) = locator.locate("rollup", tools.rollup.as_deref()) {
        let rollup = RollupBundler::new(program);
        if rollup.is_available() {
            return Ok(Box::new(rollup));
        }
        tracing::debug!(program = %rollup.program().display(), "rollup found but not runnable");
    }

    if let Ok(program) = locator.locate("esbuild", tools.esbuild.as_deref()) {
        let esbuild = EsbuildBundler::new(program);
        if esbuild.is_available() {
            return Ok(Box::new(esbuild));
        }
        tracing::debug!(program = %esbuild.program().display(), "esbuild found but not runnable");
    }

    Err(BuildError::ToolNotFound {
        tool: "rollup or esbuild".to_string(),
        searched: "node_modules/.bin and PATH".to_string(),
    })
}
