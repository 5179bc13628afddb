//! Bundle Value Objects
//!
//! Output format of a bundle and the choice of bundler tool.

use serde::{Deserialize, Serialize};

/// Module format of a produced bundle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BundleFormat {
    /// Self-executing function expression (what extensions load)
    #[default]
    Iife,
    /// ES module
    Esm,
    /// CommonJS
    Cjs,
}

impl BundleFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            BundleFormat::Iife => "iife",
            BundleFormat::Esm => "esm",
            BundleFormat::Cjs => "cjs",
        }
    }
}

/// Which bundler to drive
///
/// `Auto` picks the first available tool, rollup before esbuild.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BundlerKind {
    #[default]
    Auto,
    Rollup,
    Esbuild,
}
