//! Configuration module for extbuild
//!
//! Resolution order:
//! 1. `--config <file>` (must exist)
//! 2. `<project root>/extbuild.toml` (optional)
//! 3. Built-in defaults, which reproduce the extension's fixed layout
//!
//! Every path in the configuration is relative to the project root.

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use types::{
    AssetsConfig, BuildConfig, BundleConfig, OutputConfig, ProjectSection, ToolsConfig,
};
