//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{BundleFormat, BundlerKind, ConfigWarning};
use crate::error::BuildResult;

use super::loader;

/// Project (TypeScript) section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectSection {
    /// Path of `tsconfig.json`
    pub config: PathBuf,
    /// Where the compiler emits transpiled files
    pub intermediate_dir: PathBuf,
}

impl Default for ProjectSection {
    fn default() -> Self {
        Self {
            config: PathBuf::from("tsconfig.json"),
            intermediate_dir: PathBuf::from("ts-out"),
        }
    }
}

/// Bundling section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BundleConfig {
    /// Entry-point file names inside the intermediate directory
    pub entry_points: Vec<String>,
    pub format: BundleFormat,
    /// Global variable name for `iife` bundles
    pub name: String,
    pub bundler: BundlerKind,
}

impl Default for BundleConfig {
    fn default() -> Self {
        Self {
            entry_points: vec![
                "background.js".to_string(),
                "content.js".to_string(),
                "viewer.js".to_string(),
            ],
            format: BundleFormat::Iife,
            name: "background".to_string(),
            bundler: BundlerKind::Auto,
        }
    }
}

/// Static asset section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Files copied to the output root under their file name
    pub files: Vec<PathBuf>,
    /// Directories copied recursively to the output root under their name
    pub dirs: Vec<PathBuf>,
    /// Directory scanned for icons
    pub icon_dir: PathBuf,
    /// File-name glob selecting icons inside `icon_dir`
    pub icon_glob: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            files: vec![
                PathBuf::from("src/viewer.css"),
                PathBuf::from("src/manifest.json"),
                PathBuf::from("license.txt"),
            ],
            dirs: vec![PathBuf::from("src/_locales")],
            icon_dir: PathBuf::from("src"),
            icon_glob: "icon*.png".to_string(),
        }
    }
}

/// Output section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Staging directory, recreated every build
    pub dir: PathBuf,
    /// Zip archive path
    pub archive: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("build"),
            archive: PathBuf::from("jsonview.zip"),
        }
    }
}

/// Explicit tool locations, overriding `node_modules/.bin` and `PATH` lookup
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    pub tsc: Option<PathBuf>,
    pub rollup: Option<PathBuf>,
    pub esbuild: Option<PathBuf>,
}

/// Complete build configuration
///
/// Every path is relative to the project root unless absolute.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    pub project: ProjectSection,
    pub bundle: BundleConfig,
    pub assets: AssetsConfig,
    pub output: OutputConfig,
    pub tools: ToolsConfig,
}

impl BuildConfig {
    /// Default configuration file name looked up in the project root
    pub const FILE_NAME: &'static str = "extbuild.toml";

    /// Load an explicit file, or `<root>/extbuild.toml` if present, or defaults
    pub fn discover(
        project_root: &Path,
        explicit: Option<&Path>,
    ) -> BuildResult<(Self, Vec<ConfigWarning>)> {
        loader::discover(project_root, explicit)
    }
}
