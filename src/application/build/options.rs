//! Build Options
//!
//! Project root plus the build configuration, with every configured path
//! resolved against the root.

use std::path::{Path, PathBuf};

use crate::config::BuildConfig;
use crate::error::{BuildError, BuildResult};
use crate::infrastructure::fs::normalize;

/// Options for the build, check, and clean use cases
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Directory every relative configured path is resolved against
    pub project_root: PathBuf,
    pub config: BuildConfig,
}

impl BuildOptions {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            config: BuildConfig::default(),
        }
    }

    pub fn with_config(mut self, config: BuildConfig) -> Self {
        self.config = config;
        self
    }

    /// Resolve a configured path against the project root
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.project_root.join(path)
        }
    }

    /// `tsconfig.json`
    pub fn project_config_path(&self) -> PathBuf {
        self.resolve(&self.config.project.config)
    }

    /// Where the compiler writes transpiled files
    pub fn intermediate_dir(&self) -> PathBuf {
        self.resolve(&self.config.project.intermediate_dir)
    }

    /// Staging directory
    pub fn output_dir(&self) -> PathBuf {
        self.resolve(&self.config.output.dir)
    }

    pub fn archive_path(&self) -> PathBuf {
        self.resolve(&self.config.output.archive)
    }

    /// Reject layouts where resetting a generated directory would delete
    /// project inputs, or where the archive would land inside the tree it packs.
    ///
    /// Paths are compared lexically after making them absolute.
    pub fn check_layout(&self) -> BuildResult<()> {
        let root = absolute(&self.project_root)?;
        let output = absolute(&self.output_dir())?;
        let intermediate = absolute(&self.intermediate_dir())?;
        let archive = absolute(&self.archive_path())?;

        let assets = &self.config.assets;
        let mut inputs = vec![
            ("the project configuration", self.project_config_path()),
            ("the icon directory", self.resolve(&assets.icon_dir)),
        ];
        inputs.extend(assets.files.iter().map(|f| ("the asset", self.resolve(f))));
        inputs.extend(assets.dirs.iter().map(|d| ("the asset directory", self.resolve(d))));

        for (role, dir) in [
            ("output directory", &output),
            ("intermediate directory", &intermediate),
        ] {
            if root.starts_with(dir) {
                return Err(unsafe_layout(role, dir, "contains the project root".to_string()));
            }
            for (what, input) in &inputs {
                if absolute(input)?.starts_with(dir) {
                    return Err(unsafe_layout(
                        role,
                        dir,
                        format!("contains {what} {}", input.display()),
                    ));
                }
            }
            if archive.starts_with(dir) {
                return Err(unsafe_layout(
                    role,
                    dir,
                    format!("contains the archive {}", archive.display()),
                ));
            }
        }

        if output.starts_with(&intermediate) || intermediate.starts_with(&output) {
            return Err(unsafe_layout(
                "output directory",
                &output,
                format!("overlaps the intermediate directory {}", intermediate.display()),
            ));
        }
        Ok(())
    }

}

fn absolute(path: &Path) -> BuildResult<PathBuf> {
    std::path::absolute(path)
        .map(|p| normalize(&p))
        .map_err(|e| BuildError::fs(path, e))
}

fn unsafe_layout(role: &'static str, path: &Path, reason: String) -> BuildError {
    BuildError::UnsafeLayout {
        role,
        path: path.to_path_buf(),
        reason,
    }
}
