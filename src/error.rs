//! Error types for extbuild
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::entities::Diagnostic;

/// Result type alias for build operations
pub type BuildResult<T> = Result<T, BuildError>;

/// Main error type for build operations
///
/// Every variant is fatal: the orchestrator never continues past one.
#[derive(Error, Debug)]
pub enum BuildError {
    /// `tsconfig.json` could not be read, parsed, or resolved
    #[error("failed to load project configuration {}: {} diagnostic(s)", .path.display(), .diagnostics.len())]
    ProjectConfig {
        path: PathBuf,
        diagnostics: Vec<Diagnostic>,
    },

    /// `extbuild.toml` is malformed
    #[error("invalid build configuration in {}: {message}", .file.display())]
    BuildConfig { file: PathBuf, message: String },

    /// A generated path would overwrite or delete project inputs
    #[error("{role} {} {reason}", .path.display())]
    UnsafeLayout {
        role: &'static str,
        path: PathBuf,
        reason: String,
    },

    /// Type-check or emit reported diagnostics
    #[error("failed to compile typescript: {} diagnostic(s)", .diagnostics.len())]
    Compilation { diagnostics: Vec<Diagnostic> },

    /// External tool could not be located
    #[error("tool '{tool}' not found (searched {searched})")]
    ToolNotFound { tool: String, searched: String },

    /// External tool exited unsuccessfully without structured diagnostics
    #[error("{tool} exited with {status}: {output}")]
    ToolFailed {
        tool: String,
        status: String,
        output: String,
    },

    /// The compiler did not emit the transpiled entry point
    #[error("entry point '{name}' was not emitted (expected {})", .path.display())]
    MissingEntryPoint { name: String, path: PathBuf },

    /// Bundler failed for one entry point
    #[error("failed to bundle '{entry}': {message}")]
    Bundle { entry: String, message: String },

    /// A configured static asset does not exist
    #[error("missing asset: {}", .path.display())]
    MissingAsset { path: PathBuf },

    /// IO error with the path it happened on
    #[error("IO error at {}: {source}", .path.display())]
    Fs {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid glob in configuration
    #[error("invalid glob pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    /// Archive writer failed
    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// Bundler worker pool could not be created
    #[error("failed to start bundler workers: {0}")]
    WorkerPool(#[from] rayon::ThreadPoolBuildError),
}

impl BuildError {
    /// Wrap an IO error with the path it concerns
    pub fn fs(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        BuildError::Fs {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Structured diagnostics carried by this error, if any
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            BuildError::ProjectConfig { diagnostics, .. }
            | BuildError::Compilation { diagnostics } => diagnostics,
            _ => &[],
        }
    }
}
