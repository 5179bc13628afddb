//! Bundler port - turn one transpiled entry point into a single script

use std::path::Path;

use crate::domain::value_objects::BundleFormat;
use crate::error::BuildResult;

/// One bundling job
#[derive(Debug, Clone, Copy)]
pub struct BundleRequest<'a> {
    /// Entry-point file name, e.g. `viewer.js`
    pub entry: &'a str,
    /// Transpiled entry file
    pub input: &'a Path,
    /// Bundle file to write
    pub output: &'a Path,
    pub format: BundleFormat,
    /// Global variable name for `iife` bundles
    pub global_name: &'a str,
}

/// Strategy for bundling an entry point with its dependencies
///
/// Jobs share no state, so implementations must be callable from several
/// worker threads at once.
pub trait Bundler: Send + Sync {
    /// Name of this bundler (for logging)
    fn name(&self) -> &'static str;

    /// Check if this bundler can run on the system
    fn is_available(&self) -> bool;

    /// Produce `request.output` from `request.input`
    fn bundle(&self, request: &BundleRequest<'_>) -> BuildResult<()>;
}

impl<T: Bundler + ?Sized> Bundler for Box<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn is_available(&self) -> bool {
        (**self).is_available()
    }

    fn bundle(&self, request: &BundleRequest<'_>) -> BuildResult<()> {
        (**self).bundle(request)
    }
}
