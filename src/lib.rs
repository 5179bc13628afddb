//! extbuild - build orchestrator for a browser extension
//!
//! Type-checks and transpiles the extension's TypeScript sources, bundles
//! each entry point into a self-executing script, stages the bundles with
//! the static assets, and packages the result into a zip archive.
//!
//! The compiler and bundler are external tools behind the `Compiler` and
//! `Bundler` ports; the pipeline itself lives in `application::build`.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

// Re-exports for convenience
pub use application::{BuildOptions, BuildReport, BuildUseCase, CheckUseCase, CleanUseCase};
pub use config::BuildConfig;
pub use domain::entities::{Diagnostic, DiagnosticCategory};
pub use domain::ports::{BuildEvent, BuildEventSink, Bundler, Compiler, Toolchain};
pub use error::{BuildError, BuildResult};
