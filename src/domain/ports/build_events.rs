//! Build Event Port
//!
//! Provides an observable interface for the build pipeline.
//! Diagnostics travel through here as structured records, so the
//! rendering (console, NDJSON) can change without touching collection.

use std::path::PathBuf;

use crate::domain::entities::Diagnostic;
use crate::domain::value_objects::ContentHash;

/// Event emitted during a build
#[derive(Debug, Clone)]
pub enum BuildEvent {
    /// Build started
    Started {
        project_root: PathBuf,
        config_path: PathBuf,
    },

    /// Project configuration parsed and source files resolved
    ProjectResolved {
        config_path: PathBuf,
        source_count: usize,
    },

    /// A diagnostic from configuration loading or compilation
    Diagnostic(Diagnostic),

    /// Compilation finished without diagnostics
    Compiled { out_dir: PathBuf },

    /// Output directory deleted and recreated
    OutputReset { dir: PathBuf },

    /// One entry point bundled
    Bundled {
        index: usize,
        entry: String,
        output: PathBuf,
    },

    /// One static asset copied
    AssetCopied {
        source: PathBuf,
        destination: PathBuf,
    },

    /// Archive written
    Archived {
        path: PathBuf,
        entry_count: usize,
        digest: ContentHash,
    },

    /// A build artifact was removed by `clean`
    Removed { path: PathBuf, existed: bool },

    /// Build completed
    Completed {
        bundle_count: usize,
        asset_count: usize,
        archive: Option<PathBuf>,
    },

    /// Build aborted
    Failed { error: String },
}

/// Trait for receiving build events
///
/// Implementations:
/// - ConsoleEventSink: diagnostics and summary for humans
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait BuildEventSink: Send + Sync {
    /// Handle a build event
    fn on_event(&self, event: BuildEvent);

    /// Check if this sink wants per-file events (bundles, assets)
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl BuildEventSink for NoopEventSink {
    fn on_event(&self, _event: BuildEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
