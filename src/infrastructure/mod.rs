//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `tools` - Locating and running external executables
//! - `compiler` - `tsc` adapter
//! - `bundler/` - rollup and esbuild adapters
//! - `toolchain` - On-demand tool resolution for a project
//! - `project` - `tsconfig.json` loading and source resolution
//! - `fs/` - Output directory and asset staging
//! - `archive` - Deterministic zip writer
//! - `events/` - Event sinks (console, NDJSON)

pub mod archive;
pub mod bundler;
pub mod compiler;
pub mod events;
pub mod fs;
pub mod project;
pub mod toolchain;
pub mod tools;

// Re-export for convenience
pub use archive::{write_archive, ArchiveSummary};
pub use bundler::{select_bundler, EsbuildBundler, RollupBundler};
pub use compiler::TscCompiler;
pub use events::{ConsoleEventSink, JsonEventSink};
pub use fs::CopiedAsset;
pub use project::load_project;
pub use toolchain::NodeToolchain;
pub use tools::ToolLocator;
