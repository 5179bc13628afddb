//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod build_events;
pub mod bundler;
pub mod compiler;
pub mod toolchain;

pub use build_events::{BuildEvent, BuildEventSink, NoopEventSink};
pub use bundler::{BundleRequest, Bundler};
pub use compiler::{CompileOutput, Compiler};
pub use toolchain::Toolchain;
