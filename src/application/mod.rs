//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `BuildUseCase` - Compile, reset output, bundle, copy assets, archive
//! - `CheckUseCase` - Compile only
//! - `CleanUseCase` - Remove build artifacts

pub mod build;
pub mod check;
pub mod clean;
mod compile;

pub use build::{BuildOptions, BuildReport, BuildUseCase, BundleJob};
pub use check::CheckUseCase;
pub use clean::{CleanResult, CleanUseCase};
pub use compile::compile_project;
