//! Domain services
//!
//! Stateless text processing used by the build pipeline.

pub mod jsonc;
pub mod tsc_output;
pub mod tsconfig;

pub use jsonc::strip_jsonc;
pub use tsc_output::parse_tsc_output;
pub use tsconfig::parse_project_config;
