//! Value objects

pub mod bundle;
pub mod config_warning;
pub mod hash;

pub use bundle::{BundleFormat, BundlerKind};
pub use config_warning::ConfigWarning;
pub use hash::ContentHash;
