//! Build Use Case
//!
//! Compiles, bundles, stages, and archives the extension.

mod options;
mod result;
mod use_case;


pub use options::BuildOptions;
pub use result::BuildReport;
pub use use_case::{bundle_all, plan_bundles, BuildUseCase, BundleJob};
