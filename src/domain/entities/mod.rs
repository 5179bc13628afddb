//! Domain entities

pub mod diagnostic;
pub mod project;

pub use diagnostic::{Diagnostic, DiagnosticCategory, Position};
pub use project::{ProjectConfig, ResolvedProject};
