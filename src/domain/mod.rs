//! Domain Layer
//!
//! Pure build-pipeline concepts without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Diagnostics and project configuration
//! - `value_objects/` - Immutable value types (ContentHash, BundleFormat)
//! - `services/` - Text processing (tsconfig, compiler output)
//! - `ports/` - Interface definitions for infrastructure

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
