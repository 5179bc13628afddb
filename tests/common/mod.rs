//! Common test utilities for extbuild CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated project directory plus helpers to run the binary
//! - Fixtures: a small extension project and stub tool scripts
//! - Assertion macros: `assert_output_contains!`, `assert_staged!`

#![allow(dead_code)]

pub mod assertions;
pub mod env;
pub mod fixtures;

pub use assertions::*;
pub use env::*;
pub use fixtures::*;
