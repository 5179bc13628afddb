//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::sync::Arc;

use crate::application::{BuildOptions, BuildUseCase, CheckUseCase, CleanUseCase};
use crate::domain::ports::BuildEventSink;
use crate::infrastructure::{ConsoleEventSink, JsonEventSink, NodeToolchain, ToolLocator};

/// Type alias for the concrete BuildUseCase with all dependencies
pub type ConcreteBuildUseCase = BuildUseCase<NodeToolchain>;

/// Type alias for the concrete CheckUseCase with all dependencies
pub type ConcreteCheckUseCase = CheckUseCase<NodeToolchain>;

/// Tools are looked up below the project root first
pub fn create_toolchain(options: &BuildOptions) -> NodeToolchain {
    NodeToolchain::new(ToolLocator::new(&options.project_root), &options.config)
}

/// Create a build use case with all dependencies wired up
pub fn create_build_use_case(options: &BuildOptions) -> ConcreteBuildUseCase {
    BuildUseCase::new(create_toolchain(options))
}

/// Create a check use case with all dependencies wired up
pub fn create_check_use_case(options: &BuildOptions) -> ConcreteCheckUseCase {
    CheckUseCase::new(create_toolchain(options))
}

pub fn create_clean_use_case() -> CleanUseCase {
    CleanUseCase::new()
}

/// NDJSON on stdout for `--json`, console output otherwise
pub fn create_event_sink(json: bool, command: &'static str) -> Arc<dyn BuildEventSink> {
    if json {
        Arc::new(JsonEventSink::stdout(command))
    } else {
        Arc::new(ConsoleEventSink::stderr())
    }
}
