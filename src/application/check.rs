//! Check Use Case
//!
//! Runs the type-check stage alone. The output directory and the archive
//! are never touched.

use std::sync::Arc;

use crate::domain::entities::ResolvedProject;
use crate::domain::ports::{BuildEvent, BuildEventSink, NoopEventSink, Toolchain};
use crate::error::BuildResult;

use super::build::BuildOptions;
use super::compile::compile_project;

/// Check use case - type-check and transpile only
pub struct CheckUseCase<T: Toolchain> {
    toolchain: T,
}

impl<T: Toolchain> CheckUseCase<T> {
    pub fn new(toolchain: T) -> Self {
        Self { toolchain }
    }

    pub fn execute(&self, options: &BuildOptions) -> BuildResult<ResolvedProject> {
        self.execute_with_events(options, Arc::new(NoopEventSink))
    }

    pub fn execute_with_events(
        &self,
        options: &BuildOptions,
        event_sink: Arc<dyn BuildEventSink>,
    ) -> BuildResult<ResolvedProject> {
        event_sink.on_event(BuildEvent::Started {
            project_root: options.project_root.clone(),
            config_path: options.project_config_path(),
        });

        match compile_project(&self.toolchain, options, event_sink.as_ref()) {
            Ok(project) => {
                event_sink.on_event(BuildEvent::Completed {
                    bundle_count: 0,
                    asset_count: 0,
                    archive: None,
                });
                Ok(project)
            }
            Err(e) => {
                event_sink.on_event(BuildEvent::Failed {
                    error: e.to_string(),
                });
                Err(e)
            }
        }
    }
}
