//! Clean Use Case
//!
//! Deletes build artifacts. Absent targets are fine.

use std::sync::Arc;

use crate::domain::ports::{BuildEvent, BuildEventSink, NoopEventSink};
use crate::error::BuildResult;
use crate::infrastructure::fs::{remove_dir_if_exists, remove_file_if_exists};

use crate::application::build::BuildOptions;
use super::result::CleanResult;

/// Clean use case - removes the output directory, intermediate directory,
/// and archive
#[derive(Debug, Default, Clone, Copy)]
pub struct CleanUseCase;

impl CleanUseCase {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, options: &BuildOptions) -> BuildResult<CleanResult> {
        self.execute_with_events(options, Arc::new(NoopEventSink))
    }

    pub fn execute_with_events(
        &self,
        options: &BuildOptions,
        event_sink: Arc<dyn BuildEventSink>,
    ) -> BuildResult<CleanResult> {
        options.check_layout()?;
        let mut result = CleanResult::new();

        for dir in [options.output_dir(), options.intermediate_dir()] {
            let existed = remove_dir_if_exists(&dir)?;
            event_sink.on_event(BuildEvent::Removed {
                path: dir.clone(),
                existed,
            });
            result.record(dir, existed);
        }

        let archive = options.archive_path();
        let existed = remove_file_if_exists(&archive)?;
        event_sink.on_event(BuildEvent::Removed {
            path: archive.clone(),
            existed,
        });
        result.record(archive, existed);

        Ok(result)
    }
}
