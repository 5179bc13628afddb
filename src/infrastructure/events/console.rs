//! Console Event Sink
//!
//! Writes diagnostics for humans and turns progress into `tracing` events.
//! The final summary and the `error:` line are printed by the CLI.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{BuildEvent, BuildEventSink};

/// Event sink for interactive use
pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleEventSink {
    /// Diagnostics go to stderr, ahead of the `error:` summary
    pub fn stderr() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stderr())),
        }
    }

    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }
}

impl BuildEventSink for ConsoleEventSink {
    fn on_event(&self, event: BuildEvent) {
        match event {
            BuildEvent::Diagnostic(diagnostic) => {
                if let Ok(mut writer) = self.writer.lock() {
                    let _ = writeln!(writer, "{diagnostic}");
                    let _ = writer.flush();
                }
            }
            BuildEvent::Started {
                project_root,
                config_path,
            } => {
                tracing::info!(
                    root = %project_root.display(),
                    config = %config_path.display(),
                    "build started"
                );
            }
            BuildEvent::ProjectResolved { source_count, .. } => {
                tracing::info!(source_count, "project resolved");
            }
            BuildEvent::Compiled { out_dir } => {
                tracing::info!(out_dir = %out_dir.display(), "compiled");
            }
            BuildEvent::OutputReset { dir } => {
                tracing::info!(dir = %dir.display(), "output directory reset");
            }
            BuildEvent::Bundled { entry, output, .. } => {
                tracing::info!(entry = %entry, output = %output.display(), "bundled");
            }
            BuildEvent::AssetCopied { destination, .. } => {
                tracing::debug!(destination = %destination.display(), "asset copied");
            }
            BuildEvent::Archived {
                path,
                entry_count,
                digest,
            } => {
                tracing::info!(
                    path = %path.display(),
                    entry_count,
                    digest = %digest,
                    "archive written"
                );
            }
            BuildEvent::Removed { path, existed } => {
                tracing::info!(path = %path.display(), existed, "removed");
            }
            BuildEvent::Completed { .. } => {}
            BuildEvent::Failed { error } => {
                tracing::debug!(%error, "build failed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Diagnostic;
    use std::path::PathBuf;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn diagnostics_are_written_one_per_line() {
        let buffer = SharedBuffer::default();
        let sink = ConsoleEventSink::with_writer(buffer.clone());

        sink.on_event(BuildEvent::Diagnostic(
            Diagnostic::error("'}' expected.")
                .in_file("tsconfig.json")
                .at(3, 1)
                .with_code(1005),
        ));
        sink.on_event(BuildEvent::Diagnostic(Diagnostic::error(
            "No inputs were found in config file.",
        )));

        let text = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        assert_eq!(
            text,
            "Error tsconfig.json (3,1): '}' expected.\nError: No inputs were found in config file.\n"
        );
    }

    #[test]
    fn progress_events_do_not_write() {
        let buffer = SharedBuffer::default();
        let sink = ConsoleEventSink::with_writer(buffer.clone());

        sink.on_event(BuildEvent::OutputReset {
            dir: PathBuf::from("build"),
        });
        sink.on_event(BuildEvent::Completed {
            bundle_count: 3,
            asset_count: 5,
            archive: None,
        });

        assert!(buffer.0.lock().unwrap().is_empty());
    }
}
