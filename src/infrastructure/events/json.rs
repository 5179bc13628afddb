//! JSON Event Sink
//!
//! Outputs build events as NDJSON for CI/automation consumption.

use crate::domain::entities::Diagnostic;
use crate::domain::ports::{BuildEvent, BuildEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Command name stamped on every event (`build`, `check`, `clean`)
    command: &'static str,
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout(command: &'static str) -> Self {
        Self {
            command,
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(command: &'static str, writer: W) -> Self {
        Self {
            command,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, mut event: serde_json::Value) {
        if let Some(object) = event.as_object_mut() {
            object.insert("command".to_string(), self.command.into());
        }
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

fn diagnostic_json(diagnostic: &Diagnostic) -> serde_json::Value {
    serde_json::json!({
        "event": "diagnostic",
        "file": diagnostic.file.as_ref().map(|f| f.display().to_string()),
        "line": diagnostic.position.map(|p| p.line),
        "column": diagnostic.position.map(|p| p.column),
        "category": diagnostic.category.as_str(),
        "code": diagnostic.code,
        "message": diagnostic.message,
        "text": diagnostic.to_string(),
    })
}

impl BuildEventSink for JsonEventSink {
    fn on_event(&self, event: BuildEvent) {
        let json = match event {
            BuildEvent::Started {
                project_root,
                config_path,
            } => serde_json::json!({
                "event": "start",
                "project_root": project_root.display().to_string(),
                "config": config_path.display().to_string(),
            }),

            BuildEvent::ProjectResolved {
                config_path,
                source_count,
            } => serde_json::json!({
                "event": "project_resolved",
                "config": config_path.display().to_string(),
                "source_count": source_count,
            }),

            BuildEvent::Diagnostic(diagnostic) => diagnostic_json(&diagnostic),

            BuildEvent::Compiled { out_dir } => serde_json::json!({
                "event": "compiled",
                "out_dir": out_dir.display().to_string(),
            }),

            BuildEvent::OutputReset { dir } => serde_json::json!({
                "event": "output_reset",
                "dir": dir.display().to_string(),
            }),

            BuildEvent::Bundled {
                index,
                entry,
                output,
            } => serde_json::json!({
                "event": "bundled",
                "index": index,
                "entry": entry,
                "output": output.display().to_string(),
            }),

            BuildEvent::AssetCopied {
                source,
                destination,
            } => serde_json::json!({
                "event": "asset_copied",
                "source": source.display().to_string(),
                "destination": destination.display().to_string(),
            }),

            BuildEvent::Archived {
                path,
                entry_count,
                digest,
            } => serde_json::json!({
                "event": "archived",
                "path": path.display().to_string(),
                "entry_count": entry_count,
                "digest": digest.as_str(),
            }),

            BuildEvent::Removed { path, existed } => serde_json::json!({
                "event": "removed",
                "path": path.display().to_string(),
                "existed": existed,
            }),

            BuildEvent::Completed {
                bundle_count,
                asset_count,
                archive,
            } => serde_json::json!({
                "event": "complete",
                "status": "success",
                "bundle_count": bundle_count,
                "asset_count": asset_count,
                "archive": archive.map(|p| p.display().to_string()),
            }),

            BuildEvent::Failed { error } => serde_json::json!({
                "event": "complete",
                "status": "error",
                "error": error,
            }),
        };

        self.write_event(json);
    }
}
