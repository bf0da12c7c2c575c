//! JSON Event Sink
//!
//! Outputs build events as NDJSON for CI/automation consumption.

use crate::domain::ports::{BuildEvent, BuildEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
    command: &'static str,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout(command: &'static str) -> Self {
        Self::with_writer(command, io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(command: &'static str, writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            command,
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

/// JSON object for one event, without the `command` field
pub fn event_to_json(event: &BuildEvent) -> serde_json::Value {
    match event {
        BuildEvent::Started {
            root,
            out_dir,
            source_count,
        } => serde_json::json!({
            "event": "start",
            "root": root.display().to_string(),
            "out_dir": out_dir.display().to_string(),
            "source_count": source_count,
        }),

        BuildEvent::Emitted {
            file,
            role,
            group,
            size,
        } => serde_json::json!({
            "event": "emitted",
            "file": file,
            "role": role.as_str(),
            "group": group,
            "size": size,
        }),

        BuildEvent::ChunkSizeWarning {
            file,
            size_kb,
            limit_kb,
        } => serde_json::json!({
            "event": "chunk_size_warning",
            "file": file,
            "size_kb": size_kb,
            "limit_kb": limit_kb,
        }),

        BuildEvent::HtmlRewritten { file, replaced } => serde_json::json!({
            "event": "html_rewritten",
            "file": file,
            "replaced": replaced,
        }),

        BuildEvent::Completed {
            entry,
            file_count,
            total_size,
            warning_count,
        } => {
            let status = if *warning_count == 0 {
                "success"
            } else {
                "warnings"
            };
            serde_json::json!({
                "event": "complete",
                "status": status,
                "entry": entry,
                "files": file_count,
                "total_size": total_size,
                "warnings": warning_count,
            })
        }

        BuildEvent::WatchStarted { url, watched } => serde_json::json!({
            "event": "watch_started",
            "url": url,
            "watched": watched
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>(),
        }),

        BuildEvent::Rebuilding { changed } => serde_json::json!({
            "event": "rebuilding",
            "changed": changed
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>(),
        }),

        BuildEvent::RebuildFailed { error } => serde_json::json!({
            "event": "rebuild_failed",
            "error": error,
        }),

        BuildEvent::Shutdown => serde_json::json!({ "event": "shutdown" }),
    }
}

impl BuildEventSink for JsonEventSink {
    fn on_event(&self, event: BuildEvent) {
        let mut json = event_to_json(&event);
        if let Some(obj) = json.as_object_mut() {
            obj.insert("command".to_string(), self.command.into());
        }
        self.write_event(json);
    }
}
