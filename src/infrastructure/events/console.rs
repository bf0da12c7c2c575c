//! Console Event Sink
//!
//! Human-readable build progress for the terminal.

use std::io::{self, Write};
use std::sync::Mutex;

use crossterm::style::{Color, Stylize};

use crate::config::Verbosity;
use crate::domain::ports::{BuildEvent, BuildEventSink};

const SUCCESS: Color = Color::Green;
const ERROR: Color = Color::Red;
const WARNING: Color = Color::Yellow;
const INFO: Color = Color::Cyan;
const DIM: Color = Color::DarkGrey;

/// Event sink that prints progress lines
pub struct ConsoleEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    verbosity: Verbosity,
    color: bool,
    unicode: bool,
}

impl ConsoleEventSink {
    /// Print to stdout
    pub fn stdout(verbosity: Verbosity, color: bool, unicode: bool) -> Self {
        Self::with_writer(io::stdout(), verbosity, color, unicode)
    }

    pub fn with_writer<W: Write + Send + 'static>(
        writer: W,
        verbosity: Verbosity,
        color: bool,
        unicode: bool,
    ) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            verbosity,
            color,
            unicode,
        }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            format!("{}", text.with(color))
        } else {
            text.to_string()
        }
    }

    fn icon(&self, unicode: &'static str, ascii: &'static str) -> &'static str {
        if self.unicode {
            unicode
        } else {
            ascii
        }
    }

    fn line(&self, text: String) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", text);
            let _ = writer.flush();
        }
    }

    fn render(&self, event: &BuildEvent) -> Option<String> {
        match event {
            BuildEvent::Started {
                out_dir,
                source_count,
                ..
            } => Some(format!(
                "{} Building {} sources into {}",
                self.paint(self.icon("●", "[..]"), INFO),
                source_count,
                out_dir.display()
            )),

            BuildEvent::Emitted {
                file, role, size, ..
            } => {
                if self.verbosity < Verbosity::Verbose {
                    return None;
                }
                Some(format!(
                    "  {} {:<40} {}",
                    self.paint(self.icon("↳", "[>]"), DIM),
                    file,
                    self.paint(&format!("{} {}", format_kb(*size), role), DIM)
                ))
            }

            BuildEvent::ChunkSizeWarning {
                file,
                size_kb,
                limit_kb,
            } => Some(format!(
                "{} {} is {:.2} kB (limit {} kB)",
                self.paint(self.icon("⚠", "[WARN]"), WARNING),
                file,
                size_kb,
                limit_kb
            )),

            BuildEvent::HtmlRewritten { file, replaced } => {
                if self.verbosity < Verbosity::Verbose {
                    return None;
                }
                Some(format!(
                    "  {} {} ({} references)",
                    self.paint(self.icon("↳", "[>]"), DIM),
                    file,
                    replaced
                ))
            }

            BuildEvent::Completed {
                entry,
                file_count,
                total_size,
                warning_count,
            } => {
                let (icon, color) = if *warning_count == 0 {
                    (self.icon("✓", "[OK]"), SUCCESS)
                } else {
                    (self.icon("⚠", "[WARN]"), WARNING)
                };
                Some(format!(
                    "{} Built {} files ({}), entry {}",
                    self.paint(icon, color),
                    file_count,
                    format_kb(*total_size),
                    entry
                ))
            }

            BuildEvent::WatchStarted { url, watched } => {
                let dirs = watched
                    .iter()
                    .map(|p| p.display().to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                Some(format!(
                    "{} Watching {} for {}",
                    self.paint(self.icon("⟳", "[~]"), INFO),
                    dirs,
                    url
                ))
            }

            BuildEvent::Rebuilding { changed } => Some(format!(
                "{} {} changed, rebuilding",
                self.paint(self.icon("⟳", "[~]"), INFO),
                changed.len()
            )),

            BuildEvent::RebuildFailed { error } => Some(format!(
                "{} {}",
                self.paint(self.icon("✗", "[FAIL]"), ERROR),
                error
            )),

            BuildEvent::Shutdown => Some("Stopped.".to_string()),
        }
    }
}

/// Bytes as kB with two decimals, 1 kB = 1000 bytes
pub fn format_kb(bytes: usize) -> String {
    format!("{:.2} kB", bytes as f64 / 1000.0)
}

impl BuildEventSink for ConsoleEventSink {
    fn on_event(&self, event: BuildEvent) {
        if self.verbosity == Verbosity::Quiet
            && !matches!(
                event,
                BuildEvent::ChunkSizeWarning { .. } | BuildEvent::RebuildFailed { .. }
            )
        {
            return;
        }
        if let Some(text) = self.render(&event) {
            self.line(text);
        }
    }

    fn wants_detailed_events(&self) -> bool {
        self.verbosity >= Verbosity::Verbose
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::ArtifactRole;
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

    impl SharedBuffer {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn emitted() -> BuildEvent {
        BuildEvent::Emitted {
            file: "js/app-12345678.js".to_string(),
            role: ArtifactRole::Entry,
            group: None,
            size: 2048,
        }
    }

    #[test]
    fn format_kb_uses_decimal_units() {
        assert_eq!(format_kb(1_000), "1.00 kB");
        assert_eq!(format_kb(1_500_000), "1500.00 kB");
    }

    #[test]
    fn normal_verbosity_hides_per_file_lines() {
        let buffer = SharedBuffer::default();
        let sink = ConsoleEventSink::with_writer(buffer.clone(), Verbosity::Normal, false, false);

        sink.on_event(emitted());

        assert!(buffer.text().is_empty());
        assert!(!sink.wants_detailed_events());
    }

    #[test]
    fn verbose_shows_per_file_lines() {
        let buffer = SharedBuffer::default();
        let sink = ConsoleEventSink::with_writer(buffer.clone(), Verbosity::Verbose, false, false);

        sink.on_event(emitted());

        let text = buffer.text();
        assert!(text.contains("[>] js/app-12345678.js"));
        assert!(text.contains("2.05 kB entry"));
    }

    #[test]
    fn quiet_still_prints_size_warnings() {
        let buffer = SharedBuffer::default();
        let sink = ConsoleEventSink::with_writer(buffer.clone(), Verbosity::Quiet, false, true);

        sink.on_event(BuildEvent::Completed {
            entry: "js/app-12345678.js".to_string(),
            file_count: 1,
            total_size: 10,
            warning_count: 1,
        });
        sink.on_event(BuildEvent::ChunkSizeWarning {
            file: "js/vendor-abcdef01.js".to_string(),
            size_kb: 1500.0,
            limit_kb: 1000,
        });

        assert_eq!(
            buffer.text(),
            "⚠ js/vendor-abcdef01.js is 1500.00 kB (limit 1000 kB)\n"
        );
    }
}
