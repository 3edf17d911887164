//! Structured logging to the browser console.
//!
//! Events from the guard and the DOM binding are formatted by
//! `tracing-subscriber` and written through `console.{debug,info,warn,error}`.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wasm_bindgen::JsValue;

/// Install the console subscriber.
///
/// Safe to call more than once; only the first call installs anything.
pub fn init_logging() {
    let filter = Targets::new()
        .with_target("domain", LevelFilter::DEBUG)
        .with_target("analyser_guard", LevelFilter::DEBUG)
        .with_default(LevelFilter::WARN);

    let layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeConsoleWriter);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init();
}

/// Hands out one [`ConsoleWriter`] per event.
pub struct MakeConsoleWriter;

impl<'a> MakeWriter<'a> for MakeConsoleWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Buffers one formatted event and emits it to the console on drop.
pub struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    pub fn new(level: Level) -> Self {
        Self {
            level,
            buf: Vec::new(),
        }
    }

    /// Drain the buffered line without its trailing newline.
    pub fn take_line(&mut self) -> String {
        let line = String::from_utf8_lossy(&self.buf).trim_end().to_string();
        self.buf.clear();
        line
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if self.buf.is_empty() {
            return;
        }
        let line = JsValue::from_str(&self.take_line());
        match self.level {
            Level::ERROR => web_sys::console::error_1(&line),
            Level::WARN => web_sys::console::warn_1(&line),
            Level::INFO => web_sys::console::info_1(&line),
            _ => web_sys::console::debug_1(&line),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_writer_buffers_whole_event() {
        let mut writer = ConsoleWriter::new(Level::WARN);
        write!(writer, "WARN analyser_guard::dom: ").unwrap();
        writeln!(writer, "window.alert failed").unwrap();

        assert_eq!(writer.take_line(), "WARN analyser_guard::dom: window.alert failed");
        // Drained: dropping emits nothing
        assert!(writer.buf.is_empty());
    }

    #[test]
    fn test_writer_level_follows_metadata_default() {
        let mut writer = MakeConsoleWriter.make_writer();
        assert_eq!(writer.level, Level::INFO);
        assert_eq!(writer.take_line(), "");
    }
}
