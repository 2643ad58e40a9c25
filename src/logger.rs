use crate::colors::{Background, Foreground, RESET};
use crate::error::LoggerError;
use crate::sink::{LogSink, Sink};
use log::Level;
use std::sync::atomic::{AtomicBool, Ordering};

/// Logger that wraps messages in ANSI escape sequences before handing
/// them to its sink.
///
/// Output is gated by a single enabled flag; there is no per-call
/// severity filtering and every line goes out at `Level::Info`.
pub struct ColorfulLogger {
    name: String,
    enabled: AtomicBool,
    sink: Box<dyn Sink>,
}

impl ColorfulLogger {
    /// Create a logger that writes through the `log` facade with `name` as target
    pub fn new(name: &str, enabled: bool) -> Result<Self, LoggerError> {
        Self::with_sink(name, enabled, Box::new(LogSink::new(name.trim())))
    }

    pub fn with_sink(name: &str, enabled: bool, sink: Box<dyn Sink>) -> Result<Self, LoggerError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LoggerError::PreconditionViolation {
                param: "name",
                method: "ColorfulLogger::new",
            });
        }

        Ok(ColorfulLogger {
            name: name.to_string(),
            enabled: AtomicBool::new(enabled),
            sink,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_enabled(&self) -> bool {
        // Stale reads are acceptable, the flag is a best-effort toggle
        self.enabled.load(Ordering::Relaxed)
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    /// Build a colorized line: foreground, then background, then the
    /// message, always terminated by the reset sequence.
    pub fn compose(message: &str, foreground: Foreground, background: Option<Background>) -> String {
        let bg = background.map_or("", Background::code);
        let mut line =
            String::with_capacity(foreground.code().len() + bg.len() + message.len() + RESET.len());
        line.push_str(foreground.code());
        line.push_str(bg);
        line.push_str(message);
        line.push_str(RESET);
        line
    }

    /// Emit `message` verbatim, without escape codes
    pub fn emit(&self, message: &str) {
        if self.is_enabled() {
            self.sink.write_line(message, Level::Info);
        }
    }

    /// Emit `message` in the given foreground color
    pub fn emit_colored(&self, message: &str, foreground: Foreground) {
        if self.is_enabled() {
            let line = Self::compose(message, foreground, None);
            self.sink.write_line(&line, Level::Info);
        }
    }

    /// Emit `message` with both foreground and background colors
    pub fn emit_styled(&self, message: &str, foreground: Foreground, background: Background) {
        if self.is_enabled() {
            let line = Self::compose(message, foreground, Some(background));
            self.sink.write_line(&line, Level::Info);
        }
    }
}

impl std::fmt::Debug for ColorfulLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColorfulLogger")
            .field("name", &self.name)
            .field("enabled", &self.is_enabled())
            .finish_non_exhaustive()
    }
}
