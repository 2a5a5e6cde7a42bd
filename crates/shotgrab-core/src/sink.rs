//! Run log sinks.
//!
//! The pipeline reports every skip, failure and save through a [`LogSink`] so the
//! front end decides where messages go (terminal, log file, UI panel).

use std::io::Write;
use std::sync::Mutex;

/// Severity of a run message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warn,
    Error,
}

/// Receiver for human-readable run messages.
pub trait LogSink {
    fn emit(&self, level: Level, message: &str);

    fn info(&self, message: &str) {
        self.emit(Level::Info, message);
    }

    fn warn(&self, message: &str) {
        self.emit(Level::Warn, message);
    }

    fn error(&self, message: &str) {
        self.emit(Level::Error, message);
    }
}

impl<T: LogSink + ?Sized> LogSink for &T {
    fn emit(&self, level: Level, message: &str) {
        (**self).emit(level, message);
    }
}

/// Forwards messages to `tracing` events (timestamps come from the subscriber).
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn emit(&self, level: Level, message: &str) {
        match level {
            Level::Info => tracing::info!(target: "shotgrab::run", "{}", message),
            Level::Warn => tracing::warn!(target: "shotgrab::run", "{}", message),
            Level::Error => tracing::error!(target: "shotgrab::run", "{}", message),
        }
    }
}

/// Writes `[HH:MM:SS] message` lines (local time) to any writer.
pub struct ConsoleSink<W: Write> {
    out: Mutex<W>,
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(w) => w,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl ConsoleSink<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

/// `[HH:MM:SS] message`, the line format of the run log.
pub fn format_line(time: chrono::NaiveTime, message: &str) -> String {
    format!("[{}] {}", time.format("%H:%M:%S"), message)
}

impl<W: Write> LogSink for ConsoleSink<W> {
    fn emit(&self, _level: Level, message: &str) {
        let line = format_line(chrono::Local::now().time(), message);
        let mut out = match self.out.lock() {
            Ok(g) => g,
            Err(poisoned) => poisoned.into_inner(),
        };
        // Terminal write errors (closed pipe) must not abort a run.
        let _ = writeln!(out, "{line}");
        let _ = out.flush();
    }
}

/// Sends every message to both sinks.
pub struct TeeSink<A, B> {
    first: A,
    second: B,
}

impl<A: LogSink, B: LogSink> TeeSink<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: LogSink, B: LogSink> LogSink for TeeSink<A, B> {
    fn emit(&self, level: Level, message: &str) {
        self.first.emit(level, message);
        self.second.emit(level, message);
    }
}
