//! Rolling Logger
//!
//! `log` backend that keeps the newest lines in a circular buffer and
//! forwards every line to a sink (the browser console in the app).

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{SecondsFormat, Utc};
use log::{Level, LevelFilter, Log, Metadata, Record};
use thiserror::Error;

/// Default number of lines kept in memory
pub const DEFAULT_CAPACITY: usize = 500;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("a global logger is already installed")]
    AlreadyInstalled(#[from] log::SetLoggerError),
}

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Lines kept before the oldest is dropped
    pub capacity: usize,
    pub level: LevelFilter,
    /// Prefix shown on every line
    pub app_name: String,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            level: LevelFilter::Info,
            app_name: String::from("app"),
        }
    }
}

impl LoggerConfig {
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            ..Default::default()
        }
    }

    pub fn with_level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}

/// One formatted log line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub level: Level,
    pub text: String,
}

/// Where formatted lines go besides the buffer
pub type Sink = Box<dyn Fn(&LogLine) + Send + Sync>;

/// Circular buffer of the newest lines. Clones share storage.
#[derive(Debug, Clone)]
pub struct LogBuffer {
    lines: Arc<Mutex<VecDeque<LogLine>>>,
    capacity: usize,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            lines: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<LogLine>> {
        // A panic while holding the lock only loses a log line
        self.lines.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn push(&self, line: LogLine) {
        let mut lines = self.lock();
        if lines.len() == self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }

    /// Up to `n` newest lines, oldest first
    pub fn recent(&self, n: usize) -> Vec<LogLine> {
        let lines = self.lock();
        let skip = lines.len().saturating_sub(n);
        lines.iter().skip(skip).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }
}

pub struct RollingLogger {
    level: LevelFilter,
    app_name: String,
    buffer: LogBuffer,
    sink: Option<Sink>,
}

impl RollingLogger {
    pub fn new(config: &LoggerConfig, sink: Option<Sink>) -> Self {
        Self {
            level: config.level,
            app_name: config.app_name.clone(),
            buffer: LogBuffer::new(config.capacity),
            sink,
        }
    }

    pub fn buffer(&self) -> LogBuffer {
        self.buffer.clone()
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = LogLine {
            level: record.level(),
            text: format_line(&self.app_name, record.level(), record.target(), &record.args().to_string()),
        };
        if let Some(sink) = &self.sink {
            sink(&line);
        }
        self.buffer.push(line);
    }

    fn flush(&self) {}
}

/// `2024-03-01T10:00:00.000Z INFO  [app] target: message`
pub fn format_line(app_name: &str, level: Level, target: &str, message: &str) -> String {
    format!(
        "{} {:<5} [{}] {}: {}",
        Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        level,
        app_name,
        target,
        message
    )
}

/// Install the global logger. Returns the buffer handle so the app can
/// show recent lines.
pub fn init_logger(config: LoggerConfig, sink: Option<Sink>) -> Result<LogBuffer, LoggerError> {
    let logger = RollingLogger::new(&config, sink);
    let buffer = logger.buffer();
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(config.level);
    Ok(buffer)
}
