//! Structured JSON logging for the handler path.
//!
//! One JSON object per line on stderr, so a log collector can ingest
//! invocation records without parsing free-form text.  The benchmark itself
//! never logs on the hot path; only the bootstrap loop records invocations.

use serde::Serialize;
use std::fmt;
use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

/// Log severity, ordered from most to least verbose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Debug => write!(f, "DEBUG"),
            Self::Info => write!(f, "INFO"),
            Self::Warn => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

#[derive(Serialize)]
struct LogRecord<'a> {
    level: LogLevel,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    request_id: Option<&'a str>,
    timestamp_ms: u128,
}

/// Minimal structured logger.
///
/// Records below `min_level` are dropped.  Serialization failures are
/// swallowed: logging must never take down an invocation.
#[derive(Debug, Clone)]
pub struct Logger {
    min_level: LogLevel,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Info)
    }
}

impl Logger {
    /// Create a logger that emits records at `min_level` and above.
    pub fn new(min_level: LogLevel) -> Self {
        Logger { min_level }
    }

    /// Log `message` at `level`, tagged with `request_id` when present.
    pub fn log(&self, level: LogLevel, message: &str, request_id: Option<&str>) {
        if level < self.min_level {
            return;
        }
        let record = LogRecord {
            level,
            message,
            request_id,
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or(0),
        };
        if let Ok(line) = serde_json::to_string(&record) {
            let mut stderr = io::stderr().lock();
            let _ = writeln!(stderr, "{line}");
        }
    }

    /// Log at info level.
    pub fn info(&self, message: &str, request_id: Option<&str>) {
        self.log(LogLevel::Info, message, request_id);
    }

    /// Log at error level.
    pub fn error(&self, message: &str, request_id: Option<&str>) {
        self.log(LogLevel::Error, message, request_id);
    }
}
