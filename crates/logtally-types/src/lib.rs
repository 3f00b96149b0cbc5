//! Shared types for logtally
//!
//! This crate contains the log record model used by the parser, the
//! aggregator, the filter and the terminal renderer.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;

/// Date-time layout of the first two fields of every log line.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ============================================================================
// Log Types
// ============================================================================

/// Log severity level
///
/// The set is closed: a line whose level token is not one of these is never
/// turned into a [`LogRecord`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    Info,
    Debug,
    Error,
    Warning,
}

impl LogLevel {
    /// Every known level, in table order
    pub const ALL: [LogLevel; 4] = [Self::Info, Self::Debug, Self::Error, Self::Warning];

    /// Canonical upper-case token, as it appears in log files
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
            Self::Error => "ERROR",
            Self::Warning => "WARNING",
        }
    }

    /// Position of this level within [`LogLevel::ALL`]
    pub fn index(&self) -> usize {
        match self {
            Self::Info => 0,
            Self::Debug => 1,
            Self::Error => 2,
            Self::Warning => 3,
        }
    }

    /// Parse a level typed by a user, ignoring case.
    ///
    /// Log files are matched case-sensitively through [`FromStr`]; requests
    /// from the command line are upper-cased first.
    pub fn from_request(requested: &str) -> Result<Self, UnknownLevel> {
        requested
            .to_uppercase()
            .parse()
            .map_err(|_| UnknownLevel(requested.to_string()))
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = UnknownLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INFO" => Ok(Self::Info),
            "DEBUG" => Ok(Self::Debug),
            "ERROR" => Ok(Self::Error),
            "WARNING" => Ok(Self::Warning),
            other => Err(UnknownLevel(other.to_string())),
        }
    }
}

/// A level token outside the known set
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown log level: {0}")]
pub struct UnknownLevel(pub String);

/// A single parsed log line
///
/// Records are only built by the line parser and cannot be changed afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogRecord {
    timestamp: NaiveDateTime,
    level: LogLevel,
    message: String,
}

impl LogRecord {
    pub fn new(timestamp: NaiveDateTime, level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            timestamp,
            level,
            message: message.into(),
        }
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Timestamp rendered with [`TIMESTAMP_FORMAT`]
    pub fn formatted_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.level,
            self.message
        )
    }
}
