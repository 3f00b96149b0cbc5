use chrono::{NaiveDateTime, Timelike};

use logtally_types::{LogLevel, LogRecord, TIMESTAMP_FORMAT, UnknownLevel};

/// Minimum token count: date, time, level and one message word
const MIN_TOKENS: usize = 4;

/// Why a line did not become a [`LogRecord`]
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("malformed log line: {line}")]
    MalformedLine { line: String },

    #[error("malformed log date: {datetime}")]
    MalformedDate { datetime: String },

    #[error(transparent)]
    UnknownLevel(#[from] UnknownLevel),
}

/// Log parser for turning `DATE TIME LEVEL message...` lines into records
pub struct LogParser;

impl LogParser {
    /// Parse one raw line, with or without its line terminator
    pub fn parse(raw: &str) -> Result<LogRecord, ParseError> {
        let line = Self::strip_terminator(raw);
        let tokens: Vec<&str> = line.split_whitespace().collect();

        if tokens.len() < MIN_TOKENS {
            return Err(ParseError::MalformedLine {
                line: line.to_string(),
            });
        }

        let datetime = format!("{} {}", tokens[0], tokens[1]);
        let timestamp = match NaiveDateTime::parse_from_str(&datetime, TIMESTAMP_FORMAT) {
            // chrono reads `:60` as a leap second; seconds stop at 59 here
            Ok(ts) if ts.nanosecond() < 1_000_000_000 => ts,
            _ => return Err(ParseError::MalformedDate { datetime }),
        };

        let level: LogLevel = tokens[2].parse()?;

        let message = tokens[MIN_TOKENS - 1..].join(" ");

        Ok(LogRecord::new(timestamp, level, message))
    }

    /// Drop a single trailing `\n` or `\r\n`
    fn strip_terminator(raw: &str) -> &str {
        let line = raw.strip_suffix('\n').unwrap_or(raw);
        line.strip_suffix('\r').unwrap_or(line)
    }
}
