//! Log processing for logtally
//!
//! This crate turns a log file into [`LogRecord`]s, tallies them per
//! [`LogLevel`] and selects the records of a single level.
//!
//! ```text
//! LogIngestor ──► count_by_level ──► (optional) LevelFilter
//! ```

mod counts;
mod filter;
mod ingest;
mod parser;

pub use counts::{LevelCounts, count_by_level};
pub use filter::{LevelFilter, filter_by_level};
pub use ingest::{IngestReport, LoadError, LogIngestor, Rejection, load_logs};
pub use parser::{LogParser, ParseError};

// Re-export types used in our public API
pub use logtally_types::{LogLevel, LogRecord, TIMESTAMP_FORMAT, UnknownLevel};
