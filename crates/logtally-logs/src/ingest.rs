use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use logtally_types::LogRecord;

use crate::parser::{LogParser, ParseError};

/// Why a log source could not be read
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot open log file {}: check the path", path.display())]
    NotFound { path: PathBuf },

    #[error("cannot load log file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A line that was dropped during ingestion
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rejection {
    /// 1-based line number within the source
    pub line_number: usize,
    pub error: ParseError,
}

/// Outcome of one ingestion run
#[derive(Debug, Default)]
pub struct IngestReport {
    /// Accepted records, in input order
    pub records: Vec<LogRecord>,

    /// Dropped lines, in input order
    pub rejected: Vec<Rejection>,

    /// Set when the source could not be opened or read to the end
    pub failure: Option<LoadError>,

    /// Number of lines read before the run finished
    pub lines_read: usize,
}

impl IngestReport {
    /// True when no record was accepted
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_records(self) -> Vec<LogRecord> {
        self.records
    }
}

/// Reads a log file line by line into records
///
/// Every problem is reported through `tracing` and recovered locally: the
/// ingestor never fails, it hands back a possibly empty [`IngestReport`].
pub struct LogIngestor {
    path: PathBuf,
}

impl LogIngestor {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open the file and ingest it. The handle is dropped before returning.
    pub fn ingest(&self) -> IngestReport {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) => {
                let failure = if err.kind() == io::ErrorKind::NotFound {
                    LoadError::NotFound {
                        path: self.path.clone(),
                    }
                } else {
                    LoadError::Io {
                        path: self.path.clone(),
                        source: err,
                    }
                };
                return self.finish(IngestReport {
                    failure: Some(failure),
                    ..IngestReport::default()
                });
            }
        };

        self.ingest_reader(BufReader::new(file))
    }

    /// Ingest any buffered reader, labelling diagnostics with this ingestor's path
    pub fn ingest_reader<R: BufRead>(&self, mut reader: R) -> IngestReport {
        let mut report = IngestReport::default();
        let mut line = String::new();

        loop {
            line.clear();
            match reader.read_line(&mut line) {
                Ok(0) => break,
                Ok(_) => {
                    report.lines_read += 1;
                    match LogParser::parse(&line) {
                        Ok(record) => report.records.push(record),
                        Err(error) => {
                            tracing::warn!("line {}: {}", report.lines_read, error);
                            report.rejected.push(Rejection {
                                line_number: report.lines_read,
                                error,
                            });
                        }
                    }
                }
                Err(source) => {
                    // A source that fails mid-read yields nothing
                    report.records.clear();
                    report.failure = Some(LoadError::Io {
                        path: self.path.clone(),
                        source,
                    });
                    break;
                }
            }
        }

        tracing::debug!(
            path = %self.path.display(),
            lines = report.lines_read,
            accepted = report.records.len(),
            rejected = report.rejected.len(),
            "ingestion finished"
        );

        self.finish(report)
    }

    fn finish(&self, report: IngestReport) -> IngestReport {
        if let Some(failure) = &report.failure {
            tracing::warn!("{}", failure);
        }
        if report.records.is_empty() {
            tracing::warn!("no log records found in {}", self.path.display());
        }
        report
    }
}

/// Load every valid record from the file at `path`
pub fn load_logs(path: impl AsRef<Path>) -> Vec<LogRecord> {
    LogIngestor::new(path.as_ref()).ingest().into_records()
}
