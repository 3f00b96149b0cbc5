use logtally_types::{LogLevel, LogRecord};

/// Selects records of one level
///
/// The requested level is upper-cased but not validated: a level outside the
/// known set matches nothing. Callers that need to reject unknown levels use
/// [`LogLevel::from_request`] first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelFilter {
    level: String,
}

impl LevelFilter {
    /// Create a filter from a level as typed by the user
    pub fn new(requested: &str) -> Self {
        Self {
            level: requested.to_uppercase(),
        }
    }

    /// The normalized level this filter selects
    pub fn level(&self) -> &str {
        &self.level
    }

    /// Check if a record matches this filter
    pub fn matches(&self, record: &LogRecord) -> bool {
        record.level().as_str() == self.level
    }

    /// Lazily yield the matching records, in input order
    pub fn apply<'a>(&'a self, records: &'a [LogRecord]) -> impl Iterator<Item = &'a LogRecord> {
        records.iter().filter(move |record| self.matches(record))
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        Self {
            level: level.as_str().to_string(),
        }
    }
}

/// Records whose level equals the upper-cased `level`
pub fn filter_by_level<'a>(
    records: &'a [LogRecord],
    level: &str,
) -> impl Iterator<Item = &'a LogRecord> + use<'a> {
    let filter = LevelFilter::new(level);
    records.iter().filter(move |record| filter.matches(record))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use logtally_types::TIMESTAMP_FORMAT;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn records() -> Vec<LogRecord> {
        [
            ("2024-01-01 10:00:00", LogLevel::Info, "server started"),
            ("2024-01-01 10:00:05", LogLevel::Error, "disk failure detected"),
            ("2024-01-01 10:00:07", LogLevel::Debug, "retrying"),
            ("2024-01-01 10:00:09", LogLevel::Error, "disk gone"),
        ]
        .into_iter()
        .map(|(ts, level, msg)| {
            let ts = NaiveDateTime::parse_from_str(ts, TIMESTAMP_FORMAT).unwrap();
            LogRecord::new(ts, level, msg)
        })
        .collect()
    }

    #[rstest]
    #[case("ERROR")]
    #[case("error")]
    #[case("Error")]
    fn test_filter_is_case_normalized(#[case] requested: &str) {
        let records = records();
        let messages: Vec<_> = filter_by_level(&records, requested)
            .map(|r| r.message())
            .collect();
        assert_eq!(messages, ["disk failure detected", "disk gone"]);
    }

    #[test]
    fn test_unknown_level_matches_nothing() {
        let records = records();
        assert_eq!(filter_by_level(&records, "fatal").count(), 0);
    }

    #[test]
    fn test_level_with_no_records_is_empty() {
        let records = records();
        let filter = LevelFilter::from(LogLevel::Warning);
        assert_eq!(filter.apply(&records).count(), 0);
    }

    #[test]
    fn test_apply_preserves_subsequence() {
        let records = records();
        let filter = LevelFilter::new("debug");
        assert_eq!(filter.level(), "DEBUG");

        let picked: Vec<&LogRecord> = filter.apply(&records).collect();
        assert_eq!(picked, vec![&records[2]]);
    }
}
