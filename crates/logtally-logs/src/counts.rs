use logtally_types::{LogLevel, LogRecord};

/// Counts per log level
///
/// Every known level is always present, starting at zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LevelCounts {
    counts: [usize; LogLevel::ALL.len()],
}

impl LevelCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one record of the given level
    pub fn record(&mut self, level: LogLevel) {
        self.counts[level.index()] += 1;
    }

    pub fn get(&self, level: LogLevel) -> usize {
        self.counts[level.index()]
    }

    /// `(level, count)` pairs in [`LogLevel::ALL`] order
    pub fn iter(&self) -> impl Iterator<Item = (LogLevel, usize)> + '_ {
        LogLevel::ALL.iter().map(|level| (*level, self.get(*level)))
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

impl<'a> FromIterator<&'a LogRecord> for LevelCounts {
    fn from_iter<I: IntoIterator<Item = &'a LogRecord>>(records: I) -> Self {
        let mut counts = Self::new();
        for record in records {
            counts.record(record.level());
        }
        counts
    }
}

/// Get entry count per log level
pub fn count_by_level(records: &[LogRecord]) -> LevelCounts {
    let counts: LevelCounts = records.iter().collect();
    tracing::debug!(total = counts.total(), "counted records by level");
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use logtally_types::TIMESTAMP_FORMAT;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn record(level: LogLevel) -> LogRecord {
        let ts = NaiveDateTime::parse_from_str("2024-01-01 10:00:00", TIMESTAMP_FORMAT).unwrap();
        LogRecord::new(ts, level, "message")
    }

    #[test]
    fn test_empty_input_has_every_level_at_zero() {
        let counts = count_by_level(&[]);
        let pairs: Vec<_> = counts.iter().collect();
        assert_eq!(
            pairs,
            vec![
                (LogLevel::Info, 0),
                (LogLevel::Debug, 0),
                (LogLevel::Error, 0),
                (LogLevel::Warning, 0),
            ]
        );
        assert_eq!(counts.total(), 0);
    }

    #[test]
    fn test_counts_each_level() {
        let records = vec![
            record(LogLevel::Info),
            record(LogLevel::Error),
            record(LogLevel::Info),
            record(LogLevel::Warning),
        ];
        let counts = count_by_level(&records);
        assert_eq!(counts.get(LogLevel::Info), 2);
        assert_eq!(counts.get(LogLevel::Debug), 0);
        assert_eq!(counts.get(LogLevel::Error), 1);
        assert_eq!(counts.get(LogLevel::Warning), 1);
    }

    #[test]
    fn test_collect_from_filtered_iterator() {
        let records = [record(LogLevel::Debug), record(LogLevel::Error)];
        let counts: LevelCounts = records
            .iter()
            .filter(|r| r.level() == LogLevel::Debug)
            .collect();
        assert_eq!(counts.total(), 1);
        assert_eq!(counts.get(LogLevel::Debug), 1);
    }

    proptest! {
        #[test]
        fn prop_total_equals_record_count(
            levels in proptest::collection::vec(proptest::sample::select(LogLevel::ALL.to_vec()), 0..200)
        ) {
            let records: Vec<_> = levels.iter().copied().map(record).collect();
            let counts = count_by_level(&records);

            prop_assert_eq!(counts.total(), records.len());
            prop_assert_eq!(counts.iter().count(), LogLevel::ALL.len());
            for level in LogLevel::ALL {
                let expected = levels.iter().filter(|l| **l == level).count();
                prop_assert_eq!(counts.get(level), expected);
            }
        }
    }
}
