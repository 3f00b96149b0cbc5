//! Plain-text rendering of level counts and records.
//!
//! The count table uses the org-mode layout:
//!
//! ```text
//! | Log level   |   Count |
//! |-------------+---------|
//! | INFO        |       1 |
//! ```
//!
//! Column widths are measured on the unstyled text, so ANSI color codes
//! around level names never shift the columns.

use unicode_width::UnicodeWidthStr;

use logtally_logs::LevelCounts;
use logtally_types::LogRecord;

use crate::theme::Theme;

/// Extra room every header gets beyond its own width
const HEADER_PADDING: usize = 2;

/// Level count table
pub struct CountTable<'a> {
    theme: &'a Theme,
    level_header: &'a str,
    count_header: &'a str,
}

impl<'a> CountTable<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self {
            theme,
            level_header: "Log level",
            count_header: "Count",
        }
    }

    pub fn with_headers(mut self, level_header: &'a str, count_header: &'a str) -> Self {
        self.level_header = level_header;
        self.count_header = count_header;
        self
    }

    /// Render one row per known level, in table order. No trailing newline.
    pub fn render(&self, counts: &LevelCounts) -> String {
        let rows: Vec<_> = counts
            .iter()
            .map(|(level, count)| (level, count.to_string()))
            .collect();

        let level_width = rows
            .iter()
            .map(|(level, _)| level.as_str().width())
            .fold(self.level_header.width() + HEADER_PADDING, usize::max);
        let count_width = rows
            .iter()
            .map(|(_, count)| count.width())
            .fold(self.count_header.width() + HEADER_PADDING, usize::max);

        let mut lines = Vec::with_capacity(rows.len() + 2);
        lines.push(format!(
            "| {} | {} |",
            pad_right(self.level_header, level_width),
            pad_left(self.count_header, count_width)
        ));
        lines.push(format!(
            "|{}+{}|",
            "-".repeat(level_width + 2),
            "-".repeat(count_width + 2)
        ));

        for (level, count) in &rows {
            let fill = level_width - level.as_str().width();
            lines.push(format!(
                "| {}{} | {} |",
                self.theme.paint_level(*level),
                " ".repeat(fill),
                pad_left(count, count_width)
            ));
        }

        lines.join("\n")
    }
}

/// `TIMESTAMP LEVEL MESSAGE`, with the level colored by `theme`
pub fn render_record(record: &LogRecord, theme: &Theme) -> String {
    format!(
        "{} {} {}",
        record.formatted_timestamp(),
        theme.paint_level(record.level()),
        record.message()
    )
}

fn pad_right(s: &str, width: usize) -> String {
    format!("{s}{}", " ".repeat(width.saturating_sub(s.width())))
}

fn pad_left(s: &str, width: usize) -> String {
    format!("{}{s}", " ".repeat(width.saturating_sub(s.width())))
}
