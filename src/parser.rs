//! Talk history parser.
//!
//! [`TalkParser`] turns the raw export into a [`TalkTable`]:
//!
//! 1. [`normalize`](crate::parsing::normalize) the raw text
//! 2. [`split_records`](crate::parsing::split_records) into logical lines
//! 3. walk the lines once, carrying the date of the most recent header and
//!    emitting one [`MessageRecord`] per message line
//!
//! # Example
//!
//! ```rust
//! use talkboard::{MessageType, TalkParser};
//!
//! let export = "[LINE] talk with Bob\n\
//!               2023/01/01(日)\n\
//!               09:00\tAlice\tHello\n\
//!               09:01\tBob\t[スタンプ]\n";
//!
//! let table = TalkParser::new().parse_str(export)?;
//! assert_eq!(table.len(), 2);
//! assert_eq!(table.records()[1].kind(), MessageType::Stamp);
//! # Ok::<(), talkboard::TalkError>(())
//! ```

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::{Captures, Regex};
use tracing::{debug, warn};

use crate::config::ParserConfig;
use crate::core::table::TalkTable;
use crate::error::{Result, TalkError};
use crate::message::MessageRecord;
use crate::parsing::{DATE_HEADER_PATTERN, classify_message, normalize, split_records};

static DATE_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DATE_HEADER_PATTERN).expect("date header pattern is valid"));

/// Parser for tab-delimited talk history exports.
///
/// The parser holds only configuration; every call builds its own
/// accumulator, so one parser can be reused across files.
#[derive(Debug, Clone, Default)]
pub struct TalkParser {
    config: ParserConfig,
}

impl TalkParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses an export file.
    ///
    /// # Errors
    ///
    /// - [`TalkError::Io`] if the file cannot be read
    /// - [`TalkError::Utf8`] if it is not UTF-8
    /// - [`TalkError::InvalidDate`] for a date header with an impossible date
    ///   or with text after the weekday
    pub fn parse(&self, path: &Path) -> Result<TalkTable> {
        let bytes = fs::read(path)?;
        let content = String::from_utf8(bytes).map_err(|source| TalkError::Utf8 {
            path: path.to_path_buf(),
            source,
        })?;
        self.parse_str(&content)
    }

    /// Parses an export file (convenience method accepting &str path).
    pub fn parse_file(&self, path: &str) -> Result<TalkTable> {
        self.parse(Path::new(path))
    }

    /// Parses export content already in memory.
    pub fn parse_str(&self, content: &str) -> Result<TalkTable> {
        let normalized = normalize(content);
        let lines = split_records(&normalized);
        debug!(
            bytes = content.len(),
            lines = lines.len(),
            "normalized talk history"
        );

        let records = self.parse_lines(&lines)?;
        Ok(TalkTable::new(records))
    }

    /// Structures already normalized and split lines.
    ///
    /// Date headers update the current date and emit nothing; every other
    /// line becomes a record stamped with that date. A trailing header is
    /// simply absorbed.
    ///
    /// A header must be the whole line. Wrapped text glued onto a header by
    /// normalization is reported as [`TalkError::InvalidDate`] rather than
    /// dropped.
    pub fn parse_lines<S: AsRef<str>>(&self, lines: &[S]) -> Result<Vec<MessageRecord>> {
        let mut current_date: Option<NaiveDate> = None;
        let mut records = Vec::with_capacity(lines.len());
        let mut undated = 0usize;

        for (idx, line) in lines.iter().enumerate() {
            let line = line.as_ref();

            if let Some(caps) = DATE_HEADER.captures(line) {
                let date = header_date(&caps, line)
                    .ok_or_else(|| TalkError::invalid_date(idx + 1, line))?;
                current_date = Some(date);
                continue;
            }

            if current_date.is_none() {
                undated += 1;
            }
            records.push(self.parse_message_line(line, current_date));
        }

        if undated > 0 {
            warn!(
                count = undated,
                "message lines appear before the first date header; their date is left empty"
            );
        }
        debug!(records = records.len(), "structured talk records");

        Ok(records)
    }

    /// Splits one message line into a record.
    ///
    /// | fields | time | user | message |
    /// |--------|------|------|---------|
    /// | 1 | empty | empty | field 0 |
    /// | 2 | field 0 | empty | field 1 |
    /// | 3+ | field 0 | field 1 | the rest, re-joined |
    ///
    /// The type always comes from the last field.
    fn parse_message_line(&self, line: &str, date: Option<NaiveDate>) -> MessageRecord {
        let delimiter = self.config.delimiter;
        let fields: Vec<&str> = line.split(delimiter).collect();

        let last = fields.last().copied().unwrap_or_default();
        let kind = classify_message(last, &self.config.markers);

        let (time, user, message) = match fields.as_slice() {
            [] => ("", "", String::new()),
            [message] => ("", "", (*message).to_string()),
            [time, message] => (*time, "", (*message).to_string()),
            [time, user, rest @ ..] => {
                let separator = delimiter.to_string();
                (*time, *user, rest.join(separator.as_str()))
            }
        };

        MessageRecord::new(date, time, user, message, kind)
    }
}

/// Builds the calendar date from a header's captured digits.
///
/// `None` when the digits are not a date or the header leaves text behind.
fn header_date(caps: &Captures<'_>, line: &str) -> Option<NaiveDate> {
    if caps.get(0)?.end() != line.len() {
        return None;
    }
    let year = caps.get(1)?.as_str().parse::<i32>().ok()?;
    let month = caps.get(2)?.as_str().parse::<u32>().ok()?;
    let day = caps.get(3)?.as_str().parse::<u32>().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}
