//! The talk table: parsed records under fixed column names.
//!
//! [`TalkTable`] is built once per run and never mutated afterwards. All
//! reports borrow it; none of them reach for a table other than the one they
//! are given.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use talkboard::{MessageRecord, MessageType, TalkTable};
//!
//! let date = NaiveDate::from_ymd_opt(2023, 1, 1);
//! let table = TalkTable::new(vec![
//!     MessageRecord::new(date, "09:00", "Alice", "Hello", MessageType::Message),
//! ]);
//!
//! let row = table.rows().next().unwrap();
//! assert_eq!(row.to_strings(), ["2023", "1", "1", "09:00", "Alice", "Hello", "message"]);
//! ```

use serde::Serialize;

use crate::message::{MessageRecord, MessageType};

/// Ordered, immutable sequence of [`MessageRecord`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TalkTable {
    records: Vec<MessageRecord>,
}

impl TalkTable {
    /// Column names, in output order.
    pub const COLUMNS: [&'static str; 7] = ["year", "month", "day", "time", "user", "message", "type"];

    pub fn new(records: Vec<MessageRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[MessageRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MessageRecord> {
        self.records.iter()
    }

    /// Returns every record projected onto [`COLUMNS`](Self::COLUMNS).
    pub fn rows(&self) -> impl Iterator<Item = TableRow<'_>> {
        self.records.iter().map(TableRow::from)
    }

    /// Distinct users in order of first appearance.
    pub fn users(&self) -> Vec<&str> {
        let mut users: Vec<&str> = Vec::new();
        for record in &self.records {
            if !users.contains(&record.user()) {
                users.push(record.user());
            }
        }
        users
    }

    /// Number of records that appeared before any date header.
    pub fn undated_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_undated()).count()
    }

    pub fn into_records(self) -> Vec<MessageRecord> {
        self.records
    }
}

impl FromIterator<MessageRecord> for TalkTable {
    fn from_iter<I: IntoIterator<Item = MessageRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a TalkTable {
    type Item = &'a MessageRecord;
    type IntoIter = std::slice::Iter<'a, MessageRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// One record viewed through the table's columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableRow<'a> {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
    pub time: &'a str,
    pub user: &'a str,
    pub message: &'a str,
    #[serde(rename = "type")]
    pub kind: MessageType,
}

impl TableRow<'_> {
    /// Renders the row as column strings; missing date parts are empty.
    pub fn to_strings(&self) -> [String; 7] {
        fn part<T: ToString>(value: Option<T>) -> String {
            value.map(|v| v.to_string()).unwrap_or_default()
        }

        [
            part(self.year),
            part(self.month),
            part(self.day),
            self.time.to_string(),
            self.user.to_string(),
            self.message.to_string(),
            self.kind.as_str().to_string(),
        ]
    }
}

impl<'a> From<&'a MessageRecord> for TableRow<'a> {
    fn from(record: &'a MessageRecord) -> Self {
        Self {
            year: record.year(),
            month: record.month(),
            day: record.day(),
            time: record.time(),
            user: record.user(),
            message: record.message(),
            kind: record.kind(),
        }
    }
}
