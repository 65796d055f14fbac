//! Talk records produced by the parser.
//!
//! This module provides [`MessageRecord`], one row of the talk table, and
//! [`MessageType`], the payload tag assigned by the classifier.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use talkboard::{MessageRecord, MessageType};
//!
//! let date = NaiveDate::from_ymd_opt(2023, 1, 1);
//! let record = MessageRecord::new(date, "09:00", "Alice", "Hello", MessageType::Message);
//!
//! assert_eq!(record.year(), Some(2023));
//! assert_eq!(record.user(), "Alice");
//! assert_eq!(record.kind().as_str(), "message");
//! ```

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Payload category of a message line.
///
/// Serialized as the lowercase tag used in the table's `type` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    /// Free-form text
    #[default]
    Message,
    /// Sticker
    Stamp,
    /// Single picture
    Picture,
    /// Album post; the marker is followed by the album name
    Album,
    /// Note post; the marker is followed by the note body
    Note,
}

impl MessageType {
    /// Returns the tag written to the `type` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageType::Message => "message",
            MessageType::Stamp => "stamp",
            MessageType::Picture => "picture",
            MessageType::Album => "album",
            MessageType::Note => "note",
        }
    }

    /// Returns all message types.
    pub fn all() -> &'static [MessageType] {
        &[
            MessageType::Message,
            MessageType::Stamp,
            MessageType::Picture,
            MessageType::Album,
            MessageType::Note,
        ]
    }
}

impl std::fmt::Display for MessageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MessageType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "message" => Ok(MessageType::Message),
            "stamp" => Ok(MessageType::Stamp),
            "picture" => Ok(MessageType::Picture),
            "album" => Ok(MessageType::Album),
            "note" => Ok(MessageType::Note),
            _ => Err(format!(
                "Unknown message type: '{}'. Expected one of: message, stamp, picture, album, note",
                s
            )),
        }
    }
}

/// One message line of the talk history.
///
/// The date is copied from the nearest preceding date header when the record
/// is created. Lines that appear before any header carry no date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecord {
    /// Day the message belongs to, `None` when no header preceded it.
    pub date: Option<NaiveDate>,

    /// `HH:MM`, or empty when the line had no time field.
    pub time: String,

    /// Sender name, empty for lines without a user field.
    pub user: String,

    /// Message body.
    pub message: String,

    /// Payload category.
    #[serde(rename = "type")]
    pub kind: MessageType,
}

impl MessageRecord {
    /// Creates a record from its parts.
    pub fn new(
        date: Option<NaiveDate>,
        time: impl Into<String>,
        user: impl Into<String>,
        message: impl Into<String>,
        kind: MessageType,
    ) -> Self {
        Self {
            date,
            time: time.into(),
            user: user.into(),
            message: message.into(),
            kind,
        }
    }

    /// Date of the header above this record, if any.
    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    /// Year of the record's date.
    pub fn year(&self) -> Option<i32> {
        self.date.map(|d| d.year())
    }

    /// Month of the record's date (1-12).
    pub fn month(&self) -> Option<u32> {
        self.date.map(|d| d.month())
    }

    /// Day of month of the record's date.
    pub fn day(&self) -> Option<u32> {
        self.date.map(|d| d.day())
    }

    /// Time token (`HH:MM`), or empty.
    pub fn time(&self) -> &str {
        &self.time
    }

    /// Sender name, or empty for system lines.
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Message body with wrapped lines rejoined.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Message type, derived from the last field.
    pub fn kind(&self) -> MessageType {
        self.kind
    }

    /// Returns `true` if the record was emitted before any date header.
    pub fn is_undated(&self) -> bool {
        self.date.is_none()
    }
}
