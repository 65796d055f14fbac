//! Unified error types for talkboard.
//!
//! This module provides a single [`TalkError`] enum that covers every failure
//! the library can report: reading the export, malformed date headers,
//! fetching the stop-word list and rendering charts.
//!
//! # Error Handling Philosophy
//!
//! - **Input-format errors** (bad encoding, impossible dates) abort the run and
//!   name the offending file or line
//! - **External failures** (network, chart output) abort only the stage that
//!   needed them; the parsed table is never mutated
//! - Nothing is retried

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A specialized [`Result`] type for talkboard operations.
///
/// # Example
///
/// ```rust
/// use talkboard::error::Result;
/// use talkboard::TalkTable;
///
/// fn my_function() -> Result<TalkTable> {
///     Ok(TalkTable::default())
/// }
/// ```
pub type Result<T> = std::result::Result<T, TalkError>;

/// The error type for all talkboard operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TalkError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The export file doesn't exist
    /// - Permission denied
    /// - The chart directory is not writable
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The export file is not valid UTF-8.
    #[error("UTF-8 encoding error in {}: {source}", path.display())]
    Utf8 {
        /// File that failed to decode
        path: PathBuf,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// A date header line carries digits that do not form a calendar date,
    /// or has text after the weekday.
    #[error("Invalid date header on line {line_number}: '{line}'")]
    InvalidDate {
        /// 1-based position of the line after the title line is dropped
        line_number: usize,
        /// The offending line
        line: String,
    },

    /// The stop-word list could not be downloaded.
    #[error("Failed to fetch stop words from {url}: {message}")]
    Fetch {
        /// Source URL
        url: String,
        /// Transport or status description
        message: String,
    },

    /// A chart could not be produced.
    #[error("Chart error: {0}")]
    Chart(String),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl TalkError {
    /// Creates an invalid date header error.
    pub fn invalid_date(line_number: usize, line: impl Into<String>) -> Self {
        TalkError::InvalidDate {
            line_number,
            line: line.into(),
        }
    }

    /// Creates a stop-word fetch error.
    pub fn fetch(url: impl Into<String>, message: impl Into<String>) -> Self {
        TalkError::Fetch {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, TalkError::Io(_))
    }

    /// Returns `true` if this is a date header error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, TalkError::InvalidDate { .. })
    }

    /// Returns `true` if the error came from an external collaborator
    /// (stop-word download or chart rendering).
    pub fn is_external(&self) -> bool {
        matches!(self, TalkError::Fetch { .. } | TalkError::Chart(_))
    }
}

// ============================================================================
// Tests
// ============================================================================
