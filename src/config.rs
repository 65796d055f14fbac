//! Configuration types for the parser and the word counter.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! - [`MessageMarkers`] - bracketed tokens that tag non-text payloads
//! - [`ParserConfig`] - delimiter and markers used by [`TalkParser`](crate::TalkParser)
//! - [`WordConfig`] - term classes kept by the word counter and the stop-word source
//!
//! # Example
//!
//! ```rust
//! use talkboard::config::{MessageMarkers, ParserConfig};
//! use talkboard::TalkParser;
//!
//! let markers = MessageMarkers::new().with_stamp("[Sticker]").with_picture("[Photo]");
//! let config = ParserConfig::new().with_markers(markers);
//!
//! let parser = TalkParser::with_config(config);
//! ```

use serde::{Deserialize, Serialize};

use crate::core::words::TermClass;

/// SlothLib Japanese stop-word list, used when no explicit set is supplied.
pub const DEFAULT_STOP_WORD_URL: &str = "http://svn.sourceforge.jp/svnroot/slothlib/CSharp/Version1/SlothLib/NLP/Filter/StopWord/word/Japanese.txt";

/// Literal markers the export writes in place of non-text payloads.
///
/// Stamp and picture markers must equal the whole message field; album and
/// note markers only need to start it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageMarkers {
    /// Sticker marker (default: `[スタンプ]`)
    pub stamp: String,

    /// Picture marker (default: `[写真]`)
    pub picture: String,

    /// Album prefix (default: `[アルバム]`)
    pub album: String,

    /// Note prefix (default: `[ノート]`)
    pub note: String,
}

impl Default for MessageMarkers {
    fn default() -> Self {
        Self {
            stamp: "[スタンプ]".to_string(),
            picture: "[写真]".to_string(),
            album: "[アルバム]".to_string(),
            note: "[ノート]".to_string(),
        }
    }
}

impl MessageMarkers {
    /// Creates the export's default markers.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_stamp(mut self, marker: impl Into<String>) -> Self {
        self.stamp = marker.into();
        self
    }

    #[must_use]
    pub fn with_picture(mut self, marker: impl Into<String>) -> Self {
        self.picture = marker.into();
        self
    }

    #[must_use]
    pub fn with_album(mut self, marker: impl Into<String>) -> Self {
        self.album = marker.into();
        self
    }

    #[must_use]
    pub fn with_note(mut self, marker: impl Into<String>) -> Self {
        self.note = marker.into();
        self
    }
}

/// Configuration for talk history parsing.
///
/// # Example
///
/// ```rust
/// use talkboard::config::ParserConfig;
///
/// let config = ParserConfig::new().with_delimiter('\t');
/// assert_eq!(config.delimiter, '\t');
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Field delimiter of message lines (default: tab)
    pub delimiter: char,

    /// Payload markers
    pub markers: MessageMarkers,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: '\t',
            markers: MessageMarkers::default(),
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the field delimiter.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Replaces the payload markers.
    #[must_use]
    pub fn with_markers(mut self, markers: MessageMarkers) -> Self {
        self.markers = markers;
        self
    }
}

/// Configuration for the word-frequency report.
///
/// # Example
///
/// ```rust
/// use talkboard::config::WordConfig;
/// use talkboard::core::words::TermClass;
///
/// let config = WordConfig::new().with_classes(vec![TermClass::Katakana]);
/// assert_eq!(config.classes, vec![TermClass::Katakana]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordConfig {
    /// Term classes kept by the tokenizer (default: Han, Katakana, Latin)
    pub classes: Vec<TermClass>,

    /// Stop-word list location used when no explicit set is supplied
    pub stop_word_url: String,
}

impl Default for WordConfig {
    fn default() -> Self {
        Self {
            classes: vec![TermClass::Han, TermClass::Katakana, TermClass::Latin],
            stop_word_url: DEFAULT_STOP_WORD_URL.to_string(),
        }
    }
}

impl WordConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the term classes to keep.
    #[must_use]
    pub fn with_classes(mut self, classes: Vec<TermClass>) -> Self {
        self.classes = classes;
        self
    }

    /// Sets the stop-word list location.
    #[must_use]
    pub fn with_stop_word_url(mut self, url: impl Into<String>) -> Self {
        self.stop_word_url = url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parser_config_default() {
        let config = ParserConfig::default();
        assert_eq!(config.delimiter, '\t');
        assert_eq!(config.markers.stamp, "[スタンプ]");
        assert_eq!(config.markers.picture, "[写真]");
        assert_eq!(config.markers.album, "[アルバム]");
        assert_eq!(config.markers.note, "[ノート]");
    }

    #[test]
    fn test_markers_builder() {
        let markers = MessageMarkers::new()
            .with_stamp("[Sticker]")
            .with_picture("[Photo]")
            .with_album("[Album]")
            .with_note("[Note]");

        assert_eq!(markers.stamp, "[Sticker]");
        assert_eq!(markers.picture, "[Photo]");
        assert_eq!(markers.album, "[Album]");
        assert_eq!(markers.note, "[Note]");
    }

    #[test]
    fn test_word_config_default() {
        let config = WordConfig::default();
        assert_eq!(config.stop_word_url, DEFAULT_STOP_WORD_URL);
        assert!(config.classes.contains(&TermClass::Han));
        assert!(!config.classes.contains(&TermClass::Hiragana));
    }

    #[test]
    fn test_config_serde() {
        let config = ParserConfig::new().with_delimiter(',');
        let json = serde_json::to_string(&config).unwrap();
        let parsed: ParserConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
