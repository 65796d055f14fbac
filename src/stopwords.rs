//! Stop-word sets for the word-frequency report.
//!
//! A stop-word list is plain text, one term per line. The default list is
//! downloaded from [`DEFAULT_STOP_WORD_URL`](crate::config::DEFAULT_STOP_WORD_URL)
//! (feature `fetch`); a local file or an empty set can be used instead.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::debug;
#[cfg(feature = "fetch")]
use tracing::info;

use crate::error::Result;
#[cfg(feature = "fetch")]
use crate::error::TalkError;

/// Terms excluded from word counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords(HashSet<String>);

impl StopWords {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a list with one term per line.
    ///
    /// Accepts `\r\n` and `\n` line endings; surrounding whitespace is
    /// trimmed and blank lines are skipped.
    ///
    /// ```
    /// use talkboard::stopwords::StopWords;
    ///
    /// let words = StopWords::parse("あそこ\r\nあたり\r\n\r\n");
    /// assert_eq!(words.len(), 2);
    /// assert!(words.contains("あたり"));
    /// ```
    pub fn parse(text: &str) -> Self {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect()
    }

    /// Reads a list from a local file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let words = Self::parse(&text);
        debug!(path = %path.display(), count = words.len(), "loaded stop words");
        Ok(words)
    }

    /// Downloads a list over HTTP.
    ///
    /// One blocking GET, no retry. Transport failures and non-success
    /// statuses are reported as [`TalkError::Fetch`].
    #[cfg(feature = "fetch")]
    pub fn fetch(url: &str) -> Result<Self> {
        info!(url, "fetching stop words");

        let body = reqwest::blocking::get(url)
            .and_then(reqwest::blocking::Response::error_for_status)
            .and_then(reqwest::blocking::Response::text)
            .map_err(|e| TalkError::fetch(url, e.to_string()))?;

        let words = Self::parse(&body);
        debug!(count = words.len(), "loaded stop words");
        Ok(words)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.0.contains(term)
    }

    pub fn insert(&mut self, term: impl Into<String>) -> bool {
        self.0.insert(term.into())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for StopWords {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self(iter.into_iter().map(String::from).collect())
    }
}

impl FromIterator<String> for StopWords {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_crlf() {
        let words = StopWords::parse("あそこ\r\nあたり\r\nあちら\r\n");
        assert_eq!(words.len(), 3);
        assert!(words.contains("あそこ"));
        assert!(!words.contains("あそこ\r"));
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let words = StopWords::parse("\n\nこれ\n  \nそれ  \n");
        assert_eq!(words.len(), 2);
        assert!(words.contains("それ"));
    }

    #[test]
    fn test_empty() {
        let words = StopWords::new();
        assert!(words.is_empty());
        assert!(!words.contains(""));
    }

    #[test]
    fn test_insert_and_collect() {
        let mut words: StopWords = ["a", "b"].into_iter().collect();
        assert!(words.insert("c"));
        assert!(!words.insert("a"));
        assert_eq!(words.len(), 3);
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stop.txt");
        fs::write(&path, "映画\r\n今日\r\n").unwrap();

        let words = StopWords::from_file(&path).unwrap();
        assert!(words.contains("映画"));
        assert!(words.contains("今日"));
    }

    #[test]
    fn test_from_missing_file() {
        let err = StopWords::from_file(Path::new("/nonexistent/stop.txt")).unwrap_err();
        assert!(err.is_io());
    }

    #[cfg(feature = "fetch")]
    #[test]
    fn test_fetch_unreachable() {
        let err = StopWords::fetch("http://127.0.0.1:9/stop.txt").unwrap_err();
        assert!(err.is_external());
        assert!(err.to_string().contains("127.0.0.1:9"));
    }
}
