//! Word frequencies over message text.
//!
//! Morphological analysis sits behind the [`WordTokenizer`] trait. The
//! bundled [`ScriptTokenizer`] segments on Unicode word boundaries and uses
//! the script of each run as a coarse part-of-speech filter: kanji and
//! katakana runs (where nouns live) are joined into compounds, hiragana runs
//! (particles, inflections) are dropped by default, Latin words are
//! lowercased.
//!
//! # Example
//!
//! ```
//! use talkboard::core::words::{WordFrequencies, word_ranking};
//!
//! let freqs = WordFrequencies::from_counts(vec![
//!     ("hello".to_string(), 5),
//!     ("world".to_string(), 3),
//!     ("foo".to_string(), 1),
//! ]);
//!
//! let ranking = word_ranking(&freqs, Some(2));
//! assert_eq!(ranking.words, vec!["hello", "world"]);
//! assert_eq!(ranking.counts, vec![5, 3]);
//! ```

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;
use unicode_segmentation::UnicodeSegmentation;

use crate::config::WordConfig;
use crate::core::table::TalkTable;
use crate::message::MessageType;
use crate::stopwords::StopWords;

/// Digits and ASCII symbols, removed before tokenizing.
static SYMBOLS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\d!-/:-@\[-`{-~]").expect("symbol pattern is valid"));

/// Script class of a term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TermClass {
    /// Kanji, including compounds that mix in katakana
    Han,
    Katakana,
    Hiragana,
    /// Latin letters (ASCII, Latin-1, fullwidth)
    Latin,
    Other,
}

impl TermClass {
    /// Classifies a single character.
    pub fn of(ch: char) -> Self {
        match ch {
            '\u{3041}'..='\u{309F}' => TermClass::Hiragana,
            '\u{30A0}'..='\u{30FF}' | '\u{31F0}'..='\u{31FF}' | '\u{FF66}'..='\u{FF9F}' => {
                TermClass::Katakana
            }
            '\u{3400}'..='\u{4DBF}'
            | '\u{4E00}'..='\u{9FFF}'
            | '\u{F900}'..='\u{FAFF}'
            | '\u{3005}'
            | '\u{3006}' => TermClass::Han,
            'A'..='Z'
            | 'a'..='z'
            | '\u{00C0}'..='\u{024F}'
            | '\u{FF21}'..='\u{FF3A}'
            | '\u{FF41}'..='\u{FF5A}' => TermClass::Latin,
            _ => TermClass::Other,
        }
    }

    /// Whether adjacent runs of this class join into one compound.
    fn forms_compound(self) -> bool {
        matches!(self, TermClass::Han | TermClass::Katakana)
    }
}

/// Splits text into countable terms.
pub trait WordTokenizer {
    /// Returns terms in text order, duplicates included.
    fn terms(&self, text: &str) -> Vec<String>;
}

/// Unicode word-boundary tokenizer with script-based filtering.
#[derive(Debug, Clone)]
pub struct ScriptTokenizer {
    keep: Vec<TermClass>,
}

impl Default for ScriptTokenizer {
    fn default() -> Self {
        Self::new(vec![TermClass::Han, TermClass::Katakana, TermClass::Latin])
    }
}

impl ScriptTokenizer {
    /// Creates a tokenizer keeping only terms of the given classes.
    pub fn new(keep: Vec<TermClass>) -> Self {
        Self { keep }
    }

    /// Replaces the kept classes.
    #[must_use]
    pub fn with_classes(mut self, keep: Vec<TermClass>) -> Self {
        self.keep = keep;
        self
    }

    pub fn keeps(&self, class: TermClass) -> bool {
        self.keep.contains(&class)
    }

    fn push_term(&self, run: &mut Run, terms: &mut Vec<String>) {
        if let Some(class) = run.class.take() {
            let text = std::mem::take(&mut run.text);
            if self.keeps(class) {
                terms.push(if class == TermClass::Latin {
                    text.to_lowercase()
                } else {
                    text
                });
            }
        }
    }
}

impl From<&WordConfig> for ScriptTokenizer {
    fn from(config: &WordConfig) -> Self {
        Self::new(config.classes.clone())
    }
}

#[derive(Default)]
struct Run {
    text: String,
    class: Option<TermClass>,
}

impl WordTokenizer for ScriptTokenizer {
    fn terms(&self, text: &str) -> Vec<String> {
        let mut terms = Vec::new();
        let mut run = Run::default();

        for segment in text.split_word_bounds() {
            if !segment.chars().any(char::is_alphanumeric) {
                self.push_term(&mut run, &mut terms);
                continue;
            }

            for ch in segment.chars() {
                let class = TermClass::of(ch);
                match run.class {
                    Some(current) if current == class => {}
                    Some(current) if current.forms_compound() && class.forms_compound() => {
                        if class == TermClass::Han {
                            run.class = Some(TermClass::Han);
                        }
                    }
                    Some(_) => {
                        self.push_term(&mut run, &mut terms);
                        run.class = Some(class);
                    }
                    None => run.class = Some(class),
                }
                run.text.push(ch);
            }
        }
        self.push_term(&mut run, &mut terms);

        terms
    }
}

/// Term counts ordered by descending frequency; ties keep first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WordFrequencies {
    entries: Vec<(String, usize)>,
}

impl WordFrequencies {
    /// Builds frequencies from `(term, count)` pairs, sorting them stably.
    pub fn from_counts(counts: impl IntoIterator<Item = (String, usize)>) -> Self {
        let mut entries: Vec<(String, usize)> = counts.into_iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        Self { entries }
    }

    /// Counts terms in the order they are produced.
    pub fn count_terms(terms: impl IntoIterator<Item = String>) -> Self {
        let mut order: Vec<(String, usize)> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for term in terms {
            match index.get(&term) {
                Some(&i) => order[i].1 += 1,
                None => {
                    index.insert(term.clone(), order.len());
                    order.push((term, 1));
                }
            }
        }

        Self::from_counts(order)
    }

    pub fn entries(&self) -> &[(String, usize)] {
        &self.entries
    }

    pub fn get(&self, term: &str) -> Option<usize> {
        self.entries.iter().find(|(t, _)| t == term).map(|(_, c)| *c)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every term contained in `stop_words`.
    #[must_use]
    pub fn without(mut self, stop_words: &StopWords) -> Self {
        self.entries.retain(|(term, _)| !stop_words.contains(term));
        self
    }
}

/// Counts terms across the text of plain messages.
///
/// Only records typed [`MessageType::Message`] contribute. Their bodies are
/// joined with newlines, digits and ASCII symbols are removed, the remainder
/// is tokenized and stop words are dropped from the result.
pub fn word_frequencies(
    table: &TalkTable,
    tokenizer: &dyn WordTokenizer,
    stop_words: &StopWords,
) -> WordFrequencies {
    let messages: Vec<&str> = table
        .iter()
        .filter(|r| r.kind() == MessageType::Message)
        .map(|r| r.message())
        .collect();

    let text = messages.join("\n");
    let cleaned = SYMBOLS.replace_all(&text, "");
    let terms = tokenizer.terms(&cleaned);
    debug!(
        messages = messages.len(),
        terms = terms.len(),
        "tokenized message text"
    );

    WordFrequencies::count_terms(terms).without(stop_words)
}

/// Top terms as parallel vectors, ready for a bar chart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WordRanking {
    pub words: Vec<String>,
    pub counts: Vec<usize>,
}

/// Takes the first `limit` entries (all of them when `None`).
pub fn word_ranking(frequencies: &WordFrequencies, limit: Option<usize>) -> WordRanking {
    let limit = limit.unwrap_or(frequencies.len());
    let (words, counts) = frequencies
        .entries()
        .iter()
        .take(limit)
        .map(|(word, count)| (word.clone(), *count))
        .unzip();

    WordRanking { words, counts }
}
