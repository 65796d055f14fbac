//! Core data and reports for talkboard.
//!
//! This module contains:
//! - [`table`] - The talk table built by the parser
//! - [`aggregate`] - Monthly volume per user and message-type counts
//! - [`words`] - Tokenization, word frequencies and ranking
//!
//! # Quick Start
//!
//! ```rust
//! use talkboard::core::{monthly_volume, type_ratio, TalkTable};
//!
//! let table = TalkTable::default();
//! assert!(monthly_volume(&table).is_empty());
//! assert!(type_ratio(&table).is_empty());
//! ```

pub mod aggregate;
pub mod table;
pub mod words;

pub use aggregate::{MonthlyVolume, UserSeries, monthly_volume, type_ratio};
pub use table::{TableRow, TalkTable};
pub use words::{
    ScriptTokenizer, TermClass, WordFrequencies, WordRanking, WordTokenizer, word_frequencies,
    word_ranking,
};
