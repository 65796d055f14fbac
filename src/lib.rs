//! # Talkboard
//!
//! A Rust library for turning an exported LINE talk history into a structured
//! table and three reports: messages per user per month, the share of each
//! message type and a ranking of the most frequent words.
//!
//! ## Overview
//!
//! The export is a tab-delimited text file. A title line comes first, then
//! day header lines (`2023/01/01(日)`) followed by the messages of that day
//! (`09:00\tAlice\tHello`). Multi-line messages wrap onto continuation lines
//! and money-transfer notices are interleaved with the conversation.
//!
//! Talkboard normalizes that text, stamps every message with the date of the
//! header above it, classifies stickers, pictures, albums and notes, and
//! builds the reports from the resulting [`TalkTable`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use talkboard::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let table = TalkParser::new().parse_file("talk.txt")?;
//!
//!     let volume = monthly_volume(&table);
//!     let ratio = type_ratio(&table);
//!
//!     let stop_words = StopWords::parse("これ\nそれ\n");
//!     let frequencies = word_frequencies(&table, &ScriptTokenizer::default(), &stop_words);
//!     let ranking = word_ranking(&frequencies, Some(20));
//!
//!     println!("{} months, {} types, top word: {:?}", volume.months().len(), ratio.len(), ranking.words.first());
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] - [`TalkParser`], raw export to [`TalkTable`]
//! - [`parsing`] - text stages: normalization, line splitting, classification
//! - [`message`] - [`MessageRecord`] and [`MessageType`]
//! - [`config`] - [`ParserConfig`](config::ParserConfig), [`MessageMarkers`](config::MessageMarkers), [`WordConfig`](config::WordConfig)
//! - [`core`] - the table and its reports
//!   - [`core::aggregate`] - [`monthly_volume`](core::monthly_volume), [`type_ratio`](core::type_ratio)
//!   - [`core::words`] - [`word_frequencies`](core::word_frequencies), [`word_ranking`](core::word_ranking)
//! - [`stopwords`] - [`StopWords`](stopwords::StopWords) from text, file or URL
//! - `chart` - plotly HTML charts (feature `charts`)
//! - `cli` - CLI types (feature `cli`)
//! - [`error`] - [`TalkError`], [`Result`]
//! - [`prelude`] - Convenient re-exports

#[cfg(feature = "charts")]
pub mod chart;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod message;
pub mod parser;
pub mod parsing;
pub mod stopwords;

// Re-export the main types at the crate root for convenience
pub use crate::core::table::TalkTable;
pub use error::{Result, TalkError};
pub use message::{MessageRecord, MessageType};
pub use parser::TalkParser;

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use talkboard::prelude::*;
/// ```
pub mod prelude {
    // Records and table
    pub use crate::{MessageRecord, MessageType, TalkTable};

    // Error types
    pub use crate::error::{Result, TalkError};

    // Parser and its configuration
    pub use crate::TalkParser;
    pub use crate::config::{MessageMarkers, ParserConfig, WordConfig};

    // Reports
    pub use crate::core::aggregate::{MonthlyVolume, monthly_volume, type_ratio};
    pub use crate::core::words::{
        ScriptTokenizer, TermClass, WordFrequencies, WordRanking, WordTokenizer, word_frequencies,
        word_ranking,
    };
    pub use crate::stopwords::StopWords;

    #[cfg(feature = "charts")]
    pub use crate::chart::{Charts, write_charts};
}
