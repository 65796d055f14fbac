//! Command-line interface definition using clap.
//!
//! This module defines [`Args`], the CLI argument structure (for use with clap).
//!
//! ```rust
//! use clap::Parser;
//! use talkboard::cli::Args;
//!
//! let args = Args::try_parse_from(["talkboard", "talk.txt", "20"]).unwrap();
//! assert_eq!(args.limit, 20);
//! ```

use std::path::PathBuf;

use clap::Parser;

/// Chart a LINE talk history: monthly activity per user, message types and
/// the most frequent words.
#[derive(Parser, Debug, Clone)]
#[command(name = "talkboard")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    talkboard talk.txt 30
    talkboard talk.txt 50 --stop-words stopwords.txt -o charts
    talkboard talk.txt 20 --no-stop-words")]
pub struct Args {
    /// Path to the exported talk history
    pub file: PathBuf,

    /// Number of words in the word ranking
    pub limit: usize,

    /// Read stop words from a local file instead of downloading them
    #[arg(long, value_name = "PATH", conflicts_with = "no_stop_words")]
    pub stop_words: Option<PathBuf>,

    /// Count every word, without stop-word filtering
    #[arg(long)]
    pub no_stop_words: bool,

    /// Directory the chart files are written to
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_args() {
        let args = Args::try_parse_from(["talkboard", "talk.txt", "30"]).unwrap();
        assert_eq!(args.file, PathBuf::from("talk.txt"));
        assert_eq!(args.limit, 30);
        assert_eq!(args.output_dir, PathBuf::from("."));
        assert!(args.stop_words.is_none());
        assert!(!args.no_stop_words);
    }

    #[test]
    fn test_missing_limit_is_rejected() {
        assert!(Args::try_parse_from(["talkboard", "talk.txt"]).is_err());
    }

    #[test]
    fn test_non_numeric_limit_is_rejected() {
        assert!(Args::try_parse_from(["talkboard", "talk.txt", "many"]).is_err());
    }

    #[test]
    fn test_optional_flags() {
        let args = Args::try_parse_from([
            "talkboard",
            "talk.txt",
            "10",
            "--stop-words",
            "stop.txt",
            "-o",
            "charts",
        ])
        .unwrap();

        assert_eq!(args.stop_words, Some(PathBuf::from("stop.txt")));
        assert_eq!(args.output_dir, PathBuf::from("charts"));
    }

    #[test]
    fn test_stop_word_flags_conflict() {
        let result = Args::try_parse_from([
            "talkboard",
            "talk.txt",
            "10",
            "--stop-words",
            "stop.txt",
            "--no-stop-words",
        ]);
        assert!(result.is_err());
    }
}
