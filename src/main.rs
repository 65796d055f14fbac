//! # talkboard CLI
//!
//! Command-line interface for the talkboard library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use talkboard::chart::{Charts, write_charts};
use talkboard::cli::Args;
use talkboard::config::WordConfig;
use talkboard::core::{ScriptTokenizer, monthly_volume, type_ratio, word_frequencies, word_ranking};
use talkboard::stopwords::StopWords;
use talkboard::{TalkError, TalkParser};

fn main() {
    init_tracing();

    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();
}

fn run() -> Result<(), TalkError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();
    let word_config = WordConfig::default();

    // Print header
    println!("📊 talkboard v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.file.display());
    println!("📁 Charts:  {}", args.output_dir.display());
    println!("🔢 Words:   top {}", args.limit);
    println!();

    // Step 1: Parse
    println!("⏳ Parsing talk history...");
    let parse_start = Instant::now();
    let table = TalkParser::new().parse(&args.file)?;
    println!(
        "   Found {} messages from {} users ({:.2}s)",
        table.len(),
        table.users().len(),
        parse_start.elapsed().as_secs_f64()
    );
    if table.undated_count() > 0 {
        println!(
            "   ⚠️  {} messages precede the first date header and are left out of monthly counts",
            table.undated_count()
        );
    }

    // Step 2: Stop words
    let stop_words = load_stop_words(&args, &word_config)?;

    // Step 3: Reports
    println!("🧮 Counting...");
    let volume = monthly_volume(&table);
    let ratio = type_ratio(&table);
    let tokenizer = ScriptTokenizer::from(&word_config);
    let frequencies = word_frequencies(&table, &tokenizer, &stop_words);
    let ranking = word_ranking(&frequencies, Some(args.limit));
    println!(
        "   {} months, {} message types, {} distinct words",
        volume.months().len(),
        ratio.len(),
        frequencies.len()
    );

    // Step 4: Charts
    println!("📈 Writing charts...");
    let charts = Charts::new(&volume, &ratio, &ranking);
    for path in write_charts(&charts, &args.output_dir)? {
        println!("   {}", path.display());
    }

    println!();
    println!("✅ Done!");

    // Summary
    println!();
    println!("🏆 Top words:");
    if ranking.words.is_empty() {
        println!("   (none)");
    }
    for (rank, (word, count)) in ranking.words.iter().zip(&ranking.counts).enumerate() {
        println!("   {:>3}. {} ({})", rank + 1, word, count);
    }

    println!();
    println!("⚡ Total time: {:.2}s", total_start.elapsed().as_secs_f64());

    Ok(())
}

/// Resolves the stop-word set from the command line flags.
fn load_stop_words(args: &Args, config: &WordConfig) -> Result<StopWords, TalkError> {
    if args.no_stop_words {
        println!("⏭️  Skipping stop words (--no-stop-words)");
        return Ok(StopWords::new());
    }

    if let Some(ref path) = args.stop_words {
        println!("📖 Reading stop words from {}...", path.display());
        let words = StopWords::from_file(path)?;
        println!("   {} stop words", words.len());
        return Ok(words);
    }

    println!("🌐 Downloading stop words...");
    let words = fetch_stop_words(&config.stop_word_url)?;
    println!("   {} stop words", words.len());
    Ok(words)
}

#[cfg(feature = "fetch")]
fn fetch_stop_words(url: &str) -> Result<StopWords, TalkError> {
    StopWords::fetch(url)
}

#[cfg(not(feature = "fetch"))]
fn fetch_stop_words(url: &str) -> Result<StopWords, TalkError> {
    Err(TalkError::fetch(
        url,
        "built without the 'fetch' feature; pass --stop-words or --no-stop-words",
    ))
}
