//! Interactive HTML charts.
//!
//! Each report is rendered with `plotly` into a standalone HTML file:
//!
//! | file | chart |
//! |------|-------|
//! | `monthly_messages.html` | stacked bars, one trace per user |
//! | `message_types.html` | pie of message types |
//! | `word_ranking.html` | bars of the most frequent words |

use std::fs;
use std::path::{Path, PathBuf};

use plotly::layout::BarMode;
use plotly::{Bar, Layout, Pie, Plot};
use tracing::info;

use crate::core::aggregate::MonthlyVolume;
use crate::core::words::WordRanking;
use crate::error::{Result, TalkError};
use crate::message::MessageType;

pub const MONTHLY_MESSAGES_FILE: &str = "monthly_messages.html";
pub const MESSAGE_TYPES_FILE: &str = "message_types.html";
pub const WORD_RANKING_FILE: &str = "word_ranking.html";

/// The three report charts of one run.
pub struct Charts {
    pub monthly_messages: Plot,
    pub message_types: Plot,
    pub word_ranking: Plot,
}

impl Charts {
    pub fn new(
        volume: &MonthlyVolume,
        ratio: &[(MessageType, usize)],
        ranking: &WordRanking,
    ) -> Self {
        Self {
            monthly_messages: monthly_messages_chart(volume),
            message_types: message_types_chart(ratio),
            word_ranking: word_ranking_chart(ranking),
        }
    }

    fn files(&self) -> [(&'static str, &Plot); 3] {
        [
            (MONTHLY_MESSAGES_FILE, &self.monthly_messages),
            (MESSAGE_TYPES_FILE, &self.message_types),
            (WORD_RANKING_FILE, &self.word_ranking),
        ]
    }
}

/// Stacked bar chart of messages per month, one trace per user.
pub fn monthly_messages_chart(volume: &MonthlyVolume) -> Plot {
    let labels = volume.labels();
    let mut plot = Plot::new();

    for series in volume.series() {
        let trace = Bar::new(labels.clone(), series.counts.clone()).name(series.user.as_str());
        plot.add_trace(trace);
    }

    plot.set_layout(Layout::new().bar_mode(BarMode::Stack));
    plot
}

/// Pie chart of message types.
pub fn message_types_chart(ratio: &[(MessageType, usize)]) -> Plot {
    let labels: Vec<String> = ratio.iter().map(|(kind, _)| kind.to_string()).collect();
    let values: Vec<usize> = ratio.iter().map(|(_, count)| *count).collect();

    let mut plot = Plot::new();
    plot.add_trace(Pie::new(values).labels(labels));
    plot
}

/// Bar chart of ranked words.
pub fn word_ranking_chart(ranking: &WordRanking) -> Plot {
    let mut plot = Plot::new();
    plot.add_trace(Bar::new(ranking.words.clone(), ranking.counts.clone()).name("counts"));
    plot
}

/// Writes every chart into `dir`, creating it if needed.
///
/// Returns the written paths in a fixed order: monthly messages, message
/// types, word ranking.
pub fn write_charts(charts: &Charts, dir: &Path) -> Result<Vec<PathBuf>> {
    if dir.exists() && !dir.is_dir() {
        return Err(TalkError::Chart(format!(
            "output path {} is not a directory",
            dir.display()
        )));
    }
    fs::create_dir_all(dir)?;

    let mut written = Vec::with_capacity(3);
    for (name, plot) in charts.files() {
        let path = dir.join(name);
        fs::write(&path, plot.to_html())?;
        info!(path = %path.display(), "wrote chart");
        written.push(path);
    }

    Ok(written)
}
