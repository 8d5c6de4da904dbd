//! Scripture-density metrics over a transcript and its detected references.
//!
//! Pure functions: word counting, references per hundred words, and an
//! estimate of the share of the sermon spent inside the text of scripture.

use serde::{Deserialize, Serialize};

use crate::references::Reference;

/// Half-width of the word window attributed to each citation when
/// estimating time spent in the text.
const SCRIPTURE_ZONE_HALF_WORDS: usize = 25;

/// Density metrics for one transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptMetrics {
    pub word_count: usize,
    pub references_found: usize,
    /// References per 100 words, rounded to 2 decimals.
    pub density_per_100_words: f64,
    /// Share of words falling inside a reference's zone, as a percentage
    /// rounded to 1 decimal.
    pub estimated_time_in_word_pct: f64,
}

/// Compute density metrics for `text` given its detected references.
pub fn analyze(text: &str, references: &[Reference]) -> TranscriptMetrics {
    let word_starts: Vec<usize> = word_start_offsets(text);
    let word_count = word_starts.len();
    let references_found = references.len();

    let hundreds = f64::max(word_count as f64 / 100.0, 1.0);
    let density_per_100_words = round2(references_found as f64 / hundreds);

    // Each reference claims a window of words around its position; windows
    // may overlap, so the total is capped at the transcript length.
    let mut words_in_zone = 0usize;
    for reference in references {
        let anchor = word_index_at(&word_starts, reference.source_position);
        let lo = anchor.saturating_sub(SCRIPTURE_ZONE_HALF_WORDS);
        let hi = usize::min(anchor + SCRIPTURE_ZONE_HALF_WORDS + 1, word_count);
        words_in_zone += hi.saturating_sub(lo);
    }
    let words_in_zone = usize::min(words_in_zone, word_count);
    let estimated_time_in_word_pct = if word_count == 0 {
        0.0
    } else {
        round1(words_in_zone as f64 / word_count as f64 * 100.0)
    };

    TranscriptMetrics {
        word_count,
        references_found,
        density_per_100_words,
        estimated_time_in_word_pct,
    }
}

/// Side-by-side metric pairs for two transcripts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsComparison {
    pub left: TranscriptMetrics,
    pub right: TranscriptMetrics,
    pub word_count_delta: i64,
    pub density_delta: f64,
    pub time_in_word_delta_pct: f64,
}

pub fn compare(left: TranscriptMetrics, right: TranscriptMetrics) -> MetricsComparison {
    MetricsComparison {
        word_count_delta: right.word_count as i64 - left.word_count as i64,
        density_delta: round2(right.density_per_100_words - left.density_per_100_words),
        time_in_word_delta_pct: round1(
            right.estimated_time_in_word_pct - left.estimated_time_in_word_pct,
        ),
        left,
        right,
    }
}

fn word_start_offsets(text: &str) -> Vec<usize> {
    let mut starts = Vec::new();
    let mut in_word = false;
    for (i, c) in text.char_indices() {
        if c.is_whitespace() {
            in_word = false;
        } else if !in_word {
            starts.push(i);
            in_word = true;
        }
    }
    starts
}

/// Index of the word containing (or last starting before) `position`.
fn word_index_at(word_starts: &[usize], position: usize) -> usize {
    match word_starts.binary_search(&position) {
        Ok(i) => i,
        Err(0) => 0,
        Err(i) => i - 1,
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
