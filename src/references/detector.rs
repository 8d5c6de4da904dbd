//! Scripture reference detector.
//!
//! Three ordered passes over the same text share one seen-offsets set:
//! explicit notation first, spoken prose second (skipping exact offset
//! collisions), then bare "verse N" candidates resolved against the most
//! recent accepted reference. The detector never errors on malformed input;
//! an absent match is expected behavior.

use regex::Captures;
use rustc_hash::FxHashSet;
use tracing::debug;

use super::books::{EXPLICIT_RE, SPOKEN_RE, VERSE_ONLY_RE};
use super::types::{DetectionPass, Reference};
use crate::config::DetectorConfig;

/// Scripture reference detector over raw transcript text.
pub struct ReferenceDetector {
    config: DetectorConfig,
}

impl ReferenceDetector {
    pub fn new(config: DetectorConfig) -> Self {
        Self { config }
    }

    /// Detect every scripture citation in `text`.
    ///
    /// The returned list is sorted ascending by `source_position` with no
    /// two references sharing a position, and is deterministic for
    /// identical input.
    pub fn detect(&self, text: &str) -> Vec<Reference> {
        let mut refs: Vec<Reference> = Vec::new();
        let mut seen_offsets: FxHashSet<usize> = FxHashSet::default();

        // Pass 1: explicit "Book Ch:V" notation
        for caps in EXPLICIT_RE.captures_iter(text) {
            if let Some(reference) = reference_from_caps(&caps, DetectionPass::Explicit) {
                seen_offsets.insert(reference.source_position);
                refs.push(reference);
            }
        }

        // Pass 2: spoken "Book chapter X verse Y" prose. The two forms
        // cannot both match the same starting position; an exact offset
        // collision means pass 1 already covered this citation.
        for caps in SPOKEN_RE.captures_iter(text) {
            if let Some(reference) = reference_from_caps(&caps, DetectionPass::Spoken) {
                if seen_offsets.contains(&reference.source_position) {
                    continue;
                }
                seen_offsets.insert(reference.source_position);
                refs.push(reference);
            }
        }

        // Pass 3: bare "verse N", inheriting book+chapter from the most
        // recent accepted reference. Without any prior reference there is
        // nothing to resolve against.
        if !refs.is_empty() {
            let window = self.config.context_window_chars;
            for caps in VERSE_ONLY_RE.captures_iter(text) {
                let Some((m, verse)) = caps
                    .get(0)
                    .zip(caps.get(1).and_then(|g| g.as_str().parse::<u32>().ok()))
                else {
                    continue;
                };
                let position = m.start();

                // Suppress verse numbers that are really part of an
                // already-accepted match.
                if seen_offsets
                    .iter()
                    .any(|&offset| position.abs_diff(offset) < window)
                {
                    continue;
                }

                // Resolve against the nearest preceding accepted reference.
                let Some(context) = refs
                    .iter()
                    .filter(|r| r.source_position < position)
                    .max_by_key(|r| r.source_position)
                else {
                    continue;
                };
                let (book, chapter) = (context.book.clone(), context.chapter);

                // Drop candidates whose resolved tuple duplicates a
                // recorded reference.
                if refs
                    .iter()
                    .any(|r| r.book == book && r.chapter == chapter && r.verse_start == verse)
                {
                    continue;
                }

                seen_offsets.insert(position);
                refs.push(Reference {
                    book,
                    chapter,
                    verse_start: verse,
                    verse_end: None,
                    raw_text: m.as_str().to_string(),
                    source_position: position,
                    detection_pass: DetectionPass::Contextual,
                });
            }
        }

        // Passes are not discovered in left-to-right order relative to each
        // other; merge by source position.
        refs.sort_by_key(|r| r.source_position);
        debug!(references = refs.len(), "reference detection complete");
        refs
    }
}

impl Default for ReferenceDetector {
    fn default() -> Self {
        Self::new(DetectorConfig::default())
    }
}

/// Build a reference from an explicit or spoken match. Groups 1-3 are the
/// book, chapter, and starting verse; group 4 is the optional range end.
fn reference_from_caps(caps: &Captures, pass: DetectionPass) -> Option<Reference> {
    let m = caps.get(0)?;
    let book = normalize_book(caps.get(1)?.as_str());
    let chapter = caps.get(2)?.as_str().parse().ok()?;
    let verse_start = caps.get(3)?.as_str().parse().ok()?;
    let verse_end = caps.get(4).and_then(|g| g.as_str().parse().ok());
    Some(Reference {
        book,
        chapter,
        verse_start,
        verse_end,
        raw_text: m.as_str().to_string(),
        source_position: m.start(),
        detection_pass: pass,
    })
}

/// Collapse internal whitespace runs to single spaces ("1   John" -> "1 John").
fn normalize_book(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
