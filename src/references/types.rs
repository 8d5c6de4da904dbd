//! Reference detection types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which detection pass produced a reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectionPass {
    /// "Book Chapter:Verse" notation
    Explicit,
    /// "Book chapter N verse M" prose
    Spoken,
    /// Bare "verse N" resolved against prior context
    Contextual,
}

/// A structured scripture citation extracted from transcript text.
///
/// Numeric fields are digit-bounded by the matchers (1-3 digits) but never
/// canon-validated; "chapter 999 verse 999" is structurally valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    /// Canonical book name, internal whitespace collapsed to single spaces
    pub book: String,
    pub chapter: u32,
    pub verse_start: u32,
    /// End of the verse range, when one was cited
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verse_end: Option<u32>,
    /// The matched substring as it appeared in the transcript
    pub raw_text: String,
    /// Character offset of the match in the source text
    pub source_position: usize,
    pub detection_pass: DetectionPass,
}

impl fmt::Display for Reference {
    /// Renders "Book Chapter:VerseStart[-VerseEnd]".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}:{}", self.book, self.chapter, self.verse_start)?;
        if let Some(end) = self.verse_end {
            write!(f, "-{end}")?;
        }
        Ok(())
    }
}
