//! Canonical book-name table and compiled citation patterns.

use once_cell::sync::Lazy;
use regex::Regex;

/// The 66 canonical book names as whitespace-tolerant regex fragments.
/// Numbered and multi-word books use `\s*` so transcripts with irregular
/// spacing still match; the detector collapses matched text back to single
/// spaces for the canonical field.
pub const BOOK_PATTERNS: &[&str] = &[
    "Genesis",
    "Exodus",
    "Leviticus",
    "Numbers",
    "Deuteronomy",
    "Joshua",
    "Judges",
    "Ruth",
    r"1\s*Samuel",
    r"2\s*Samuel",
    r"1\s*Kings",
    r"2\s*Kings",
    r"1\s*Chronicles",
    r"2\s*Chronicles",
    "Ezra",
    "Nehemiah",
    "Esther",
    "Job",
    "Psalms?",
    "Proverbs",
    "Ecclesiastes",
    r"Song\s*of\s*Solomon",
    "Isaiah",
    "Jeremiah",
    "Lamentations",
    "Ezekiel",
    "Daniel",
    "Hosea",
    "Joel",
    "Amos",
    "Obadiah",
    "Jonah",
    "Micah",
    "Nahum",
    "Habakkuk",
    "Zephaniah",
    "Haggai",
    "Zechariah",
    "Malachi",
    "Matthew",
    "Mark",
    "Luke",
    "John",
    "Acts",
    "Romans",
    r"1\s*Corinthians",
    r"2\s*Corinthians",
    "Galatians",
    "Ephesians",
    "Philippians",
    "Colossians",
    r"1\s*Thessalonians",
    r"2\s*Thessalonians",
    r"1\s*Timothy",
    r"2\s*Timothy",
    "Titus",
    "Philemon",
    "Hebrews",
    "James",
    r"1\s*Peter",
    r"2\s*Peter",
    r"1\s*John",
    r"2\s*John",
    r"3\s*John",
    "Jude",
    "Revelation",
];

static BOOKS_ALTERNATION: Lazy<String> = Lazy::new(|| BOOK_PATTERNS.join("|"));

/// Explicit notation: "Romans 8:28" or "Romans 8:28-30".
pub static EXPLICIT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)({books})\s+(\d{{1,3}})\s*:\s*(\d{{1,3}})(?:\s*[-–]\s*(\d{{1,3}}))?",
        books = &*BOOKS_ALTERNATION
    ))
    .unwrap()
});

/// Spoken prose: "Romans chapter 8, starting in verse 28",
/// "Romans chapter 8 verse 28 through 30". The trailing character class
/// covers the range connectors "-", "–", and the word "through".
pub static SPOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)({books})\s+chapter\s+(\d{{1,3}})\s*,?\s*(?:starting\s+in\s+)?verse\s+(\d{{1,3}})(?:\s*[-–through]+\s*(\d{{1,3}}))?",
        books = &*BOOKS_ALTERNATION
    ))
    .unwrap()
});

/// Bare "verse N", resolved against prior context by the third pass.
pub static VERSE_ONLY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bverse\s+(\d{1,3})\b").unwrap());
