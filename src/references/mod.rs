//! Scripture reference detection.
//!
//! Three ordered passes over the same transcript text:
//! - Explicit "Book Chapter:Verse" notation
//! - Spoken "Book chapter N, starting in verse M" prose
//! - Bare "verse N" mentions resolved against prior context

mod books;
mod detector;
mod types;

pub use books::BOOK_PATTERNS;
pub use detector::ReferenceDetector;
pub use types::{DetectionPass, Reference};
