pub mod highlight;
pub mod syllables;
pub mod token;

pub use highlight::{annotate, highlight, HighlightSpan, MarkedWord, HL_CLOSE, HL_OPEN};
pub use syllables::{count_syllables, is_monosyllabic};
pub use token::WordToken;
