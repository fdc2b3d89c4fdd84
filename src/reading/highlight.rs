//! Positional highlighting pass over a word sequence.
//!
//! Each word receives at most one leading emphasis span, decided by its
//! punctuation-inclusive length and its syllable count. The pair rule
//! reaches back and emphasizes the previous word, so the pass keeps an
//! append-only output buffer and mutates its last element in place.

use unicode_segmentation::UnicodeSegmentation;

use crate::reading::syllables::count_syllables;
use crate::reading::token::WordToken;

/// Opening delimiter of an emphasized span in the marked output.
pub const HL_OPEN: &str = "⟨hl⟩";
/// Closing delimiter of an emphasized span in the marked output.
pub const HL_CLOSE: &str = "⟨/hl⟩";

/// An emphasized run of characters at the front of a word.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct HighlightSpan {
    pub start: usize,
    pub len: usize,
}

impl HighlightSpan {
    /// A span over the first `len` characters. All rules emphasize a
    /// leading prefix, so `start` is always zero.
    pub fn leading(len: usize) -> Self {
        Self { start: 0, len }
    }
}

/// One word of the output buffer together with its emphasis decision.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct MarkedWord {
    pub raw: String,
    pub span: Option<HighlightSpan>,
}

impl MarkedWord {
    fn plain(raw: &str) -> Self {
        Self {
            raw: raw.to_string(),
            span: None,
        }
    }

    fn with_span(raw: &str, len: usize) -> Self {
        Self {
            raw: raw.to_string(),
            span: Some(HighlightSpan::leading(len)),
        }
    }

    /// Split the raw word around its span, grapheme-aware so a combining
    /// sequence is never cut. Returns (before, emphasized, after).
    pub fn split_at_span(&self) -> Option<(&str, &str, &str)> {
        let span = self.span?;
        let begin = grapheme_offset(&self.raw, span.start);
        let end = grapheme_offset(&self.raw, span.start + span.len);
        Some((&self.raw[..begin], &self.raw[begin..end], &self.raw[end..]))
    }
}

fn grapheme_offset(s: &str, n: usize) -> usize {
    s.grapheme_indices(true).nth(n).map_or(s.len(), |(i, _)| i)
}

/// Run the highlighting pass over whitespace-split words.
///
/// Per word, in this order:
/// 1. If the previous word was a 2-character monosyllable, the current
///    one is too, and the forming pair has not been served yet, the
///    previous word retroactively gets a 1-character span.
/// 2. The current word's own rule: 2 characters or fewer, nothing;
///    exactly 3 and monosyllabic, first character; 3 or more and
///    polysyllabic, first two characters; 4 or more and monosyllabic,
///    nothing.
///
/// A run of three 2-character monosyllables emphasizes only the first:
/// the pair flag clears only once a word breaks the pattern.
pub fn annotate(text: &str) -> Vec<MarkedWord> {
    let mut words: Vec<MarkedWord> = Vec::new();
    let mut prev_is_two_letter_mono = false;
    let mut pair_already_highlighted = false;

    for token in text.split_whitespace().map(WordToken::parse) {
        let syllables = count_syllables(token.alpha());
        let current_mono = syllables == 1;
        let current_two_letter = token.char_len() == 2;

        if prev_is_two_letter_mono
            && current_mono
            && current_two_letter
            && !pair_already_highlighted
        {
            if let Some(prev) = words.last_mut() {
                prev.span = Some(HighlightSpan::leading(1));
                pair_already_highlighted = true;
            }
        }

        if !(current_mono && current_two_letter) {
            pair_already_highlighted = false;
        }

        let word = if token.char_len() <= 2 {
            MarkedWord::plain(token.raw())
        } else if current_mono {
            if token.char_len() == 3 {
                MarkedWord::with_span(token.raw(), 1)
            } else {
                MarkedWord::plain(token.raw())
            }
        } else if syllables >= 2 {
            MarkedWord::with_span(token.raw(), 2)
        } else {
            // no letters, nothing to emphasize
            MarkedWord::plain(token.raw())
        };
        words.push(word);

        prev_is_two_letter_mono = current_mono && current_two_letter;
    }

    words
}

/// Highlight a text and return it in marked form, spans wrapped in
/// [`HL_OPEN`]/[`HL_CLOSE`] and words joined with single spaces.
pub fn highlight(text: &str) -> String {
    let words = annotate(text);
    let mut out = String::new();

    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        match word.split_at_span() {
            Some((before, emphasized, after)) => {
                out.push_str(before);
                out.push_str(HL_OPEN);
                out.push_str(emphasized);
                out.push_str(HL_CLOSE);
                out.push_str(after);
            }
            None => out.push_str(&word.raw),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polysyllabic_word_gets_two_letter_span() {
        assert_eq!(highlight("casa"), "⟨hl⟩ca⟨/hl⟩sa");
    }

    #[test]
    fn test_three_letter_monosyllable_gets_one_letter_span() {
        assert_eq!(highlight("sol"), "⟨hl⟩s⟨/hl⟩ol");
        assert_eq!(highlight("luz"), "⟨hl⟩l⟨/hl⟩uz");
    }

    #[test]
    fn test_two_letter_word_alone_is_untouched() {
        assert_eq!(highlight("de"), "de");
        assert_eq!(highlight("la"), "la");
    }

    #[test]
    fn test_long_monosyllable_is_untouched() {
        // 4+ letter monosyllables stay plain
        assert_eq!(highlight("bien"), "bien");
        assert_eq!(highlight("tres"), "tres");
    }

    #[test]
    fn test_exception_class_three_letter_word() {
        assert_eq!(highlight("una mesa"), "⟨hl⟩u⟨/hl⟩na ⟨hl⟩me⟨/hl⟩sa");
    }

    #[test]
    fn test_pair_rule_does_not_fire_on_three_letter_follower() {
        // "luz" is monosyllabic but not 2 characters, so "la" stays plain
        assert_eq!(highlight("la luz"), "la ⟨hl⟩l⟨/hl⟩uz");
    }

    #[test]
    fn test_pair_rule_emphasizes_first_of_pair() {
        assert_eq!(highlight("mi tu"), "⟨hl⟩m⟨/hl⟩i tu");
    }

    #[test]
    fn test_three_consecutive_pairs_emphasize_only_first() {
        assert_eq!(highlight("mi tu su"), "⟨hl⟩m⟨/hl⟩i tu su");
    }

    #[test]
    fn test_four_consecutive_pairs_emphasize_only_first() {
        // The pair flag only resets once the run is broken
        assert_eq!(highlight("mi tu su la"), "⟨hl⟩m⟨/hl⟩i tu su la");
    }

    #[test]
    fn test_pair_rule_rearms_after_break() {
        assert_eq!(
            highlight("mi tu casa la lo"),
            "⟨hl⟩m⟨/hl⟩i tu ⟨hl⟩ca⟨/hl⟩sa ⟨hl⟩l⟨/hl⟩a lo"
        );
    }

    #[test]
    fn test_length_rule_counts_punctuation() {
        // "sol," is 4 characters, so the 3-letter monosyllable rule
        // no longer applies
        assert_eq!(highlight("sol,"), "sol,");
        // "la," is 3 characters and still monosyllabic
        assert_eq!(highlight("la,"), "⟨hl⟩l⟨/hl⟩a,");
    }

    #[test]
    fn test_accented_polysyllable() {
        assert_eq!(highlight("está"), "⟨hl⟩es⟨/hl⟩tá");
    }

    #[test]
    fn test_whitespace_collapses_to_single_spaces() {
        assert_eq!(highlight("la   luz"), "la ⟨hl⟩l⟨/hl⟩uz");
        assert_eq!(highlight("  casa  "), "⟨hl⟩ca⟨/hl⟩sa");
    }

    #[test]
    fn test_empty_and_symbol_only_input() {
        assert_eq!(highlight(""), "");
        assert_eq!(highlight("¿? 123"), "¿? 123");
        // tokens without letters have zero syllables and stay plain
        // whatever their length
        assert_eq!(highlight("12345 ..."), "12345 ...");
    }

    #[test]
    fn test_spans_never_exceed_two_characters() {
        for word in annotate("la luz de una casa vieja es mi tu refugio") {
            if let Some(span) = word.span {
                assert!(span.len == 1 || span.len == 2);
                assert_eq!(span.start, 0);
                assert!(span.len < word.raw.chars().count());
            }
        }
    }

    #[test]
    fn test_split_at_span() {
        let word = MarkedWord::with_span("casa", 2);
        assert_eq!(word.split_at_span(), Some(("", "ca", "sa")));

        let plain = MarkedWord::plain("casa");
        assert_eq!(plain.split_at_span(), None);
    }
}
