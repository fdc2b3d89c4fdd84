/// A whitespace-delimited word as it appeared in the input.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct WordToken {
    raw: String,
    alpha: String,
}

impl WordToken {
    pub fn parse(raw: &str) -> Self {
        let alpha = raw
            .chars()
            .filter(|c| c.is_alphabetic())
            .flat_map(char::to_lowercase)
            .collect();
        Self {
            raw: raw.to_string(),
            alpha,
        }
    }

    /// The token exactly as typed, punctuation included.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Letters only, lowercased, for syllable analysis.
    pub fn alpha(&self) -> &str {
        &self.alpha
    }

    /// Character count of the raw token. The word-length rules are
    /// defined over this, not over the letter count.
    pub fn char_len(&self) -> usize {
        self.raw.chars().count()
    }
}
