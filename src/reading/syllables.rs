//! Syllable estimation for Spanish words.
//!
//! Classifies vowels as strong or weak, resolves adjacent vowels into
//! hiatus, diphthongs or triphthongs, and closes a syllable segment at
//! each consonant after a nucleus. A fixed exception set of short
//! high-frequency words is consulted before the scan; the letter-based
//! rules miscount many of them.

use std::collections::HashSet;

use lazy_static::lazy_static;

/// Strong vowels. Two adjacent strong vowels are always a hiatus.
const STRONG_VOWELS: &str = "aeoáéó";

/// Weak vowels. They glide into diphthongs unless accented.
const WEAK_VOWELS: &str = "iuíúü";

/// Accented weak vowels break a would-be diphthong.
const ACCENTED_WEAK: &str = "íú";

/// Consonants that form an inseparable final cluster with `r`.
const CLUSTER_ONSETS: &str = "bcdfgkptvz";

lazy_static! {
    /// Known monosyllabic words, checked before the segment scan.
    /// Closed-class function words plus common short nouns; membership
    /// is authoritative and short-circuits the algorithm.
    static ref MONOSYLLABLE_EXCEPTIONS: HashSet<&'static str> = {
        [
            "yo", "tú", "él", "mi", "ti", "sí", "no", "más", "ya", "tan",
            "sol", "mar", "luz", "pan", "vez", "mes", "pie", "pez", "dos", "tres",
            "diez", "bien", "mal", "quien", "cual", "que", "y", "o", "la", "lo",
            "el", "un", "su", "le", "al", "del", "me", "te", "se", "tu",
            "con", "sin", "por", "de", "en", "a", "e", "es", "fue", "ha",
            "hay", "son", "paz", "fe", "fui", "ves", "ver", "dio", "da",
            "una", "uno", "los", "las", "nos", "ley", "rey", "hoy", "muy", "dar",
            "fin", "voz", "ser", "vas", "van", "voy", "sal", "sed", "red", "tos",
            "sur", "tal", "mas", "gas", "vio", "pon", "pus", "pun", "res", "ron",
            "soy", "sos", "vos", "vil",
        ]
        .iter()
        .copied()
        .collect()
    };
}

fn is_vowel(c: char) -> bool {
    STRONG_VOWELS.contains(c) || WEAK_VOWELS.contains(c)
}

fn is_strong(c: char) -> bool {
    STRONG_VOWELS.contains(c)
}

fn is_weak(c: char) -> bool {
    WEAK_VOWELS.contains(c)
}

fn is_accented_weak(c: char) -> bool {
    ACCENTED_WEAK.contains(c)
}

/// Estimate the syllable count of a single Spanish word.
///
/// Case and punctuation never affect the result; a word with no letters
/// counts zero syllables, any other word at least one.
pub fn count_syllables(word: &str) -> usize {
    let cleaned: String = word
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphabetic())
        .collect();

    if cleaned.is_empty() {
        return 0;
    }

    if MONOSYLLABLE_EXCEPTIONS.contains(cleaned.as_str()) {
        return 1;
    }

    let chars: Vec<char> = cleaned.chars().collect();
    let mut segments: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut i = 0;

    while i < chars.len() {
        current.push(chars[i]);

        if is_vowel(chars[i]) {
            if i + 1 < chars.len() && is_vowel(chars[i + 1]) {
                let v1 = chars[i];
                let v2 = chars[i + 1];

                if (is_strong(v1) && is_strong(v2)) || is_accented_weak(v1) || is_accented_weak(v2)
                {
                    // Hiatus: the boundary falls between the two vowels
                    segments.push(std::mem::take(&mut current));
                } else {
                    // Diphthong: the second vowel joins this nucleus
                    i += 1;
                    current.push(chars[i]);

                    // Triphthong when an unaccented weak vowel follows
                    if i + 1 < chars.len()
                        && is_weak(chars[i + 1])
                        && !is_accented_weak(chars[i + 1])
                    {
                        i += 1;
                        current.push(chars[i]);
                    }
                }
            }

            // A consonant or the end of the word closes the segment
            if i + 1 >= chars.len() || !is_vowel(chars[i + 1]) {
                if !current.is_empty() {
                    segments.push(std::mem::take(&mut current));
                }
            }
        }

        i += 1;
    }

    if !current.is_empty() {
        segments.push(current);
    }

    // A final two-char segment like "br" or "tr" cannot stand alone;
    // merge it into the preceding segment
    if segments.len() >= 2 {
        let is_cluster = {
            let last = &segments[segments.len() - 1];
            let mut cs = last.chars();
            matches!(
                (cs.next(), cs.next(), cs.next()),
                (Some(onset), Some('r'), None) if CLUSTER_ONSETS.contains(onset)
            )
        };
        if is_cluster {
            if let Some(tail) = segments.pop() {
                if let Some(prev) = segments.last_mut() {
                    prev.push_str(&tail);
                }
            }
        }
    }

    segments.len().max(1)
}

/// Whether a word is estimated to have exactly one syllable.
pub fn is_monosyllabic(word: &str) -> bool {
    count_syllables(word) == 1
}
