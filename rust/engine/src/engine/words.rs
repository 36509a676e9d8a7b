// rust/engine/src/engine/words.rs
#![forbid(unsafe_code)]

use rand::prelude::*;
use serde::{Deserialize, Serialize};

/// A word ready for placement: normalized text plus its letters.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NormalizedWord {
    pub text: String,
    pub letters: Vec<char>,
}

impl NormalizedWord {
    pub fn new(raw: &str) -> Self {
        let text = normalize_word(raw);
        let letters = text.chars().collect();
        Self { text, letters }
    }

    /// Length in letters (not bytes).
    #[inline]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

/// Uppercase and keep only `A..=Z`.
///
/// Latin accents fold to their base letter (`È` -> `E`, `Ç` -> `C`) and the
/// `Œ`/`Æ` ligatures expand to two letters. Spaces, hyphens, apostrophes,
/// digits and anything else without an `A..=Z` form are removed, so
/// "Saint-Esprit" becomes "SAINTESPRIT".
pub fn normalize_word(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars().flat_map(char::to_uppercase) {
        push_folded(c, &mut out);
    }
    out
}

fn push_folded(c: char, out: &mut String) {
    if c.is_ascii_uppercase() {
        out.push(c);
        return;
    }
    let base = match c {
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' => 'A',
        'Ç' => 'C',
        'È' | 'É' | 'Ê' | 'Ë' => 'E',
        'Ì' | 'Í' | 'Î' | 'Ï' => 'I',
        'Ñ' => 'N',
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' | 'Ø' => 'O',
        'Ù' | 'Ú' | 'Û' | 'Ü' => 'U',
        'Ý' | 'Ÿ' => 'Y',
        'Œ' => {
            out.push_str("OE");
            return;
        }
        'Æ' => {
            out.push_str("AE");
            return;
        }
        _ => return,
    };
    out.push(base);
}

/// Order in which words are offered to the grid.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WordOrder {
    /// Longest first; ties keep input order. Long words get the emptiest grid.
    #[default]
    LengthDescending,
    /// Uniform shuffle.
    Shuffled,
}

impl WordOrder {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "length-descending" | "length" | "longest-first" | "sorted" => {
                Some(WordOrder::LengthDescending)
            }
            "shuffled" | "shuffle" | "random" => Some(WordOrder::Shuffled),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            WordOrder::LengthDescending => "length-descending",
            WordOrder::Shuffled => "shuffled",
        }
    }

    pub fn arrange<R: Rng + ?Sized>(self, words: &mut [NormalizedWord], rng: &mut R) {
        match self {
            WordOrder::LengthDescending => words.sort_by_key(|w| std::cmp::Reverse(w.len())),
            WordOrder::Shuffled => words.shuffle(rng),
        }
    }
}
