// rust/engine/src/engine/wordlist.rs
#![forbid(unsafe_code)]

/// Default themed vocabulary for devotional puzzles.
///
/// Callers pass this (or any other list) into the generator explicitly.
pub const DEVOTIONAL_WORDS: &[&str] = &[
    "JESUS", "DIEU", "AMOUR", "FOI", "PAIX", "GRACE", "ESPOIR", "PRIERE", "BIBLE", "CROIX",
    "EGLISE", "LOUANGE", "SALUT", "PARDON", "JOIE", "LUMIERE", "VERITE", "VIE", "ESPRIT",
    "ANGE", "CIEL", "APOTRE", "PROPHETE", "EVANGILE", "PSAUME", "BENIR", "SAINT", "GLOIRE",
    "ALLIANCE", "BERGER",
];

/// Parse a word-list document.
///
/// One or more words per line, separated by commas. Blank lines and lines
/// starting with `#` are skipped; entries are trimmed but not uppercased.
pub fn parse_word_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| line.split(','))
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}
