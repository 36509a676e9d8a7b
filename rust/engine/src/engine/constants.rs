// rust/engine/src/engine/constants.rs
#![forbid(unsafe_code)]

/// Filler alphabet for cells no word claimed.
pub const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Attempts per word for the canonical (four-direction, length-first) generator.
pub const DEFAULT_RETRY_BUDGET: u32 = 100;

/// Attempts per word for the reduced (horizontal/vertical, shuffled) generator.
pub const SIMPLE_RETRY_BUDGET: u32 = 50;

/**
 * Salt mixed into the filler seed.
 * The filler draws from its own stream so that changing the fill never shifts
 * which placements a given seed produces.
 */
pub const FILL_SEED_SALT: u64 = 0xD1B5_4A32_D192_ED03;

#[inline]
pub fn filler_letter(idx: usize) -> char {
    ALPHABET[idx % ALPHABET.len()] as char
}
