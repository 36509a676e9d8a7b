// rust/engine/src/engine/mod.rs
#![forbid(unsafe_code)]

mod config;
mod constants;
mod direction;
mod generator;
mod geometry;
mod grid;
mod puzzle;
mod wordlist;
mod words;

/**
 * Curated engine public API.
 *
 * Internal implementation modules remain private; only stable items are re-exported here.
 */
pub use config::{GridConfig, GridConfigSpec};
pub use constants::{ALPHABET, DEFAULT_RETRY_BUDGET, SIMPLE_RETRY_BUDGET};
pub use direction::{Direction, DirectionSet};
pub use generator::{PuzzleGenerator, generate, generate_seeded, generate_with_rng};
pub use geometry::{Cell, run_cells, run_end};
pub use grid::{Grid, LetterGrid};
pub use puzzle::{PlacedWord, Puzzle};
pub use wordlist::{DEVOTIONAL_WORDS, parse_word_list};
pub use words::{NormalizedWord, WordOrder, normalize_word};
