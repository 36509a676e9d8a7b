// rust/engine/src/lib.rs
#![forbid(unsafe_code)]

pub mod engine;
pub mod error;

pub use engine::{
    ALPHABET, Cell, DEFAULT_RETRY_BUDGET, DEVOTIONAL_WORDS, Direction, DirectionSet, Grid,
    GridConfig, GridConfigSpec, LetterGrid, PlacedWord, Puzzle, PuzzleGenerator,
    SIMPLE_RETRY_BUDGET, WordOrder, generate, generate_seeded, generate_with_rng,
    normalize_word, parse_word_list,
};
pub use error::{ConfigError, GridError};
