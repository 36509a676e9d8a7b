//! Error types for the word-search engine.
//!
//! Generation itself never fails; these cover configuration and decoding.

use thiserror::Error;

/// Rejected grid configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid width must be positive")]
    ZeroWidth,

    #[error("grid height must be positive")]
    ZeroHeight,

    #[error("grid {width}x{height} has more cells than can be addressed")]
    TooLarge { width: usize, height: usize },

    #[error("at least one direction must be enabled")]
    NoDirections,

    #[error("unknown direction: {0:?}")]
    UnknownDirection(String),

    #[error("unknown word order: {0:?}")]
    UnknownOrder(String),
}

/// Rejected serialized grid.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("grid has no cells")]
    Empty,

    #[error("row {row} has {found} letters, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("cell ({row},{col}) holds {ch:?}, expected an uppercase letter A-Z")]
    InvalidCell { row: usize, col: usize, ch: char },
}
