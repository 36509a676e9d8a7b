// rust/engine/src/engine/puzzle.rs
#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

use crate::engine::direction::Direction;
use crate::engine::geometry::{Cell, run_end};
use crate::engine::grid::Grid;

/// A word that made it into the grid, with the run it occupies.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlacedWord {
    pub word: String,
    pub direction: Direction,
    pub start: Cell,
    pub end: Cell,
}

impl PlacedWord {
    /// Length in letters.
    pub fn len(&self) -> usize {
        self.word.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// Cells from `start` to `end`, one per letter.
    pub fn cells(&self) -> Vec<Cell> {
        let (dr, dc) = self.direction.delta();
        (0..self.len() as i64)
            .map(|i| {
                Cell::new(
                    (self.start.row as i64 + dr as i64 * i) as usize,
                    (self.start.col as i64 + dc as i64 * i) as usize,
                )
            })
            .collect()
    }
}

/// Output of one generation call.
///
/// `placed` is authoritative: an input word is in the grid only if it is listed
/// there. `dropped` holds the (normalized) words that found no placement.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Puzzle {
    pub grid: Grid,
    pub placed: Vec<PlacedWord>,
    pub dropped: Vec<String>,
}

impl Puzzle {
    pub fn placed_words(&self) -> Vec<&str> {
        self.placed.iter().map(|p| p.word.as_str()).collect()
    }

    /// Number of words offered to the grid.
    pub fn attempted(&self) -> usize {
        self.placed.len() + self.dropped.len()
    }

    pub fn all_placed(&self) -> bool {
        self.dropped.is_empty()
    }

    /// Fraction of attempted words that were placed (1.0 when nothing was attempted).
    pub fn placement_rate(&self) -> f64 {
        let n = self.attempted();
        if n == 0 {
            return 1.0;
        }
        self.placed.len() as f64 / n as f64
    }

    /// True iff every placed word reads back along its recorded run and the
    /// recorded end matches the run length.
    pub fn verify(&self) -> bool {
        let (w, h) = (self.grid.width(), self.grid.height());
        self.placed.iter().all(|p| {
            let len = p.len();
            run_end(p.start, p.direction, len, w, h) == Some(p.end)
                && self.grid.read_run(p.start, p.direction, len).as_deref() == Some(p.word.as_str())
        })
    }

    pub fn render_ascii(&self) -> String {
        let mut s = self.grid.render_ascii();
        for p in &self.placed {
            s.push_str(&format!(
                "  {:<16} {:<13} ({},{}) -> ({},{})\n",
                p.word,
                p.direction.name(),
                p.start.row,
                p.start.col,
                p.end.row,
                p.end.col
            ));
        }
        if !self.dropped.is_empty() {
            s.push_str(&format!("  dropped: {}\n", self.dropped.join(", ")));
        }
        s
    }
}
