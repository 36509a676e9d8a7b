// rust/engine/src/engine/direction.rs
#![forbid(unsafe_code)]

use rand::prelude::*;
use serde::{Deserialize, Serialize};

/// Axis along which a word's letters occupy consecutive cells.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    /// Left to right.
    Horizontal,
    /// Top to bottom.
    Vertical,
    /// Top-left to bottom-right.
    DiagonalDown,
    /// Bottom-left to top-right.
    DiagonalUp,
}

impl Direction {
    pub fn all() -> &'static [Direction] {
        use Direction::*;
        &[Horizontal, Vertical, DiagonalDown, DiagonalUp]
    }

    /// Per-letter step as (d_row, d_col). Row 0 is the top of the grid.
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        use Direction::*;
        match self {
            Horizontal => (0, 1),
            Vertical => (1, 0),
            DiagonalDown => (1, 1),
            DiagonalUp => (-1, 1),
        }
    }

    pub fn name(self) -> &'static str {
        use Direction::*;
        match self {
            Horizontal => "horizontal",
            Vertical => "vertical",
            DiagonalDown => "diagonal-down",
            DiagonalUp => "diagonal-up",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        let k = name.trim().to_ascii_lowercase().replace('_', "-");
        match k.as_str() {
            "horizontal" | "h" | "across" | "right" => Some(Self::Horizontal),
            "vertical" | "v" | "down" => Some(Self::Vertical),
            "diagonal-down" | "diag-down" | "dd" | "down-right" => Some(Self::DiagonalDown),
            "diagonal-up" | "diag-up" | "du" | "up-right" => Some(Self::DiagonalUp),
            _ => None,
        }
    }

    /// Longest run this direction can hold in a `width` x `height` grid.
    #[inline]
    pub fn max_span(self, width: usize, height: usize) -> usize {
        use Direction::*;
        match self {
            Horizontal => width,
            Vertical => height,
            DiagonalDown | DiagonalUp => width.min(height),
        }
    }
}

/// Non-empty, de-duplicated set of directions kept in `Direction::all()` order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DirectionSet {
    dirs: Vec<Direction>,
}

impl DirectionSet {
    /// Returns `None` when `dirs` is empty.
    pub fn new<I: IntoIterator<Item = Direction>>(dirs: I) -> Option<Self> {
        let mut dirs: Vec<Direction> = dirs.into_iter().collect();
        dirs.sort_unstable();
        dirs.dedup();
        if dirs.is_empty() {
            return None;
        }
        Some(Self { dirs })
    }

    pub fn all() -> Self {
        Self {
            dirs: Direction::all().to_vec(),
        }
    }

    pub fn straight() -> Self {
        Self {
            dirs: vec![Direction::Horizontal, Direction::Vertical],
        }
    }

    pub fn as_slice(&self) -> &[Direction] {
        &self.dirs
    }

    pub fn len(&self) -> usize {
        self.dirs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }

    pub fn contains(&self, d: Direction) -> bool {
        self.dirs.contains(&d)
    }

    /// Uniform choice among the members.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Direction {
        // Non-empty by construction.
        self.dirs[rng.gen_range(0..self.dirs.len())]
    }

    /// Longest run any member direction can hold.
    pub fn max_span(&self, width: usize, height: usize) -> usize {
        self.dirs
            .iter()
            .map(|d| d.max_span(width, height))
            .max()
            .unwrap_or(0)
    }
}

impl Default for DirectionSet {
    fn default() -> Self {
        Self::all()
    }
}
