// rust/engine/src/engine/geometry.rs
#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};

use crate::engine::direction::Direction;

/// Zero-based grid coordinate; row 0 is the top row.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Cell `i` steps from `start` along `dir`, or `None` if it leaves the
/// `width` x `height` grid.
#[inline]
pub fn step(start: Cell, dir: Direction, i: usize, width: usize, height: usize) -> Option<Cell> {
    let (dr, dc) = dir.delta();
    let r = start.row as i64 + dr as i64 * i as i64;
    let c = start.col as i64 + dc as i64 * i as i64;
    if r < 0 || r >= height as i64 || c < 0 || c >= width as i64 {
        return None;
    }
    Some(Cell::new(r as usize, c as usize))
}

/// Last cell of a run of `len` letters, or `None` if the run leaves the grid.
///
/// `len == 0` has no last cell.
#[inline]
pub fn run_end(start: Cell, dir: Direction, len: usize, width: usize, height: usize) -> Option<Cell> {
    if len == 0 {
        return None;
    }
    step(start, dir, len - 1, width, height)
}

/// All cells a run of `len` letters occupies, or `None` if any falls outside.
pub fn run_cells(
    start: Cell,
    dir: Direction,
    len: usize,
    width: usize,
    height: usize,
) -> Option<Vec<Cell>> {
    // A straight run is in bounds iff both endpoints are.
    step(start, dir, 0, width, height)?;
    run_end(start, dir, len, width, height)?;

    let (dr, dc) = dir.delta();
    let cells = (0..len as i64)
        .map(|i| {
            Cell::new(
                (start.row as i64 + dr as i64 * i) as usize,
                (start.col as i64 + dc as i64 * i) as usize,
            )
        })
        .collect();
    Some(cells)
}
