// rust/engine/src/engine/grid.rs
#![forbid(unsafe_code)]

use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::engine::constants::{ALPHABET, filler_letter};
use crate::engine::direction::Direction;
use crate::engine::geometry::{Cell, run_cells};
use crate::error::GridError;

/// Grid under construction: `None` marks a cell no word has claimed yet.
#[derive(Clone, Debug)]
pub struct LetterGrid {
    width: usize,
    height: usize,
    cells: Vec<Option<char>>,
}

impl LetterGrid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    pub fn get(&self, cell: Cell) -> Option<char> {
        if cell.row >= self.height || cell.col >= self.width {
            return None;
        }
        self.cells[self.idx(cell.row, cell.col)]
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// True iff every letter lands inside the grid on a cell that is either
    /// unclaimed or already holds that same letter.
    pub fn fits_word(&self, letters: &[char], start: Cell, dir: Direction) -> bool {
        let (dr, dc) = dir.delta();
        for (i, &ch) in letters.iter().enumerate() {
            let r = start.row as i64 + dr as i64 * i as i64;
            let c = start.col as i64 + dc as i64 * i as i64;
            if r < 0 || r >= self.height as i64 || c < 0 || c >= self.width as i64 {
                return false;
            }
            if let Some(existing) = self.cells[self.idx(r as usize, c as usize)] {
                if existing != ch {
                    return false;
                }
            }
        }
        true
    }

    /// Write `letters` along the run. Caller must have checked `fits_word`.
    pub fn place_word(&mut self, letters: &[char], start: Cell, dir: Direction) {
        debug_assert!(self.fits_word(letters, start, dir));

        let (dr, dc) = dir.delta();
        for (i, &ch) in letters.iter().enumerate() {
            let r = (start.row as i64 + dr as i64 * i as i64) as usize;
            let c = (start.col as i64 + dc as i64 * i as i64) as usize;
            let idx = self.idx(r, c);
            self.cells[idx] = Some(ch);
        }
    }

    /// Fill every unclaimed cell with a uniform letter from `ALPHABET`.
    pub fn fill_empty<R: Rng + ?Sized>(self, rng: &mut R) -> Grid {
        let cells = self
            .cells
            .into_iter()
            .map(|c| c.unwrap_or_else(|| filler_letter(rng.gen_range(0..ALPHABET.len()))))
            .collect();
        Grid {
            width: self.width,
            height: self.height,
            cells,
        }
    }
}

/// A finished puzzle grid: `height` rows of `width` letters, no empty cells.
///
/// Serialized as a list of row strings; decoding rejects ragged rows and any
/// cell outside `A..=Z`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(into = "Vec<String>", try_from = "Vec<String>")]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl Grid {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        if row >= self.height || col >= self.width {
            return None;
        }
        Some(self.cells[row * self.width + col])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        // `chunks` rejects a zero chunk size; a zero-width grid has no letters anyway.
        self.cells.chunks(self.width.max(1)).take(self.height)
    }

    pub fn to_rows(&self) -> Vec<Vec<char>> {
        self.rows().map(<[char]>::to_vec).collect()
    }

    pub fn row_string(&self, row: usize) -> Option<String> {
        if row >= self.height {
            return None;
        }
        let start = row * self.width;
        Some(self.cells[start..start + self.width].iter().collect())
    }

    /// Letters along a straight run, or `None` if the run leaves the grid.
    pub fn read_run(&self, start: Cell, dir: Direction, len: usize) -> Option<String> {
        let cells = run_cells(start, dir, len, self.width, self.height)?;
        Some(
            cells
                .into_iter()
                .map(|c| self.cells[c.row * self.width + c.col])
                .collect(),
        )
    }

    pub fn render_ascii(&self) -> String {
        let inner = self.width * 2 + 1;
        let border = format!("+{}+\n", "-".repeat(inner));

        let mut s = String::with_capacity((inner + 3) * (self.height + 2));
        s.push_str(&border);
        for row in self.rows() {
            s.push('|');
            for &ch in row {
                s.push(' ');
                s.push(ch);
            }
            s.push_str(" |\n");
        }
        s.push_str(&border);
        s
    }
}

impl From<Grid> for Vec<String> {
    fn from(g: Grid) -> Self {
        (0..g.height).filter_map(|r| g.row_string(r)).collect()
    }
}

impl TryFrom<Vec<String>> for Grid {
    type Error = GridError;

    fn try_from(rows: Vec<String>) -> Result<Self, Self::Error> {
        let height = rows.len();
        let width = rows.first().map(|r| r.chars().count()).unwrap_or(0);
        if height == 0 || width == 0 {
            return Err(GridError::Empty);
        }

        let mut cells = Vec::with_capacity(width * height);
        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(GridError::RaggedRow {
                    row,
                    expected: width,
                    found,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                if !ch.is_ascii_uppercase() {
                    return Err(GridError::InvalidCell { row, col, ch });
                }
                cells.push(ch);
            }
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }
}
