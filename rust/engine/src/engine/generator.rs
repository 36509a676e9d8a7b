// rust/engine/src/engine/generator.rs
#![forbid(unsafe_code)]

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use crate::engine::config::GridConfig;
use crate::engine::constants::FILL_SEED_SALT;
use crate::engine::geometry::{Cell, run_end};
use crate::engine::grid::LetterGrid;
use crate::engine::puzzle::{PlacedWord, Puzzle};
use crate::engine::words::NormalizedWord;

/// Generate a puzzle with an entropy-seeded RNG.
pub fn generate<S: AsRef<str>>(words: &[S], config: &GridConfig) -> Puzzle {
    let mut rng = StdRng::from_entropy();
    generate_with_rng(words, config, &mut rng)
}

/// Deterministic w.r.t. (words, config, seed).
pub fn generate_seeded<S: AsRef<str>>(words: &[S], config: &GridConfig, seed: u64) -> Puzzle {
    let mut rng = StdRng::seed_from_u64(seed);
    generate_with_rng(words, config, &mut rng)
}

/// Place `words` into a fresh grid, then fill the remaining cells.
///
/// Engine semantics:
/// - Words are uppercased, then ordered per `config.order()`.
/// - Each word gets up to `config.retry_budget()` random (direction, start) candidates;
///   the first that fits is committed. Crossing a cell that already holds the same
///   letter is allowed.
/// - A word with no fitting candidate is dropped: no letters are written and it only
///   shows up in `Puzzle::dropped`.
/// - Filler letters come from a stream derived from `rng` after placement, so they
///   never influence where words land.
pub fn generate_with_rng<S, R>(words: &[S], config: &GridConfig, rng: &mut R) -> Puzzle
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let mut entries: Vec<NormalizedWord> =
        words.iter().map(|w| NormalizedWord::new(w.as_ref())).collect();
    config.order().arrange(&mut entries, rng);

    let mut grid = LetterGrid::new(config.width(), config.height());
    let mut placed = Vec::with_capacity(entries.len());
    let mut dropped = Vec::new();

    for entry in entries {
        match try_place(&mut grid, &entry, config, rng) {
            Some(p) => {
                trace!(
                    "placed {} {} ({},{})->({},{})",
                    p.word,
                    p.direction.name(),
                    p.start.row,
                    p.start.col,
                    p.end.row,
                    p.end.col
                );
                placed.push(p);
            }
            None => {
                debug!(
                    "dropped {:?} (len={} grid={}x{} budget={})",
                    entry.text,
                    entry.len(),
                    config.width(),
                    config.height(),
                    config.retry_budget()
                );
                dropped.push(entry.text);
            }
        }
    }

    let empty = grid.empty_count();
    let mut fill_rng = StdRng::seed_from_u64(rng.next_u64() ^ FILL_SEED_SALT);
    let grid = grid.fill_empty(&mut fill_rng);

    debug!(
        "generated {}x{} grid: placed={} dropped={} filler_cells={}",
        grid.width(),
        grid.height(),
        placed.len(),
        dropped.len(),
        empty
    );

    Puzzle {
        grid,
        placed,
        dropped,
    }
}

/// Bounded random search for one word. Commits and returns the placement on success.
fn try_place<R: Rng + ?Sized>(
    grid: &mut LetterGrid,
    entry: &NormalizedWord,
    config: &GridConfig,
    rng: &mut R,
) -> Option<PlacedWord> {
    let (w, h) = (config.width(), config.height());
    let len = entry.len();

    // No enabled direction can hold it: every attempt would fail.
    if len == 0 || len > config.max_word_len() {
        return None;
    }

    for _ in 0..config.retry_budget() {
        let dir = config.directions().choose(rng);
        let start = Cell::new(rng.gen_range(0..h), rng.gen_range(0..w));

        let Some(end) = run_end(start, dir, len, w, h) else {
            continue;
        };
        if !grid.fits_word(&entry.letters, start, dir) {
            continue;
        }

        grid.place_word(&entry.letters, start, dir);
        return Some(PlacedWord {
            word: entry.text.clone(),
            direction: dir,
            start,
            end,
        });
    }

    None
}

/// Batch generator: one config, one seeded stream, successive puzzles.
#[derive(Clone, Debug)]
pub struct PuzzleGenerator {
    config: GridConfig,
    rng: StdRng,
    generated: u64,
}

impl PuzzleGenerator {
    pub fn new(config: GridConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
            generated: 0,
        }
    }

    pub fn from_entropy(config: GridConfig) -> Self {
        Self {
            config,
            rng: StdRng::from_entropy(),
            generated: 0,
        }
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Puzzles produced so far.
    pub fn generated(&self) -> u64 {
        self.generated
    }

    pub fn generate<S: AsRef<str>>(&mut self, words: &[S]) -> Puzzle {
        self.generated += 1;
        generate_with_rng(words, &self.config, &mut self.rng)
    }
}
