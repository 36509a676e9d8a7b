// rust/wordsearch_cli/src/batch/stats.rs
#![forbid(unsafe_code)]

use std::time::Instant;

use rustc_hash::{FxHashMap, FxHashSet};
use wordsearch_engine::Puzzle;

#[derive(Clone, Debug)]
pub struct BatchStats {
    pub puzzles_done: u64,
    pub fully_placed: u64,

    pub words_attempted: u64,
    pub words_placed: u64,
    pub words_dropped: u64,

    /// Sum over puzzles of (cells claimed by words / total cells).
    pub sum_coverage: f64,

    /// How often each (normalized) word was dropped.
    drop_counts: FxHashMap<String, u64>,
    t0: Instant,
}

impl BatchStats {
    pub fn new() -> Self {
        Self {
            puzzles_done: 0,
            fully_placed: 0,
            words_attempted: 0,
            words_placed: 0,
            words_dropped: 0,
            sum_coverage: 0.0,
            drop_counts: FxHashMap::default(),
            t0: Instant::now(),
        }
    }

    /// Call once per generated puzzle.
    pub fn on_puzzle(&mut self, p: &Puzzle) {
        self.puzzles_done += 1;
        if p.all_placed() {
            self.fully_placed += 1;
        }

        self.words_attempted += p.attempted() as u64;
        self.words_placed += p.placed.len() as u64;
        self.words_dropped += p.dropped.len() as u64;

        let claimed: FxHashSet<_> = p.placed.iter().flat_map(|w| w.cells()).collect();
        let total = p.grid.width() * p.grid.height();
        if total > 0 {
            self.sum_coverage += claimed.len() as f64 / total as f64;
        }

        for w in &p.dropped {
            *self.drop_counts.entry(w.clone()).or_insert(0) += 1;
        }
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.t0.elapsed().as_secs_f64()
    }

    pub fn puzzles_per_sec(&self) -> f64 {
        let dt = self.elapsed_secs();
        if dt > 0.0 {
            self.puzzles_done as f64 / dt
        } else {
            0.0
        }
    }

    pub fn placement_rate(&self) -> f64 {
        if self.words_attempted > 0 {
            self.words_placed as f64 / self.words_attempted as f64
        } else {
            1.0
        }
    }

    pub fn fully_placed_rate(&self) -> f64 {
        if self.puzzles_done > 0 {
            self.fully_placed as f64 / self.puzzles_done as f64
        } else {
            0.0
        }
    }

    pub fn avg_dropped(&self) -> f64 {
        if self.puzzles_done > 0 {
            self.words_dropped as f64 / self.puzzles_done as f64
        } else {
            0.0
        }
    }

    pub fn avg_coverage(&self) -> f64 {
        if self.puzzles_done > 0 {
            self.sum_coverage / self.puzzles_done as f64
        } else {
            0.0
        }
    }

    /// Most frequently dropped words, highest count first (ties by word).
    pub fn top_dropped(&self, n: usize) -> Vec<(String, u64)> {
        let mut v: Vec<(String, u64)> = self
            .drop_counts
            .iter()
            .map(|(w, &c)| (w.clone(), c))
            .collect();
        v.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        v.truncate(n);
        v
    }

    pub fn live_msg(&self) -> String {
        format!(
            "pps={:.1} placed={:.1}% full={:.1}% avgDrop={:.2} avgCov={:.3}",
            self.puzzles_per_sec(),
            self.placement_rate() * 100.0,
            self.fully_placed_rate() * 100.0,
            self.avg_dropped(),
            self.avg_coverage(),
        )
    }

    pub fn final_report(&self, preset: &str, width: usize, height: usize) -> FinalReport {
        FinalReport {
            preset: preset.to_string(),
            width,
            height,
            puzzles: self.puzzles_done,
            elapsed_s: self.elapsed_secs(),
            puzzles_per_s: self.puzzles_per_sec(),
            words_attempted: self.words_attempted,
            words_placed: self.words_placed,
            words_dropped: self.words_dropped,
            placement_rate: self.placement_rate(),
            fully_placed: self.fully_placed,
            avg_coverage: self.avg_coverage(),
            top_dropped: self.top_dropped(5),
        }
    }
}

#[derive(Clone, Debug)]
pub struct FinalReport {
    pub preset: String,
    pub width: usize,
    pub height: usize,

    pub puzzles: u64,
    pub elapsed_s: f64,
    pub puzzles_per_s: f64,

    pub words_attempted: u64,
    pub words_placed: u64,
    pub words_dropped: u64,
    pub placement_rate: f64,

    pub fully_placed: u64,
    pub avg_coverage: f64,

    pub top_dropped: Vec<(String, u64)>,
}
