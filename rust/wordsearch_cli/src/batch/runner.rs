// rust/wordsearch_cli/src/batch/runner.rs
#![forbid(unsafe_code)]

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use serde::Serialize;

use wordsearch_engine::{GridConfig, Puzzle, PuzzleGenerator};

use super::sinks::{ReportRow, ReportSink};
use super::stats::{BatchStats, FinalReport};

/// Fixed internal cadence for progress-bar live message updates.
const LIVE_EVERY: u64 = 50;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OutputFormat {
    /// ASCII grid plus placement list.
    Text,
    /// One JSON object per line.
    Json,
    /// Statistics only.
    None,
}

impl OutputFormat {
    pub fn from_cli(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" | "jsonl" => OutputFormat::Json,
            "none" | "quiet" => OutputFormat::None,
            _ => OutputFormat::Text,
        }
    }
}

#[derive(Clone, Debug)]
pub struct RunnerConfig {
    // ---------------- generation ----------------
    pub grid: GridConfig,
    /// Number of puzzles to generate.
    pub count: u64,
    /// Seed for the generator stream. `None` => entropy.
    pub seed: Option<u64>,

    /// Used only for the final report string.
    pub preset_name: String,

    // ---------------- output ----------------
    pub format: OutputFormat,

    /// 0 = final summary only
    /// 1 = progress bar
    /// 2 = progress bar + periodic table (via sink)
    pub verbosity: u8,

    /// Print a table row every N puzzles (only used when verbosity == 2).
    /// 0 disables table reporting.
    pub report_every: u64,
}

#[derive(Serialize)]
struct PuzzleLine<'a> {
    index: u64,
    #[serde(flatten)]
    puzzle: &'a Puzzle,
}

pub struct Runner {
    cfg: RunnerConfig,
    sink: Box<dyn ReportSink>,
}

impl Runner {
    pub fn new(cfg: RunnerConfig, sink: Box<dyn ReportSink>) -> Self {
        Self { cfg, sink }
    }

    pub fn run(&mut self, words: &[String]) -> Result<FinalReport> {
        let cfg = self.cfg.clone();

        // Progress bar is UI only; runner logic does not depend on it.
        let pb = if cfg.verbosity >= 1 {
            let pb = ProgressBar::new(cfg.count);
            pb.set_style(
                ProgressStyle::with_template(
                    "{bar:40.cyan/blue} {pos:>9}/{len:<9}  {percent:>3}%  {elapsed_precise}  {msg}",
                )?
                .progress_chars("=>-"),
            );
            Some(pb)
        } else {
            None
        };

        let mut generator = match cfg.seed {
            Some(seed) => PuzzleGenerator::new(cfg.grid.clone(), seed),
            None => PuzzleGenerator::from_entropy(cfg.grid.clone()),
        };
        info!(
            "generating {} puzzle(s) {}x{} from {} word(s), seed={:?}",
            cfg.count,
            cfg.grid.width(),
            cfg.grid.height(),
            words.len(),
            cfg.seed
        );

        let mut stats = BatchStats::new();

        while stats.puzzles_done < cfg.count {
            let index = stats.puzzles_done;
            let puzzle = generator.generate(words);
            stats.on_puzzle(&puzzle);

            if let Some(ref pb) = pb {
                pb.inc(1);
            }

            // Output is a separate axis from verbosity.
            match cfg.format {
                OutputFormat::Text => {
                    let text = format!("=== puzzle {index} ===\n{}", puzzle.render_ascii());
                    emit(pb.as_ref(), &text);
                }
                OutputFormat::Json => {
                    let line = serde_json::to_string(&PuzzleLine {
                        index,
                        puzzle: &puzzle,
                    })?;
                    emit(pb.as_ref(), &format!("{line}\n"));
                }
                OutputFormat::None => {}
            }

            // Periodic table report (verbosity == 2 only).
            if cfg.verbosity == 2
                && cfg.report_every > 0
                && (stats.puzzles_done % cfg.report_every == 0)
            {
                let row = ReportRow {
                    puzzle: stats.puzzles_done,
                    puzzles_total: cfg.count,
                    pps: stats.puzzles_per_sec(),
                    words_attempted: stats.words_attempted,
                    placement_rate: stats.placement_rate(),
                    fully_placed_rate: stats.fully_placed_rate(),
                    avg_dropped: stats.avg_dropped(),
                    avg_coverage: stats.avg_coverage(),
                };
                self.sink.on_report_row(&row, pb.as_ref());
            }

            if stats.puzzles_done % LIVE_EVERY == 0 {
                if let Some(ref pb) = pb {
                    pb.set_message(stats.live_msg());
                }
            }
        }

        if let Some(pb) = pb {
            pb.finish_with_message("done");
        }

        Ok(stats.final_report(&cfg.preset_name, cfg.grid.width(), cfg.grid.height()))
    }
}

/// Print without tearing the progress bar.
fn emit(pb: Option<&ProgressBar>, text: &str) {
    match pb {
        Some(pb) => pb.suspend(|| print!("{text}")),
        None => print!("{text}"),
    }
}
