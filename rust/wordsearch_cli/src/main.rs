// rust/wordsearch_cli/src/main.rs
#![forbid(unsafe_code)]

mod batch;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, warn};

use crate::batch::{NoopSink, OutputFormat, ReportSink, Runner, RunnerConfig, TableSink};
use wordsearch_engine::{
    DEVOTIONAL_WORDS, GridConfig, GridConfigSpec, normalize_word, parse_word_list,
};

#[derive(Parser, Debug)]
#[command(name = "wordsearch_cli")]
struct Args {
    // ---------------- grid ----------------
    /// Preset: classic (4 directions, longest first, 100 tries) | simple (h/v, shuffled, 50 tries)
    #[arg(long, default_value = "classic")]
    preset: String,

    /// TOML grid config file. Overrides the preset; explicit flags override the file.
    #[arg(long, value_name = "path")]
    config: Option<PathBuf>,

    /// Grid width in cells (default 12 unless set by --config).
    #[arg(long)]
    width: Option<usize>,

    /// Grid height in cells (default 12 unless set by --config).
    #[arg(long)]
    height: Option<usize>,

    /// Comma-separated directions: horizontal,vertical,diagonal-down,diagonal-up
    #[arg(long, value_delimiter = ',')]
    directions: Option<Vec<String>>,

    /// Word order: length | shuffle
    #[arg(long)]
    order: Option<String>,

    /// Placement attempts per word before it is dropped.
    #[arg(long)]
    retries: Option<u32>,

    // ---------------- words ----------------
    /// Comma-separated words. Defaults to the built-in devotional list.
    #[arg(long, value_delimiter = ',', conflicts_with = "words_file")]
    words: Option<Vec<String>>,

    /// Word-list file: one or more comma-separated words per line, `#` comments.
    #[arg(long, value_name = "path")]
    words_file: Option<PathBuf>,

    // ---------------- batch ----------------
    /// Number of puzzles to generate.
    #[arg(long, default_value_t = 1)]
    count: u64,

    /// Generator seed. If omitted, puzzles are seeded from entropy.
    #[arg(long)]
    seed: Option<u64>,

    // ---------------- output / reporting ----------------
    /// Puzzle output: text | json | none
    #[arg(long, default_value = "text")]
    format: String,

    /// Verbosity: 0=silent (final summary only), 1=progress bar, 2=progress bar + periodic table.
    #[arg(long, default_value_t = 0)]
    verbosity: u8,

    /// Print a table row every N puzzles (only used with --verbosity 2).
    #[arg(long, default_value_t = 100)]
    report_every: u64,
}

const DEFAULT_SIDE: usize = 12;

fn resolve_grid_config(args: &Args) -> Result<GridConfig> {
    let mut spec: GridConfigSpec = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))?
        }
        None => {
            let w = args.width.unwrap_or(DEFAULT_SIDE);
            let h = args.height.unwrap_or(DEFAULT_SIDE);
            let preset = match args.preset.to_lowercase().as_str() {
                "simple" => GridConfig::simple(w, h)?,
                "classic" => GridConfig::classic(w, h)?,
                other => {
                    warn!("unknown preset {other:?}, using classic");
                    GridConfig::classic(w, h)?
                }
            };
            preset.to_spec()
        }
    };

    if let Some(w) = args.width {
        spec.width = w;
    }
    if let Some(h) = args.height {
        spec.height = h;
    }
    if let Some(dirs) = &args.directions {
        spec.directions = dirs.clone();
    }
    if let Some(order) = &args.order {
        spec.order = Some(order.clone());
    }
    if let Some(retries) = args.retries {
        spec.retry_budget = Some(retries);
    }

    debug!("grid config: {spec:?}");
    GridConfig::try_from(spec).context("invalid grid configuration")
}

fn resolve_words(args: &Args) -> Result<Vec<String>> {
    if let Some(words) = &args.words {
        return Ok(words
            .iter()
            .map(|w| w.trim().to_string())
            .filter(|w| !w.is_empty())
            .collect());
    }
    if let Some(path) = &args.words_file {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading word list {}", path.display()))?;
        return Ok(parse_word_list(&text));
    }
    Ok(DEVOTIONAL_WORDS.iter().map(|w| w.to_string()).collect())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let grid = resolve_grid_config(&args)?;
    let words = resolve_words(&args)?;
    if words.is_empty() {
        warn!("word list is empty; puzzles will be filler only");
    }
    if let Some(longest) = words.iter().map(|w| normalize_word(w).len()).max() {
        if longest > grid.max_word_len() {
            warn!(
                "longest word has {} letters but the grid fits at most {}; it will be dropped",
                longest,
                grid.max_word_len()
            );
        }
    }

    let cfg = RunnerConfig {
        grid,
        count: args.count,
        seed: args.seed,
        preset_name: match &args.config {
            Some(path) => path.display().to_string(),
            None => args.preset.clone(),
        },
        format: OutputFormat::from_cli(&args.format),
        verbosity: args.verbosity,
        report_every: args.report_every,
    };

    // Reporting sink:
    // - verbosity 2 => periodic table (unless report_every == 0)
    // - otherwise   => no-op
    let sink: Box<dyn ReportSink> = if cfg.verbosity >= 2 && cfg.report_every > 0 {
        Box::new(TableSink::new(20))
    } else {
        Box::new(NoopSink)
    };

    let mut runner = Runner::new(cfg, sink);
    let report = runner.run(&words)?;

    let top_dropped = report
        .top_dropped
        .iter()
        .map(|(w, n)| format!("{w}x{n}"))
        .collect::<Vec<_>>()
        .join(",");

    // Final one-line summary (useful for logs / grep).
    eprintln!(
        "DONE: config={} grid={}x{} puzzles={} elapsed={:.3}s puzzles/s={:.1} words={} placed={} dropped={} placed%={:.2} fully_placed={} avg_coverage={:.3} top_dropped=[{}]",
        report.preset,
        report.width,
        report.height,
        report.puzzles,
        report.elapsed_s,
        report.puzzles_per_s,
        report.words_attempted,
        report.words_placed,
        report.words_dropped,
        report.placement_rate * 100.0,
        report.fully_placed,
        report.avg_coverage,
        top_dropped,
    );

    Ok(())
}
