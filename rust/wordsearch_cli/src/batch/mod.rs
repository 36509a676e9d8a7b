// rust/wordsearch_cli/src/batch/mod.rs
#![forbid(unsafe_code)]

pub mod runner;
pub mod sinks;
pub mod stats;

pub use runner::{OutputFormat, Runner, RunnerConfig};
pub use sinks::{NoopSink, ReportSink, TableSink};
