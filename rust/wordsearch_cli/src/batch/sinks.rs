// rust/wordsearch_cli/src/batch/sinks.rs
#![forbid(unsafe_code)]

/// One periodic row emitted by the runner.
///
/// Transport struct: runner/stats compute fields, sinks only format/emit.
#[derive(Clone, Debug)]
pub struct ReportRow {
    pub puzzle: u64,
    pub puzzles_total: u64,

    pub pps: f64,

    pub words_attempted: u64,
    pub placement_rate: f64,
    pub fully_placed_rate: f64,

    /// Averages over all puzzles so far.
    pub avg_dropped: f64,
    pub avg_coverage: f64,
}

/// Sink interface for periodic reporting.
pub trait ReportSink {
    fn on_report_row(&mut self, row: &ReportRow, pb: Option<&indicatif::ProgressBar>);
}

/// Default sink: does nothing.
#[derive(Default)]
pub struct NoopSink;

impl ReportSink for NoopSink {
    fn on_report_row(&mut self, _row: &ReportRow, _pb: Option<&indicatif::ProgressBar>) {}
}

/// Column titles and right-aligned widths, in print order.
const COLUMNS: [(&str, usize); 7] = [
    ("puzzle/total", 21),
    ("pps", 9),
    ("words", 10),
    ("placed%", 8),
    ("full%", 8),
    ("avgDrop", 8),
    ("avgCov", 8),
];

/// Periodic table on stdout, header repeated every `header_every` rows.
pub struct TableSink {
    header_every: u64,
    rows_printed: u64,
}

impl TableSink {
    pub fn new(header_every: u64) -> Self {
        Self {
            header_every: header_every.max(1),
            rows_printed: 0,
        }
    }

    fn align<I: IntoIterator<Item = String>>(cells: I) -> String {
        COLUMNS
            .iter()
            .zip(cells)
            .map(|(&(_, width), cell)| format!("{cell:>width$}"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn cells(r: &ReportRow) -> [String; 7] {
        [
            format!("{}/{}", r.puzzle, r.puzzles_total),
            format!("{:.1}", r.pps),
            r.words_attempted.to_string(),
            format!("{:.2}", r.placement_rate * 100.0),
            format!("{:.2}", r.fully_placed_rate * 100.0),
            format!("{:.3}", r.avg_dropped),
            format!("{:.3}", r.avg_coverage),
        ]
    }
}

impl ReportSink for TableSink {
    fn on_report_row(&mut self, row: &ReportRow, pb: Option<&indicatif::ProgressBar>) {
        let mut out = String::new();
        if self.rows_printed % self.header_every == 0 {
            let header = Self::align(COLUMNS.iter().map(|(title, _)| title.to_string()));
            out.push_str(&format!("{header}\n{}\n", "-".repeat(header.len())));
        }
        out.push_str(&Self::align(Self::cells(row)));
        self.rows_printed += 1;

        // Print through the bar when one is active.
        match pb {
            Some(pb) => pb.println(out),
            None => println!("{out}"),
        }
    }
}
