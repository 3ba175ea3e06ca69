// territory_cli/src/rollout/sinks.rs
#![forbid(unsafe_code)]

/// One periodic row emitted by the runner.
///
/// Transport struct: runner/stats compute fields, sinks only format/emit.
#[derive(Clone, Debug)]
pub struct ReportRow {
    pub game: u64,
    pub games_total: u64,

    pub gps: f64,

    pub wins: [u64; 2],
    pub draws: u64,
    /// Games decided by elimination (the rest were adjudicated on territory).
    pub eliminations: u64,

    pub avg_game_len: f64,
    pub longest_game: u64,

    /// Average final permanent-cell counts, per player.
    pub avg_territory: [f64; 2],
}

/// Sink interface for periodic reporting (table/logging/dataset emission later).
pub trait MatchSink {
    fn on_report_row(&mut self, row: &ReportRow, pb: Option<&indicatif::ProgressBar>);
}

/// Default sink: does nothing.
#[derive(Default)]
pub struct NoopSink;

impl MatchSink for NoopSink {
    fn on_report_row(&mut self, _row: &ReportRow, _pb: Option<&indicatif::ProgressBar>) {}
}

/// Human-readable periodic table sink.
///
/// Cadence (every N games) is handled by Runner. This sink prints whenever called.
pub struct TableSink {
    header_every: u64,
    rows_printed: u64,
}

impl TableSink {
    const DEFAULT_HEADER_EVERY: u64 = 20;

    /// If `header_every == 0`, a reasonable default is used.
    pub fn new(header_every: u64) -> Self {
        Self {
            header_every: if header_every == 0 {
                Self::DEFAULT_HEADER_EVERY
            } else {
                header_every
            },
            rows_printed: 0,
        }
    }

    fn header_line(&self) -> String {
        // Note: keep widths aligned with row_line() below.
        format!(
            "{:>21} {:>9} {:>7} {:>7} {:>7} {:>7} {:>9} {:>9} {:>9} {:>9}",
            "game/total",
            "gps",
            "wins1",
            "wins2",
            "draws",
            "elims",
            "avg_len",
            "max_len",
            "terr1",
            "terr2",
        )
    }

    fn sep_line(&self) -> String {
        "-".repeat(self.header_line().len())
    }

    fn row_line(&self, r: &ReportRow) -> String {
        format!(
            "{:>10}/{:<10} {:>9.1} {:>7} {:>7} {:>7} {:>7} {:>9.1} {:>9} {:>9.1} {:>9.1}",
            r.game,
            r.games_total,
            r.gps,
            r.wins[0],
            r.wins[1],
            r.draws,
            r.eliminations,
            r.avg_game_len,
            r.longest_game,
            r.avg_territory[0],
            r.avg_territory[1],
        )
    }
}

impl MatchSink for TableSink {
    fn on_report_row(&mut self, row: &ReportRow, pb: Option<&indicatif::ProgressBar>) {
        let mut lines: Vec<String> = Vec::new();

        if self.rows_printed == 0 || (self.rows_printed % self.header_every == 0) {
            lines.push(self.header_line());
            lines.push(self.sep_line());
        }

        lines.push(self.row_line(row));
        self.rows_printed += 1;

        if let Some(pb) = pb {
            for l in lines {
                pb.println(l);
            }
        } else {
            for l in lines {
                println!("{l}");
            }
        }
    }
}
