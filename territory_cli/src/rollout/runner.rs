// territory_cli/src/rollout/runner.rs
#![forbid(unsafe_code)]

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use territory_engine::{Agent, Game};

use super::sinks::{MatchSink, ReportRow};
use super::stats::{FinalReport, MatchStats};

/// Fixed internal cadence for progress-bar live message updates.
/// (No CLI knob on purpose.)
const LIVE_EVERY: u64 = 25;

#[derive(Clone, Debug)]
pub struct RunnerConfig {
    // ---------------- core match loop ----------------
    /// Head-to-head games to play.
    pub games: u64,
    pub rows: usize,
    pub cols: usize,
    /// Turn cap; a game that reaches it is adjudicated on territory.
    pub max_turns: u64,

    /// Used only for reporting.
    pub agent_names: [String; 2],

    // ---------------- output ----------------
    /// 0 = final summary only
    /// 1 = progress bar
    /// 2 = progress bar + periodic table (via sink)
    pub verbosity: u8,

    /// Print a table row every N games (only used when verbosity == 2).
    /// 0 disables table reporting.
    pub report_every: u64,

    // ---------------- rendering ----------------
    /// If Some(ms): render every turn; sleep ms between frames (0 = no sleep).
    pub render_ms: Option<u64>,
}

pub struct Runner {
    cfg: RunnerConfig,
    sink: Box<dyn MatchSink>,
}

impl Runner {
    pub fn new(cfg: RunnerConfig, sink: Box<dyn MatchSink>) -> Self {
        Self { cfg, sink }
    }

    pub fn run(&mut self, agents: &mut [Box<dyn Agent>; 2]) -> Result<FinalReport, String> {
        let cfg = self.cfg.clone();

        // Progress bar is UI only; runner logic does not depend on it.
        let pb = if cfg.verbosity >= 1 {
            let pb = ProgressBar::new(cfg.games);
            pb.set_style(
                ProgressStyle::with_template(
                    "{bar:40.cyan/blue} {pos:>7}/{len:<7}  {percent:>3}%  {elapsed_precise}  {msg}",
                )
                .map_err(|e| e.to_string())?
                .progress_chars("=>-"),
            );
            Some(pb)
        } else {
            None
        };

        let mut stats = MatchStats::new();

        for game_id in 0..cfg.games {
            let mut game = Game::new(cfg.rows, cfg.cols)?;

            if cfg.render_ms.is_some() {
                println!("=== game {game_id} ===");
                print!("{}", game.render_ascii());
            }

            // ------------------------------------------------------------
            // One game: the driver asks the player-to-move's agent for a
            // decision and applies it via the engine.
            // ------------------------------------------------------------
            while !game.game_over && game.turns < cfg.max_turns {
                let mover = game.ptm.index();
                let dir = agents[mover].decide(&game);
                let r = game.advance(dir);
                stats.on_turn(mover, u64::from(r.claimed));

                if let Some(ms) = cfg.render_ms {
                    println!("turn={} mover={} dir={:?}", game.turns, mover, dir);
                    print!("{}", game.render_ascii());
                    if ms > 0 {
                        std::thread::sleep(Duration::from_millis(ms));
                    }
                }
            }

            let by_elimination = game.winner.is_some();
            let winner = game.winner.or_else(|| game.leader());
            stats.on_game_end(winner, by_elimination, game.turns, game.territory_counts());

            // Reset hook: both agents clear their per-game state.
            for agent in agents.iter_mut() {
                agent.cleanup();
            }

            if let Some(ref pb) = pb {
                pb.inc(1);
            }

            // ------------------------------------------------------------
            // Periodic table report (verbosity == 2 only).
            // ------------------------------------------------------------
            if cfg.verbosity == 2
                && cfg.report_every > 0
                && (stats.games_finished % cfg.report_every == 0)
            {
                let row = ReportRow {
                    game: stats.games_finished,
                    games_total: cfg.games,
                    gps: stats.games_per_sec(),
                    wins: stats.wins,
                    draws: stats.draws,
                    eliminations: stats.eliminations,
                    avg_game_len: stats.avg_game_len(),
                    longest_game: stats.longest_game,
                    avg_territory: [stats.avg_territory(0), stats.avg_territory(1)],
                };
                self.sink.on_report_row(&row, pb.as_ref());
            }

            // ------------------------------------------------------------
            // Live progress message cadence (fixed internal cadence).
            // ------------------------------------------------------------
            if cfg.verbosity >= 1 && (stats.games_finished % LIVE_EVERY == 0) {
                if let Some(ref pb) = pb {
                    pb.set_message(stats.live_msg(&cfg.agent_names));
                }
            }
        }

        if let Some(pb) = pb {
            pb.finish_with_message("done");
        }

        Ok(stats.final_report(&cfg.agent_names))
    }
}
