// territory_cli/src/main.rs
#![forbid(unsafe_code)]

mod rollout;

use clap::Parser;

use crate::rollout::{MatchSink, NoopSink, Runner, RunnerConfig, TableSink};
use territory_engine::engine::DEFAULT_MAX_TURNS;
use territory_engine::{Agent, PursuitAgent, RandomAgent, SpaceGrabAgent};

#[derive(Parser, Debug)]
#[command(name = "territory_cli")]
struct Args {
    // ---------------- match sizing ----------------
    /// Head-to-head games to play.
    #[arg(long, default_value_t = 200)]
    games: u64,

    /// Base RNG seed for stochastic agents. If omitted, a fixed default is used.
    #[arg(long)]
    seed: Option<u64>,

    /// Player one's agent: pursuit | spacegrab | random
    #[arg(long, default_value = "pursuit")]
    agent_one: String,

    /// Player two's agent: pursuit | spacegrab | random
    #[arg(long, default_value = "spacegrab")]
    agent_two: String,

    // ---------------- board ----------------
    #[arg(long, default_value_t = 15)]
    rows: usize,

    #[arg(long, default_value_t = 15)]
    cols: usize,

    /// Turn cap per game; stalled games are adjudicated on territory.
    #[arg(long, default_value_t = DEFAULT_MAX_TURNS)]
    max_turns: u64,

    // ---------------- visualization ----------------
    /**
     * Render the board as ASCII every turn; value is sleep in ms (e.g. 30).
     * Omit to disable rendering.
     */
    #[arg(long, value_name = "ms")]
    render: Option<u64>,

    // ---------------- output / reporting ----------------
    /// Verbosity: 0=silent (final summary only), 1=progress bar, 2=progress bar + periodic table.
    #[arg(long, default_value_t = 1)]
    verbosity: u8,

    /// Print a table row every N games (only used with --verbosity 2).
    #[arg(long, default_value_t = 50)]
    report_every: u64,
}

fn agent_from_name(name: &str, seed: u64) -> Box<dyn Agent> {
    match name {
        "pursuit" | "attack" => Box::new(PursuitAgent::new()),
        "spacegrab" | "safe" => Box::new(SpaceGrabAgent::new(seed)),
        _ => Box::new(RandomAgent::new(seed.wrapping_add(999))),
    }
}

fn main() {
    let args = Args::parse();

    let base_seed = args.seed.unwrap_or(12345);

    // Agents are boxed so the CLI can switch implementations at runtime.
    // The two sides get decorrelated seed streams from the same base.
    let mut agents: [Box<dyn Agent>; 2] = [
        agent_from_name(&args.agent_one, base_seed),
        agent_from_name(&args.agent_two, base_seed ^ 0x5DEE_CE66_D1CE_5EED),
    ];

    // Match configuration (data only; no logic).
    let cfg = RunnerConfig {
        games: args.games,
        rows: args.rows,
        cols: args.cols,
        max_turns: args.max_turns,

        agent_names: [args.agent_one.clone(), args.agent_two.clone()],

        verbosity: args.verbosity,
        report_every: args.report_every,

        render_ms: args.render,
    };

    // Reporting sink:
    // - verbosity 2 => periodic table (unless report_every == 0)
    // - otherwise   => no-op
    let sink: Box<dyn MatchSink> = if cfg.verbosity >= 2 && cfg.report_every > 0 {
        Box::new(TableSink::new(20))
    } else {
        Box::new(NoopSink)
    };

    let mut runner = Runner::new(cfg, sink);
    let report = match runner.run(&mut agents) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(2);
        }
    };

    // Final one-line summary (useful for logs / grep).
    println!(
        "DONE: agents={}:{} games={} wins={}:{} draws={} eliminations={} avg_game_len={:.2} longest_game={} avg_territory={:.1}:{:.1} total_claims={}:{} elapsed={:.3}s games/s={:.1}",
        report.agents[0],
        report.agents[1],
        report.games_finished,
        report.wins[0],
        report.wins[1],
        report.draws,
        report.eliminations,
        report.avg_game_len,
        report.longest_game,
        report.avg_territory[0],
        report.avg_territory[1],
        report.total_claims[0],
        report.total_claims[1],
        report.elapsed_s,
        report.games_per_s,
    );
}
