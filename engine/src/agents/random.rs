// engine/src/agents/random.rs
#![forbid(unsafe_code)]

use rand::prelude::*;

use crate::agents::{Agent, DEFAULT_ACTION};
use crate::engine::{Direction, Game};

/// Baseline: a uniformly random safe action each turn.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn decide(&mut self, game: &Game) -> Direction {
        let loc = game.player_locs[game.ptm.index()];
        let safe = game.board.safe_actions(loc);
        safe.choose(&mut self.rng).copied().unwrap_or(DEFAULT_ACTION)
    }

    fn cleanup(&mut self) {}
}
