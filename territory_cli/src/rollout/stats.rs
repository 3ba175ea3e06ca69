// territory_cli/src/rollout/stats.rs
#![forbid(unsafe_code)]

use std::time::Instant;

use territory_engine::Player;

#[derive(Clone, Debug)]
pub struct MatchStats {
    pub games_finished: u64,

    pub wins: [u64; 2],
    pub draws: u64,
    /// Games decided by elimination; the rest hit the turn cap.
    pub eliminations: u64,

    pub turns_total: u64,
    pub longest_game: u64,

    pub territory_sum: [u64; 2],
    pub claims_sum: [u64; 2],

    t0: Instant,
}

impl MatchStats {
    pub fn new() -> Self {
        Self {
            games_finished: 0,
            wins: [0, 0],
            draws: 0,
            eliminations: 0,
            turns_total: 0,
            longest_game: 0,
            territory_sum: [0, 0],
            claims_sum: [0, 0],
            t0: Instant::now(),
        }
    }

    /// Call once per resolved turn.
    pub fn on_turn(&mut self, mover_idx: usize, claimed: u64) {
        self.claims_sum[mover_idx] += claimed;
    }

    /// Call when a game ends (elimination or turn-cap adjudication).
    pub fn on_game_end(
        &mut self,
        winner: Option<Player>,
        by_elimination: bool,
        turns: u64,
        territory: [usize; 2],
    ) {
        self.games_finished += 1;
        match winner {
            Some(p) => self.wins[p.index()] += 1,
            None => self.draws += 1,
        }
        if by_elimination {
            self.eliminations += 1;
        }
        self.turns_total += turns;
        self.longest_game = self.longest_game.max(turns);
        self.territory_sum[0] += territory[0] as u64;
        self.territory_sum[1] += territory[1] as u64;
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.t0.elapsed().as_secs_f64()
    }

    pub fn games_per_sec(&self) -> f64 {
        let dt = self.elapsed_secs();
        if dt > 0.0 {
            self.games_finished as f64 / dt
        } else {
            0.0
        }
    }

    pub fn avg_game_len(&self) -> f64 {
        if self.games_finished > 0 {
            self.turns_total as f64 / self.games_finished as f64
        } else {
            0.0
        }
    }

    pub fn avg_territory(&self, idx: usize) -> f64 {
        if self.games_finished > 0 {
            self.territory_sum[idx] as f64 / self.games_finished as f64
        } else {
            0.0
        }
    }

    pub fn live_msg(&self, agent_names: &[String; 2]) -> String {
        format!(
            "{} vs {} gps={:.1} w={}:{} d={} elim={} avg_len={:.1} max_len={} terr={:.1}/{:.1}",
            agent_names[0],
            agent_names[1],
            self.games_per_sec(),
            self.wins[0],
            self.wins[1],
            self.draws,
            self.eliminations,
            self.avg_game_len(),
            self.longest_game,
            self.avg_territory(0),
            self.avg_territory(1),
        )
    }

    pub fn final_report(&self, agent_names: &[String; 2]) -> FinalReport {
        FinalReport {
            agents: agent_names.clone(),
            games_finished: self.games_finished,
            wins: self.wins,
            draws: self.draws,
            eliminations: self.eliminations,
            avg_game_len: self.avg_game_len(),
            longest_game: self.longest_game,
            avg_territory: [self.avg_territory(0), self.avg_territory(1)],
            total_claims: self.claims_sum,
            elapsed_s: self.elapsed_secs(),
            games_per_s: self.games_per_sec(),
        }
    }
}

/// Stable end-of-run summary struct.
#[derive(Clone, Debug)]
pub struct FinalReport {
    pub agents: [String; 2],

    pub games_finished: u64,
    pub wins: [u64; 2],
    pub draws: u64,
    pub eliminations: u64,

    pub avg_game_len: f64,
    pub longest_game: u64,

    pub avg_territory: [f64; 2],
    pub total_claims: [u64; 2],

    pub elapsed_s: f64,
    pub games_per_s: f64,
}
