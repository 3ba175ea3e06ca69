// engine/src/agents/pursuit.rs
#![forbid(unsafe_code)]

use crate::agents::{Agent, DEFAULT_ACTION};
use crate::engine::{Cell, Direction, Game, Player, Position};

/// Once any candidate gets this close to the opponent's trail, the scan
/// commits to minimizing trail distance for the rest of the turn.
const TRAIL_CHASE_RADIUS: u32 = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TravelPhase {
    /// Out on a temporary trail; the next turn must reverse.
    OnTrail,
    /// Standing in (or heading back through) permanent territory.
    InTerritory,
}

/**
 * Pursuit strategy.
 *
 * Presses toward the opponent, breaches their temporary trail whenever a
 * single move reaches it, and after every excursion step immediately doubles
 * back so the step converts into claimed ground. The one-step-out,
 * one-step-back oscillation is the engine of its territory growth; the
 * chase heuristics only steer where the oscillation happens.
 */
pub struct PursuitAgent {
    me: Option<Player>,
    phase: Option<TravelPhase>,
    last_move: Option<Direction>,
}

impl PursuitAgent {
    pub fn new() -> Self {
        Self {
            me: None,
            phase: None,
            last_move: None,
        }
    }

    /// Manhattan distance from `from` to the nearest opponent trail cell.
    /// `None` when the opponent has no trail on the board.
    fn trail_distance(game: &Game, from: Position, opponent: Player) -> Option<u32> {
        game.board.min_manhattan_to(from, Cell::Temp(opponent))
    }
}

impl Default for PursuitAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for PursuitAgent {
    fn decide(&mut self, game: &Game) -> Direction {
        let me = *self.me.get_or_insert(game.ptm);
        let opp = me.opponent();
        let loc = game.player_locs[me.index()];
        let opp_loc = game.player_locs[opp.index()];

        let safe = game.board.safe_actions(loc);
        if safe.is_empty() {
            // Forfeit move; the engine settles the outcome.
            return DEFAULT_ACTION;
        }

        let Some(phase) = self.phase else {
            // Opening move: any safe action, recorded as the start of an excursion.
            let first = safe[0];
            self.phase = Some(TravelPhase::OnTrail);
            self.last_move = Some(first);
            return first;
        };

        if phase == TravelPhase::OnTrail {
            // Mandatory return: reverse the excursion step. No other objective
            // is considered this turn, and the move is committed even if the
            // oracle does not currently list it.
            let last = self
                .last_move
                .expect("on-trail phase recorded without a last move");
            let back = last.opposite();
            self.phase = Some(TravelPhase::InTerritory);
            self.last_move = Some(back);
            return back;
        }

        let mut decision = safe[0];
        let mut decision_dest: Option<Position> = None;
        let mut best_opp_dist: Option<u32> = None;
        let mut best_trail_dist: Option<u32> = None;
        let mut chase_trail = false;

        for &dir in &safe {
            let Some(next) = game.board.neighbor(loc, dir) else {
                continue;
            };
            let opp_dist = next.manhattan(opp_loc);
            let trail_dist = Self::trail_distance(game, next, opp);

            if trail_dist == Some(0) {
                // Breach: nothing outranks stepping onto the opponent's trail.
                return dir;
            }

            if chase_trail || trail_dist.is_some_and(|d| d <= TRAIL_CHASE_RADIUS) {
                chase_trail = true;
                if closer(trail_dist, best_trail_dist) {
                    best_trail_dist = trail_dist;
                    decision = dir;
                    decision_dest = Some(next);
                }
            } else if closer(Some(opp_dist), best_opp_dist) {
                best_opp_dist = Some(opp_dist);
                best_trail_dist = trail_dist;
                decision = dir;
                decision_dest = Some(next);
            } else if Some(opp_dist) == best_opp_dist && closer(trail_dist, best_trail_dist) {
                best_trail_dist = trail_dist;
                decision = dir;
                decision_dest = Some(next);
            }
        }

        // Arriving on home ground keeps the agent free next turn; anything
        // else starts an excursion and forces the reversal above.
        let home = decision_dest.map(|p| game.board.get(p)) == Some(Cell::Perm(me));
        self.phase = Some(if home {
            TravelPhase::InTerritory
        } else {
            TravelPhase::OnTrail
        });
        self.last_move = Some(decision);
        decision
    }

    fn cleanup(&mut self) {
        self.me = None;
        self.phase = None;
        self.last_move = None;
    }
}

/// Distance comparison where `None` is infinite.
fn closer(candidate: Option<u32>, best: Option<u32>) -> bool {
    match (candidate, best) {
        (Some(c), Some(b)) => c < b,
        (Some(_), None) => true,
        (None, _) => false,
    }
}
