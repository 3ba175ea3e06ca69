// engine/src/agents/space_grab.rs
#![forbid(unsafe_code)]

use std::collections::VecDeque;

use rand::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::agents::{Agent, DEFAULT_ACTION};
use crate::engine::{Board, Cell, Direction, Game, Position};

/**
 * Space-grab strategy.
 *
 * Alternates between two planning passes, each filling a move queue that is
 * consumed one move per turn:
 *
 * - a greedy sweep that turns through each unused cardinal direction once,
 *   always preferring a perpendicular turn onto ground outside its own
 *   territory (hugging the territory boundary approximates a spiral and
 *   maximizes the area enclosed per excursion);
 * - a BFS walk to the nearest empty cell, used to relocate once the local
 *   neighborhood is grabbed.
 */
pub struct SpaceGrabAgent {
    rng: StdRng,
    prev_move: Option<Direction>,
    queue: VecDeque<Direction>,
    travel_next: bool,
}

impl SpaceGrabAgent {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            prev_move: None,
            queue: VecDeque::new(),
            travel_next: false,
        }
    }

    /// One sweep episode. Each accepted move retires its direction from the
    /// episode's working set; the pass ends when the set is exhausted or no
    /// perpendicular unused turn is reachable.
    fn plan_space_grab(&mut self, game: &Game) {
        let board = &game.board;
        let own_perm = Cell::Perm(game.ptm);
        let mut loc = game.player_locs[game.ptm.index()];
        let mut remaining: Vec<Direction> = Direction::ALL.to_vec();

        let mut prev = match self.prev_move {
            Some(prev) => {
                remaining.retain(|&d| d != prev);
                prev
            }
            None => {
                let mut open = board.open_neighbors(loc);
                if open.is_empty() {
                    self.queue.push_back(DEFAULT_ACTION);
                    return;
                }
                open.shuffle(&mut self.rng);
                let (next, dir) = open[0];
                self.queue.push_back(dir);
                remaining.retain(|&d| d != dir);
                loc = next;
                dir
            }
        };

        while !remaining.is_empty() {
            let mut fresh = board.open_neighbors_avoiding(loc, own_perm);
            let mut any = board.open_neighbors(loc);
            if fresh.is_empty() && any.is_empty() {
                // Walled in mid-plan; abort with the default.
                self.queue.push_back(DEFAULT_ACTION);
                return;
            }
            fresh.shuffle(&mut self.rng);
            any.shuffle(&mut self.rng);

            // Tier 1 stays off our own territory; tier 2 allows it.
            let turns = prev.perpendicular();
            let accepted = pick_turn(&fresh, turns, &remaining)
                .or_else(|| pick_turn(&any, turns, &remaining));
            let Some((next, dir)) = accepted else {
                // No unused perpendicular turn available; the episode ends here.
                break;
            };
            self.queue.push_back(dir);
            remaining.retain(|&d| d != dir);
            prev = dir;
            loc = next;
        }
    }

    fn plan_travel(&mut self, game: &Game) {
        let start = game.player_locs[game.ptm.index()];
        match path_to_nearest_empty(&game.board, start, &mut self.rng) {
            Some(path) => self.queue.extend(path),
            None => self.queue.push_back(DEFAULT_ACTION),
        }
    }
}

impl Agent for SpaceGrabAgent {
    fn decide(&mut self, game: &Game) -> Direction {
        if self.queue.is_empty() {
            if self.travel_next {
                self.plan_travel(game);
            } else {
                self.plan_space_grab(game);
            }
            self.travel_next = !self.travel_next;

            if self.queue.is_empty() {
                // A pass that accepted nothing still owes one move: any open
                // neighbor, or the default when walled in.
                let loc = game.player_locs[game.ptm.index()];
                let mut open = game.board.open_neighbors(loc);
                open.shuffle(&mut self.rng);
                let dir = open.first().map(|&(_, d)| d).unwrap_or(DEFAULT_ACTION);
                self.queue.push_back(dir);
            }
        }
        let mv = self.queue.pop_front().unwrap_or(DEFAULT_ACTION);
        self.prev_move = Some(mv);
        mv
    }

    fn cleanup(&mut self) {
        // Planning state only; the RNG stream is construction-time config.
        self.prev_move = None;
        self.queue.clear();
        self.travel_next = false;
    }
}

/// First shuffled neighbor whose direction is a perpendicular turn still in
/// the episode's working set.
fn pick_turn(
    neighbors: &[(Position, Direction)],
    turns: [Direction; 2],
    remaining: &[Direction],
) -> Option<(Position, Direction)> {
    neighbors
        .iter()
        .copied()
        .find(|(_, d)| turns.contains(d) && remaining.contains(d))
}

/**
 * Shortest move sequence from `start` to the nearest empty cell, walking
 * only in-bounds, non-wall cells. Same-distance neighbors are explored in an
 * order shuffled by `rng`, so equally near targets are picked arbitrarily
 * but the path length is always minimal.
 *
 * `None` when no empty cell is reachable. The start cell itself is never a
 * target (the walker stands on it already).
 */
pub fn path_to_nearest_empty(
    board: &Board,
    start: Position,
    rng: &mut impl Rng,
) -> Option<Vec<Direction>> {
    let mut visited: FxHashSet<Position> = FxHashSet::default();
    let mut came_from: FxHashMap<Position, (Position, Direction)> = FxHashMap::default();
    let mut frontier: VecDeque<Position> = VecDeque::new();

    visited.insert(start);
    frontier.push_back(start);

    while let Some(loc) = frontier.pop_front() {
        let mut open = board.open_neighbors(loc);
        open.shuffle(rng);
        for (next, dir) in open {
            if !visited.insert(next) {
                continue;
            }
            came_from.insert(next, (loc, dir));
            if board.get(next) == Cell::Empty {
                let mut path = Vec::new();
                let mut cur = next;
                while let Some(&(parent, step)) = came_from.get(&cur) {
                    path.push(step);
                    cur = parent;
                }
                path.reverse();
                return Some(path);
            }
            frontier.push_back(next);
        }
    }
    None
}
