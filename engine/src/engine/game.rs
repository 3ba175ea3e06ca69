// engine/src/engine/game.rs
#![forbid(unsafe_code)]

use std::collections::VecDeque;

use crate::engine::board::{Board, Cell, Player};
use crate::engine::geometry::{Direction, Position};

/// Turn cap used by drivers that adjudicate stalled games on territory.
pub const DEFAULT_MAX_TURNS: u64 = 400;

#[derive(Clone, Copy, Debug)]
pub struct StepResult {
    /// True game over OR engine already in game_over.
    pub terminated: bool,
    pub winner: Option<Player>,
    /// Cells converted to the mover's permanent territory this turn (trail + enclosed).
    pub claimed: u32,
}

/**
 * Full game state: the read-only snapshot handed to agents each turn, plus
 * the turn-resolution kernel.
 *
 * Turn rules:
 * - Stepping off the board, into a wall, or onto your own temporary trail
 *   eliminates you.
 * - Stepping onto the opponent's temporary trail eliminates the opponent
 *   (a breach).
 * - Stepping onto your own permanent territory ends the excursion: your
 *   trail becomes permanent and any empty pocket the opponent can no longer
 *   reach is captured.
 * - Anything else is plain travel. Trail marking lags one cell: the origin
 *   cell becomes your trail when you depart it, so the player to move never
 *   stands on a wall or trail cell.
 */
#[derive(Clone, Debug)]
pub struct Game {
    pub board: Board,
    pub player_locs: [Position; Player::COUNT],
    pub ptm: Player,

    pub turns: u64,
    pub game_over: bool,
    pub winner: Option<Player>,
}

impl Game {
    /// Bordered board with one permanent spawn cell per player in opposite corners.
    pub fn new(rows: usize, cols: usize) -> Result<Game, String> {
        if rows < 5 || cols < 5 {
            return Err(format!("board too small: {rows}x{cols} (need at least 5x5)"));
        }
        let mut board = Board::new(rows, cols);
        let one = Position::new(1, 1);
        let two = Position::new(rows - 2, cols - 2);
        board.set(one, Cell::Perm(Player::One));
        board.set(two, Cell::Perm(Player::Two));
        Ok(Game {
            board,
            player_locs: [one, two],
            ptm: Player::One,
            turns: 0,
            game_over: false,
            winner: None,
        })
    }

    /// Fixture/replay constructor over an explicit position.
    pub fn from_parts(board: Board, player_locs: [Position; Player::COUNT], ptm: Player) -> Game {
        Game {
            board,
            player_locs,
            ptm,
            turns: 0,
            game_over: false,
            winner: None,
        }
    }

    pub fn safe_actions_for_current(&self) -> Vec<Direction> {
        self.board.safe_actions(self.player_locs[self.ptm.index()])
    }

    /// Permanent cell counts, indexed by player.
    pub fn territory_counts(&self) -> [usize; Player::COUNT] {
        [
            self.board.count(Cell::Perm(Player::One)),
            self.board.count(Cell::Perm(Player::Two)),
        ]
    }

    /// Territory leader, `None` when tied. Used for turn-cap adjudication.
    pub fn leader(&self) -> Option<Player> {
        let [one, two] = self.territory_counts();
        match one.cmp(&two) {
            std::cmp::Ordering::Greater => Some(Player::One),
            std::cmp::Ordering::Less => Some(Player::Two),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Resolve one turn for the player to move. No-op once `game_over` is set.
    pub fn advance(&mut self, dir: Direction) -> StepResult {
        if self.game_over {
            return StepResult {
                terminated: true,
                winner: self.winner,
                claimed: 0,
            };
        }

        let mover = self.ptm;
        let from = self.player_locs[mover.index()];
        self.turns += 1;
        self.ptm = mover.opponent();

        let Some(to) = self.board.neighbor(from, dir) else {
            return self.eliminate(mover);
        };
        match self.board.get(to) {
            Cell::Wall => self.eliminate(mover),
            Cell::Temp(owner) if owner == mover => self.eliminate(mover),
            Cell::Temp(_) => {
                // Breach: the opponent's trail is cut.
                self.depart(mover, from);
                self.player_locs[mover.index()] = to;
                self.eliminate(mover.opponent())
            }
            Cell::Perm(owner) if owner == mover => {
                self.depart(mover, from);
                self.player_locs[mover.index()] = to;
                let claimed = self.claim_territory(mover);
                StepResult {
                    terminated: false,
                    winner: None,
                    claimed,
                }
            }
            Cell::Empty | Cell::Perm(_) => {
                self.depart(mover, from);
                self.player_locs[mover.index()] = to;
                StepResult {
                    terminated: false,
                    winner: None,
                    claimed: 0,
                }
            }
        }
    }

    fn eliminate(&mut self, loser: Player) -> StepResult {
        self.game_over = true;
        self.winner = Some(loser.opponent());
        StepResult {
            terminated: true,
            winner: self.winner,
            claimed: 0,
        }
    }

    /// Lagging trail mark: a non-permanent origin becomes the mover's trail.
    fn depart(&mut self, mover: Player, from: Position) {
        if self.board.get(from) != Cell::Perm(mover) {
            self.board.set(from, Cell::Temp(mover));
        }
    }

    /**
     * Close an excursion: convert the claimer's trail to permanent territory,
     * then capture every empty cell the opponent can no longer reach from its
     * current position (flood fill blocked by walls and the claimer's
     * permanent cells).
     */
    fn claim_territory(&mut self, claimer: Player) -> u32 {
        let mut claimed = 0u32;
        for r in 0..self.board.rows() {
            for c in 0..self.board.cols() {
                let p = Position::new(r, c);
                if self.board.get(p) == Cell::Temp(claimer) {
                    self.board.set(p, Cell::Perm(claimer));
                    claimed += 1;
                }
            }
        }
        if claimed == 0 {
            return 0;
        }

        let rows = self.board.rows();
        let cols = self.board.cols();
        let mut reachable = vec![false; rows * cols];
        let opp_loc = self.player_locs[claimer.opponent().index()];
        let mut frontier = VecDeque::new();
        reachable[opp_loc.row * cols + opp_loc.col] = true;
        frontier.push_back(opp_loc);
        while let Some(p) = frontier.pop_front() {
            for (next, _) in self.board.open_neighbors(p) {
                let i = next.row * cols + next.col;
                if reachable[i] || self.board.get(next) == Cell::Perm(claimer) {
                    continue;
                }
                reachable[i] = true;
                frontier.push_back(next);
            }
        }
        for r in 0..rows {
            for c in 0..cols {
                let p = Position::new(r, c);
                if self.board.get(p) == Cell::Empty && !reachable[r * cols + c] {
                    self.board.set(p, Cell::Perm(claimer));
                    claimed += 1;
                }
            }
        }
        claimed
    }

    pub fn render_ascii(&self) -> String {
        let mut s = String::new();
        for r in 0..self.board.rows() {
            for c in 0..self.board.cols() {
                let p = Position::new(r, c);
                let glyph = if p == self.player_locs[0] {
                    '1'
                } else if p == self.player_locs[1] {
                    '2'
                } else {
                    self.board.get(p).glyph()
                };
                s.push(glyph);
            }
            s.push('\n');
        }
        let [one, two] = self.territory_counts();
        s.push_str(&format!(
            "ptm={:?} turns={} territory={}/{} over={} winner={:?}\n",
            self.ptm, self.turns, one, two, self.game_over, self.winner
        ));
        s
    }
}
