// engine/src/engine/board.rs
#![forbid(unsafe_code)]

use crate::engine::geometry::{Direction, Position};

/// One of the two contestants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub const COUNT: usize = 2;

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    #[inline]
    pub fn from_index(idx: usize) -> Player {
        debug_assert!(idx < Player::COUNT);
        if idx == 0 {
            Player::One
        } else {
            Player::Two
        }
    }
}

/// Board cell contents.
///
/// `Perm` is claimed ground; `Temp` is the owner's live excursion trail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Wall,
    Perm(Player),
    Temp(Player),
}

impl Cell {
    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Wall => '#',
            Cell::Perm(Player::One) => 'A',
            Cell::Temp(Player::One) => 'a',
            Cell::Perm(Player::Two) => 'B',
            Cell::Temp(Player::Two) => 'b',
        }
    }

    pub fn from_glyph(ch: char) -> Option<Cell> {
        match ch {
            ' ' => Some(Cell::Empty),
            '#' => Some(Cell::Wall),
            'A' => Some(Cell::Perm(Player::One)),
            'a' => Some(Cell::Temp(Player::One)),
            'B' => Some(Cell::Perm(Player::Two)),
            'b' => Some(Cell::Temp(Player::Two)),
            _ => None,
        }
    }

    #[inline]
    pub fn is_wall(self) -> bool {
        matches!(self, Cell::Wall)
    }
}

/// Rectangular cell grid, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Empty interior with a one-cell wall border.
    pub fn new(rows: usize, cols: usize) -> Board {
        debug_assert!(rows >= 3 && cols >= 3);
        let mut cells = vec![Cell::Empty; rows * cols];
        for c in 0..cols {
            cells[c] = Cell::Wall;
            cells[(rows - 1) * cols + c] = Cell::Wall;
        }
        for r in 0..rows {
            cells[r * cols] = Cell::Wall;
            cells[r * cols + cols - 1] = Cell::Wall;
        }
        Board { rows, cols, cells }
    }

    /// Parse a board fixture; every line must have the same width.
    pub fn from_ascii(text: &str) -> Result<Board, String> {
        let lines: Vec<&str> = text.lines().filter(|l| !l.is_empty()).collect();
        if lines.is_empty() {
            return Err("empty board text".to_string());
        }
        let cols = lines[0].chars().count();
        let mut cells = Vec::with_capacity(lines.len() * cols);
        for (r, line) in lines.iter().enumerate() {
            if line.chars().count() != cols {
                return Err(format!(
                    "ragged board text: row {r} has width {} (expected {cols})",
                    line.chars().count()
                ));
            }
            for ch in line.chars() {
                let cell = Cell::from_glyph(ch)
                    .ok_or_else(|| format!("unknown board glyph {ch:?} in row {r}"))?;
                cells.push(cell);
            }
        }
        Ok(Board {
            rows: lines.len(),
            cols,
            cells,
        })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    fn idx(&self, p: Position) -> usize {
        debug_assert!(p.row < self.rows && p.col < self.cols);
        p.row * self.cols + p.col
    }

    #[inline]
    pub fn get(&self, p: Position) -> Cell {
        self.cells[self.idx(p)]
    }

    #[inline]
    pub fn set(&mut self, p: Position, cell: Cell) {
        let i = self.idx(p);
        self.cells[i] = cell;
    }

    /// Pure move helper: the cell reached from `p` in `dir`, or `None` at the board edge.
    #[inline]
    pub fn neighbor(&self, p: Position, dir: Direction) -> Option<Position> {
        let (dr, dc) = dir.offset();
        let row = p.row as i32 + dr;
        let col = p.col as i32 + dc;
        if row < 0 || row >= self.rows as i32 || col < 0 || col >= self.cols as i32 {
            return None;
        }
        Some(Position::new(row as usize, col as usize))
    }

    /**
     * Grid safety oracle: actions whose destination is in bounds and not a wall.
     *
     * Trail contacts are resolved by the engine on arrival (breach vs. self
     * collision), not filtered here. Side-effect free; callers may probe
     * repeatedly within one turn.
     */
    pub fn safe_actions(&self, from: Position) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|&d| {
                self.neighbor(from, d)
                    .map(|p| !self.get(p).is_wall())
                    .unwrap_or(false)
            })
            .collect()
    }

    /// In-bounds, non-wall neighbors with the direction that reaches them.
    pub fn open_neighbors(&self, from: Position) -> Vec<(Position, Direction)> {
        Direction::ALL
            .into_iter()
            .filter_map(|d| self.neighbor(from, d).map(|p| (p, d)))
            .filter(|&(p, _)| !self.get(p).is_wall())
            .collect()
    }

    /// `open_neighbors`, additionally excluding destinations holding `avoid`.
    pub fn open_neighbors_avoiding(
        &self,
        from: Position,
        avoid: Cell,
    ) -> Vec<(Position, Direction)> {
        self.open_neighbors(from)
            .into_iter()
            .filter(|&(p, _)| self.get(p) != avoid)
            .collect()
    }

    /// Minimum Manhattan distance from `from` to any cell holding `target`.
    /// `None` when no such cell exists.
    pub fn min_manhattan_to(&self, from: Position, target: Cell) -> Option<u32> {
        let mut best: Option<u32> = None;
        for (i, &cell) in self.cells.iter().enumerate() {
            if cell != target {
                continue;
            }
            let p = Position::new(i / self.cols, i % self.cols);
            let d = from.manhattan(p);
            if best.map_or(true, |b| d < b) {
                best = Some(d);
            }
        }
        best
    }

    pub fn count(&self, target: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == target).count()
    }

    pub fn render_ascii(&self) -> String {
        let mut s = String::with_capacity((self.cols + 1) * self.rows);
        for r in 0..self.rows {
            for c in 0..self.cols {
                s.push(self.get(Position::new(r, c)).glyph());
            }
            s.push('\n');
        }
        s
    }
}
