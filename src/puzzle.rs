use std::fmt;

use crate::error::SolveError;

/// Direction the blank travels in a single move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Row and column delta applied to the blank.
    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Direction::North => 'N',
            Direction::South => 'S',
            Direction::East => 'E',
            Direction::West => 'W',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'N' => Some(Direction::North),
            'S' => Some(Direction::South),
            'E' => Some(Direction::East),
            'W' => Some(Direction::West),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Direction::North => "North",
            Direction::South => "South",
            Direction::East => "East",
            Direction::West => "West",
        };
        write!(f, "{}", s)
    }
}

/// Renders a move path as its compact symbol string, e.g. `"NWS"`.
pub fn path_string(path: &[Direction]) -> String {
    path.iter().map(Direction::symbol).collect()
}

/// Parses a symbol string back into directions. Unknown symbols yield `None`.
pub fn parse_path(symbols: &str) -> Option<Vec<Direction>> {
    symbols.chars().map(Direction::from_symbol).collect()
}

/// An n×n tile arrangement stored row-major. Value `n²-1` is the blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    tiles: Vec<u32>,
    blank: usize,
}

impl Board {
    /// The goal arrangement: value `j` sits at `(j / n, j % n)`.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    pub fn solved(size: usize) -> Self {
        assert!(size > 0, "board size must be at least 1");
        let tiles = (0..(size * size) as u32).collect();
        Self {
            size,
            tiles,
            blank: size * size - 1,
        }
    }

    /// Builds a board from row-major tiles, checking that they form a
    /// permutation of `0..n²`. Solvability is not checked.
    pub fn from_tiles(size: usize, tiles: Vec<u32>) -> Result<Self, SolveError> {
        if size == 0 || tiles.len() != size * size {
            return Err(SolveError::InvalidBoard(format!(
                "expected {} tiles for size {}, got {}",
                size * size,
                size,
                tiles.len()
            )));
        }

        let mut seen = vec![false; tiles.len()];
        for &value in &tiles {
            let slot = seen.get_mut(value as usize).ok_or_else(|| {
                SolveError::InvalidBoard(format!("tile {} out of range", value))
            })?;
            if *slot {
                return Err(SolveError::InvalidBoard(format!(
                    "tile {} appears twice",
                    value
                )));
            }
            *slot = true;
        }

        let blank_value = (size * size - 1) as u32;
        let blank = tiles
            .iter()
            .position(|&v| v == blank_value)
            .ok_or_else(|| SolveError::InvalidBoard("missing blank".to_string()))?;

        Ok(Self { size, tiles, blank })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn tiles(&self) -> &[u32] {
        &self.tiles
    }

    pub fn blank_value(&self) -> u32 {
        (self.size * self.size - 1) as u32
    }

    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.tiles[row * self.size + col]
    }

    pub fn blank_position(&self) -> (usize, usize) {
        (self.blank / self.size, self.blank % self.size)
    }

    /// Position currently holding `value`, found by scanning every cell.
    pub fn locate(&self, value: u32) -> Option<(usize, usize)> {
        self.tiles
            .iter()
            .position(|&v| v == value)
            .map(|idx| (idx / self.size, idx % self.size))
    }

    pub fn is_solved(&self) -> bool {
        self.tiles
            .iter()
            .enumerate()
            .all(|(idx, &value)| value as usize == idx)
    }

    /// Whether the blank can travel one step in `dir` without leaving the grid.
    pub fn can_slide(&self, dir: Direction) -> bool {
        self.neighbor(dir).is_some()
    }

    fn neighbor(&self, dir: Direction) -> Option<usize> {
        let (row, col) = self.blank_position();
        let (dr, dc) = dir.as_offset();

        let new_row = row as isize + dr;
        let new_col = col as isize + dc;
        let size = self.size as isize;

        if new_row >= 0 && new_row < size && new_col >= 0 && new_col < size {
            Some(new_row as usize * self.size + new_col as usize)
        } else {
            None
        }
    }

    /// Swaps the blank with its neighbour in `dir`. Returns false, leaving
    /// the board untouched, when the blank sits on that edge.
    pub fn slide(&mut self, dir: Direction) -> bool {
        match self.neighbor(dir) {
            Some(target) => {
                self.tiles.swap(self.blank, target);
                self.blank = target;
                true
            }
            None => false,
        }
    }

    /// Directions the blank may take, in `Direction::ALL` order.
    pub fn legal_moves(&self) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|&dir| self.can_slide(dir))
            .collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let blank = self.blank_value();
        for row in self.tiles.chunks(self.size) {
            for &val in row {
                if val == blank {
                    write!(f, " . ")?;
                } else {
                    write!(f, "{:2} ", val)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Applies `path` to a copy of `board`. Returns `None` if any step would
/// push the blank off the grid.
pub fn replay(board: &Board, path: &[Direction]) -> Option<Board> {
    let mut board = board.clone();
    for &dir in path {
        if !board.slide(dir) {
            return None;
        }
    }
    Some(board)
}

/// A search node: a board plus the moves and cost that produced it.
#[derive(Debug, Clone)]
pub struct State {
    board: Board,
    path: Vec<Direction>,
    cost: usize,
    score: f64,
}

impl State {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            path: Vec::new(),
            cost: 0,
            score: 0.0,
        }
    }

    pub fn solved(size: usize) -> Self {
        Self::new(Board::solved(size))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn into_board(self) -> Board {
        self.board
    }

    pub fn path(&self) -> &[Direction] {
        &self.path
    }

    pub fn path_string(&self) -> String {
        path_string(&self.path)
    }

    pub fn cost(&self) -> usize {
        self.cost
    }

    /// Evaluation score `f`; zero until the state is scored.
    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn set_score(&mut self, score: f64) {
        self.score = score;
    }

    pub fn is_goal(&self) -> bool {
        self.board.is_solved()
    }

    /// Returns the successor reached by moving the blank in `dir`.
    ///
    /// # Panics
    ///
    /// Panics if the blank cannot move in `dir`. Callers pick directions
    /// from [`State::legal_moves`].
    pub fn apply_move(&self, dir: Direction) -> State {
        match self.try_move(dir) {
            Some(next) => next,
            None => panic!(
                "invalid move direction: blank at {:?} cannot move {}",
                self.board.blank_position(),
                dir
            ),
        }
    }

    pub fn try_move(&self, dir: Direction) -> Option<State> {
        let mut board = self.board.clone();
        if !board.slide(dir) {
            return None;
        }

        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(dir);

        Some(State {
            board,
            path,
            cost: self.cost + 1,
            score: 0.0,
        })
    }

    pub fn legal_moves(&self) -> Vec<Direction> {
        self.board.legal_moves()
    }

    /// One fresh successor per legal blank move.
    pub fn successors(&self) -> Vec<State> {
        self.legal_moves()
            .into_iter()
            .map(|dir| self.apply_move(dir))
            .collect()
    }
}
