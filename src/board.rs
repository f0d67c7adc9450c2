//! Immutable board representation for the n-puzzle.
//!
//! A board is an n-by-n grid of tile labels stored as a flat row-major array,
//! with 0 marking the blank cell. Every transformation (`slide`, `neighbors`,
//! `twin`) produces a new board; an existing board is never mutated, so boards
//! can be shared freely between search nodes.

use std::fmt;

use thiserror::Error;

/// Largest supported grid dimension.
///
/// Tile labels are stored as `u8`, so the highest label `n*n - 1` must fit
/// in a byte. 16x16 is already far beyond what A* can search in practice.
pub const MAX_DIMENSION: usize = 16;

/// Validation failures raised when constructing a board.
///
/// A malformed grid is fatal at construction time and never silently
/// corrected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The input grid is ragged or wider than it is tall.
    #[error("grid is not square: {rows} rows but row {row} has {cols} columns")]
    NotSquare {
        rows: usize,
        row: usize,
        cols: usize,
    },
    /// The dimension is outside the supported range.
    #[error("unsupported dimension {0}: must be between 2 and {MAX_DIMENSION}")]
    BadDimension(usize),
    /// A tile label is out of range or appears more than once.
    #[error("tiles are not a permutation of 0..n*n: bad label {label}")]
    BadPermutation { label: u8 },
}

/// A direction the blank cell can move in.
///
/// Sliding the blank `Up` means the tile above the blank moves down into it,
/// and so on. Directions are listed in the fixed order `neighbors` emits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in the order `neighbors` tries them.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The (row, column) delta the blank moves by.
    fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// One n-puzzle configuration.
///
/// Two boards are equal iff they have the same dimension and the same
/// row-major tile sequence; the derived `Hash` makes the board its own
/// canonical key for visited-set membership.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    n: usize,
    tiles: Vec<u8>,
    /// Row-major index of the blank, cached so moves don't rescan the grid.
    blank: usize,
}

impl Board {
    /// Creates a board from an n-by-n grid of rows, where `rows[i][j]` is the
    /// tile at row `i`, column `j` and 0 is the blank.
    ///
    /// Validates that the grid is square, the dimension is in `2..=16`, and
    /// the labels form a permutation of `0..n*n`.
    pub fn new(rows: Vec<Vec<u8>>) -> Result<Self, BoardError> {
        let n = rows.len();
        if !(2..=MAX_DIMENSION).contains(&n) {
            return Err(BoardError::BadDimension(n));
        }
        for (row, cols) in rows.iter().enumerate() {
            if cols.len() != n {
                return Err(BoardError::NotSquare {
                    rows: n,
                    row,
                    cols: cols.len(),
                });
            }
        }

        let tiles: Vec<u8> = rows.into_iter().flatten().collect();
        let mut seen = vec![false; n * n];
        for &label in &tiles {
            if (label as usize) >= n * n || seen[label as usize] {
                return Err(BoardError::BadPermutation { label });
            }
            seen[label as usize] = true;
        }

        Ok(Self::from_flat(n, tiles))
    }

    /// Builds the solved configuration: tiles 1..n*n in row-major order with
    /// the blank in the last cell.
    pub fn goal(n: usize) -> Result<Self, BoardError> {
        if !(2..=MAX_DIMENSION).contains(&n) {
            return Err(BoardError::BadDimension(n));
        }
        // labels counted in usize: n*n is 256 at MAX_DIMENSION, which would
        // wrap to 0 if the range bound itself were cast to u8
        let mut tiles: Vec<u8> = (1..n * n).map(|v| v as u8).collect();
        tiles.push(0);
        Ok(Self::from_flat(n, tiles))
    }

    /// Wraps an already-validated flat tile sequence.
    fn from_flat(n: usize, tiles: Vec<u8>) -> Self {
        let blank = tiles.iter().position(|&t| t == 0).unwrap_or(0);
        Self { n, tiles, blank }
    }

    /// The grid dimension n.
    pub fn dimension(&self) -> usize {
        self.n
    }

    /// The tiles in row-major order.
    pub fn tiles(&self) -> &[u8] {
        &self.tiles
    }

    /// The row holding the blank, 0-based from the top.
    pub fn blank_row(&self) -> usize {
        self.blank / self.n
    }

    /// Whether every non-blank tile sits at its goal position.
    ///
    /// The blank's position is irrelevant: if all n*n - 1 tiles are home, the
    /// blank necessarily occupies the last cell.
    pub fn is_goal(&self) -> bool {
        self.tiles
            .iter()
            .enumerate()
            .all(|(idx, &tile)| tile == 0 || tile as usize == idx + 1)
    }

    /// Number of non-blank tiles out of place.
    pub fn hamming(&self) -> u32 {
        self.tiles
            .iter()
            .enumerate()
            .filter(|&(idx, &tile)| tile != 0 && tile as usize != idx + 1)
            .count() as u32
    }

    /// Sum of Manhattan distances from each non-blank tile to its goal cell.
    ///
    /// Admissible and consistent: each slide moves exactly one tile by one
    /// cell, so the true remaining distance is never overestimated.
    pub fn manhattan(&self) -> u32 {
        let n = self.n;
        self.tiles
            .iter()
            .enumerate()
            .filter(|&(_, &tile)| tile != 0)
            .map(|(idx, &tile)| {
                let (row, col) = (idx / n, idx % n);
                let goal = tile as usize - 1;
                let (goal_row, goal_col) = (goal / n, goal % n);
                (row.abs_diff(goal_row) + col.abs_diff(goal_col)) as u32
            })
            .sum()
    }

    /// The board after moving the blank one cell in `dir`, or `None` if that
    /// would leave the grid.
    pub fn slide(&self, dir: Direction) -> Option<Board> {
        let (dr, dc) = dir.delta();
        let row = self.blank as isize / self.n as isize + dr;
        let col = self.blank as isize % self.n as isize + dc;
        if !(0..self.n as isize).contains(&row) || !(0..self.n as isize).contains(&col) {
            return None;
        }

        let dest = (row * self.n as isize + col) as usize;
        let mut tiles = self.tiles.clone();
        tiles.swap(self.blank, dest);
        Some(Board {
            n: self.n,
            tiles,
            blank: dest,
        })
    }

    /// All boards reachable by one blank slide.
    ///
    /// Yields 2 boards for a corner blank, 3 for an edge blank and 4 for an
    /// interior blank, in `Direction::ALL` order.
    pub fn neighbors(&self) -> Vec<Board> {
        Direction::ALL
            .iter()
            .filter_map(|&dir| self.slide(dir))
            .collect()
    }

    /// A board with the first two non-blank tiles (in row-major order)
    /// exchanged.
    ///
    /// A board and its twin are never both solvable, which makes the twin an
    /// independent solvability probe. The swap is deterministic so repeated
    /// calls return the same board.
    pub fn twin(&self) -> Board {
        let mut non_blank = self
            .tiles
            .iter()
            .enumerate()
            .filter(|&(_, &tile)| tile != 0)
            .map(|(idx, _)| idx);
        // n >= 2 guarantees at least three non-blank cells
        let first = non_blank.next().unwrap_or(0);
        let second = non_blank.next().unwrap_or(0);

        let mut tiles = self.tiles.clone();
        tiles.swap(first, second);
        Board {
            n: self.n,
            tiles,
            blank: self.blank,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.tiles.chunks(self.n) {
            for (col, tile) in row.iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{tile}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({}x{})\n{}", self.n, self.n, self)
    }
}
