//! Board representation for Gomoku
//!
//! Boards are sized at runtime (anywhere from 5x5 up to 20x20), so
//! positions are validated against a [`Grid`] rather than a compile-time
//! constant.

pub mod game;
pub mod grid;


// Re-exports
pub use game::Game;
pub use grid::Grid;

/// Smallest playable board
pub const MIN_BOARD_SIZE: usize = 5;
/// Largest playable board
pub const MAX_BOARD_SIZE: usize = 20;

/// Stone colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stone {
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Step `dist` cells along a direction, or `None` if that leaves an
    /// N x N board.
    #[inline]
    pub fn step(self, dr: i32, dc: i32, dist: i32, size: usize) -> Option<Pos> {
        let row = self.row as i32 + dr * dist;
        let col = self.col as i32 + dc * dist;
        if row >= 0 && row < size as i32 && col >= 0 && col < size as i32 {
            Some(Pos::new(row as usize, col as usize))
        } else {
            None
        }
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}
