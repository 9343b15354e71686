//! Flat stone buffer shared by the live game and the search scratch board

use super::{Pos, Stone};

/// N x N stone buffer in row-major order.
///
/// Two kinds of grids exist at runtime: the authoritative one owned by
/// [`Game`](super::Game), mutated only through legal moves, and disposable
/// scratch clones that the search mutates and reverts freely. `Grid` itself
/// enforces nothing beyond bounds; legality lives in `Game`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Stone>,
}

impl Grid {
    /// Create an empty grid. Size validation happens in `Game::new`;
    /// scratch grids reuse whatever size the game was built with.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Stone::Empty; size * size],
        }
    }

    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Stone at position. Panics if out of bounds; use [`Grid::in_bounds`]
    /// first for untrusted coordinates.
    #[inline]
    #[must_use]
    pub fn get(&self, pos: Pos) -> Stone {
        self.cells[pos.row * self.size + pos.col]
    }

    #[inline]
    pub fn set(&mut self, pos: Pos, stone: Stone) {
        self.cells[pos.row * self.size + pos.col] = stone;
    }

    #[inline]
    #[must_use]
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && row < self.size as i32 && col >= 0 && col < self.size as i32
    }

    /// Check if position is inside the board and unoccupied
    #[inline]
    #[must_use]
    pub fn is_empty(&self, pos: Pos) -> bool {
        pos.row < self.size && pos.col < self.size && self.get(pos) == Stone::Empty
    }

    /// Total stones on the grid
    #[must_use]
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|&&s| s != Stone::Empty).count()
    }

    /// Occupied cells in row-major order
    pub fn iter_stones(&self) -> impl Iterator<Item = (Pos, Stone)> + '_ {
        self.cells.iter().enumerate().filter_map(move |(idx, &stone)| {
            (stone != Stone::Empty)
                .then(|| (Pos::new(idx / self.size, idx % self.size), stone))
        })
    }
}
