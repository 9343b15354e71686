//! Authoritative game state: legality, turn order, terminal detection

use crate::error::GameError;
use crate::rules::check_win;

use super::{Grid, Pos, Stone, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// A Gomoku game in progress.
///
/// Owns the live grid and enforces move legality. Black moves first.
/// Once the game is over (five in a row, or a full board with no winner)
/// every further [`Game::play`] is rejected.
#[derive(Debug, Clone)]
pub struct Game {
    grid: Grid,
    current: Stone,
    total_moves: usize,
    over: bool,
    winner: Option<Stone>,
}

impl Game {
    /// Create a new game on an N x N board.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidBoardSize`] when `size` is outside
    /// `[MIN_BOARD_SIZE, MAX_BOARD_SIZE]`.
    pub fn new(size: usize) -> Result<Self, GameError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(GameError::InvalidBoardSize { size });
        }
        Ok(Self {
            grid: Grid::new(size),
            current: Stone::Black,
            total_moves: 0,
            over: false,
            winner: None,
        })
    }

    /// Play a stone for the current mover.
    ///
    /// Legal iff the game is not over, the position is inside the board,
    /// and the cell is empty. Illegal attempts are a no-op returning
    /// `false`. On success the terminal status is re-evaluated: a full
    /// board ends the game as a draw, a completed five ends it with the
    /// mover as winner, and otherwise the turn passes to the opponent.
    pub fn play(&mut self, pos: Pos) -> bool {
        if self.over {
            return false;
        }
        if !self.grid.is_empty(pos) {
            return false;
        }

        self.grid.set(pos, self.current);
        self.total_moves += 1;

        // Draw: board filled without a winner. Checked before the win scan.
        if self.total_moves == self.grid.size() * self.grid.size() {
            self.over = true;
            return true;
        }

        if check_win(&self.grid, pos) {
            self.over = true;
            self.winner = Some(self.current);
            return true;
        }

        self.current = self.current.opponent();
        true
    }

    /// Defensive copy of the grid. Callers never see the live buffer.
    #[must_use]
    pub fn snapshot(&self) -> Grid {
        self.grid.clone()
    }

    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Check if position is inside the board and unoccupied
    #[inline]
    #[must_use]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.grid.is_empty(pos)
    }

    #[inline]
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.total_moves
    }

    #[inline]
    #[must_use]
    pub fn current_mover(&self) -> Stone {
        self.current
    }

    #[inline]
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Winner, or `None` while the game runs or on a draw
    #[inline]
    #[must_use]
    pub fn winner(&self) -> Option<Stone> {
        self.winner
    }
}
