//! Error types for the Gomoku engine

use thiserror::Error;

/// Errors reported by game construction and engine entry points.
///
/// Illegal move attempts are deliberately *not* errors: `Game::play`
/// reports them through its `bool` result and leaves the position
/// untouched, so the driver can simply ignore a rejected click.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
    #[error("board size {size} out of range (must be between {min} and {max})",
        min = crate::board::MIN_BOARD_SIZE,
        max = crate::board::MAX_BOARD_SIZE)]
    InvalidBoardSize { size: usize },

    #[error("game is already over")]
    GameOver,
}
