//! Gomoku AI engine with fixed-depth minimax search
//!
//! A five-in-a-row engine built around an incrementally maintained pattern
//! heuristic:
//! - Boards from 5x5 to 20x20, five in a row to win (overlines count)
//! - Depth-limited minimax with alpha-beta pruning
//! - Per-player pattern counters kept current under reversible scratch
//!   edits instead of rescanning the board at every node
//! - Candidate moves restricted to the neighborhood of existing stones,
//!   statically ranked to drive pruning
//!
//! # Architecture
//!
//! - [`board`]: grid buffer and authoritative game state
//! - [`rules`]: the five-in-a-row win condition
//! - [`eval`]: pattern counting and position scoring
//! - [`search`]: candidate generation and the minimax searcher
//! - [`engine`]: configuration facade integrating the components
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{Engine, Game, Pos};
//!
//! let mut game = Game::new(9).unwrap();
//! game.play(Pos::new(4, 4)); // human opens at the center
//!
//! let mut engine = Engine::new(2);
//! if let Ok(reply) = engine.find_best_move(&game) {
//!     game.play(reply);
//! }
//! assert_eq!(game.move_count(), 2);
//! ```
//!
//! # Determinism
//!
//! With the default candidate policy the engine is fully deterministic:
//! the same position and depth always produce the same move. Randomized
//! distance-2 candidate sampling is available as an explicit, seeded
//! policy through [`EngineConfig`].

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Game, Grid, Pos, Stone, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
pub use engine::{Engine, EngineConfig};
pub use error::GameError;
pub use search::{CandidatePolicy, SearchResult};
