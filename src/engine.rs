//! Engine facade tying configuration and search together
//!
//! The engine is the surface the presentation layer talks to: construct
//! it once per game with a depth (and optionally a candidate policy and
//! seed), then ask it for a move whenever it is the automated player's
//! turn.
//!
//! # Example
//!
//! ```
//! use gomoku::{Engine, Game, Pos};
//!
//! let mut game = Game::new(9).unwrap();
//! game.play(Pos::new(4, 4));
//!
//! let mut engine = Engine::new(2);
//! let reply = engine.find_best_move(&game).unwrap();
//! assert!(game.play(reply));
//! ```

use crate::board::{Game, Pos};
use crate::error::GameError;
use crate::search::{CandidateGenerator, CandidatePolicy, SearchResult, Searcher};

/// Engine configuration.
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    /// Search depth in plies; the only stopping condition.
    pub max_depth: u32,
    /// Distance-2 candidate inclusion policy.
    pub candidate_policy: CandidatePolicy,
    /// Seed for the candidate sampler; irrelevant while the policy is
    /// deterministic.
    pub seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_depth: 3,
            candidate_policy: CandidatePolicy::default(),
            seed: 0,
        }
    }
}

/// Gomoku AI engine.
///
/// A thin facade over [`Searcher`]; it exists so callers configure depth
/// and candidate policy in one place and never touch search internals.
#[derive(Debug)]
pub struct Engine {
    searcher: Searcher,
}

impl Engine {
    /// Engine with the default deterministic policy at the given depth.
    #[must_use]
    pub fn new(max_depth: u32) -> Self {
        Self::with_config(EngineConfig {
            max_depth,
            ..EngineConfig::default()
        })
    }

    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        let generator = CandidateGenerator::new(config.candidate_policy, config.seed);
        Self {
            searcher: Searcher::with_generator(config.max_depth, generator),
        }
    }

    /// Best move for the current mover of `game`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GameOver`] when the game is already over.
    pub fn find_best_move(&mut self, game: &Game) -> Result<Pos, GameError> {
        self.searcher.find_best_move(game).map(|r| r.best_move)
    }

    /// Best move with score and node-count diagnostics.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GameOver`] when the game is already over.
    pub fn find_best_move_with_stats(&mut self, game: &Game) -> Result<SearchResult, GameError> {
        self.searcher.find_best_move(game)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}
