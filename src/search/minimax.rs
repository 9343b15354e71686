//! Depth-limited minimax search with alpha-beta pruning
//!
//! One `find_best_move` call owns exactly one scratch grid and one
//! heuristic tracker, shared across the whole depth-first traversal.
//! Every branch places a stone through the tracker, recurses, and removes
//! it again, so sibling branches always observe an unmodified position.
//! That apply/undo symmetry is a correctness invariant of the shared
//! buffer, not an optimization.
//!
//! There is no iterative deepening, transposition table, or time budget:
//! the search always runs to the configured depth (or a terminal five)
//! before returning.

use log::debug;

use crate::board::{Game, Grid, Pos, Stone};
use crate::error::GameError;
use crate::eval::{HeuristicTracker, PatternScore};
use crate::rules::check_win;

use super::candidates::{CandidateGenerator, CandidatePolicy};

/// Sentinel bounds for alpha-beta; outside any reachable evaluation.
const INF: i32 = 10_000_000;

/// Result of a top-level search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found
    pub best_move: Pos,
    /// Minimax score of the best move
    pub score: i32,
    /// Nodes visited by the recursive search
    pub nodes: u64,
}

/// Fixed-depth minimax searcher.
///
/// Holds the candidate generator and the heuristic tracker reused across
/// calls; the tracker is rebuilt from the live board at the start of each
/// [`Searcher::find_best_move`].
#[derive(Debug)]
pub struct Searcher {
    max_depth: u32,
    pruning: bool,
    tracker: HeuristicTracker,
    generator: CandidateGenerator,
    nodes: u64,
}

impl Searcher {
    /// Create a searcher with a deterministic candidate policy.
    #[must_use]
    pub fn new(max_depth: u32) -> Self {
        Self::with_generator(
            max_depth,
            CandidateGenerator::new(CandidatePolicy::default(), 0),
        )
    }

    /// Create a searcher with a custom candidate generator.
    #[must_use]
    pub fn with_generator(max_depth: u32, generator: CandidateGenerator) -> Self {
        Self {
            max_depth: max_depth.max(1),
            pruning: true,
            tracker: HeuristicTracker::new(),
            generator,
            nodes: 0,
        }
    }

    /// Enable or disable alpha-beta cutoffs.
    ///
    /// Pruning never changes the returned move or score; the switch
    /// exists so tests can verify exactly that against the plain minimax.
    pub fn set_pruning(&mut self, enabled: bool) {
        self.pruning = enabled;
    }

    /// Pick the best move for the current mover of `game`.
    ///
    /// Rebuilds the heuristics from the live board, copies it into a
    /// scratch buffer, ranks the root candidates, and evaluates each at
    /// one ply with the opponent to move. The comparison is strictly
    /// greater-than, so among equal scores the first-ranked candidate
    /// wins.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GameOver`] when the game is already over.
    pub fn find_best_move(&mut self, game: &Game) -> Result<SearchResult, GameError> {
        if game.is_over() {
            return Err(GameError::GameOver);
        }
        self.nodes = 0;

        let max_player = game.current_mover();
        let min_player = max_player.opponent();

        let mut scratch = game.snapshot();
        self.tracker.rebuild(&scratch);

        let candidates = self.generator.candidates(&scratch);
        let ranked = self.rank_moves(&mut scratch, max_player, min_player, true, candidates);

        // A live game always has at least one candidate: empty boards
        // fall back to the center, and on any other non-full board some
        // stone borders an empty cell.
        let Some(&(mut best_move, _)) = ranked.first() else {
            return Err(GameError::GameOver);
        };
        let mut best_score = -INF;
        let mut alpha = -INF;
        let beta = INF;

        for &(pos, _) in &ranked {
            self.tracker.place(&mut scratch, pos, max_player);
            let score =
                self.minimax(&mut scratch, max_player, min_player, false, pos, 1, alpha, beta);
            self.tracker.remove(&mut scratch, pos);

            debug!("root candidate ({}, {}) scored {}", pos.row, pos.col, score);

            if score > best_score {
                best_score = score;
                best_move = pos;
            }
            alpha = alpha.max(best_score);
        }

        Ok(SearchResult {
            best_move,
            score: best_score,
            nodes: self.nodes,
        })
    }

    /// Recursive minimax over the shared scratch grid.
    ///
    /// `prev` is the move that produced this position; a five through it
    /// means the side that just moved has won, scored from the
    /// maximizer's perspective. At the depth limit the static evaluation
    /// for the side to move is returned.
    #[allow(clippy::too_many_arguments)]
    fn minimax(
        &mut self,
        grid: &mut Grid,
        max_player: Stone,
        min_player: Stone,
        max_to_move: bool,
        prev: Pos,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.nodes += 1;

        if check_win(grid, prev) {
            // The previous mover completed a five: a loss for whoever is
            // now to move.
            return if max_to_move {
                -PatternScore::FIVE
            } else {
                PatternScore::FIVE
            };
        }
        if depth == self.max_depth {
            return self.tracker.score(max_player, min_player, max_to_move);
        }

        let candidates = self.generator.candidates(grid);
        let ranked = self.rank_moves(grid, max_player, min_player, max_to_move, candidates);

        if max_to_move {
            let mut max_score = -INF;
            for &(pos, _) in &ranked {
                self.tracker.place(grid, pos, max_player);
                max_score = max_score.max(self.minimax(
                    grid,
                    max_player,
                    min_player,
                    false,
                    pos,
                    depth + 1,
                    alpha,
                    beta,
                ));
                self.tracker.remove(grid, pos);

                // Anything at or above beta will be rejected by the
                // parent minimizer; stop trying siblings.
                alpha = alpha.max(max_score);
                if self.pruning && alpha >= beta {
                    break;
                }
            }
            max_score
        } else {
            let mut min_score = INF;
            for &(pos, _) in &ranked {
                self.tracker.place(grid, pos, min_player);
                min_score = min_score.min(self.minimax(
                    grid,
                    max_player,
                    min_player,
                    true,
                    pos,
                    depth + 1,
                    alpha,
                    beta,
                ));
                self.tracker.remove(grid, pos);

                beta = beta.min(min_score);
                if self.pruning && beta <= alpha {
                    break;
                }
            }
            min_score
        }
    }

    /// Order candidates by a one-ply static evaluation.
    ///
    /// Each candidate is hypothetically played for the side to move,
    /// scored, and reverted. A stable sort (descending for the maximizer,
    /// ascending for the minimizer) keeps equal-scored candidates in
    /// generation order, which is what makes the root tie-break
    /// deterministic. This ordering only steers pruning; it never
    /// replaces the recursive evaluation.
    fn rank_moves(
        &mut self,
        grid: &mut Grid,
        max_player: Stone,
        min_player: Stone,
        max_to_move: bool,
        candidates: Vec<Pos>,
    ) -> Vec<(Pos, i32)> {
        let mover = if max_to_move { max_player } else { min_player };

        let mut scored: Vec<(Pos, i32)> = candidates
            .into_iter()
            .map(|pos| {
                self.tracker.place(grid, pos, mover);
                let score = self.tracker.score(max_player, min_player, max_to_move);
                self.tracker.remove(grid, pos);
                (pos, score)
            })
            .collect();

        if max_to_move {
            scored.sort_by(|a, b| b.1.cmp(&a.1));
        } else {
            scored.sort_by(|a, b| a.1.cmp(&b.1));
        }
        scored
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Play a scripted alternating sequence onto a fresh game.
    fn game_with_moves(size: usize, moves: &[(usize, usize)]) -> Game {
        let mut game = Game::new(size).unwrap();
        for &(r, c) in moves {
            assert!(game.play(Pos::new(r, c)), "scripted move ({r}, {c}) rejected");
        }
        game
    }

    #[test]
    fn test_rejects_finished_game() {
        let mut game = Game::new(9).unwrap();
        // Black walks to a quick five while White wanders elsewhere.
        for c in 0..4 {
            assert!(game.play(Pos::new(4, c)));
            assert!(game.play(Pos::new(8, c)));
        }
        assert!(game.play(Pos::new(4, 4)));
        assert!(game.is_over());

        let mut searcher = Searcher::new(2);
        assert_eq!(searcher.find_best_move(&game), Err(GameError::GameOver));
    }

    #[test]
    fn test_empty_board_plays_center() {
        let game = Game::new(9).unwrap();
        let mut searcher = Searcher::new(1);
        let result = searcher.find_best_move(&game).unwrap();
        assert_eq!(result.best_move, Pos::new(4, 4));
    }

    #[test]
    fn test_completes_open_four() {
        // Black: (4,2)..(4,5) with both ends open, Black to move.
        let game = game_with_moves(
            9,
            &[
                (4, 2),
                (0, 0),
                (4, 3),
                (0, 8),
                (4, 4),
                (8, 0),
                (4, 5),
                (8, 8),
            ],
        );
        assert_eq!(game.current_mover(), Stone::Black);

        for depth in 1..=2 {
            let mut searcher = Searcher::new(depth);
            let result = searcher.find_best_move(&game).unwrap();
            assert!(
                result.best_move == Pos::new(4, 1) || result.best_move == Pos::new(4, 6),
                "depth {depth}: expected a completing cell, got {:?}",
                result.best_move
            );
            assert_eq!(result.score, PatternScore::FIVE);

            let mut played = game.clone();
            assert!(played.play(result.best_move));
            assert!(played.is_over());
            assert_eq!(played.winner(), Some(Stone::Black));
        }
    }

    #[test]
    fn test_blocks_opponent_four() {
        // Black has W-blocked four (4,2)..(4,5) open only at (4,6);
        // White to move must block there or lose next ply.
        let game = game_with_moves(
            9,
            &[
                (4, 2),
                (4, 1),
                (4, 3),
                (0, 0),
                (4, 4),
                (0, 8),
                (4, 5),
            ],
        );
        assert_eq!(game.current_mover(), Stone::White);

        let mut searcher = Searcher::new(2);
        let result = searcher.find_best_move(&game).unwrap();
        assert_eq!(
            result.best_move,
            Pos::new(4, 6),
            "white must block the only completing cell"
        );
    }

    #[test]
    fn test_deterministic_for_fixed_inputs() {
        let game = game_with_moves(9, &[(4, 4), (3, 3), (4, 5), (3, 4)]);

        let mut a = Searcher::new(2);
        let mut b = Searcher::new(2);
        let ra = a.find_best_move(&game).unwrap();
        let rb = b.find_best_move(&game).unwrap();
        assert_eq!(ra.best_move, rb.best_move);
        assert_eq!(ra.score, rb.score);
    }

    #[test]
    fn test_pruning_equivalence_small_boards() {
        let positions = [
            game_with_moves(5, &[(2, 2), (1, 1)]),
            game_with_moves(5, &[(2, 2), (2, 3), (1, 1), (3, 3)]),
            game_with_moves(7, &[(3, 3), (2, 2)]),
        ];

        for (i, game) in positions.iter().enumerate() {
            for depth in 1..=3 {
                let mut pruned = Searcher::new(depth);
                let mut plain = Searcher::new(depth);
                plain.set_pruning(false);

                let with_cutoffs = pruned.find_best_move(game).unwrap();
                let without = plain.find_best_move(game).unwrap();

                assert_eq!(
                    with_cutoffs.score, without.score,
                    "position {i} depth {depth}: pruning changed the score"
                );
                assert_eq!(
                    with_cutoffs.best_move, without.best_move,
                    "position {i} depth {depth}: pruning changed the move"
                );
                assert!(
                    with_cutoffs.nodes <= without.nodes,
                    "position {i} depth {depth}: pruning should never visit more nodes"
                );
            }
        }
    }

    #[test]
    fn test_scratch_state_restored_between_calls() {
        // Two consecutive searches on the same position must agree; a
        // leaked scratch edit or unbalanced counter would break this.
        let game = game_with_moves(7, &[(3, 3), (2, 2), (3, 4)]);
        let mut searcher = Searcher::new(2);
        let first = searcher.find_best_move(&game).unwrap();
        let second = searcher.find_best_move(&game).unwrap();
        assert_eq!(first.best_move, second.best_move);
        assert_eq!(first.score, second.score);
    }
}
