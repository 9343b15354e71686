//! Search module for the Gomoku AI
//!
//! Contains:
//! - Candidate move generation near existing stones
//! - Fixed-depth minimax with alpha-beta pruning and static move ordering

pub mod candidates;
pub mod minimax;

pub use candidates::{CandidateGenerator, CandidatePolicy};
pub use minimax::{SearchResult, Searcher};
