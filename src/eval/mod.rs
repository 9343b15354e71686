//! Evaluation module for Gomoku positions
//!
//! This module provides pattern counting and scoring for board positions:
//! - Incremental per-player pattern counters (twos, threes, fours, fives)
//! - Fixed scoring weights with win/forced-win thresholds

pub mod heuristic;
pub mod patterns;

pub use heuristic::{HeuristicTracker, PatternCounts};
pub use patterns::PatternScore;
