//! Pattern scores for Gomoku evaluation
//!
//! These constants define the scoring weights for recognized line
//! patterns. The values are fixed: the search's terminal scores and the
//! pruning bounds are calibrated against them, so they must not drift.

/// Pattern scores for evaluation
pub struct PatternScore;

impl PatternScore {
    /// Five in a row counted by the tracker - immediate win
    pub const FIVE: i32 = 1_000_000;

    /// Open four with the side to move: the win cannot be stopped next ply
    pub const OPEN_FOUR_TO_MOVE: i32 = 500_000;

    // Linear weights applied per counted pattern
    /// Open four: _OOOO_ inside a 6-cell window
    pub const OPEN_FOUR: i32 = 50_000;
    /// Closed four: four stones in a 5-cell window with one empty
    pub const CLOSED_FOUR: i32 = 10_000;
    /// Open three: three stones in a 5-cell window, both window ends empty
    pub const OPEN_THREE: i32 = 1_000;
    /// Closed three: three stones in a 5-cell window, an end blocked
    pub const CLOSED_THREE: i32 = 300;
    /// Open two: two stones in a 5-cell window with room on both sides
    pub const OPEN_TWO: i32 = 50;
    // Closed twos are tracked but carry no weight in the evaluation.
}
