//! Incremental pattern-heuristic tracker
//!
//! The tracker keeps per-player counts of recognized line patterns and
//! maintains them under hypothetical, reversible edits to a scratch grid.
//! A single-cell edit only disturbs the four lines through that cell, so
//! [`HeuristicTracker::place`] subtracts both players' contributions along
//! those lines, writes the cell, and adds the contributions back. Windows
//! untouched by the edit cancel exactly, which is what makes the counts
//! track the true board state without a full rescan.
//!
//! The window classification is a deliberate approximation; it is kept
//! as-is rather than re-derived from a stricter definition of open and
//! closed patterns, because the search thresholds are calibrated to
//! these exact counts.

use arrayvec::ArrayVec;

use crate::board::{Grid, Pos, Stone, MAX_BOARD_SIZE};

use super::patterns::PatternScore;

/// Line buffer: a full row, column, or diagonal (at most 20 cells)
type Line = ArrayVec<Stone, MAX_BOARD_SIZE>;

/// The two slots of the tracker, in counter-array order
const PLAYERS: [Stone; 2] = [Stone::Black, Stone::White];

/// Per-player pattern counts.
///
/// All seven classes are tracked; closed twos carry no evaluation weight
/// but still participate in the reversibility invariant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PatternCounts {
    pub five: i32,
    pub open_four: i32,
    pub closed_four: i32,
    pub open_three: i32,
    pub closed_three: i32,
    pub open_two: i32,
    pub closed_two: i32,
}

/// Incremental per-player pattern counters over a scratch grid.
///
/// The tracker is a cached projection of grid contents: it is only valid
/// for the buffer it was rebuilt against and then edited through
/// [`HeuristicTracker::place`] / [`HeuristicTracker::remove`]. The search
/// engine rebuilds it once per top-level move request.
#[derive(Debug, Clone)]
pub struct HeuristicTracker {
    counts: [PatternCounts; 2],
}

impl HeuristicTracker {
    #[must_use]
    pub fn new() -> Self {
        Self {
            counts: [PatternCounts::default(); 2],
        }
    }

    /// Counts for a player (`None` for `Stone::Empty`)
    #[inline]
    #[must_use]
    pub fn counts(&self, player: Stone) -> Option<&PatternCounts> {
        match player {
            Stone::Black => Some(&self.counts[0]),
            Stone::White => Some(&self.counts[1]),
            Stone::Empty => None,
        }
    }

    /// Write `stone` at `pos`, keeping both players' counters current.
    ///
    /// Subtracts both players' line contributions around the cell's old
    /// value, writes the new value, then adds both players' contributions
    /// back. Both players must be updated on every edit: placing or
    /// removing a stone can open or close the *opponent's* patterns in the
    /// surrounding lines.
    pub fn place(&mut self, grid: &mut Grid, pos: Pos, stone: Stone) {
        for idx in 0..PLAYERS.len() {
            self.apply_delta(grid, pos, idx, -1);
        }
        grid.set(pos, stone);
        for idx in 0..PLAYERS.len() {
            self.apply_delta(grid, pos, idx, 1);
        }
    }

    /// Revert a hypothetical placement. Identical to placing `Empty`.
    #[inline]
    pub fn remove(&mut self, grid: &mut Grid, pos: Pos) {
        self.place(grid, pos, Stone::Empty);
    }

    /// Resynchronize with an authoritative grid.
    ///
    /// Zeroes both counters and replays every occupied cell as a placement
    /// onto a fresh scratch buffer. Called once at the start of each
    /// top-level search.
    pub fn rebuild(&mut self, grid: &Grid) {
        self.counts = [PatternCounts::default(); 2];
        let mut scratch = Grid::new(grid.size());
        for (pos, stone) in grid.iter_stones() {
            self.place(&mut scratch, pos, stone);
        }
    }

    /// Static evaluation from the maximizer's perspective.
    ///
    /// A counted five decides outright; an open four for the side to move
    /// is an unstoppable next-ply win; everything else is a weighted sum
    /// of pattern counts, added for the maximizer and subtracted for the
    /// minimizer.
    #[must_use]
    pub fn score(&self, max_player: Stone, min_player: Stone, max_to_move: bool) -> i32 {
        let (Some(max), Some(min)) = (self.counts(max_player), self.counts(min_player)) else {
            return 0;
        };

        if max.five > 0 {
            return PatternScore::FIVE;
        }
        if min.five > 0 {
            return -PatternScore::FIVE;
        }

        if max_to_move && max.open_four > 0 {
            return PatternScore::OPEN_FOUR_TO_MOVE;
        }
        if !max_to_move && min.open_four > 0 {
            return -PatternScore::OPEN_FOUR_TO_MOVE;
        }

        let mut score = 0;
        score += (max.open_four - min.open_four) * PatternScore::OPEN_FOUR;
        score += (max.closed_four - min.closed_four) * PatternScore::CLOSED_FOUR;
        score += (max.open_three - min.open_three) * PatternScore::OPEN_THREE;
        score += (max.closed_three - min.closed_three) * PatternScore::CLOSED_THREE;
        score += (max.open_two - min.open_two) * PatternScore::OPEN_TWO;
        score
    }

    /// Add (or subtract, for `sign == -1`) one player's pattern counts
    /// along the four lines through `pos`.
    fn apply_delta(&mut self, grid: &Grid, pos: Pos, player_idx: usize, sign: i32) {
        let player = PLAYERS[player_idx];
        let counter = &mut self.counts[player_idx];
        let size = grid.size();
        let mut line = Line::new();

        // Row
        for col in 0..size {
            line.push(grid.get(Pos::new(pos.row, col)));
        }
        scan_line(&line, player, counter, sign);

        // Column
        line.clear();
        for row in 0..size {
            line.push(grid.get(Pos::new(row, pos.col)));
        }
        scan_line(&line, player, counter, sign);

        // "\" diagonal through (row, col): length N - |col - row|.
        // Diagonals shorter than 5 cannot hold any five-length window.
        let diff = pos.row.abs_diff(pos.col);
        if size - diff >= 5 {
            let len = size - diff;
            line.clear();
            if pos.col >= pos.row {
                for i in 0..len {
                    line.push(grid.get(Pos::new(i, diff + i)));
                }
            } else {
                for i in 0..len {
                    line.push(grid.get(Pos::new(diff + i, i)));
                }
            }
            scan_line(&line, player, counter, sign);
        }

        // "/" diagonal: cells with constant row + col
        let sum = pos.row + pos.col;
        if sum + 1 >= 5 && 2 * size - 1 - sum >= 5 {
            line.clear();
            if sum >= size {
                let len = 2 * size - 1 - sum;
                for i in 0..len {
                    line.push(grid.get(Pos::new(size - 1 - i, size - len + i)));
                }
            } else {
                let len = sum + 1;
                for i in 0..len {
                    line.push(grid.get(Pos::new(len - 1 - i, i)));
                }
            }
            scan_line(&line, player, counter, sign);
        }
    }
}

impl Default for HeuristicTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// Classify every window of one line and accumulate the counts.
///
/// Open fours live in 6-cell windows (four stones flanked by two empty
/// endpoints); everything else lives in 5-cell windows containing only
/// the player's stones and empties, with at least two stones.
fn scan_line(line: &[Stone], player: Stone, counts: &mut PatternCounts, sign: i32) {
    let len = line.len();

    if len >= 6 {
        for start in 0..=(len - 6) {
            let window = &line[start..start + 6];
            let owned = window.iter().filter(|&&s| s == player).count();
            if owned == 4 && window[0] == Stone::Empty && window[5] == Stone::Empty {
                counts.open_four += sign;
            }
        }
    }

    if len >= 5 {
        for start in 0..=(len - 5) {
            let window = &line[start..start + 5];
            let owned = window.iter().filter(|&&s| s == player).count();
            let empty = window.iter().filter(|&&s| s == Stone::Empty).count();
            if owned + empty != 5 || owned < 2 {
                continue;
            }
            match owned {
                5 => counts.five += sign,
                4 => counts.closed_four += sign,
                3 => {
                    if window[0] == Stone::Empty && window[4] == Stone::Empty {
                        counts.open_three += sign;
                    } else {
                        counts.closed_three += sign;
                    }
                }
                2 => {
                    let open = (window[0] == Stone::Empty
                        && window[3] == Stone::Empty
                        && window[4] == Stone::Empty)
                        || (window[0] == Stone::Empty
                            && window[1] == Stone::Empty
                            && window[4] == Stone::Empty);
                    if open {
                        counts.open_two += sign;
                    } else {
                        counts.closed_two += sign;
                    }
                }
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn black_counts(tracker: &HeuristicTracker) -> PatternCounts {
        *tracker.counts(Stone::Black).unwrap()
    }

    /// Place stones through the tracker onto a fresh grid.
    fn tracked_position(size: usize, stones: &[(usize, usize, Stone)]) -> (HeuristicTracker, Grid) {
        let mut tracker = HeuristicTracker::new();
        let mut grid = Grid::new(size);
        for &(r, c, s) in stones {
            tracker.place(&mut grid, Pos::new(r, c), s);
        }
        (tracker, grid)
    }

    #[test]
    fn test_empty_tracker_counts_zero() {
        let tracker = HeuristicTracker::new();
        assert_eq!(black_counts(&tracker), PatternCounts::default());
        assert_eq!(tracker.score(Stone::Black, Stone::White, true), 0);
    }

    #[test]
    fn test_three_in_the_open_exact_counts() {
        // . . . . . B B B . . . . . . .  (row 7 of a 15x15 board)
        let (tracker, _) = tracked_position(
            15,
            &[(7, 5, Stone::Black), (7, 6, Stone::Black), (7, 7, Stone::Black)],
        );
        let counts = black_counts(&tracker);

        // Windows over the row: one with both endpoints empty, two with a
        // stone on an endpoint, and two two-stone windows blocked by the
        // run itself. Columns and diagonals hold single stones only.
        assert_eq!(counts.five, 0);
        assert_eq!(counts.open_four, 0);
        assert_eq!(counts.closed_four, 0);
        assert_eq!(counts.open_three, 1, "exactly one open three expected");
        assert_eq!(counts.closed_three, 2);
        assert_eq!(counts.open_two, 0);
        assert_eq!(counts.closed_two, 2);
    }

    #[test]
    fn test_open_four_counts() {
        // Four in a row with both ends empty
        let stones: Vec<_> = (5..9).map(|c| (7, c, Stone::Black)).collect();
        let (tracker, _) = tracked_position(15, &stones);
        let counts = black_counts(&tracker);

        assert_eq!(counts.five, 0);
        assert_eq!(counts.open_four, 1);
        // The same run also matches two four-in-five windows.
        assert_eq!(counts.closed_four, 2);
    }

    #[test]
    fn test_five_counted() {
        let stones: Vec<_> = (5..10).map(|c| (7, c, Stone::Black)).collect();
        let (tracker, _) = tracked_position(15, &stones);
        assert!(black_counts(&tracker).five > 0);
    }

    #[test]
    fn test_place_then_remove_restores_counters() {
        // A tangled middlegame with patterns for both players
        let (mut tracker, mut grid) = tracked_position(
            15,
            &[
                (7, 5, Stone::Black),
                (7, 6, Stone::Black),
                (7, 7, Stone::Black),
                (6, 6, Stone::White),
                (8, 8, Stone::White),
                (5, 5, Stone::White),
                (9, 7, Stone::Black),
                (6, 8, Stone::White),
            ],
        );

        let black_before = *tracker.counts(Stone::Black).unwrap();
        let white_before = *tracker.counts(Stone::White).unwrap();
        let grid_before = grid.clone();

        // Probe several cells, including ones that touch both players'
        // lines and ones near the edge.
        for pos in [Pos::new(7, 8), Pos::new(7, 4), Pos::new(0, 0), Pos::new(6, 7)] {
            for stone in [Stone::Black, Stone::White] {
                tracker.place(&mut grid, pos, stone);
                tracker.remove(&mut grid, pos);

                assert_eq!(
                    *tracker.counts(Stone::Black).unwrap(),
                    black_before,
                    "black counters must be restored after probing {pos:?} with {stone:?}"
                );
                assert_eq!(
                    *tracker.counts(Stone::White).unwrap(),
                    white_before,
                    "white counters must be restored after probing {pos:?} with {stone:?}"
                );
                assert_eq!(grid, grid_before, "grid must be restored");
            }
        }
    }

    #[test]
    fn test_rebuild_matches_incremental_counts() {
        let stones = [
            (4, 4, Stone::Black),
            (4, 5, Stone::White),
            (5, 5, Stone::Black),
            (3, 3, Stone::White),
            (6, 6, Stone::Black),
            (2, 2, Stone::White),
        ];
        let (incremental, grid) = tracked_position(11, &stones);

        let mut rebuilt = HeuristicTracker::new();
        rebuilt.rebuild(&grid);

        assert_eq!(
            incremental.counts(Stone::Black),
            rebuilt.counts(Stone::Black)
        );
        assert_eq!(
            incremental.counts(Stone::White),
            rebuilt.counts(Stone::White)
        );
    }

    #[test]
    fn test_short_diagonals_not_scanned() {
        // A corner stone on a 9x9 board: its "/" diagonal has length 1 and
        // must not be scanned; placing and removing must still balance.
        let mut tracker = HeuristicTracker::new();
        let mut grid = Grid::new(9);
        tracker.place(&mut grid, Pos::new(0, 0), Stone::Black);
        tracker.remove(&mut grid, Pos::new(0, 0));
        assert_eq!(black_counts(&tracker), PatternCounts::default());
    }

    #[test]
    fn test_score_five_dominates() {
        let five: Vec<_> = (5..10).map(|c| (7, c, Stone::Black)).collect();
        let (with_five, _) = tracked_position(15, &five);

        let four: Vec<_> = (5..9).map(|c| (7, c, Stone::Black)).collect();
        let (with_four, _) = tracked_position(15, &four);

        let five_score = with_five.score(Stone::Black, Stone::White, true);
        let four_score = with_four.score(Stone::Black, Stone::White, true);

        assert_eq!(five_score, PatternScore::FIVE);
        assert!(
            five_score > four_score,
            "a counted five ({five_score}) must stand above any fourless score ({four_score})"
        );
    }

    #[test]
    fn test_score_open_four_on_the_move() {
        let stones: Vec<_> = (5..9).map(|c| (7, c, Stone::Black)).collect();
        let (tracker, _) = tracked_position(15, &stones);

        // Maximizer to move with an open four: forced win next ply.
        assert_eq!(
            tracker.score(Stone::Black, Stone::White, true),
            PatternScore::OPEN_FOUR_TO_MOVE
        );
        // Not on the move, the open four only feeds the weighted sum.
        let off_move = tracker.score(Stone::Black, Stone::White, false);
        assert!(off_move < PatternScore::OPEN_FOUR_TO_MOVE);
        assert!(off_move >= PatternScore::OPEN_FOUR, "still clearly winning material");
    }

    #[test]
    fn test_score_symmetric_for_minimizer() {
        let stones: Vec<_> = (5..9).map(|c| (7, c, Stone::White)).collect();
        let (tracker, _) = tracked_position(15, &stones);

        // Minimizer to move with an open four mirrors the maximizer case.
        assert_eq!(
            tracker.score(Stone::Black, Stone::White, false),
            -PatternScore::OPEN_FOUR_TO_MOVE
        );
    }

    #[test]
    fn test_closed_two_tracked_but_unweighted() {
        // B B blocked on the left by the edge-adjacent white stone
        let (tracker, _) = tracked_position(
            15,
            &[(7, 4, Stone::White), (7, 5, Stone::Black), (7, 6, Stone::Black)],
        );
        let counts = black_counts(&tracker);
        assert!(counts.closed_two > 0, "closed twos should be counted");

        // Zeroing closed_two must not change the score.
        let mut altered = tracker.clone();
        altered.counts[0].closed_two = 0;
        assert_eq!(
            tracker.score(Stone::Black, Stone::White, true),
            altered.score(Stone::Black, Stone::White, true)
        );
    }
}
