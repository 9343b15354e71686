//! Win condition for five-in-a-row

use crate::board::{Grid, Pos};

/// The 4 axis families, each as two opposite unit steps. A five can run
/// horizontally, vertically, or along either diagonal.
const AXES: [[(i32, i32); 2]; 4] = [
    [(0, 1), (0, -1)],
    [(1, 0), (-1, 0)],
    [(1, 1), (-1, -1)],
    [(1, -1), (-1, 1)],
];

/// Check whether `pos` is part of a five-in-a-row on `grid`.
///
/// Pure function of the buffer: it reads the owner at `pos` and counts
/// consecutive same-owner cells up to 4 steps in both directions of each
/// axis, stopping at an edge or a mismatch. The search engine calls this
/// against scratch boards, so it must not depend on any `Game` state.
/// Meant to be called on the just-played (occupied) cell.
#[must_use]
pub fn check_win(grid: &Grid, pos: Pos) -> bool {
    let owner = grid.get(pos);
    let size = grid.size();

    for axis in &AXES {
        // The played cell itself is the first of the five.
        let mut count = 1;

        for &(dr, dc) in axis {
            for dist in 1..5 {
                let Some(next) = pos.step(dr, dc, dist, size) else {
                    break;
                };
                if grid.get(next) != owner {
                    break;
                }
                count += 1;
                if count >= 5 {
                    return true;
                }
            }
        }
    }
    false
}
