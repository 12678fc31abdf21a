// engine/src/engine/board.rs
#![forbid(unsafe_code)]

use crate::engine::constants::{GOAL, SIZE};
use crate::engine::direction::Side;

/// Board contents: `grid[r][c]` is the tile value at row `r`, column `c`,
/// or 0 if there is no tile there.
pub type Grid = [[u32; SIZE]; SIZE];

/// One per-tile notification produced by a tilt, in the order the sweep
/// computed it. Coordinates are in real board space, not tilted space.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TileEvent {
    Moved {
        value: u32,
        from: (usize, usize),
        to: (usize, usize),
    },
    Merged {
        moved_value: u32,
        result_value: u32,
        from: (usize, usize),
        to: (usize, usize),
    },
}

/// Result of tilting a grid toward one side.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TiltOutcome {
    pub grid: Grid,
    /// True iff any tile's position or value changed. When false, `grid`
    /// equals the input and `events` is empty.
    pub changed: bool,
    /// Points gained this move: the doubled value of every merge.
    pub score_delta: u64,
    /// Number of merges, i.e. tiles removed from the board.
    pub merges: u32,
    pub events: Vec<TileEvent>,
}

/// Cell occupancy marker in the tilted working buffer.
const EMPTY: i8 = 0;
const LIVE: i8 = 1;
/// A merge destination; blocks sliding and cannot merge again this move.
const MERGED: i8 = -1;

/**
 * Pure transition kernel: slide all tiles toward `side`, merging equal
 * adjacent tiles at most once per tile.
 *
 * The grid is copied into a working buffer turned so that `side` faces
 * north, one top-down sweep resolves the move, and the buffer is written
 * back through the inverse remap. Sweep rule per occupied cell, scanning
 * toward row 0 of the tilted space:
 * - an equal, live, not-yet-merged tile is the nearest eligible neighbor:
 *   merge into it and stop;
 * - any other occupied cell (unequal, or already a merge destination)
 *   blocks: settle immediately below it;
 * - an unobstructed scan settles at row 0.
 */
pub fn tilt(grid: &Grid, side: Side) -> TiltOutcome {
    let mut board = [[0u32; SIZE]; SIZE];
    let mut tiles = [[EMPTY; SIZE]; SIZE];
    for r in 0..SIZE {
        for c in 0..SIZE {
            board[r][c] = grid[side.tilt_row(r, c)][side.tilt_col(r, c)];
            if board[r][c] > 0 {
                tiles[r][c] = LIVE;
            }
        }
    }

    let mut changed = false;
    let mut score_delta: u64 = 0;
    let mut merges: u32 = 0;
    let mut events = Vec::new();

    // Row 0 never moves; sweep the rest top-to-bottom so every tile sees a
    // fully settled column above it.
    for r in 1..SIZE {
        for c in 0..SIZE {
            if board[r][c] == 0 {
                continue;
            }
            let mut dest = r;
            let mut merged = false;
            while dest > 0 {
                let above = dest - 1;
                if tiles[above][c] == LIVE && board[above][c] == board[r][c] {
                    merged = true;
                    break;
                }
                if board[above][c] != 0 {
                    break;
                }
                dest = above;
            }

            if merged {
                let into = dest - 1;
                let moved_value = board[r][c];
                board[into][c] *= 2;
                tiles[into][c] = MERGED;
                board[r][c] = 0;
                tiles[r][c] = EMPTY;
                score_delta += u64::from(board[into][c]);
                merges += 1;
                changed = true;
                events.push(TileEvent::Merged {
                    moved_value,
                    result_value: board[into][c],
                    from: (side.tilt_row(r, c), side.tilt_col(r, c)),
                    to: (side.tilt_row(into, c), side.tilt_col(into, c)),
                });
            } else if dest != r {
                board[dest][c] = board[r][c];
                board[r][c] = 0;
                tiles[dest][c] = LIVE;
                tiles[r][c] = EMPTY;
                changed = true;
                events.push(TileEvent::Moved {
                    value: board[dest][c],
                    from: (side.tilt_row(r, c), side.tilt_col(r, c)),
                    to: (side.tilt_row(dest, c), side.tilt_col(dest, c)),
                });
            }
        }
    }

    if !changed {
        return TiltOutcome {
            grid: *grid,
            changed: false,
            score_delta: 0,
            merges: 0,
            events: Vec::new(),
        };
    }

    let mut out = [[0u32; SIZE]; SIZE];
    for r in 0..SIZE {
        for c in 0..SIZE {
            out[side.tilt_row(r, c)][side.tilt_col(r, c)] = board[r][c];
        }
    }

    TiltOutcome {
        grid: out,
        changed: true,
        score_delta,
        merges,
        events,
    }
}

/// True iff some horizontally or vertically adjacent pair of cells holds
/// equal non-zero values. Full pairwise scan over both axes.
pub fn can_merge(grid: &Grid) -> bool {
    for r in 0..SIZE {
        for c in 0..SIZE {
            let v = grid[r][c];
            if v == 0 {
                continue;
            }
            if r + 1 < SIZE && grid[r + 1][c] == v {
                return true;
            }
            if c + 1 < SIZE && grid[r][c + 1] == v {
                return true;
            }
        }
    }
    false
}

/// True iff any cell holds the goal value.
pub fn has_goal(grid: &Grid) -> bool {
    grid.iter().flatten().any(|&v| v == GOAL)
}
