// engine/src/engine/game.rs
#![forbid(unsafe_code)]

use crate::engine::board::{can_merge, has_goal, tilt, Grid, TiltOutcome};
use crate::engine::constants::{SIZE, SQUARES};
use crate::engine::direction::Side;

/**
 * One game session plus the max score retained across sessions.
 *
 * The grid is owned exclusively by the engine: it changes only through
 * [`Game::place_tile`], [`Game::tilt`] and [`Game::clear`]. The tile count
 * tracks occupied cells so the board-full test never rescans the grid.
 */
#[derive(Clone, Debug)]
pub struct Game {
    grid: Grid,
    score: u64,
    max_score: u64,
    count: usize,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// An empty board with zero score.
    pub fn new() -> Self {
        Self {
            grid: [[0; SIZE]; SIZE],
            score: 0,
            max_score: 0,
            count: 0,
        }
    }

    /// Construct mid-game state from an existing grid; the tile count is
    /// derived by scanning once.
    pub fn from_grid(grid: Grid) -> Self {
        let count = grid.iter().flatten().filter(|&&v| v != 0).count();
        Self {
            grid,
            score: 0,
            max_score: 0,
            count,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Tile value at `(row, col)`, 0 if empty.
    pub fn tile(&self, row: usize, col: usize) -> u32 {
        assert!(row < SIZE && col < SIZE, "coordinates out of range");
        self.grid[row][col]
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn max_score(&self) -> u64 {
        self.max_score
    }

    /// Number of occupied cells.
    pub fn tile_count(&self) -> usize {
        self.count
    }

    /// Empty cells left before the board is full.
    pub fn remaining_capacity(&self) -> usize {
        SQUARES - self.count
    }

    /// Reset the board and score for a new game. The max score survives.
    pub fn clear(&mut self) {
        self.grid = [[0; SIZE]; SIZE];
        self.score = 0;
        self.count = 0;
    }

    /**
     * Insert `value` (2 or 4) at `(row, col)` iff that cell is empty.
     * Returns false on an occupied cell; the caller is expected to retry
     * elsewhere, bounded by [`Game::remaining_capacity`].
     *
     * A value other than 2 or 4, or an out-of-range coordinate, is a
     * programming error and panics.
     */
    pub fn place_tile(&mut self, value: u32, row: usize, col: usize) -> bool {
        assert!(value == 2 || value == 4, "tile value must be 2 or 4");
        assert!(row < SIZE && col < SIZE, "coordinates out of range");
        if self.grid[row][col] != 0 {
            return false;
        }
        self.grid[row][col] = value;
        self.count += 1;
        true
    }

    /// Tilt the board toward `side`, folding the outcome into score and
    /// tile count. An unchanged board leaves all state untouched.
    pub fn tilt(&mut self, side: Side) -> TiltOutcome {
        let outcome = tilt(&self.grid, side);
        if outcome.changed {
            self.grid = outcome.grid;
            self.score += outcome.score_delta;
            self.count -= outcome.merges as usize;
        }
        outcome
    }

    /// True iff the current game is over: the goal value is on the board,
    /// or the board is full and no adjacent equal pair remains.
    pub fn game_over(&self) -> bool {
        has_goal(&self.grid) || (self.count == SQUARES && !can_merge(&self.grid))
    }

    /// Fold the current score into the cross-session max. Called by the
    /// session loop when a game reaches its terminal state.
    pub fn update_max_score(&mut self) {
        if self.score > self.max_score {
            self.max_score = self.score;
        }
    }
}
