// engine/src/engine/constants.rs
#![forbid(unsafe_code)]

/// Number of rows and of columns on the board.
pub const SIZE: usize = 4;

/// Number of squares on the board.
pub const SQUARES: usize = SIZE * SIZE;

/// Aim of the game. If a tile reaches this value, the game ends in victory.
pub const GOAL: u32 = 2048;
