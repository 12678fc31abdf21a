// engine/src/engine/mod.rs
#![forbid(unsafe_code)]

mod board;
mod constants;
mod direction;
mod game;

/**
 * Curated engine public API.
 *
 * Internal implementation modules remain private; only stable items are re-exported here.
 */
pub use board::{can_merge, has_goal, tilt, Grid, TileEvent, TiltOutcome};
pub use constants::{GOAL, SIZE, SQUARES};
pub use direction::Side;
pub use game::Game;
