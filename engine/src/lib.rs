// engine/src/lib.rs
#![forbid(unsafe_code)]

pub mod engine;

// Re-export the bits the CLI and tests need:
pub use engine::{
    can_merge, has_goal, tilt, Game, Grid, Side, TileEvent, TiltOutcome, GOAL, SIZE, SQUARES,
};
