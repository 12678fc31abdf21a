// engine/src/engine/direction.rs
#![forbid(unsafe_code)]

use crate::engine::constants::SIZE;

/// The edge tiles slide toward during a tilt.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Side {
    North,
    East,
    South,
    West,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::North, Side::East, Side::South, Side::West];

    /**
     * Row on the real board corresponding to `(r, c)` of a board turned so
     * that row 0 faces this side.
     *
     * North is the identity. For West, column 0 of the turned board is row
     * `SIZE - 1` of the real board, so `tilt_row` returns `SIZE - 1 - c`.
     * Together with `tilt_col` this remap lets one north-facing sweep serve
     * all four directions.
     */
    #[inline]
    pub fn tilt_row(self, r: usize, c: usize) -> usize {
        match self {
            Side::North => r,
            Side::East => c,
            Side::South => SIZE - 1 - r,
            Side::West => SIZE - 1 - c,
        }
    }

    /// Column counterpart of [`Side::tilt_row`].
    #[inline]
    pub fn tilt_col(self, r: usize, c: usize) -> usize {
        match self {
            Side::North => c,
            Side::East => SIZE - 1 - r,
            Side::South => SIZE - 1 - c,
            Side::West => r,
        }
    }
}
