// engine/tests/board_characterization.rs
#![forbid(unsafe_code)]

/**
 * Board engine characterization tests.
 *
 * Purpose:
 * - Lock in observable tilt/merge/terminal behavior behind the public API.
 * - Catch regressions in the sweep order, merge-once marking, event
 *   emission, and score accounting.
 *
 * What is tested:
 * - The canonical end-to-end scenarios (pair merge toward an edge, the
 *   [2,2,2,2] pairwise-merge row, full dead board).
 * - Event streams: order follows the sweep, coordinates are in real board
 *   space, merges report both the moved and the resulting value.
 * - Repeating a direction on a settled, pair-free board reports
 *   `changed = false` and leaves every counter alone.
 * - Session lifecycle: clear resets the board and score but the max score
 *   survives into the next game.
 */
use twenty48_engine::{tilt, Game, Grid, Side, TileEvent, GOAL, SIZE};

fn empty() -> Grid {
    [[0; SIZE]; SIZE]
}

#[test]
fn two_plus_two_west_leaves_a_single_four() {
    let mut game = Game::new();
    assert!(game.place_tile(2, 0, 0));
    assert!(game.place_tile(2, 0, 1));

    let out = game.tilt(Side::West);
    assert!(out.changed);
    assert_eq!(game.tile(0, 0), 4);
    let rest: u32 = game
        .grid()
        .iter()
        .flatten()
        .skip(1)
        .sum();
    assert_eq!(rest, 0);
    assert_eq!(game.score(), 4);
    assert_eq!(game.tile_count(), 1);
}

#[test]
fn row_of_equal_tiles_merges_adjacent_pairs_independently() {
    let mut grid = empty();
    grid[0] = [2, 2, 2, 2];
    let out = tilt(&grid, Side::West);
    assert_eq!(out.grid[0], [4, 4, 0, 0]);
    assert_eq!(out.score_delta, 8);
    // A tile produced by a merge must not merge again with the next
    // original tile, so [8, 0, 0, 0] would be wrong.
}

#[test]
fn second_tilt_in_the_same_direction_changes_nothing() {
    let mut game = Game::new();
    game.place_tile(2, 3, 0);
    game.place_tile(2, 1, 2);
    game.place_tile(4, 2, 2);

    let first = game.tilt(Side::North);
    assert!(first.changed);
    let snapshot = *game.grid();
    let score = game.score();

    let second = game.tilt(Side::North);
    assert!(!second.changed);
    assert!(second.events.is_empty());
    assert_eq!(*game.grid(), snapshot);
    assert_eq!(game.score(), score);
}

#[test]
fn events_come_in_sweep_order_with_real_coordinates() {
    // Column 1 holds (from top): 2, gap, 2, 4. Tilting north merges the 2s
    // first, then slides the 4 up behind them.
    let mut grid = empty();
    grid[0][1] = 2;
    grid[2][1] = 2;
    grid[3][1] = 4;

    let out = tilt(&grid, Side::North);
    assert_eq!(
        out.events,
        vec![
            TileEvent::Merged {
                moved_value: 2,
                result_value: 4,
                from: (2, 1),
                to: (0, 1),
            },
            TileEvent::Moved {
                value: 4,
                from: (3, 1),
                to: (1, 1),
            },
        ]
    );
    assert_eq!(out.grid[0][1], 4);
    assert_eq!(out.grid[1][1], 4);
}

#[test]
fn east_tilt_reports_events_in_real_space() {
    let mut grid = empty();
    grid[2][0] = 2;
    grid[2][3] = 2;

    let out = tilt(&grid, Side::East);
    assert_eq!(out.grid[2], [0, 0, 0, 4]);
    assert_eq!(
        out.events,
        vec![TileEvent::Merged {
            moved_value: 2,
            result_value: 4,
            from: (2, 0),
            to: (2, 3),
        }]
    );
}

#[test]
fn full_dead_board_is_terminal() {
    let game = Game::from_grid([
        [2, 4, 2, 4],
        [4, 2, 4, 2],
        [2, 4, 2, 4],
        [4, 2, 4, 2],
    ]);
    assert!(game.game_over());

    // Every direction refuses to move it.
    for side in Side::ALL {
        let out = tilt(game.grid(), side);
        assert!(!out.changed, "{side:?}");
    }
}

#[test]
fn goal_wins_regardless_of_merges_and_space() {
    let mut grid = empty();
    grid[0][0] = GOAL;
    grid[0][1] = 2;
    let game = Game::from_grid(grid);
    assert!(game.game_over());
}

#[test]
fn max_score_carries_across_sessions() {
    let mut game = Game::new();
    game.place_tile(4, 0, 0);
    game.place_tile(4, 0, 1);
    game.tilt(Side::West);
    assert_eq!(game.score(), 8);
    game.update_max_score();

    game.clear();
    game.place_tile(2, 0, 0);
    game.place_tile(2, 0, 1);
    game.tilt(Side::West);
    assert_eq!(game.score(), 4);
    game.update_max_score();
    assert_eq!(game.max_score(), 8);
}

#[test]
fn remap_matches_the_documented_turning_rule() {
    // West: column 0 of the turned board is row SIZE-1 of the real board,
    // and row 0 of the turned board is column 0 of the real board.
    assert_eq!(Side::West.tilt_row(2, 0), SIZE - 1);
    assert_eq!(Side::West.tilt_col(2, 0), 2);
    // East mirrors West; South flips rows.
    assert_eq!(Side::East.tilt_row(0, 2), 2);
    assert_eq!(Side::East.tilt_col(0, 2), SIZE - 1);
    assert_eq!(Side::South.tilt_row(1, 3), SIZE - 2);
    assert_eq!(Side::South.tilt_col(1, 3), SIZE - 1 - 3);
}

#[test]
fn interior_obstruction_settles_followers_below_it() {
    // Column: [4, 0, 2, 2] north -> 4 stays, the 2s merge right below it.
    let mut grid = empty();
    grid[0][0] = 4;
    grid[2][0] = 2;
    grid[3][0] = 2;

    let out = tilt(&grid, Side::North);
    assert_eq!(out.grid[0][0], 4);
    assert_eq!(out.grid[1][0], 4);
    assert_eq!(out.grid[2][0], 0);
    assert_eq!(out.grid[3][0], 0);
    assert_eq!(out.merges, 1);
}
