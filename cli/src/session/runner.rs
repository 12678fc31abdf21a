// cli/src/session/runner.rs
#![forbid(unsafe_code)]

use log::{debug, warn};

use twenty48_engine::{Game, TileEvent};

use super::frontend::{FrontEnd, MoveCmd};

/**
 * The strict turn-taking loop around the Board Engine: wait for a move,
 * apply it if the board is not terminal, add a random tile when the board
 * changed, re-check the terminal state. One `Game` lives for the whole
 * session so the max score carries across games.
 */
pub struct Session {
    game: Game,
    front: Box<dyn FrontEnd>,
}

impl Session {
    pub fn new(front: Box<dyn FrontEnd>) -> Self {
        Self {
            game: Game::new(),
            front,
        }
    }

    /// Play games until the front end asks to quit.
    pub fn run(&mut self) {
        while self.play_one() {}
    }

    /// Play one game. Returns true iff play should continue with another.
    fn play_one(&mut self) -> bool {
        self.game.clear();
        self.front.board_cleared();
        self.front
            .score_changed(self.game.score(), self.game.max_score());
        self.add_random_tile();

        loop {
            if !self.game.game_over() {
                self.add_random_tile();
            }

            if self.game.game_over() {
                self.game.update_max_score();
                self.front
                    .score_changed(self.game.score(), self.game.max_score());
                self.front.game_ended();
            }

            // Block until a board-changing move or a session command.
            loop {
                match self.front.next_move() {
                    MoveCmd::Tilt(side) => {
                        if self.game.game_over() {
                            // Only `new` or `quit` make sense now.
                            continue;
                        }
                        let outcome = self.game.tilt(side);
                        debug!(
                            "tilt {side:?}: changed={} merges={} score={}",
                            outcome.changed,
                            outcome.merges,
                            self.game.score()
                        );
                        if outcome.changed {
                            self.forward_events(&outcome.events);
                            break;
                        }
                    }
                    MoveCmd::NewGame => return true,
                    MoveCmd::Quit => return false,
                }
            }

            self.front
                .score_changed(self.game.score(), self.game.max_score());
        }
    }

    /**
     * Add one random tile from the front end's source.
     *
     * Retries on occupied cells are capped at the remaining capacity, so a
     * script proposing bad cells cannot loop forever; a full board or an
     * exhausted source simply reports failure and play proceeds to the
     * terminal check.
     */
    fn add_random_tile(&mut self) -> bool {
        let mut attempts = self.game.remaining_capacity();
        while attempts > 0 {
            let Some((value, row, col)) = self.front.next_tile(self.game.grid()) else {
                return false;
            };
            if self.game.place_tile(value, row, col) {
                self.front.tile_added(value, row, col);
                return true;
            }
            warn!("placement at occupied cell ({row}, {col}) skipped");
            attempts -= 1;
        }
        false
    }

    fn forward_events(&mut self, events: &[TileEvent]) {
        for event in events {
            match *event {
                TileEvent::Moved { value, from, to } => self.front.tile_moved(value, from, to),
                TileEvent::Merged {
                    moved_value,
                    result_value,
                    from,
                    to,
                } => self
                    .front
                    .tile_merged(moved_value, result_value, from, to),
            }
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }
}
