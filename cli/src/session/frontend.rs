// cli/src/session/frontend.rs
#![forbid(unsafe_code)]

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use twenty48_engine::{Grid, Side, SIZE};

use super::display;
use super::script::{parse_side, side_keyword, ScriptItem};

/// Session command read from the collaborator.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MoveCmd {
    Tilt(Side),
    NewGame,
    Quit,
}

/**
 * The display/input collaborator the engine talks to, and nothing else:
 * the session loop pulls tile placements and move commands from it and
 * pushes per-tile notifications, scores, and the end-of-game signal back.
 *
 * Implementations that render must be able to mirror the board from the
 * notifications alone; the read access granted to `next_tile` exists only
 * so a tile source can propose an empty cell.
 */
pub trait FrontEnd {
    /// Propose the next random tile as `(value, row, col)`, or `None` when
    /// the source has nothing to offer (exhausted script, full board).
    fn next_tile(&mut self, grid: &Grid) -> Option<(u32, usize, usize)>;

    /// Block until the next directional or session command.
    fn next_move(&mut self) -> MoveCmd;

    fn board_cleared(&mut self);
    fn tile_added(&mut self, value: u32, row: usize, col: usize);
    fn tile_moved(&mut self, value: u32, from: (usize, usize), to: (usize, usize));
    fn tile_merged(
        &mut self,
        moved_value: u32,
        result_value: u32,
        from: (usize, usize),
        to: (usize, usize),
    );
    fn score_changed(&mut self, current: u64, max: u64);
    fn game_ended(&mut self);
}

enum Input {
    /// Line-at-a-time commands from a reader (normally stdin).
    Interactive(Box<dyn BufRead>),
    /// Pre-parsed `--testing` script.
    Scripted(VecDeque<ScriptItem>),
}

/**
 * Console front end: renders to stdout, reads commands from stdin (or a
 * script in testing mode), draws random tiles from a seeded RNG, and
 * optionally records a replay log to stderr in the script grammar.
 */
pub struct Console {
    input: Input,
    rng: StdRng,
    display: bool,
    log: bool,
    /// Board state reconstructed purely from notifications.
    mirror: Grid,
    score: u64,
    max_score: u64,
}

impl Console {
    pub fn interactive(seed: Option<u64>, display: bool, log: bool) -> Self {
        Self::with_reader(Box::new(io::stdin().lock()), seed, display, log)
    }

    /// Interactive front end with an injected command reader.
    pub fn with_reader(
        reader: Box<dyn BufRead>,
        seed: Option<u64>,
        display: bool,
        log: bool,
    ) -> Self {
        Self {
            input: Input::Interactive(reader),
            rng: seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64),
            display,
            log,
            mirror: [[0; SIZE]; SIZE],
            score: 0,
            max_score: 0,
        }
    }

    pub fn scripted(script: VecDeque<ScriptItem>, display: bool, log: bool) -> Self {
        Self {
            input: Input::Scripted(script),
            // Unused in scripted mode; placements come from the script.
            rng: StdRng::seed_from_u64(0),
            display,
            log,
            mirror: [[0; SIZE]; SIZE],
            score: 0,
            max_score: 0,
        }
    }

    fn redraw(&self) {
        if self.display {
            print!(
                "{}",
                display::render_board(&self.mirror, self.score, self.max_score)
            );
            let _ = io::stdout().flush();
        }
    }

    fn log_line(&self, line: &str) {
        if self.log {
            eprintln!("{line}");
        }
    }

    /// Uniform draw from the currently empty cells; 2 with probability
    /// 9/10, otherwise 4.
    fn random_tile(&mut self, grid: &Grid) -> Option<(u32, usize, usize)> {
        let empties: Vec<(usize, usize)> = (0..SIZE)
            .flat_map(|r| (0..SIZE).map(move |c| (r, c)))
            .filter(|&(r, c)| grid[r][c] == 0)
            .collect();
        if empties.is_empty() {
            return None;
        }
        let (row, col) = empties[self.rng.gen_range(0..empties.len())];
        let value = if self.rng.gen_range(0..10) < 9 { 2 } else { 4 };
        Some((value, row, col))
    }

    /// Map one interactive command line; `None` means ask again.
    fn parse_command(line: &str) -> Option<MoveCmd> {
        let word = line.trim().to_lowercase();
        if let Some(side) = parse_side(&word) {
            return Some(MoveCmd::Tilt(side));
        }
        match word.as_str() {
            "u" => Some(MoveCmd::Tilt(Side::North)),
            "d" => Some(MoveCmd::Tilt(Side::South)),
            "l" => Some(MoveCmd::Tilt(Side::West)),
            "r" => Some(MoveCmd::Tilt(Side::East)),
            "new" | "n" => Some(MoveCmd::NewGame),
            "quit" | "q" => Some(MoveCmd::Quit),
            _ => None,
        }
    }

    fn read_interactive_move(reader: &mut dyn BufRead) -> MoveCmd {
        loop {
            let mut line = String::new();
            match reader.read_line(&mut line) {
                // EOF: treat like quitting.
                Ok(0) => return MoveCmd::Quit,
                Err(err) => {
                    warn!("stdin read failed: {err}");
                    return MoveCmd::Quit;
                }
                Ok(_) => {}
            }
            match Self::parse_command(&line) {
                Some(cmd) => return cmd,
                None => {
                    println!("commands: left right up down new quit");
                }
            }
        }
    }
}

impl FrontEnd for Console {
    fn next_tile(&mut self, grid: &Grid) -> Option<(u32, usize, usize)> {
        if let Input::Scripted(items) = &mut self.input {
            return match items.front().copied() {
                Some(ScriptItem::Tile { value, row, col }) => {
                    items.pop_front();
                    Some((value, row, col))
                }
                // Next scripted item is a command; no tile to place now.
                _ => None,
            };
        }
        self.random_tile(grid)
    }

    fn next_move(&mut self) -> MoveCmd {
        let cmd = match &mut self.input {
            Input::Interactive(reader) => Self::read_interactive_move(reader.as_mut()),
            Input::Scripted(items) => loop {
                match items.pop_front() {
                    Some(ScriptItem::Move(side)) => break MoveCmd::Tilt(side),
                    Some(ScriptItem::NewGame) => break MoveCmd::NewGame,
                    Some(ScriptItem::Quit) | None => break MoveCmd::Quit,
                    Some(ScriptItem::Tile { value, row, col }) => {
                        warn!("script: tile {value} {row} {col} where a move was expected; dropped");
                    }
                }
            },
        };
        debug!("move: {cmd:?}");
        match cmd {
            MoveCmd::Tilt(side) => self.log_line(&format!("move {}", side_keyword(side))),
            MoveCmd::NewGame => self.log_line("new"),
            MoveCmd::Quit => self.log_line("quit"),
        }
        cmd
    }

    fn board_cleared(&mut self) {
        self.mirror = [[0; SIZE]; SIZE];
        self.score = 0;
    }

    fn tile_added(&mut self, value: u32, row: usize, col: usize) {
        self.mirror[row][col] = value;
        self.log_line(&format!("tile {value} {row} {col}"));
        self.redraw();
    }

    fn tile_moved(&mut self, value: u32, from: (usize, usize), to: (usize, usize)) {
        self.mirror[from.0][from.1] = 0;
        self.mirror[to.0][to.1] = value;
    }

    fn tile_merged(
        &mut self,
        _moved_value: u32,
        result_value: u32,
        from: (usize, usize),
        to: (usize, usize),
    ) {
        self.mirror[from.0][from.1] = 0;
        self.mirror[to.0][to.1] = result_value;
    }

    fn score_changed(&mut self, current: u64, max: u64) {
        self.score = current;
        self.max_score = max;
        self.redraw();
    }

    fn game_ended(&mut self) {
        if self.display {
            print!("{}", display::game_over_banner());
            let _ = io::stdout().flush();
        }
        debug!("game ended with score {}", self.score);
    }
}
