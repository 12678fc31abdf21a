// cli/src/session/display.rs
#![forbid(unsafe_code)]

//! Console rendering of the board and scores.
//!
//! Pure formatting helpers; the front end decides when to draw.

use twenty48_engine::{Grid, GOAL, SIZE};

// ANSI codes for tile display
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const YELLOW: &str = "\x1b[93m";
pub const RED: &str = "\x1b[91m";
pub const TEAL: &str = "\x1b[96m";

/// Color ramp by tile magnitude; the goal tile gets the loudest one.
fn value_color(value: u32) -> &'static str {
    match value {
        0 => DIM,
        v if v >= GOAL => TEAL,
        v if v >= 128 => RED,
        v if v >= 8 => YELLOW,
        _ => "",
    }
}

/// One cell, padded to 6 columns, colorized.
fn format_cell(value: u32) -> String {
    if value == 0 {
        return " ".repeat(6);
    }
    format!("{}{:>6}{}", value_color(value), value, RESET)
}

/// Render the full board plus the score line.
pub fn render_board(grid: &Grid, score: u64, max_score: u64) -> String {
    let rule: String = format!("+{}", format!("{}+", "-".repeat(6)).repeat(SIZE));

    let mut out = String::new();
    out.push_str(&rule);
    out.push('\n');
    for row in grid.iter() {
        out.push('|');
        for &value in row.iter() {
            out.push_str(&format_cell(value));
            out.push('|');
        }
        out.push('\n');
        out.push_str(&rule);
        out.push('\n');
    }
    out.push_str(&format!(
        "{BOLD}Score:{RESET} {score}   {BOLD}Max:{RESET} {max_score}\n"
    ));
    out
}

/// Banner printed when a game reaches its terminal state.
pub fn game_over_banner() -> String {
    format!("{BOLD}=== GAME OVER ==={RESET}  (type 'new' to play again, 'quit' to exit)\n")
}
