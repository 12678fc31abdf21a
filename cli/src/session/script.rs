// cli/src/session/script.rs
#![forbid(unsafe_code)]

use std::collections::VecDeque;

use log::warn;

use twenty48_engine::{Side, SIZE};

/**
 * Scripted-input grammar for `--testing` mode, one item per line:
 *
 * ```text
 * tile <value> <row> <col>
 * move <north|south|east|west|up|down|left|right>
 * new
 * quit
 * ```
 *
 * Blank lines and `#` comments are ignored. The `--log` replay output uses
 * exactly this grammar, so a logged game feeds straight back into
 * `--testing`.
 */
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ScriptItem {
    Tile { value: u32, row: usize, col: usize },
    Move(Side),
    NewGame,
    Quit,
}

/// Direction keywords: compass names or arrow-key names.
pub fn parse_side(s: &str) -> Option<Side> {
    match s.to_lowercase().as_str() {
        "north" | "up" => Some(Side::North),
        "south" | "down" => Some(Side::South),
        "west" | "left" => Some(Side::West),
        "east" | "right" => Some(Side::East),
        _ => None,
    }
}

/// Keyword emitted for a side in logs; round-trips through [`parse_side`].
pub fn side_keyword(side: Side) -> &'static str {
    match side {
        Side::North => "north",
        Side::East => "east",
        Side::South => "south",
        Side::West => "west",
    }
}

/// Parse one line. Returns `None` for blanks, comments, and malformed
/// lines (the latter with a warning); script playback simply skips them.
pub fn parse_line(line: &str) -> Option<ScriptItem> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let mut words = line.split_whitespace();
    let item = match words.next()?.to_lowercase().as_str() {
        "tile" => {
            let value: u32 = words.next()?.parse().ok()?;
            let row: usize = words.next()?.parse().ok()?;
            let col: usize = words.next()?.parse().ok()?;
            if !(value == 2 || value == 4) || row >= SIZE || col >= SIZE {
                warn!("script: tile out of range: {line:?}");
                return None;
            }
            ScriptItem::Tile { value, row, col }
        }
        "move" => ScriptItem::Move(parse_side(words.next()?)?),
        "new" => ScriptItem::NewGame,
        "quit" => ScriptItem::Quit,
        _ => {
            warn!("script: unrecognized line: {line:?}");
            return None;
        }
    };

    if words.next().is_some() {
        warn!("script: trailing tokens ignored: {line:?}");
    }
    Some(item)
}

/// Parse a whole script, skipping blanks, comments, and malformed lines.
pub fn parse_script(text: &str) -> VecDeque<ScriptItem> {
    text.lines().filter_map(parse_line).collect()
}
