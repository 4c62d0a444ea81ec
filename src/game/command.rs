//! Line parser for the interactive loop.
//!
//! Accepts the single-letter command set in either case, with the room
//! argument as a separate token (`m 5`) or glued on (`m5`). Room numbers are
//! range-checked here so the engine never sees a bad one.

use super::cave::Room;
use super::errors::CommandError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Room),
    Shoot(Room),
    Restart,
    Quit,
    Help,
}

/// Parse one input line. `Ok(None)` means the line was blank.
pub fn parse_command(raw: &str) -> Result<Option<Command>, CommandError> {
    let mut tokens = raw.split_whitespace();
    let Some(first) = tokens.next() else {
        return Ok(None);
    };

    let mut chars = first.chars();
    let Some(op) = chars.next() else {
        return Ok(None);
    };
    let glued = chars.as_str();
    let op = op.to_ascii_lowercase();

    match op {
        // "move 5" is a word, not "m" glued to a room
        'm' | 's' if glued.chars().any(|c| c.is_alphabetic()) => {
            Err(CommandError::Unknown(first.to_string()))
        }
        'm' | 's' => {
            let arg = if glued.is_empty() {
                tokens.next().ok_or(CommandError::MissingRoom(op))?
            } else {
                glued
            };
            let target: Room = arg.parse()?;
            Ok(Some(if op == 'm' {
                Command::Move(target)
            } else {
                Command::Shoot(target)
            }))
        }
        'r' | 'q' | 'h' | '?' if glued.is_empty() => Ok(Some(match op {
            'r' => Command::Restart,
            'q' => Command::Quit,
            _ => Command::Help,
        })),
        _ => Err(CommandError::Unknown(first.to_string())),
    }
}

/// Game-over prompt: only restart and quit are meaningful.
pub fn parse_game_over(raw: &str) -> Option<Command> {
    match parse_command(raw) {
        Ok(Some(cmd @ (Command::Restart | Command::Quit))) => Some(cmd),
        _ => None,
    }
}
