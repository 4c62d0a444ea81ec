//! Prose for everything the player sees.
//!
//! Each function returns a complete, newline-terminated block; the session
//! decides when to print it.

use super::cave::Room;
use super::engine::{
    GameState, GameStatus, LossCause, MoveReport, MoveResolution, ShootOutcome, Warning,
};
use super::errors::{CommandError, GameError};

/// Rendering switches taken from `[game]` config.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// Append "(Wumpus nearby)" style explanations to hazard warnings.
    pub show_hints: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions { show_hints: true }
    }
}

pub fn welcome_message() -> &'static str {
    "Welcome to Hunt the Wumpus!\nType 'h' for help.\n"
}

pub fn help_text() -> &'static str {
    "Commands:\n\
  m <n> - move to room n\n\
  s <n> - shoot an arrow into room n\n\
  r     - restart game\n\
  q     - quit\n\
  h     - help\n"
}

pub fn game_over_prompt() -> &'static str {
    "Type 'r' to restart or 'q' to quit.\n"
}

/// Location, tunnels, warnings and quiver: the screen shown before each prompt.
pub fn render(gs: &GameState, opts: RenderOptions) -> String {
    let loc = gs.describe_location();
    let [a, b, c] = loc.tunnels;
    let mut msg = format!(
        "You are in room {}.\nTunnels lead to rooms {}, {}, {}.\n",
        loc.room, a, b, c
    );
    for w in gs.sense_hazards() {
        msg.push_str(warning_line(w, opts));
        msg.push('\n');
    }
    msg.push_str(&format!("Arrows left: {}\n", gs.arrows()));
    msg
}

fn warning_line(w: Warning, opts: RenderOptions) -> &'static str {
    match (w, opts.show_hints) {
        (Warning::Stench, true) => "You smell a terrible stench. (Wumpus nearby)",
        (Warning::Stench, false) => "You smell a terrible stench.",
        (Warning::Draft, true) => "You feel a cold wind. (Draft nearby)",
        (Warning::Draft, false) => "You feel a cold wind.",
        (Warning::Wingbeats, true) => "You hear faint wingbeats. (Bats nearby)",
        (Warning::Wingbeats, false) => "You hear faint wingbeats.",
    }
}

pub fn move_text(report: &MoveReport) -> String {
    let mut msg = String::new();
    for t in &report.transports {
        msg.push_str("Giant bat snatches you and drops you in a random room...\n");
        msg.push_str(&format!("You are dropped in room {}.\n", t.to));
    }
    match report.resolution {
        MoveResolution::Safe => {}
        MoveResolution::CaughtByMonster => {
            msg.push_str("You entered the Wumpus' room! It eats you.\n");
        }
        MoveResolution::FellInPit => {
            msg.push_str("You fell into a bottomless pit! You die.\n");
        }
    }
    msg
}

pub fn shoot_text(target: Room, outcome: ShootOutcome) -> String {
    if outcome == ShootOutcome::NotAdjacent {
        return "You can only shoot into adjacent rooms.\n".into();
    }
    let mut msg = format!("You shoot an arrow into room {}...\n", target);
    match outcome {
        ShootOutcome::NotAdjacent => {}
        ShootOutcome::Won => {
            msg.push_str("You hear a terrible scream! You killed the Wumpus. You win!\n");
        }
        ShootOutcome::SelfShot => {
            msg.push_str("The arrow circles and returns to you! You shot yourself.\nYou die.\n");
        }
        ShootOutcome::Miss { monster_moved } | ShootOutcome::OutOfArrows { monster_moved } => {
            msg.push_str("Nothing. The arrow clatters away.\n");
            if monster_moved {
                msg.push_str(
                    "You hear a rumbling noise in the distance. The Wumpus has moved.\n",
                );
            }
            if matches!(outcome, ShootOutcome::OutOfArrows { .. }) {
                msg.push_str("You have no arrows left. You are defenseless.\n");
                msg.push_str("The Wumpus comes for you and eats you.\n");
            }
        }
    }
    msg
}

/// Wrap-up after a win or loss: where the Wumpus was, then the sub-prompt.
pub fn game_over_text(gs: &GameState) -> String {
    let verdict = match gs.status() {
        GameStatus::Won => "You won!",
        GameStatus::Lost(LossCause::EatenByMonster) => "You were eaten.",
        GameStatus::Lost(LossCause::FellInPit) => "You fell to your doom.",
        GameStatus::Lost(LossCause::ShotSelf) => "You shot yourself.",
        GameStatus::Lost(LossCause::OutOfArrows) => "You ran out of arrows.",
        GameStatus::Playing => "",
    };
    format!(
        "Game over. {} The Wumpus was in room {}.\n{}",
        verdict,
        gs.monster,
        game_over_prompt()
    )
}

pub fn error_text(err: &CommandError) -> String {
    match err {
        CommandError::Unknown(_) => "Unknown command. Type 'h' for help.\n".into(),
        CommandError::MissingRoom(_) | CommandError::InvalidRoom(_) => {
            "Invalid room number.\n".into()
        }
    }
}

pub fn game_error_text(err: &GameError) -> String {
    match err {
        GameError::NonAdjacentMove { .. } => {
            "You can't move there directly. Choose an adjacent room.\n".into()
        }
        GameError::NonAdjacentShot { .. } => "You can only shoot into adjacent rooms.\n".into(),
        GameError::InvalidRoomNumber(_) => "Invalid room number.\n".into(),
        GameError::GameOver => game_over_prompt().into(),
        GameError::OverlappingLayout(_) => format!("{}.\n", err),
    }
}

pub fn tally_text(wins: u32, losses: u32) -> String {
    format!("Games won: {}  Games lost: {}\n", wins, losses)
}
