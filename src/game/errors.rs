use thiserror::Error;

use super::cave::Room;

/// Errors the engine reports back to the player.
///
/// None of these are fatal: the game state is left untouched and no arrow is
/// spent when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Room argument outside 1-20 or not a number at all.
    #[error("invalid room number: {0:?}")]
    InvalidRoomNumber(String),

    /// Move target is not one tunnel away from the player.
    #[error("room {to} is not adjacent to room {from}")]
    NonAdjacentMove { from: Room, to: Room },

    /// Shot target is not one tunnel away from the player.
    #[error("cannot shoot from room {from} into room {to}")]
    NonAdjacentShot { from: Room, to: Room },

    /// Move or shoot attempted after the game was won or lost.
    #[error("the game is over")]
    GameOver,

    /// An explicit layout placed two entities in the same room.
    #[error("layout places more than one entity in room {0}")]
    OverlappingLayout(Room),
}

/// Errors raised while turning a line of input into a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command: {0:?}")]
    Unknown(String),

    /// `m` or `s` without a room argument.
    #[error("command '{0}' needs a room number")]
    MissingRoom(char),

    #[error(transparent)]
    InvalidRoom(#[from] GameError),
}
