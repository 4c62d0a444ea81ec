//! Test utilities & fixtures shared by the integration tests.

use std::collections::VecDeque;

use wumpus::game::engine::{GameState, Layout};
use wumpus::game::rng::RandomSource;
use wumpus::game::Room;

/// Replays a fixed list of draws and panics when it runs dry, so a test that
/// consumes more randomness than it scripted fails loudly.
pub struct ScriptedSource {
    values: VecDeque<u32>,
    pub draws: usize,
}

impl ScriptedSource {
    pub fn new(values: &[u32]) -> Self {
        ScriptedSource {
            values: values.iter().copied().collect(),
            draws: 0,
        }
    }

    #[allow(dead_code)] // not every test binary checks leftovers
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RandomSource for ScriptedSource {
    fn uniform(&mut self, low: u32, high: u32) -> u32 {
        let v = self
            .values
            .pop_front()
            .unwrap_or_else(|| panic!("scripted source exhausted (range {}..={})", low, high));
        assert!(
            (low..=high).contains(&v),
            "scripted value {} outside {}..={}",
            v,
            low,
            high
        );
        self.draws += 1;
        v
    }
}

pub fn room(n: u8) -> Room {
    Room::new(n).expect("room in 1..=20")
}

/// Game with the given layout and a full quiver of five.
pub fn game(player: u8, monster: u8, pits: [u8; 2], bats: [u8; 2]) -> GameState {
    GameState::with_layout(
        Layout {
            player: room(player),
            monster: room(monster),
            pits: pits.map(room),
            bats: bats.map(room),
        },
        5,
    )
    .expect("distinct layout")
}
