//! Game engine: entity positions plus the move/shoot/reset transitions.
//!
//! The engine is a plain owned value. Nothing here prints; every operation
//! returns an outcome that the session layer narrates.

use log::debug;

use super::cave::{is_adjacent, neighbors, Room, ROOM_COUNT};
use super::errors::GameError;
use super::rng::{shuffle, RandomSource};

/// Arrows in the quiver at the start of every game.
pub const DEFAULT_ARROWS: u32 = 5;

/// A miss spooks the monster when a roll of 1..=SPOOK_DIE comes up 1.
const SPOOK_DIE: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LossCause {
    EatenByMonster,
    FellInPit,
    ShotSelf,
    OutOfArrows,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost(LossCause),
}

/// Where everything sits. Used to start a game from a known arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub player: Room,
    pub monster: Room,
    pub pits: [Room; 2],
    pub bats: [Room; 2],
}

impl Layout {
    fn rooms(&self) -> [Room; 6] {
        [
            self.player,
            self.monster,
            self.pits[0],
            self.pits[1],
            self.bats[0],
            self.bats[1],
        ]
    }
}

/// Result of [`GameState::describe_location`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub room: Room,
    pub tunnels: [Room; 3],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Warning {
    /// Monster next door.
    Stench,
    /// Pit next door.
    Draft,
    /// Bats next door.
    Wingbeats,
}

/// One bat snatch: picked up in `from`, dropped in `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transport {
    pub from: Room,
    pub to: Room,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResolution {
    Safe,
    CaughtByMonster,
    FellInPit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReport {
    /// Every bat transport in the order it happened.
    pub transports: Vec<Transport>,
    pub resolution: MoveResolution,
    /// Room the player ended up in.
    pub room: Room,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShootOutcome {
    NotAdjacent,
    Won,
    SelfShot,
    Miss { monster_moved: bool },
    OutOfArrows { monster_moved: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub player: Room,
    pub monster: Room,
    pub pits: [Room; 2],
    pub bats: [Room; 2],
    pub arrows: u32,
    pub status: GameStatus,
    /// Quiver size restored on every reset.
    pub starting_arrows: u32,
}

impl GameState {
    /// Start a fresh, randomly laid out game.
    pub fn new(starting_arrows: u32, rng: &mut impl RandomSource) -> Self {
        let mut rooms: Vec<Room> = Room::all().collect();
        shuffle(&mut rooms, rng);
        let mut gs = GameState {
            player: rooms[0],
            monster: rooms[1],
            pits: [rooms[2], rooms[3]],
            bats: [rooms[4], rooms[5]],
            arrows: starting_arrows,
            status: GameStatus::Playing,
            starting_arrows,
        };
        gs.log_layout("new game");
        gs
    }

    /// Start from an explicit arrangement. All six rooms must differ.
    pub fn with_layout(layout: Layout, starting_arrows: u32) -> Result<Self, GameError> {
        let rooms = layout.rooms();
        for (i, r) in rooms.iter().enumerate() {
            if rooms[..i].contains(r) {
                return Err(GameError::OverlappingLayout(*r));
            }
        }
        Ok(GameState {
            player: layout.player,
            monster: layout.monster,
            pits: layout.pits,
            bats: layout.bats,
            arrows: starting_arrows,
            status: GameStatus::Playing,
            starting_arrows,
        })
    }

    /// Re-deal all six entities and refill the quiver.
    pub fn reset(&mut self, rng: &mut impl RandomSource) {
        *self = GameState::new(self.starting_arrows, rng);
    }

    pub fn layout(&self) -> Layout {
        Layout {
            player: self.player,
            monster: self.monster,
            pits: self.pits,
            bats: self.bats,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn arrows(&self) -> u32 {
        self.arrows
    }

    pub fn is_over(&self) -> bool {
        self.status() != GameStatus::Playing
    }

    pub fn describe_location(&self) -> Location {
        Location {
            room: self.player,
            tunnels: neighbors(self.player),
        }
    }

    /// Warnings for the rooms next door, in tunnel order.
    pub fn sense_hazards(&self) -> Vec<Warning> {
        let mut out = Vec::new();
        for r in neighbors(self.player) {
            if r == self.monster {
                out.push(Warning::Stench);
            }
            if self.pits.contains(&r) {
                out.push(Warning::Draft);
            }
            if self.bats.contains(&r) {
                out.push(Warning::Wingbeats);
            }
        }
        out
    }

    /// Walk through a tunnel and resolve whatever waits on the other side.
    ///
    /// Bats may carry the player any number of times before the move settles;
    /// each hop is recorded in the returned report.
    pub fn move_to(
        &mut self,
        target: Room,
        rng: &mut impl RandomSource,
    ) -> Result<MoveReport, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if !is_adjacent(self.player, target) {
            return Err(GameError::NonAdjacentMove {
                from: self.player,
                to: target,
            });
        }
        debug!("move {} -> {}", self.player, target);

        let mut transports = Vec::new();
        let mut room = target;
        let resolution = loop {
            self.player = room;
            if room == self.monster {
                self.status = GameStatus::Lost(LossCause::EatenByMonster);
                break MoveResolution::CaughtByMonster;
            }
            if self.pits.contains(&room) {
                self.status = GameStatus::Lost(LossCause::FellInPit);
                break MoveResolution::FellInPit;
            }
            if self.bats.contains(&room) {
                let drop = draw_room_except(room, rng);
                debug!("bats carry player {} -> {}", room, drop);
                transports.push(Transport {
                    from: room,
                    to: drop,
                });
                room = drop;
                continue;
            }
            break MoveResolution::Safe;
        };

        Ok(MoveReport {
            transports,
            resolution,
            room: self.player,
        })
    }

    /// Loose an arrow into a neighbouring room.
    ///
    /// A non-adjacent target is refused softly: no arrow leaves the quiver.
    pub fn shoot(
        &mut self,
        target: Room,
        rng: &mut impl RandomSource,
    ) -> Result<ShootOutcome, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if !is_adjacent(self.player, target) {
            return Ok(ShootOutcome::NotAdjacent);
        }
        self.arrows = self.arrows.saturating_sub(1);
        debug!("arrow into {} ({} left)", target, self.arrows);

        if target == self.monster {
            self.status = GameStatus::Won;
            return Ok(ShootOutcome::Won);
        }
        if target == self.player {
            self.status = GameStatus::Lost(LossCause::ShotSelf);
            return Ok(ShootOutcome::SelfShot);
        }

        let monster_moved = rng.uniform(1, SPOOK_DIE) == 1;
        if monster_moved {
            let to = draw_room_except(self.monster, rng);
            debug!("monster spooked {} -> {}", self.monster, to);
            self.monster = to;
        }
        if self.arrows == 0 {
            self.status = GameStatus::Lost(LossCause::OutOfArrows);
            return Ok(ShootOutcome::OutOfArrows { monster_moved });
        }
        Ok(ShootOutcome::Miss { monster_moved })
    }

    fn log_layout(&self, what: &str) {
        debug!(
            "{}: player={} monster={} pits={},{} bats={},{} arrows={}",
            what,
            self.player,
            self.monster,
            self.pits[0],
            self.pits[1],
            self.bats[0],
            self.bats[1],
            self.arrows
        );
    }
}

/// Uniform room draw, redrawn until it differs from `avoid`.
fn draw_room_except(avoid: Room, rng: &mut impl RandomSource) -> Room {
    loop {
        let n = rng.uniform(1, ROOM_COUNT as u32) as u8;
        if let Some(r) = Room::new(n) {
            if r != avoid {
                return r;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::rng::EntropySource;
    use std::collections::{HashSet, VecDeque};

    /// Replays a fixed list of draws.
    struct Script(VecDeque<u32>);

    impl Script {
        fn new(values: &[u32]) -> Self {
            Script(values.iter().copied().collect())
        }
    }

    impl RandomSource for Script {
        fn uniform(&mut self, low: u32, high: u32) -> u32 {
            let v = self.0.pop_front().expect("script exhausted");
            assert!((low..=high).contains(&v), "{} outside {}..={}", v, low, high);
            v
        }
    }

    fn room(n: u8) -> Room {
        Room::new(n).unwrap()
    }

    fn mk_gs(player: u8, monster: u8, pits: [u8; 2], bats: [u8; 2]) -> GameState {
        GameState::with_layout(
            Layout {
                player: room(player),
                monster: room(monster),
                pits: pits.map(room),
                bats: bats.map(room),
            },
            DEFAULT_ARROWS,
        )
        .unwrap()
    }

    #[test]
    fn reset_places_six_distinct_rooms() {
        for seed in 0..200u64 {
            let mut rng = EntropySource::seeded(seed);
            let mut gs = GameState::new(DEFAULT_ARROWS, &mut rng);
            gs.arrows = 1;
            gs.status = GameStatus::Won;
            gs.reset(&mut rng);
            let set: HashSet<Room> = gs.layout().rooms().into_iter().collect();
            assert_eq!(set.len(), 6, "seed {} produced overlap: {:?}", seed, gs);
            assert_eq!(gs.arrows, DEFAULT_ARROWS);
            assert_eq!(gs.status, GameStatus::Playing);
        }
    }

    #[test]
    fn layout_rejects_overlap() {
        let err = GameState::with_layout(
            Layout {
                player: room(1),
                monster: room(2),
                pits: [room(3), room(2)],
                bats: [room(4), room(5)],
            },
            5,
        )
        .unwrap_err();
        assert_eq!(err, GameError::OverlappingLayout(room(2)));
    }

    #[test]
    fn senses_report_in_tunnel_order() {
        // Room 1 -> 2, 5, 8
        let gs = mk_gs(1, 8, [2, 14], [5, 20]);
        assert_eq!(
            gs.sense_hazards(),
            vec![Warning::Draft, Warning::Wingbeats, Warning::Stench]
        );
        let quiet = mk_gs(1, 20, [13, 14], [15, 16]);
        assert!(quiet.sense_hazards().is_empty());
    }

    #[test]
    fn describe_location_lists_tunnels() {
        let gs = mk_gs(10, 20, [13, 14], [15, 16]);
        let loc = gs.describe_location();
        assert_eq!(loc.room, room(10));
        assert_eq!(loc.tunnels, [room(2), room(9), room(11)]);
    }

    #[test]
    fn moving_into_monster_or_pit_is_fatal() {
        let mut gs = mk_gs(1, 2, [5, 14], [15, 16]);
        let rep = gs.move_to(room(2), &mut Script::new(&[])).unwrap();
        assert_eq!(rep.resolution, MoveResolution::CaughtByMonster);
        assert_eq!(gs.status, GameStatus::Lost(LossCause::EatenByMonster));

        let mut gs = mk_gs(1, 2, [5, 14], [15, 16]);
        let rep = gs.move_to(room(5), &mut Script::new(&[])).unwrap();
        assert_eq!(rep.resolution, MoveResolution::FellInPit);
        assert_eq!(gs.status, GameStatus::Lost(LossCause::FellInPit));
        assert_eq!(gs.player, room(5));
    }

    #[test]
    fn non_adjacent_move_changes_nothing() {
        let mut gs = mk_gs(1, 20, [13, 14], [15, 16]);
        let before = gs.clone();
        let err = gs.move_to(room(3), &mut Script::new(&[])).unwrap_err();
        assert_eq!(
            err,
            GameError::NonAdjacentMove {
                from: room(1),
                to: room(3)
            }
        );
        assert_eq!(gs, before);
    }

    #[test]
    fn only_tunnels_can_be_walked() {
        // Hazards parked in 16..=20, far from room 1.
        for target in Room::all() {
            let mut gs = mk_gs(1, 20, [18, 19], [17, 16]);
            let res = gs.move_to(target, &mut Script::new(&[]));
            let tunnel = [2, 5, 8].contains(&target.number());
            assert_eq!(res.is_ok(), tunnel, "room {}", target);
        }
    }

    #[test]
    fn bats_drop_player_in_safe_room() {
        let mut gs = mk_gs(1, 20, [13, 14], [5, 16]);
        // First draw repeats the bat room and must be redrawn.
        let rep = gs.move_to(room(5), &mut Script::new(&[5, 9])).unwrap();
        assert_eq!(
            rep.transports,
            vec![Transport {
                from: room(5),
                to: room(9)
            }]
        );
        assert_eq!(rep.resolution, MoveResolution::Safe);
        assert_eq!(gs.player, room(9));
        assert_eq!(gs.status, GameStatus::Playing);
    }

    #[test]
    fn bats_chain_into_other_bats_then_pit() {
        let mut gs = mk_gs(1, 20, [13, 14], [5, 16]);
        let rep = gs.move_to(room(5), &mut Script::new(&[16, 13])).unwrap();
        assert_eq!(
            rep.transports,
            vec![
                Transport {
                    from: room(5),
                    to: room(16)
                },
                Transport {
                    from: room(16),
                    to: room(13)
                },
            ]
        );
        assert_eq!(rep.resolution, MoveResolution::FellInPit);
        assert_eq!(rep.room, room(13));
    }

    #[test]
    fn bats_can_drop_player_on_monster() {
        let mut gs = mk_gs(1, 20, [13, 14], [5, 16]);
        let rep = gs.move_to(room(5), &mut Script::new(&[20])).unwrap();
        assert_eq!(rep.resolution, MoveResolution::CaughtByMonster);
        assert_eq!(gs.status, GameStatus::Lost(LossCause::EatenByMonster));
    }

    #[test]
    fn shooting_the_monster_wins() {
        let mut gs = mk_gs(1, 2, [13, 14], [15, 16]);
        let out = gs.shoot(room(2), &mut Script::new(&[])).unwrap();
        assert_eq!(out, ShootOutcome::Won);
        assert_eq!(gs.arrows(), 4);
        assert_eq!(gs.status(), GameStatus::Won);
        assert!(gs.is_over());
    }

    #[test]
    fn non_adjacent_shot_keeps_the_arrow() {
        let mut gs = mk_gs(1, 2, [13, 14], [15, 16]);
        let out = gs.shoot(room(3), &mut Script::new(&[])).unwrap();
        assert_eq!(out, ShootOutcome::NotAdjacent);
        assert_eq!(gs.arrows(), DEFAULT_ARROWS);
        assert_eq!(gs.status(), GameStatus::Playing);
    }

    #[test]
    fn miss_may_spook_the_monster() {
        let mut gs = mk_gs(1, 20, [13, 14], [15, 16]);
        let out = gs.shoot(room(2), &mut Script::new(&[3])).unwrap();
        assert_eq!(out, ShootOutcome::Miss { monster_moved: false });
        assert_eq!(gs.monster, room(20));

        // Spook roll of 1, then a redraw because 20 is where it already is.
        let out = gs.shoot(room(2), &mut Script::new(&[1, 20, 7])).unwrap();
        assert_eq!(out, ShootOutcome::Miss { monster_moved: true });
        assert_eq!(gs.monster, room(7));
        assert_eq!(gs.arrows, 3);
    }

    #[test]
    fn last_arrow_miss_loses() {
        let mut gs = mk_gs(1, 20, [13, 14], [15, 16]);
        gs.arrows = 1;
        let out = gs.shoot(room(8), &mut Script::new(&[1, 11])).unwrap();
        assert_eq!(out, ShootOutcome::OutOfArrows { monster_moved: true });
        assert_eq!(gs.arrows(), 0);
        assert_eq!(gs.status(), GameStatus::Lost(LossCause::OutOfArrows));
    }

    #[test]
    fn finished_game_refuses_actions() {
        let mut gs = mk_gs(1, 2, [13, 14], [15, 16]);
        gs.shoot(room(2), &mut Script::new(&[])).unwrap();
        assert_eq!(
            gs.shoot(room(5), &mut Script::new(&[])),
            Err(GameError::GameOver)
        );
        assert_eq!(
            gs.move_to(room(5), &mut Script::new(&[])),
            Err(GameError::GameOver)
        );
        assert_eq!(gs.arrows, 4);
    }
}
