//! # Game Module
//!
//! Hunt the Wumpus: a player wanders a twenty-room cave shaped like a
//! dodecahedron, dodging a monster, two bottomless pits and two bat colonies,
//! and tries to kill the monster with a handful of arrows.
//!
//! ## Components
//!
//! - [`cave`] - fixed tunnel table and the [`Room`](cave::Room) type
//! - [`engine`] - game state plus the move/shoot/reset transitions
//! - [`rng`] - injectable random source
//! - [`command`] - input line parsing
//! - [`render`] - narration
//! - [`session`] - the interactive read/respond loop
//! - [`errors`] - recoverable error types
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  Session        │ ← reads lines, prints prose, tracks phase
//! └─────────────────┘
//!          │
//! ┌─────────────────┐
//! │  Command /      │ ← parse input, narrate outcomes
//! │  Render         │
//! └─────────────────┘
//!          │
//! ┌─────────────────┐
//! │  Engine + Cave  │ ← rules; randomness injected
//! └─────────────────┘
//! ```

pub mod cave;
pub mod command;
pub mod engine;
pub mod errors;
pub mod render;
pub mod rng;
pub mod session;

pub use cave::Room;
pub use engine::GameState;
pub use errors::{CommandError, GameError};
pub use session::Session;
