//! # Wumpus - Hunt the Wumpus in the terminal
//!
//! A text adventure played one line at a time. The player explores a cave of
//! twenty rooms wired as a dodecahedron, listens for the monster, pits and
//! bats in the neighbouring rooms, and tries to shoot the Wumpus before
//! running out of arrows.
//!
//! ## Features
//!
//! - **Fixed Cave**: twenty rooms, three tunnels each, checked for symmetry by tests.
//! - **Hazards**: the Wumpus, two bottomless pits and two bat colonies that carry you off.
//! - **Arrows**: five per game; a miss may spook the Wumpus into another room.
//! - **Injectable Randomness**: every roll goes through [`game::rng::RandomSource`].
//! - **Optional Config**: TOML settings for quiver size, seed and logging.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use wumpus::config::Config;
//! use wumpus::game::render::RenderOptions;
//! use wumpus::game::rng::EntropySource;
//! use wumpus::game::Session;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::load_or_default("config.toml")?;
//!     let opts = RenderOptions { show_hints: config.game.show_hints };
//!     let mut session = Session::new(config.game.arrows, EntropySource::from_entropy(), opts);
//!     let stdin = std::io::stdin();
//!     session.run(stdin.lock(), std::io::stdout())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`game`] - cave, rules engine, parser, narration and the interactive loop
//! - [`config`] - configuration loading and validation
//! - [`logutil`] - helpers for keeping player input readable in logs

pub mod config;
pub mod game;
pub mod logutil;
