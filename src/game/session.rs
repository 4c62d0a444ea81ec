use anyhow::Result;
use log::{debug, info};
use std::io::{BufRead, Write};

use super::command::{parse_command, parse_game_over, Command};
use super::engine::{GameState, GameStatus, ShootOutcome};
use super::errors::GameError;
use super::render::{self, RenderOptions};
use super::rng::RandomSource;
use crate::logutil::escape_input;

/// # Interactive Session
///
/// Drives one player through any number of games over a line-based text
/// stream. The session owns the game state and the random source and keeps a
/// running win/loss tally.
///
/// ## Phases
///
/// 1. **Playing** - the location screen is shown before every prompt and all
///    commands are accepted
/// 2. **GameOver** - entered on a win or loss; only restart and quit are
///    accepted until one is chosen
///
/// ## Usage
///
/// ```rust
/// use wumpus::game::rng::EntropySource;
/// use wumpus::game::render::RenderOptions;
/// use wumpus::game::session::Session;
///
/// let mut session = Session::new(5, EntropySource::seeded(1), RenderOptions::default());
/// let mut out = Vec::new();
/// session.run("h\nq\n".as_bytes(), &mut out).unwrap();
/// assert!(String::from_utf8(out).unwrap().contains("Goodbye!"));
/// ```
#[derive(Debug)]
pub struct Session<S: RandomSource> {
    pub game: GameState,
    pub phase: Phase,
    pub wins: u32,
    pub losses: u32,
    rng: S,
    opts: RenderOptions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    GameOver,
}

/// What a single input line produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub output: String,
    pub quit: bool,
}

impl Step {
    fn say(output: impl Into<String>) -> Self {
        Step {
            output: output.into(),
            quit: false,
        }
    }
}

impl<S: RandomSource> Session<S> {
    pub fn new(starting_arrows: u32, mut rng: S, opts: RenderOptions) -> Self {
        let game = GameState::new(starting_arrows, &mut rng);
        Session::with_game(game, rng, opts)
    }

    /// Wrap an already prepared game, e.g. one built from a fixed layout.
    pub fn with_game(game: GameState, rng: S, opts: RenderOptions) -> Self {
        let phase = if game.is_over() {
            Phase::GameOver
        } else {
            Phase::Playing
        };
        Session {
            game,
            phase,
            wins: 0,
            losses: 0,
            rng,
            opts,
        }
    }

    /// The screen shown before the next prompt, if any.
    pub fn screen(&self) -> Option<String> {
        match self.phase {
            Phase::Playing => Some(render::render(&self.game, self.opts)),
            Phase::GameOver => None,
        }
    }

    pub fn handle_line(&mut self, line: &str) -> Step {
        debug!("input: {}", escape_input(line));
        match self.phase {
            Phase::Playing => self.handle_playing(line),
            Phase::GameOver => self.handle_game_over(line),
        }
    }

    fn handle_playing(&mut self, line: &str) -> Step {
        let cmd = match parse_command(line) {
            Ok(Some(cmd)) => cmd,
            Ok(None) => return Step::say(""),
            Err(e) => {
                debug!("rejected input: {}", e);
                return Step::say(render::error_text(&e));
            }
        };
        let mut out = match cmd {
            Command::Move(target) => match self.game.move_to(target, &mut self.rng) {
                Ok(report) => render::move_text(&report),
                Err(e) => {
                    debug!("{}", e);
                    render::game_error_text(&e)
                }
            },
            Command::Shoot(target) => match self.game.shoot(target, &mut self.rng) {
                Ok(ShootOutcome::NotAdjacent) => {
                    let e = GameError::NonAdjacentShot {
                        from: self.game.player,
                        to: target,
                    };
                    debug!("{}", e);
                    render::game_error_text(&e)
                }
                Ok(outcome) => render::shoot_text(target, outcome),
                Err(e) => render::game_error_text(&e),
            },
            Command::Restart => {
                self.restart();
                "Game restarted.\n".to_string()
            }
            Command::Quit => return self.quit(),
            Command::Help => render::help_text().to_string(),
        };
        if self.game.is_over() {
            self.finish_game();
            out.push_str(&render::game_over_text(&self.game));
        }
        Step::say(out)
    }

    fn handle_game_over(&mut self, line: &str) -> Step {
        match parse_game_over(line) {
            Some(Command::Restart) => {
                self.restart();
                Step::say("Game restarted.\n")
            }
            Some(Command::Quit) => self.quit(),
            _ => Step::say(render::game_over_prompt()),
        }
    }

    fn restart(&mut self) {
        self.game.reset(&mut self.rng);
        self.phase = Phase::Playing;
        info!("game restarted");
    }

    fn finish_game(&mut self) {
        self.phase = Phase::GameOver;
        match self.game.status() {
            GameStatus::Won => self.wins += 1,
            GameStatus::Lost(_) => self.losses += 1,
            GameStatus::Playing => {}
        }
        info!(
            "game over: {:?} (won {}, lost {})",
            self.game.status(),
            self.wins,
            self.losses
        );
    }

    fn quit(&self) -> Step {
        Step {
            output: format!("Goodbye!\n{}", render::tally_text(self.wins, self.losses)),
            quit: true,
        }
    }

    /// Run until the player quits or the input ends.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut out: W) -> Result<()> {
        out.write_all(render::welcome_message().as_bytes())?;
        out.write_all(b"\n")?;
        let mut buf = Vec::new();
        loop {
            if let Some(screen) = self.screen() {
                out.write_all(screen.as_bytes())?;
                out.write_all(b"> ")?;
            }
            out.flush()?;

            // A line of invalid UTF-8 is an unknown command; the stream keeps going.
            buf.clear();
            let read = match input.read_until(b'\n', &mut buf) {
                Ok(n) => n,
                Err(e) => {
                    info!("input stream failed, ending session: {}", e);
                    0
                }
            };
            if read == 0 {
                info!("end of input");
                out.write_all(b"\n")?;
                out.write_all(render::tally_text(self.wins, self.losses).as_bytes())?;
                break;
            }

            let line = String::from_utf8_lossy(&buf);
            let step = self.handle_line(&line);
            out.write_all(step.output.as_bytes())?;
            if step.quit {
                break;
            }
            if self.phase == Phase::Playing {
                out.write_all(b"\n")?;
            }
        }
        out.flush()?;
        Ok(())
    }
}
