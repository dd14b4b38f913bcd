//! Outer loop state: one round at a time, with a replay/quit prompt between.
//!
//! A replay builds a fresh `GameState` in place, so any number of rounds
//! runs in constant stack depth.

use crate::core::config::GameConfig;
use crate::game::GameState;
use crate::input::{GameInput, InputLatch};
use rand::Rng;
use tracing::info;

/// What the host should show.
#[derive(Debug, Clone)]
pub enum Screen {
    Playing(GameState),
    GameOver { final_score: u32 },
}

/// Whether the host loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    Continue,
    Quit,
}

pub struct Session<R: Rng> {
    config: GameConfig,
    rng: R,
    screen: Screen,
    latch: InputLatch,
    rounds_played: u32,
}

impl<R: Rng> Session<R> {
    /// Start a session with the first round already in play.
    pub fn new(config: GameConfig, rng: R) -> Self {
        info!(round = 1, "round started");
        Self {
            screen: Screen::Playing(GameState::new(&config)),
            config,
            rng,
            latch: InputLatch::new(),
            rounds_played: 1,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.screen, Screen::Playing(_))
    }

    pub fn is_flap_queued(&self) -> bool {
        self.latch.is_flap_queued()
    }

    /// Apply one player action.
    pub fn handle_input(&mut self, input: GameInput) -> SessionAction {
        match input {
            GameInput::Quit => {
                info!(rounds = self.rounds_played, "quit requested");
                return SessionAction::Quit;
            }
            GameInput::Flap if self.is_playing() => self.latch.queue_flap(),
            GameInput::Replay if !self.is_playing() => self.replay(),
            _ => {}
        }
        SessionAction::Continue
    }

    /// Run `frames` physics frames on the current round.
    ///
    /// A queued flap applies to the first of them only. Stops early when the
    /// round ends and switches to the game-over screen.
    pub fn step(&mut self, frames: u32) {
        let Screen::Playing(game) = &mut self.screen else {
            return;
        };

        let mut final_score = None;
        for _ in 0..frames {
            let input = self.latch.take();
            let result = game.advance(input, &mut self.rng);
            if result.game_over_triggered {
                final_score = Some(result.score);
                break;
            }
        }

        if let Some(final_score) = final_score {
            self.screen = Screen::GameOver { final_score };
        }
    }

    fn replay(&mut self) {
        self.rounds_played += 1;
        self.latch.clear();
        self.screen = Screen::Playing(GameState::new(&self.config));
        info!(round = self.rounds_played, "round started");
    }
}
