//! Flappy - terminal side-scrolling arcade game.
//!
//! The library holds the round state and its per-frame update, plus the
//! session, input, and rendering layers the binary drives.

pub mod core;
pub mod game;
pub mod input;
pub mod session;
pub mod ui;

pub use crate::core::{FrameClock, GameConfig};
pub use game::{AdvanceResult, FrameInput, GameState, ObstaclePair, Sprite};
pub use session::{Screen, Session, SessionAction};
