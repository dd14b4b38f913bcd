//! Flappy Bird round state and its per-frame update.
//!
//! A bird falls under constant gravity, the player flaps to push it upward,
//! and pipe pairs scroll in from the right. Passing a pair scores a point;
//! touching a pipe, the ceiling, or the floor ends the round.

pub mod logic;
pub mod types;

pub use types::*;
