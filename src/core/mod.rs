//! Configuration, timing, and logging shared by the game and its host.

pub mod clock;
pub mod config;
pub mod constants;
pub mod logging;

pub use clock::FrameClock;
pub use config::GameConfig;
pub use constants::*;
