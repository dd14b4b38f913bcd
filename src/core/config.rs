//! Tunable game parameters.
//!
//! Defaults reproduce the nominal 60 FPS tuning in `constants`. A JSON file
//! may override any subset of fields; missing fields keep their defaults.

use super::constants::*;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// All physics, spawn, and layout parameters for a round.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub screen_width: f32,
    pub screen_height: f32,
    pub frames_per_second: u32,

    pub bird_start_x: f32,
    pub bird_start_y: f32,
    pub bird_width: f32,
    pub bird_height: f32,
    pub gravity: f32,
    pub flap_velocity: f32,

    pub pipe_width: f32,
    pub pipe_speed: f32,
    /// Inclusive range for the top segment's height.
    pub gap_start_min: u32,
    pub gap_start_max: u32,
    /// Inclusive range for the opening between the two segments.
    pub gap_height_min: u32,
    pub gap_height_max: u32,
    pub spawn_interval_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            frames_per_second: FRAMES_PER_SECOND,

            bird_start_x: BIRD_START_X,
            bird_start_y: BIRD_START_Y,
            bird_width: BIRD_WIDTH,
            bird_height: BIRD_HEIGHT,
            gravity: GRAVITY,
            flap_velocity: FLAP_VELOCITY,

            pipe_width: PIPE_WIDTH,
            pipe_speed: PIPE_SPEED,
            gap_start_min: GAP_START_MIN,
            gap_start_max: GAP_START_MAX,
            gap_height_min: GAP_HEIGHT_MIN,
            gap_height_max: GAP_HEIGHT_MAX,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
        }
    }
}

impl GameConfig {
    /// Duration of one fixed physics frame.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_micros(1_000_000 / self.frames_per_second.max(1) as u64)
    }

    /// Spawn interval expressed in whole frames (90 at the default tuning).
    ///
    /// Saturates at `u32::MAX`; `validate` rejects configs that would.
    pub fn spawn_interval_frames(&self) -> u32 {
        self.checked_spawn_interval_frames().unwrap_or(u32::MAX)
    }

    fn checked_spawn_interval_frames(&self) -> Option<u32> {
        let frames = self
            .spawn_interval_ms
            .checked_mul(u64::from(self.frames_per_second))?
            / 1000;
        u32::try_from(frames).ok()
    }

    /// Check that the parameters describe a playable round.
    pub fn validate(&self) -> io::Result<()> {
        let invalid = |msg: String| Err(io::Error::new(io::ErrorKind::InvalidInput, msg));

        if self.screen_width <= 0.0 || self.screen_height <= 0.0 {
            return invalid(format!(
                "screen size must be positive, got {}x{}",
                self.screen_width, self.screen_height
            ));
        }
        if self.frames_per_second == 0 || self.frames_per_second > MAX_FRAMES_PER_SECOND {
            return invalid(format!(
                "frames_per_second must be in 1..={}, got {}",
                MAX_FRAMES_PER_SECOND, self.frames_per_second
            ));
        }
        if self.bird_width <= 0.0 || self.bird_height <= 0.0 {
            return invalid(format!(
                "bird size must be positive, got {}x{}",
                self.bird_width, self.bird_height
            ));
        }
        if self.bird_start_y <= 0.0 || self.bird_start_y + self.bird_height >= self.screen_height
        {
            return invalid(format!(
                "bird_start_y {} puts the bird outside the screen",
                self.bird_start_y
            ));
        }
        if self.gravity <= 0.0 {
            return invalid(format!("gravity must be positive, got {}", self.gravity));
        }
        if self.flap_velocity >= 0.0 {
            return invalid(format!(
                "flap_velocity must be negative (upward), got {}",
                self.flap_velocity
            ));
        }
        if self.pipe_width <= 0.0 || self.pipe_speed <= 0.0 {
            return invalid(format!(
                "pipe_width and pipe_speed must be positive, got {} and {}",
                self.pipe_width, self.pipe_speed
            ));
        }
        if self.gap_start_min > self.gap_start_max {
            return invalid(format!(
                "gap start band is inverted: {}..={}",
                self.gap_start_min, self.gap_start_max
            ));
        }
        if self.gap_height_min == 0 || self.gap_height_min > self.gap_height_max {
            return invalid(format!(
                "gap height band must be non-empty and positive: {}..={}",
                self.gap_height_min, self.gap_height_max
            ));
        }
        let gap_fits = self
            .gap_start_max
            .checked_add(self.gap_height_max)
            .is_some_and(|lowest| lowest as f32 <= self.screen_height);
        if !gap_fits {
            return invalid(format!(
                "gap band {}..={} plus height {} does not fit a screen of height {}",
                self.gap_start_min, self.gap_start_max, self.gap_height_max, self.screen_height
            ));
        }
        match self.checked_spawn_interval_frames() {
            Some(0) => {
                return invalid(format!(
                    "spawn_interval_ms {} is shorter than one frame",
                    self.spawn_interval_ms
                ))
            }
            None => {
                return invalid(format!(
                    "spawn_interval_ms {} is too long",
                    self.spawn_interval_ms
                ))
            }
            Some(_) => {}
        }
        Ok(())
    }

    /// Parse and validate a JSON document.
    pub fn from_json(text: &str) -> io::Result<Self> {
        let config: GameConfig = serde_json::from_str(text)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        config.validate()?;
        Ok(config)
    }

    /// Read a config file. Errors if the file is missing or malformed.
    pub fn load_from(path: &Path) -> io::Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text).map_err(|e| {
            io::Error::new(e.kind(), format!("{}: {}", path.display(), e))
        })
    }

    /// Platform config location, e.g. `~/.config/flappy/config.json`.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", APP_NAME).map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Resolve the config for this run.
    ///
    /// An explicit path must exist. Otherwise the platform default is used if
    /// present, falling back to built-in defaults.
    pub fn load(explicit: Option<&Path>) -> io::Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }
}
