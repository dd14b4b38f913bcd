// Screen
pub const SCREEN_WIDTH: f32 = 400.0;
pub const SCREEN_HEIGHT: f32 = 600.0;

// Timing
pub const FRAMES_PER_SECOND: u32 = 60;
/// Upper bound on the physics rate; keeps a frame at least one millisecond.
pub const MAX_FRAMES_PER_SECOND: u32 = 1000;
pub const SPAWN_INTERVAL_MS: u64 = 1500;
/// Longest stretch of wall time converted into physics steps in one poll.
pub const MAX_CATCH_UP_MS: u64 = 100;

// Bird
pub const BIRD_START_X: f32 = 50.0;
pub const BIRD_START_Y: f32 = 300.0;
pub const BIRD_WIDTH: f32 = 40.0;
pub const BIRD_HEIGHT: f32 = 30.0;
pub const GRAVITY: f32 = 0.5; // velocity gained per frame
pub const FLAP_VELOCITY: f32 = -8.0; // overrides velocity, negative = upward

// Pipes
pub const PIPE_WIDTH: f32 = 70.0;
pub const PIPE_SPEED: f32 = 4.0; // leftward, per frame
pub const GAP_START_MIN: u32 = 150;
pub const GAP_START_MAX: u32 = 400;
pub const GAP_HEIGHT_MIN: u32 = 150;
pub const GAP_HEIGHT_MAX: u32 = 150;

// Files and environment
pub const APP_NAME: &str = "flappy";
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const LOG_FILE_NAME: &str = "flappy.log";
pub const LOG_ENV_VAR: &str = "FLAPPY_LOG";
