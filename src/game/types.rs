//! Flappy Bird data structures.
//!
//! World coordinates are screen pixels at the nominal resolution: x grows to
//! the right, y grows downward, row 0 is the ceiling.

use crate::core::config::GameConfig;
use rand::Rng;
use tracing::debug;

/// Axis-aligned rectangle in world coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Strict overlap. Rectangles that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

/// The player's bird.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub x: f32,
    pub y: f32,
    /// Vertical velocity in pixels/frame (positive = downward).
    pub velocity: f32,
    pub width: f32,
    pub height: f32,
}

impl Sprite {
    /// Bird at its start position with zero velocity.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            x: config.bird_start_x,
            y: config.bird_start_y,
            velocity: 0.0,
            width: config.bird_width,
            height: config.bird_height,
        }
    }

    pub fn hitbox(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// A top and bottom pipe sharing one x-coordinate, with a gap between them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObstaclePair {
    /// Left edge of both segments.
    pub x: f32,
    /// Height of the top segment; the gap begins here.
    pub gap_start: f32,
    pub gap_height: f32,
    pub width: f32,
    /// Floor the bottom segment extends down to.
    pub screen_height: f32,
}

impl ObstaclePair {
    /// Top segment, spanning `0..gap_start`.
    pub fn top(&self) -> Rect {
        Rect::new(self.x, 0.0, self.width, self.gap_start)
    }

    /// Bottom segment, spanning `gap_start + gap_height..screen_height`.
    pub fn bottom(&self) -> Rect {
        let y = self.gap_start + self.gap_height;
        Rect::new(self.x, y, self.width, (self.screen_height - y).max(0.0))
    }

    pub fn segments(&self) -> [Rect; 2] {
        [self.top(), self.bottom()]
    }

    /// Right edge; the pair is passed once this is left of the bird.
    pub fn trailing_edge(&self) -> f32 {
        self.x + self.width
    }
}

/// Per-frame input snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub flap_requested: bool,
}

impl FrameInput {
    pub const IDLE: FrameInput = FrameInput {
        flap_requested: false,
    };

    pub const FLAP: FrameInput = FrameInput {
        flap_requested: true,
    };
}

/// What one call to `GameState::advance` produced.
#[derive(Debug, Clone)]
pub struct AdvanceResult<'a> {
    pub sprite: Sprite,
    /// Active pairs, frontmost first.
    pub obstacles: &'a [ObstaclePair],
    pub score: u32,
    /// True only on the frame that ended the round.
    pub game_over_triggered: bool,
    /// A new pair entered at the right edge this frame.
    pub spawned: bool,
    /// The score went up this frame.
    pub scored: bool,
}

/// State of one round. A replay builds a fresh value.
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,

    // Bird
    pub sprite: Sprite,

    // Pipes, ordered by creation (descending x); index 0 is frontmost
    pub obstacles: Vec<ObstaclePair>,
    /// Frames elapsed since the last spawn (or since the round began).
    pub frames_since_spawn: u32,

    // Scoring
    pub score: u32,
    /// Set once the frontmost pair has been scored, cleared when a pair
    /// ahead of the bird becomes frontmost.
    pub passed_obstacle: bool,

    pub game_over: bool,
    /// Total frames advanced this round.
    pub frame_count: u64,
}

impl GameState {
    /// Create the start state: bird at rest at its start position, no pipes.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            config: *config,
            sprite: Sprite::new(config),
            obstacles: Vec::new(),
            frames_since_spawn: 0,
            score: 0,
            passed_obstacle: false,
            game_over: false,
            frame_count: 0,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Every pipe segment on screen, two per pair, front to back.
    pub fn segments(&self) -> impl Iterator<Item = Rect> + '_ {
        self.obstacles.iter().flat_map(|pair| pair.segments())
    }

    /// Append a pair at the right edge with a random gap from the configured band.
    pub fn spawn_obstacle<R: Rng>(&mut self, rng: &mut R) {
        let gap_start = rng.gen_range(self.config.gap_start_min..=self.config.gap_start_max);
        let gap_height = rng.gen_range(self.config.gap_height_min..=self.config.gap_height_max);

        self.obstacles.push(ObstaclePair {
            x: self.config.screen_width,
            gap_start: gap_start as f32,
            gap_height: gap_height as f32,
            width: self.config.pipe_width,
            screen_height: self.config.screen_height,
        });

        debug!(
            frame = self.frame_count,
            gap_start, gap_height, "spawned pipe pair"
        );
    }
}
