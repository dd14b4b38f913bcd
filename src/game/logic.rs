//! Per-frame update: flap, gravity, spawning, scrolling, scoring, collision, culling.

use super::types::{AdvanceResult, FrameInput, GameState};
use rand::Rng;
use tracing::{debug, info};

impl GameState {
    /// Advance the round by one frame.
    ///
    /// The steps run in a fixed order: flap, gravity, spawn, scroll, score,
    /// collide, cull. Once the round is over this is a no-op until a fresh
    /// `GameState` replaces it.
    pub fn advance<R: Rng>(&mut self, input: FrameInput, rng: &mut R) -> AdvanceResult<'_> {
        if self.game_over {
            return self.report(false, false, false);
        }

        self.frame_count += 1;

        // 1. Flap overrides velocity, it does not add to it
        if input.flap_requested {
            self.sprite.velocity = self.config.flap_velocity;
        }

        // 2. Semi-implicit Euler
        self.sprite.velocity += self.config.gravity;
        self.sprite.y += self.sprite.velocity;

        // 3. Spawn
        self.frames_since_spawn += 1;
        let spawned = self.frames_since_spawn > self.config.spawn_interval_frames();
        if spawned {
            self.spawn_obstacle(rng);
            self.frames_since_spawn = 0;
        }

        // 4. Scroll
        for pair in &mut self.obstacles {
            pair.x -= self.config.pipe_speed;
        }

        // 5. Score
        let scored = self.update_score();

        // 6. Collide
        let game_over_triggered = self.check_collision();
        if game_over_triggered {
            self.game_over = true;
            info!(
                score = self.score,
                frames = self.frame_count,
                "round over"
            );
        }

        // 7. Cull pairs that are fully off the left edge
        self.obstacles.retain(|pair| pair.trailing_edge() >= 0.0);

        self.report(game_over_triggered, spawned, scored)
    }

    /// Score the frontmost pair once its trailing edge is behind the bird.
    ///
    /// Only index 0 is inspected. The passed flag stays set while that pair
    /// is still frontmost and clears when the next pair ahead takes its place.
    fn update_score(&mut self) -> bool {
        let Some(front) = self.obstacles.first() else {
            return false;
        };

        if front.trailing_edge() < self.sprite.x {
            if !self.passed_obstacle {
                self.score += 1;
                self.passed_obstacle = true;
                debug!(score = self.score, "passed pipe pair");
                return true;
            }
        } else {
            self.passed_obstacle = false;
        }
        false
    }

    /// Whether the bird hits a pipe segment, the ceiling, or the floor.
    pub fn check_collision(&self) -> bool {
        let hitbox = self.sprite.hitbox();

        if hitbox.top() <= 0.0 || hitbox.bottom() >= self.config.screen_height {
            return true;
        }

        self.segments().any(|segment| hitbox.intersects(&segment))
    }

    fn report(&self, game_over_triggered: bool, spawned: bool, scored: bool) -> AdvanceResult<'_> {
        AdvanceResult {
            sprite: self.sprite,
            obstacles: &self.obstacles,
            score: self.score,
            game_over_triggered,
            spawned,
            scored,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GameConfig;
    use crate::game::types::ObstaclePair;
    use rand::rngs::mock::StepRng;

    fn new_game() -> GameState {
        GameState::new(&GameConfig::default())
    }

    fn rng() -> StepRng {
        StepRng::new(0, 0)
    }

    /// Pair whose gap (200..350) comfortably contains the bird at y=300.
    fn pair_at(x: f32) -> ObstaclePair {
        ObstaclePair {
            x,
            gap_start: 200.0,
            gap_height: 150.0,
            width: 70.0,
            screen_height: 600.0,
        }
    }

    #[test]
    fn test_gravity_pulls_bird_down() {
        let mut game = new_game();
        let result = game.advance(FrameInput::IDLE, &mut rng());
        assert_eq!(result.sprite.velocity, 0.5);
        assert_eq!(result.sprite.y, 300.5);
    }

    #[test]
    fn test_flap_overrides_velocity() {
        let mut game = new_game();
        game.sprite.velocity = 6.0;
        game.advance(FrameInput::FLAP, &mut rng());
        // -8 from the flap, then one frame of gravity
        assert_eq!(game.sprite.velocity, -7.5);
        assert_eq!(game.sprite.y, 292.5);
    }

    #[test]
    fn test_flap_is_not_additive() {
        let mut a = new_game();
        let mut b = new_game();
        a.sprite.velocity = -7.0;
        b.sprite.velocity = 3.0;
        a.advance(FrameInput::FLAP, &mut rng());
        b.advance(FrameInput::FLAP, &mut rng());
        assert_eq!(a.sprite.velocity, b.sprite.velocity);
    }

    #[test]
    fn test_pipes_scroll_left() {
        let mut game = new_game();
        game.obstacles.push(pair_at(300.0));
        game.advance(FrameInput::IDLE, &mut rng());
        assert_eq!(game.obstacles[0].x, 296.0);
    }

    #[test]
    fn test_spawn_after_interval() {
        let mut game = new_game();
        game.frames_since_spawn = game.config.spawn_interval_frames() - 1;
        let result = game.advance(FrameInput::IDLE, &mut rng());
        assert!(!result.spawned);
        assert!(game.obstacles.is_empty());

        let result = game.advance(FrameInput::IDLE, &mut rng());
        assert!(result.spawned);
        assert_eq!(result.obstacles.len(), 1);
        // Spawned at the right edge, then scrolled in the same frame
        assert_eq!(game.obstacles[0].x, 396.0);
        assert_eq!(game.frames_since_spawn, 0);
    }

    #[test]
    fn test_score_once_per_pair() {
        let mut game = new_game();
        // Trailing edge at 52, bird x at 50: one scroll puts it at 48
        game.obstacles.push(pair_at(-18.0));

        let result = game.advance(FrameInput::IDLE, &mut rng());
        assert!(result.scored);
        assert_eq!(game.score, 1);
        assert!(game.passed_obstacle);

        let result = game.advance(FrameInput::IDLE, &mut rng());
        assert!(!result.scored);
        assert_eq!(game.score, 1);
    }

    #[test]
    fn test_trailing_edge_level_with_bird_does_not_score() {
        let mut game = new_game();
        // 54 - 4 = 50, exactly level with the bird's x
        game.obstacles.push(pair_at(-16.0));
        let result = game.advance(FrameInput::IDLE, &mut rng());
        assert!(!result.scored);
        assert_eq!(game.score, 0);
    }

    #[test]
    fn test_passed_flag_clears_when_next_pair_is_frontmost() {
        let mut game = new_game();
        game.passed_obstacle = true;
        game.obstacles.push(pair_at(300.0));
        game.advance(FrameInput::IDLE, &mut rng());
        assert!(!game.passed_obstacle);
    }

    #[test]
    fn test_only_frontmost_pair_is_scored() {
        let mut game = new_game();
        // Both pairs are behind the bird; only index 0 counts
        game.obstacles.push(pair_at(-60.0));
        game.obstacles.push(pair_at(-40.0));
        game.advance(FrameInput::IDLE, &mut rng());
        assert_eq!(game.score, 1);
    }

    #[test]
    fn test_pipe_collision_ends_game() {
        let mut game = new_game();
        // Bird at y=300 is below this pair's gap (50..200)
        game.obstacles.push(ObstaclePair {
            gap_start: 50.0,
            ..pair_at(40.0)
        });
        let result = game.advance(FrameInput::IDLE, &mut rng());
        assert!(result.game_over_triggered);
        assert!(game.is_game_over());
    }

    #[test]
    fn test_no_collision_inside_gap() {
        let mut game = new_game();
        game.obstacles.push(pair_at(40.0));
        let result = game.advance(FrameInput::IDLE, &mut rng());
        assert!(!result.game_over_triggered);
    }

    #[test]
    fn test_ceiling_ends_game() {
        let mut game = new_game();
        game.sprite.y = 2.0;
        game.sprite.velocity = -3.0;
        let result = game.advance(FrameInput::IDLE, &mut rng());
        assert!(result.game_over_triggered);
    }

    #[test]
    fn test_floor_ends_game() {
        let mut game = new_game();
        game.sprite.y = 569.0;
        game.sprite.velocity = 1.0;
        let result = game.advance(FrameInput::IDLE, &mut rng());
        assert!(result.game_over_triggered);
    }

    #[test]
    fn test_no_updates_after_game_over() {
        let mut game = new_game();
        game.obstacles.push(pair_at(200.0));
        game.game_over = true;
        let before = game.clone();

        let result = game.advance(FrameInput::FLAP, &mut rng());

        assert!(!result.game_over_triggered);
        assert_eq!(game.sprite, before.sprite);
        assert_eq!(game.obstacles, before.obstacles);
        assert_eq!(game.frame_count, before.frame_count);
    }

    #[test]
    fn test_cull_only_when_fully_offscreen() {
        let mut game = new_game();
        game.passed_obstacle = true;
        // After scrolling: trailing edges land on 0 (kept) and -1 (culled)
        game.obstacles.push(pair_at(-67.0));
        game.obstacles.push(pair_at(-66.0));
        game.obstacles.push(pair_at(200.0));

        game.advance(FrameInput::IDLE, &mut rng());

        assert_eq!(game.obstacles.len(), 2);
        assert_eq!(game.obstacles[0].trailing_edge(), 0.0);
    }
}
