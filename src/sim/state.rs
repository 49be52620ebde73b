//! Game state and core simulation types
//!
//! Everything a round needs lives in one owned aggregate; `reset` rebuilds it.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::rect::Rect;
use crate::consts::*;

/// Current phase of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Active gameplay
    Playing,
    /// Every brick was cleared
    Won,
    /// Lives exhausted
    GameOver,
}

impl RoundState {
    /// True once the round has ended, either way
    pub fn is_finished(&self) -> bool {
        !matches!(self, RoundState::Playing)
    }
}

/// Something notable that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Ball bounced off the left or right wall
    WallBounce,
    /// Ball bounced off the top wall
    CeilingBounce,
    /// Ball bounced off the paddle; `spin` is the horizontal speed added
    PaddleHit { spin: f32 },
    /// A brick was removed
    BrickDestroyed { id: u32, remaining: usize },
    /// Ball crossed the bottom edge
    LifeLost { lives: u8 },
    /// Last brick cleared
    Won,
    /// Last life lost
    GameOver,
}

/// The ball entity
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub rect: Rect,
    /// Pixels per tick
    pub vel: Vec2,
}

impl Ball {
    /// A freshly served ball: centered, random horizontal sign, moving down
    pub fn serve(rng: &mut Pcg32) -> Self {
        let rect = Rect::centered_at(
            Vec2::new(FIELD_WIDTH / 2.0, FIELD_HEIGHT / 2.0),
            Vec2::splat(BALL_SIZE),
        );
        Self {
            rect,
            vel: serve_velocity(rng),
        }
    }

    /// Put the ball back at the center with a new serve velocity
    pub fn respawn(&mut self, rng: &mut Pcg32) {
        self.rect
            .set_center(Vec2::new(FIELD_WIDTH / 2.0, FIELD_HEIGHT / 2.0));
        self.vel = serve_velocity(rng);
    }
}

fn serve_velocity(rng: &mut Pcg32) -> Vec2 {
    let sign = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
    Vec2::new(BALL_SPEED_X * sign, BALL_SPEED_Y)
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    pub rect: Rect,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            rect: Rect::new(
                FIELD_WIDTH / 2.0 - PADDLE_WIDTH / 2.0,
                FIELD_HEIGHT - PADDLE_HEIGHT - PADDLE_BOTTOM_GAP,
                PADDLE_WIDTH,
                PADDLE_HEIGHT,
            ),
        }
    }
}

impl Paddle {
    /// Move the paddle so its center sits at `x`, optionally kept inside the field
    pub fn move_to(&mut self, x: f32, clamp: bool) {
        let x = if clamp {
            let half = self.rect.width() / 2.0;
            x.clamp(half, FIELD_WIDTH - half)
        } else {
            x
        };
        self.rect.set_center_x(x);
    }
}

/// A static brick
#[derive(Debug, Clone, PartialEq)]
pub struct Brick {
    /// Grid index (row-major), stable across the round
    pub id: u32,
    pub rect: Rect,
}

/// Build the full brick grid, row-major
pub fn generate_bricks() -> Vec<Brick> {
    let mut bricks = Vec::with_capacity(BRICK_ROWS * BRICK_COLS);
    for row in 0..BRICK_ROWS {
        for col in 0..BRICK_COLS {
            let x = col as f32 * (BRICK_WIDTH + BRICK_GAP) + BRICK_MARGIN;
            let y = row as f32 * (BRICK_HEIGHT + BRICK_GAP) + BRICK_MARGIN;
            bricks.push(Brick {
                id: (row * BRICK_COLS + col) as u32,
                rect: Rect::new(x, y, BRICK_WIDTH, BRICK_HEIGHT),
            });
        }
    }
    bricks
}

/// Optional gameplay adjustments; defaults reproduce the classic feel
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tuning {
    /// Keep the paddle fully inside the field
    pub clamp_paddle: bool,
    /// Cap on |vx| after paddle spin is applied
    pub max_spin_speed: Option<f32>,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub round: RoundState,
    pub lives: u8,
    pub paddle: Paddle,
    pub ball: Ball,
    /// Active bricks, in scan order
    pub bricks: Vec<Brick>,
    pub tuning: Tuning,
    /// Ticks simulated in the current round
    pub time_ticks: u64,
    rng: Pcg32,
}

impl GameState {
    /// Create a new round with the given seed
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let ball = Ball::serve(&mut rng);
        Self {
            seed,
            round: RoundState::Playing,
            lives: STARTING_LIVES,
            paddle: Paddle::default(),
            ball,
            bricks: generate_bricks(),
            tuning,
            time_ticks: 0,
            rng,
        }
    }

    /// Start a fresh round from any state
    ///
    /// Every entity is rebuilt; the RNG stream carries on so that
    /// consecutive rounds serve in different directions.
    pub fn reset(&mut self) {
        let rng = self.rng.clone();
        let mut fresh = Self {
            rng,
            ..Self::with_tuning(self.seed, self.tuning)
        };
        fresh.ball = Ball::serve(&mut fresh.rng);
        *self = fresh;
    }

    /// Serve a new ball after a life is lost
    pub(crate) fn respawn_ball(&mut self) {
        self.ball.respawn(&mut self.rng);
    }

    pub fn bricks_remaining(&self) -> usize {
        self.bricks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_round_defaults() {
        let state = GameState::new(7);
        assert_eq!(state.round, RoundState::Playing);
        assert_eq!(state.lives, 3);
        assert_eq!(state.bricks.len(), 40);
        assert_eq!(state.ball.rect.center(), Vec2::new(400.0, 300.0));
        assert_eq!(state.ball.vel.x.abs(), 5.0);
        assert_eq!(state.ball.vel.y, 5.0);
        assert_eq!(state.paddle.rect.pos, Vec2::new(350.0, 570.0));
    }

    #[test]
    fn test_brick_grid_layout() {
        let bricks = generate_bricks();
        assert_eq!(bricks.len(), BRICK_ROWS * BRICK_COLS);

        // Row-major order
        assert_eq!(bricks[0].rect.pos, Vec2::new(30.0, 30.0));
        assert_eq!(bricks[1].rect.pos, Vec2::new(115.0, 30.0));
        assert_eq!(bricks[8].rect.pos, Vec2::new(30.0, 65.0));

        let last = bricks.last().unwrap();
        assert_eq!(last.id, 39);
        assert_eq!(last.rect.pos, Vec2::new(625.0, 170.0));
        assert!(last.rect.right() < FIELD_WIDTH);
    }

    #[test]
    fn test_reset_restores_round() {
        let mut state = GameState::new(42);
        state.bricks.truncate(3);
        state.lives = 0;
        state.round = RoundState::GameOver;
        state.paddle.move_to(10.0, false);
        state.ball.rect.pos = Vec2::new(5.0, 590.0);
        state.time_ticks = 99;

        state.reset();
        assert_eq!(state.round, RoundState::Playing);
        assert_eq!(state.lives, 3);
        assert_eq!(state.bricks.len(), 40);
        assert_eq!(state.ball.rect.center(), Vec2::new(400.0, 300.0));
        assert_eq!(state.ball.vel.abs(), Vec2::new(5.0, 5.0));
        assert_eq!(state.paddle, Paddle::default());
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_reset_is_idempotent_in_shape() {
        let mut state = GameState::new(1);
        state.reset();
        let first = (state.lives, state.round, state.bricks.clone());
        state.reset();
        assert_eq!((state.lives, state.round, state.bricks.clone()), first);
    }

    #[test]
    fn test_reset_keeps_tuning_and_seed() {
        let tuning = Tuning {
            clamp_paddle: true,
            max_spin_speed: Some(8.0),
        };
        let mut state = GameState::with_tuning(5, tuning);
        state.reset();
        assert_eq!(state.tuning, tuning);
        assert_eq!(state.seed, 5);
    }

    #[test]
    fn test_serve_direction_varies() {
        let mut state = GameState::new(3);
        let mut seen_left = false;
        let mut seen_right = false;
        for _ in 0..64 {
            state.reset();
            if state.ball.vel.x < 0.0 {
                seen_left = true;
            } else {
                seen_right = true;
            }
        }
        assert!(seen_left && seen_right);
    }

    #[test]
    fn test_same_seed_same_serve() {
        let a = GameState::new(99999);
        let b = GameState::new(99999);
        assert_eq!(a.ball, b.ball);
    }

    #[test]
    fn test_paddle_clamp() {
        let mut paddle = Paddle::default();
        paddle.move_to(-200.0, true);
        assert_eq!(paddle.rect.left(), 0.0);
        paddle.move_to(5000.0, true);
        assert_eq!(paddle.rect.right(), FIELD_WIDTH);

        paddle.move_to(-200.0, false);
        assert_eq!(paddle.rect.center_x(), -200.0);
    }
}
