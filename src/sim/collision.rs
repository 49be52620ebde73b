//! Collision detection for the rectangular field
//!
//! Detection only; `tick` decides how velocities respond.

use super::rect::Rect;
use super::state::Brick;
use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH, PADDLE_SPIN_DIVISOR};

/// Which walls the ball is touching or past this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallContact {
    /// Left or right wall
    pub side: bool,
    /// Top wall
    pub ceiling: bool,
}

/// Check the ball against the left, right and top walls
///
/// The bottom edge is not a wall; see [`ball_lost`].
pub fn wall_contact(ball: &Rect) -> WallContact {
    WallContact {
        side: ball.left() <= 0.0 || ball.right() >= FIELD_WIDTH,
        ceiling: ball.top() <= 0.0,
    }
}

/// True when the paddle should bounce the ball back up
///
/// Only a descending ball bounces.
pub fn ball_paddle_collision(ball: &Rect, vel_y: f32, paddle: &Rect) -> bool {
    vel_y > 0.0 && ball.intersects(paddle)
}

/// Horizontal speed added by a paddle hit, based on where the ball struck
pub fn paddle_spin(ball: &Rect, paddle: &Rect) -> f32 {
    (ball.center_x() - paddle.center_x()) / PADDLE_SPIN_DIVISOR
}

/// Index of the first brick (in scan order) overlapping the ball
pub fn first_brick_hit(ball: &Rect, bricks: &[Brick]) -> Option<usize> {
    bricks.iter().position(|brick| ball.intersects(&brick.rect))
}

/// Check if the ball fell past the bottom edge
pub fn ball_lost(ball: &Rect) -> bool {
    ball.bottom() >= FIELD_HEIGHT
}
