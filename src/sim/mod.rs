//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed tick per frame
//! - Seeded RNG only
//! - Stable brick scan order
//! - No rendering, input or platform dependencies

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{WallContact, ball_lost, ball_paddle_collision, first_brick_hit, paddle_spin, wall_contact};
pub use rect::Rect;
pub use state::{Ball, Brick, GameEvent, GameState, Paddle, RoundState, Tuning, generate_bricks};
pub use tick::{TickInput, tick};
