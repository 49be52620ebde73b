//! Hand Breakout - a breakout arcade game steered by an index finger
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, round state)
//! - `input`: Finger trackers (external detector feed, cursor, scripted)
//! - `renderer`: wgpu rendering pipeline and scene building
//! - `app`: Native window, keyboard commands and the frame loop
//! - `clock`: Fixed-rate frame scheduling
//! - `settings`: Runtime knobs loaded from the environment

pub mod app;
pub mod clock;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{Settings, TrackerSource};

/// Game configuration constants
pub mod consts {
    /// Field dimensions (logical pixels)
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Target frame rate; one simulation tick per frame
    pub const TARGET_FPS: u32 = 60;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 20.0;
    /// Gap between the paddle and the bottom edge
    pub const PADDLE_BOTTOM_GAP: f32 = 10.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 20.0;
    /// Serve speed per tick, horizontal sign is randomized
    pub const BALL_SPEED_X: f32 = 5.0;
    /// Serve speed per tick, always downward
    pub const BALL_SPEED_Y: f32 = 5.0;
    /// Divisor applied to the paddle offset when adding spin
    pub const PADDLE_SPIN_DIVISOR: f32 = 10.0;

    /// Brick grid
    pub const BRICK_WIDTH: f32 = 80.0;
    pub const BRICK_HEIGHT: f32 = 30.0;
    pub const BRICK_ROWS: usize = 5;
    pub const BRICK_COLS: usize = 8;
    pub const BRICK_GAP: f32 = 5.0;
    pub const BRICK_MARGIN: f32 = 30.0;

    pub const STARTING_LIVES: u8 = 3;
}
