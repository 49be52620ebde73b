//! Builds the frame's triangle list from game state, in field pixels

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, colors};
use crate::consts::{FIELD_HEIGHT, FIELD_WIDTH};
use crate::sim::{GameState, RoundState};

/// Font cell size in pixels
pub const TEXT_SCALE: f32 = 2.5;
/// Margin between HUD text and the field edge
const HUD_MARGIN: f32 = 10.0;
const BALL_SEGMENTS: u32 = 24;

pub const PLAYING_HINT: &str = "Press 'Q' to quit";
pub const WON_MESSAGE: &str = "You Won! Press 'R' to restart or 'Q' to quit";
pub const GAME_OVER_MESSAGE: &str = "Game Over! Press 'R' to restart or 'Q' to quit";

pub fn lives_label(state: &GameState) -> String {
    format!("Lives: {}", state.lives)
}

pub fn bricks_label(state: &GameState) -> String {
    format!("Bricks: {}", state.bricks_remaining())
}

/// Status line for the current round state
pub fn status_message(round: RoundState) -> &'static str {
    match round {
        RoundState::Playing => PLAYING_HINT,
        RoundState::Won => WON_MESSAGE,
        RoundState::GameOver => GAME_OVER_MESSAGE,
    }
}

/// Everything drawn this frame; the background is the render pass clear color
pub fn build_scene(state: &GameState) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(4096);

    vertices.extend(shapes::rect(&state.paddle.rect, colors::PADDLE));
    vertices.extend(shapes::ellipse(&state.ball.rect, colors::BALL, BALL_SEGMENTS));
    for brick in &state.bricks {
        vertices.extend(shapes::rect(&brick.rect, colors::BRICK));
    }

    // HUD
    vertices.extend(shapes::text(
        &lives_label(state),
        Vec2::new(HUD_MARGIN, HUD_MARGIN),
        TEXT_SCALE,
        colors::TEXT,
    ));
    let bricks = bricks_label(state);
    let bricks_x = FIELD_WIDTH - HUD_MARGIN - shapes::text_width(&bricks, TEXT_SCALE);
    vertices.extend(shapes::text(
        &bricks,
        Vec2::new(bricks_x, HUD_MARGIN),
        TEXT_SCALE,
        colors::TEXT,
    ));

    let status = status_message(state.round);
    let status_y = match state.round {
        RoundState::Playing => FIELD_HEIGHT - 30.0,
        RoundState::Won | RoundState::GameOver => FIELD_HEIGHT / 2.0,
    };
    let status_x = (FIELD_WIDTH - shapes::text_width(status, TEXT_SCALE)) / 2.0;
    vertices.extend(shapes::text(
        status,
        Vec2::new(status_x, status_y),
        TEXT_SCALE,
        colors::TEXT,
    ));

    vertices
}
