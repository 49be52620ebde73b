//! Fixed timestep simulation tick
//!
//! One call advances the round by one frame. Order matters: move, walls,
//! paddle, bricks, bottom edge, then the win check.

use super::collision::{ball_lost, ball_paddle_collision, first_brick_hit, paddle_spin, wall_contact};
use super::state::{GameEvent, GameState, RoundState};

/// Input for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Finger position in field pixels, if a hand was seen this frame
    pub paddle_x: Option<f32>,
}

impl TickInput {
    pub fn with_paddle_x(x: f32) -> Self {
        Self { paddle_x: Some(x) }
    }
}

/// Advance the game state by one tick, returning what happened
///
/// Does nothing unless the round is `Playing`.
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.round != RoundState::Playing {
        return events;
    }

    state.time_ticks += 1;

    if let Some(x) = input.paddle_x {
        state.paddle.move_to(x, state.tuning.clamp_paddle);
    }

    let ball = &mut state.ball;
    ball.rect.pos += ball.vel;

    let walls = wall_contact(&ball.rect);
    if walls.side {
        ball.vel.x = -ball.vel.x;
        events.push(GameEvent::WallBounce);
    }
    if walls.ceiling {
        ball.vel.y = -ball.vel.y;
        events.push(GameEvent::CeilingBounce);
    }

    if ball_paddle_collision(&ball.rect, ball.vel.y, &state.paddle.rect) {
        let spin = paddle_spin(&ball.rect, &state.paddle.rect);
        ball.vel.y = -ball.vel.y;
        ball.vel.x += spin;
        if let Some(max) = state.tuning.max_spin_speed {
            ball.vel.x = ball.vel.x.clamp(-max, max);
        }
        events.push(GameEvent::PaddleHit { spin });
    }

    // At most one brick per tick, even if the ball overlaps several
    let mut brick_removed = false;
    if let Some(idx) = first_brick_hit(&ball.rect, &state.bricks) {
        let brick = state.bricks.remove(idx);
        ball.vel.y = -ball.vel.y;
        brick_removed = true;
        events.push(GameEvent::BrickDestroyed {
            id: brick.id,
            remaining: state.bricks.len(),
        });
    }

    let mut out_of_lives = false;
    if ball_lost(&ball.rect) {
        state.lives = state.lives.saturating_sub(1);
        events.push(GameEvent::LifeLost { lives: state.lives });
        if state.lives > 0 {
            state.respawn_ball();
        } else {
            out_of_lives = true;
        }
    }

    // Clearing the final brick wins even if the same tick took the last life
    if brick_removed && state.bricks.is_empty() {
        state.round = RoundState::Won;
        events.push(GameEvent::Won);
    } else if out_of_lives {
        state.round = RoundState::GameOver;
        events.push(GameEvent::GameOver);
    }

    events
}

impl GameState {
    /// Advance this round by one tick; see [`tick`]
    pub fn tick(&mut self, input: &TickInput) -> Vec<GameEvent> {
        tick(self, input)
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;
    use proptest::prelude::*;

    use super::*;
    use crate::sim::rect::Rect;
    use crate::sim::state::{Brick, Tuning};

    /// A playing state with the ball placed and no bricks unless added
    fn open_field(pos: Vec2, vel: Vec2) -> GameState {
        let mut state = GameState::new(12345);
        state.bricks.clear();
        state.ball.rect.pos = pos;
        state.ball.vel = vel;
        state
    }

    #[test]
    fn test_ball_moves_by_velocity() {
        let mut state = open_field(Vec2::new(390.0, 290.0), Vec2::new(5.0, 5.0));
        let events = tick(&mut state, &TickInput::default());
        assert!(events.is_empty());
        assert_eq!(state.ball.rect.pos, Vec2::new(395.0, 295.0));
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_paddle_follows_hint() {
        let mut state = open_field(Vec2::new(390.0, 290.0), Vec2::new(5.0, 5.0));
        tick(&mut state, &TickInput::with_paddle_x(120.0));
        assert_eq!(state.paddle.rect.center_x(), 120.0);

        // No hint leaves the paddle where it was
        tick(&mut state, &TickInput::default());
        assert_eq!(state.paddle.rect.center_x(), 120.0);
    }

    #[test]
    fn test_paddle_hint_unclamped_by_default() {
        let mut state = open_field(Vec2::new(390.0, 290.0), Vec2::new(5.0, 5.0));
        tick(&mut state, &TickInput::with_paddle_x(-30.0));
        assert_eq!(state.paddle.rect.center_x(), -30.0);
    }

    #[test]
    fn test_paddle_hint_clamped_when_tuned() {
        let mut state = open_field(Vec2::new(390.0, 290.0), Vec2::new(5.0, 5.0));
        state.tuning.clamp_paddle = true;
        tick(&mut state, &TickInput::with_paddle_x(790.0));
        assert_eq!(state.paddle.rect.center_x(), 750.0);
    }

    #[test]
    fn test_left_wall_bounce() {
        let mut state = open_field(Vec2::new(3.0, 200.0), Vec2::new(-5.0, 5.0));
        let events = tick(&mut state, &TickInput::default());
        assert_eq!(state.ball.vel, Vec2::new(5.0, 5.0));
        assert_eq!(events, vec![GameEvent::WallBounce]);
    }

    #[test]
    fn test_right_wall_bounce() {
        let mut state = open_field(Vec2::new(776.0, 200.0), Vec2::new(5.0, -5.0));
        tick(&mut state, &TickInput::default());
        assert_eq!(state.ball.vel.x, -5.0);
        assert_eq!(state.ball.vel.y, -5.0);
    }

    #[test]
    fn test_ceiling_bounce() {
        let mut state = open_field(Vec2::new(200.0, 4.0), Vec2::new(5.0, -5.0));
        let events = tick(&mut state, &TickInput::default());
        assert_eq!(state.ball.vel, Vec2::new(5.0, 5.0));
        assert_eq!(events, vec![GameEvent::CeilingBounce]);
    }

    #[test]
    fn test_corner_bounce_flips_both() {
        let mut state = open_field(Vec2::new(2.0, 2.0), Vec2::new(-5.0, -5.0));
        let events = tick(&mut state, &TickInput::default());
        assert_eq!(state.ball.vel, Vec2::new(5.0, 5.0));
        assert_eq!(events, vec![GameEvent::WallBounce, GameEvent::CeilingBounce]);
    }

    #[test]
    fn test_paddle_bounce_adds_spin() {
        // Paddle centered at 400, spans y 570..590
        let mut state = open_field(Vec2::new(420.0, 548.0), Vec2::new(5.0, 5.0));
        let events = tick(&mut state, &TickInput::default());
        // Ball center x = 435 after moving, 35px right of paddle center
        assert_eq!(state.ball.vel, Vec2::new(8.5, -5.0));
        assert_eq!(events, vec![GameEvent::PaddleHit { spin: 3.5 }]);
    }

    #[test]
    fn test_paddle_ignores_rising_ball() {
        let mut state = open_field(Vec2::new(390.0, 570.0), Vec2::new(0.0, -5.0));
        tick(&mut state, &TickInput::default());
        assert_eq!(state.ball.vel, Vec2::new(0.0, -5.0));
    }

    #[test]
    fn test_spin_accumulates_without_cap() {
        let mut state = open_field(Vec2::new(430.0, 548.0), Vec2::new(5.0, 5.0));
        tick(&mut state, &TickInput::default());
        let first = state.ball.vel.x;
        assert!(first > 5.0);

        // Send it back down onto the paddle's right side again
        state.ball.rect.pos = Vec2::new(430.0, 548.0);
        state.ball.vel.y = 5.0;
        tick(&mut state, &TickInput::default());
        assert!(state.ball.vel.x > first);
    }

    #[test]
    fn test_spin_capped_when_tuned() {
        // Ball center lands 55px right of the paddle center: 5 + 5.5 > 7
        let mut state = open_field(Vec2::new(440.0, 548.0), Vec2::new(5.0, 5.0));
        state.tuning = Tuning {
            clamp_paddle: false,
            max_spin_speed: Some(7.0),
        };
        tick(&mut state, &TickInput::default());
        assert_eq!(state.ball.vel.x, 7.0);
    }

    #[test]
    fn test_brick_hit_removes_one_and_flips() {
        let mut state = GameState::new(1);
        // Ball rising into the bottom row; several bricks nearby
        let brick = state.bricks[33].rect;
        state.ball.rect.pos = Vec2::new(brick.left() + 10.0, brick.bottom() + 2.0);
        state.ball.vel = Vec2::new(0.0, -5.0);

        let events = tick(&mut state, &TickInput::default());
        assert_eq!(state.bricks.len(), 39);
        assert!(state.bricks.iter().all(|b| b.id != 33));
        assert_eq!(state.ball.vel.y, 5.0);
        assert_eq!(
            events,
            vec![GameEvent::BrickDestroyed {
                id: 33,
                remaining: 39
            }]
        );
    }

    #[test]
    fn test_overlapping_bricks_only_first_removed() {
        let mut state = open_field(Vec2::new(100.0, 100.0), Vec2::new(0.0, -5.0));
        state.bricks = vec![
            Brick {
                id: 7,
                rect: Rect::new(90.0, 80.0, 30.0, 30.0),
            },
            Brick {
                id: 8,
                rect: Rect::new(100.0, 80.0, 30.0, 30.0),
            },
        ];
        tick(&mut state, &TickInput::default());
        assert_eq!(state.bricks.len(), 1);
        assert_eq!(state.bricks[0].id, 8);
        assert_eq!(state.round, RoundState::Playing);
    }

    #[test]
    fn test_life_lost_respawns() {
        let mut state = open_field(Vec2::new(100.0, 578.0), Vec2::new(0.0, 5.0));
        let events = tick(&mut state, &TickInput::with_paddle_x(600.0));
        assert_eq!(state.lives, 2);
        assert_eq!(state.round, RoundState::Playing);
        assert_eq!(state.ball.rect.center(), Vec2::new(400.0, 300.0));
        assert_eq!(state.ball.vel.abs(), Vec2::new(5.0, 5.0));
        // Paddle untouched by respawn
        assert_eq!(state.paddle.rect.center_x(), 600.0);
        assert_eq!(events, vec![GameEvent::LifeLost { lives: 2 }]);
    }

    #[test]
    fn test_last_life_ends_round() {
        let mut state = open_field(Vec2::new(100.0, 578.0), Vec2::new(0.0, 5.0));
        state.lives = 1;
        let events = tick(&mut state, &TickInput::default());
        assert_eq!(state.lives, 0);
        assert_eq!(state.round, RoundState::GameOver);
        assert_eq!(
            events,
            vec![GameEvent::LifeLost { lives: 0 }, GameEvent::GameOver]
        );
    }

    #[test]
    fn test_last_brick_wins() {
        let mut state = open_field(Vec2::new(100.0, 112.0), Vec2::new(0.0, -5.0));
        state.bricks = vec![Brick {
            id: 0,
            rect: Rect::new(90.0, 80.0, 80.0, 30.0),
        }];
        let events = tick(&mut state, &TickInput::default());
        assert!(state.bricks.is_empty());
        assert_eq!(state.round, RoundState::Won);
        assert_eq!(events.last(), Some(&GameEvent::Won));
    }

    #[test]
    fn test_last_brick_on_last_life_wins() {
        // Brick sits on the bottom edge, left of the paddle
        let mut state = open_field(Vec2::new(110.0, 578.0), Vec2::new(5.0, 5.0));
        state.lives = 1;
        state.bricks = vec![Brick {
            id: 0,
            rect: Rect::new(100.0, 570.0, 80.0, 30.0),
        }];
        let events = tick(&mut state, &TickInput::default());
        assert_eq!(state.round, RoundState::Won);
        assert_eq!(state.lives, 0);
        assert_eq!(
            events,
            vec![
                GameEvent::BrickDestroyed { id: 0, remaining: 0 },
                GameEvent::LifeLost { lives: 0 },
                GameEvent::Won,
            ]
        );
        assert!(!events.contains(&GameEvent::GameOver));
    }

    #[test]
    fn test_empty_field_is_not_a_win() {
        let mut state = open_field(Vec2::new(390.0, 290.0), Vec2::new(5.0, 5.0));
        tick(&mut state, &TickInput::default());
        assert_eq!(state.round, RoundState::Playing);
    }

    #[test]
    fn test_finished_round_is_frozen() {
        for round in [RoundState::Won, RoundState::GameOver] {
            let mut state = open_field(Vec2::new(100.0, 578.0), Vec2::new(0.0, 5.0));
            state.round = round;
            let before = state.clone();
            let events = tick(&mut state, &TickInput::with_paddle_x(10.0));
            assert!(events.is_empty());
            assert_eq!(state, before);
        }
    }

    proptest! {
        #[test]
        fn prop_finished_rounds_never_change(
            x in -100.0f32..900.0,
            hint in proptest::option::of(-200.0f32..1000.0),
            over in any::<bool>(),
        ) {
            let mut state = GameState::new(8);
            state.ball.rect.pos.x = x;
            state.round = if over { RoundState::GameOver } else { RoundState::Won };
            let before = state.clone();
            tick(&mut state, &TickInput { paddle_x: hint });
            prop_assert_eq!(state, before);
        }

        #[test]
        fn prop_at_most_one_brick_per_tick(
            x in 0.0f32..780.0,
            y in 0.0f32..300.0,
            vx in -8.0f32..8.0,
            vy in -8.0f32..8.0,
        ) {
            let mut state = GameState::new(21);
            state.ball.rect.pos = Vec2::new(x, y);
            state.ball.vel = Vec2::new(vx, vy);
            let before = state.bricks.len();
            tick(&mut state, &TickInput::default());
            prop_assert!(before - state.bricks.len() <= 1);
        }

        #[test]
        fn prop_horizontal_flip_iff_side_wall(
            x in -10.0f32..790.0,
            y in 250.0f32..400.0,
            vx in prop_oneof![-9.0f32..-0.5, 0.5f32..9.0],
            vy in -6.0f32..6.0,
        ) {
            // No bricks, ball well above the paddle
            let mut state = open_field(Vec2::new(x, y), Vec2::new(vx, vy));
            tick(&mut state, &TickInput::default());
            let moved = state.ball.rect;
            let touching = moved.left() <= 0.0 || moved.right() >= 800.0;
            prop_assert_eq!(state.ball.vel.x == -vx, touching);
            prop_assert_eq!(state.ball.vel.y, vy);
        }

        #[test]
        fn prop_lives_drop_by_one_with_floor(
            lives in 0u8..=3,
            x in 0.0f32..780.0,
            y in 560.0f32..620.0,
        ) {
            let mut state = open_field(Vec2::new(x, y), Vec2::new(0.0, 5.0));
            // Paddle out of the way
            state.paddle.move_to(-1000.0, false);
            state.lives = lives;
            if lives == 0 {
                state.round = RoundState::GameOver;
            }
            tick(&mut state, &TickInput::default());
            if lives == 0 {
                prop_assert_eq!(state.lives, 0);
            } else if y + 5.0 + 20.0 >= 600.0 {
                prop_assert_eq!(state.lives, lives - 1);
                prop_assert_eq!(state.round == RoundState::GameOver, lives == 1);
            } else {
                prop_assert_eq!(state.lives, lives);
            }
        }
    }
}
