//! One frame of gameplay: poll the tracker, tick, log what happened

use crate::input::{FingerTracker, TrackerError};
use crate::sim::{GameEvent, GameState, RoundState, TickInput};

/// What a call to [`Game::frame`] did
#[derive(Debug, Clone, PartialEq)]
pub enum FrameOutcome {
    /// Round is over; tracker drained, nothing simulated
    Idle,
    /// No camera frame this time; simulation step skipped
    Skipped,
    Ticked(Vec<GameEvent>),
}

/// Game state plus the tracker feeding it
pub struct Game {
    pub state: GameState,
    tracker: Box<dyn FingerTracker>,
    /// Set once the tracker disconnects; it is not polled again
    tracker_lost: bool,
}

impl Game {
    pub fn new(state: GameState, tracker: Box<dyn FingerTracker>) -> Self {
        Self {
            state,
            tracker,
            tracker_lost: false,
        }
    }

    pub fn round(&self) -> RoundState {
        self.state.round
    }

    /// Start a fresh round
    pub fn reset(&mut self) {
        self.state.reset();
        log::info!("Round reset: {} lives, {} bricks", self.state.lives, self.state.bricks_remaining());
    }

    /// Run one frame of the game loop
    pub fn frame(&mut self) -> FrameOutcome {
        if self.state.round != RoundState::Playing {
            self.drain_tracker();
            return FrameOutcome::Idle;
        }

        let paddle_x = match self.poll_tracker() {
            Some(hint) => hint,
            None => return FrameOutcome::Skipped,
        };

        let before = self.state.round;
        let events = self.state.tick(&TickInput { paddle_x });
        for event in &events {
            log_event(event);
        }
        if self.state.round != before {
            log::info!(
                "Round {:?} -> {:?} after {} ticks",
                before,
                self.state.round,
                self.state.time_ticks
            );
        }

        FrameOutcome::Ticked(events)
    }

    /// Keep a streamed tracker current while no round is in play
    fn drain_tracker(&mut self) {
        if self.tracker_lost {
            return;
        }
        match self.tracker.discard() {
            Ok(()) => {}
            Err(TrackerError::Disconnected) => self.mark_tracker_lost(),
            Err(e) => log::trace!("Discarded tracker error: {}", e),
        }
    }

    fn mark_tracker_lost(&mut self) {
        log::warn!("Hand tracker disconnected; paddle will stay put");
        self.tracker_lost = true;
    }

    /// Outer `None` skips the tick; inner is the paddle hint
    fn poll_tracker(&mut self) -> Option<Option<f32>> {
        if self.tracker_lost {
            return Some(None);
        }

        match self.tracker.poll() {
            Ok(hint) => Some(hint),
            Err(TrackerError::Capture(reason)) => {
                log::trace!("Frame dropped: {}", reason);
                None
            }
            Err(TrackerError::Disconnected) => {
                self.mark_tracker_lost();
                Some(None)
            }
            Err(e) => {
                log::debug!("Tracker error: {}", e);
                None
            }
        }
    }
}

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::WallBounce | GameEvent::CeilingBounce => log::trace!("{:?}", event),
        GameEvent::PaddleHit { spin } => log::trace!("Paddle hit, spin {:.1}", spin),
        GameEvent::BrickDestroyed { id, remaining } => {
            log::debug!("Brick {} destroyed, {} remaining", id, remaining)
        }
        GameEvent::LifeLost { lives } => log::debug!("Life lost, {} left", lives),
        GameEvent::Won => log::info!("All bricks cleared"),
        GameEvent::GameOver => log::info!("Out of lives"),
    }
}
