//! Fixed-rate frame scheduling
//!
//! The loop sleeps until the next frame deadline; each frame runs exactly one
//! simulation tick. A loop that falls behind (slow detector, window drag)
//! re-anchors instead of replaying missed frames.

use std::time::{Duration, Instant};

/// Frames averaged for the measured rate
const FPS_WINDOW: usize = 60;
/// Highest rate the clock will schedule
const MAX_FPS: u32 = 1000;

#[derive(Debug, Clone)]
pub struct FrameClock {
    period: Duration,
    next_frame: Instant,
    frame_times: [Option<Instant>; FPS_WINDOW],
    frame_index: usize,
}

impl FrameClock {
    pub fn new(fps: u32, now: Instant) -> Self {
        let period = Duration::from_secs(1) / fps.clamp(1, MAX_FPS);
        Self {
            period,
            next_frame: now,
            frame_times: [None; FPS_WINDOW],
            frame_index: 0,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Deadline of the next frame
    pub fn next_frame(&self) -> Instant {
        self.next_frame
    }

    /// True when the next frame should run
    pub fn due(&self, now: Instant) -> bool {
        now >= self.next_frame
    }

    /// Mark a frame as started at `now` and return the following deadline
    pub fn advance(&mut self, now: Instant) -> Instant {
        self.next_frame += self.period;
        if self.next_frame + self.period <= now {
            // More than a frame behind: drop the backlog
            self.next_frame = now + self.period;
        }

        self.frame_times[self.frame_index] = Some(now);
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;

        self.next_frame
    }

    /// Frames per second over the last `FPS_WINDOW` frames
    pub fn measured_fps(&self, now: Instant) -> Option<f32> {
        let oldest = self.frame_times[self.frame_index]?;
        let elapsed = now.duration_since(oldest).as_secs_f32();
        (elapsed > 0.0).then(|| FPS_WINDOW as f32 / elapsed)
    }
}
