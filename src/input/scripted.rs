//! Deterministic tracker driven by a prepared list of readings

use std::collections::VecDeque;

use super::{FingerTracker, TrackerError};

/// One scripted frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reading {
    /// Finger seen at this x (field pixels)
    Finger(f32),
    /// Frame read, no hand in it
    NoHand,
    /// Camera failed to deliver a frame
    Dropped,
}

/// Replays readings in order, then reports no hand forever
#[derive(Debug, Clone, Default)]
pub struct ScriptedTracker {
    readings: VecDeque<Reading>,
}

impl ScriptedTracker {
    pub fn new(readings: impl IntoIterator<Item = Reading>) -> Self {
        Self {
            readings: readings.into_iter().collect(),
        }
    }

    /// A finger sweeping linearly from `from` to `to` over `frames` frames
    pub fn sweep(from: f32, to: f32, frames: usize) -> Self {
        let steps = frames.saturating_sub(1).max(1) as f32;
        Self::new((0..frames).map(|i| Reading::Finger(from + (to - from) * i as f32 / steps)))
    }

    pub fn remaining(&self) -> usize {
        self.readings.len()
    }
}

impl FingerTracker for ScriptedTracker {
    fn poll(&mut self) -> Result<Option<f32>, TrackerError> {
        match self.readings.pop_front() {
            Some(Reading::Finger(x)) => Ok(Some(x)),
            Some(Reading::NoHand) | None => Ok(None),
            Some(Reading::Dropped) => Err(TrackerError::Capture("scripted frame drop".into())),
        }
    }
}
