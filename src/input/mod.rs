//! Finger tracking input
//!
//! The game only needs one number per frame: where the index finger is,
//! horizontally, in field pixels. Everything that produces it sits behind
//! [`FingerTracker`]:
//! - `feed`: landmarks streamed from an external camera + hand detector
//! - `cursor`: the mouse cursor, for machines without a detector
//! - `scripted`: a fixed sequence of readings, for tests and demos
//!
//! The game never opens a camera itself. The camera is only used when a
//! detector is configured (`HAND_BREAKOUT_DETECTOR` or a `detector` tracker
//! in `HAND_BREAKOUT_SETTINGS`); the detector process owns it. Without one,
//! the mouse cursor stands in for the finger.

pub mod cursor;
pub mod feed;
pub mod landmarks;
pub mod scripted;

pub use cursor::{CursorHandle, CursorTracker};
pub use feed::{DetectorProcess, LandmarkFeed};
pub use landmarks::{HAND_LANDMARK_COUNT, Hand, INDEX_FINGER_TIP, Landmark, finger_position};
pub use scripted::{Reading, ScriptedTracker};

/// Why a tracker could not produce a reading this frame
#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    /// The camera frame could not be read; try again next frame
    #[error("camera frame could not be read: {0}")]
    Capture(String),
    /// The detector went away (process exited, stream closed)
    #[error("hand detector disconnected")]
    Disconnected,
    #[error("malformed detector message: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("detector I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// A source of finger positions, polled once per frame
///
/// `Ok(None)` means the frame was read but no hand was found; the paddle
/// stays put. `Err(TrackerError::Capture)` means there was no frame at all,
/// and the caller skips the simulation step.
pub trait FingerTracker {
    fn poll(&mut self) -> Result<Option<f32>, TrackerError>;

    /// Consume this frame's reading without using it
    ///
    /// Called once per frame while no round is in play. Streamed sources
    /// read and drop a frame so their backlog stays empty; sources that only
    /// hold the latest value have nothing to do.
    fn discard(&mut self) -> Result<(), TrackerError> {
        Ok(())
    }
}

impl<T: FingerTracker + ?Sized> FingerTracker for Box<T> {
    fn poll(&mut self) -> Result<Option<f32>, TrackerError> {
        (**self).poll()
    }

    fn discard(&mut self) -> Result<(), TrackerError> {
        (**self).discard()
    }
}
