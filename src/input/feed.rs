//! Landmarks streamed from an external camera + hand detector
//!
//! The detector owns the camera and the model. It writes one JSON object per
//! captured frame to its stdout, e.g.
//!
//! ```text
//! {"hands": [[{"x":0.41,"y":0.62,"z":-0.03}, ...21 landmarks...]]}
//! {"hands": []}
//! {"error": "frame read failed"}
//! ```
//!
//! Reading a line blocks until the detector has processed a frame, so a slow
//! detector slows the game down with it.

use std::io::{BufRead, BufReader};
use std::process::{Child, ChildStdout, Command, Stdio};

use serde::Deserialize;

use super::landmarks::{Hand, finger_position};
use super::{FingerTracker, TrackerError};
use crate::consts::FIELD_WIDTH;

/// One line of detector output
#[derive(Debug, Deserialize)]
struct DetectorFrame {
    #[serde(default)]
    hands: Vec<Hand>,
    #[serde(default)]
    error: Option<String>,
}

/// Finger tracker over any line-oriented detector stream
pub struct LandmarkFeed<R> {
    reader: R,
    line: String,
    mirror: bool,
}

impl<R: BufRead> LandmarkFeed<R> {
    /// `mirror` flips x, for detectors that see the camera frame unflipped
    pub fn new(reader: R, mirror: bool) -> Self {
        Self {
            reader,
            line: String::new(),
            mirror,
        }
    }
}

impl<R: BufRead> LandmarkFeed<R> {
    /// Read the next line into `self.line`
    fn next_line(&mut self) -> Result<(), TrackerError> {
        self.line.clear();
        if self.reader.read_line(&mut self.line)? == 0 {
            return Err(TrackerError::Disconnected);
        }
        Ok(())
    }
}

impl<R: BufRead> FingerTracker for LandmarkFeed<R> {
    fn poll(&mut self) -> Result<Option<f32>, TrackerError> {
        self.next_line()?;

        let frame: DetectorFrame = serde_json::from_str(self.line.trim())?;
        if let Some(reason) = frame.error {
            return Err(TrackerError::Capture(reason));
        }
        Ok(finger_position(&frame.hands, self.mirror, FIELD_WIDTH))
    }

    /// Drop one frame unparsed
    fn discard(&mut self) -> Result<(), TrackerError> {
        self.next_line()
    }
}

/// A detector running as a child process, read through its stdout
///
/// The child is killed and reaped on drop, which releases the camera.
pub struct DetectorProcess {
    child: Child,
    feed: LandmarkFeed<BufReader<ChildStdout>>,
}

impl DetectorProcess {
    pub fn spawn(program: &str, args: &[String], mirror: bool) -> std::io::Result<Self> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()?;

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| std::io::Error::other("detector stdout was not captured"))?;

        log::info!("Started hand detector `{}` (pid {})", program, child.id());
        Ok(Self {
            child,
            feed: LandmarkFeed::new(BufReader::new(stdout), mirror),
        })
    }
}

impl FingerTracker for DetectorProcess {
    fn poll(&mut self) -> Result<Option<f32>, TrackerError> {
        self.feed.poll()
    }

    fn discard(&mut self) -> Result<(), TrackerError> {
        self.feed.discard()
    }
}

impl Drop for DetectorProcess {
    fn drop(&mut self) {
        if let Err(e) = self.child.kill() {
            log::debug!("Detector already exited: {}", e);
        }
        match self.child.wait() {
            Ok(status) => log::info!("Hand detector stopped ({})", status),
            Err(e) => log::warn!("Failed to reap hand detector: {}", e),
        }
    }
}
