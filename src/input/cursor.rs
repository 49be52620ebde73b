//! Mouse cursor as a stand-in finger

use std::cell::Cell;
use std::rc::Rc;

use super::{FingerTracker, TrackerError};

/// Reports the last cursor x inside the window, in field pixels
///
/// The window event handler writes through a [`CursorHandle`]; the game loop
/// polls the tracker. Both live on the main thread.
#[derive(Debug, Default)]
pub struct CursorTracker {
    position: Rc<Cell<Option<f32>>>,
}

/// Write side of a [`CursorTracker`]
#[derive(Debug, Clone)]
pub struct CursorHandle {
    position: Rc<Cell<Option<f32>>>,
}

impl CursorTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&self) -> CursorHandle {
        CursorHandle {
            position: Rc::clone(&self.position),
        }
    }
}

impl CursorHandle {
    /// Cursor moved to `x` field pixels
    pub fn moved(&self, x: f32) {
        self.position.set(Some(x));
    }

    /// Cursor left the window; like a hand leaving the camera
    pub fn left(&self) {
        self.position.set(None);
    }
}

impl FingerTracker for CursorTracker {
    fn poll(&mut self) -> Result<Option<f32>, TrackerError> {
        Ok(self.position.get())
    }
}
