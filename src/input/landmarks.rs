//! Hand landmark types and the fingertip → paddle mapping

use serde::{Deserialize, Serialize};

/// Landmarks per detected hand
pub const HAND_LANDMARK_COUNT: usize = 21;
/// Index of the index-finger tip within a hand's landmarks
pub const INDEX_FINGER_TIP: usize = 8;

/// One landmark, normalized to the camera frame (0..1 left→right, top→bottom)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub z: f32,
}

/// A detected hand: its landmarks in detector order
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hand {
    pub landmarks: Vec<Landmark>,
}

impl Hand {
    pub fn index_finger_tip(&self) -> Option<&Landmark> {
        self.landmarks.get(INDEX_FINGER_TIP)
    }
}

/// Map detected hands to a paddle position in field pixels
///
/// Only one hand steers: the last one reported that has an index fingertip.
/// With `mirror` set, x is flipped so the paddle moves the way the player
/// sees themselves in a mirror. Positions truncate to whole pixels and are
/// not clamped; a finger at the frame edge can push the paddle off-field.
pub fn finger_position(hands: &[Hand], mirror: bool, field_width: f32) -> Option<f32> {
    let tip = hands.iter().rev().find_map(Hand::index_finger_tip)?;
    let x = if mirror { 1.0 - tip.x } else { tip.x };
    Some((x * field_width).trunc())
}
