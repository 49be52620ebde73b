//! Runtime settings
//!
//! There is no settings file and no CLI. Settings come from the environment:
//! - `HAND_BREAKOUT_SETTINGS`: a JSON object, any subset of [`Settings`] fields
//! - `HAND_BREAKOUT_DETECTOR`: shorthand for a detector command line
//!   (whitespace-separated), overriding `tracker`

use serde::{Deserialize, Serialize};

use crate::consts::TARGET_FPS;
use crate::sim::Tuning;

/// Where finger positions come from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum TrackerSource {
    /// Mouse cursor inside the window
    #[default]
    Cursor,
    /// External camera + hand detector process streaming landmark JSON
    Detector {
        program: String,
        #[serde(default)]
        args: Vec<String>,
    },
}

impl TrackerSource {
    /// Parse a whitespace-separated command line
    pub fn from_command_line(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(TrackerSource::Detector {
            program,
            args: parts.collect(),
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TrackerSource::Cursor => "cursor",
            TrackerSource::Detector { .. } => "detector",
        }
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Finger position source
    pub tracker: TrackerSource,
    /// Flip detector x (the detector sees the camera frame unmirrored)
    pub mirror: bool,
    /// Keep the paddle inside the field
    pub clamp_paddle: bool,
    /// Cap on horizontal ball speed after paddle spin
    pub max_spin_speed: Option<f32>,
    /// RNG seed; derived from the clock when unset
    pub seed: Option<u64>,
    /// Frame (and tick) rate
    pub fps: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tracker: TrackerSource::Cursor,
            mirror: true,
            clamp_paddle: false,
            max_spin_speed: None,
            seed: None,
            fps: TARGET_FPS,
        }
    }
}

impl Settings {
    /// JSON settings variable
    pub const SETTINGS_VAR: &'static str = "HAND_BREAKOUT_SETTINGS";
    /// Detector command shorthand variable
    pub const DETECTOR_VAR: &'static str = "HAND_BREAKOUT_DETECTOR";
    /// Accepted frame rates
    pub const FPS_RANGE: std::ops::RangeInclusive<u32> = 1..=240;

    /// Load settings from the process environment
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var(Self::SETTINGS_VAR).ok().as_deref(),
            std::env::var(Self::DETECTOR_VAR).ok().as_deref(),
        )
    }

    /// Build settings from raw variable values; bad JSON falls back to defaults
    pub fn from_vars(settings_json: Option<&str>, detector: Option<&str>) -> Self {
        let mut settings = match settings_json {
            Some(json) => match serde_json::from_str(json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", Self::SETTINGS_VAR);
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring invalid {}: {}", Self::SETTINGS_VAR, e);
                    Self::default()
                }
            },
            None => Self::default(),
        };

        if let Some(source) = detector.and_then(TrackerSource::from_command_line) {
            settings.tracker = source;
        }
        if !Self::FPS_RANGE.contains(&settings.fps) {
            let fps = settings.fps.clamp(*Self::FPS_RANGE.start(), *Self::FPS_RANGE.end());
            log::warn!("fps {} out of range, using {}", settings.fps, fps);
            settings.fps = fps;
        }
        settings
    }

    /// Gameplay tuning derived from these settings
    pub fn tuning(&self) -> Tuning {
        Tuning {
            clamp_paddle: self.clamp_paddle,
            max_spin_speed: self.max_spin_speed.map(f32::abs),
        }
    }

    /// Configured seed, or one taken from the system clock
    pub fn seed_or_clock(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(0)
        })
    }
}
