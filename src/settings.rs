//! Hardware tuning
//!
//! Debounce windows, sensor thresholds and light timing. Gameplay balance
//! (difficulties, level count) is compiled in and not part of this.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failed to read or parse a settings file
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file")]
    Io(#[from] std::io::Error),

    #[error("invalid settings JSON")]
    Parse(#[from] serde_json::Error),
}

/// Hardware tuning values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Input ===
    /// Minimum seconds between two accepted button presses
    pub button_debounce: f64,
    /// Minimum seconds between two accepted encoder turns
    pub turn_debounce: f64,
    /// Acceleration (m/s²) past rest that counts as a tilt
    pub accel_threshold: f32,
    /// Readings averaged at startup to find the rest offset
    pub calibration_samples: u32,

    // === Driver ===
    /// Seconds between driver ticks
    pub loop_delay: f64,

    // === Lights ===
    /// Overall light brightness (0.0 - 1.0)
    pub brightness: f32,
    /// Seconds per colour in the win animation
    pub win_color_interval: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            button_debounce: 0.2,
            turn_debounce: 0.15,
            accel_threshold: 6.0,
            calibration_samples: 50,

            loop_delay: 0.01,

            brightness: 0.2,
            win_color_interval: 0.15,
        }
    }
}

impl Settings {
    /// Environment variable naming an optional settings file
    pub const ENV_VAR: &'static str = "TWIST_SAYS_SETTINGS";

    /// Parse settings from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        Ok(settings.sanitized())
    }

    /// Read settings from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load from the file named by [`Self::ENV_VAR`], falling back to defaults
    pub fn load() -> Self {
        let Some(path) = std::env::var_os(Self::ENV_VAR) else {
            log::info!("Using default settings");
            return Self::default();
        };

        match Self::from_file(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.to_string_lossy());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring settings file {}: {}", path.to_string_lossy(), e);
                Self::default()
            }
        }
    }

    /// Clamp values into usable ranges
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        self.brightness = self.brightness.clamp(0.0, 1.0);
        self.button_debounce = usable_or(self.button_debounce, 0.0, defaults.button_debounce);
        self.turn_debounce = usable_or(self.turn_debounce, 0.0, defaults.turn_debounce);
        self.accel_threshold = usable_or(
            self.accel_threshold.into(),
            f64::MIN_POSITIVE,
            defaults.accel_threshold.into(),
        ) as f32;
        self.loop_delay = usable_or(self.loop_delay, f64::MIN_POSITIVE, defaults.loop_delay);
        self.win_color_interval = usable_or(self.win_color_interval, f64::MIN_POSITIVE, defaults.win_color_interval);
        self
    }
}

/// `value` if finite and at least `min`, else `fallback` (NaN included)
fn usable_or(value: f64, min: f64, fallback: f64) -> f64 {
    if value.is_finite() && value >= min { value } else { fallback }
}
