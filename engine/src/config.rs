//! Controller Configuration
//!
//! Tuning surface for the first-person controller. Everything here is plain data:
//! hosts build it in code, or load it from a JSON file next to their other settings.
//!
//! # Example
//!
//! ```rust,ignore
//! use fps_motion_engine::config::{ControllerConfig, PitchMode};
//!
//! let config = ControllerConfig {
//!     move_speed: 6.5,
//!     pitch_mode: PitchMode::Direct,
//!     ..Default::default()
//! };
//! config.validate()?;
//!
//! let from_disk = ControllerConfig::load("settings/controller.json")?;
//! ```

use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{ControllerError, Result};

/// Default movement speed in units per second.
pub const DEFAULT_MOVE_SPEED: f32 = 5.0;
/// Default jump velocity change in units per second.
pub const DEFAULT_JUMP_FORCE: f32 = 5.0;
/// Default look sensitivity (degrees per device unit).
pub const DEFAULT_MOUSE_SENSITIVITY: f32 = 1.0;
/// Default upper view limit in degrees (negative pitch looks up).
pub const DEFAULT_PITCH_MIN: f32 = -40.0;
/// Default lower view limit in degrees (positive pitch looks down).
pub const DEFAULT_PITCH_MAX: f32 = 85.0;
/// Default camera settle time in seconds for smoothed pitch.
pub const DEFAULT_CAMERA_SMOOTH_TIME: f32 = 0.3;

/// Inclusive pitch range in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PitchLimits {
    pub min: f32,
    pub max: f32,
}

impl Default for PitchLimits {
    fn default() -> Self {
        Self {
            min: DEFAULT_PITCH_MIN,
            max: DEFAULT_PITCH_MAX,
        }
    }
}

impl PitchLimits {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Clamp a pitch angle into the range. An inverted range collapses to `max`.
    #[inline]
    pub fn clamp(&self, pitch: f32) -> f32 {
        pitch.max(self.min).min(self.max)
    }

    #[inline]
    pub fn contains(&self, pitch: f32) -> bool {
        pitch >= self.min && pitch <= self.max
    }
}

/// How the applied camera pitch follows the clamped pitch target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum PitchMode {
    /// Applied pitch equals the clamped target every frame.
    Direct,
    /// Applied pitch approaches the target with a critically damped spring.
    Smoothed {
        /// Approximate time in seconds to settle on the target.
        smooth_time: f32,
    },
}

impl Default for PitchMode {
    fn default() -> Self {
        Self::Smoothed {
            smooth_time: DEFAULT_CAMERA_SMOOTH_TIME,
        }
    }
}

/// Tuning values for [`crate::player::FirstPersonController`].
///
/// `move_speed` is the only movement scale. Look sensitivity never feeds into
/// locomotion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Horizontal speed in units per second at full move input.
    pub move_speed: f32,
    /// Upward velocity change applied by a grounded jump.
    pub jump_force: f32,
    /// Look delta multiplier (degrees per device unit).
    pub mouse_sensitivity: f32,
    /// Pitch range in degrees.
    pub pitch_limits: PitchLimits,
    /// Direct or smoothed pitch application.
    pub pitch_mode: PitchMode,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            move_speed: DEFAULT_MOVE_SPEED,
            jump_force: DEFAULT_JUMP_FORCE,
            mouse_sensitivity: DEFAULT_MOUSE_SENSITIVITY,
            pitch_limits: PitchLimits::default(),
            pitch_mode: PitchMode::default(),
        }
    }
}

impl ControllerConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Same defaults, but with pitch applied directly (no smoothing).
    pub fn direct() -> Self {
        Self {
            pitch_mode: PitchMode::Direct,
            ..Default::default()
        }
    }

    /// Check every value is finite and in range.
    pub fn validate(&self) -> Result<()> {
        let scalars = [
            ("move_speed", self.move_speed),
            ("jump_force", self.jump_force),
            ("mouse_sensitivity", self.mouse_sensitivity),
        ];
        for (name, value) in scalars {
            if !value.is_finite() {
                return Err(ControllerError::InvalidConfig(format!(
                    "{name} must be finite, got {value}"
                )));
            }
            if value < 0.0 {
                return Err(ControllerError::InvalidConfig(format!(
                    "{name} must not be negative, got {value}"
                )));
            }
        }

        let PitchLimits { min, max } = self.pitch_limits;
        if !min.is_finite() || !max.is_finite() {
            return Err(ControllerError::InvalidConfig(format!(
                "pitch limits must be finite, got ({min}, {max})"
            )));
        }
        if min > max {
            return Err(ControllerError::InvalidConfig(format!(
                "pitch min {min} is greater than pitch max {max}"
            )));
        }

        if let PitchMode::Smoothed { smooth_time } = self.pitch_mode {
            if !smooth_time.is_finite() || smooth_time <= 0.0 {
                return Err(ControllerError::InvalidConfig(format!(
                    "smooth_time must be a positive number of seconds, got {smooth_time}"
                )));
            }
        }

        Ok(())
    }

    /// Parse and validate a JSON document. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ControllerError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&json)?;
        info!("loaded controller config from {}", path.display());
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tuning() {
        let config = ControllerConfig::default();
        assert_eq!(config.move_speed, 5.0);
        assert_eq!(config.jump_force, 5.0);
        assert_eq!(config.mouse_sensitivity, 1.0);
        assert_eq!(config.pitch_limits, PitchLimits::new(-40.0, 85.0));
        assert_eq!(config.pitch_mode, PitchMode::Smoothed { smooth_time: 0.3 });
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_direct_constructor() {
        let config = ControllerConfig::direct();
        assert_eq!(config.pitch_mode, PitchMode::Direct);
        assert_eq!(config.move_speed, DEFAULT_MOVE_SPEED);
    }

    #[test]
    fn test_pitch_limits_clamp() {
        let limits = PitchLimits::new(-40.0, 85.0);
        assert_eq!(limits.clamp(120.0), 85.0);
        assert_eq!(limits.clamp(-90.0), -40.0);
        assert_eq!(limits.clamp(10.0), 10.0);
        assert!(limits.contains(85.0));
        assert!(!limits.contains(85.1));
    }

    #[test]
    fn test_validate_rejects_inverted_limits() {
        let config = ControllerConfig {
            pitch_limits: PitchLimits::new(10.0, -10.0),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ControllerError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_rejects_zero_smooth_time() {
        let config = ControllerConfig {
            pitch_mode: PitchMode::Smoothed { smooth_time: 0.0 },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_negative_and_nan() {
        let negative = ControllerConfig {
            move_speed: -1.0,
            ..Default::default()
        };
        assert!(negative.validate().is_err());

        let nan = ControllerConfig {
            mouse_sensitivity: f32::NAN,
            ..Default::default()
        };
        assert!(nan.validate().is_err());
    }

    #[test]
    fn test_json_partial_document_uses_defaults() {
        let config = ControllerConfig::from_json_str(
            r#"{ "move_speed": 7.5, "pitch_mode": { "mode": "direct" } }"#,
        )
        .unwrap();
        assert_eq!(config.move_speed, 7.5);
        assert_eq!(config.jump_force, DEFAULT_JUMP_FORCE);
        assert_eq!(config.pitch_mode, PitchMode::Direct);
    }

    #[test]
    fn test_json_smoothed_mode() {
        let config = ControllerConfig::from_json_str(
            r#"{ "pitch_mode": { "mode": "smoothed", "smooth_time": 0.12 } }"#,
        )
        .unwrap();
        assert_eq!(config.pitch_mode, PitchMode::Smoothed { smooth_time: 0.12 });
    }

    #[test]
    fn test_json_invalid_values_rejected() {
        let result = ControllerConfig::from_json_str(
            r#"{ "pitch_limits": { "min": 50.0, "max": 10.0 } }"#,
        );
        assert!(matches!(result, Err(ControllerError::InvalidConfig(_))));

        let result = ControllerConfig::from_json_str("{ not json");
        assert!(matches!(result, Err(ControllerError::ConfigParse(_))));
    }

    #[test]
    fn test_json_output_parses_back() {
        let config = ControllerConfig {
            move_speed: 3.0,
            pitch_mode: PitchMode::Smoothed { smooth_time: 0.5 },
            ..Default::default()
        };
        let json = config.to_json_pretty().unwrap();
        assert_eq!(ControllerConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("controller.json");
        std::fs::write(&path, r#"{ "jump_force": 8.0 }"#).unwrap();

        let config = ControllerConfig::load(&path).unwrap();
        assert_eq!(config.jump_force, 8.0);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = ControllerConfig::load(dir.path().join("missing.json"));
        assert!(matches!(result, Err(ControllerError::ConfigIo { .. })));
    }
}
