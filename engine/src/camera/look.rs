//! Look Driver
//!
//! Turns a per-frame look delta into body yaw and camera pitch.
//!
//! - Yaw goes straight onto the body transform every call, unsmoothed. Nothing
//!   is accumulated here; the transform's rotation is the yaw state.
//! - Pitch accumulates into a target clamped to the configured limits, then is
//!   applied to the camera's local orientation either directly or through a
//!   critically damped spring.
//! - Pitch is never written to the body, so it cannot affect movement direction.
//!
//! # Usage
//! ```rust,ignore
//! let mut look = LookDriver::new();
//!
//! // Once per visual frame
//! let pitch = look.update(input.read_axis_2d(InputAction::Look), dt, &config, &mut transform, &mut camera);
//! ```

use glam::Vec2;
use log::trace;

use super::CameraNode;
use super::smoothing::smooth_damp;
use crate::config::{ControllerConfig, PitchMode};
use crate::player::BodyTransform;

/// Pitch state for the look driver. Angles in degrees, positive looks down.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LookDriver {
    /// Accumulated, clamped pitch the camera is heading toward
    target_pitch: f32,
    /// Pitch last written to the camera
    pitch: f32,
    /// Damper rate state in degrees per second (smoothed mode only)
    pitch_velocity: f32,
}

impl LookDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with the camera already at `pitch` (target, applied value and rate reset).
    pub fn with_pitch(pitch: f32) -> Self {
        Self {
            target_pitch: pitch,
            pitch,
            pitch_velocity: 0.0,
        }
    }

    #[inline]
    pub fn target_pitch(&self) -> f32 {
        self.target_pitch
    }

    #[inline]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    #[inline]
    pub fn pitch_velocity(&self) -> f32 {
        self.pitch_velocity
    }

    /// Snap target and applied pitch to `pitch` and stop any damping motion.
    pub fn reset(&mut self, pitch: f32) {
        *self = Self::with_pitch(pitch);
    }

    /// Apply one frame of look input.
    ///
    /// # Arguments
    /// * `raw_delta` - Look delta in device units, `y` up
    /// * `dt` - Visual frame time in seconds (drives smoothing only)
    ///
    /// # Returns
    /// The pitch written to the camera, in degrees.
    pub fn update(
        &mut self,
        raw_delta: Vec2,
        dt: f32,
        config: &ControllerConfig,
        transform: &mut BodyTransform,
        camera: &mut impl CameraNode,
    ) -> f32 {
        let delta = if raw_delta.is_finite() {
            raw_delta * config.mouse_sensitivity
        } else {
            Vec2::ZERO
        };

        if delta.x != 0.0 {
            transform.rotate_yaw_degrees(delta.x);
        }

        // Look up (positive y) means a smaller pitch
        let limits = config.pitch_limits;
        self.target_pitch = limits.clamp(self.target_pitch - delta.y);

        self.pitch = match config.pitch_mode {
            PitchMode::Direct => {
                self.pitch_velocity = 0.0;
                self.target_pitch
            }
            PitchMode::Smoothed { smooth_time } => {
                // Pitch never wraps, so damp linearly rather than the short way round
                let damped = smooth_damp(
                    self.pitch,
                    self.target_pitch,
                    &mut self.pitch_velocity,
                    smooth_time,
                    f32::INFINITY,
                    dt,
                );
                let clamped = limits.clamp(damped);
                if clamped != damped {
                    self.pitch_velocity = 0.0;
                }
                clamped
            }
        };

        camera.set_local_orientation(self.pitch);
        trace!(
            "look: yaw_delta={:.3} target_pitch={:.3} pitch={:.3}",
            delta.x, self.target_pitch, self.pitch
        );

        self.pitch
    }
}
