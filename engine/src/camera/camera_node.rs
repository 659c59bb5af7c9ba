//! Camera node
//!
//! The eye camera is a child of the character body. The controller only ever
//! writes a pure pitch rotation into its local orientation; yaw comes from the
//! parent body.

use glam::{Quat, Vec3};

use crate::player::BodyTransform;

/// Default eye height above the body origin in meters
pub const DEFAULT_EYE_HEIGHT: f32 = 0.6;

/// A camera attached under the body whose local orientation the controller sets.
pub trait CameraNode {
    /// Set the local orientation to a rotation of `pitch_degrees` about local X.
    fn set_local_orientation(&mut self, pitch_degrees: f32);
}

/// Child camera storing its local pitch and offset from the body origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PitchCamera {
    /// Local rotation relative to the body
    pub local_rotation: Quat,
    /// Last pitch written, in degrees (positive looks down)
    pub pitch_degrees: f32,
    /// Eye position relative to the body origin, in body space
    pub local_offset: Vec3,
}

impl Default for PitchCamera {
    fn default() -> Self {
        Self {
            local_rotation: Quat::IDENTITY,
            pitch_degrees: 0.0,
            local_offset: Vec3::new(0.0, DEFAULT_EYE_HEIGHT, 0.0),
        }
    }
}

impl PitchCamera {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_offset(local_offset: Vec3) -> Self {
        Self {
            local_offset,
            ..Default::default()
        }
    }

    /// View direction in body space.
    #[inline]
    pub fn local_forward(&self) -> Vec3 {
        self.local_rotation * Vec3::Z
    }

    /// World-space rotation given the parent body.
    pub fn world_rotation(&self, body: &BodyTransform) -> Quat {
        body.rotation * self.local_rotation
    }

    /// World-space view direction given the parent body.
    pub fn world_forward(&self, body: &BodyTransform) -> Vec3 {
        self.world_rotation(body) * Vec3::Z
    }

    /// World-space eye position given the parent body.
    pub fn world_position(&self, body: &BodyTransform) -> Vec3 {
        body.position + body.rotation * self.local_offset
    }
}

impl CameraNode for PitchCamera {
    fn set_local_orientation(&mut self, pitch_degrees: f32) {
        self.pitch_degrees = pitch_degrees;
        self.local_rotation = Quat::from_rotation_x(pitch_degrees.to_radians());
    }
}
