//! Body transform
//!
//! World-space pose of the character body. The host's scene owns it; the
//! controller borrows it for a tick to apply yaw and read the movement basis.
//!
//! # Coordinate System
//! - +X = right, +Y = up, +Z = forward at identity rotation
//! - Positive yaw turns forward toward +X

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyTransform {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Default for BodyTransform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

impl BodyTransform {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    pub fn with_rotation(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// Rotate about world up by `degrees`. Unbounded; wraps through the quaternion.
    pub fn rotate_yaw_degrees(&mut self, degrees: f32) {
        self.rotation = (Quat::from_rotation_y(degrees.to_radians()) * self.rotation).normalize();
    }

    /// Body forward in world space.
    #[inline]
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }

    /// Body right in world space.
    #[inline]
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    #[inline]
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// Heading in degrees in `(-180, 180]`, derived from the forward vector.
    pub fn yaw_degrees(&self) -> f32 {
        let forward = self.forward();
        forward.x.atan2(forward.z).to_degrees()
    }
}
