//! Reference rigid body
//!
//! Minimal dynamic body for the sandbox and tests: gravity on the vertical
//! axis, free horizontal motion, and a landing clamp against a [`SpatialProbe`].
//! There is no horizontal collision or angular motion.
//!
//! # Physics Model
//!
//! - Gravity: 9.81 m/s^2 downward
//! - Midpoint integration on the vertical axis
//! - Body origin sits `foot_offset` above the feet (1.0 m, so the controller's
//!   1.1 m ground probe reaches 0.1 m below the soles)

use glam::Vec3;

use super::{RigidBody, SpatialProbe};
use crate::player::BodyTransform;

/// Gravity acceleration in meters per second squared
pub const DEFAULT_GRAVITY: f32 = 9.81;

/// Distance from the body origin down to the feet in meters
pub const DEFAULT_FOOT_OFFSET: f32 = 1.0;

#[derive(Debug, Clone)]
pub struct SimpleRigidBody {
    velocity: Vec3,
    freeze_rotation: bool,
    /// Gravity acceleration in m/s^2 (positive = downward)
    pub gravity: f32,
    /// Origin-to-feet distance in meters
    pub foot_offset: f32,
}

impl Default for SimpleRigidBody {
    fn default() -> Self {
        Self {
            velocity: Vec3::ZERO,
            freeze_rotation: false,
            gravity: DEFAULT_GRAVITY,
            foot_offset: DEFAULT_FOOT_OFFSET,
        }
    }
}

impl SimpleRigidBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_velocity(velocity: Vec3) -> Self {
        Self {
            velocity,
            ..Default::default()
        }
    }

    /// Advance one physics step: apply gravity, move the transform, land on the floor.
    ///
    /// Returns `true` if the body is resting on something after the step.
    pub fn step(&mut self, transform: &mut BodyTransform, dt: f32, world: &impl SpatialProbe) -> bool {
        let dt = dt.clamp(0.0, 0.1);

        let prev_vertical = self.velocity.y;
        self.velocity.y -= self.gravity * dt;
        let avg_vertical = (prev_vertical + self.velocity.y) * 0.5;

        transform.position += Vec3::new(
            self.velocity.x * dt,
            avg_vertical * dt,
            self.velocity.z * dt,
        );

        if self.velocity.y > 0.0 {
            return false;
        }

        // Cast from head height so a floor the feet sank into is still found
        let head = transform.position + Vec3::Y * self.foot_offset;
        match world.cast_ray(head, Vec3::NEG_Y, self.foot_offset * 2.0) {
            Some(distance) => {
                let floor_y = head.y - distance;
                let feet_y = transform.position.y - self.foot_offset;
                if feet_y <= floor_y + 1e-4 {
                    transform.position.y = floor_y + self.foot_offset;
                    self.velocity.y = 0.0;
                    true
                } else {
                    false
                }
            }
            None => false,
        }
    }
}

impl RigidBody for SimpleRigidBody {
    fn linear_velocity(&self) -> Vec3 {
        self.velocity
    }

    fn set_linear_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    fn add_velocity_change(&mut self, delta: Vec3) {
        self.velocity += delta;
    }

    fn set_freeze_rotation(&mut self, frozen: bool) {
        self.freeze_rotation = frozen;
    }

    fn freeze_rotation(&self) -> bool {
        self.freeze_rotation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::StaticColliders;

    #[test]
    fn test_default_values() {
        let body = SimpleRigidBody::new();
        assert_eq!(body.linear_velocity(), Vec3::ZERO);
        assert!(!body.freeze_rotation());
        assert_eq!(body.gravity, DEFAULT_GRAVITY);
        assert_eq!(body.foot_offset, DEFAULT_FOOT_OFFSET);
    }

    #[test]
    fn test_resting_body_stays_on_ground() {
        let world = StaticColliders::with_ground(0.0);
        let mut body = SimpleRigidBody::new();
        let mut transform = BodyTransform::new(Vec3::new(0.0, 1.0, 0.0));

        for _ in 0..60 {
            assert!(body.step(&mut transform, 1.0 / 60.0, &world));
        }
        assert!((transform.position.y - 1.0).abs() < 1e-4);
        assert_eq!(body.linear_velocity().y, 0.0);
    }

    #[test]
    fn test_falls_without_ground() {
        let world = StaticColliders::new();
        let mut body = SimpleRigidBody::new();
        let mut transform = BodyTransform::new(Vec3::new(0.0, 10.0, 0.0));

        for _ in 0..30 {
            assert!(!body.step(&mut transform, 1.0 / 60.0, &world));
        }
        assert!(transform.position.y < 10.0);
        assert!(body.linear_velocity().y < 0.0);
    }

    #[test]
    fn test_jump_arc_lands() {
        let world = StaticColliders::with_ground(0.0);
        let mut body = SimpleRigidBody::new();
        let mut transform = BodyTransform::new(Vec3::new(0.0, 1.0, 0.0));
        body.add_velocity_change(Vec3::new(0.0, 5.0, 0.0));

        let mut peak: f32 = 1.0;
        let mut landed = false;
        for _ in 0..240 {
            landed = body.step(&mut transform, 1.0 / 60.0, &world);
            peak = peak.max(transform.position.y);
        }
        // v^2 / 2g = 25 / 19.62 ~= 1.27 m above the start
        assert!((peak - 2.27).abs() < 0.05, "peak was {peak}");
        assert!(landed);
        assert!((transform.position.y - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_horizontal_velocity_moves_transform() {
        let world = StaticColliders::with_ground(0.0);
        let mut body = SimpleRigidBody::with_velocity(Vec3::new(0.0, 0.0, 5.0));
        let mut transform = BodyTransform::new(Vec3::new(0.0, 1.0, 0.0));

        for _ in 0..60 {
            body.step(&mut transform, 1.0 / 60.0, &world);
        }
        assert!((transform.position.z - 5.0).abs() < 1e-3);
    }
}
