//! Locomotion Driver
//!
//! Planar movement relative to the body's facing. Runs once per fixed physics
//! step and assigns velocity directly: there is no acceleration ramp and no
//! air-control distinction.
//!
//! # Velocity Model
//!
//! - Horizontal: `(right * input.x + forward * input.y) * move_speed`
//! - Vertical: whatever the body already had (gravity and jumps own that axis)

use glam::{Vec2, Vec3};

use super::BodyTransform;
use crate::physics::RigidBody;

/// Stateless planar movement step. Everything it needs is read from the body each call.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocomotionDriver;

impl LocomotionDriver {
    /// Horizontal velocity for a move input in the body's current basis.
    ///
    /// The body's forward and right vectors are flattened onto the ground plane
    /// so a tilted body never bleeds move input into the vertical axis.
    pub fn horizontal_velocity(move_input: Vec2, move_speed: f32, transform: &BodyTransform) -> Vec3 {
        let forward = flatten(transform.forward());
        let right = flatten(transform.right());
        (right * move_input.x + forward * move_input.y) * move_speed
    }

    /// Write the move velocity onto `body`, keeping its vertical component.
    ///
    /// # Returns
    /// The velocity written to the body.
    pub fn apply(
        move_input: Vec2,
        move_speed: f32,
        transform: &BodyTransform,
        body: &mut impl RigidBody,
    ) -> Vec3 {
        let move_input = if move_input.is_finite() { move_input } else { Vec2::ZERO };
        let horizontal = Self::horizontal_velocity(move_input, move_speed, transform);
        let current = body.linear_velocity();

        let velocity = Vec3::new(horizontal.x, current.y, horizontal.z);
        body.set_linear_velocity(velocity);
        velocity
    }
}

fn flatten(v: Vec3) -> Vec3 {
    Vec3::new(v.x, 0.0, v.z).normalize_or_zero()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::SimpleRigidBody;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn test_forward_keeps_vertical() {
        let transform = BodyTransform::default();
        let mut body = SimpleRigidBody::with_velocity(Vec3::new(0.0, -9.8, 0.0));

        let velocity = LocomotionDriver::apply(Vec2::new(0.0, 1.0), 5.0, &transform, &mut body);
        assert!(approx(velocity, Vec3::new(0.0, -9.8, 5.0)));
        assert_eq!(body.linear_velocity(), velocity);
    }

    #[test]
    fn test_strafe_uses_body_right() {
        let mut transform = BodyTransform::default();
        transform.rotate_yaw_degrees(90.0);
        let mut body = SimpleRigidBody::new();

        // Facing +X, so right is -Z
        let velocity = LocomotionDriver::apply(Vec2::new(1.0, 0.0), 2.0, &transform, &mut body);
        assert!(approx(velocity, Vec3::new(0.0, 0.0, -2.0)), "got {velocity:?}");
    }

    #[test]
    fn test_zero_input_stops_horizontal() {
        let transform = BodyTransform::default();
        let mut body = SimpleRigidBody::with_velocity(Vec3::new(3.0, 1.5, -2.0));

        let velocity = LocomotionDriver::apply(Vec2::ZERO, 5.0, &transform, &mut body);
        assert_eq!(velocity, Vec3::new(0.0, 1.5, 0.0));
    }

    #[test]
    fn test_diagonal_not_normalized() {
        let transform = BodyTransform::default();
        let mut body = SimpleRigidBody::new();

        let velocity = LocomotionDriver::apply(Vec2::new(1.0, 1.0), 5.0, &transform, &mut body);
        assert!(approx(velocity, Vec3::new(5.0, 0.0, 5.0)));
    }

    #[test]
    fn test_repeated_apply_is_idempotent() {
        let transform = BodyTransform::default();
        let mut body = SimpleRigidBody::with_velocity(Vec3::new(0.0, -2.0, 0.0));

        let first = LocomotionDriver::apply(Vec2::new(-0.5, 0.25), 4.0, &transform, &mut body);
        let second = LocomotionDriver::apply(Vec2::new(-0.5, 0.25), 4.0, &transform, &mut body);
        assert_eq!(first, second);
    }

    #[test]
    fn test_non_finite_input_treated_as_zero() {
        let transform = BodyTransform::default();
        let mut body = SimpleRigidBody::with_velocity(Vec3::new(1.0, 2.0, 3.0));

        let velocity = LocomotionDriver::apply(Vec2::new(f32::NAN, 1.0), 5.0, &transform, &mut body);
        assert_eq!(velocity, Vec3::new(0.0, 2.0, 0.0));
    }
}
