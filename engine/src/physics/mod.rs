//! Physics collaborators
//!
//! The controller does not simulate anything. It reads and writes velocity on a
//! [`RigidBody`] and asks a [`SpatialProbe`] whether there is ground under the
//! feet. The host's physics backend implements both traits and owns gravity,
//! collision resolution and integration.
//!
//! [`SimpleRigidBody`] and [`StaticColliders`] are small reference
//! implementations used by the sandbox binary and the tests.
//!
//! # Unit System
//!
//! **1 unit = 1 meter**, velocities in m/s, `+Y` is up.

pub mod body;
pub mod collision;
pub mod types;

pub use body::{DEFAULT_FOOT_OFFSET, DEFAULT_GRAVITY, SimpleRigidBody};
pub use collision::{Aabb, StaticColliders, ray_aabb_intersect};
pub use types::{Quat, Vec2, Vec3};

/// A dynamic body whose linear velocity the controller drives.
pub trait RigidBody {
    /// Current linear velocity in world space.
    fn linear_velocity(&self) -> Vec3;

    /// Overwrite the linear velocity.
    fn set_linear_velocity(&mut self, velocity: Vec3);

    /// Instantaneous, mass-independent velocity change.
    fn add_velocity_change(&mut self, delta: Vec3) {
        let velocity = self.linear_velocity();
        self.set_linear_velocity(velocity + delta);
    }

    /// Stop the solver from rotating the body. Set once at activation.
    fn set_freeze_rotation(&mut self, frozen: bool);

    fn freeze_rotation(&self) -> bool;
}

/// Ray queries against the static world.
pub trait SpatialProbe {
    /// Distance to the first hit along `direction` within `max_distance`, if any.
    fn cast_ray(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<f32>;

    /// Whether anything is hit within `max_distance`.
    fn raycast(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> bool {
        self.cast_ray(origin, direction, max_distance).is_some()
    }
}
