//! Jump Trigger
//!
//! On a rising jump edge, probe straight down from the body origin. If anything
//! is hit within [`GROUND_PROBE_DISTANCE`], add `jump_force` to the vertical
//! velocity. Ground state is recomputed on every attempt and never cached.

use glam::Vec3;
use log::debug;

use crate::physics::{RigidBody, SpatialProbe};

/// Length of the downward ground probe from the body origin, in meters
pub const GROUND_PROBE_DISTANCE: f32 = 1.1;

/// Ground contact as seen by a single probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroundState {
    Grounded,
    Airborne,
}

impl GroundState {
    /// Probe down from `origin` and classify the result.
    pub fn probe(origin: Vec3, probe: &impl SpatialProbe) -> Self {
        if probe.raycast(origin, Vec3::NEG_Y, GROUND_PROBE_DISTANCE) {
            GroundState::Grounded
        } else {
            GroundState::Airborne
        }
    }

    pub fn is_grounded(self) -> bool {
        self == GroundState::Grounded
    }
}

/// Result of a jump attempt. `Airborne` is a normal no-op, not a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpOutcome {
    Jumped,
    Airborne,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JumpTrigger;

impl JumpTrigger {
    /// Probe for ground under `origin` and jump if there is any.
    ///
    /// The velocity change is added to the current vertical velocity, so a
    /// jump while already moving up or down stacks with that motion.
    pub fn try_jump(
        origin: Vec3,
        probe: &impl SpatialProbe,
        body: &mut impl RigidBody,
        jump_force: f32,
    ) -> JumpOutcome {
        match GroundState::probe(origin, probe) {
            GroundState::Grounded => {
                body.add_velocity_change(Vec3::Y * jump_force);
                debug!("jump: grounded at {origin}, added {jump_force} m/s");
                JumpOutcome::Jumped
            }
            GroundState::Airborne => {
                debug!("jump: no ground within {GROUND_PROBE_DISTANCE} m of {origin}");
                JumpOutcome::Airborne
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::{SimpleRigidBody, StaticColliders};

    #[test]
    fn test_jump_from_ground_adds_force() {
        let world = StaticColliders::with_ground(0.0);
        let mut body = SimpleRigidBody::new();

        let outcome = JumpTrigger::try_jump(Vec3::new(0.0, 1.0, 0.0), &world, &mut body, 5.0);
        assert_eq!(outcome, JumpOutcome::Jumped);
        assert_eq!(body.linear_velocity(), Vec3::new(0.0, 5.0, 0.0));
    }

    #[test]
    fn test_jump_stacks_with_vertical_velocity() {
        let world = StaticColliders::with_ground(0.0);
        let mut body = SimpleRigidBody::with_velocity(Vec3::new(1.0, 2.0, 0.0));

        JumpTrigger::try_jump(Vec3::new(0.0, 1.0, 0.0), &world, &mut body, 5.0);
        assert_eq!(body.linear_velocity(), Vec3::new(1.0, 7.0, 0.0));
    }

    #[test]
    fn test_probe_miss_leaves_velocity() {
        let world = StaticColliders::with_ground(0.0);
        let mut body = SimpleRigidBody::with_velocity(Vec3::new(0.0, -3.0, 0.0));

        // 1.2 m above the ground, just out of probe range
        let outcome = JumpTrigger::try_jump(Vec3::new(0.0, 1.2, 0.0), &world, &mut body, 5.0);
        assert_eq!(outcome, JumpOutcome::Airborne);
        assert_eq!(body.linear_velocity(), Vec3::new(0.0, -3.0, 0.0));
    }

    #[test]
    fn test_ground_state_probe() {
        let world = StaticColliders::with_ground(0.0);
        assert!(GroundState::probe(Vec3::new(0.0, 1.05, 0.0), &world).is_grounded());
        assert_eq!(GroundState::probe(Vec3::new(0.0, 3.0, 0.0), &world), GroundState::Airborne);
        assert_eq!(GroundState::probe(Vec3::ZERO, &StaticColliders::new()), GroundState::Airborne);
    }
}
