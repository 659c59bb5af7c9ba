//! Debug reset
//!
//! Optional collaborator that snaps the body back to where it spawned when the
//! `ResetPlayer` action is pressed. The controller never calls it; the host
//! drives it alongside the frame update.

use glam::Vec3;
use log::debug;

use super::BodyTransform;
use crate::input::{InputAction, InputProvider};
use crate::physics::RigidBody;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebugReset {
    spawn: BodyTransform,
}

impl DebugReset {
    /// Remember the current pose as the spawn point.
    pub fn capture(transform: &BodyTransform) -> Self {
        Self { spawn: *transform }
    }

    pub fn spawn(&self) -> &BodyTransform {
        &self.spawn
    }

    /// Restore the spawn pose and stop the body.
    pub fn apply(&self, transform: &mut BodyTransform, body: &mut impl RigidBody) {
        *transform = self.spawn;
        body.set_linear_velocity(Vec3::ZERO);
        debug!("reset: body returned to {}", self.spawn.position);
    }

    /// Reset if `ResetPlayer` went down this tick. Returns whether it did.
    pub fn update(
        &self,
        input: &impl InputProvider,
        transform: &mut BodyTransform,
        body: &mut impl RigidBody,
    ) -> bool {
        if !input.was_pressed_this_tick(InputAction::ResetPlayer) {
            return false;
        }
        self.apply(transform, body);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{ActionInput, KeyCode};
    use crate::physics::SimpleRigidBody;

    #[test]
    fn test_reset_on_press_only() {
        let spawn = BodyTransform::new(Vec3::new(2.0, 1.0, -3.0));
        let reset = DebugReset::capture(&spawn);

        let mut transform = spawn;
        transform.position = Vec3::new(40.0, 5.0, 12.0);
        transform.rotate_yaw_degrees(135.0);
        let mut body = SimpleRigidBody::with_velocity(Vec3::new(1.0, -4.0, 2.0));

        let mut input = ActionInput::new();
        input.enable();
        assert!(!reset.update(&input, &mut transform, &mut body));
        assert_eq!(transform.position, Vec3::new(40.0, 5.0, 12.0));

        input.handle_key(KeyCode::R, true);
        assert!(reset.update(&input, &mut transform, &mut body));
        assert_eq!(transform, spawn);
        assert_eq!(body.linear_velocity(), Vec3::ZERO);

        // Still held next frame: no second reset
        input.end_frame();
        transform.position.x = 9.0;
        assert!(!reset.update(&input, &mut transform, &mut body));
        assert_eq!(transform.position.x, 9.0);
    }
}
