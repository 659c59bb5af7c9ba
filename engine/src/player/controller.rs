//! First-Person Controller
//!
//! Owns the look state and configuration and drives the three per-tick steps
//! against borrowed collaborators:
//!
//! - [`FirstPersonController::frame_update`] once per visual frame: look, then
//!   the jump check on a rising jump edge.
//! - [`FirstPersonController::fixed_update`] once per fixed physics step:
//!   locomotion.
//!
//! The two cadences may interleave in any order but never run concurrently.
//! The host's physics backend resolves the body between fixed steps; the next
//! fixed step reads whatever vertical velocity it left behind.
//!
//! # Lifecycle
//!
//! ```rust,ignore
//! let mut controller = FirstPersonController::new(ControllerConfig::default())?;
//! controller.activate(&mut input, &mut body)?;
//!
//! // Run loop
//! for _ in 0..timestep.advance(frame_dt) {
//!     controller.fixed_update(&input, &transform, &mut body)?;
//!     body.step(&mut transform, timestep.step(), &world);
//! }
//! controller.frame_update(frame_dt, &input, &mut transform, &mut camera, &mut body, &world)?;
//! input.end_frame();
//!
//! controller.deactivate(&mut input);
//! ```

use glam::Vec3;
use log::{error, info};
use static_assertions::assert_impl_all;

use super::jump::{JumpOutcome, JumpTrigger};
use super::locomotion::LocomotionDriver;
use super::BodyTransform;
use crate::camera::{CameraNode, LookDriver};
use crate::config::ControllerConfig;
use crate::error::{ControllerError, Result};
use crate::input::{InputAction, InputProvider};
use crate::physics::{RigidBody, SpatialProbe};

/// What a visual frame update did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    /// Pitch written to the camera, in degrees
    pub pitch: f32,
    /// Jump attempt result, `None` if jump was not pressed this frame
    pub jump: Option<JumpOutcome>,
}

impl FrameReport {
    pub fn jumped(&self) -> bool {
        self.jump == Some(JumpOutcome::Jumped)
    }
}

#[derive(Debug, Clone)]
pub struct FirstPersonController {
    config: ControllerConfig,
    look: LookDriver,
    active: bool,
}

assert_impl_all!(FirstPersonController: Send, Sync, Clone);

impl FirstPersonController {
    /// Create an inactive controller. Fails if `config` does not validate.
    pub fn new(config: ControllerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            look: LookDriver::new(),
            active: false,
        })
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Swap the configuration at runtime. The current pitch is kept and
    /// re-clamped on the next look update.
    pub fn set_config(&mut self, config: ControllerConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    pub fn look(&self) -> &LookDriver {
        &self.look
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Bind to the input provider and body.
    ///
    /// Every required action must be wired, otherwise this fails and the
    /// controller stays inactive. On success the provider is enabled and the
    /// body's rotation is frozen.
    pub fn activate(&mut self, input: &mut impl InputProvider, body: &mut impl RigidBody) -> Result<()> {
        if let Some(missing) = InputAction::REQUIRED
            .into_iter()
            .find(|action| !input.has_action(*action))
        {
            error!("controller activation failed: input action {missing:?} is not wired");
            return Err(ControllerError::MissingAction(missing));
        }

        input.enable();
        body.set_freeze_rotation(true);
        self.active = true;

        info!(
            "controller active: move_speed={} jump_force={} sensitivity={} pitch=[{}, {}] mode={:?}",
            self.config.move_speed,
            self.config.jump_force,
            self.config.mouse_sensitivity,
            self.config.pitch_limits.min,
            self.config.pitch_limits.max,
            self.config.pitch_mode,
        );
        Ok(())
    }

    /// Stop reading input. Safe to call on an inactive controller.
    pub fn deactivate(&mut self, input: &mut impl InputProvider) {
        input.disable();
        if self.active {
            info!("controller deactivated");
        }
        self.active = false;
    }

    /// Visual-frame step: apply look input, then attempt a jump on a rising edge.
    pub fn frame_update(
        &mut self,
        dt: f32,
        input: &impl InputProvider,
        transform: &mut BodyTransform,
        camera: &mut impl CameraNode,
        body: &mut impl RigidBody,
        probe: &impl SpatialProbe,
    ) -> Result<FrameReport> {
        self.ensure_active()?;

        let look_delta = input.read_axis_2d(InputAction::Look);
        let pitch = self.look.update(look_delta, dt, &self.config, transform, camera);

        let jump = input.was_pressed_this_tick(InputAction::Jump).then(|| {
            JumpTrigger::try_jump(transform.position, probe, body, self.config.jump_force)
        });

        Ok(FrameReport { pitch, jump })
    }

    /// Fixed physics step: write the move velocity, keeping vertical velocity.
    ///
    /// # Returns
    /// The velocity written to the body.
    pub fn fixed_update(
        &mut self,
        input: &impl InputProvider,
        transform: &BodyTransform,
        body: &mut impl RigidBody,
    ) -> Result<Vec3> {
        self.ensure_active()?;

        let move_input = input.read_axis_2d(InputAction::Move);
        Ok(LocomotionDriver::apply(move_input, self.config.move_speed, transform, body))
    }

    /// Level the camera and write the result to it.
    pub fn reset_look(&mut self, camera: &mut impl CameraNode) {
        let level = self.config.pitch_limits.clamp(0.0);
        self.look.reset(level);
        camera.set_local_orientation(level);
    }

    fn ensure_active(&self) -> Result<()> {
        if self.active { Ok(()) } else { Err(ControllerError::NotActive) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::PitchCamera;
    use crate::input::{ActionInput, KeyCode};
    use crate::physics::{SimpleRigidBody, StaticColliders};

    fn active_controller() -> (FirstPersonController, ActionInput, SimpleRigidBody) {
        let mut controller = FirstPersonController::new(ControllerConfig::direct()).unwrap();
        let mut input = ActionInput::new();
        let mut body = SimpleRigidBody::new();
        controller.activate(&mut input, &mut body).unwrap();
        (controller, input, body)
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = ControllerConfig {
            move_speed: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            FirstPersonController::new(config),
            Err(ControllerError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_activate_enables_and_freezes() {
        let (controller, input, body) = active_controller();
        assert!(controller.is_active());
        assert!(input.is_enabled());
        assert!(body.freeze_rotation());
    }

    #[test]
    fn test_activate_fails_on_missing_action() {
        let mut controller = FirstPersonController::new(ControllerConfig::default()).unwrap();
        let mut input = ActionInput::new();
        input.remove_action(InputAction::Look);
        let mut body = SimpleRigidBody::new();

        let result = controller.activate(&mut input, &mut body);
        assert!(matches!(result, Err(ControllerError::MissingAction(InputAction::Look))));
        assert!(!controller.is_active());
        assert!(!input.is_enabled());
        assert!(!body.freeze_rotation());
    }

    #[test]
    fn test_updates_require_activation() {
        let mut controller = FirstPersonController::new(ControllerConfig::default()).unwrap();
        let input = ActionInput::new();
        let mut transform = BodyTransform::default();
        let mut camera = PitchCamera::new();
        let mut body = SimpleRigidBody::new();
        let world = StaticColliders::with_ground(0.0);

        assert!(matches!(
            controller.fixed_update(&input, &transform, &mut body),
            Err(ControllerError::NotActive)
        ));
        assert!(matches!(
            controller.frame_update(0.016, &input, &mut transform, &mut camera, &mut body, &world),
            Err(ControllerError::NotActive)
        ));
    }

    #[test]
    fn test_deactivate_disables_input() {
        let (mut controller, mut input, mut body) = active_controller();
        controller.deactivate(&mut input);
        assert!(!controller.is_active());
        assert!(!input.is_enabled());
        assert!(controller.fixed_update(&input, &BodyTransform::default(), &mut body).is_err());
    }

    #[test]
    fn test_frame_update_reports_jump() {
        let (mut controller, mut input, mut body) = active_controller();
        let mut transform = BodyTransform::new(Vec3::new(0.0, 1.0, 0.0));
        let mut camera = PitchCamera::new();
        let world = StaticColliders::with_ground(0.0);

        let report = controller
            .frame_update(0.016, &input, &mut transform, &mut camera, &mut body, &world)
            .unwrap();
        assert_eq!(report.jump, None);

        input.handle_key(KeyCode::Space, true);
        let report = controller
            .frame_update(0.016, &input, &mut transform, &mut camera, &mut body, &world)
            .unwrap();
        assert!(report.jumped());
        assert_eq!(body.linear_velocity().y, ControllerConfig::default().jump_force);
    }

    #[test]
    fn test_reset_look_levels_camera() {
        let (mut controller, mut input, mut body) = active_controller();
        let mut transform = BodyTransform::default();
        let mut camera = PitchCamera::new();
        let world = StaticColliders::new();

        input.handle_mouse_motion(0.0, 30.0);
        controller
            .frame_update(0.016, &input, &mut transform, &mut camera, &mut body, &world)
            .unwrap();
        assert_eq!(camera.pitch_degrees, 30.0);

        controller.reset_look(&mut camera);
        assert_eq!(camera.pitch_degrees, 0.0);
        assert_eq!(controller.look().target_pitch(), 0.0);
    }
}
