//! Input Module
//!
//! The controller never talks to a device. It reads two-axis values and
//! edge-triggered button presses through the [`InputProvider`] trait, so any
//! windowing layer or test harness can drive it.
//!
//! [`ActionInput`] is the stock provider: feed it key and mouse events (directly
//! or through the [`winit_bridge`]) and call [`ActionInput::end_frame`] once the
//! visual frame has been processed.
//!
//! # Example
//!
//! ```rust,ignore
//! use fps_motion_engine::input::{ActionInput, InputAction, InputProvider, KeyCode};
//!
//! let mut input = ActionInput::new();
//! input.enable();
//!
//! input.handle_key(KeyCode::W, true);
//! input.handle_mouse_motion(4.0, -2.0);
//!
//! let movement = input.read_axis_2d(InputAction::Move); // (0, 1)
//! let look = input.read_axis_2d(InputAction::Look); // (4, 2), y-up
//!
//! input.end_frame();
//! ```

pub mod action_state;
pub mod bindings;
pub mod keyboard;
pub mod mouse_state;
pub mod winit_bridge;

use glam::Vec2;

pub use action_state::ActionInput;
pub use bindings::{KeyAction, KeyBindings};
pub use keyboard::{KeyCode, MoveDirection, MoveKeys};
pub use mouse_state::FpsMouseState;

/// Logical actions the controller reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Planar move input, roughly `[-1, 1]` per axis. `x` = strafe right, `y` = forward.
    Move,
    /// Look delta in device units per frame. `x` = right, `y` = up.
    Look,
    /// Jump button.
    Jump,
    /// Debug reset button, only read by [`crate::player::DebugReset`].
    ResetPlayer,
}

impl InputAction {
    /// Actions the controller cannot run without.
    pub const REQUIRED: [InputAction; 3] = [InputAction::Move, InputAction::Look, InputAction::Jump];

    /// Whether the action produces a two-axis value (as opposed to a button).
    pub fn is_axis(self) -> bool {
        matches!(self, InputAction::Move | InputAction::Look)
    }
}

/// Source of controller input.
///
/// Axis reads are polled every call. Button presses are edge triggered: a
/// provider reports `true` for the evaluation window in which the press began
/// and `false` while the button stays held.
pub trait InputProvider {
    /// Whether the action is wired to this provider.
    fn has_action(&self, action: InputAction) -> bool;

    /// Current two-axis value of an axis action. Buttons and unknown actions read zero.
    fn read_axis_2d(&self, action: InputAction) -> Vec2;

    /// Whether a button action went down during the current tick.
    fn was_pressed_this_tick(&self, action: InputAction) -> bool;

    /// Start delivering input. Called from the controller's activation.
    fn enable(&mut self);

    /// Stop delivering input. Called from the controller's deactivation.
    fn disable(&mut self);

    fn is_enabled(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_actions() {
        assert!(InputAction::REQUIRED.contains(&InputAction::Move));
        assert!(InputAction::REQUIRED.contains(&InputAction::Look));
        assert!(InputAction::REQUIRED.contains(&InputAction::Jump));
        assert!(!InputAction::REQUIRED.contains(&InputAction::ResetPlayer));
    }

    #[test]
    fn test_axis_classification() {
        assert!(InputAction::Move.is_axis());
        assert!(InputAction::Look.is_axis());
        assert!(!InputAction::Jump.is_axis());
        assert!(!InputAction::ResetPlayer.is_axis());
    }
}
