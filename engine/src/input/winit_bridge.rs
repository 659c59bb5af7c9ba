//! winit Bridge
//!
//! Forwards winit keyboard and raw mouse events into an [`ActionInput`].
//! Use `DeviceEvent::MouseMotion` rather than cursor positions: with the cursor
//! locked, only raw motion keeps arriving.
//!
//! ```rust,ignore
//! fn device_event(&mut self, _: &ActiveEventLoop, _: DeviceId, event: DeviceEvent) {
//!     winit_bridge::handle_device_event(&mut self.input, &event);
//! }
//!
//! // In window_event:
//! WindowEvent::KeyboardInput { event, .. } => {
//!     winit_bridge::handle_key_input(&mut self.input, event.physical_key, event.state);
//! }
//! ```

use winit::event::{DeviceEvent, ElementState};
use winit::keyboard::{KeyCode as WinitKeyCode, PhysicalKey};

use super::{ActionInput, KeyCode};

impl From<WinitKeyCode> for KeyCode {
    fn from(code: WinitKeyCode) -> Self {
        match code {
            WinitKeyCode::KeyW => KeyCode::W,
            WinitKeyCode::KeyA => KeyCode::A,
            WinitKeyCode::KeyS => KeyCode::S,
            WinitKeyCode::KeyD => KeyCode::D,
            WinitKeyCode::Space => KeyCode::Space,
            WinitKeyCode::ShiftLeft => KeyCode::ShiftLeft,
            WinitKeyCode::ControlLeft => KeyCode::ControlLeft,
            WinitKeyCode::ArrowUp => KeyCode::ArrowUp,
            WinitKeyCode::ArrowDown => KeyCode::ArrowDown,
            WinitKeyCode::ArrowLeft => KeyCode::ArrowLeft,
            WinitKeyCode::ArrowRight => KeyCode::ArrowRight,
            WinitKeyCode::KeyR => KeyCode::R,
            WinitKeyCode::F5 => KeyCode::F5,
            WinitKeyCode::Escape => KeyCode::Escape,
            WinitKeyCode::Enter => KeyCode::Enter,
            _ => KeyCode::Unknown,
        }
    }
}

impl From<PhysicalKey> for KeyCode {
    fn from(key: PhysicalKey) -> Self {
        match key {
            PhysicalKey::Code(code) => code.into(),
            PhysicalKey::Unidentified(_) => KeyCode::Unknown,
        }
    }
}

/// Forward a physical key event. Returns `true` if the key is bound.
pub fn handle_key_input(input: &mut ActionInput, key: PhysicalKey, state: ElementState) -> bool {
    let key = KeyCode::from(key);
    if key == KeyCode::Unknown {
        return false;
    }
    input.handle_key(key, state.is_pressed())
}

/// Forward raw mouse motion. Other device events are ignored.
pub fn handle_device_event(input: &mut ActionInput, event: &DeviceEvent) {
    if let DeviceEvent::MouseMotion { delta } = event {
        input.handle_mouse_motion(delta.0 as f32, delta.1 as f32);
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::input::{InputAction, InputProvider};

    #[test]
    fn test_key_code_conversion() {
        assert_eq!(KeyCode::from(WinitKeyCode::KeyW), KeyCode::W);
        assert_eq!(KeyCode::from(WinitKeyCode::Space), KeyCode::Space);
        assert_eq!(KeyCode::from(WinitKeyCode::KeyR), KeyCode::R);
        assert_eq!(KeyCode::from(WinitKeyCode::KeyZ), KeyCode::Unknown);
        assert_eq!(KeyCode::from(PhysicalKey::Code(WinitKeyCode::KeyD)), KeyCode::D);
    }

    #[test]
    fn test_key_input_reaches_provider() {
        let mut input = ActionInput::new();
        input.enable();

        assert!(handle_key_input(
            &mut input,
            PhysicalKey::Code(WinitKeyCode::KeyW),
            ElementState::Pressed
        ));
        assert_eq!(input.read_axis_2d(InputAction::Move), Vec2::new(0.0, 1.0));

        handle_key_input(
            &mut input,
            PhysicalKey::Code(WinitKeyCode::Space),
            ElementState::Pressed,
        );
        assert!(input.was_pressed_this_tick(InputAction::Jump));

        assert!(!handle_key_input(
            &mut input,
            PhysicalKey::Code(WinitKeyCode::KeyZ),
            ElementState::Pressed
        ));
    }

    #[test]
    fn test_mouse_motion_is_y_up() {
        let mut input = ActionInput::new();
        input.enable();

        // winit reports pointer moving down as positive dy
        handle_device_event(&mut input, &DeviceEvent::MouseMotion { delta: (3.0, 4.0) });
        assert_eq!(input.read_axis_2d(InputAction::Look), Vec2::new(3.0, -4.0));
    }
}
