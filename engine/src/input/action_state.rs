//! Action Input
//!
//! Concrete [`InputProvider`] fed by key, button, mouse and stick events.
//!
//! Per-frame bookkeeping:
//! - Key and button events update the held set immediately. A button that goes
//!   from released to held records a rising edge for the current tick.
//! - [`ActionInput::end_frame`] clears the rising edges and consumes the
//!   accumulated look delta. Call it once after the visual frame update.
//! - A disabled provider ignores events, reads zero axes and reports no presses.

use std::collections::HashSet;

use glam::Vec2;

use super::{FpsMouseState, InputAction, InputProvider, KeyBindings, KeyCode, MoveKeys};

/// Stock input provider with keyboard, mouse and analog stick sources.
#[derive(Debug, Clone)]
pub struct ActionInput {
    bindings: KeyBindings,
    /// Actions wired to this provider.
    actions: HashSet<InputAction>,
    enabled: bool,

    held_keys: HashSet<KeyCode>,
    move_keys: MoveKeys,
    /// Stick value for `Move`, combined with the keys.
    analog_move: Vec2,
    /// Stick value for `Look`, added to the mouse delta each frame.
    analog_look: Vec2,
    mouse: FpsMouseState,

    held_buttons: HashSet<InputAction>,
    pressed_this_tick: HashSet<InputAction>,
}

impl Default for ActionInput {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionInput {
    /// Provider with default key bindings and all four actions wired. Starts disabled.
    pub fn new() -> Self {
        Self::with_bindings(KeyBindings::new())
    }

    pub fn with_bindings(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            actions: [
                InputAction::Move,
                InputAction::Look,
                InputAction::Jump,
                InputAction::ResetPlayer,
            ]
            .into_iter()
            .collect(),
            enabled: false,
            held_keys: HashSet::new(),
            move_keys: MoveKeys::new(),
            analog_move: Vec2::ZERO,
            analog_look: Vec2::ZERO,
            mouse: FpsMouseState::new(),
            held_buttons: HashSet::new(),
            pressed_this_tick: HashSet::new(),
        }
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    pub fn bindings_mut(&mut self) -> &mut KeyBindings {
        &mut self.bindings
    }

    /// Wire an action to this provider.
    pub fn register_action(&mut self, action: InputAction) {
        self.actions.insert(action);
    }

    /// Unwire an action. It then reads as zero / never pressed.
    pub fn remove_action(&mut self, action: InputAction) {
        self.actions.remove(&action);
        self.held_buttons.remove(&action);
        self.pressed_this_tick.remove(&action);
    }

    /// Handle a key press or release. Returns `true` if the key is bound.
    ///
    /// Repeated press events for a key that is already held (OS key repeat)
    /// do not produce a new rising edge.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        if !self.enabled {
            return false;
        }
        let Some(key_action) = self.bindings.get_action(key) else {
            return false;
        };

        let newly_down = if pressed {
            self.held_keys.insert(key)
        } else {
            self.held_keys.remove(&key);
            false
        };

        match key_action.move_direction() {
            Some(direction) => self.move_keys.set(direction, pressed),
            None => {
                let action = key_action.action();
                if pressed {
                    if newly_down {
                        self.set_button(action, true);
                    }
                } else {
                    self.set_button(action, false);
                }
            }
        }
        true
    }

    /// Set a button action held or released (gamepad buttons, scripted input).
    pub fn set_button(&mut self, action: InputAction, down: bool) {
        if !self.enabled || action.is_axis() || !self.actions.contains(&action) {
            return;
        }
        if down {
            if self.held_buttons.insert(action) {
                self.pressed_this_tick.insert(action);
            }
        } else {
            self.held_buttons.remove(&action);
        }
    }

    /// Whether a button action is currently held (level, not edge).
    pub fn is_held(&self, action: InputAction) -> bool {
        self.enabled && self.held_buttons.contains(&action)
    }

    /// Raw pointer motion in screen convention (`dy` positive = down).
    pub fn handle_mouse_motion(&mut self, dx: f32, dy: f32) {
        if self.enabled {
            self.mouse.accumulate_screen_delta(dx, dy);
        }
    }

    /// Analog stick value for an axis action. Stays in effect until changed. Ignored while disabled.
    pub fn set_analog(&mut self, action: InputAction, value: Vec2) {
        if !self.enabled {
            return;
        }
        match action {
            InputAction::Move => self.analog_move = value,
            InputAction::Look => self.analog_look = value,
            InputAction::Jump | InputAction::ResetPlayer => {}
        }
    }

    /// Close the current frame: clear rising edges and drop the consumed look delta.
    pub fn end_frame(&mut self) {
        self.pressed_this_tick.clear();
        self.mouse.consume_delta();
    }

    /// Drop all held and pending input.
    pub fn clear(&mut self) {
        self.held_keys.clear();
        self.move_keys.reset();
        self.analog_move = Vec2::ZERO;
        self.analog_look = Vec2::ZERO;
        self.mouse.reset();
        self.held_buttons.clear();
        self.pressed_this_tick.clear();
    }
}

impl InputProvider for ActionInput {
    fn has_action(&self, action: InputAction) -> bool {
        self.actions.contains(&action)
    }

    fn read_axis_2d(&self, action: InputAction) -> Vec2 {
        if !self.enabled || !self.actions.contains(&action) {
            return Vec2::ZERO;
        }
        match action {
            InputAction::Move => {
                (self.move_keys.axis() + self.analog_move).clamp(Vec2::NEG_ONE, Vec2::ONE)
            }
            InputAction::Look => self.mouse.peek_delta() + self.analog_look,
            InputAction::Jump | InputAction::ResetPlayer => Vec2::ZERO,
        }
    }

    fn was_pressed_this_tick(&self, action: InputAction) -> bool {
        self.enabled && self.pressed_this_tick.contains(&action)
    }

    fn enable(&mut self) {
        self.enabled = true;
    }

    fn disable(&mut self) {
        self.enabled = false;
        self.clear();
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}
