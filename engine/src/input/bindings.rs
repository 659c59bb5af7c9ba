//! Input Bindings Module
//!
//! Maps physical keys to the controller's key-driven actions. One key per action;
//! binding a key that is already in use moves it.

use std::collections::HashMap;

use super::InputAction;
use super::KeyCode;
use super::keyboard::MoveDirection;

/// What a bound key does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Move forward (default: W)
    MoveForward,
    /// Move backward (default: S)
    MoveBack,
    /// Strafe left (default: A)
    MoveLeft,
    /// Strafe right (default: D)
    MoveRight,
    /// Jump (default: Space)
    Jump,
    /// Debug reset (default: R)
    ResetPlayer,
}

impl KeyAction {
    /// The logical action this key feeds.
    pub fn action(self) -> InputAction {
        match self {
            KeyAction::MoveForward
            | KeyAction::MoveBack
            | KeyAction::MoveLeft
            | KeyAction::MoveRight => InputAction::Move,
            KeyAction::Jump => InputAction::Jump,
            KeyAction::ResetPlayer => InputAction::ResetPlayer,
        }
    }

    /// Direction for move keys, `None` for buttons.
    pub fn move_direction(self) -> Option<MoveDirection> {
        match self {
            KeyAction::MoveForward => Some(MoveDirection::Forward),
            KeyAction::MoveBack => Some(MoveDirection::Back),
            KeyAction::MoveLeft => Some(MoveDirection::Left),
            KeyAction::MoveRight => Some(MoveDirection::Right),
            KeyAction::Jump | KeyAction::ResetPlayer => None,
        }
    }
}

/// Two-way key/action table.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    key_to_action: HashMap<KeyCode, KeyAction>,
    action_to_key: HashMap<KeyAction, KeyCode>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyBindings {
    /// Default bindings: WASD to move, Space to jump, R to reset.
    pub fn new() -> Self {
        let mut bindings = Self::empty();

        bindings.bind(KeyCode::W, KeyAction::MoveForward);
        bindings.bind(KeyCode::S, KeyAction::MoveBack);
        bindings.bind(KeyCode::A, KeyAction::MoveLeft);
        bindings.bind(KeyCode::D, KeyAction::MoveRight);
        bindings.bind(KeyCode::Space, KeyAction::Jump);
        bindings.bind(KeyCode::R, KeyAction::ResetPlayer);

        bindings
    }

    /// A table with nothing bound.
    pub fn empty() -> Self {
        Self {
            key_to_action: HashMap::new(),
            action_to_key: HashMap::new(),
        }
    }

    /// Bind a key to an action, dropping whatever either side was bound to before.
    pub fn bind(&mut self, key: KeyCode, action: KeyAction) {
        if let Some(old_action) = self.key_to_action.remove(&key) {
            self.action_to_key.remove(&old_action);
        }
        if let Some(old_key) = self.action_to_key.remove(&action) {
            self.key_to_action.remove(&old_key);
        }

        self.key_to_action.insert(key, action);
        self.action_to_key.insert(action, key);
    }

    pub fn unbind_key(&mut self, key: KeyCode) {
        if let Some(action) = self.key_to_action.remove(&key) {
            self.action_to_key.remove(&action);
        }
    }

    pub fn unbind_action(&mut self, action: KeyAction) {
        if let Some(key) = self.action_to_key.remove(&action) {
            self.key_to_action.remove(&key);
        }
    }

    pub fn get_action(&self, key: KeyCode) -> Option<KeyAction> {
        self.key_to_action.get(&key).copied()
    }

    pub fn get_key(&self, action: KeyAction) -> Option<KeyCode> {
        self.action_to_key.get(&action).copied()
    }
}
