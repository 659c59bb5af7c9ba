//! Keyboard Input Module
//!
//! Generic key codes and the four-direction move state built from them.
//! Decoupled from winit; see [`super::winit_bridge`] for the conversion.

use glam::Vec2;

/// Key codes the controller's default bindings care about, independent of windowing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    // Movement keys
    W,
    A,
    S,
    D,
    Space,
    ShiftLeft,
    ControlLeft,

    // Arrow keys
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    // Debug / misc
    R,
    F5,
    Escape,
    Enter,

    /// Catch-all for unhandled keys
    Unknown,
}

/// Direction of a held move key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveDirection {
    Forward,
    Back,
    Left,
    Right,
}

/// Tracks which move directions are currently held.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveKeys {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl MoveKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a direction held or released.
    pub fn set(&mut self, direction: MoveDirection, held: bool) {
        match direction {
            MoveDirection::Forward => self.forward = held,
            MoveDirection::Back => self.backward = held,
            MoveDirection::Left => self.left = held,
            MoveDirection::Right => self.right = held,
        }
    }

    pub fn any_pressed(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }

    /// Forward/backward axis (-1, 0, or 1).
    pub fn forward_axis(&self) -> i32 {
        (self.forward as i32) - (self.backward as i32)
    }

    /// Left/right axis (-1, 0, or 1).
    pub fn right_axis(&self) -> i32 {
        (self.right as i32) - (self.left as i32)
    }

    /// Digital move vector, `x` = right, `y` = forward. Diagonals are not normalized.
    pub fn axis(&self) -> Vec2 {
        Vec2::new(self.right_axis() as f32, self.forward_axis() as f32)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
