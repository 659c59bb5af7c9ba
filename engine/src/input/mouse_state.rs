//! FPS-style Mouse State Tracker
//!
//! Raw mouse motion arrives in bursts from the event loop, several events per
//! frame. This accumulates it so the look driver sees one delta per visual frame.
//!
//! Stored deltas use the look convention (`y` up). Screen-space motion, where
//! positive `dy` means the pointer moved down, is flipped on the way in.

use glam::Vec2;

/// Accumulated look delta for the current frame.
#[derive(Debug, Clone, Default)]
pub struct FpsMouseState {
    delta: Vec2,
}

impl FpsMouseState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate raw pointer motion in screen convention (`dy` positive = down).
    #[inline]
    pub fn accumulate_screen_delta(&mut self, dx: f32, dy: f32) {
        self.delta += Vec2::new(dx, -dy);
    }

    /// Accumulate motion that is already y-up.
    #[inline]
    pub fn accumulate(&mut self, delta: Vec2) {
        self.delta += delta;
    }

    /// Return the accumulated delta and reset it.
    #[inline]
    pub fn consume_delta(&mut self) -> Vec2 {
        std::mem::take(&mut self.delta)
    }

    /// Accumulated delta without consuming it.
    #[inline]
    pub fn peek_delta(&self) -> Vec2 {
        self.delta
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
