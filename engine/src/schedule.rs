//! Fixed-step scheduling
//!
//! Turns variable visual-frame deltas into a whole number of fixed physics
//! steps per frame. Leftover time carries over to the next frame.
//!
//! # Usage
//! ```rust,ignore
//! let mut timestep = FixedTimestep::default();
//!
//! // Each visual frame
//! for _ in 0..timestep.advance(frame_dt) {
//!     controller.fixed_update(&input, &transform, &mut body)?;
//!     body.step(&mut transform, timestep.step(), &world);
//! }
//! ```

use crate::error::{ControllerError, Result};

/// Fixed physics step in seconds (60 Hz)
pub const FIXED_PHYSICS_STEP_S: f32 = 1.0 / 60.0;

/// Most fixed steps run for a single visual frame
pub const MAX_FIXED_STEPS_PER_FRAME: u32 = 8;

/// Longest visual frame accepted, in seconds. Longer hitches are dropped.
pub const MAX_FRAME_DELTA_S: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedTimestep {
    step: f32,
    max_steps_per_frame: u32,
    accumulator: f32,
}

impl Default for FixedTimestep {
    fn default() -> Self {
        Self {
            step: FIXED_PHYSICS_STEP_S,
            max_steps_per_frame: MAX_FIXED_STEPS_PER_FRAME,
            accumulator: 0.0,
        }
    }
}

impl FixedTimestep {
    pub fn new(step: f32, max_steps_per_frame: u32) -> Result<Self> {
        if !step.is_finite() || step <= 0.0 {
            return Err(ControllerError::InvalidConfig(format!(
                "fixed step must be a positive number of seconds, got {step}"
            )));
        }
        if max_steps_per_frame == 0 {
            return Err(ControllerError::InvalidConfig(
                "max fixed steps per frame must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            step,
            max_steps_per_frame,
            accumulator: 0.0,
        })
    }

    #[inline]
    pub fn step(&self) -> f32 {
        self.step
    }

    #[inline]
    pub fn max_steps_per_frame(&self) -> u32 {
        self.max_steps_per_frame
    }

    /// Time banked toward the next step, in seconds.
    #[inline]
    pub fn accumulator(&self) -> f32 {
        self.accumulator
    }

    /// Fraction of a step banked, in `[0, 1)` between calls. Useful for render interpolation.
    pub fn alpha(&self) -> f32 {
        (self.accumulator / self.step).clamp(0.0, 1.0)
    }

    /// Bank `frame_dt` and return how many fixed steps to run now.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        let frame_dt = if frame_dt.is_finite() {
            frame_dt.clamp(0.0, MAX_FRAME_DELTA_S)
        } else {
            0.0
        };
        self.accumulator =
            (self.accumulator + frame_dt).min(self.step * self.max_steps_per_frame as f32);

        let mut steps = 0;
        while self.accumulator >= self.step && steps < self.max_steps_per_frame {
            self.accumulator -= self.step;
            steps += 1;
        }
        steps
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
