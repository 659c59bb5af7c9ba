//! Player Module
//!
//! First-person character motion.
//!
//! # Components
//!
//! - [`FirstPersonController`] - Owns config and look state, drives the per-tick steps
//!   - [`LocomotionDriver`] - Planar velocity in the body's basis, vertical preserved
//!   - [`JumpTrigger`] - Edge-triggered jump with a short downward ground probe
//! - [`BodyTransform`] - World pose of the body; yaw lives in its rotation
//! - [`DebugReset`] - Optional return-to-spawn on the `ResetPlayer` action

pub mod controller;
pub mod jump;
pub mod locomotion;
pub mod reset;
pub mod transform;

pub use controller::{FirstPersonController, FrameReport};
pub use jump::{GROUND_PROBE_DISTANCE, GroundState, JumpOutcome, JumpTrigger};
pub use locomotion::LocomotionDriver;
pub use reset::DebugReset;
pub use transform::BodyTransform;
