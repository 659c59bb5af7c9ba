//! FPS Motion Engine Library
//!
//! First-person character motion: look (body yaw plus camera pitch), planar
//! locomotion and an edge-triggered, ground-checked jump, driven against
//! host-owned input, rigid body, spatial probe and camera collaborators.
//!
//! # Modules
//!
//! - [`player`] - The controller and its locomotion and jump steps
//! - [`camera`] - Camera node, look driver and pitch smoothing
//! - [`input`] - Input provider trait, stock provider, winit bridge
//! - [`physics`] - Rigid body and probe traits with small reference implementations
//! - [`config`] - Tuning values with JSON loading
//! - [`schedule`] - Fixed-step accumulator for the physics cadence
//!
//! # Example
//!
//! ```ignore
//! use fps_motion_engine::{
//!     ActionInput, BodyTransform, ControllerConfig, FirstPersonController, FixedTimestep,
//!     PitchCamera, SimpleRigidBody, StaticColliders,
//! };
//!
//! let world = StaticColliders::with_ground(0.0);
//! let mut transform = BodyTransform::new(Vec3::new(0.0, 1.0, 0.0));
//! let mut body = SimpleRigidBody::new();
//! let mut camera = PitchCamera::new();
//! let mut input = ActionInput::new();
//! let mut timestep = FixedTimestep::default();
//!
//! let mut controller = FirstPersonController::new(ControllerConfig::default())?;
//! controller.activate(&mut input, &mut body)?;
//!
//! // Each visual frame
//! for _ in 0..timestep.advance(frame_dt) {
//!     controller.fixed_update(&input, &transform, &mut body)?;
//!     body.step(&mut transform, timestep.step(), &world);
//! }
//! controller.frame_update(frame_dt, &input, &mut transform, &mut camera, &mut body, &world)?;
//! input.end_frame();
//! ```

pub mod camera;
pub mod config;
pub mod error;
pub mod input;
pub mod physics;
pub mod player;
pub mod schedule;

pub use camera::{CameraNode, LookDriver, PitchCamera};
pub use config::{ControllerConfig, PitchLimits, PitchMode};
pub use error::{ControllerError, Result};
pub use input::{ActionInput, InputAction, InputProvider, KeyCode};
pub use physics::{RigidBody, SimpleRigidBody, SpatialProbe, StaticColliders};
pub use player::{
    BodyTransform, DebugReset, FirstPersonController, FrameReport, JumpOutcome,
};
pub use schedule::FixedTimestep;
