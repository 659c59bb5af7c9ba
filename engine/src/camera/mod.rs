//! Camera Module
//!
//! First-person look: the camera node the controller writes pitch into, the
//! look driver that splits look input into body yaw and camera pitch, and the
//! damping used for smoothed pitch. Window-system agnostic.

pub mod camera_node;
pub mod look;
pub mod smoothing;

pub use camera_node::{CameraNode, DEFAULT_EYE_HEIGHT, PitchCamera};
pub use look::LookDriver;
pub use smoothing::{delta_angle, smooth_damp, smooth_damp_angle};
