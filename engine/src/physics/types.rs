//! Math type re-exports from glam

pub use glam::{Quat, Vec2, Vec3};
