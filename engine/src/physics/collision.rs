//! Static collision geometry
//!
//! A flat ground plane plus a list of axis-aligned boxes, enough to answer the
//! controller's ground probe in the sandbox and in tests.
//!
//! # Ray-AABB Intersection
//!
//! The slab method: compute entry and exit times against each pair of
//! axis-aligned planes and keep the overlap.
//!
//! # Example
//!
//! ```ignore
//! use fps_motion_engine::physics::{Aabb, SpatialProbe, StaticColliders};
//! use glam::Vec3;
//!
//! let world = StaticColliders::with_ground(0.0)
//!     .with_box(Aabb::new(Vec3::new(2.0, 0.0, 2.0), Vec3::new(4.0, 1.0, 4.0)));
//!
//! let grounded = world.raycast(Vec3::new(0.0, 1.0, 0.0), Vec3::NEG_Y, 1.1);
//! ```

use glam::Vec3;

use super::SpatialProbe;

/// Axis-aligned box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    /// Box from a center point and half extents.
    pub fn from_center(center: Vec3, half_extents: Vec3) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

/// Ray-AABB intersection using the slab method.
///
/// `ray_dir` should be normalized so the returned value is a distance.
///
/// # Returns
///
/// * `Some(t)` - Distance along the ray to the entry point, or to the exit point
///   when the origin is inside the box
/// * `None` - No intersection, or the box is entirely behind the origin
pub fn ray_aabb_intersect(
    ray_origin: Vec3,
    ray_dir: Vec3,
    aabb_min: Vec3,
    aabb_max: Vec3,
) -> Option<f32> {
    // Near-zero components get a huge inverse so the slab test degenerates to
    // "is the origin between the planes"
    let inv = |d: f32| {
        if d.abs() > 1e-10 {
            1.0 / d
        } else {
            f32::MAX * d.signum()
        }
    };
    let inv_dir = Vec3::new(inv(ray_dir.x), inv(ray_dir.y), inv(ray_dir.z));

    let t1 = (aabb_min - ray_origin) * inv_dir;
    let t2 = (aabb_max - ray_origin) * inv_dir;

    let t_min = t1.min(t2).max_element();
    let t_max = t1.max(t2).min_element();

    if t_max >= t_min && t_max >= 0.0 {
        if t_min >= 0.0 { Some(t_min) } else { Some(t_max) }
    } else {
        None
    }
}

/// Static world made of an optional ground plane and boxes.
#[derive(Debug, Clone, Default)]
pub struct StaticColliders {
    /// Height of an infinite ground plane. Everything below it is solid.
    pub ground_height: Option<f32>,
    pub boxes: Vec<Aabb>,
}

impl StaticColliders {
    /// Empty world: every probe misses.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ground(height: f32) -> Self {
        Self {
            ground_height: Some(height),
            boxes: Vec::new(),
        }
    }

    pub fn with_box(mut self, aabb: Aabb) -> Self {
        self.boxes.push(aabb);
        self
    }

    pub fn add_box(&mut self, aabb: Aabb) {
        self.boxes.push(aabb);
    }

    fn cast_ground(&self, origin: Vec3, direction: Vec3) -> Option<f32> {
        let height = self.ground_height?;
        if origin.y <= height {
            return Some(0.0);
        }
        if direction.y >= 0.0 {
            return None;
        }
        Some((origin.y - height) / -direction.y)
    }
}

impl SpatialProbe for StaticColliders {
    fn cast_ray(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<f32> {
        let direction = direction.normalize_or_zero();
        if direction == Vec3::ZERO {
            return None;
        }

        self.boxes
            .iter()
            .filter_map(|b| ray_aabb_intersect(origin, direction, b.min, b.max))
            .chain(self.cast_ground(origin, direction))
            .filter(|t| *t <= max_distance)
            .min_by(|a, b| a.total_cmp(b))
    }
}
