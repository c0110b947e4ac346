use glam::Vec3;

use crate::types::Rgb8;

/// Immutable sphere primitive in camera-plane/world units.
///
/// Spheres are plain values; the scene keeps only their rasterized effect
/// on the buffers, never the sphere itself.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub origin: Vec3,
    pub radius: f32,
    pub color: Rgb8,
}

impl Sphere {
    pub const fn new(origin: Vec3, radius: f32, color: Rgb8) -> Self {
        Self {
            origin,
            radius,
            color,
        }
    }

    /// A sphere the rasterizer can do nothing with: non-positive or
    /// non-finite radius, or a non-finite origin.
    pub fn is_degenerate(&self) -> bool {
        !(self.radius > 0.0) || !self.radius.is_finite() || !self.origin.is_finite()
    }
}
