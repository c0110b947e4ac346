use glam::Vec3;
use log::trace;

use crate::{camera::Camera, framebuffer::FrameBuffer, sphere::Sphere};

/// Shading floor so the rim of a sphere never goes fully dark.
const RIM_GRADIENT_FLOOR: f32 = 0.15;

/// How a sphere's pixels get their depth values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DepthMode {
    /// Per-pixel surface reconstruction: `dz = sqrt(r^2 - dx^2 - dy^2)`
    /// offsets the sample toward the camera, and the depth is the true
    /// Euclidean distance from the eye to that surface point. Correct when
    /// spheres overlap or interpenetrate.
    #[default]
    Surface,
    /// Legacy behavior: one depth per silhouette, the squared distance from
    /// the eye to the sphere center. Geometrically wrong for overlapping
    /// spheres; kept behind this flag for callers that want the old look.
    FlatDisk,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RasterOptions {
    pub depth_mode: DepthMode,
}

impl RasterOptions {
    pub fn with_depth_mode(mut self, depth_mode: DepthMode) -> Self {
        self.depth_mode = depth_mode;
        self
    }
}

/// Radial gradient for a point `dist` from the disk center: full brightness
/// at the center falling to the rim floor at the edge.
fn shade_gradient(dist: f32, radius: f32) -> f32 {
    let g = (1.0 - dist / radius).clamp(0.0, 1.0);
    RIM_GRADIENT_FLOOR + (1.0 - RIM_GRADIENT_FLOOR) * g
}

/// Rasterizes one sphere into the framebuffer through the camera.
///
/// Candidate pixels come from the integer bounding box of the sphere's
/// camera-plane disk, filtered by the disk membership test. Every candidate
/// projects at the sphere center's z: the silhouette is the projected disk,
/// not the true perspective silhouette. That approximation comes from the
/// original renderer and is kept deliberately.
///
/// Returns the number of accepted buffer writes; zero is a valid outcome
/// (sphere fully clipped, degenerate, or everywhere occluded).
pub fn rasterize_sphere(
    camera: &Camera,
    fb: &mut FrameBuffer,
    sphere: &Sphere,
    options: RasterOptions,
) -> usize {
    if sphere.is_degenerate() {
        return 0;
    }

    let o = sphere.origin;
    let r = sphere.radius;
    let r2 = r * r;
    let eye = camera.eye();

    let x_lo = (o.x - r).floor() as i64;
    let x_hi = (o.x + r).ceil() as i64;
    let y_lo = (o.y - r).floor() as i64;
    let y_hi = (o.y + r).ceil() as i64;

    let mut accepted = 0usize;
    for x in x_lo..=x_hi {
        for y in y_lo..=y_hi {
            let dx = x as f32 - o.x;
            let dy = y as f32 - o.y;
            let d2 = dx * dx + dy * dy;
            if d2 > r2 {
                continue;
            }

            let p = camera.project(x as f32, y as f32, o.z);
            if !p.visible {
                continue;
            }

            let depth = match options.depth_mode {
                DepthMode::Surface => {
                    let dz = (r2 - d2).sqrt();
                    let surface = Vec3::new(x as f32, y as f32, o.z - dz);
                    surface.distance(eye)
                }
                DepthMode::FlatDisk => o.distance_squared(eye),
            };

            let color = sphere.color.scaled(shade_gradient(d2.sqrt(), r));
            if fb.test_and_write(p.x, p.y, depth, color) {
                accepted += 1;
            }
        }
    }

    trace!(
        "rasterized sphere at ({}, {}, {}) r={}: {} writes",
        o.x,
        o.y,
        o.z,
        r,
        accepted
    );
    accepted
}
