use glam::Vec3;
use std::fmt;

/// Projection-plane extents in camera-plane units, plus the pixel footprint
/// they map onto.
///
/// `width` and `height` are the floor of the boundary span per axis; that
/// truncation fixes the buffer allocation size, so it is part of the
/// contract rather than an implementation detail.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Boundary {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
    pub width: usize,
    pub height: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CameraError {
    ZeroFocalLength,
    DegenerateBoundary { width: usize, height: usize },
}

impl fmt::Display for CameraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            CameraError::ZeroFocalLength => write!(f, "zero_focal_length"),
            CameraError::DegenerateBoundary { width, height } => {
                write!(f, "degenerate_boundary:{width}:{height}")
            }
        }
    }
}

impl std::error::Error for CameraError {}

/// Result of projecting a world point onto the camera plane.
///
/// `visible` uses open-interval semantics: a point landing exactly on a
/// boundary edge is not visible.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    pub x: f32,
    pub y: f32,
    pub visible: bool,
}

/// Pinhole camera: center of projection, focal length, and the boundary
/// derived from the per-axis field of view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    cx: f32,
    cy: f32,
    f: f32,
    boundary: Boundary,
}

impl Camera {
    /// Builds a camera at plane center `(cx, cy)` with focal length `f` and
    /// the given half-angle pair per axis (degrees, may be asymmetric).
    ///
    /// The boundary takes the min/max of `f * tan(±fov/2) + c` per axis, so
    /// it stays ordered for a negative focal length or unequal half-angles.
    pub fn new(cx: f32, cy: f32, f: f32, fovx_deg: f32, fovy_deg: f32) -> Result<Self, CameraError> {
        if f == 0.0 {
            return Err(CameraError::ZeroFocalLength);
        }

        let (x0, x1) = axis_span(f, fovx_deg, cx);
        let (y0, y1) = axis_span(f, fovy_deg, cy);
        let width = (x1 - x0) as usize;
        let height = (y1 - y0) as usize;
        if width == 0 || height == 0 {
            return Err(CameraError::DegenerateBoundary { width, height });
        }

        Ok(Self {
            cx,
            cy,
            f,
            boundary: Boundary {
                x0,
                y0,
                x1,
                y1,
                width,
                height,
            },
        })
    }

    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    pub fn focal_length(&self) -> f32 {
        self.f
    }

    /// Camera position in world space. The camera looks toward growing z,
    /// sitting at `-|f|` on the z axis.
    pub fn eye(&self) -> Vec3 {
        Vec3::new(self.cx, self.cy, -self.f.abs())
    }

    /// Perspective divide onto the camera plane.
    ///
    /// `z == 0` makes the divide undefined; the guard reports not-visible
    /// instead of letting a non-finite value reach the boundary comparison.
    pub fn project(&self, x: f32, y: f32, z: f32) -> Projected {
        if z == 0.0 {
            return Projected {
                x: 0.0,
                y: 0.0,
                visible: false,
            };
        }
        let sx = self.f * x / z - self.cx;
        let sy = self.f * y / z - self.cy;
        let b = self.boundary;
        let visible = sx > b.x0 && sx < b.x1 && sy > b.y0 && sy < b.y1;
        Projected {
            x: sx,
            y: sy,
            visible,
        }
    }
}

fn axis_span(f: f32, fov_deg: f32, center: f32) -> (f32, f32) {
    let half = (fov_deg * 0.5).to_radians();
    let a = f * half.tan() + center;
    let b = f * (-half).tan() + center;
    (a.min(b), a.max(b))
}

#[cfg(test)]
mod tests {
    use super::{Camera, CameraError};

    #[test]
    fn zero_focal_length_is_rejected() {
        assert_eq!(
            Camera::new(0.0, 0.0, 0.0, 70.0, 70.0).unwrap_err(),
            CameraError::ZeroFocalLength
        );
    }

    #[test]
    fn zero_fov_is_rejected() {
        assert!(matches!(
            Camera::new(0.0, 0.0, 300.0, 0.0, 70.0),
            Err(CameraError::DegenerateBoundary { .. })
        ));
    }

    #[test]
    fn boundary_is_ordered_for_negative_focal_length() {
        let cam = Camera::new(0.0, 0.0, -300.0, 70.0, 70.0).unwrap();
        let b = cam.boundary();
        assert!(b.x0 < b.x1);
        assert!(b.y0 < b.y1);
        assert_eq!(b.width, 420);
        assert_eq!(b.height, 420);
    }

    #[test]
    fn boundary_matches_tangent_span() {
        let cam = Camera::new(0.0, 0.0, 300.0, 70.0, 70.0).unwrap();
        let b = cam.boundary();
        let expect = 300.0 * 35.0_f32.to_radians().tan();
        assert!((b.x1 - expect).abs() < 1e-3);
        assert!((b.x0 + expect).abs() < 1e-3);
        assert_eq!(b.width, 420);
    }

    #[test]
    fn asymmetric_fov_gives_asymmetric_footprint() {
        let cam = Camera::new(0.0, 0.0, 600.0, 80.0, 70.0).unwrap();
        let b = cam.boundary();
        assert!(b.width > b.height);
    }

    #[test]
    fn center_point_projects_to_plane_center() {
        let cam = Camera::new(0.0, 0.0, 300.0, 70.0, 70.0).unwrap();
        let p = cam.project(0.0, 0.0, 800.0);
        assert_eq!(p.x, 0.0);
        assert_eq!(p.y, 0.0);
        assert!(p.visible);
    }

    #[test]
    fn zero_z_reports_not_visible_without_error() {
        let cam = Camera::new(0.0, 0.0, 300.0, 70.0, 70.0).unwrap();
        let p = cam.project(1.0, 1.0, 0.0);
        assert!(!p.visible);
        assert!(p.x.is_finite());
        assert!(p.y.is_finite());
    }

    #[test]
    fn point_on_boundary_edge_is_not_visible() {
        // Power-of-two focal length keeps the arithmetic exact, so the
        // projected x lands exactly on the boundary edge.
        let cam = Camera::new(0.0, 0.0, 256.0, 90.0, 70.0).unwrap();
        let b = cam.boundary();
        let x = b.x1 / 256.0;
        let p = cam.project(x, 0.0, 1.0);
        assert_eq!(p.x, b.x1);
        assert!(!p.visible);
    }

    #[test]
    fn far_off_axis_point_is_not_visible() {
        let cam = Camera::new(0.0, 0.0, 600.0, 80.0, 70.0).unwrap();
        assert!(!cam.project(2000.0, 0.0, 800.0).visible);
    }
}
