use log::debug;
use std::{fmt, io, io::Write};

use crate::{
    camera::{Camera, CameraError},
    framebuffer::FrameBuffer,
    io::ppm,
    raster::{rasterize_sphere, RasterOptions},
    sphere::Sphere,
    types::Rgb8,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SceneError {
    Camera(CameraError),
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneError::Camera(err) => write!(f, "camera:{err}"),
        }
    }
}

impl std::error::Error for SceneError {}

impl From<CameraError> for SceneError {
    fn from(err: CameraError) -> Self {
        SceneError::Camera(err)
    }
}

/// Composition root: owns the camera and the framebuffer, and routes every
/// sphere through the rasterizer.
///
/// Lifecycle is carried by ownership. A constructed `Scene` is initialized;
/// dropping it (or consuming it with [`Scene::into_color_buffer`]) releases
/// the grids exactly once. There is no released-but-reachable state.
#[derive(Clone, Debug)]
pub struct Scene {
    camera: Camera,
    framebuffer: FrameBuffer,
    background: Rgb8,
    options: RasterOptions,
}

impl Scene {
    /// Builds the camera and allocates both grids sized to the camera's
    /// field-of-view footprint, color filled with `background`.
    pub fn new(
        cx: f32,
        cy: f32,
        f: f32,
        fovx_deg: f32,
        fovy_deg: f32,
        background: Rgb8,
    ) -> Result<Self, SceneError> {
        let camera = Camera::new(cx, cy, f, fovx_deg, fovy_deg)?;
        let framebuffer = FrameBuffer::new(camera.boundary(), background);
        debug!(
            "scene initialized: {}x{} px, f={}, boundary x=[{}, {}] y=[{}, {}]",
            framebuffer.width(),
            framebuffer.height(),
            f,
            camera.boundary().x0,
            camera.boundary().x1,
            camera.boundary().y0,
            camera.boundary().y1,
        );
        Ok(Self {
            camera,
            framebuffer,
            background,
            options: RasterOptions::default(),
        })
    }

    pub fn with_options(mut self, options: RasterOptions) -> Self {
        self.options = options;
        self
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn background(&self) -> Rgb8 {
        self.background
    }

    pub fn width(&self) -> usize {
        self.framebuffer.width()
    }

    pub fn height(&self) -> usize {
        self.framebuffer.height()
    }

    /// Rasterizes one sphere into the buffers. Spheres outside the visible
    /// boundary are silently clipped; the sphere itself is not retained.
    pub fn add_sphere(&mut self, sphere: Sphere) {
        rasterize_sphere(&self.camera, &mut self.framebuffer, &sphere, self.options);
    }

    /// Read-only view of the color grid, row-major at `width() x height()`.
    pub fn color_buffer(&self) -> &[Rgb8] {
        self.framebuffer.color_slice()
    }

    pub fn depth_buffer(&self) -> &[f32] {
        self.framebuffer.depth_slice()
    }

    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.framebuffer
    }

    /// One-shot ownership transfer of the color grid; the scene's buffers
    /// are released as part of the move.
    pub fn into_color_buffer(self) -> Vec<Rgb8> {
        self.framebuffer.into_color()
    }

    /// Serializes the color grid as plain-text PPM. An I/O failure aborts
    /// the write and is reported to the caller; the scene stays usable.
    pub fn write_ppm<W: Write>(&self, out: &mut W) -> io::Result<()> {
        ppm::write_ppm(out, self.width(), self.height(), self.color_buffer())
    }
}
