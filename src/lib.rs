#![forbid(unsafe_code)]

pub mod camera;
pub mod framebuffer;
pub mod io;
pub mod raster;
pub mod scene;
pub mod sphere;
pub mod targets;
pub mod types;

pub use crate::{
    camera::{Boundary, Camera, CameraError, Projected},
    framebuffer::FrameBuffer,
    raster::{DepthMode, RasterOptions},
    scene::{Scene, SceneError},
    sphere::Sphere,
    types::Rgb8,
};
