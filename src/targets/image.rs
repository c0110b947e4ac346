use crate::{targets::resample_index, types::Rgb8};

#[cfg(feature = "png")]
use std::{error::Error, fmt};

/// RGB8 raster target, fillable from a scene's color grid at an arbitrary
/// output resolution.
pub struct ImageTarget {
    width: usize,
    height: usize,
    rgb: Vec<u8>,
}

impl ImageTarget {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            rgb: vec![0u8; width.saturating_mul(height).saturating_mul(3)],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn as_rgb_slice(&self) -> &[u8] {
        &self.rgb
    }

    pub fn set_rgb(&mut self, x: usize, y: usize, color: Rgb8) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let idx = (y * self.width + x) * 3;
        self.rgb[idx] = color.r;
        self.rgb[idx + 1] = color.g;
        self.rgb[idx + 2] = color.b;
        true
    }

    pub fn get_rgb(&self, x: usize, y: usize) -> Option<Rgb8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y * self.width + x) * 3;
        Some(Rgb8::new(self.rgb[idx], self.rgb[idx + 1], self.rgb[idx + 2]))
    }

    /// Fills the target from a row-major color grid, nearest-neighbor
    /// resampled per axis. Returns `false` when the grid does not match
    /// the stated source dimensions.
    pub fn blit_from(&mut self, colors: &[Rgb8], src_w: usize, src_h: usize) -> bool {
        if colors.len() != src_w.saturating_mul(src_h) || src_w == 0 || src_h == 0 {
            return false;
        }
        for y in 0..self.height {
            let sy = resample_index(y, self.height, src_h);
            for x in 0..self.width {
                let sx = resample_index(x, self.width, src_w);
                let px = colors[sy * src_w + sx];
                let idx = (y * self.width + x) * 3;
                self.rgb[idx] = px.r;
                self.rgb[idx + 1] = px.g;
                self.rgb[idx + 2] = px.b;
            }
        }
        true
    }

    pub fn hash64(&self) -> u64 {
        let mut h: u64 = 0xcbf29ce484222325;
        fn mix(h: &mut u64, b: u8) {
            *h ^= b as u64;
            *h = h.wrapping_mul(0x100000001b3);
        }
        for b in self.width.to_le_bytes() {
            mix(&mut h, b);
        }
        for b in self.height.to_le_bytes() {
            mix(&mut h, b);
        }
        for &b in &self.rgb {
            mix(&mut h, b);
        }
        h
    }

    #[cfg(feature = "png")]
    pub fn write_png_to_vec(&self) -> Result<Vec<u8>, PngEncodeError> {
        use image::ImageEncoder;

        let mut out = Vec::new();
        let encoder = image::codecs::png::PngEncoder::new(std::io::Cursor::new(&mut out));
        encoder
            .write_image(
                &self.rgb,
                self.width as u32,
                self.height as u32,
                image::ExtendedColorType::Rgb8,
            )
            .map_err(|_| PngEncodeError::Encode)?;
        Ok(out)
    }

    #[cfg(feature = "png")]
    pub fn save_png(&self, path: impl AsRef<std::path::Path>) -> Result<(), PngEncodeError> {
        let bytes = self.write_png_to_vec()?;
        std::fs::write(path, bytes).map_err(|_| PngEncodeError::Io)
    }
}

#[cfg(feature = "png")]
#[derive(Clone, Debug)]
pub enum PngEncodeError {
    Encode,
    Io,
}

#[cfg(feature = "png")]
impl fmt::Display for PngEncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encode => write!(f, "failed to encode png"),
            Self::Io => write!(f, "io error"),
        }
    }
}

#[cfg(feature = "png")]
impl Error for PngEncodeError {}
