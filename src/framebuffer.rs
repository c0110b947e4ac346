use crate::{camera::Boundary, types::Rgb8};

/// Paired depth/color grids over the camera boundary's pixel footprint.
///
/// Both grids are single contiguous row-major allocations indexed by
/// `row * width + col`, sized once at construction and fixed for the
/// buffer's lifetime. A partially initialized pair is unrepresentable:
/// either both vectors exist or the constructor never returns.
///
/// `test_and_write` is the only mutation path, which is what keeps the
/// nearest-wins invariant global no matter the order writes arrive in.
#[derive(Clone, Debug)]
pub struct FrameBuffer {
    bounds: Boundary,
    depth: Vec<f32>,
    color: Vec<Rgb8>,
}

impl FrameBuffer {
    pub fn new(bounds: Boundary, background: Rgb8) -> Self {
        let n = bounds.width.saturating_mul(bounds.height);
        Self {
            bounds,
            depth: vec![f32::INFINITY; n],
            color: vec![background; n],
        }
    }

    pub fn width(&self) -> usize {
        self.bounds.width
    }

    pub fn height(&self) -> usize {
        self.bounds.height
    }

    pub fn bounds(&self) -> Boundary {
        self.bounds
    }

    pub fn depth_slice(&self) -> &[f32] {
        &self.depth
    }

    pub fn color_slice(&self) -> &[Rgb8] {
        &self.color
    }

    pub fn into_color(self) -> Vec<Rgb8> {
        self.color
    }

    pub fn color_at(&self, x: usize, y: usize) -> Option<Rgb8> {
        if x >= self.bounds.width || y >= self.bounds.height {
            return None;
        }
        Some(self.color[y * self.bounds.width + x])
    }

    pub fn depth_at(&self, x: usize, y: usize) -> Option<f32> {
        if x >= self.bounds.width || y >= self.bounds.height {
            return None;
        }
        Some(self.depth[y * self.bounds.width + x])
    }

    /// Affine remap of a continuous camera-plane coordinate into
    /// `[0, dim - 1]`, clamped so an out-of-range coordinate snaps to the
    /// nearest valid index instead of indexing out of bounds.
    pub fn map_to_index(coord: f32, min: f32, max: f32, dim: usize) -> usize {
        if dim == 0 {
            return 0;
        }
        let last = (dim - 1) as f32;
        let t = (coord - min) / (max - min);
        let idx = t * last;
        if idx.is_nan() {
            return 0;
        }
        idx.clamp(0.0, last) as usize
    }

    /// Depth-tested write at the pixel `(sx, sy)` maps to. Accepts only a
    /// strictly smaller depth; on acceptance both grids are overwritten.
    pub fn test_and_write(&mut self, sx: f32, sy: f32, depth: f32, color: Rgb8) -> bool {
        let x = Self::map_to_index(sx, self.bounds.x0, self.bounds.x1, self.bounds.width);
        let y = Self::map_to_index(sy, self.bounds.y0, self.bounds.y1, self.bounds.height);
        let i = y * self.bounds.width + x;
        if depth < self.depth[i] {
            self.depth[i] = depth;
            self.color[i] = color;
            true
        } else {
            false
        }
    }

    /// FNV-1a over dimensions, color bytes, and depth bits. Cheap
    /// deterministic snapshot for tests and benches.
    pub fn hash64(&self) -> u64 {
        let mut h: u64 = 0xcbf29ce484222325;
        fn mix(h: &mut u64, b: u8) {
            *h ^= b as u64;
            *h = h.wrapping_mul(0x100000001b3);
        }
        for b in self.bounds.width.to_le_bytes() {
            mix(&mut h, b);
        }
        for b in self.bounds.height.to_le_bytes() {
            mix(&mut h, b);
        }
        for px in &self.color {
            for b in px.to_le_bytes() {
                mix(&mut h, b);
            }
        }
        for d in &self.depth {
            for b in d.to_bits().to_le_bytes() {
                mix(&mut h, b);
            }
        }
        h
    }
}

#[cfg(test)]
mod tests {
    use super::FrameBuffer;
    use crate::{camera::Boundary, types::Rgb8};

    fn bounds(width: usize, height: usize) -> Boundary {
        Boundary {
            x0: -(width as f32) / 2.0,
            y0: -(height as f32) / 2.0,
            x1: width as f32 / 2.0,
            y1: height as f32 / 2.0,
            width,
            height,
        }
    }

    #[test]
    fn fresh_buffer_is_background_and_infinite() {
        let bg = Rgb8::new(0, 50, 180);
        let fb = FrameBuffer::new(bounds(8, 4), bg);
        assert!(fb.depth_slice().iter().all(|d| d.is_infinite()));
        assert!(fb.color_slice().iter().all(|&c| c == bg));
    }

    #[test]
    fn map_to_index_covers_full_range() {
        assert_eq!(FrameBuffer::map_to_index(-4.0, -4.0, 4.0, 8), 0);
        assert_eq!(FrameBuffer::map_to_index(4.0, -4.0, 4.0, 8), 7);
        assert_eq!(FrameBuffer::map_to_index(0.0, -4.0, 4.0, 8), 3);
    }

    #[test]
    fn map_to_index_is_monotonic() {
        let mut prev = 0;
        for step in 0..=80 {
            let coord = -4.0 + step as f32 * 0.1;
            let idx = FrameBuffer::map_to_index(coord, -4.0, 4.0, 8);
            assert!(idx >= prev);
            prev = idx;
        }
        assert_eq!(prev, 7);
    }

    #[test]
    fn map_to_index_clamps_out_of_range_coords() {
        assert_eq!(FrameBuffer::map_to_index(-100.0, -4.0, 4.0, 8), 0);
        assert_eq!(FrameBuffer::map_to_index(100.0, -4.0, 4.0, 8), 7);
    }

    #[test]
    fn nearer_write_wins_regardless_of_order() {
        let bg = Rgb8::BLACK;
        let near = Rgb8::new(200, 0, 0);
        let far = Rgb8::new(0, 0, 200);

        let mut a = FrameBuffer::new(bounds(8, 8), bg);
        assert!(a.test_and_write(0.0, 0.0, 10.0, near));
        assert!(!a.test_and_write(0.0, 0.0, 20.0, far));

        let mut b = FrameBuffer::new(bounds(8, 8), bg);
        assert!(b.test_and_write(0.0, 0.0, 20.0, far));
        assert!(b.test_and_write(0.0, 0.0, 10.0, near));

        assert_eq!(a.color_at(3, 3), Some(near));
        assert_eq!(a.color_at(3, 3), b.color_at(3, 3));
        assert_eq!(a.depth_at(3, 3), Some(10.0));
        assert_eq!(b.depth_at(3, 3), Some(10.0));
    }

    #[test]
    fn equal_depth_keeps_first_write() {
        let mut fb = FrameBuffer::new(bounds(8, 8), Rgb8::BLACK);
        let first = Rgb8::new(1, 2, 3);
        assert!(fb.test_and_write(0.0, 0.0, 5.0, first));
        assert!(!fb.test_and_write(0.0, 0.0, 5.0, Rgb8::new(9, 9, 9)));
        assert_eq!(fb.color_at(3, 3), Some(first));
    }

    #[test]
    fn hash_tracks_content() {
        let mut fb = FrameBuffer::new(bounds(8, 8), Rgb8::BLACK);
        let h0 = fb.hash64();
        fb.test_and_write(0.0, 0.0, 1.0, Rgb8::WHITE);
        assert_ne!(fb.hash64(), h0);
    }
}
