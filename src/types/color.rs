#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };
    pub const WHITE: Self = Self { r: 255, g: 255, b: 255 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Packed `0x00RRGGBB` form, the layout presentation surfaces consume.
    pub const fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    pub const fn from_u32(px: u32) -> Self {
        Self {
            r: ((px >> 16) & 0xff) as u8,
            g: ((px >> 8) & 0xff) as u8,
            b: (px & 0xff) as u8,
        }
    }

    /// Scales every channel by `k` clamped to `[0, 1]`.
    pub fn scaled(self, k: f32) -> Self {
        let k = if k.is_finite() { k.clamp(0.0, 1.0) } else { 0.0 };
        Self {
            r: (self.r as f32 * k) as u8,
            g: (self.g as f32 * k) as u8,
            b: (self.b as f32 * k) as u8,
        }
    }

    pub fn to_le_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}
