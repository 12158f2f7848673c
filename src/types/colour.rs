//! Colour type and interpolation.

/// An RGBA colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Same colour with a different alpha.
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Linearly interpolate the RGB channels towards `other`.
    ///
    /// Each channel is `self + (other - self) * t`, truncated towards zero.
    /// The alpha of `self` is kept. `t` is not clamped: values outside
    /// `[0, 1]` extrapolate and saturate at the channel limits.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        Self {
            r: lerp_channel(self.r, other.r, t),
            g: lerp_channel(self.g, other.g, t),
            b: lerp_channel(self.b, other.b, t),
            a: self.a,
        }
    }

    /// Convert to RGBA array.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Convert to RGB array, dropping alpha.
    pub fn to_rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

fn lerp_channel(from: u8, to: u8, t: f64) -> u8 {
    let from = from as f64;
    let value = from + (to as f64 - from) * t;
    // `as` truncates towards zero and saturates at 0 and 255
    value as u8
}
