//! RGBA [`Color`] and conversion to packed framebuffer pixels.

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// An 8-bit-per-channel RGBA colour.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    pub const YELLOW: Self = Self::rgb(255, 255, 0);
    pub const MAGENTA: Self = Self::rgb(255, 0, 255);
    pub const CYAN: Self = Self::rgb(0, 255, 255);
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    /// Opaque colour from RGB components.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Colour with an explicit alpha channel.
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Whether the colour fully covers whatever is beneath it.
    #[inline]
    pub const fn is_opaque(self) -> bool {
        self.a == 255
    }

    /// Pack into a `0x00RRGGBB` pixel. Alpha is dropped.
    #[inline]
    pub const fn to_pixel(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | (self.b as u32)
    }

    /// Unpack a `0x00RRGGBB` pixel as an opaque colour.
    #[inline]
    pub const fn from_pixel(pixel: u32) -> Self {
        Self::rgb(
            ((pixel >> 16) & 0xFF) as u8,
            ((pixel >> 8) & 0xFF) as u8,
            (pixel & 0xFF) as u8,
        )
    }

    /// Source-over blend of `self` onto an opaque `dst` pixel.
    pub fn blend_over(self, dst: u32) -> u32 {
        if self.is_opaque() {
            return self.to_pixel();
        }
        match self.a {
            0 => dst,
            a => {
                let d = Self::from_pixel(dst);
                let a = a as u32;
                let inv_a = 255 - a;
                let mix = |s: u8, d: u8| ((s as u32 * a + d as u32 * inv_a) / 255) as u8;
                Self::rgb(mix(self.r, d.r), mix(self.g, d.g), mix(self.b, d.b)).to_pixel()
            }
        }
    }
}

/// A window is cleared to opaque black unless told otherwise.
impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}
