use crate::foundation::error::{OsdError, OsdResult};
use crate::foundation::math::mul_div255_u8;

const R_SHIFT: u32 = 0x00;
const G_SHIFT: u32 = 0x08;
const B_SHIFT: u32 = 0x10;
const A_SHIFT: u32 = 0x18;

const R_MASK: u32 = 0x0000_00FF;
const G_MASK: u32 = 0x0000_FF00;
const B_MASK: u32 = 0x00FF_0000;
const A_MASK: u32 = 0xFF00_0000;

/// One RGBA8888 pixel.
///
/// Red sits at the lowest-addressed byte, then green, blue and alpha at the highest. Viewed as a
/// little-endian `u32` this is ABGR32 (`0xAABBGGRR`). Any bit pattern is a legal pixel.
///
/// Whether the color channels are straight or premultiplied is a property of the compositing
/// [`crate::Algorithm`] applied, not of the pixel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Pixel(pub u32);

impl Pixel {
    /// Fully transparent black (all bits zero).
    pub const TRANSPARENT: Self = Self(0);

    /// Build a pixel from its four channels.
    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::TRANSPARENT.with_r(r).with_g(g).with_b(b).with_a(a)
    }

    /// Build a pixel from its boundary byte layout `[r, g, b, a]`.
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self(u32::from_le_bytes(bytes))
    }

    /// Boundary byte layout `[r, g, b, a]`, independent of host endianness.
    pub const fn to_bytes(self) -> [u8; 4] {
        self.0.to_le_bytes()
    }

    /// Red channel.
    pub const fn r(self) -> u8 {
        extract(self.0, R_MASK, R_SHIFT)
    }

    /// Green channel.
    pub const fn g(self) -> u8 {
        extract(self.0, G_MASK, G_SHIFT)
    }

    /// Blue channel.
    pub const fn b(self) -> u8 {
        extract(self.0, B_MASK, B_SHIFT)
    }

    /// Alpha channel.
    pub const fn a(self) -> u8 {
        extract(self.0, A_MASK, A_SHIFT)
    }

    /// Replace the red channel, leaving the others untouched.
    pub const fn with_r(self, r: u8) -> Self {
        Self(insert(self.0, r, R_MASK, R_SHIFT))
    }

    /// Replace the green channel, leaving the others untouched.
    pub const fn with_g(self, g: u8) -> Self {
        Self(insert(self.0, g, G_MASK, G_SHIFT))
    }

    /// Replace the blue channel, leaving the others untouched.
    pub const fn with_b(self, b: u8) -> Self {
        Self(insert(self.0, b, B_MASK, B_SHIFT))
    }

    /// Replace the alpha channel, leaving the others untouched.
    pub const fn with_a(self, a: u8) -> Self {
        Self(insert(self.0, a, A_MASK, A_SHIFT))
    }

    /// Scale the color channels by alpha (straight to premultiplied), rounding to nearest.
    pub fn premultiplied(self) -> Self {
        let a = self.a();
        if a == 0 {
            return Self::TRANSPARENT;
        }
        let a16 = u16::from(a);
        Self::from_rgba(
            mul_div255_u8(u16::from(self.r()), a16),
            mul_div255_u8(u16::from(self.g()), a16),
            mul_div255_u8(u16::from(self.b()), a16),
            a,
        )
    }
}

impl From<[u8; 4]> for Pixel {
    fn from(bytes: [u8; 4]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<Pixel> for [u8; 4] {
    fn from(px: Pixel) -> Self {
        px.to_bytes()
    }
}

const fn extract(v: u32, mask: u32, shift: u32) -> u8 {
    ((v & mask) >> shift) as u8
}

const fn insert(v: u32, c: u8, mask: u32, shift: u32) -> u32 {
    (v & !mask) | (((c as u32) << shift) & mask)
}

/// Serialize pixels into the boundary byte layout (4 bytes per pixel, R,G,B,A).
pub fn pixels_to_bytes(pixels: &[Pixel]) -> Vec<u8> {
    let mut out = Vec::with_capacity(pixels.len().saturating_mul(4));
    for px in pixels {
        out.extend_from_slice(&px.to_bytes());
    }
    out
}

/// Parse pixels from the boundary byte layout.
pub fn pixels_from_bytes(bytes: &[u8]) -> OsdResult<Vec<Pixel>> {
    if !bytes.len().is_multiple_of(4) {
        return Err(OsdError::validation(format!(
            "rgba8 byte length {} is not a multiple of 4",
            bytes.len()
        )));
    }
    Ok(bytes
        .chunks_exact(4)
        .map(|c| Pixel::from_bytes([c[0], c[1], c[2], c[3]]))
        .collect())
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/pixel.rs"]
mod tests;
