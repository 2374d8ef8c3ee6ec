use crate::foundation::core::Size;
use crate::foundation::pixel::{Pixel, pixels_to_bytes};

/// An owned copy of a composited canvas as RGBA8 bytes.
///
/// Unlike the live canvas this survives the next [`crate::Osd::begin_frame`], which makes it the
/// natural thing to hand to an encoder or another thread.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRgba8 {
    /// Frame width in pixels.
    pub width: usize,
    /// Frame height in pixels.
    pub height: usize,
    /// RGBA8 bytes, tightly packed, row-major (R,G,B,A per pixel).
    pub data: Vec<u8>,
}

impl FrameRgba8 {
    pub(crate) fn from_pixels(size: Size, pixels: &[Pixel]) -> Self {
        Self {
            width: size.width,
            height: size.height,
            data: pixels_to_bytes(pixels),
        }
    }

    /// Frame dimensions.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// The pixel at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: usize, y: usize) -> Option<Pixel> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y * self.width + x) * 4;
        let c = self.data.get(i..i + 4)?;
        Some(Pixel::from_bytes([c[0], c[1], c[2], c[3]]))
    }
}
