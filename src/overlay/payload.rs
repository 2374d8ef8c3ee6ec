use crate::foundation::core::Size;
use crate::foundation::error::{OsdError, OsdResult};
use crate::foundation::pixel::Pixel;

/// A borrowed, read-only rectangle of pixels, row-major.
///
/// Construction checks that the slice holds exactly `width * height` pixels, so the overlay
/// traversal never has to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Payload<'a> {
    pixels: &'a [Pixel],
    size: Size,
}

impl<'a> Payload<'a> {
    /// Wrap `pixels` as a `size.width x size.height` payload.
    pub fn new(pixels: &'a [Pixel], size: Size) -> OsdResult<Self> {
        check_len(pixels.len(), size)?;
        Ok(Self { pixels, size })
    }

    /// Payload dimensions.
    pub fn size(&self) -> Size {
        self.size
    }

    /// All pixels, row-major.
    pub fn pixels(&self) -> &'a [Pixel] {
        self.pixels
    }

    /// The first `len` pixels of row `y`.
    pub(crate) fn row_prefix(&self, y: usize, len: usize) -> &'a [Pixel] {
        let start = y * self.size.width;
        &self.pixels[start..start + len]
    }
}

/// An owned payload, e.g. one decoded from an image file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OwnedPayload {
    pixels: Vec<Pixel>,
    size: Size,
}

impl OwnedPayload {
    /// Take ownership of `pixels` as a `size.width x size.height` payload.
    pub fn new(pixels: Vec<Pixel>, size: Size) -> OsdResult<Self> {
        check_len(pixels.len(), size)?;
        Ok(Self { pixels, size })
    }

    /// A payload where every pixel is `px`.
    pub fn filled(size: Size, px: Pixel) -> OsdResult<Self> {
        let n = size
            .pixel_count()
            .ok_or_else(|| OsdError::validation("payload size overflows usize"))?;
        Ok(Self {
            pixels: vec![px; n],
            size,
        })
    }

    /// Borrow as a [`Payload`].
    pub fn as_payload(&self) -> Payload<'_> {
        Payload {
            pixels: &self.pixels,
            size: self.size,
        }
    }

    /// Payload dimensions.
    pub fn size(&self) -> Size {
        self.size
    }

    /// All pixels, row-major.
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Mutable access to the pixels. The dimensions cannot change.
    pub fn pixels_mut(&mut self) -> &mut [Pixel] {
        &mut self.pixels
    }

    /// Give the pixel storage back.
    pub fn into_pixels(self) -> Vec<Pixel> {
        self.pixels
    }
}

fn check_len(len: usize, size: Size) -> OsdResult<()> {
    let expected = size
        .pixel_count()
        .ok_or_else(|| OsdError::validation("payload size overflows usize"))?;
    if len != expected {
        return Err(OsdError::validation(format!(
            "payload of {}x{} expects {expected} pixels, got {len}",
            size.width, size.height
        )));
    }
    Ok(())
}
