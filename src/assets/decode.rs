use anyhow::Context;

use crate::foundation::core::Size;
use crate::foundation::error::OsdResult;
use crate::foundation::pixel::{Pixel, pixels_from_bytes};
use crate::overlay::payload::OwnedPayload;

/// How decoded color channels relate to alpha.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlphaMode {
    /// Keep color as stored in the file (suits [`crate::Algorithm::OverStraight`]).
    #[default]
    Straight,
    /// Scale color by alpha (suits [`crate::Algorithm::OverPremultiplied`]).
    Premultiplied,
}

/// Decode an image file (any format `image` recognizes) into an overlay payload.
pub fn decode_payload(bytes: &[u8], mode: AlphaMode) -> OsdResult<OwnedPayload> {
    let dyn_img = image::load_from_memory(bytes).context("decode payload image from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut pixels = pixels_from_bytes(rgba.as_raw())?;
    if mode == AlphaMode::Premultiplied {
        premultiply_in_place(&mut pixels);
    }

    OwnedPayload::new(pixels, Size::new(width as usize, height as usize))
}

/// Convert straight-alpha pixels to premultiplied alpha in place.
pub fn premultiply_in_place(pixels: &mut [Pixel]) {
    for px in pixels {
        *px = px.premultiplied();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
