use std::io::Cursor;
use std::path::Path;

use anyhow::Context;

use crate::canvas::alloc::CanvasAllocator;
use crate::canvas::frame::FrameRgba8;
use crate::canvas::store::Osd;
use crate::foundation::error::{OsdError, OsdResult};

/// Encode tightly packed RGBA8 bytes (R,G,B,A per pixel, row-major) as PNG.
///
/// With `has_alpha == false` the alpha channel is dropped and an RGB8 PNG is written.
pub fn encode_png(width: usize, height: usize, rgba: &[u8], has_alpha: bool) -> OsdResult<Vec<u8>> {
    let expected = width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(4))
        .ok_or_else(|| OsdError::validation("png dimensions overflow"))?;
    if rgba.len() != expected {
        return Err(OsdError::validation(format!(
            "png of {width}x{height} expects {expected} rgba8 bytes, got {}",
            rgba.len()
        )));
    }
    let w = u32::try_from(width).map_err(|_| OsdError::encode("png width exceeds u32"))?;
    let h = u32::try_from(height).map_err(|_| OsdError::encode("png height exceeds u32"))?;

    let img = image::RgbaImage::from_raw(w, h, rgba.to_vec())
        .ok_or_else(|| OsdError::encode("rgba8 buffer does not match png dimensions"))?;
    let img = if has_alpha {
        image::DynamicImage::ImageRgba8(img)
    } else {
        image::DynamicImage::ImageRgb8(image::DynamicImage::ImageRgba8(img).to_rgb8())
    };

    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .map_err(|e| OsdError::encode(format!("png: {e}")))?;
    Ok(buf)
}

/// Encode the current canvas of `osd` as PNG.
pub fn encode_canvas_png<A: CanvasAllocator>(osd: &Osd<A>, has_alpha: bool) -> OsdResult<Vec<u8>> {
    let frame = osd.frame_rgba8();
    encode_png(frame.width, frame.height, &frame.data, has_alpha)
}

/// Encode `frame` as PNG and write it to `path`, creating parent directories.
#[tracing::instrument(skip(frame), fields(width = frame.width, height = frame.height))]
pub fn write_png(path: &Path, frame: &FrameRgba8, has_alpha: bool) -> OsdResult<()> {
    let bytes = encode_png(frame.width, frame.height, &frame.data, has_alpha)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, &bytes).with_context(|| format!("write png '{}'", path.display()))?;
    tracing::debug!(bytes = bytes.len(), "png written");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
