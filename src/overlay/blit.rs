use crate::foundation::core::{Position, Rect, Size};
use crate::foundation::error::{OsdError, OsdResult};
use crate::foundation::pixel::Pixel;
use crate::overlay::blend::{
    Algorithm, over_premultiplied, over_straight, replace_all, replace_non_alpha,
};
use crate::overlay::payload::Payload;

/// Clip a payload placed at `pos` against the canvas.
///
/// Returns `None` when `pos` lies beyond the canvas (`x > width` or `y > height`); the overlay is
/// then a no-op. A position exactly on the right or bottom edge yields an empty rectangle.
pub fn render_rect(canvas: Size, pos: Position, payload: Size) -> Option<Rect> {
    if pos.x > canvas.width || pos.y > canvas.height {
        return None;
    }
    Some(Rect {
        x: pos.x,
        y: pos.y,
        width: payload.width.min(canvas.width - pos.x),
        height: payload.height.min(canvas.height - pos.y),
    })
}

/// Blend `payload` onto an arbitrary row-major canvas slice.
///
/// This is the traversal used by [`crate::Osd::overlay`], exposed for callers that manage their
/// own buffers. Fails only when `canvas` does not hold exactly `canvas_size` pixels.
pub fn overlay_in_place(
    canvas: &mut [Pixel],
    canvas_size: Size,
    pos: Position,
    payload: &Payload<'_>,
    algorithm: Algorithm,
) -> OsdResult<()> {
    let expected = canvas_size
        .pixel_count()
        .ok_or_else(|| OsdError::validation("canvas size overflows usize"))?;
    if canvas.len() != expected {
        return Err(OsdError::validation(format!(
            "canvas of {}x{} expects {expected} pixels, got {}",
            canvas_size.width,
            canvas_size.height,
            canvas.len()
        )));
    }

    if let Some(rect) = render_rect(canvas_size, pos, payload.size()) {
        blit(canvas, canvas_size, rect, payload, algorithm);
    }
    Ok(())
}

/// Apply `algorithm` over the clipped `rect`.
///
/// `canvas` must hold `canvas_size` pixels and `rect` must come from [`render_rect`] for the same
/// canvas and payload sizes.
pub(crate) fn blit(
    canvas: &mut [Pixel],
    canvas_size: Size,
    rect: Rect,
    payload: &Payload<'_>,
    algorithm: Algorithm,
) {
    if rect.is_empty() {
        return;
    }
    // One monomorphized loop per algorithm.
    match algorithm {
        Algorithm::ReplaceAll => blit_rows(canvas, canvas_size, rect, payload, replace_all),
        Algorithm::ReplaceNonAlpha => {
            blit_rows(canvas, canvas_size, rect, payload, replace_non_alpha)
        }
        Algorithm::OverPremultiplied => {
            blit_rows(canvas, canvas_size, rect, payload, over_premultiplied)
        }
        Algorithm::OverStraight => blit_rows(canvas, canvas_size, rect, payload, over_straight),
    }
}

fn blit_rows<F>(canvas: &mut [Pixel], canvas_size: Size, rect: Rect, payload: &Payload<'_>, f: F)
where
    F: Fn(Pixel, Pixel) -> Pixel,
{
    for row in 0..rect.height {
        let src_row = payload.row_prefix(row, rect.width);
        let start = (rect.y + row) * canvas_size.width + rect.x;
        let dst_row = &mut canvas[start..start + rect.width];
        for (dst, &src) in dst_row.iter_mut().zip(src_row) {
            *dst = f(*dst, src);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/blit.rs"]
mod tests;
