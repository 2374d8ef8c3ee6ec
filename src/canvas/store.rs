use std::ops::Range;

use crate::canvas::alloc::{CanvasAllocator, SystemAllocator};
use crate::canvas::config::OsdConfig;
use crate::canvas::frame::FrameRgba8;
use crate::foundation::core::{Position, Size};
use crate::foundation::error::{OsdError, OsdResult};
use crate::foundation::pixel::Pixel;
use crate::overlay::blend::Algorithm;
use crate::overlay::blit::{blit, render_rect};
use crate::overlay::payload::Payload;

/// Which half of the arena a canvas occupies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Half {
    Lower,
    Upper,
}

impl Half {
    fn other(self) -> Self {
        match self {
            Half::Lower => Half::Upper,
            Half::Upper => Half::Lower,
        }
    }
}

/// An OSD handle: a fixed-size, double-buffered RGBA canvas.
///
/// Both canvases live in a single arena obtained from `A` at construction and returned to it when
/// the handle is torn down (or dropped). The "current" canvas is what overlays draw into and what
/// [`Osd::canvas`] exposes; the "previous" canvas holds the last frame until the next swap.
///
/// A frame is built as:
///
/// 1. [`Osd::begin_frame`]: swap the canvases and clear the new current one.
/// 2. [`Osd::overlay`], any number of times, in z-order.
/// 3. [`Osd::end_frame`].
/// 4. Read [`Osd::canvas`] (or copy it out with [`Osd::frame_rgba8`]).
pub struct Osd<A: CanvasAllocator = SystemAllocator> {
    config: OsdConfig,
    allocator: A,
    pixel_count: usize,
    arena: Box<[Pixel]>,
    current: Half,
    frames: u64,
}

impl Osd {
    /// Create a handle backed by the global allocator.
    pub fn new(config: OsdConfig) -> OsdResult<Self> {
        Self::with_allocator(config, SystemAllocator)
    }
}

impl<A: CanvasAllocator> Osd<A> {
    /// Create a handle whose arena comes from `allocator`.
    ///
    /// Both canvases start fully transparent. Fails with [`OsdError::OutOfMemory`] when the
    /// allocator has no memory or the arena size overflows; nothing is retained in that case.
    /// A zero width or height is accepted and yields an empty canvas on which every overlay is a
    /// no-op.
    #[tracing::instrument(skip(allocator))]
    pub fn with_allocator(config: OsdConfig, mut allocator: A) -> OsdResult<Self> {
        let size = config.size;
        if size.is_empty() {
            tracing::warn!(
                width = size.width,
                height = size.height,
                "zero-sized canvas, overlays will draw nothing"
            );
        }

        let Some((pixel_count, arena_len, bytes)) = arena_layout(size) else {
            tracing::warn!("canvas arena size overflows usize");
            return Err(OsdError::out_of_memory(usize::MAX));
        };

        let Some(mut arena) = allocator.allocate(arena_len) else {
            tracing::warn!(bytes, "canvas allocation failed");
            return Err(OsdError::out_of_memory(bytes));
        };
        if arena.len() != arena_len {
            tracing::warn!(
                expected = arena_len,
                got = arena.len(),
                "allocator returned a block of the wrong length"
            );
            allocator.release(arena);
            return Err(OsdError::out_of_memory(bytes));
        }
        arena.fill(Pixel::TRANSPARENT);

        tracing::debug!(width = size.width, height = size.height, bytes, "osd canvas ready");
        Ok(Self {
            config,
            allocator,
            pixel_count,
            arena,
            current: Half::Upper,
            frames: 0,
        })
    }

    /// Release the arena back to the allocator and consume the handle.
    ///
    /// Dropping the handle does the same; this just makes the end of its life explicit.
    pub fn teardown(self) {
        tracing::debug!(frames = self.frames, "osd teardown");
        drop(self);
    }

    /// The configuration this handle was created with.
    pub fn config(&self) -> &OsdConfig {
        &self.config
    }

    /// Canvas dimensions.
    pub fn canvas_size(&self) -> Size {
        self.config.size
    }

    /// The current canvas, row-major.
    ///
    /// This is the composited frame. It is modified in place by later overlays and cleared by the
    /// next [`Osd::begin_frame`]; use [`Osd::frame_rgba8`] to keep a copy.
    pub fn canvas(&self) -> &[Pixel] {
        &self.arena[self.range(self.current)]
    }

    /// Mutable access to the current canvas for direct drawing.
    pub fn canvas_mut(&mut self) -> &mut [Pixel] {
        let range = self.range(self.current);
        &mut self.arena[range]
    }

    #[cfg(test)]
    fn previous_canvas(&self) -> &[Pixel] {
        &self.arena[self.range(self.current.other())]
    }

    /// Number of [`Osd::begin_frame`] calls so far.
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Start a frame: the current canvas becomes the previous one and the other canvas is cleared
    /// to transparent black and becomes current.
    pub fn begin_frame(&mut self) {
        self.current = self.current.other();
        self.canvas_mut().fill(Pixel::TRANSPARENT);
        self.frames = self.frames.saturating_add(1);
        tracing::trace!(frame = self.frames, "begin frame");
    }

    /// Finish a frame. Currently a synchronization point only.
    pub fn end_frame(&mut self) {
        tracing::trace!(frame = self.frames, "end frame");
    }

    /// Blend `payload` onto the current canvas with its top-left pixel at `pos`.
    ///
    /// If `pos` lies beyond the canvas (`x > width` or `y > height`) nothing happens. Otherwise
    /// the payload is clipped to the canvas and `algorithm` combines each covered canvas pixel
    /// with the matching payload pixel.
    pub fn overlay(&mut self, payload: &Payload<'_>, pos: Position, algorithm: Algorithm) {
        let size = self.config.size;
        let Some(rect) = render_rect(size, pos, payload.size()) else {
            tracing::trace!(x = pos.x, y = pos.y, "overlay outside canvas, skipped");
            return;
        };
        let range = self.range(self.current);
        blit(&mut self.arena[range], size, rect, payload, algorithm);
    }

    /// Copy the current canvas out as RGBA8 bytes.
    pub fn frame_rgba8(&self) -> FrameRgba8 {
        FrameRgba8::from_pixels(self.config.size, self.canvas())
    }

    fn range(&self, half: Half) -> Range<usize> {
        match half {
            Half::Lower => 0..self.pixel_count,
            Half::Upper => self.pixel_count..self.pixel_count * 2,
        }
    }
}

impl<A: CanvasAllocator> Drop for Osd<A> {
    fn drop(&mut self) {
        let arena = std::mem::take(&mut self.arena);
        self.allocator.release(arena);
    }
}

impl<A: CanvasAllocator> std::fmt::Debug for Osd<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Osd")
            .field("config", &self.config)
            .field("current", &self.current)
            .field("frames", &self.frames)
            .finish_non_exhaustive()
    }
}

/// `(pixels per canvas, arena length in pixels, arena bytes)`.
fn arena_layout(size: Size) -> Option<(usize, usize, usize)> {
    let pixel_count = size.pixel_count()?;
    let arena_len = pixel_count.checked_mul(2)?;
    let bytes = arena_len.checked_mul(size_of::<Pixel>())?;
    Some((pixel_count, arena_len, bytes))
}

#[cfg(test)]
#[path = "../../tests/unit/canvas/store.rs"]
mod tests;
