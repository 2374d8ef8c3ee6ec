//! A minimal RGBA8888 on-screen-display (OSD) compositing engine.
//!
//! An [`Osd`] owns a fixed-size canvas, double-buffered so the last composited frame stays
//! readable while the next one is built. Rectangular payloads are placed at arbitrary offsets,
//! clipped to the canvas and combined with it pixel by pixel using one of four [`Algorithm`]s.
//!
//! # Frame protocol
//!
//! ```
//! use rgba_osd::{Algorithm, Osd, OsdConfig, Payload, Pixel, Position, Size};
//!
//! let mut osd = Osd::new(OsdConfig::new(4, 4))?;
//! let red = [Pixel::from_rgba(255, 0, 0, 255); 4];
//! let payload = Payload::new(&red, Size::new(2, 2))?;
//!
//! osd.begin_frame();
//! osd.overlay(&payload, Position::new(1, 1), Algorithm::ReplaceAll);
//! osd.end_frame();
//!
//! assert_eq!(osd.canvas()[5], red[0]);
//! osd.teardown();
//! # Ok::<(), rgba_osd::OsdError>(())
//! ```
//!
//! # Design constraints
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Single allocation**: both canvases share one arena from a pluggable [`CanvasAllocator`].
//! - **Total drawing**: overlays never fail; out-of-range positions are no-ops and overhang is
//!   clipped. Allocation at construction is the only fallible lifecycle step.
//! - **Stable byte layout**: pixels are R,G,B,A from low to high address on every host.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod canvas;
mod encode;
mod foundation;
mod overlay;

pub use assets::decode::{AlphaMode, decode_payload, premultiply_in_place};
pub use canvas::alloc::{AllocStats, BudgetAllocator, CanvasAllocator, SystemAllocator};
pub use canvas::config::OsdConfig;
pub use canvas::frame::FrameRgba8;
pub use canvas::store::Osd;
pub use encode::png::{encode_canvas_png, encode_png, write_png};
pub use foundation::core::{Position, Rect, Size};
pub use foundation::error::{OsdError, OsdResult};
pub use foundation::pixel::{Pixel, pixels_from_bytes, pixels_to_bytes};
pub use overlay::blend::{
    Algorithm, over_premultiplied, over_straight, replace_all, replace_non_alpha,
};
pub use overlay::blit::{overlay_in_place, render_rect};
pub use overlay::payload::{OwnedPayload, Payload};
