use crate::foundation::core::Size;
use crate::foundation::error::{OsdError, OsdResult};

/// Handle configuration.
///
/// The allocator is deliberately not part of it; pass one to [`crate::Osd::with_allocator`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OsdConfig {
    /// Canvas size. `(0, 0)` is the upper-left corner. Fixed for the lifetime of the handle.
    pub size: Size,
}

impl OsdConfig {
    /// Configuration for a `width x height` canvas.
    pub const fn new(width: usize, height: usize) -> Self {
        Self {
            size: Size::new(width, height),
        }
    }

    /// Parse from JSON, e.g. `{"size":{"width":640,"height":320}}`.
    pub fn from_json(s: &str) -> OsdResult<Self> {
        serde_json::from_str(s).map_err(|e| OsdError::validation(format!("osd config: {e}")))
    }

    /// Serialize to JSON.
    pub fn to_json(&self) -> OsdResult<String> {
        serde_json::to_string(self).map_err(|e| OsdError::validation(format!("osd config: {e}")))
    }
}
