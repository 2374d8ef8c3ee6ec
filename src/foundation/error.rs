/// Convenience result type used across the crate.
pub type OsdResult<T> = Result<T, OsdError>;

/// Top-level error taxonomy.
///
/// Only [`OsdError::OutOfMemory`] can come out of the canvas lifecycle itself; overlay and frame
/// operations are total. The remaining variants belong to constructors and to the encode/decode
/// helpers.
#[derive(thiserror::Error, Debug)]
pub enum OsdError {
    /// The allocator could not provide the canvas arena.
    #[error("out of memory: could not allocate {bytes} bytes of canvas storage")]
    OutOfMemory {
        /// Requested arena size in bytes (saturated on overflow).
        bytes: usize,
    },

    /// Malformed caller-provided data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Image encoding or decoding failed.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl OsdError {
    /// Build an [`OsdError::OutOfMemory`] value.
    pub fn out_of_memory(bytes: usize) -> Self {
        Self::OutOfMemory { bytes }
    }

    /// Build an [`OsdError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`OsdError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Whether this is an allocation failure.
    pub fn is_out_of_memory(&self) -> bool {
        matches!(self, Self::OutOfMemory { .. })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
