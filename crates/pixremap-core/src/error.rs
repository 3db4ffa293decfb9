//! Error types for pixremap-core
//!
//! Only image construction and bounds-checked pixel writes can fail.
//! The remapping operations built on top of these types are total and
//! sanitize their parameters instead of rejecting them.

use thiserror::Error;

/// pixremap error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid image dimensions
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Invalid number of channels
    #[error("invalid channel count: {0}")]
    InvalidChannelCount(u32),

    /// Sample buffer does not match the declared geometry
    #[error("data length mismatch: expected {expected} samples, got {actual}")]
    DataLengthMismatch { expected: usize, actual: usize },

    /// Index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Result type alias for pixremap operations
pub type Result<T> = std::result::Result<T, Error>;
