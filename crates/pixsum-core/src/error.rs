//! Error types for pixsum-core
//!
//! Every variant is raised during construction only. Queries have no error
//! channel: out-of-range and degenerate rectangles resolve to `0`.

use thiserror::Error;

/// pixsum-core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No pixel buffer was supplied
    #[error("null or empty pixel buffer")]
    NullBuffer,

    /// A declared dimension is zero or negative
    #[error("invalid buffer dimensions: {width}x{height}")]
    InvalidSize { width: i64, height: i64 },

    /// A declared dimension exceeds the configured maximum
    #[error("buffer dimensions {width}x{height} exceed limit {max}x{max}")]
    SizeLimitExceeded { width: i64, height: i64, max: u32 },

    /// Buffer holds fewer bytes than `width * height`
    #[error("pixel buffer too small: expected {expected} bytes, got {actual}")]
    BufferTooSmall { expected: usize, actual: usize },

    /// Owned plane data does not match its declared dimensions
    #[error("plane size mismatch: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// Pixel coordinate outside the plane
    #[error("pixel ({x}, {y}) out of bounds for {width}x{height} plane")]
    IndexOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Options cannot be honored by the `u32` accumulator
    #[error("invalid options: {0}")]
    InvalidOptions(String),
}

/// Result type alias for pixsum-core operations
pub type Result<T> = std::result::Result<T, Error>;
