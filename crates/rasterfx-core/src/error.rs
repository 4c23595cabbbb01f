//! Error types for rasterfx-core operations.
//!
//! The core crate only fails when a buffer is built from inconsistent
//! parts (bounds vs. byte length) or when a pixel is addressed outside the
//! buffer bounds through a checked accessor.
//!
//! # Usage
//!
//! ```rust
//! use rasterfx_core::{Bounds, Error, PixelBuffer};
//!
//! let err = PixelBuffer::from_raw(Bounds::from_size(2, 2), vec![0u8; 3]).unwrap_err();
//! assert!(matches!(err, Error::InvalidDimensions { .. }));
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - [`crate::buffer::PixelBuffer`] - Construction and checked access
//! - `rasterfx-io` - Wrapped in `IoError::Core`

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or addressing pixel buffers.
#[derive(Debug, Error)]
pub enum Error {
    /// Pixel coordinates are outside the buffer bounds.
    #[error("pixel ({x}, {y}) out of bounds {bounds}")]
    OutOfBounds {
        /// X coordinate that was accessed
        x: i32,
        /// Y coordinate that was accessed
        y: i32,
        /// Bounds of the buffer, rendered for display
        bounds: String,
    },

    /// Invalid buffer dimensions.
    ///
    /// Returned when the byte length does not match the bounds, or when the
    /// bounds would overflow the buffer size computation.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Reason why dimensions are invalid
        reason: String,
    },
}

impl Error {
    /// Creates an [`Error::OutOfBounds`] error.
    #[inline]
    pub fn out_of_bounds(x: i32, y: i32, bounds: impl std::fmt::Display) -> Self {
        Self::OutOfBounds {
            x,
            y,
            bounds: bounds.to_string(),
        }
    }

    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Returns `true` if this is a bounds-related error.
    #[inline]
    pub fn is_bounds_error(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. })
    }
}
