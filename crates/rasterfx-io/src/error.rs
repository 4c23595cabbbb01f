//! Error types for I/O operations.
//!
//! Covers decoding, encoding and retrieval of source images.

use std::io;
use thiserror::Error;

/// I/O operation error.
#[derive(Debug, Error)]
pub enum IoError {
    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Unsupported or unrecognized format tag.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Decoding error.
    #[error("decode error: {0}")]
    DecodeError(String),

    /// Encoding error.
    #[error("encode error: {0}")]
    EncodeError(String),

    /// Retrieval of a remote source failed.
    #[error("fetch error: {0}")]
    Fetch(String),

    /// Feature requires a cargo feature that is not enabled.
    #[error("feature unavailable: {0}")]
    UnsupportedFeature(String),

    /// Invalid raster produced by a decoder.
    #[error(transparent)]
    Core(#[from] rasterfx_core::Error),
}

/// Result type for I/O operations.
pub type IoResult<T> = Result<T, IoError>;
