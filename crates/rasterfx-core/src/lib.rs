//! # rasterfx-core
//!
//! Core raster types for the rasterfx effect engine.
//!
//! This crate provides the foundational types used throughout the workspace:
//!
//! - [`Bounds`] - Half-open pixel rectangles
//! - [`Rgba8`], [`Rgba16`] - Narrow (stored) and wide (16-bit scale) samples
//! - [`PixelBuffer`] - Canonical row-major RGBA8 raster
//! - [`PixelSource`] - Read capability every effect accepts
//! - [`TaggedImage`] - Raster paired with its container format tag
//!
//! ## Design Philosophy
//!
//! Reading and writing are deliberately asymmetric. Effects read through the
//! [`PixelSource`] trait so any layout can be processed, and always write
//! one concrete layout, [`PixelBuffer`]. Wide and narrow samples are
//! distinct types; converting between them is explicit and truncating:
//!
//! ```rust
//! use rasterfx_core::{Rgba16, Rgba8};
//!
//! let wide = Rgba16::new(0xFFFF, 0x80FF, 0x00FF, 0xFFFF);
//! assert_eq!(wide.narrow(), Rgba8::new(0xFF, 0x80, 0x00, 0xFF));
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//! rasterfx-core (this crate)
//!    ^
//!    +-- rasterfx-ops (partitioner, effect kernels)
//!    +-- rasterfx-io  (codecs, retrieval)
//!    +-- rasterfx-cli (rfx binary)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod buffer;
pub mod error;
pub mod rect;
pub mod sample;
pub mod source;
pub mod tagged;

// Re-exports for convenience
pub use buffer::{PixelBuffer, BYTES_PER_PIXEL};
pub use error::{Error, Result};
pub use rect::Bounds;
pub use sample::{narrow, widen, Rgba16, Rgba8, WIDE_MAX};
pub use source::PixelSource;
pub use tagged::{TaggedImage, DEFAULT_FORMAT};

/// Prelude module for convenient imports.
///
/// ```
/// use rasterfx_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::buffer::PixelBuffer;
    pub use crate::error::{Error, Result};
    pub use crate::rect::Bounds;
    pub use crate::sample::{Rgba16, Rgba8};
    pub use crate::source::PixelSource;
    pub use crate::tagged::TaggedImage;
}
