//! # rasterfx-ops
//!
//! Parallel pixel effects over any [`PixelSource`](rasterfx_core::PixelSource).
//!
//! Every effect allocates a fresh destination buffer, partitions its rows
//! into disjoint ranges, runs the kernel on the Rayon pool and returns a
//! [`TaggedImage`](rasterfx_core::TaggedImage) carrying the source's format
//! tag. Calls are synchronous: no partial result is ever visible.
//!
//! # Modules
//!
//! - [`partition`] - Splitting rows (or block-rows) into worker ranges
//! - [`parallel`] - Dispatching kernels over disjoint row slices
//! - [`engine`] - Parallelism configuration and runtime [`Effect`] selection
//! - [`color`] - Invert, alpha scale
//! - [`transform`] - Top/bottom and left/right mirrors
//! - [`filter`] - Iterated 5-point box blur
//! - [`mosaic`] - Block averaging
//!
//! # Example
//!
//! ```rust
//! use rasterfx_core::{Bounds, PixelBuffer, Rgba8};
//! use rasterfx_ops::{invert, mirror_v};
//!
//! let mut img = PixelBuffer::new(Bounds::from_size(2, 1));
//! img.set_pixel(0, 0, Rgba8::opaque(255, 0, 0));
//! img.set_pixel(1, 0, Rgba8::opaque(0, 0, 255));
//!
//! let flipped = mirror_v(&img);
//! assert_eq!(flipped.buffer().pixel(0, 0), Rgba8::opaque(0, 0, 255));
//!
//! let negative = invert(&flipped);
//! assert_eq!(negative.buffer().pixel(0, 0), Rgba8::opaque(255, 255, 0));
//! ```
//!
//! ## Choosing parallelism
//!
//! ```rust,ignore
//! use rasterfx_ops::{Effect, Engine};
//!
//! let engine = Engine::new().with_parallelism(4);
//! let out = engine.apply(&image, Effect::BoxBlur(3))?;
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod color;
pub mod engine;
pub mod filter;
pub mod mosaic;
pub mod parallel;
pub mod partition;
pub mod transform;

pub use color::{alpha_scale, invert};
pub use engine::{Effect, Engine};
pub use error::{OpsError, OpsResult};
pub use filter::box_blur;
pub use mosaic::mosaic;
pub use transform::{mirror_h, mirror_v};
