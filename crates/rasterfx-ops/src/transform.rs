//! Mirror transforms.
//!
//! - [`mirror_h`] - row `y` takes source row `height - 1 - y` (top becomes bottom)
//! - [`mirror_v`] - column `x` takes source column `width - 1 - x` (left becomes right)
//!
//! Both are full passes: every destination pixel is written exactly once by
//! the worker owning its row, reading the mirrored pixel from the untouched
//! source. No pair swapping, so ranges need not stop at the midline.
//!
//! # Example
//!
//! ```rust
//! use rasterfx_core::{Bounds, PixelBuffer, Rgba8};
//! use rasterfx_ops::transform::mirror_v;
//!
//! let red = Rgba8::opaque(255, 0, 0);
//! let blue = Rgba8::opaque(0, 0, 255);
//! let mut img = PixelBuffer::new(Bounds::from_size(2, 1));
//! img.set_pixel(0, 0, red);
//! img.set_pixel(1, 0, blue);
//!
//! let out = mirror_v(&img);
//! assert_eq!(out.buffer().pixel(0, 0), blue);
//! assert_eq!(out.buffer().pixel(1, 0), red);
//! ```

use rasterfx_core::{PixelSource, TaggedImage};
#[allow(unused_imports)]
use tracing::{debug, trace};

use crate::parallel::map_pixels;
use crate::Engine;

/// Flips the image top to bottom, on the default [`Engine`].
pub fn mirror_h<S: PixelSource + ?Sized>(src: &S) -> TaggedImage {
    mirror_h_with(&Engine::default(), src)
}

/// [`mirror_h`] with an explicit engine.
pub fn mirror_h_with<S: PixelSource + ?Sized>(engine: &Engine, src: &S) -> TaggedImage {
    let b = src.bounds();
    trace!(width = b.width(), height = b.height(), "mirror_h");

    let dst = map_pixels(engine, b, |x, y| src.sample(x, fold(b.min_y, b.max_y, y)).narrow());
    TaggedImage::new(dst, src.format())
}

/// Flips the image left to right, on the default [`Engine`].
pub fn mirror_v<S: PixelSource + ?Sized>(src: &S) -> TaggedImage {
    mirror_v_with(&Engine::default(), src)
}

/// [`mirror_v`] with an explicit engine.
pub fn mirror_v_with<S: PixelSource + ?Sized>(engine: &Engine, src: &S) -> TaggedImage {
    let b = src.bounds();
    trace!(width = b.width(), height = b.height(), "mirror_v");

    let dst = map_pixels(engine, b, |x, y| src.sample(fold(b.min_x, b.max_x, x), y).narrow());
    TaggedImage::new(dst, src.format())
}

/// Mirror of `c` in `[min, max)`: `min + (max - 1 - c)`, widened so that
/// origins near the `i32` limits cannot overflow.
#[inline]
fn fold(min: i32, max: i32, c: i32) -> i32 {
    (min as i64 + max as i64 - 1 - c as i64) as i32
}
