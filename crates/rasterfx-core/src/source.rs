//! The pixel-addressable image capability.
//!
//! Every effect reads its input through [`PixelSource`]: bounds plus a
//! per-coordinate wide sample query. Concrete storage layouts (decoded PNG
//! rows, a caller's procedural image, a [`PixelBuffer`](crate::PixelBuffer))
//! only need to answer those two questions; the engine never branches on the
//! layout. Writes always go to the canonical 8-bit RGBA
//! [`PixelBuffer`](crate::PixelBuffer).
//!
//! # Example
//!
//! ```rust
//! use rasterfx_core::{Bounds, PixelSource, Rgba16};
//!
//! /// Horizontal ramp from black to white.
//! struct Ramp(u32);
//!
//! impl PixelSource for Ramp {
//!     fn bounds(&self) -> Bounds {
//!         Bounds::from_size(self.0, 1)
//!     }
//!
//!     fn sample(&self, x: i32, _y: i32) -> Rgba16 {
//!         let v = (x as u32 * 0xFFFF / (self.0 - 1)) as u16;
//!         Rgba16::new(v, v, v, 0xFFFF)
//!     }
//! }
//!
//! let ramp = Ramp(3);
//! assert_eq!(ramp.width(), 3);
//! assert_eq!(ramp.sample(2, 0).r(), 0xFFFF);
//! assert_eq!(ramp.format(), None);
//! ```

use crate::{Bounds, PixelBuffer, Rgba16};

/// A readable raster.
///
/// Implementors must be `Sync`: kernels query the same source from several
/// worker threads at once.
pub trait PixelSource: Sync {
    /// Pixel extent of the image.
    fn bounds(&self) -> Bounds;

    /// Wide sample at `(x, y)` in image coordinates.
    ///
    /// Coordinates outside [`bounds`](Self::bounds) should yield
    /// transparent black.
    fn sample(&self, x: i32, y: i32) -> Rgba16;

    /// Container format tag carried by this image, if any.
    ///
    /// Only [`TaggedImage`](crate::TaggedImage) carries one; plain buffers
    /// and caller-defined sources are untagged.
    fn format(&self) -> Option<&str> {
        None
    }

    /// Width in pixels.
    fn width(&self) -> u32 {
        self.bounds().width()
    }

    /// Height in pixels.
    fn height(&self) -> u32 {
        self.bounds().height()
    }

    /// The canonical buffer holding these pixels, if the source is backed
    /// by one. Lets consumers skip a copy.
    fn as_buffer(&self) -> Option<&PixelBuffer> {
        None
    }
}

impl<T: PixelSource + ?Sized> PixelSource for &T {
    fn bounds(&self) -> Bounds {
        (**self).bounds()
    }

    fn sample(&self, x: i32, y: i32) -> Rgba16 {
        (**self).sample(x, y)
    }

    fn format(&self) -> Option<&str> {
        (**self).format()
    }

    fn as_buffer(&self) -> Option<&PixelBuffer> {
        (**self).as_buffer()
    }
}
