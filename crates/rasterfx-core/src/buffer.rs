//! Canonical 8-bit RGBA pixel buffer.
//!
//! [`PixelBuffer`] is the destination layout of every effect and the
//! decoded layout of every codec.
//!
//! # Memory Layout
//!
//! Pixels are stored **row-major**, top-to-bottom, four bytes per pixel:
//!
//! ```text
//! Memory: [R G B A R G B A ...]  ← row min_y
//!         [R G B A R G B A ...]  ← row min_y + 1
//!         ...
//! ```
//!
//! The byte offset of `(x, y)` is
//! `((y - min_y) * width + (x - min_x)) * 4`. Rows are never padded, so the
//! stride is exactly `width * 4` and a contiguous run of rows is a
//! contiguous byte slice. The parallel kernels rely on this to hand each
//! worker a disjoint `&mut [u8]`.
//!
//! # Usage
//!
//! ```rust
//! use rasterfx_core::{Bounds, PixelBuffer, PixelSource, Rgba8};
//!
//! let mut buf = PixelBuffer::new(Bounds::from_size(4, 4));
//! buf.set_pixel(1, 2, Rgba8::opaque(255, 0, 0));
//!
//! assert_eq!(buf.pixel(1, 2), Rgba8::opaque(255, 0, 0));
//! assert_eq!(buf.offset(1, 2), (2 * 4 + 1) * 4);
//! assert_eq!(buf.sample(1, 2).a(), 0xFFFF);
//! ```
//!
//! # Used By
//!
//! - [`crate::tagged::TaggedImage`] - Effect and decoder output
//! - `rasterfx-ops` - Destination of every kernel
//! - `rasterfx-io` - Decoded rasters, encoder input

use crate::{Bounds, Error, PixelSource, Result, Rgba16, Rgba8};

/// Bytes per stored pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// Owned RGBA8 raster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    bounds: Bounds,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Creates a buffer of transparent black pixels.
    ///
    /// # Panics
    ///
    /// Panics if the byte size overflows `usize`.
    pub fn new(bounds: Bounds) -> Self {
        let len = byte_len(bounds).expect("pixel buffer size overflows usize");
        Self {
            bounds,
            data: vec![0; len],
        }
    }

    /// Creates a buffer from existing RGBA8 bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `data.len()` is not
    /// `width * height * 4`.
    pub fn from_raw(bounds: Bounds, data: Vec<u8>) -> Result<Self> {
        let expected = byte_len(bounds).ok_or_else(|| {
            Error::invalid_dimensions(bounds.width(), bounds.height(), "size overflows usize")
        })?;
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                bounds.width(),
                bounds.height(),
                format!("expected {} bytes, got {}", expected, data.len()),
            ));
        }
        Ok(Self { bounds, data })
    }

    /// Creates a buffer filled with one color.
    pub fn filled(bounds: Bounds, px: Rgba8) -> Self {
        let mut buf = Self::new(bounds);
        for chunk in buf.data.chunks_exact_mut(BYTES_PER_PIXEL) {
            chunk.copy_from_slice(&px.0);
        }
        buf
    }

    /// Copies any [`PixelSource`] into a new buffer, narrowing each sample.
    ///
    /// Bounds are preserved. This is a sequential copy; the engine's seed
    /// phases use the parallel dispatcher instead.
    pub fn from_source<S: PixelSource + ?Sized>(src: &S) -> Self {
        let bounds = src.bounds();
        let mut buf = Self::new(bounds);
        let mut i = 0;
        for y in bounds.min_y..bounds.max_y {
            for x in bounds.min_x..bounds.max_x {
                buf.data[i..i + BYTES_PER_PIXEL].copy_from_slice(&src.sample(x, y).narrow().0);
                i += BYTES_PER_PIXEL;
            }
        }
        buf
    }

    /// Pixel extent.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.bounds.width()
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.bounds.height()
    }

    /// Bytes per row.
    #[inline]
    pub fn stride(&self) -> usize {
        self.width() as usize * BYTES_PER_PIXEL
    }

    /// Returns `true` if the buffer holds no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    /// Raw RGBA8 bytes.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable raw RGBA8 bytes.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consumes the buffer, returning its bytes.
    #[inline]
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Byte offset of `(x, y)`.
    ///
    /// Only meaningful for coordinates inside [`bounds`](Self::bounds).
    #[inline]
    pub fn offset(&self, x: i32, y: i32) -> usize {
        debug_assert!(self.bounds.contains(x, y), "offset out of bounds");
        let row = (y - self.bounds.min_y) as usize;
        let col = (x - self.bounds.min_x) as usize;
        (row * self.width() as usize + col) * BYTES_PER_PIXEL
    }

    /// Pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the bounds.
    #[inline]
    pub fn pixel(&self, x: i32, y: i32) -> Rgba8 {
        assert!(self.bounds.contains(x, y), "pixel out of bounds");
        let i = self.offset(x, y);
        Rgba8([self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]])
    }

    /// Pixel at `(x, y)`, or `None` outside the bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Rgba8> {
        self.bounds.contains(x, y).then(|| self.pixel(x, y))
    }

    /// Writes the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is outside the bounds.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, px: Rgba8) {
        assert!(self.bounds.contains(x, y), "pixel out of bounds");
        let i = self.offset(x, y);
        self.data[i..i + BYTES_PER_PIXEL].copy_from_slice(&px.0);
    }

    /// Writes the pixel at `(x, y)`, failing outside the bounds.
    pub fn try_set_pixel(&mut self, x: i32, y: i32, px: Rgba8) -> Result<()> {
        if !self.bounds.contains(x, y) {
            return Err(Error::out_of_bounds(x, y, self.bounds));
        }
        self.set_pixel(x, y, px);
        Ok(())
    }
}

impl PixelSource for PixelBuffer {
    #[inline]
    fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Widened stored pixel; transparent black outside the bounds.
    #[inline]
    fn sample(&self, x: i32, y: i32) -> Rgba16 {
        self.get_pixel(x, y)
            .map_or(Rgba16::TRANSPARENT, Rgba16::from)
    }

    fn as_buffer(&self) -> Option<&PixelBuffer> {
        Some(self)
    }
}

fn byte_len(bounds: Bounds) -> Option<usize> {
    (bounds.width() as usize)
        .checked_mul(bounds.height() as usize)?
        .checked_mul(BYTES_PER_PIXEL)
}
