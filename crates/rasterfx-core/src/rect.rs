//! Pixel bounds for raster buffers.
//!
//! A [`Bounds`] is a half-open rectangle `[min_x, max_x) x [min_y, max_y)`
//! in image coordinates. Buffers decoded from containers usually start at
//! the origin, but nothing in the engine assumes it: every kernel addresses
//! source pixels relative to `min_x`/`min_y`.
//!
//! # Coordinate System
//!
//! ```text
//! (min_x,min_y) ──────► X
//!   │
//!   │   ┌──────────┐
//!   │   │  Raster  │
//!   │   └──────────┘ (max_x,max_y) exclusive
//!   ▼
//!   Y
//! ```
//!
//! # Usage
//!
//! ```rust
//! use rasterfx_core::Bounds;
//!
//! let b = Bounds::new(10, 20, 110, 70);
//! assert_eq!(b.width(), 100);
//! assert_eq!(b.height(), 50);
//! assert!(b.contains(10, 20));
//! assert!(!b.contains(110, 20));
//! ```
//!
//! # Dependencies
//!
//! None (pure Rust types)
//!
//! # Used By
//!
//! - [`crate::buffer::PixelBuffer`] - Buffer extent and offsets
//! - `rasterfx-ops` - Block clipping for the mosaic effect

use std::fmt;

/// Half-open pixel rectangle.
///
/// # Invariants
///
/// `min_x <= max_x` and `min_y <= max_y`. [`Bounds::new`] swaps
/// coordinates given in the wrong order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bounds {
    /// Left edge (inclusive)
    pub min_x: i32,
    /// Top edge (inclusive)
    pub min_y: i32,
    /// Right edge (exclusive)
    pub max_x: i32,
    /// Bottom edge (exclusive)
    pub max_y: i32,
}

impl Bounds {
    /// Creates bounds from two corners, normalizing their order.
    #[inline]
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min_x: x0.min(x1),
            min_y: y0.min(y1),
            max_x: x0.max(x1),
            max_y: y0.max(y1),
        }
    }

    /// Creates bounds anchored at the origin.
    ///
    /// ```rust
    /// use rasterfx_core::Bounds;
    ///
    /// let b = Bounds::from_size(1920, 1080);
    /// assert_eq!((b.min_x, b.min_y), (0, 0));
    /// assert_eq!((b.max_x, b.max_y), (1920, 1080));
    /// ```
    #[inline]
    pub fn from_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, clamp_i32(width), clamp_i32(height))
    }

    /// Width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.max_x.abs_diff(self.min_x)
    }

    /// Height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.max_y.abs_diff(self.min_y)
    }

    /// Number of pixels covered.
    #[inline]
    pub fn area(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }

    /// Returns `true` if the rectangle covers no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min_x >= self.max_x || self.min_y >= self.max_y
    }

    /// Returns `true` if `(x, y)` lies inside.
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.min_x && x < self.max_x && y >= self.min_y && y < self.max_y
    }

    /// Returns the overlap of two rectangles.
    ///
    /// Disjoint rectangles produce an empty `Bounds` rather than `None`, so
    /// callers can iterate the result unconditionally.
    ///
    /// ```rust
    /// use rasterfx_core::Bounds;
    ///
    /// let image = Bounds::from_size(5, 5);
    /// let block = Bounds::new(4, 4, 8, 8);
    /// assert_eq!(block.intersect(&image), Bounds::new(4, 4, 5, 5));
    /// ```
    pub fn intersect(&self, other: &Bounds) -> Bounds {
        let r = Bounds {
            min_x: self.min_x.max(other.min_x),
            min_y: self.min_y.max(other.min_y),
            max_x: self.max_x.min(other.max_x),
            max_y: self.max_y.min(other.max_y),
        };
        if r.is_empty() { Bounds::default() } else { r }
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{},{})-({},{})",
            self.min_x, self.min_y, self.max_x, self.max_y
        )
    }
}

fn clamp_i32(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_normalized() {
        let b = Bounds::new(10, 10, 0, 5);
        assert_eq!(b, Bounds::new(0, 5, 10, 10));
        assert_eq!(b.width(), 10);
        assert_eq!(b.height(), 5);
    }

    #[test]
    fn test_bounds_offset_origin() {
        let b = Bounds::new(-3, -2, 3, 2);
        assert_eq!(b.width(), 6);
        assert_eq!(b.height(), 4);
        assert_eq!(b.area(), 24);
        assert!(b.contains(-3, -2));
        assert!(!b.contains(3, 0));
    }

    #[test]
    fn test_bounds_empty() {
        assert!(Bounds::from_size(0, 10).is_empty());
        assert!(Bounds::default().is_empty());
        assert!(!Bounds::from_size(1, 1).is_empty());
    }

    #[test]
    fn test_intersect() {
        let a = Bounds::from_size(10, 10);
        let b = Bounds::new(5, 5, 15, 15);
        assert_eq!(a.intersect(&b), Bounds::new(5, 5, 10, 10));

        let far = Bounds::new(20, 20, 30, 30);
        assert!(a.intersect(&far).is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(Bounds::from_size(4, 3).to_string(), "[0,0)-(4,3)");
    }
}
