//! Wide and narrow RGBA samples.
//!
//! Two representations of a pixel travel through the engine and are never
//! mixed implicitly:
//!
//! - [`Rgba16`] - *wide* samples, 0..=65535 per channel, as returned by the
//!   generic [`PixelSource::sample`](crate::PixelSource::sample) query.
//!   Kernels do their arithmetic at this scale.
//! - [`Rgba8`] - *narrow* samples, the 8-bit layout stored in
//!   [`PixelBuffer`](crate::PixelBuffer).
//!
//! # Conversions
//!
//! Narrowing truncates: `narrow = wide >> 8`. Widening replicates the byte
//! (`v * 257`), so `narrow(widen(v)) == v` for every 8-bit `v`. Nothing
//! rounds; a wide value of `0x80FF` narrows to `0x80`, not `0x81`.
//!
//! ```rust
//! use rasterfx_core::{narrow, widen, Rgba16, Rgba8};
//!
//! assert_eq!(widen(0xAB), 0xABAB);
//! assert_eq!(narrow(0x80FF), 0x80);
//!
//! let px = Rgba8::new(10, 20, 30, 255);
//! assert_eq!(Rgba16::from(px).narrow(), px);
//! ```

/// Maximum wide channel value.
pub const WIDE_MAX: u16 = u16::MAX;

/// Widens an 8-bit channel to 16-bit scale.
#[inline]
pub const fn widen(v: u8) -> u16 {
    v as u16 * 0x101
}

/// Narrows a wide channel (or a wide-scale accumulator) to 8 bits.
///
/// Accepts `u32` so that kernel accumulators can be narrowed directly;
/// values are truncated, and anything above `0xFFFF` saturates to 255.
#[inline]
pub fn narrow(v: u32) -> u8 {
    u8::try_from(v >> 8).unwrap_or(u8::MAX)
}

/// Narrow 8-bit RGBA sample, straight (non-premultiplied) alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba8(pub [u8; 4]);

impl Rgba8 {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self([0, 0, 0, 0]);

    /// Creates a sample from its channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self([r, g, b, a])
    }

    /// Creates an opaque sample.
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b, u8::MAX])
    }

    /// Red channel.
    #[inline]
    pub const fn r(&self) -> u8 {
        self.0[0]
    }

    /// Green channel.
    #[inline]
    pub const fn g(&self) -> u8 {
        self.0[1]
    }

    /// Blue channel.
    #[inline]
    pub const fn b(&self) -> u8 {
        self.0[2]
    }

    /// Alpha channel.
    #[inline]
    pub const fn a(&self) -> u8 {
        self.0[3]
    }
}

/// Wide 16-bit-scale RGBA sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba16(pub [u16; 4]);

impl Rgba16 {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self([0, 0, 0, 0]);

    /// Creates a sample from its channels.
    #[inline]
    pub const fn new(r: u16, g: u16, b: u16, a: u16) -> Self {
        Self([r, g, b, a])
    }

    /// Red channel.
    #[inline]
    pub const fn r(&self) -> u16 {
        self.0[0]
    }

    /// Green channel.
    #[inline]
    pub const fn g(&self) -> u16 {
        self.0[1]
    }

    /// Blue channel.
    #[inline]
    pub const fn b(&self) -> u16 {
        self.0[2]
    }

    /// Alpha channel.
    #[inline]
    pub const fn a(&self) -> u16 {
        self.0[3]
    }

    /// Channels as `u32`, ready for accumulation.
    #[inline]
    pub fn to_u32(self) -> [u32; 4] {
        self.0.map(u32::from)
    }

    /// Truncating conversion to the stored 8-bit layout.
    #[inline]
    pub fn narrow(self) -> Rgba8 {
        Rgba8(self.0.map(|c| narrow(c as u32)))
    }
}

impl From<Rgba8> for Rgba16 {
    #[inline]
    fn from(px: Rgba8) -> Self {
        Self(px.0.map(widen))
    }
}
