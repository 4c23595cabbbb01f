//! Rasters paired with a container format tag.
//!
//! A [`TaggedImage`] is what decoders hand out and what effects return. The
//! tag (`"png"`, `"jpg"`, `"gif"`...) only travels with the pixels so that
//! the encoder can write the result back in the format it came from; the
//! engine never interprets it.

use std::fmt;

use crate::{Bounds, PixelBuffer, PixelSource, Rgba16};

/// Tag assigned to images whose source carried none.
pub const DEFAULT_FORMAT: &str = "png";

/// Immutable pixel buffer with a format tag.
///
/// # Example
///
/// ```rust
/// use rasterfx_core::{Bounds, PixelBuffer, PixelSource, TaggedImage};
///
/// let buf = PixelBuffer::new(Bounds::from_size(2, 2));
/// let img = TaggedImage::new(buf, None);
/// assert_eq!(img.format(), Some("png"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedImage {
    buffer: PixelBuffer,
    format: String,
}

impl TaggedImage {
    /// Wraps a buffer, defaulting the tag to [`DEFAULT_FORMAT`].
    pub fn new(buffer: PixelBuffer, format: Option<&str>) -> Self {
        Self {
            buffer,
            format: format.unwrap_or(DEFAULT_FORMAT).to_string(),
        }
    }

    /// Wraps a buffer with an explicit tag.
    pub fn with_format(buffer: PixelBuffer, format: impl Into<String>) -> Self {
        Self {
            buffer,
            format: format.into(),
        }
    }

    /// The carried format tag.
    #[inline]
    pub fn format_tag(&self) -> &str {
        &self.format
    }

    /// The underlying pixels.
    #[inline]
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// Splits into pixels and tag.
    pub fn into_parts(self) -> (PixelBuffer, String) {
        (self.buffer, self.format)
    }
}

impl PixelSource for TaggedImage {
    #[inline]
    fn bounds(&self) -> Bounds {
        self.buffer.bounds()
    }

    #[inline]
    fn sample(&self, x: i32, y: i32) -> Rgba16 {
        self.buffer.sample(x, y)
    }

    fn format(&self) -> Option<&str> {
        Some(&self.format)
    }

    fn as_buffer(&self) -> Option<&PixelBuffer> {
        Some(&self.buffer)
    }
}

impl AsRef<PixelBuffer> for TaggedImage {
    fn as_ref(&self) -> &PixelBuffer {
        &self.buffer
    }
}

impl From<PixelBuffer> for TaggedImage {
    fn from(buffer: PixelBuffer) -> Self {
        Self::new(buffer, None)
    }
}

impl fmt::Display for TaggedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} {}",
            self.buffer.width(),
            self.buffer.height(),
            self.format
        )
    }
}
