//! Encoder options.
//!
//! One options struct per codec, grouped in [`EncodeOptions`]. All have
//! defaults matching a plain `encode` call:
//!
//! | Codec | Option | Default |
//! |-------|--------|---------|
//! | PNG | compression | [`PngCompression::Fast`] |
//! | JPEG | quality (1-100) | 75 |
//! | GIF | speed (1-30) | 10 |
//!
//! PNG output is always deflate-compressed. The fastest level is the
//! default; stored (uncompressed) PNG is not offered.

use std::str::FromStr;

use crate::IoError;

/// PNG compression level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PngCompression {
    /// Fast compression, larger files.
    #[default]
    Fast,
    /// Encoder's balanced default.
    Default,
}

impl FromStr for PngCompression {
    type Err = IoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fast" => Ok(PngCompression::Fast),
            "default" => Ok(PngCompression::Default),
            other => Err(IoError::EncodeError(format!(
                "unknown PNG compression '{}', expected fast or default",
                other
            ))),
        }
    }
}

/// PNG writer options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PngOptions {
    /// Compression level. Default: fast.
    pub compression: PngCompression,
}

/// JPEG writer options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JpegOptions {
    /// Quality (1-100). Default: 75.
    pub quality: u8,
}

impl Default for JpegOptions {
    fn default() -> Self {
        Self { quality: 75 }
    }
}

/// GIF writer options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GifOptions {
    /// Palette quantization speed (1 = best quality, 30 = fastest). Default: 10.
    pub speed: i32,
}

impl Default for GifOptions {
    fn default() -> Self {
        Self { speed: 10 }
    }
}

/// Options for every supported encoder.
///
/// ```rust
/// use rasterfx_io::{EncodeOptions, JpegOptions};
///
/// let opts = EncodeOptions {
///     jpeg: JpegOptions { quality: 92 },
///     ..Default::default()
/// };
/// assert_eq!(opts.png, Default::default());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EncodeOptions {
    /// PNG options.
    pub png: PngOptions,
    /// JPEG options.
    pub jpeg: JpegOptions,
    /// GIF options.
    pub gif: GifOptions,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = EncodeOptions::default();
        assert_eq!(opts.jpeg.quality, 75);
        assert_eq!(opts.png.compression, PngCompression::Fast);
        assert_eq!(opts.gif.speed, 10);
    }

    #[test]
    fn test_parse_compression() {
        assert_eq!("FAST".parse::<PngCompression>().unwrap(), PngCompression::Fast);
        assert_eq!("default".parse::<PngCompression>().unwrap(), PngCompression::Default);
        assert!("best".parse::<PngCompression>().is_err());
    }
}
