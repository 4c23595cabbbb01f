//! PNG format support.
//!
//! Decodes every PNG color type and bit depth into RGBA8 (palettes and low
//! bit depths are expanded, 16-bit samples keep their high byte). Encodes
//! RGBA8 with the requested compression level.
//!
//! # Example
//!
//! ```rust,ignore
//! use rasterfx_io::png;
//!
//! let buffer = png::decode(&bytes)?;
//! let bytes = png::encode(&buffer, &Default::default())?;
//! ```

use std::io::Cursor;

use rasterfx_core::PixelBuffer;
#[allow(unused_imports)]
use tracing::{debug, trace};

use crate::convert::{into_buffer, to_rgba8};
use crate::{IoError, IoResult, PngCompression, PngOptions};

/// Decodes a PNG stream into an RGBA8 buffer.
pub fn decode(bytes: &[u8]) -> IoResult<PixelBuffer> {
    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("cannot determine output buffer size".into()))?;
    let mut buf = vec![0u8; buf_size];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e: png::DecodingError| IoError::DecodeError(e.to_string()))?;

    let channels = match info.color_type {
        png::ColorType::Grayscale => 1,
        png::ColorType::GrayscaleAlpha => 2,
        png::ColorType::Rgb => 3,
        png::ColorType::Rgba => 4,
        other => {
            return Err(IoError::DecodeError(format!(
                "unexpected color type after expansion: {:?}",
                other
            )))
        }
    };
    debug!(width = info.width, height = info.height, channels, "png decoded");

    let rgba = to_rgba8(&buf[..info.buffer_size()], channels)?;
    into_buffer(info.width, info.height, rgba)
}

/// Encodes an RGBA8 buffer as PNG.
pub fn encode(buffer: &PixelBuffer, options: &PngOptions) -> IoResult<Vec<u8>> {
    trace!(width = buffer.width(), height = buffer.height(), compression = ?options.compression, "png encode");

    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, buffer.width(), buffer.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(match options.compression {
            PngCompression::Fast => png::Compression::Fast,
            PngCompression::Default => png::Compression::default(),
        });

        let mut writer = encoder
            .write_header()
            .map_err(|e| IoError::EncodeError(e.to_string()))?;
        writer
            .write_image_data(buffer.data())
            .map_err(|e| IoError::EncodeError(e.to_string()))?;
        writer
            .finish()
            .map_err(|e| IoError::EncodeError(e.to_string()))?;
    }
    Ok(out)
}
