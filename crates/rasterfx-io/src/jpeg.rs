//! JPEG format support.
//!
//! Decoding normalizes grayscale, 16-bit grayscale and CMYK streams to
//! opaque RGBA8. JPEG has no alpha channel: encoding drops it.
//!
//! # Example
//!
//! ```rust,ignore
//! use rasterfx_io::{jpeg, JpegOptions};
//!
//! let preview = jpeg::encode(&buffer, &JpegOptions { quality: 60 })?;
//! ```

use std::io::{BufReader, Cursor};

use rasterfx_core::PixelBuffer;
#[allow(unused_imports)]
use tracing::{debug, trace};

use crate::convert::{into_buffer, strip_alpha, to_rgba8};
use crate::{IoError, IoResult, JpegOptions};

/// Decodes a JPEG stream into an opaque RGBA8 buffer.
pub fn decode(bytes: &[u8]) -> IoResult<PixelBuffer> {
    let mut decoder = jpeg_decoder::Decoder::new(BufReader::new(Cursor::new(bytes)));
    let pixels = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(e.to_string()))?;

    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("missing JPEG info".into()))?;
    debug!(width = info.width, height = info.height, pixel_format = ?info.pixel_format, "jpeg decoded");

    let rgba = match info.pixel_format {
        jpeg_decoder::PixelFormat::RGB24 => to_rgba8(&pixels, 3)?,
        jpeg_decoder::PixelFormat::L8 => to_rgba8(&pixels, 1)?,
        jpeg_decoder::PixelFormat::L16 => {
            // High byte of each 16-bit sample
            let gray: Vec<u8> = pixels.chunks_exact(2).map(|l16| l16[0]).collect();
            to_rgba8(&gray, 1)?
        }
        jpeg_decoder::PixelFormat::CMYK32 => pixels
            .chunks_exact(4)
            .flat_map(|cmyk| {
                let k = 255 - cmyk[3] as u32;
                let ch = |v: u8| ((255 - v as u32) * k / 255) as u8;
                [ch(cmyk[0]), ch(cmyk[1]), ch(cmyk[2]), 255]
            })
            .collect(),
    };

    into_buffer(info.width as u32, info.height as u32, rgba)
}

/// Encodes a buffer as baseline JPEG, discarding alpha.
///
/// # Errors
///
/// [`IoError::EncodeError`] if either dimension exceeds 65535 or the
/// encoder rejects the image.
pub fn encode(buffer: &PixelBuffer, options: &JpegOptions) -> IoResult<Vec<u8>> {
    use jpeg_encoder::{ColorType, Encoder};

    let (width, height) = (buffer.width(), buffer.height());
    trace!(width, height, quality = options.quality, "jpeg encode");

    let to_u16 = |v: u32| u16::try_from(v).map_err(|_| {
        IoError::EncodeError(format!("{}x{} exceeds JPEG limit of 65535", width, height))
    });
    let (w, h) = (to_u16(width)?, to_u16(height)?);

    let rgb = strip_alpha(buffer.data());
    let quality = options.quality.clamp(1, 100);

    let mut out = Vec::new();
    let encoder = Encoder::new(&mut out, quality);
    encoder
        .encode(&rgb, w, h, ColorType::Rgb)
        .map_err(|e: jpeg_encoder::EncodingError| IoError::EncodeError(e.to_string()))?;

    Ok(out)
}
