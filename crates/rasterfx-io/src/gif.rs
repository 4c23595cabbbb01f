//! GIF format support via the `image` crate.
//!
//! Only the first frame is decoded. Encoding quantizes to a 256-color
//! palette; fully transparent pixels survive, partial alpha does not.

use std::io::Cursor;

use image::codecs::gif::GifEncoder;
use image::{Frame, ImageFormat, ImageReader, RgbaImage};
use rasterfx_core::PixelBuffer;
#[allow(unused_imports)]
use tracing::{debug, trace};

use crate::convert::into_buffer;
use crate::{GifOptions, IoError, IoResult};

/// Decodes the first frame of a GIF stream into an RGBA8 buffer.
pub fn decode(bytes: &[u8]) -> IoResult<PixelBuffer> {
    let img = ImageReader::with_format(Cursor::new(bytes), ImageFormat::Gif)
        .decode()
        .map_err(|e| IoError::DecodeError(e.to_string()))?;

    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    debug!(width, height, "gif decoded");

    into_buffer(width, height, rgba.into_raw())
}

/// Encodes a buffer as a single-frame GIF.
pub fn encode(buffer: &PixelBuffer, options: &GifOptions) -> IoResult<Vec<u8>> {
    let speed = options.speed.clamp(1, 30);
    trace!(width = buffer.width(), height = buffer.height(), speed, "gif encode");

    let frame = RgbaImage::from_raw(buffer.width(), buffer.height(), buffer.data().to_vec())
        .ok_or_else(|| IoError::EncodeError("buffer size does not match dimensions".into()))?;

    let mut out = Vec::new();
    {
        let mut encoder = GifEncoder::new_with_speed(&mut out, speed);
        encoder
            .encode_frame(Frame::new(frame))
            .map_err(|e| IoError::EncodeError(e.to_string()))?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rasterfx_core::{Bounds, Rgba8};

    #[test]
    fn test_roundtrip_few_colors() {
        let mut image = PixelBuffer::filled(Bounds::from_size(8, 4), Rgba8::opaque(255, 0, 0));
        for y in 0..4 {
            image.set_pixel(0, y, Rgba8::opaque(0, 0, 255));
        }

        let bytes = encode(&image, &GifOptions::default()).expect("Failed to encode GIF");
        assert!(bytes.starts_with(b"GIF8"));

        let loaded = decode(&bytes).expect("Failed to decode GIF");
        assert_eq!(loaded.bounds(), image.bounds());
        assert_eq!(loaded.pixel(0, 2), Rgba8::opaque(0, 0, 255));
        assert_eq!(loaded.pixel(5, 2), Rgba8::opaque(255, 0, 0));
    }

    #[test]
    fn test_decode_garbage() {
        assert!(decode(b"GIF89a").is_err());
    }
}
