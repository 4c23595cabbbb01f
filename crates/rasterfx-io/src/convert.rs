//! Channel layout normalization.
//!
//! Decoders hand back 8-bit data in whatever layout the file used; the
//! engine only consumes RGBA8.

use rasterfx_core::{Bounds, PixelBuffer};

use crate::{IoError, IoResult};

/// Expands 8-bit gray, gray+alpha, RGB or RGBA samples to RGBA.
///
/// Missing alpha becomes opaque.
pub(crate) fn to_rgba8(data: &[u8], channels: usize) -> IoResult<Vec<u8>> {
    let rgba = match channels {
        1 => data.iter().flat_map(|&g| [g, g, g, 255]).collect(),
        2 => data
            .chunks_exact(2)
            .flat_map(|ga| [ga[0], ga[0], ga[0], ga[1]])
            .collect(),
        3 => data
            .chunks_exact(3)
            .flat_map(|rgb| [rgb[0], rgb[1], rgb[2], 255])
            .collect(),
        4 => data.to_vec(),
        n => {
            return Err(IoError::DecodeError(format!(
                "unsupported channel count: {}",
                n
            )))
        }
    };
    Ok(rgba)
}

/// Wraps decoded RGBA8 bytes into a buffer anchored at the origin.
pub(crate) fn into_buffer(width: u32, height: u32, rgba: Vec<u8>) -> IoResult<PixelBuffer> {
    Ok(PixelBuffer::from_raw(Bounds::from_size(width, height), rgba)?)
}

/// Drops the alpha channel.
pub(crate) fn strip_alpha(rgba: &[u8]) -> Vec<u8> {
    rgba.chunks_exact(4)
        .flat_map(|px| [px[0], px[1], px[2]])
        .collect()
}
