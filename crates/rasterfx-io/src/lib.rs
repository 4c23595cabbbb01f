//! # rasterfx-io
//!
//! Container codecs and image retrieval for rasterfx.
//!
//! Everything decodes to the engine's canonical layout, an RGBA8
//! [`PixelBuffer`], wrapped in a [`TaggedImage`] so the container format
//! travels with the pixels through effect calls:
//!
//! - **PNG** - Lossless with alpha
//! - **JPEG** - Lossy, no alpha
//! - **GIF** - First frame, 256-color palette
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use rasterfx_io::{open, write, EncodeOptions};
//!
//! // Path or http(s) URL, format sniffed from content
//! let image = open("https://example.com/cat.gif")?;
//!
//! // Written in the image's own format
//! let bytes = rasterfx_io::encode(&image, &EncodeOptions::default())?;
//! write("cat_copy.gif", &image, &EncodeOptions::default())?;
//! ```
//!
//! # Supported Formats
//!
//! | Format | Read | Write | Alpha | Options |
//! |--------|------|-------|-------|---------|
//! | PNG | Yes | Yes | Yes | compression |
//! | JPEG | Yes | Yes | No | quality |
//! | GIF | Yes | Yes | 1-bit | speed |
//!
//! # Feature Flags
//!
//! - `png` - PNG support (default)
//! - `jpeg` - JPEG support (default)
//! - `gif` - GIF support via `image` (default)
//! - `http` - Fetch `http`/`https` sources with blocking `reqwest`

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod convert;
mod error;
pub mod format;
pub mod options;
pub mod source;

#[cfg(feature = "png")]
pub mod png;

#[cfg(feature = "jpeg")]
pub mod jpeg;

#[cfg(feature = "gif")]
pub mod gif;

use std::path::Path;

use rasterfx_core::{PixelBuffer, PixelSource, TaggedImage, DEFAULT_FORMAT};
#[allow(unused_imports)]
use tracing::{debug, trace};

pub use error::{IoError, IoResult};
pub use format::Format;
pub use options::{EncodeOptions, GifOptions, JpegOptions, PngCompression, PngOptions};
pub use source::Source;

/// Decodes an encoded image.
///
/// The format is sniffed from the content; `hint` is only used when the
/// magic bytes are not recognized. The result is tagged with the decoded
/// format: the hint's spelling is kept when it names that format, a hint
/// contradicting the content is ignored.
///
/// # Errors
///
/// - [`IoError::UnsupportedFormat`] - content and hint name no supported format
/// - [`IoError::DecodeError`] - the stream is corrupted
pub fn decode(bytes: &[u8], hint: Option<&str>) -> IoResult<TaggedImage> {
    let format = Format::detect(bytes, hint)?;
    debug!(%format, len = bytes.len(), "decoding");

    let buffer = decode_as(bytes, format)?;
    let tag = match hint {
        Some(h) if Format::from_tag(h) == Some(format) => h.to_ascii_lowercase(),
        _ => format.tag().to_string(),
    };
    Ok(TaggedImage::with_format(buffer, tag))
}

/// Decodes bytes as a specific format.
pub fn decode_as(bytes: &[u8], format: Format) -> IoResult<PixelBuffer> {
    match format {
        #[cfg(feature = "png")]
        Format::Png => png::decode(bytes),

        #[cfg(feature = "jpeg")]
        Format::Jpeg => jpeg::decode(bytes),

        #[cfg(feature = "gif")]
        Format::Gif => gif::decode(bytes),

        #[allow(unreachable_patterns)]
        other => Err(disabled(other)),
    }
}

/// Encodes an image in the format named by its tag (`"png"` if untagged).
///
/// # Errors
///
/// [`IoError::UnsupportedFormat`] if the tag names no supported format.
pub fn encode<S: PixelSource + ?Sized>(image: &S, options: &EncodeOptions) -> IoResult<Vec<u8>> {
    let tag = image.format().unwrap_or(DEFAULT_FORMAT);
    let format = Format::from_tag(tag).ok_or_else(|| IoError::UnsupportedFormat(tag.to_string()))?;
    encode_as(image, format, options)
}

/// Encodes an image in an explicit format, ignoring its tag.
///
/// JPEG output drops alpha.
pub fn encode_as<S: PixelSource + ?Sized>(
    image: &S,
    format: Format,
    options: &EncodeOptions,
) -> IoResult<Vec<u8>> {
    let bounds = image.bounds();
    debug!(%format, width = bounds.width(), height = bounds.height(), "encoding");

    let owned;
    let buffer = match image.as_buffer() {
        Some(buffer) => buffer,
        None => {
            owned = PixelBuffer::from_source(image);
            &owned
        }
    };

    match format {
        #[cfg(feature = "png")]
        Format::Png => png::encode(buffer, &options.png),

        #[cfg(feature = "jpeg")]
        Format::Jpeg => jpeg::encode(buffer, &options.jpeg),

        #[cfg(feature = "gif")]
        Format::Gif => gif::encode(buffer, &options.gif),

        #[allow(unreachable_patterns)]
        other => {
            let _ = (buffer, options);
            Err(disabled(other))
        }
    }
}

/// Reads and decodes a file. The extension is used as the format hint.
pub fn read<P: AsRef<Path>>(path: P) -> IoResult<TaggedImage> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    let hint = Format::from_extension(path).map(|f| f.tag());
    decode(&bytes, hint)
}

/// Encodes an image and writes it to a file.
///
/// The format comes from the file extension when it names a supported
/// format, otherwise from the image's tag.
pub fn write<P: AsRef<Path>, S: PixelSource + ?Sized>(
    path: P,
    image: &S,
    options: &EncodeOptions,
) -> IoResult<()> {
    let path = path.as_ref();
    let bytes = match Format::from_extension(path) {
        Some(format) => encode_as(image, format, options)?,
        None => encode(image, options)?,
    };
    std::fs::write(path, bytes)?;
    Ok(())
}

/// Retrieves and decodes an image from a path or `http(s)` URL.
pub fn open(location: &str) -> IoResult<TaggedImage> {
    let source = Source::parse(location)?;
    trace!(%source, "open");
    let bytes = source.fetch()?;
    decode(&bytes, source.format_hint())
}

#[allow(dead_code)]
fn disabled(format: Format) -> IoError {
    IoError::UnsupportedFeature(format!("{} support is not enabled", format))
}
