//! Format detection utilities.
//!
//! Detects container formats from tags, file extensions and magic bytes.
//! Tags are the lowercase strings carried by
//! [`TaggedImage`](rasterfx_core::TaggedImage): `"png"`, `"jpeg"`, `"gif"`.
//! `"jpg"` is accepted as an alias of `"jpeg"`.

use std::fmt;
use std::path::Path;

use crate::{IoError, IoResult};

/// Supported container formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// PNG format.
    Png,
    /// JPEG format.
    Jpeg,
    /// GIF format (first frame only).
    Gif,
}

impl Format {
    /// All supported formats.
    pub const ALL: [Format; 3] = [Format::Png, Format::Jpeg, Format::Gif];

    /// Parses a format tag, case-insensitively.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.to_ascii_lowercase().as_str() {
            "png" => Some(Format::Png),
            "jpg" | "jpeg" => Some(Format::Jpeg),
            "gif" => Some(Format::Gif),
            _ => None,
        }
    }

    /// Canonical tag.
    pub fn tag(&self) -> &'static str {
        match self {
            Format::Png => "png",
            Format::Jpeg => "jpeg",
            Format::Gif => "gif",
        }
    }

    /// File extensions recognized for this format.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Format::Png => &["png"],
            Format::Jpeg => &["jpg", "jpeg"],
            Format::Gif => &["gif"],
        }
    }

    /// Whether this format can store an alpha channel.
    pub fn has_alpha(&self) -> bool {
        !matches!(self, Format::Jpeg)
    }

    /// Detects format from file extension only.
    pub fn from_extension<P: AsRef<Path>>(path: P) -> Option<Self> {
        path.as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_tag)
    }

    /// Detects format from raw bytes (magic number check).
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        // PNG: 0x89 'P' 'N' 'G' CR LF 0x1A LF
        if bytes.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]) {
            return Some(Format::Png);
        }

        // JPEG: SOI followed by a marker
        if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
            return Some(Format::Jpeg);
        }

        // GIF: "GIF87a" / "GIF89a"
        if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
            return Some(Format::Gif);
        }

        None
    }

    /// Detects format from content, falling back to a tag hint.
    ///
    /// Magic bytes win over the hint, so a mislabeled file still decodes.
    pub fn detect(bytes: &[u8], hint: Option<&str>) -> IoResult<Self> {
        if let Some(format) = Self::from_bytes(bytes) {
            return Ok(format);
        }
        match hint {
            Some(tag) => Self::from_tag(tag).ok_or_else(|| IoError::UnsupportedFormat(tag.to_string())),
            None => Err(IoError::UnsupportedFormat("unrecognized content".into())),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl std::str::FromStr for Format {
    type Err = IoError;

    fn from_str(s: &str) -> IoResult<Self> {
        Self::from_tag(s).ok_or_else(|| IoError::UnsupportedFormat(s.to_string()))
    }
}
