//! Tests for format dispatch, tagging and file round trips.

use rasterfx_core::{Bounds, PixelBuffer, PixelSource, Rgba16, Rgba8, TaggedImage};
use rasterfx_io::{
    decode, encode, encode_as, open, read, write, EncodeOptions, Format, IoError,
};

fn sample_image() -> PixelBuffer {
    let mut buf = PixelBuffer::new(Bounds::from_size(12, 9));
    for y in 0..9 {
        for x in 0..12 {
            buf.set_pixel(x, y, Rgba8::new((x * 20) as u8, (y * 25) as u8, 90, 255 - x as u8));
        }
    }
    buf
}

/// Checkerboard generated on the fly, not backed by a buffer.
struct Checker;

impl PixelSource for Checker {
    fn bounds(&self) -> Bounds {
        Bounds::from_size(4, 4)
    }

    fn sample(&self, x: i32, y: i32) -> Rgba16 {
        if (x + y) % 2 == 0 {
            Rgba16::new(0xFFFF, 0xFFFF, 0xFFFF, 0xFFFF)
        } else {
            Rgba16::new(0, 0, 0, 0xFFFF)
        }
    }
}

// ============================================================================
// Tagging
// ============================================================================

#[test]
fn test_untagged_encodes_as_png() {
    let bytes = encode(&sample_image(), &EncodeOptions::default()).unwrap();
    assert_eq!(Format::from_bytes(&bytes), Some(Format::Png));
}

#[test]
fn test_tag_selects_encoder() {
    let img = TaggedImage::with_format(sample_image(), "gif");
    let bytes = encode(&img, &EncodeOptions::default()).unwrap();
    assert_eq!(Format::from_bytes(&bytes), Some(Format::Gif));

    let img = TaggedImage::with_format(sample_image(), "jpg");
    let bytes = encode(&img, &EncodeOptions::default()).unwrap();
    assert_eq!(Format::from_bytes(&bytes), Some(Format::Jpeg));
}

#[test]
fn test_unknown_tag_fails() {
    let img = TaggedImage::with_format(sample_image(), "bmp");
    match encode(&img, &EncodeOptions::default()) {
        Err(IoError::UnsupportedFormat(tag)) => assert_eq!(tag, "bmp"),
        other => panic!("expected UnsupportedFormat, got {:?}", other.map(|b| b.len())),
    }
}

#[test]
fn test_decode_tags_detected_format() {
    let bytes = encode_as(&sample_image(), Format::Jpeg, &EncodeOptions::default()).unwrap();
    let img = decode(&bytes, None).unwrap();
    assert_eq!(img.format_tag(), "jpeg");

    // A supported hint keeps its spelling.
    let img = decode(&bytes, Some("jpg")).unwrap();
    assert_eq!(img.format_tag(), "jpg");
}

#[test]
fn test_content_overrides_contradicting_hint() {
    let bytes = encode_as(&sample_image(), Format::Gif, &EncodeOptions::default()).unwrap();
    let img = decode(&bytes, Some("png")).unwrap();
    assert_eq!(img.format_tag(), "gif");

    let again = encode(&img, &EncodeOptions::default()).unwrap();
    assert_eq!(Format::from_bytes(&again), Some(Format::Gif));
}

#[test]
fn test_decode_unrecognized() {
    assert!(matches!(
        decode(b"plain text", None),
        Err(IoError::UnsupportedFormat(_))
    ));
}

#[test]
fn test_png_lossless() {
    let original = sample_image();
    let bytes = encode(&original, &EncodeOptions::default()).unwrap();
    let img = decode(&bytes, None).unwrap();
    assert_eq!(img.buffer(), &original);
    assert_eq!(img.format_tag(), "png");
}

#[test]
fn test_procedural_source() {
    let bytes = encode(&Checker, &EncodeOptions::default()).unwrap();
    let img = decode(&bytes, None).unwrap();
    assert_eq!(img.buffer().pixel(0, 0), Rgba8::opaque(255, 255, 255));
    assert_eq!(img.buffer().pixel(1, 0), Rgba8::opaque(0, 0, 0));
}

// ============================================================================
// Files
// ============================================================================

#[test]
fn test_write_uses_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.gif");

    // Tag says png, extension wins.
    let img = TaggedImage::with_format(sample_image(), "png");
    write(&path, &img, &EncodeOptions::default()).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(Format::from_bytes(&bytes), Some(Format::Gif));
}

#[test]
fn test_write_falls_back_to_tag() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.bin");

    let img = TaggedImage::with_format(sample_image(), "jpeg");
    write(&path, &img, &EncodeOptions::default()).unwrap();

    let loaded = read(&path).unwrap();
    assert_eq!(loaded.format_tag(), "jpeg");
    assert_eq!(loaded.bounds(), img.bounds());
}

#[test]
fn test_read_open_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("frame.png");
    let original = sample_image();

    write(&path, &original, &EncodeOptions::default()).unwrap();

    let via_read = read(&path).unwrap();
    let via_open = open(path.to_str().unwrap()).unwrap();
    assert_eq!(via_read, via_open);
    assert_eq!(via_read.buffer(), &original);
}

#[test]
fn test_open_missing() {
    assert!(matches!(open("/no/such/dir/img.png"), Err(IoError::Io(_))));
}
