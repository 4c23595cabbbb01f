//! Block mosaic (pixelation).
//!
//! The image is cut into square blocks of side `radius`, anchored at the
//! top-left corner. Blocks on the right and bottom edges are clipped to the
//! image. Every pixel of a block receives the block's per-channel mean,
//! computed from wide samples and narrowed once.
//!
//! Work is partitioned over block-rows rather than pixel rows, so a block
//! never straddles two workers.
//!
//! # Example
//!
//! ```rust
//! use rasterfx_core::{Bounds, PixelBuffer, Rgba8};
//! use rasterfx_ops::mosaic::mosaic;
//!
//! let mut img = PixelBuffer::new(Bounds::from_size(2, 2));
//! img.set_pixel(0, 0, Rgba8::opaque(255, 255, 255));
//!
//! let out = mosaic(&img, 2).unwrap();
//! assert_eq!(out.buffer().pixel(1, 1), out.buffer().pixel(0, 0));
//! ```

use rasterfx_core::{narrow, Bounds, PixelBuffer, PixelSource, Rgba8, TaggedImage, BYTES_PER_PIXEL};
#[allow(unused_imports)]
use tracing::{debug, trace};

use crate::parallel::{for_each_rows, local_offset};
use crate::partition::{block_count, partition, WorkRange};
use crate::{Engine, OpsError, OpsResult};

/// Pixelates the image with square blocks of side `radius`, on the
/// default [`Engine`].
///
/// `radius == 1` reproduces the image.
///
/// # Errors
///
/// [`OpsError::InvalidParameter`] if `radius` is zero or negative.
pub fn mosaic<S: PixelSource + ?Sized>(src: &S, radius: i32) -> OpsResult<TaggedImage> {
    mosaic_with(&Engine::default(), src, radius)
}

/// [`mosaic`] with an explicit engine.
pub fn mosaic_with<S: PixelSource + ?Sized>(
    engine: &Engine,
    src: &S,
    radius: i32,
) -> OpsResult<TaggedImage> {
    if radius <= 0 {
        return Err(OpsError::InvalidParameter(format!(
            "mosaic radius must be > 0, got {}",
            radius
        )));
    }

    let bounds = src.bounds();
    let block = radius as usize;
    let width = bounds.width() as usize;
    let height = bounds.height() as usize;
    trace!(width, height, block, "mosaic");

    let ranges = block_row_ranges(height, block, engine.parallelism());
    debug!(block_rows = block_count(height, block), workers = ranges.len(), "mosaic partition");

    let mut dst = PixelBuffer::new(bounds);
    for_each_rows(&mut dst, &ranges, |rows, bytes| {
        let first = rows.start;
        for y0 in rows.clone().step_by(block) {
            let ch = block.min(height - y0);
            for x0 in (0..width).step_by(block) {
                // Clipped in local coordinates, so corners never leave the image.
                let cw = block.min(width - x0);
                let cell = Bounds::new(
                    bounds.min_x + x0 as i32,
                    bounds.min_y + y0 as i32,
                    bounds.min_x + (x0 + cw) as i32,
                    bounds.min_y + (y0 + ch) as i32,
                );
                let avg = block_average(src, cell);

                for y in y0..y0 + ch {
                    for x in x0..x0 + cw {
                        let i = local_offset(x, y, first, width);
                        bytes[i..i + BYTES_PER_PIXEL].copy_from_slice(&avg.0);
                    }
                }
            }
        }
    });

    Ok(TaggedImage::new(dst, src.format()))
}

/// Partitions block-rows and converts them to pixel-row ranges.
///
/// Every range but the last ends on a block boundary; the last ends at
/// `height`.
fn block_row_ranges(height: usize, block: usize, parallelism: usize) -> Vec<WorkRange> {
    partition(block_count(height, block), parallelism)
        .into_iter()
        .map(|r| r.start * block..(r.end * block).min(height))
        .collect()
}

/// Mean color of `cell`, or transparent black for an empty cell.
fn block_average<S: PixelSource + ?Sized>(src: &S, cell: Bounds) -> Rgba8 {
    let count = cell.area();
    if count == 0 {
        return Rgba8::TRANSPARENT;
    }

    let mut sum = [0u64; 4];
    for y in cell.min_y..cell.max_y {
        for x in cell.min_x..cell.max_x {
            let s = src.sample(x, y);
            for (acc, v) in sum.iter_mut().zip(s.0) {
                *acc += v as u64;
            }
        }
    }

    let mean = sum.map(|v| narrow((v / count) as u32));
    Rgba8(mean)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker(w: u32, h: u32) -> PixelBuffer {
        let mut buf = PixelBuffer::new(Bounds::from_size(w, h));
        for y in 0..h as i32 {
            for x in 0..w as i32 {
                let v = if (x + y) % 2 == 0 { 255 } else { 0 };
                buf.set_pixel(x, y, Rgba8::opaque(v, v, v));
            }
        }
        buf
    }

    #[test]
    fn test_rejects_non_positive_radius() {
        let img = PixelBuffer::new(Bounds::from_size(4, 4));
        assert!(matches!(mosaic(&img, 0), Err(OpsError::InvalidParameter(_))));
        assert!(matches!(mosaic(&img, -2), Err(OpsError::InvalidParameter(_))));
    }

    #[test]
    fn test_block_row_ranges() {
        assert_eq!(block_row_ranges(10, 3, 2), vec![0..3, 3..10]);
        assert_eq!(block_row_ranges(10, 3, 8), vec![0..3, 3..6, 6..9, 9..10]);
        assert!(block_row_ranges(0, 3, 4).is_empty());
    }

    #[test]
    fn test_checker_block_average() {
        // 2 white + 2 black: (2 * 65535) / 4 = 32767 >> 8 = 127
        let img = checker(4, 4);
        let out = mosaic_with(&Engine::new().with_parallelism(2), &img, 2).unwrap();
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(out.buffer().pixel(x, y), Rgba8::opaque(127, 127, 127));
            }
        }
    }

    #[test]
    fn test_clipped_edge_blocks() {
        // 3x3 with block 2: right column and bottom row are 1-wide blocks.
        let mut img = PixelBuffer::new(Bounds::from_size(3, 3));
        img.set_pixel(2, 2, Rgba8::new(10, 20, 30, 40));
        let out = mosaic(&img, 2).unwrap();
        assert_eq!(out.buffer().pixel(2, 2), Rgba8::new(10, 20, 30, 40));
        assert_eq!(out.buffer().pixel(0, 0), Rgba8::TRANSPARENT);
    }

    #[test]
    fn test_empty_cell_is_transparent() {
        let img = checker(2, 2);
        assert_eq!(block_average(&img, Bounds::default()), Rgba8::TRANSPARENT);
    }

    #[test]
    fn test_offset_origin() {
        let mut img = PixelBuffer::new(Bounds::new(3, 7, 5, 9));
        img.set_pixel(3, 7, Rgba8::opaque(255, 255, 255));
        img.set_pixel(4, 8, Rgba8::opaque(255, 255, 255));
        let out = mosaic(&img, 2).unwrap();
        assert_eq!(out.buffer().pixel(4, 7), Rgba8::new(127, 127, 127, 127));
    }

    #[test]
    fn test_oversized_block_near_coordinate_limit() {
        let color = Rgba8::opaque(200, 100, 50);
        let img = PixelBuffer::filled(Bounds::new(10, 10, 14, 14), color);
        let out = mosaic(&img, i32::MAX).unwrap();
        assert_eq!(out.buffer(), &img);

        let bounds = Bounds::new(i32::MAX - 3, i32::MAX - 2, i32::MAX, i32::MAX);
        let img = PixelBuffer::filled(bounds, color);
        let out = mosaic_with(&Engine::new().with_parallelism(2), &img, 2).unwrap();
        assert_eq!(out.buffer().bounds(), bounds);
        assert_eq!(out.buffer(), &img);
    }
}
