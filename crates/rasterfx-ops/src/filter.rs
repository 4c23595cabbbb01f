//! Iterated 5-point box blur.
//!
//! [`box_blur`] runs in two phases:
//!
//! 1. **Seed** - every source pixel is narrowed into the destination
//!    (parallel by row range).
//! 2. **Smoothing** - `radius` passes. Each pass replaces every interior
//!    pixel `0 <= x < width - 1`, `0 <= y < height - 1` with
//!
//!    ```text
//!    (4 * center + up + down + left + right) / 8
//!    ```
//!
//!    per channel at wide scale, truncating. Neighbors outside the image
//!    read as transparent black. The last row and last column are never
//!    smoothed and keep their seeded values.
//!
//! Pass `k + 1` reads the complete output of pass `k`: each pass snapshots
//! the buffer, then its row workers read the snapshot and write disjoint
//! rows of the buffer. The join at the end of a pass is the barrier between
//! passes, so the result does not depend on the worker count.
//!
//! # Example
//!
//! ```rust
//! use rasterfx_core::{Bounds, PixelBuffer, Rgba8};
//! use rasterfx_ops::filter::box_blur;
//!
//! let img = PixelBuffer::filled(Bounds::from_size(16, 16), Rgba8::opaque(90, 90, 90));
//! let same = box_blur(&img, 0).unwrap();
//! assert_eq!(same.buffer(), &img);
//!
//! assert!(box_blur(&img, -1).is_err());
//! ```

use rasterfx_core::{narrow, PixelBuffer, PixelSource, TaggedImage, BYTES_PER_PIXEL};
#[allow(unused_imports)]
use tracing::{debug, trace};

use crate::parallel::{for_each_rows, local_offset, map_pixels};
use crate::{Engine, OpsError, OpsResult};

/// Blurs the image with `radius` smoothing passes, on the default [`Engine`].
///
/// `radius == 0` returns a pixel-identical copy.
///
/// # Errors
///
/// [`OpsError::InvalidParameter`] if `radius` is negative.
pub fn box_blur<S: PixelSource + ?Sized>(src: &S, radius: i32) -> OpsResult<TaggedImage> {
    box_blur_with(&Engine::default(), src, radius)
}

/// [`box_blur`] with an explicit engine.
pub fn box_blur_with<S: PixelSource + ?Sized>(
    engine: &Engine,
    src: &S,
    radius: i32,
) -> OpsResult<TaggedImage> {
    if radius < 0 {
        return Err(OpsError::InvalidParameter(format!(
            "blur radius must be >= 0, got {}",
            radius
        )));
    }

    let bounds = src.bounds();
    trace!(width = bounds.width(), height = bounds.height(), radius, "box_blur");
    debug!(width = bounds.width(), height = bounds.height(), radius, "Applying box blur");

    let mut dst = map_pixels(engine, bounds, |x, y| src.sample(x, y).narrow());
    for pass in 0..radius {
        trace!(pass, "box_blur pass");
        smooth_pass(engine, &mut dst);
    }

    Ok(TaggedImage::new(dst, src.format()))
}

/// One smoothing pass over the interior of `buf`.
fn smooth_pass(engine: &Engine, buf: &mut PixelBuffer) {
    let width = buf.width() as usize;
    let height = buf.height() as usize;
    if width < 2 || height < 2 {
        return;
    }

    let prev = buf.clone();
    let b = prev.bounds();
    // The last row is excluded from the ranges and stays as it is.
    let ranges = engine.row_ranges(height - 1);

    for_each_rows(buf, &ranges, |rows, bytes| {
        let first = rows.start;
        for y in rows {
            let gy = b.min_y + y as i32;
            for x in 0..width - 1 {
                let gx = b.min_x + x as i32;
                let c = prev.sample(gx, gy).to_u32();
                // gx + 1 and gy + 1 stay inside the image; the left and
                // upper neighbors may fall below i32::MIN.
                let l = gx.checked_sub(1).map_or([0; 4], |x| prev.sample(x, gy).to_u32());
                let r = prev.sample(gx + 1, gy).to_u32();
                let u = gy.checked_sub(1).map_or([0; 4], |y| prev.sample(gx, y).to_u32());
                let d = prev.sample(gx, gy + 1).to_u32();

                let i = local_offset(x, y, first, width);
                for ch in 0..BYTES_PER_PIXEL {
                    bytes[i + ch] = narrow((c[ch] * 4 + l[ch] + r[ch] + u[ch] + d[ch]) / 8);
                }
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use rasterfx_core::{Bounds, Rgba8};

    #[test]
    fn test_negative_radius() {
        let img = PixelBuffer::new(Bounds::from_size(2, 2));
        let err = box_blur(&img, -3).unwrap_err();
        assert!(err.to_string().contains("-3"));
    }

    #[test]
    fn test_zero_radius_copies() {
        let mut img = PixelBuffer::new(Bounds::from_size(3, 3));
        img.set_pixel(1, 1, Rgba8::new(1, 2, 3, 4));
        let out = box_blur(&img, 0).unwrap();
        assert_eq!(out.buffer(), &img);
    }

    #[test]
    fn test_single_pass_center() {
        // Lone opaque white pixel at (1,1) on a 3x3 transparent image.
        let mut img = PixelBuffer::new(Bounds::from_size(3, 3));
        img.set_pixel(1, 1, Rgba8::opaque(255, 255, 255));
        let out = box_blur_with(&Engine::new().with_parallelism(2), &img, 1).unwrap();
        let buf = out.buffer();

        // 4 * 65535 / 8 = 32767 >> 8 = 127
        assert_eq!(buf.pixel(1, 1), Rgba8::new(127, 127, 127, 127));
        // 65535 / 8 = 8191 >> 8 = 31
        assert_eq!(buf.pixel(0, 1), Rgba8::new(31, 31, 31, 31));
        assert_eq!(buf.pixel(1, 0), Rgba8::new(31, 31, 31, 31));
        // Last column and last row are never smoothed.
        assert_eq!(buf.pixel(2, 1), Rgba8::TRANSPARENT);
        assert_eq!(buf.pixel(1, 2), Rgba8::TRANSPARENT);
        assert_eq!(buf.pixel(0, 0), Rgba8::TRANSPARENT);
    }

    #[test]
    fn test_second_pass_reads_first() {
        let mut img = PixelBuffer::new(Bounds::from_size(3, 3));
        img.set_pixel(1, 1, Rgba8::opaque(255, 255, 255));
        let out = box_blur_with(&Engine::new().with_parallelism(2), &img, 2).unwrap();
        let buf = out.buffer();

        // Pass 1 leaves (1,1) = 127, (0,1) = (1,0) = 31, widened x257 for pass 2.
        // (1,1): (4 * 32639 + 7967 + 7967) / 8 = 18311 >> 8 = 71
        assert_eq!(buf.pixel(1, 1), Rgba8::new(71, 71, 71, 71));
        // (0,1): (4 * 7967 + 32639) / 8 = 8063 >> 8 = 31
        assert_eq!(buf.pixel(0, 1), Rgba8::new(31, 31, 31, 31));
        assert_eq!(buf.pixel(1, 0), Rgba8::new(31, 31, 31, 31));
        // (0,0): (7967 + 7967) / 8 = 1991 >> 8 = 7, zero if pass 2 re-read the seed
        assert_eq!(buf.pixel(0, 0), Rgba8::new(7, 7, 7, 7));
        assert_eq!(buf.pixel(2, 2), Rgba8::TRANSPARENT);
    }

    #[test]
    fn test_origin_at_coordinate_minimum() {
        let bounds = Bounds::new(i32::MIN, i32::MIN, i32::MIN + 3, i32::MIN + 3);
        let mut img = PixelBuffer::new(bounds);
        img.set_pixel(i32::MIN + 1, i32::MIN + 1, Rgba8::opaque(255, 255, 255));
        let out = box_blur(&img, 1).unwrap();
        let buf = out.buffer();

        assert_eq!(buf.bounds(), bounds);
        assert_eq!(buf.pixel(i32::MIN + 1, i32::MIN + 1), Rgba8::new(127, 127, 127, 127));
        assert_eq!(buf.pixel(i32::MIN, i32::MIN + 1), Rgba8::new(31, 31, 31, 31));
        assert_eq!(buf.pixel(i32::MIN, i32::MIN), Rgba8::TRANSPARENT);
    }

    #[test]
    fn test_edge_pixels_keep_seed() {
        let img = PixelBuffer::filled(Bounds::from_size(5, 4), Rgba8::opaque(200, 100, 50));
        let out = box_blur(&img, 3).unwrap();
        for y in 0..4 {
            assert_eq!(out.buffer().pixel(4, y), Rgba8::opaque(200, 100, 50));
        }
        for x in 0..5 {
            assert_eq!(out.buffer().pixel(x, 3), Rgba8::opaque(200, 100, 50));
        }
    }

    #[test]
    fn test_thin_images_unchanged() {
        let img = PixelBuffer::filled(Bounds::from_size(1, 6), Rgba8::opaque(9, 9, 9));
        assert_eq!(box_blur(&img, 4).unwrap().buffer(), &img);
    }

    #[test]
    fn test_independent_of_worker_count() {
        let mut img = PixelBuffer::new(Bounds::from_size(13, 11));
        for y in 0..11 {
            for x in 0..13 {
                img.set_pixel(x, y, Rgba8::new((x * 19) as u8, (y * 23) as u8, (x * y) as u8, 255));
            }
        }
        let one = box_blur_with(&Engine::new().with_parallelism(1), &img, 4).unwrap();
        let many = box_blur_with(&Engine::new().with_parallelism(7), &img, 4).unwrap();
        assert_eq!(one, many);
    }
}
