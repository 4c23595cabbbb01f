//! Parallel dispatch of row ranges using Rayon.
//!
//! Every effect runs through the same partition / dispatch / join pattern:
//!
//! 1. [`partition`](crate::partition::partition) the rows into ranges;
//! 2. split the destination bytes into one disjoint `&mut [u8]` per range;
//! 3. run the kernel on each `(range, bytes)` pair on the Rayon pool;
//! 4. return once every range has finished.
//!
//! Because the destination is split before dispatch, workers can never
//! write the same byte, and no locking is involved.
//!
//! # Example
//!
//! ```rust
//! use rasterfx_core::{Bounds, PixelBuffer, Rgba8};
//! use rasterfx_ops::{parallel, Engine};
//!
//! let engine = Engine::new().with_parallelism(3);
//! let buf = parallel::map_pixels(&engine, Bounds::from_size(8, 5), |x, y| {
//!     Rgba8::opaque(x as u8, y as u8, 0)
//! });
//! assert_eq!(buf.pixel(7, 4), Rgba8::opaque(7, 4, 0));
//! ```

use rasterfx_core::{Bounds, PixelBuffer, Rgba8, BYTES_PER_PIXEL};
use rayon::prelude::*;
use std::ops::Range;
#[allow(unused_imports)]
use tracing::{debug, trace};

use crate::Engine;

/// Runs `kernel` over disjoint row slices of `dst`.
///
/// `ranges` are local row indices (`0` is the buffer's top row). They must
/// be sorted, contiguous and start at row 0, as produced by
/// [`partition`](crate::partition::partition); they may stop before the
/// last row, in which case the remaining rows are left untouched. Each
/// kernel call receives its row range and exactly the bytes of those rows.
pub fn for_each_rows<F>(dst: &mut PixelBuffer, ranges: &[Range<usize>], kernel: F)
where
    F: Fn(Range<usize>, &mut [u8]) + Sync,
{
    let stride = dst.stride();
    debug!(workers = ranges.len(), stride, "dispatching row ranges");

    let mut rest = dst.data_mut();
    let mut jobs = Vec::with_capacity(ranges.len());
    let mut next_row = 0;
    for rows in ranges {
        debug_assert_eq!(rows.start, next_row, "row ranges must be contiguous");
        let (head, tail) = std::mem::take(&mut rest).split_at_mut(rows.len() * stride);
        jobs.push((rows.clone(), head));
        rest = tail;
        next_row = rows.end;
    }

    jobs.into_par_iter()
        .for_each(|(rows, bytes)| kernel(rows, bytes));
}

/// Builds a new buffer by evaluating `f(x, y)` for every pixel in `bounds`.
///
/// `x` and `y` are image coordinates (offset by `bounds.min_x/min_y`). Rows
/// are partitioned with the engine's parallelism.
pub fn map_pixels<F>(engine: &Engine, bounds: Bounds, f: F) -> PixelBuffer
where
    F: Fn(i32, i32) -> Rgba8 + Sync,
{
    let mut dst = PixelBuffer::new(bounds);
    let width = bounds.width() as usize;
    let ranges = engine.row_ranges(bounds.height() as usize);

    for_each_rows(&mut dst, &ranges, |rows, bytes| {
        trace!(start = rows.start, end = rows.end, "map_pixels worker");
        let mut px = bytes.chunks_exact_mut(BYTES_PER_PIXEL);
        for y in rows {
            let gy = bounds.min_y + y as i32;
            for x in 0..width {
                let gx = bounds.min_x + x as i32;
                if let Some(out) = px.next() {
                    out.copy_from_slice(&f(gx, gy).0);
                }
            }
        }
    });

    dst
}

/// Byte offset of local pixel `(x, row)` inside a row slice that starts at
/// local row `first_row`.
#[inline]
pub(crate) fn local_offset(x: usize, row: usize, first_row: usize, width: usize) -> usize {
    ((row - first_row) * width + x) * BYTES_PER_PIXEL
}
