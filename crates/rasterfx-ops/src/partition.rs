//! Work partitioning.
//!
//! Splits a dimension of length `L` into at most `P` contiguous,
//! non-overlapping [`WorkRange`]s:
//!
//! - `workers = min(L, P)`, so no worker ever receives an empty range;
//! - `step = L / workers` (integer division);
//! - worker `i < workers - 1` owns `[i * step, (i + 1) * step)`;
//! - the last worker owns `[(workers - 1) * step, L)` and absorbs the
//!   truncation remainder.
//!
//! The rule is fixed so that output never depends on how the scheduler runs
//! the ranges, only on which rows each range covers.
//!
//! # Example
//!
//! ```rust
//! use rasterfx_ops::partition::partition;
//!
//! let ranges = partition(10, 4);
//! assert_eq!(ranges, vec![0..2, 2..4, 4..6, 6..10]);
//! ```

use std::ops::Range;

/// Half-open interval of rows (or block-rows) owned by one worker.
pub type WorkRange = Range<usize>;

/// Number of workers used for a dimension of `len` with parallelism hint
/// `parallelism`.
///
/// Zero only when `len` is zero. A hint of zero counts as one.
#[inline]
pub fn worker_count(len: usize, parallelism: usize) -> usize {
    len.min(parallelism.max(1))
}

/// Partitions `[0, len)` into contiguous ranges, one per worker.
pub fn partition(len: usize, parallelism: usize) -> Vec<WorkRange> {
    let workers = worker_count(len, parallelism);
    if workers == 0 {
        return Vec::new();
    }

    let step = len / workers;
    (0..workers)
        .map(|i| {
            let start = i * step;
            let end = if i == workers - 1 { len } else { start + step };
            start..end
        })
        .collect()
}

/// Number of blocks of side `block` needed to cover `len` (ceiling).
///
/// # Panics
///
/// Panics if `block` is zero.
#[inline]
pub fn block_count(len: usize, block: usize) -> usize {
    len.div_ceil(block)
}
