//! Padded summed-area tables (integral images)
//!
//! Each table has one extra zero row and one extra zero column, so table
//! cell `(x + 1, y + 1)` holds the sum over source cells `(0..=x, 0..=y)`.
//! The zero border lets the recurrence
//!
//! `a(x, y) = v(x, y) + a(x - 1, y) + a(x, y - 1) - a(x - 1, y - 1)`
//!
//! run without boundary branches, and lets region lookups read
//! `(low, low)` corners at index 0.
//!
//! # Accumulator range
//!
//! Totals are `u32`. A `d x d` grid of 255s sums to `d² × 255`, which must
//! stay below `2^32`; [`max_dimension_for`] gives the largest such `d`.

use crate::grid::ImageDimensions;
use crate::region::ClampedRegion;

/// Default dimension limit for either side of a grid.
pub const DEFAULT_MAX_DIMENSION: u32 = 4096;

/// Largest square side whose all-255 sum fits the `u32` accumulator.
pub const ACCUMULATOR_MAX_DIMENSION: u32 = max_dimension_for(u8::MAX as u32);

/// Largest `d` such that `d² × max_cell_value` fits in a `u32`.
///
/// A `max_cell_value` of 0 is treated as 1.
pub const fn max_dimension_for(max_cell_value: u32) -> u32 {
    let cell = if max_cell_value == 0 {
        1
    } else {
        max_cell_value as u64
    };
    let limit = u32::MAX as u64 / cell;

    // Integer square root by bisection
    let mut lo = 0u64;
    let mut hi = u16::MAX as u64;
    while lo < hi {
        let mid = (lo + hi + 1) / 2;
        if mid * mid <= limit {
            lo = mid;
        } else {
            hi = mid - 1;
        }
    }
    lo as u32
}

/// Which of the two tables a query reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    /// Sum of cell values
    Sum,
    /// Count of non-zero cells
    NonZero,
}

/// Immutable padded prefix-sum table of shape `(width + 1) × (height + 1)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegralTable {
    data: Vec<u32>,
    width: u32,
    height: u32,
}

impl IntegralTable {
    /// Width of the source grid (the table is one wider)
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of the source grid (the table is one taller)
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn stride(&self) -> usize {
        self.width as usize + 1
    }

    /// Get the padded table value at `(x, y)`.
    ///
    /// Valid indices are `0..=width` and `0..=height`; row 0 and column 0
    /// are always 0.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<u32> {
        if x > self.width || y > self.height {
            return None;
        }
        Some(self.at(x as usize, y as usize))
    }

    #[inline]
    fn at(&self, x: usize, y: usize) -> u32 {
        self.data[y * self.stride() + x]
    }

    /// Total over the whole grid (the bottom-right cell).
    #[inline]
    pub fn total(&self) -> u32 {
        self.at(self.width as usize, self.height as usize)
    }

    /// Aggregate over a clamped region with four lookups.
    ///
    /// Returns `None` if the region reaches past this table, e.g. when it
    /// was clamped against a larger grid.
    ///
    /// The lookups are paired as `(A - C) - (B - D)` so every intermediate is
    /// itself a partial region sum and cannot leave the `u32` range.
    pub fn region_sum(&self, region: &ClampedRegion) -> Option<u32> {
        let (lx, ly) = (region.low_x(), region.low_y());
        let (hx, hy) = (region.high_x(), region.high_y());
        if hx > self.width as usize || hy > self.height as usize {
            return None;
        }

        let a = self.at(hx, hy);
        let b = self.at(hx, ly);
        let c = self.at(lx, hy);
        let d = self.at(lx, ly);
        Some((a - c) - (b - d))
    }
}

/// Build the value-sum and non-zero-count tables in one pass.
///
/// `pixels` must hold at least `dims.cell_count()` bytes, row-major; extra
/// trailing bytes are ignored.
pub(crate) fn build_tables(
    pixels: &[u8],
    dims: ImageDimensions,
) -> (IntegralTable, IntegralTable) {
    let width = dims.width() as usize;
    let height = dims.height() as usize;
    let stride = width + 1;
    let len = stride * (height + 1);

    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!("build_tables", width, height).entered();

    let mut sums = vec![0u32; len];
    let mut counts = vec![0u32; len];

    for (y, row) in pixels.chunks_exact(width).take(height).enumerate() {
        let above = y * stride;
        let current = above + stride;
        for (x, &value) in row.iter().enumerate() {
            let i = current + x + 1;
            let up = above + x + 1;
            // left + (above - above_left) + value: the column term is a
            // partial column sum, so no intermediate exceeds the result
            sums[i] = sums[i - 1] + (sums[up] - sums[up - 1]) + u32::from(value);
            counts[i] = counts[i - 1] + (counts[up] - counts[up - 1]) + u32::from(value != 0);
        }
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(total = sums[len - 1], non_zero = counts[len - 1], "tables built");

    let (w, h) = (dims.width(), dims.height());
    (
        IntegralTable {
            data: sums,
            width: w,
            height: h,
        },
        IntegralTable {
            data: counts,
            width: w,
            height: h,
        },
    )
}
