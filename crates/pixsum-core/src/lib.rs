//! pixsum-core - Constant-time region statistics for 8-bit planes
//!
//! This crate builds summed-area tables (integral images) over a read-only
//! 8 bpp grid and answers rectangle queries in O(1):
//!
//! - [`PixelSum`] - Value-sum and non-zero-count tables plus the four queries
//!   (sum, average, non-zero count, non-zero average)
//! - [`IntegralTable`] - One padded prefix-sum table
//! - [`Rect`] / [`ClampedRegion`] - Query rectangles before and after clipping
//! - [`GrayPlane`] - Owned row-major 8 bpp buffer
//!
//! # Example
//!
//! ```
//! use pixsum_core::{PixelSum, Rect};
//!
//! #[rustfmt::skip]
//! let grid = [
//!     1, 0, 1,
//!     0, 1, 0,
//!     1, 0, 1,
//! ];
//! let ps = PixelSum::new(Some(&grid[..]), 3, 3).unwrap();
//!
//! assert_eq!(ps.pixel_sum(1, 1, 2, 2), 2);
//! // Corners may be inverted
//! assert_eq!(ps.pixel_sum(2, 0, 0, 2), ps.pixel_sum(0, 0, 2, 2));
//! // Rectangles outside the grid report 0
//! assert_eq!(ps.pixel_sum(-3, 0, -5, 5), 0);
//!
//! let stats = ps.region_stats(Rect::new(0, 0, 2, 2));
//! assert_eq!(stats.non_zero_count, 5);
//! ```

pub mod error;
pub mod grid;
pub mod pixel_sum;
pub mod region;
pub mod table;

pub use error::{Error, Result};
pub use grid::{GrayPlane, ImageDimensions};
pub use pixel_sum::{PixelSum, PixelSumOptions, RegionQuery, RegionStats};
pub use region::{ClampedRegion, Rect};
pub use table::{
    ACCUMULATOR_MAX_DIMENSION, DEFAULT_MAX_DIMENSION, IntegralTable, TableKind, max_dimension_for,
};
