//! pixsum - Region statistics for 8-bit grids
//!
//! Builds summed-area tables once from a row-major byte grid and answers
//! rectangle queries in constant time:
//!
//! - Sum of cell values
//! - Average over the in-grid footprint
//! - Count of non-zero cells
//! - Average of the non-zero cells
//!
//! Grids can also be loaded from PGM and PNG files through [`io`].
//!
//! # Example
//!
//! ```
//! use pixsum::{PixelSum, Rect};
//!
//! let grid = [
//!     0, 4, 0,
//!     2, 1, 0,
//! ];
//! let ps = PixelSum::new(Some(&grid[..]), 3, 2).unwrap();
//! assert_eq!(ps.pixel_sum(0, 0, 2, 1), 7);
//! assert_eq!(ps.non_zero_count(0, 0, 2, 1), 3);
//!
//! // Corners may be inverted or off the grid
//! let stats = ps.region_stats(Rect::new(5, 5, 1, -3));
//! assert_eq!(stats.sum, 5);
//! assert_eq!(stats.element_count, 4);
//! ```

// Re-export core types
pub use pixsum_core::*;

// Plane I/O lives in its own namespace
pub use pixsum_io as io;
