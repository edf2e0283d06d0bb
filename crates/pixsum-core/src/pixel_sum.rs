//! Constant-time region statistics over an 8 bpp grid
//!
//! [`PixelSum`] is built once from a row-major byte grid and then answers
//! sum, average, non-zero count and non-zero average for any integer
//! rectangle with four table lookups.
//!
//! # Coordinates
//!
//! All corners are inclusive and may be given in either order. Rectangles
//! straddling the grid edge are clipped to the cells inside it; rectangles
//! missing the grid entirely yield 0 for every statistic. Averages divide by
//! the number of cells actually summed (the clipped footprint), so a
//! rectangle hanging off the edge averages only its in-grid cells.

use crate::error::{Error, Result};
use crate::grid::{GrayPlane, ImageDimensions};
use crate::region::Rect;
use crate::table::{
    ACCUMULATOR_MAX_DIMENSION, DEFAULT_MAX_DIMENSION, IntegralTable, TableKind, build_tables,
};

/// Options controlling construction of a [`PixelSum`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelSumOptions {
    /// Largest accepted width or height
    pub max_dimension: u32,
}

impl Default for PixelSumOptions {
    fn default() -> Self {
        Self {
            max_dimension: DEFAULT_MAX_DIMENSION,
        }
    }
}

impl PixelSumOptions {
    /// Create new options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the dimension limit
    pub fn with_max_dimension(mut self, max_dimension: u32) -> Self {
        self.max_dimension = max_dimension;
        self
    }

    /// Check that the `u32` accumulator can hold every table value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOptions`] if `max_dimension` is 0 or larger
    /// than [`ACCUMULATOR_MAX_DIMENSION`].
    pub fn validate(&self) -> Result<()> {
        if self.max_dimension == 0 {
            return Err(Error::InvalidOptions(
                "max_dimension must be positive".into(),
            ));
        }
        if self.max_dimension > ACCUMULATOR_MAX_DIMENSION {
            return Err(Error::InvalidOptions(format!(
                "max_dimension {} overflows the 32-bit accumulator (limit {})",
                self.max_dimension, ACCUMULATOR_MAX_DIMENSION
            )));
        }
        Ok(())
    }
}

/// Result of a single-table query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RegionQuery {
    /// Table aggregate over the clipped region
    pub aggregate: u32,
    /// Number of cells in the clipped region
    pub element_count: u64,
}

/// All four statistics for one rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RegionStats {
    /// Sum of cell values
    pub sum: u32,
    /// Number of cells in the clipped region
    pub element_count: u64,
    /// Number of non-zero cells
    pub non_zero_count: u32,
    /// `sum / element_count`, or 0
    pub average: f64,
    /// `sum / non_zero_count`, or 0
    pub non_zero_average: f64,
}

#[inline]
fn ratio(numerator: u32, denominator: u64) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        f64::from(numerator) / denominator as f64
    }
}

/// Precomputed summed-area tables for an 8 bpp grid.
///
/// Cloning produces an independent deep copy of both tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelSum {
    dims: ImageDimensions,
    options: PixelSumOptions,
    sums: IntegralTable,
    non_zero: IntegralTable,
}

impl PixelSum {
    /// Build tables from a row-major buffer with default options.
    ///
    /// The buffer is only read during construction; no reference to it is
    /// kept.
    ///
    /// # Errors
    ///
    /// - [`Error::NullBuffer`] if `buffer` is `None`.
    /// - [`Error::InvalidSize`] if `width` or `height` is zero or negative.
    /// - [`Error::SizeLimitExceeded`] if `width` or `height` exceeds 4096.
    /// - [`Error::BufferTooSmall`] if `buffer` holds fewer than
    ///   `width * height` bytes, including an empty slice.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixsum_core::PixelSum;
    ///
    /// let grid = [0, 4, 0, 2, 1, 0];
    /// let ps = PixelSum::new(Some(&grid[..]), 3, 2).unwrap();
    /// assert_eq!(ps.pixel_sum(0, 0, 2, 1), 7);
    /// assert_eq!(ps.non_zero_count(2, 1, 0, 0), 3);
    /// ```
    pub fn new(buffer: Option<&[u8]>, width: i32, height: i32) -> Result<Self> {
        Self::with_options(buffer, width, height, &PixelSumOptions::default())
    }

    /// Build tables from a row-major buffer.
    ///
    /// Checks run in order: options, buffer presence, dimension sign, dimension
    /// limit, buffer length. Trailing bytes past `width * height` are
    /// ignored.
    pub fn with_options(
        buffer: Option<&[u8]>,
        width: i32,
        height: i32,
        options: &PixelSumOptions,
    ) -> Result<Self> {
        options.validate()?;
        let pixels = buffer.ok_or(Error::NullBuffer)?;
        let dims = ImageDimensions::new(width, height, options.max_dimension)?;
        if pixels.len() < dims.cell_count() {
            return Err(Error::BufferTooSmall {
                expected: dims.cell_count(),
                actual: pixels.len(),
            });
        }

        let (sums, non_zero) = build_tables(pixels, dims);
        Ok(Self {
            dims,
            options: *options,
            sums,
            non_zero,
        })
    }

    /// Build tables from an owned plane with default options.
    pub fn from_plane(plane: &GrayPlane) -> Result<Self> {
        let width = i32::try_from(plane.width()).unwrap_or(i32::MAX);
        let height = i32::try_from(plane.height()).unwrap_or(i32::MAX);
        Self::new(Some(plane.data()), width, height)
    }

    /// Get the grid width
    #[inline]
    pub fn width(&self) -> u32 {
        self.dims.width()
    }

    /// Get the grid height
    #[inline]
    pub fn height(&self) -> u32 {
        self.dims.height()
    }

    /// Get the grid dimensions
    #[inline]
    pub fn dimensions(&self) -> ImageDimensions {
        self.dims
    }

    /// Get the options this instance was built with
    #[inline]
    pub fn options(&self) -> &PixelSumOptions {
        &self.options
    }

    /// Get one of the padded tables.
    #[inline]
    pub fn table(&self, kind: TableKind) -> &IntegralTable {
        match kind {
            TableKind::Sum => &self.sums,
            TableKind::NonZero => &self.non_zero,
        }
    }

    /// Query one table over a rectangle.
    ///
    /// Returns a zeroed [`RegionQuery`] when the rectangle misses the grid.
    pub fn query_rect(&self, kind: TableKind, rect: Rect) -> RegionQuery {
        rect.clamp_to(self.width(), self.height())
            .and_then(|region| {
                Some(RegionQuery {
                    aggregate: self.table(kind).region_sum(&region)?,
                    element_count: region.element_count(),
                })
            })
            .unwrap_or_default()
    }

    /// Query one table over the rectangle with corners `(x0, y0)`, `(x1, y1)`.
    #[inline]
    pub fn query(&self, kind: TableKind, x0: i32, y0: i32, x1: i32, y1: i32) -> RegionQuery {
        self.query_rect(kind, Rect::new(x0, y0, x1, y1))
    }

    /// Sum of cell values in the rectangle.
    pub fn pixel_sum(&self, x0: i32, y0: i32, x1: i32, y1: i32) -> u32 {
        self.query(TableKind::Sum, x0, y0, x1, y1).aggregate
    }

    /// Mean cell value over the in-grid part of the rectangle, or 0.
    pub fn pixel_average(&self, x0: i32, y0: i32, x1: i32, y1: i32) -> f64 {
        let q = self.query(TableKind::Sum, x0, y0, x1, y1);
        ratio(q.aggregate, q.element_count)
    }

    /// Number of non-zero cells in the rectangle.
    pub fn non_zero_count(&self, x0: i32, y0: i32, x1: i32, y1: i32) -> u32 {
        self.query(TableKind::NonZero, x0, y0, x1, y1).aggregate
    }

    /// Mean of the non-zero cells in the rectangle, or 0 if there are none.
    pub fn non_zero_average(&self, x0: i32, y0: i32, x1: i32, y1: i32) -> f64 {
        self.region_stats(Rect::new(x0, y0, x1, y1))
            .non_zero_average
    }

    /// All statistics for a rectangle from a single clamp.
    pub fn region_stats(&self, rect: Rect) -> RegionStats {
        let Some(region) = rect.clamp_to(self.width(), self.height()) else {
            return RegionStats::default();
        };
        let (Some(sum), Some(non_zero_count)) = (
            self.sums.region_sum(&region),
            self.non_zero.region_sum(&region),
        ) else {
            return RegionStats::default();
        };
        let element_count = region.element_count();
        RegionStats {
            sum,
            element_count,
            non_zero_count,
            average: ratio(sum, element_count),
            non_zero_average: ratio(sum, u64::from(non_zero_count)),
        }
    }
}
