//! Raw 8-bit grids and validated dimensions
//!
//! A [`GrayPlane`] is an owned, row-major 8 bpp buffer. It is the
//! convenience form of the raw grid a [`PixelSum`](crate::PixelSum) reads
//! once during construction; any `&[u8]` of the right length works just as
//! well.

use crate::error::{Error, Result};

/// Width and height of a grid, validated against a dimension limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageDimensions {
    width: u32,
    height: u32,
}

impl ImageDimensions {
    /// Validate declared dimensions.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidSize`] if either dimension is zero or negative.
    /// - [`Error::SizeLimitExceeded`] if either dimension exceeds `max_dimension`.
    pub fn new(width: i32, height: i32, max_dimension: u32) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(Error::InvalidSize {
                width: width.into(),
                height: height.into(),
            });
        }
        // Both are positive here, so the casts are lossless
        let (w, h) = (width as u32, height as u32);
        if w > max_dimension || h > max_dimension {
            return Err(Error::SizeLimitExceeded {
                width: width.into(),
                height: height.into(),
                max: max_dimension,
            });
        }
        Ok(Self {
            width: w,
            height: h,
        })
    }

    /// Get the width
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of cells in the grid.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Owned 8-bit grayscale plane, stored row-major without padding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayPlane {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl GrayPlane {
    /// Create a zero-filled plane.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSize`] if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let len = Self::checked_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![0; len],
        })
    }

    /// Wrap existing row-major data.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidSize`] if either dimension is zero.
    /// - [`Error::BufferSizeMismatch`] if `data.len() != width * height`.
    pub fn from_vec(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let len = Self::checked_len(width, height)?;
        if data.len() != len {
            return Err(Error::BufferSizeMismatch {
                expected: len,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    fn checked_len(width: u32, height: u32) -> Result<usize> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidSize {
                width: width.into(),
                height: height.into(),
            });
        }
        (width as usize)
            .checked_mul(height as usize)
            .ok_or(Error::InvalidSize {
                width: width.into(),
                height: height.into(),
            })
    }

    /// Get the width
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw row-major pixel data.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Pixels of row `y`, or `None` past the last row.
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let start = y as usize * self.width as usize;
        Some(&self.data[start..start + self.width as usize])
    }

    /// Get a pixel value, or `None` if `(x, y)` is outside the plane.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[y as usize * self.width as usize + x as usize])
    }

    /// Set a pixel value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if `(x, y)` is outside the plane.
    pub fn set(&mut self, x: u32, y: u32, value: u8) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        self.data[y as usize * self.width as usize + x as usize] = value;
        Ok(())
    }

    /// Consume the plane and return its pixel data.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }
}
