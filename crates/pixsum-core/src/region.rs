//! Rectangle canonicalization and clamping
//!
//! Query rectangles are given by two inclusive corners in any order and any
//! range. [`Rect::clamp_to`] swaps inverted pairs, rejects rectangles that
//! miss the grid entirely, and converts the rest into a [`ClampedRegion`] in
//! the padded table's index space.

/// Rectangle given by two inclusive corners `(x0, y0)` and `(x1, y1)`.
///
/// Corners may be inverted, negative, or past the grid edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Rect {
    /// Create a rectangle from two inclusive corners.
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Swap corners so that `x0 <= x1` and `y0 <= y1`.
    pub fn canonical(self) -> Self {
        Self {
            x0: self.x0.min(self.x1),
            y0: self.y0.min(self.y1),
            x1: self.x0.max(self.x1),
            y1: self.y0.max(self.y1),
        }
    }

    /// Number of columns spanned, before clamping.
    pub fn width(&self) -> u64 {
        (i64::from(self.x1) - i64::from(self.x0)).unsigned_abs() + 1
    }

    /// Number of rows spanned, before clamping.
    pub fn height(&self) -> u64 {
        (i64::from(self.y1) - i64::from(self.y0)).unsigned_abs() + 1
    }

    /// Number of cells requested, before clamping. Always at least 1.
    ///
    /// Saturates for rectangles spanning nearly the whole `i32` plane.
    pub fn area(&self) -> u64 {
        self.width().saturating_mul(self.height())
    }

    /// Clip against a `width x height` grid.
    ///
    /// Returns `None` when the canonical rectangle does not intersect
    /// `[0, width - 1] x [0, height - 1]`, including when the grid is empty.
    pub fn clamp_to(self, width: u32, height: u32) -> Option<ClampedRegion> {
        if width == 0 || height == 0 {
            return None;
        }
        let r = self.canonical();
        let (w, h) = (i64::from(width), i64::from(height));
        let (x0, y0) = (i64::from(r.x0), i64::from(r.y0));
        let (x1, y1) = (i64::from(r.x1), i64::from(r.y1));

        if x1 < 0 || y1 < 0 || x0 > w - 1 || y0 > h - 1 {
            return None;
        }

        // Padded index space: source column x lives at table column x + 1,
        // so the inclusive high corner maps to x1 + 1 and the low corner to x0
        let region = ClampedRegion {
            low_x: x0.max(0) as usize,
            low_y: y0.max(0) as usize,
            high_x: (x1 + 1).min(w) as usize,
            high_y: (y1 + 1).min(h) as usize,
        };
        debug_assert!(
            region.element_count() > 0,
            "intersecting rectangle {self:?} clamped to an empty region {region:?}"
        );
        Some(region)
    }
}

impl From<(i32, i32, i32, i32)> for Rect {
    fn from((x0, y0, x1, y1): (i32, i32, i32, i32)) -> Self {
        Self::new(x0, y0, x1, y1)
    }
}

/// Canonical rectangle clipped to the grid, in padded table indices.
///
/// Covers source columns `low_x..high_x` and rows `low_y..high_y`
/// (half-open), i.e. table corners `(low, low)` and `(high, high)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClampedRegion {
    low_x: usize,
    low_y: usize,
    high_x: usize,
    high_y: usize,
}

impl ClampedRegion {
    #[inline]
    pub fn low_x(&self) -> usize {
        self.low_x
    }

    #[inline]
    pub fn low_y(&self) -> usize {
        self.low_y
    }

    #[inline]
    pub fn high_x(&self) -> usize {
        self.high_x
    }

    #[inline]
    pub fn high_y(&self) -> usize {
        self.high_y
    }

    /// Number of grid cells inside the clipped footprint.
    #[inline]
    pub fn element_count(&self) -> u64 {
        (self.high_x - self.low_x) as u64 * (self.high_y - self.low_y) as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_swaps() {
        let r = Rect::new(5, 7, 1, -2).canonical();
        assert_eq!(r, Rect::new(1, -2, 5, 7));
        assert_eq!(r.canonical(), r);
    }

    #[test]
    fn test_requested_area() {
        assert_eq!(Rect::new(4, 8, 7, 10).area(), 12);
        assert_eq!(Rect::new(7, 10, 4, 8).area(), 12);
        assert_eq!(Rect::new(3, 3, 3, 3).area(), 1);
        assert_eq!(Rect::new(i32::MIN, 0, i32::MAX, 0).width(), 1u64 << 32);
    }

    #[test]
    fn test_clamp_inside() {
        let region = Rect::new(1, 1, 2, 2).clamp_to(3, 3).unwrap();
        assert_eq!((region.low_x(), region.low_y()), (1, 1));
        assert_eq!((region.high_x(), region.high_y()), (3, 3));
        assert_eq!(region.element_count(), 4);
    }

    #[test]
    fn test_clamp_straddling() {
        let region = Rect::new(-100, -100, 1, 1).clamp_to(3, 3).unwrap();
        assert_eq!((region.low_x(), region.low_y()), (0, 0));
        assert_eq!((region.high_x(), region.high_y()), (2, 2));
        assert_eq!(region.element_count(), 4);

        let region = Rect::new(2, 0, 50, 0).clamp_to(3, 3).unwrap();
        assert_eq!(region.element_count(), 1);
    }

    #[test]
    fn test_clamp_outside() {
        assert_eq!(Rect::new(-3, 0, -5, 5).clamp_to(3, 3), None);
        assert_eq!(Rect::new(0, -3, 2, -1).clamp_to(3, 3), None);
        assert_eq!(Rect::new(3, 0, 10, 2).clamp_to(3, 3), None);
        assert_eq!(Rect::new(0, 3, 2, 10).clamp_to(3, 3), None);
        assert_eq!(Rect::new(i32::MAX, i32::MAX, i32::MAX, i32::MAX).clamp_to(3, 3), None);
    }

    #[test]
    fn test_clamp_empty_grid() {
        assert_eq!(Rect::new(-5, 0, 5, 0).clamp_to(0, 3), None);
        assert_eq!(Rect::new(0, -5, 0, 5).clamp_to(3, 0), None);
        assert_eq!(Rect::new(0, 0, 0, 0).clamp_to(0, 0), None);
    }

    #[test]
    fn test_element_count_wide_grid() {
        let region = Rect::new(0, 0, 70_000, 70_000)
            .clamp_to(100_000, 100_000)
            .unwrap();
        assert_eq!(region.element_count(), 70_001 * 70_001);
        let region = Rect::new(i32::MIN, i32::MIN, i32::MAX, i32::MAX)
            .clamp_to(u32::MAX, u32::MAX)
            .unwrap();
        assert_eq!(region.element_count(), (1u64 << 31) * (1u64 << 31));
    }

    #[test]
    fn test_clamp_extreme_coordinates() {
        let region = Rect::new(i32::MAX, i32::MIN, i32::MIN, i32::MAX)
            .clamp_to(4, 2)
            .unwrap();
        assert_eq!(region.element_count(), 8);
    }
}
