//! pixsum-test - Regression test framework for pixsum
//!
//! Provides the [`RegParams`] regression harness plus brute-force reference
//! computations and seeded test grids.
//!
//! # Usage
//!
//! ```ignore
//! use pixsum_test::{RegParams, naive_sum};
//!
//! let mut rp = RegParams::new("pixel_sum");
//! rp.compare_counts(naive_sum(&grid, w, 0, 0, w - 1, h - 1), ps.pixel_sum(0, 0, x1, y1) as u64);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" (default) or "display"

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // pixsum-test is at crates/pixsum-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}

/// Brute-force sum over the inclusive in-grid rectangle `(x0, y0)..=(x1, y1)`.
///
/// Coordinates must be ordered and inside the grid.
pub fn naive_sum(grid: &[u8], width: usize, x0: usize, y0: usize, x1: usize, y1: usize) -> u64 {
    (y0..=y1)
        .flat_map(|y| grid[y * width + x0..=y * width + x1].iter())
        .map(|&v| u64::from(v))
        .sum()
}

/// Brute-force count of non-zero cells over an in-grid rectangle.
pub fn naive_non_zero_count(
    grid: &[u8],
    width: usize,
    x0: usize,
    y0: usize,
    x1: usize,
    y1: usize,
) -> u64 {
    (y0..=y1)
        .flat_map(|y| grid[y * width + x0..=y * width + x1].iter())
        .filter(|&&v| v != 0)
        .count() as u64
}

/// Brute-force mean over an in-grid rectangle.
pub fn naive_average(
    grid: &[u8],
    width: usize,
    x0: usize,
    y0: usize,
    x1: usize,
    y1: usize,
) -> f64 {
    // Inclusive corners: equal corners cover one cell
    let cells = (x1 - x0 + 1) * (y1 - y0 + 1);
    naive_sum(grid, width, x0, y0, x1, y1) as f64 / cells as f64
}

/// Brute-force mean of the non-zero cells, or 0 if there are none.
pub fn naive_non_zero_average(
    grid: &[u8],
    width: usize,
    x0: usize,
    y0: usize,
    x1: usize,
    y1: usize,
) -> f64 {
    let count = naive_non_zero_count(grid, width, x0, y0, x1, y1);
    if count == 0 {
        return 0.0;
    }
    naive_sum(grid, width, x0, y0, x1, y1) as f64 / count as f64
}

/// Grid of uniformly random bytes, reproducible from `seed`.
pub fn random_grid(width: usize, height: usize, seed: u64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..width * height).map(|_| rng.random::<u8>()).collect()
}

/// Grid where roughly one cell in three is a random non-zero byte.
pub fn sparse_random_grid(width: usize, height: usize, seed: u64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..width * height)
        .map(|_| {
            if rng.random_ratio(1, 3) {
                rng.random_range(1..=255u8)
            } else {
                0
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rustfmt::skip]
    const GRID: [u8; 6] = [
        0, 4, 0,
        2, 1, 0,
    ];

    #[test]
    fn test_naive_reference() {
        assert_eq!(naive_sum(&GRID, 3, 0, 0, 2, 1), 7);
        assert_eq!(naive_sum(&GRID, 3, 1, 0, 1, 1), 5);
        assert_eq!(naive_non_zero_count(&GRID, 3, 0, 0, 2, 1), 3);
        assert_eq!(naive_average(&GRID, 3, 0, 0, 2, 1), 7.0 / 6.0);
        assert_eq!(naive_non_zero_average(&GRID, 3, 0, 0, 2, 1), 7.0 / 3.0);
        assert_eq!(naive_non_zero_average(&GRID, 3, 2, 0, 2, 1), 0.0);
    }

    #[test]
    fn test_random_grid_reproducible() {
        assert_eq!(random_grid(16, 8, 42), random_grid(16, 8, 42));
        assert_ne!(random_grid(16, 8, 42), random_grid(16, 8, 43));
        assert_eq!(random_grid(5, 7, 1).len(), 35);
    }

    #[test]
    fn test_sparse_grid_density() {
        let grid = sparse_random_grid(300, 300, 7);
        let non_zero = grid.iter().filter(|&&v| v != 0).count();
        // Expect about a third; allow a wide margin
        assert!(non_zero > 20_000 && non_zero < 40_000, "non_zero = {non_zero}");
    }
}
