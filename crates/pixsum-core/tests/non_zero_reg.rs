//! Non-zero count and non-zero average regression test
//!
//! Uses a sparse grid so that most windows mix zero and non-zero cells.

use pixsum_core::{PixelSum, TableKind};
use pixsum_test::{
    RegParams, naive_non_zero_average, naive_non_zero_count, naive_sum, sparse_random_grid,
};

const WIDTH: usize = 500;
const HEIGHT: usize = 400;

const DELTA: f64 = 1e-9;

fn build() -> (Vec<u8>, PixelSum) {
    let grid = sparse_random_grid(WIDTH, HEIGHT, 0x2e70);
    let ps = PixelSum::new(Some(&grid[..]), WIDTH as i32, HEIGHT as i32).expect("build tables");
    (grid, ps)
}

#[test]
fn non_zero_count_reg() {
    let mut rp = RegParams::new("non_zero_count");
    let (grid, ps) = build();
    let w = WIDTH as i32;
    let h = HEIGHT as i32;

    // --- Test 1: single cells count 1 exactly when non-zero ---
    let mut mismatches = 0;
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            let expected = u32::from(grid[y * WIDTH + x] != 0);
            if ps.non_zero_count(x as i32, y as i32, x as i32, y as i32) != expected {
                mismatches += 1;
            }
        }
    }
    rp.compare_counts(0, mismatches);

    // --- Test 2: full grid, precomputed and via the table ---
    let precomputed = grid.iter().filter(|&&v| v != 0).count() as u64;
    rp.compare_counts(precomputed, u64::from(ps.non_zero_count(0, 0, w - 1, h - 1)));
    rp.compare_counts(precomputed, u64::from(ps.table(TableKind::NonZero).total()));
    eprintln!("  non-zero cells: {} of {}", precomputed, WIDTH * HEIGHT);

    // --- Test 3: interior and straddling rectangles ---
    let cases = [
        ((100, 75, w - 100, h - 150), (100, 75, WIDTH - 100, HEIGHT - 150)),
        ((100, 0, w + 1000, h - 1), (100, 0, WIDTH - 1, HEIGHT - 1)),
        ((0, 100, w - 1, h + 1000), (0, 100, WIDTH - 1, HEIGHT - 1)),
        ((-100, 0, w + 1000, h - 1), (0, 0, WIDTH - 1, HEIGHT - 1)),
        ((0, -100, w - 1, h - 50), (0, 0, WIDTH - 1, HEIGHT - 50)),
    ];
    for ((x0, y0, x1, y1), (vx0, vy0, vx1, vy1)) in cases {
        let expected = naive_non_zero_count(&grid, WIDTH, vx0, vy0, vx1, vy1);
        rp.compare_counts(expected, u64::from(ps.non_zero_count(x0, y0, x1, y1)));
        rp.compare_counts(expected, u64::from(ps.non_zero_count(x1, y0, x0, y1)));
    }

    // --- Test 4: rectangles missing the grid ---
    rp.compare_counts(0, u64::from(ps.non_zero_count(100, -1000, w - 25, -50)));
    rp.compare_counts(0, u64::from(ps.non_zero_count(w + 100, 10, w + 25, 50)));
    rp.compare_counts(0, u64::from(ps.non_zero_count(w + 100, h + 10, w + 150, h + 50)));
    rp.compare_counts(0, u64::from(ps.non_zero_count(-100, -10, -100, -50)));

    assert!(rp.cleanup(), "non_zero_count regression test failed");
}

#[test]
fn non_zero_average_reg() {
    let mut rp = RegParams::new("non_zero_average");
    let (grid, ps) = build();
    let w = WIDTH as i32;
    let h = HEIGHT as i32;

    // --- Test 1: single cells, zero cells included ---
    for y in (0..HEIGHT).step_by(5) {
        for x in (0..WIDTH).step_by(3) {
            let got = ps.non_zero_average(x as i32, y as i32, x as i32, y as i32);
            rp.compare_values(f64::from(grid[y * WIDTH + x]), got, 0.0);
        }
    }

    // --- Test 2: full grid ---
    let sum = naive_sum(&grid, WIDTH, 0, 0, WIDTH - 1, HEIGHT - 1);
    let count = naive_non_zero_count(&grid, WIDTH, 0, 0, WIDTH - 1, HEIGHT - 1);
    rp.compare_values(
        sum as f64 / count as f64,
        ps.non_zero_average(0, 0, w - 1, h - 1),
        DELTA,
    );

    // --- Test 3: interior and straddling rectangles ---
    let cases = [
        ((100, 75, w - 100, h - 150), (100, 75, WIDTH - 100, HEIGHT - 150)),
        ((100, 0, w + 1000, h - 1), (100, 0, WIDTH - 1, HEIGHT - 1)),
        ((0, -100, w - 1, h - 50), (0, 0, WIDTH - 1, HEIGHT - 50)),
        ((w - 3, h - 3, w + 3, h + 3), (WIDTH - 3, HEIGHT - 3, WIDTH - 1, HEIGHT - 1)),
    ];
    for ((x0, y0, x1, y1), (vx0, vy0, vx1, vy1)) in cases {
        let expected = naive_non_zero_average(&grid, WIDTH, vx0, vy0, vx1, vy1);
        rp.compare_values(expected, ps.non_zero_average(x0, y0, x1, y1), DELTA);
    }

    // --- Test 4: missing rectangles and all-zero grids ---
    rp.compare_values(0.0, ps.non_zero_average(-100, -10, -100, -50), 0.0);
    let zeros = [0u8; 4];
    let empty = PixelSum::new(Some(&zeros[..]), 2, 2).expect("build zeros");
    rp.compare_values(0.0, empty.non_zero_average(0, 0, 1, 1), 0.0);

    // --- Test 5: mixed 3x2 grid ---
    let mixed = [0u8, 4, 0, 2, 1, 0];
    let ps = PixelSum::new(Some(&mixed[..]), 3, 2).expect("build mixed");
    rp.compare_counts(3, u64::from(ps.non_zero_count(0, 0, 2, 1)));
    rp.compare_values(7.0 / 3.0, ps.non_zero_average(0, 0, 2, 1), 0.0);

    assert!(rp.cleanup(), "non_zero_average regression test failed");
}
