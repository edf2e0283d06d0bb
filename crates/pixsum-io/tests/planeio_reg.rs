//! Plane I/O regression test
//!
//! Writes seeded planes to disk as PGM and PNG, reads them back through
//! format detection, and checks that the region statistics of the loaded
//! plane match brute-force sums over the original bytes.
//!
//! Run with:
//! ```text
//! cargo test -p pixsum-io --test planeio_reg
//! ```

use pixsum_core::{GrayPlane, PixelSum};
use pixsum_io::{PlaneFormat, read_plane, read_plane_mem, write_plane, write_plane_to};
use pixsum_test::{RegParams, naive_non_zero_count, naive_sum, sparse_random_grid};
use std::path::PathBuf;

const WIDTH: usize = 61;
const HEIGHT: usize = 37;

fn temp_path(name: &str, format: PlaneFormat) -> PathBuf {
    std::env::temp_dir().join(format!(
        "pixsum_{}_{}.{}",
        name,
        std::process::id(),
        format.extension()
    ))
}

fn check_loaded(rp: &mut RegParams, grid: &[u8], plane: &GrayPlane) {
    rp.compare_counts(WIDTH as u64, plane.width() as u64);
    rp.compare_counts(HEIGHT as u64, plane.height() as u64);

    let ps = PixelSum::from_plane(plane).expect("build from loaded plane");
    let (x1, y1) = (WIDTH - 1, HEIGHT - 1);
    rp.compare_counts(
        naive_sum(grid, WIDTH, 0, 0, x1, y1),
        ps.pixel_sum(0, 0, x1 as i32, y1 as i32) as u64,
    );
    rp.compare_counts(
        naive_non_zero_count(grid, WIDTH, 10, 5, 40, 30),
        ps.non_zero_count(40, 30, 10, 5) as u64,
    );
}

#[test]
fn planeio_reg() {
    let mut rp = RegParams::new("planeio");
    let grid = sparse_random_grid(WIDTH, HEIGHT, 11);
    let plane = GrayPlane::from_vec(WIDTH as u32, HEIGHT as u32, grid.clone()).unwrap();

    for format in [PlaneFormat::Pgm, PlaneFormat::Png] {
        eprintln!("=== {:?} ===", format);
        let path = temp_path("planeio", format);
        write_plane(&plane, &path, format).expect("write plane");
        let loaded = read_plane(&path).expect("read plane");
        let _ = std::fs::remove_file(&path);
        check_loaded(&mut rp, &grid, &loaded);

        let mut encoded = Vec::new();
        write_plane_to(&plane, &mut encoded, format).expect("encode plane");
        let loaded = read_plane_mem(&encoded).expect("decode plane");
        check_loaded(&mut rp, &grid, &loaded);

        let summary = format!(
            "{:?}: {} bytes encoded, {}x{} loaded\n",
            format,
            encoded.len(),
            loaded.width(),
            loaded.height()
        );
        rp.write_display_text(format.extension(), &summary)
            .expect("write encode summary");
    }

    assert!(rp.cleanup());
}

#[test]
fn planeio_missing_file() {
    let path = temp_path("does_not_exist", PlaneFormat::Pgm);
    assert!(matches!(
        read_plane(&path),
        Err(pixsum_io::IoError::Io(_))
    ));
}
