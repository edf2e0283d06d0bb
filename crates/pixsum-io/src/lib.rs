//! pixsum-io - Load and store 8-bit planes
//!
//! The summed-area tables in `pixsum-core` read any `&[u8]`; this crate is
//! the convenience layer for getting one off disk.
//!
//! Supported formats (behind cargo features):
//!
//! - **PGM** (`pnm`, default) - P2 / P5 graymaps with `maxval <= 255`
//! - **PNG** (`png-format`, default) - 8-bit grayscale only
//!
//! # Example
//!
//! ```no_run
//! use pixsum_core::PixelSum;
//!
//! let plane = pixsum_io::read_plane("density.pgm").unwrap();
//! let ps = PixelSum::from_plane(&plane).unwrap();
//! println!("mean = {}", ps.pixel_average(0, 0, 99, 99));
//! ```

mod error;
pub mod format;
#[cfg(feature = "png-format")]
pub mod png;
#[cfg(feature = "pnm")]
pub mod pnm;

pub use error::{IoError, IoResult};
pub use format::{PlaneFormat, detect_format_from_bytes};
#[cfg(feature = "png-format")]
pub use crate::png::{read_png, write_png};
#[cfg(feature = "pnm")]
pub use crate::pnm::{read_pnm, write_pnm};

use pixsum_core::GrayPlane;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Read a plane from a file, detecting the format from its header.
pub fn read_plane<P: AsRef<Path>>(path: P) -> IoResult<GrayPlane> {
    let bytes = fs::read(path)?;
    read_plane_mem(&bytes)
}

/// Read a plane from an in-memory file image.
pub fn read_plane_mem(data: &[u8]) -> IoResult<GrayPlane> {
    match detect_format_from_bytes(data)? {
        #[cfg(feature = "pnm")]
        PlaneFormat::Pgm => read_pnm(data),
        #[cfg(feature = "png-format")]
        PlaneFormat::Png => read_png(std::io::Cursor::new(data)),
        #[allow(unreachable_patterns)]
        other => Err(not_enabled(other)),
    }
}

/// Write a plane in the given format.
#[cfg_attr(
    not(all(feature = "pnm", feature = "png-format")),
    allow(unused_variables)
)]
pub fn write_plane_to<W: Write>(
    plane: &GrayPlane,
    writer: W,
    format: PlaneFormat,
) -> IoResult<()> {
    match format {
        #[cfg(feature = "pnm")]
        PlaneFormat::Pgm => write_pnm(plane, writer),
        #[cfg(feature = "png-format")]
        PlaneFormat::Png => write_png(plane, writer),
        #[allow(unreachable_patterns)]
        other => Err(not_enabled(other)),
    }
}

/// Write a plane to a file in the given format.
pub fn write_plane<P: AsRef<Path>>(
    plane: &GrayPlane,
    path: P,
    format: PlaneFormat,
) -> IoResult<()> {
    let file = File::create(path)?;
    write_plane_to(plane, BufWriter::new(file), format)
}

fn not_enabled(format: PlaneFormat) -> IoError {
    IoError::UnsupportedFormat(format!("{:?} support not enabled", format))
}
