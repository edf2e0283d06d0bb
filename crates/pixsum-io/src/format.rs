//! Plane format detection
//!
//! Detects file formats by examining magic numbers in the header.

use crate::{IoError, IoResult};

/// Magic numbers for format detection
mod magic {
    /// PNG: 89 50 4E 47 0D 0A 1A 0A
    pub const PNG: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    /// PGM ASCII
    pub const PGM_ASCII: &[u8] = b"P2";

    /// PGM binary
    pub const PGM_BINARY: &[u8] = b"P5";
}

/// On-disk formats an 8-bit plane can be stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlaneFormat {
    /// Portable graymap (P2 or P5)
    Pgm,
    /// 8-bit grayscale PNG
    Png,
}

impl PlaneFormat {
    /// Conventional file extension
    pub fn extension(self) -> &'static str {
        match self {
            Self::Pgm => "pgm",
            Self::Png => "png",
        }
    }
}

/// Detect plane format from the first bytes of a file
pub fn detect_format_from_bytes(data: &[u8]) -> IoResult<PlaneFormat> {
    if data.len() < 2 {
        return Err(IoError::InvalidData(
            "not enough data to detect format".to_string(),
        ));
    }

    if data.len() >= 8 && data.starts_with(magic::PNG) {
        return Ok(PlaneFormat::Png);
    }

    if data.starts_with(magic::PGM_ASCII) || data.starts_with(magic::PGM_BINARY) {
        return Ok(PlaneFormat::Pgm);
    }

    Err(IoError::UnsupportedFormat(format!(
        "unrecognized header {:02x?}",
        &data[..data.len().min(8)]
    )))
}
