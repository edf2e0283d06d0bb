//! PGM (Portable Graymap) support
//!
//! Reads binary (P5) and ASCII (P2) graymaps with `maxval <= 255` and
//! writes binary P5. Sample values are taken as stored; a `maxval` below
//! 255 is not rescaled.

use crate::{IoError, IoResult};
use pixsum_core::GrayPlane;
use std::io::{Read, Write};

/// Cursor over a PNM header: whitespace-separated tokens with `#` comments.
struct HeaderCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> HeaderCursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn skip_separators(&mut self) {
        while let Some(&b) = self.data.get(self.pos) {
            if b == b'#' {
                while let Some(&c) = self.data.get(self.pos) {
                    self.pos += 1;
                    if c == b'\n' || c == b'\r' {
                        break;
                    }
                }
            } else if b.is_ascii_whitespace() {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    fn token(&mut self) -> Option<&'a [u8]> {
        let data = self.data;
        self.skip_separators();
        let start = self.pos;
        while let Some(&b) = data.get(self.pos) {
            if b.is_ascii_whitespace() || b == b'#' {
                break;
            }
            self.pos += 1;
        }
        (self.pos > start).then(|| &data[start..self.pos])
    }

    fn number(&mut self, what: &str) -> IoResult<u32> {
        let token = self
            .token()
            .ok_or_else(|| IoError::InvalidData(format!("PGM header missing {what}")))?;
        std::str::from_utf8(token)
            .ok()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| {
                IoError::InvalidData(format!(
                    "PGM {what} is not a number: {:?}",
                    String::from_utf8_lossy(token)
                ))
            })
    }
}

/// Read a PGM plane (P2 or P5) from a reader.
///
/// # Errors
///
/// - [`IoError::UnsupportedFormat`] for other PNM variants or 16-bit samples.
/// - [`IoError::InvalidData`] for malformed headers or truncated data.
pub fn read_pnm<R: Read>(mut reader: R) -> IoResult<GrayPlane> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    let mut cursor = HeaderCursor::new(&bytes);
    let magic = cursor
        .token()
        .ok_or_else(|| IoError::InvalidData("empty PNM stream".to_string()))?;
    let binary = match magic {
        b"P5" => true,
        b"P2" => false,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "PNM variant {:?} is not a graymap",
                String::from_utf8_lossy(other)
            )));
        }
    };

    let width = cursor.number("width")?;
    let height = cursor.number("height")?;
    let maxval = cursor.number("maxval")?;
    if maxval == 0 || maxval > 255 {
        return Err(IoError::UnsupportedFormat(format!(
            "PGM maxval {maxval} (only 8-bit planes are supported)"
        )));
    }

    let len = width as usize * height as usize;
    let data = if binary {
        // Exactly one whitespace byte separates maxval from the raster
        let start = cursor.pos + 1;
        let raster = bytes.get(start..start + len).ok_or_else(|| {
            IoError::InvalidData(format!(
                "PGM raster truncated: expected {len} bytes, got {}",
                bytes.len().saturating_sub(start)
            ))
        })?;
        if let Some(&value) = raster.iter().find(|&&v| u32::from(v) > maxval) {
            return Err(sample_exceeds(u32::from(value), maxval));
        }
        raster.to_vec()
    } else {
        let mut data = Vec::with_capacity(len.min(bytes.len()));
        for _ in 0..len {
            let value = cursor.number("sample")?;
            let sample = u8::try_from(value).ok().filter(|&v| u32::from(v) <= maxval);
            data.push(sample.ok_or_else(|| sample_exceeds(value, maxval))?);
        }
        data
    };

    Ok(GrayPlane::from_vec(width, height, data)?)
}

fn sample_exceeds(value: u32, maxval: u32) -> IoError {
    IoError::InvalidData(format!("PGM sample {value} exceeds maxval {maxval}"))
}

/// Write a plane as binary PGM (P5) with `maxval` 255.
pub fn write_pnm<W: Write>(plane: &GrayPlane, mut writer: W) -> IoResult<()> {
    write!(writer, "P5\n{} {}\n255\n", plane.width(), plane.height())?;
    writer.write_all(plane.data())?;
    writer.flush()?;
    Ok(())
}
