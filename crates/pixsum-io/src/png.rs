//! PNG plane support
//!
//! Only 8-bit grayscale PNGs map onto a plane; other color types and bit
//! depths are rejected rather than converted.

use crate::{IoError, IoResult};
use pixsum_core::GrayPlane;
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};

/// Read an 8-bit grayscale PNG
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<GrayPlane> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::IDENTITY);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let info = reader.info();
    let width = info.width;
    let height = info.height;
    let color_type = info.color_type;
    let bit_depth = info.bit_depth;

    if (color_type, bit_depth) != (ColorType::Grayscale, BitDepth::Eight) {
        return Err(IoError::UnsupportedFormat(format!(
            "unsupported PNG format: {:?} {:?} (need 8-bit grayscale)",
            color_type, bit_depth
        )));
    }

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    // Rows may carry padding beyond `width` bytes; copy only the pixels
    let bytes_per_row = output_info.line_size;
    let row_len = width as usize;
    let mut data = Vec::with_capacity(row_len * height as usize);
    for row in buf[..output_info.buffer_size()]
        .chunks(bytes_per_row)
        .take(height as usize)
    {
        data.extend_from_slice(&row[..row_len]);
    }

    Ok(GrayPlane::from_vec(width, height, data)?)
}

/// Write a plane as an 8-bit grayscale PNG
pub fn write_png<W: Write>(plane: &GrayPlane, writer: W) -> IoResult<()> {
    let mut encoder = Encoder::new(writer, plane.width(), plane.height());
    encoder.set_color(ColorType::Grayscale);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;
    writer
        .write_image_data(plane.data())
        .map_err(|e| IoError::EncodeError(format!("PNG data error: {}", e)))?;
    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;
    Ok(())
}
