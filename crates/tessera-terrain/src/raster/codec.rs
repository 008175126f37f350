//! Lossless PNG encoding of pixel buffers.
//!
//! Images use a bottom-left origin: grid row `z = 0` becomes the last image
//! row, so the picture reads the same way the terrain looks from above with
//! `+z` pointing up.

use std::io::Cursor;
use std::path::Path;

use super::pixel_buffer::PixelBuffer;
use crate::error::TerrainError;

/// Encode a buffer as an 8-bit RGBA PNG.
pub fn encode_png(buffer: &PixelBuffer) -> Result<Vec<u8>, TerrainError> {
    let row_bytes = buffer.width as usize * 4;
    let mut flipped = Vec::with_capacity(buffer.pixels.len());
    if row_bytes > 0 {
        for row in buffer.pixels.chunks_exact(row_bytes).rev() {
            flipped.extend_from_slice(row);
        }
    }

    let mut png_buf = Vec::new();
    {
        let mut encoder = png::Encoder::new(Cursor::new(&mut png_buf), buffer.width, buffer.height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder
            .write_header()
            .map_err(TerrainError::EncodingFailure)?;
        writer
            .write_image_data(&flipped)
            .map_err(TerrainError::EncodingFailure)?;
        writer.finish().map_err(TerrainError::EncodingFailure)?;
    }
    Ok(png_buf)
}

/// Decode an 8-bit RGBA PNG written by [`encode_png`].
pub fn decode_png(bytes: &[u8]) -> Result<PixelBuffer, TerrainError> {
    let decoder = png::Decoder::new(Cursor::new(bytes));
    let mut reader = decoder.read_info().map_err(TerrainError::DecodingFailure)?;
    let mut data = vec![0; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut data)
        .map_err(TerrainError::DecodingFailure)?;

    if info.color_type != png::ColorType::Rgba || info.bit_depth != png::BitDepth::Eight {
        return Err(TerrainError::UnsupportedImage(format!(
            "expected 8-bit RGBA, got {:?} at {:?}",
            info.color_type, info.bit_depth
        )));
    }

    data.truncate(info.buffer_size());
    let row_bytes = info.width as usize * 4;
    let mut pixels = Vec::with_capacity(data.len());
    if row_bytes > 0 {
        for row in data.chunks_exact(row_bytes).rev() {
            pixels.extend_from_slice(row);
        }
    }
    PixelBuffer::from_raw(info.width, info.height, pixels)
}

/// Encode `buffer` and write it to `path`, replacing any existing file.
pub fn write_png(buffer: &PixelBuffer, path: &Path) -> Result<(), TerrainError> {
    let bytes = encode_png(buffer)?;
    std::fs::write(path, &bytes).map_err(TerrainError::WriteFailure)?;
    tracing::info!(
        path = %path.display(),
        width = buffer.width,
        height = buffer.height,
        bytes = bytes.len(),
        "wrote terrain image"
    );
    Ok(())
}

/// Read and decode a PNG from `path`.
pub fn read_png(path: &Path) -> Result<PixelBuffer, TerrainError> {
    let bytes = std::fs::read(path).map_err(TerrainError::ReadFailure)?;
    decode_png(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_buffer() -> PixelBuffer {
        let mut buffer = PixelBuffer::new(3, 2);
        buffer.set_pixel(0, 0, [0x00, 0x90, 0x40, 0x6F]);
        buffer.set_pixel(2, 0, [0x20, 0x30, 0xA0, 0xFF]);
        buffer.set_pixel(1, 1, [0xD0, 0x50, 0x00, 0xEF]);
        buffer
    }

    #[test]
    fn test_png_signature() {
        let bytes = encode_png(&sample_buffer()).unwrap();
        assert_eq!(&bytes[..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
    }

    #[test]
    fn test_decode_restores_pixels() {
        let buffer = sample_buffer();
        let decoded = decode_png(&encode_png(&buffer).unwrap()).unwrap();
        assert_eq!(decoded, buffer);
    }

    #[test]
    fn test_bottom_row_is_z_zero() {
        let buffer = sample_buffer();
        let bytes = encode_png(&buffer).unwrap();

        let decoder = png::Decoder::new(Cursor::new(bytes.as_slice()));
        let mut reader = decoder.read_info().unwrap();
        let mut data = vec![0; reader.output_buffer_size()];
        reader.next_frame(&mut data).unwrap();

        // Image row 1 (the last) holds z = 0.
        let last_row_start = 3 * 4;
        assert_eq!(&data[last_row_start..last_row_start + 4], &[0x00, 0x90, 0x40, 0x6F]);
    }

    #[test]
    fn test_garbage_fails_to_decode() {
        let err = decode_png(b"definitely not a png").unwrap_err();
        assert!(matches!(err, TerrainError::DecodingFailure(_)));
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("terrain.png");
        let err = write_png(&sample_buffer(), &path).unwrap_err();
        assert!(matches!(err, TerrainError::WriteFailure(_)));
    }

    #[test]
    fn test_write_and_read_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("terrain.png");
        write_png(&sample_buffer(), &path).unwrap();
        assert_eq!(read_png(&path).unwrap(), sample_buffer());
    }
}
