//! Error types for height-field generation and raster export.

/// Errors produced while validating a configuration or exporting a grid.
#[derive(Debug, thiserror::Error)]
pub enum TerrainError {
    /// A configuration value is out of range or would produce NaN.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The PNG codec could not serialize the pixel buffer.
    #[error("failed to encode image: {0}")]
    EncodingFailure(#[source] png::EncodingError),

    /// The PNG codec could not read an image back.
    #[error("failed to decode image: {0}")]
    DecodingFailure(#[source] png::DecodingError),

    /// An image decoded fine but is not 8-bit RGBA.
    #[error("unsupported image: {0}")]
    UnsupportedImage(String),

    /// The destination could not be written.
    #[error("failed to write image: {0}")]
    WriteFailure(#[source] std::io::Error),

    /// An image file could not be read.
    #[error("failed to read image: {0}")]
    ReadFailure(#[source] std::io::Error),

    /// Serialized grid cells disagree with the grid's size or storage order.
    #[error("inconsistent grid: {0}")]
    InconsistentGrid(String),

    /// A raw pixel slice does not match the stated dimensions.
    #[error("pixel buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch {
        /// `width * height * 4`.
        expected: usize,
        /// Length of the slice that was supplied.
        actual: usize,
    },
}
