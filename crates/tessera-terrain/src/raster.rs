//! Conversion of a generated [`Grid`] into a PNG-ready pixel buffer.
//!
//! [`GridRasterExporter::build`] copies each cell's tier RGB and derives alpha
//! from elevation. [`export_to_file`] adds PNG encoding and the file write.

mod codec;
mod pixel_buffer;

use std::path::Path;

pub use self::pixel_buffer::PixelBuffer;
pub use codec::{decode_png, encode_png, read_png, write_png};

use crate::error::TerrainError;
use crate::grid::Grid;

/// Builds pixel buffers from grids.
#[derive(Clone, Copy, Debug, Default)]
pub struct GridRasterExporter;

impl GridRasterExporter {
    /// One pixel per cell at the cell's `(x, z)`.
    ///
    /// RGB is the cell color. Alpha is `(255 - elevation) / 255` scaled to a
    /// byte, which stays close to opaque for typical elevations.
    pub fn build(grid: &Grid) -> PixelBuffer {
        let mut buffer = PixelBuffer::new(grid.width(), grid.depth());
        for cell in grid.cells() {
            let [r, g, b] = cell.color.rgb();
            buffer.set_pixel(cell.x, cell.z, [r, g, b, pixel_alpha(cell.elevation)]);
        }
        buffer
    }

    /// Build, encode and write `grid` to `destination` as PNG.
    pub fn export_to_file(grid: &Grid, destination: &Path) -> Result<(), TerrainError> {
        let buffer = Self::build(grid);
        write_png(&buffer, destination)
    }
}

/// Export entry point: build the pixel buffer for `grid` and write it to
/// `destination` as PNG.
pub fn export_to_file(grid: &Grid, destination: impl AsRef<Path>) -> Result<(), TerrainError> {
    GridRasterExporter::export_to_file(grid, destination.as_ref())
}

fn pixel_alpha(elevation: f64) -> u8 {
    let normalized = (255.0 - elevation) / 255.0;
    (normalized * 255.0).round().clamp(0.0, 255.0) as u8
}
