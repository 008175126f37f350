//! A flat RGBA8 pixel buffer addressed by grid coordinates.

use crate::error::TerrainError;

/// RGBA pixels for a `width × height` grid, stored row by row with `z = 0`
/// first. Pixel `(x, z)` corresponds to grid cell `(x, z)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    /// Pixels along x.
    pub width: u32,
    /// Pixels along z.
    pub height: u32,
    /// Length = `width * height * 4`.
    pub pixels: Vec<u8>,
}

impl PixelBuffer {
    /// A fully transparent black buffer.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 4],
        }
    }

    /// Wrap raw RGBA bytes, checking the length against the dimensions.
    pub fn from_raw(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, TerrainError> {
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(TerrainError::BufferSizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    fn index(&self, x: u32, z: u32) -> usize {
        (z as usize * self.width as usize + x as usize) * 4
    }

    /// Set one pixel.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `z >= height`.
    pub fn set_pixel(&mut self, x: u32, z: u32, rgba: [u8; 4]) {
        let idx = self.index(x, z);
        self.pixels[idx..idx + 4].copy_from_slice(&rgba);
    }

    /// Read one pixel.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `z >= height`.
    pub fn get_pixel(&self, x: u32, z: u32) -> [u8; 4] {
        let idx = self.index(x, z);
        [
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]
    }

    /// Returns `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
