//! Procedural height-field terrain: seeded Perlin elevation, tiered colors, and PNG export.

mod color;
mod config;
mod error;
mod grid;
mod heightmap;
mod seed;

pub mod raster;

pub use color::{ColorTier, TierColor, elevation_alpha, evaluate_color};
pub use config::HeightFieldConfig;
pub use error::TerrainError;
pub use grid::{Cell, Grid};
pub use heightmap::HeightFieldGenerator;
pub use raster::{GridRasterExporter, PixelBuffer, export_to_file};
pub use seed::{SEED_RANGE, Seed};
