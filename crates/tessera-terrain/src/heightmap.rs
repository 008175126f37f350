//! Single-octave Perlin height-field generator.
//!
//! Maps an integer grid coordinate to an elevation in `[0, max_height]` and a
//! tier color. In noise mode the result depends only on the coordinate, the
//! [`Seed`] and the [`HeightFieldConfig`]; in random mode every call draws a
//! fresh value.

use noise::{NoiseFn, Perlin};
use rand::Rng;

use crate::color::{TierColor, evaluate_color};
use crate::config::HeightFieldConfig;
use crate::error::TerrainError;
use crate::grid::Cell;
use crate::seed::Seed;

/// Evaluates elevation and color for grid cells.
///
/// The seed and configuration are fixed for the lifetime of a generator. Use
/// [`reconfigure`](Self::reconfigure) to apply new settings while keeping the
/// same seed.
#[derive(Clone, Debug)]
pub struct HeightFieldGenerator {
    noise: Perlin,
    seed: Seed,
    config: HeightFieldConfig,
}

impl HeightFieldGenerator {
    /// Validate `config` and draw a fresh seed.
    pub fn new(config: HeightFieldConfig) -> Result<Self, TerrainError> {
        Self::with_seed(config, Seed::random())
    }

    /// Validate `config` and use an explicit seed.
    pub fn with_seed(config: HeightFieldConfig, seed: Seed) -> Result<Self, TerrainError> {
        config.validate()?;
        tracing::debug!(
            seed_x = seed.x,
            seed_z = seed.z,
            width = config.width,
            depth = config.depth,
            "height-field generator initialized"
        );
        Ok(Self {
            noise: Perlin::new(Perlin::DEFAULT_SEED),
            seed,
            config,
        })
    }

    /// Build a generator with new settings and the same seed.
    pub fn reconfigure(&self, config: HeightFieldConfig) -> Result<Self, TerrainError> {
        Self::with_seed(config, self.seed)
    }

    pub fn seed(&self) -> Seed {
        self.seed
    }

    pub fn config(&self) -> &HeightFieldConfig {
        &self.config
    }

    /// Sample the noise field at a grid coordinate, remapped to `[0, 1]`.
    pub fn sample_noise(&self, x: u32, z: u32) -> f64 {
        let sample_x = (x as f64 + self.seed.x) / self.config.relief;
        let sample_z = (z as f64 + self.seed.z) / self.config.relief;
        let raw = self.noise.get([sample_x, sample_z]);
        ((raw + 1.0) * 0.5).clamp(0.0, 1.0)
    }

    /// Elevation of a cell, drawing from the thread RNG in random mode.
    pub fn evaluate_height(&self, x: u32, z: u32) -> f64 {
        self.evaluate_height_with(x, z, &mut rand::rng())
    }

    /// Elevation of a cell, drawing from `rng` in random mode.
    ///
    /// Noise mode never touches `rng`.
    pub fn evaluate_height_with<R: Rng + ?Sized>(&self, x: u32, z: u32, rng: &mut R) -> f64 {
        let raw = if self.config.use_noise_mode {
            self.sample_noise(x, z) * self.config.max_height
        } else {
            rng.random_range(0.0..self.config.max_height)
        };
        self.finish_height(raw)
    }

    /// Apply rounding (when smoothing is off) and clamp to `[0, max_height]`.
    ///
    /// Rounding sends ties to the even neighbour.
    pub fn finish_height(&self, raw: f64) -> f64 {
        let y = if self.config.smooth_interpolation {
            raw
        } else {
            raw.round_ties_even()
        };
        y.clamp(0.0, self.config.max_height)
    }

    /// Tier color of an elevation under this generator's configuration.
    pub fn evaluate_color(&self, elevation: f64) -> TierColor {
        evaluate_color(elevation, &self.config)
    }

    /// Elevation and color of one cell.
    pub fn evaluate(&self, x: u32, z: u32) -> Cell {
        self.evaluate_with(x, z, &mut rand::rng())
    }

    /// Elevation and color of one cell, drawing from `rng` in random mode.
    pub fn evaluate_with<R: Rng + ?Sized>(&self, x: u32, z: u32, rng: &mut R) -> Cell {
        let elevation = self.evaluate_height_with(x, z, rng);
        Cell {
            x,
            z,
            elevation,
            color: self.evaluate_color(elevation),
        }
    }
}
