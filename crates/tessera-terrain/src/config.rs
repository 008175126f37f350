//! Height-field generation parameters and their validation.

use serde::{Deserialize, Serialize};

use crate::error::TerrainError;

/// Parameters controlling grid size, elevation range, and sampling mode.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeightFieldConfig {
    /// Number of cells along the x axis. Must be at least 1.
    pub width: u32,
    /// Number of cells along the z axis. Must be at least 1.
    pub depth: u32,
    /// Upper bound of every elevation. Must be finite and positive.
    pub max_height: f64,
    /// `true` samples coherent noise, `false` draws independent uniform values.
    pub use_noise_mode: bool,
    /// Divisor applied to noise sample coordinates. Larger values give
    /// gentler slopes. Must be finite and positive.
    pub relief: f64,
    /// When `false`, elevations are rounded to whole numbers.
    pub smooth_interpolation: bool,
    /// Uniform presentation scale. Carried for hosts, ignored by generation.
    pub map_scale: f64,
    /// Whether a host should attach colliders to cells. Ignored by generation.
    pub need_to_collider: bool,
}

impl Default for HeightFieldConfig {
    fn default() -> Self {
        Self {
            width: 50,
            depth: 50,
            max_height: 10.0,
            use_noise_mode: true,
            relief: 15.0,
            smooth_interpolation: false,
            map_scale: 1.0,
            need_to_collider: false,
        }
    }
}

impl HeightFieldConfig {
    /// Reject any configuration that would yield an empty grid or NaN
    /// elevations.
    pub fn validate(&self) -> Result<(), TerrainError> {
        if self.width < 1 || self.depth < 1 {
            return Err(TerrainError::InvalidConfiguration(format!(
                "grid must be at least 1x1, got {}x{}",
                self.width, self.depth
            )));
        }
        require_positive("max_height", self.max_height)?;
        require_positive("relief", self.relief)?;
        require_positive("map_scale", self.map_scale)?;
        Ok(())
    }

    /// Total number of cells in the grid.
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.depth as usize
    }

    /// Elevations strictly above this value use the vegetation tier.
    pub fn vegetation_threshold(&self) -> f64 {
        self.max_height * 0.3
    }

    /// Elevations strictly above this value (and not above vegetation) use the water tier.
    pub fn water_threshold(&self) -> f64 {
        self.max_height * 0.2
    }

    /// Elevations strictly above this value (and not above water) use the magma tier.
    pub fn magma_threshold(&self) -> f64 {
        self.max_height * 0.1
    }
}

fn require_positive(name: &str, value: f64) -> Result<(), TerrainError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(TerrainError::InvalidConfiguration(format!(
            "{name} must be finite and greater than zero, got {value}"
        )))
    }
}
