//! Elevation tiers and their colors.

use serde::{Deserialize, Serialize};

use crate::config::HeightFieldConfig;

/// An 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TierColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl TierColor {
    /// Opaque black.
    pub const BLACK: Self = Self::new(0x00, 0x00, 0x00, 0xFF);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// The color channels without alpha.
    pub const fn rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// One of four mutually exclusive elevation bands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorTier {
    /// Above 30% of max height.
    Vegetation,
    /// Above 20% of max height.
    Water,
    /// Above 10% of max height.
    Magma,
    /// Everything else.
    Bedrock,
}

impl ColorTier {
    /// Pick the tier for an elevation. Thresholds are strict, so an elevation
    /// equal to a boundary falls into the lower tier.
    pub fn classify(elevation: f64, config: &HeightFieldConfig) -> Self {
        if elevation > config.vegetation_threshold() {
            Self::Vegetation
        } else if elevation > config.water_threshold() {
            Self::Water
        } else if elevation > config.magma_threshold() {
            Self::Magma
        } else {
            Self::Bedrock
        }
    }

    /// Base RGB of the tier.
    pub const fn rgb(self) -> [u8; 3] {
        match self {
            Self::Vegetation => [0x00, 0x90, 0x40],
            Self::Water => [0x20, 0x30, 0xA0],
            Self::Magma => [0xD0, 0x50, 0x00],
            Self::Bedrock => [0x00, 0x00, 0x00],
        }
    }
}

/// Alpha byte for the upper tiers: `0xFF - floor(elevation) * 0x10`,
/// clamped to `[0, 255]`.
pub fn elevation_alpha(elevation: f64) -> u8 {
    (255.0 - elevation.floor() * 16.0).clamp(0.0, 255.0) as u8
}

/// Derive the tier color of an elevation.
///
/// Vegetation, water and magma carry [`elevation_alpha`] in their alpha
/// channel. Bedrock is always opaque black.
pub fn evaluate_color(elevation: f64, config: &HeightFieldConfig) -> TierColor {
    let tier = ColorTier::classify(elevation, config);
    if tier == ColorTier::Bedrock {
        return TierColor::BLACK;
    }
    let [r, g, b] = tier.rgb();
    TierColor::new(r, g, b, elevation_alpha(elevation))
}
