//! Configuration error types.

use std::path::PathBuf;

use tessera_terrain::TerrainError;

/// Errors that can occur when locating, loading, saving, or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The platform exposes no configuration directory.
    #[error("could not determine a configuration directory")]
    NoConfigDir,

    /// Failed to read the config file from disk.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the config file to disk.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse RON content.
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },

    /// Failed to serialize config to RON.
    #[error("failed to serialize config: {0}")]
    Serialize(#[source] ron::Error),

    /// The terrain section holds values generation would reject.
    #[error(transparent)]
    InvalidTerrain(#[from] TerrainError),
}
