//! Configuration sections with defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tessera_terrain::HeightFieldConfig;

use crate::error::ConfigError;

const CONFIG_FILE: &str = "config.ron";
const APP_NAME: &str = "tessera";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Grid size, height range and sampling mode.
    pub terrain: HeightFieldConfig,
    /// Seed and threading for a generation run.
    pub generation: GenerationConfig,
    /// Output image settings.
    pub export: ExportConfig,
    /// Logging settings.
    pub debug: DebugConfig,
}

/// Settings for one generation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GenerationConfig {
    /// Fixed seed for reproducible terrain. `None` draws a fresh seed each run.
    pub seed: Option<u64>,
    /// Worker threads for cell evaluation. 0 = one per logical CPU, 1 = no workers.
    pub worker_threads: usize,
}

/// Image export settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ExportConfig {
    /// Destination of the PNG.
    pub output_path: PathBuf,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level filter (e.g., "debug", "info", "tessera_terrain=trace").
    pub log_level: String,
    /// Also write JSON logs to the log directory.
    pub log_to_file: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from("terrain.png"),
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_to_file: false,
        }
    }
}

/// Platform configuration directory for Tessera (e.g. `~/.config/tessera`).
pub fn default_config_dir() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|base| base.join(APP_NAME))
        .ok_or(ConfigError::NoConfigDir)
}

impl Config {
    /// Location of `config.ron` inside `config_dir`.
    pub fn file_path(config_dir: &Path) -> PathBuf {
        config_dir.join(CONFIG_FILE)
    }

    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = Self::file_path(config_dir);

        if config_path.exists() {
            let config = Self::read(&config_path)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(|source| ConfigError::Write {
            path: config_dir.to_path_buf(),
            source,
        })?;

        let config_path = Self::file_path(config_dir);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized = ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::Serialize)?;

        std::fs::write(&config_path, serialized).map_err(|source| ConfigError::Write {
            path: config_path,
            source,
        })
    }

    /// Re-read the file. Returns `Some(new_config)` if it differs from `self`.
    ///
    /// Callers apply a changed `terrain` section to an existing grid with
    /// `Grid::regenerate` rather than generating a new one.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let new_config = Self::read(&Self::file_path(config_dir))?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }

    /// Check the terrain section the same way generation will.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.terrain.validate()?;
        Ok(())
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        ron::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let ron_str =
            ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new().depth_limit(3))
                .unwrap();
        assert!(ron_str.contains("width: 50"));
        assert!(ron_str.contains("relief: 15.0"));
        assert!(ron_str.contains("output_path: \"terrain.png\""));
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.generation.seed = Some(77);
        let ron_str = ron::to_string(&config).unwrap();
        let deserialized: Config = ron::from_str(&ron_str).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_section_uses_default() {
        let config: Config = ron::from_str("(terrain: (max_height: 20.0))").unwrap();
        assert_eq!(config.terrain.max_height, 20.0);
        assert_eq!(config.terrain.width, 50);
        assert_eq!(config.export, ExportConfig::default());
        assert_eq!(config.generation.seed, None);
    }

    #[test]
    fn test_extra_field_ignored() {
        let result: Result<Config, _> = ron::from_str("(future_setting: true)");
        assert!(result.is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.terrain.width = 128;
        config.terrain.use_noise_mode = false;
        config.export.output_path = PathBuf::from("out/map.png");

        config.save(dir.path()).unwrap();
        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_load_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert!(dir.path().join(CONFIG_FILE).exists());
    }

    #[test]
    fn test_reload_detects_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();

        let mut modified = config.clone();
        modified.terrain.relief = 4.0;
        modified.save(dir.path()).unwrap();

        let result = config.reload(dir.path()).unwrap();
        assert_eq!(result.unwrap().terrain.relief, 4.0);
    }

    #[test]
    fn test_reload_no_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();
        assert!(config.reload(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_invalid_ron_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "{{not valid}}").unwrap();
        let err = Config::load_or_create(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains(CONFIG_FILE));
    }

    #[test]
    fn test_validate_rejects_zero_relief() {
        let mut config = Config::default();
        config.terrain.relief = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidTerrain(_))
        ));
    }
}
