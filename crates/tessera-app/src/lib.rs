//! Tessera application: one generation run from a loaded [`Config`].

use std::path::{Path, PathBuf};

use tessera_config::{CliArgs, Config, ConfigError};
use tessera_terrain::{Grid, HeightFieldGenerator, Seed, TerrainError, export_to_file};

/// Errors surfaced by a run.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Terrain(#[from] TerrainError),
}

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub seed: Seed,
    pub cells: usize,
    pub output_path: PathBuf,
}

/// Load (or create) `config.ron` in `config_dir` and apply the command-line
/// overrides on top.
///
/// Runs before logging is installed, so callers report the result once the
/// subscriber is up.
pub fn load_config(config_dir: &Path, args: &CliArgs) -> Result<Config, AppError> {
    let mut config = Config::load_or_create(config_dir)?;
    config.apply_cli_overrides(args);
    Ok(config)
}

/// Create a generator for the terrain section, using the configured seed if
/// one is set.
pub fn build_generator(config: &Config) -> Result<HeightFieldGenerator, AppError> {
    let seed = config
        .generation
        .seed
        .map_or_else(Seed::random, Seed::from_u64);
    Ok(HeightFieldGenerator::with_seed(config.terrain.clone(), seed)?)
}

/// Evaluate every cell, on worker threads unless `worker_threads` is 1.
pub fn generate_grid(generator: &HeightFieldGenerator, worker_threads: usize) -> Grid {
    if worker_threads == 1 {
        Grid::generate(generator)
    } else {
        Grid::generate_parallel(generator, worker_threads)
    }
}

/// Validate `config`, generate a grid and write it to the configured output
/// path.
pub fn run(config: &Config) -> Result<RunSummary, AppError> {
    let _span = tracing::info_span!("run").entered();
    config.validate()?;

    let generator = build_generator(config)?;
    let seed = generator.seed();
    tracing::info!(
        seed_x = seed.x,
        seed_z = seed.z,
        noise = config.terrain.use_noise_mode,
        "generating {}x{} terrain",
        config.terrain.width,
        config.terrain.depth
    );

    let grid = generate_grid(&generator, config.generation.worker_threads);
    export_to_file(&grid, &config.export.output_path)?;

    Ok(RunSummary {
        seed,
        cells: grid.len(),
        output_path: config.export.output_path.clone(),
    })
}
