//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Tessera command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "tessera", about = "Generate a height-field terrain and export it as PNG")]
pub struct CliArgs {
    /// Cells along the x axis.
    #[arg(long)]
    pub width: Option<u32>,

    /// Cells along the z axis.
    #[arg(long)]
    pub depth: Option<u32>,

    /// Maximum elevation.
    #[arg(long)]
    pub max_height: Option<f64>,

    /// Noise sampling divisor; larger is smoother.
    #[arg(long)]
    pub relief: Option<f64>,

    /// Use uniform random elevation instead of coherent noise.
    #[arg(long, conflicts_with = "noise")]
    pub random: bool,

    /// Use coherent noise elevation.
    #[arg(long)]
    pub noise: bool,

    /// Keep fractional elevations (true) or round to whole numbers (false).
    #[arg(long)]
    pub smooth: Option<bool>,

    /// Fixed seed for reproducible terrain.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Worker threads (0 = one per CPU).
    #[arg(long)]
    pub threads: Option<usize>,

    /// Output PNG path.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.width {
            self.terrain.width = w;
        }
        if let Some(d) = args.depth {
            self.terrain.depth = d;
        }
        if let Some(h) = args.max_height {
            self.terrain.max_height = h;
        }
        if let Some(r) = args.relief {
            self.terrain.relief = r;
        }
        if args.random {
            self.terrain.use_noise_mode = false;
        } else if args.noise {
            self.terrain.use_noise_mode = true;
        }
        if let Some(smooth) = args.smooth {
            self.terrain.smooth_interpolation = smooth;
        }
        if args.seed.is_some() {
            self.generation.seed = args.seed;
        }
        if let Some(threads) = args.threads {
            self.generation.worker_threads = threads;
        }
        if let Some(ref path) = args.output {
            self.export.output_path = path.clone();
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
