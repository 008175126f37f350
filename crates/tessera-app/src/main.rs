//! Command-line entry point: load config, apply CLI overrides, generate, export.
//!
//! Run with `cargo run -p tessera-app -- --width 128 --depth 128 -o map.png`.

use std::process::ExitCode;

use clap::Parser;
use tessera_config::{CliArgs, Config, default_config_dir};
use tracing::{error, info};

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config_dir = match args.config.clone() {
        Some(dir) => dir,
        None => match default_config_dir() {
            Ok(dir) => dir,
            Err(e) => {
                eprintln!("{e}");
                return ExitCode::FAILURE;
            }
        },
    };

    let config = match tessera_app::load_config(&config_dir, &args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let log_file = tessera_log::init_logging(Some(&config_dir.join("logs")), Some(&config.debug));
    info!(path = %Config::file_path(&config_dir).display(), "using config");
    if let Some(path) = log_file {
        info!(path = %path.display(), "logging to file");
    }

    match tessera_app::run(&config) {
        Ok(summary) => {
            info!(
                cells = summary.cells,
                seed_x = summary.seed.x,
                seed_z = summary.seed.z,
                "wrote {}",
                summary.output_path.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
