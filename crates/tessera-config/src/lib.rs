//! Configuration for Tessera.
//!
//! Settings persist to disk as `config.ron`, can be overridden from the
//! command line via clap, and support reload detection for live
//! reconfiguration of an existing terrain.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{Config, DebugConfig, ExportConfig, GenerationConfig, default_config_dir};
pub use error::ConfigError;
