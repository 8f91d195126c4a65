//! Configuration file loading for lessons
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./lessons.toml` or `./.lessons.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/lessons/config.toml`
//! 4. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileCatalogConfig, FileConfig, FileOutputConfig, FileOutputFormat,
};
pub use loader::ConfigLoader;
