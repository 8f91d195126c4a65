//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod catalog;
mod output;

pub use catalog::FileCatalogConfig;
pub use output::{FileOutputConfig, FileOutputFormat};

use crate::catalog::CatalogFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Configuration validation errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("catalog.paths: unsupported catalog file {}, expected .json or .toml", .0.display())]
    UnsupportedCatalogFile(PathBuf),

    #[error("catalog.default cannot be empty")]
    EmptyDefaultCatalog,

    #[error("no catalog sources: catalog.builtin is false and catalog.paths is empty")]
    NoCatalogSources,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Catalog sources and validation policy
    pub catalog: FileCatalogConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if !self.catalog.builtin && self.catalog.paths.is_empty() {
            return Err(ConfigValidationError::NoCatalogSources);
        }

        for path in &self.catalog.paths {
            if CatalogFormat::from_path(path).is_none() {
                return Err(ConfigValidationError::UnsupportedCatalogFile(path.clone()));
            }
        }

        if let Some(default) = &self.catalog.default {
            if default.trim().is_empty() {
                return Err(ConfigValidationError::EmptyDefaultCatalog);
            }
        }

        Ok(())
    }
}
