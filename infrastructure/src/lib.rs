//! Infrastructure layer for lessons
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod catalog;
pub mod config;

// Re-export commonly used types
pub use catalog::{BuiltinCatalogSource, CatalogFormat, FileCatalogSource};
pub use config::{
    ConfigLoader, ConfigValidationError, FileCatalogConfig, FileConfig, FileOutputConfig,
    FileOutputFormat,
};
