//! Catalog source port
//!
//! Defines where catalogs come from. The built-in curricula and catalog
//! files on disk are both adapters of this port.

use lessons_domain::Catalog;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading catalogs from a source
#[derive(Error, Debug)]
pub enum CatalogSourceError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error("Unsupported catalog file {}: expected .json or .toml", .0.display())]
    UnsupportedFormat(PathBuf),
}

/// Provider of catalogs
///
/// Sources only read and deserialize. Validation happens once, centrally,
/// when the catalogs are registered.
pub trait CatalogSource: Send + Sync {
    /// Short name used in logs and error messages
    fn name(&self) -> &str;

    /// Read every catalog this source provides, in listing order
    fn load(&self) -> Result<Vec<Catalog>, CatalogSourceError>;
}

/// Source backed by catalogs already held in memory
pub struct StaticCatalogSource {
    name: String,
    catalogs: Vec<Catalog>,
}

impl StaticCatalogSource {
    pub fn new(name: impl Into<String>, catalogs: Vec<Catalog>) -> Self {
        Self {
            name: name.into(),
            catalogs,
        }
    }
}

impl CatalogSource for StaticCatalogSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn load(&self) -> Result<Vec<Catalog>, CatalogSourceError> {
        Ok(self.catalogs.clone())
    }
}
