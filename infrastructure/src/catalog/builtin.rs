//! Built-in curricula as a catalog source

use lessons_application::{CatalogSource, CatalogSourceError};
use lessons_domain::{Catalog, builtin_catalogs};

/// Serves the curricula compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalogSource;

impl BuiltinCatalogSource {
    pub fn new() -> Self {
        Self
    }
}

impl CatalogSource for BuiltinCatalogSource {
    fn name(&self) -> &str {
        "builtin"
    }

    fn load(&self) -> Result<Vec<Catalog>, CatalogSourceError> {
        Ok(builtin_catalogs().into_iter().cloned().collect())
    }
}
