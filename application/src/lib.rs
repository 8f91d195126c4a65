//! Application layer for lessons
//!
//! This crate contains the catalog registry, use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod registry;
pub mod use_cases;

// Re-export commonly used types
pub use ports::catalog_source::{CatalogSource, CatalogSourceError, StaticCatalogSource};
pub use registry::{CatalogRegistry, CatalogRegistryBuilder};
pub use use_cases::browse_catalog::BrowseCatalogUseCase;
pub use use_cases::load_catalogs::{
    CatalogReport, LoadCatalogsError, LoadCatalogsInput, LoadCatalogsOutput, LoadCatalogsUseCase,
};
