//! Catalog source adapters
//!
//! Implementations of the [`CatalogSource`](lessons_application::CatalogSource)
//! port:
//!
//! - [`BuiltinCatalogSource`]: the curricula compiled into the domain crate
//! - [`FileCatalogSource`]: catalog documents read from `.json` / `.toml` files

mod builtin;
mod file_source;

pub use builtin::BuiltinCatalogSource;
pub use file_source::{CatalogFormat, FileCatalogSource};
