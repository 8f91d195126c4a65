//! Built-in curricula
//!
//! Each subject lives in its own module and exposes one composed catalog
//! plus every topic under its own name.

pub mod jdbc;

use crate::catalog::Catalog;

/// Every built-in catalog, in the order they should be listed
pub fn builtin_catalogs() -> Vec<&'static Catalog> {
    vec![jdbc::catalog()]
}
