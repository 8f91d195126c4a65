//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod browse_catalog;
pub mod load_catalogs;
