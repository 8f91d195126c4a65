//! Catalog domain
//!
//! A [`Catalog`] is a named, ordered collection of topics covering one
//! subject. Validation lives in [`validation`] and is shared by every
//! catalog source.

pub mod entities;
pub mod validation;

pub use entities::{Catalog, CatalogSummary};
pub use validation::{CatalogIssue, CatalogIssueCode, Severity};
