//! Domain layer for lessons
//!
//! This crate contains the lesson data model, content validation and the
//! built-in curricula. It has no dependencies on infrastructure or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! - **Topic**: one lesson (prose, a code sample, practice questions)
//! - **Catalog**: a named, ordered collection of topics for one subject
//!
//! Both are plain values. They are composed once and never mutated, so a
//! catalog can be shared across threads without synchronisation.

pub mod catalog;
pub mod config;
pub mod core;
pub mod curriculum;
pub mod topic;

// Re-export commonly used types
pub use catalog::{
    Catalog, CatalogIssue, CatalogIssueCode, CatalogSummary, Severity, validation::has_errors,
};
pub use config::OutputFormat;
pub use crate::core::error::DomainError;
pub use curriculum::builtin_catalogs;
pub use topic::{PracticeQuestion, Topic};
