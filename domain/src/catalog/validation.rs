//! Content validation for topics and catalogs.
//!
//! Nothing in a catalog is computed, so the only failure mode is bad literal
//! data: an empty field, a duplicated topic id, a half-written practice
//! question. Checks return structured issues with severity levels instead of
//! failing on the first problem, so a `check` run can report everything.
//!
//! # Examples
//!
//! ```
//! use lessons_domain::curriculum::jdbc;
//!
//! let issues = jdbc::catalog().validate();
//! assert!(issues.is_empty());
//! ```

use std::fmt;

/// Severity level of a content issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the catalog must not be served.
    Error,
    /// Non-fatal: the catalog renders, but with a visible gap.
    Warning,
}

/// Identifies a specific content issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogIssueCode {
    /// A required topic field is empty or whitespace.
    EmptyField { topic: String, field: &'static str },
    /// Two topics in the same catalog share an id.
    DuplicateTopicId(String),
    /// The catalog has no topics at all.
    EmptyCatalog,
    /// A practice question is missing one of its parts.
    IncompleteQuestion {
        topic: String,
        index: usize,
        field: &'static str,
    },
    /// A catalog-level metadata field is empty.
    EmptyCatalogField(&'static str),
    /// Another catalog with this id was already loaded.
    DuplicateCatalogId(String),
}

/// A detected issue in a topic or catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogIssue {
    pub severity: Severity,
    pub code: CatalogIssueCode,
    pub message: String,
}

impl CatalogIssue {
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Treat this issue as fatal regardless of its original severity.
    pub fn promoted(mut self) -> Self {
        self.severity = Severity::Error;
        self
    }
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{}: {}", label, self.message)
    }
}

/// Returns true if any issue is fatal.
pub fn has_errors(issues: &[CatalogIssue]) -> bool {
    issues.iter().any(CatalogIssue::is_error)
}
