//! Domain error types

use crate::catalog::validation::CatalogIssue;
use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Catalog '{id}' is invalid: {}", summarize(.issues))]
    InvalidCatalog { id: String, issues: Vec<CatalogIssue> },

    #[error("Catalog '{0}' is registered more than once")]
    DuplicateCatalog(String),

    #[error("Catalog not found: {0}")]
    CatalogNotFound(String),

    #[error("Topic '{topic}' not found in catalog '{catalog}'")]
    TopicNotFound { catalog: String, topic: String },
}

impl DomainError {
    /// Check if this error is a failed lookup rather than bad content
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DomainError::CatalogNotFound(_) | DomainError::TopicNotFound { .. }
        )
    }
}

fn summarize(issues: &[CatalogIssue]) -> String {
    issues
        .iter()
        .map(|issue| issue.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::validation::{CatalogIssueCode, Severity};

    #[test]
    fn test_invalid_catalog_display_lists_issues() {
        let error = DomainError::InvalidCatalog {
            id: "jdbc".to_string(),
            issues: vec![
                CatalogIssue {
                    severity: Severity::Error,
                    code: CatalogIssueCode::DuplicateTopicId("intro".to_string()),
                    message: "duplicate topic id 'intro'".to_string(),
                },
                CatalogIssue {
                    severity: Severity::Error,
                    code: CatalogIssueCode::EmptyCatalog,
                    message: "catalog has no topics".to_string(),
                },
            ],
        };
        assert_eq!(
            error.to_string(),
            "Catalog 'jdbc' is invalid: duplicate topic id 'intro'; catalog has no topics"
        );
    }

    #[test]
    fn test_is_not_found_check() {
        assert!(DomainError::CatalogNotFound("sql".to_string()).is_not_found());
        assert!(
            DomainError::TopicNotFound {
                catalog: "jdbc".to_string(),
                topic: "jpa".to_string(),
            }
            .is_not_found()
        );
        assert!(!DomainError::DuplicateCatalog("jdbc".to_string()).is_not_found());
    }
}
