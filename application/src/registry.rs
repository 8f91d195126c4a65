//! Catalog registry
//!
//! The registry is the one place the rest of the application reads catalogs
//! from. It is built once at startup through [`CatalogRegistryBuilder`] and
//! then passed around by reference; it has no interior mutability.
//!
//! Every catalog is validated on registration. A catalog with a fatal issue
//! is rejected and the builder returns the error, so a caller using `?`
//! never ends up holding a partially populated registry.

use lessons_domain::{Catalog, CatalogIssue, CatalogSummary, DomainError, Topic, has_errors};
use tracing::debug;

/// Immutable, ordered set of validated catalogs
#[derive(Debug, Clone, Default)]
pub struct CatalogRegistry {
    catalogs: Vec<Catalog>,
}

impl CatalogRegistry {
    pub fn builder() -> CatalogRegistryBuilder {
        CatalogRegistryBuilder::default()
    }

    /// Catalogs in registration order
    pub fn catalogs(&self) -> &[Catalog] {
        &self.catalogs
    }

    pub fn len(&self) -> usize {
        self.catalogs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.catalogs.is_empty()
    }

    pub fn catalog(&self, id: &str) -> Result<&Catalog, DomainError> {
        self.catalogs
            .iter()
            .find(|c| c.id() == id)
            .ok_or_else(|| DomainError::CatalogNotFound(id.to_string()))
    }

    pub fn topic(&self, catalog_id: &str, topic_id: &str) -> Result<&Topic, DomainError> {
        self.catalog(catalog_id)?
            .topic(topic_id)
            .ok_or_else(|| DomainError::TopicNotFound {
                catalog: catalog_id.to_string(),
                topic: topic_id.to_string(),
            })
    }

    pub fn summaries(&self) -> Vec<CatalogSummary> {
        self.catalogs.iter().map(Catalog::summary).collect()
    }
}

/// Builder that validates catalogs as they are registered
#[derive(Debug, Default)]
pub struct CatalogRegistryBuilder {
    catalogs: Vec<Catalog>,
    strict: bool,
}

impl CatalogRegistryBuilder {
    /// Treat warnings as fatal
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Validate and add a catalog.
    ///
    /// Returns the non-fatal issues that were tolerated. Fails with
    /// [`DomainError::InvalidCatalog`] when any issue is fatal (including
    /// warnings in strict mode) and with [`DomainError::DuplicateCatalog`]
    /// when the id is already taken.
    pub fn register(&mut self, catalog: Catalog) -> Result<Vec<CatalogIssue>, DomainError> {
        if self.catalogs.iter().any(|c| c.id() == catalog.id()) {
            return Err(DomainError::DuplicateCatalog(catalog.id().to_string()));
        }

        let mut issues = catalog.validate();
        if self.strict {
            issues = issues.into_iter().map(CatalogIssue::promoted).collect();
        }

        if has_errors(&issues) {
            return Err(DomainError::InvalidCatalog {
                id: catalog.id().to_string(),
                issues: issues.into_iter().filter(CatalogIssue::is_error).collect(),
            });
        }

        debug!(
            catalog = catalog.id(),
            topics = catalog.len(),
            "Registered catalog"
        );
        self.catalogs.push(catalog);
        Ok(issues)
    }

    pub fn build(self) -> CatalogRegistry {
        CatalogRegistry {
            catalogs: self.catalogs,
        }
    }
}
