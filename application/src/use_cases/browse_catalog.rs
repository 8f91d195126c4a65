//! Browse catalog use case
//!
//! Read-only queries over a [`CatalogRegistry`]. When the caller does not
//! name a catalog, the configured default is used, falling back to the first
//! registered catalog.

use crate::registry::CatalogRegistry;
use lessons_domain::{Catalog, CatalogSummary, DomainError, Topic};
use tracing::debug;

/// Use case for listing catalogs and reading topics
pub struct BrowseCatalogUseCase<'a> {
    registry: &'a CatalogRegistry,
    default_catalog: Option<String>,
}

impl<'a> BrowseCatalogUseCase<'a> {
    pub fn new(registry: &'a CatalogRegistry) -> Self {
        Self {
            registry,
            default_catalog: None,
        }
    }

    pub fn with_default_catalog(mut self, id: impl Into<String>) -> Self {
        self.default_catalog = Some(id.into());
        self
    }

    pub fn list_catalogs(&self) -> Vec<CatalogSummary> {
        self.registry.summaries()
    }

    /// Resolve a catalog by explicit id, configured default, or first entry
    pub fn catalog(&self, id: Option<&str>) -> Result<&'a Catalog, DomainError> {
        let requested = id.or(self.default_catalog.as_deref());
        match requested {
            Some(id) => self.registry.catalog(id),
            None => self
                .registry
                .catalogs()
                .first()
                .ok_or_else(|| DomainError::CatalogNotFound("<none registered>".to_string())),
        }
    }

    pub fn list_topics(&self, catalog: Option<&str>) -> Result<&'a [Topic], DomainError> {
        Ok(self.catalog(catalog)?.topics())
    }

    pub fn show_topic(&self, catalog: Option<&str>, topic: &str) -> Result<&'a Topic, DomainError> {
        let catalog = self.catalog(catalog)?;
        debug!(catalog = catalog.id(), topic, "Showing topic");
        self.registry.topic(catalog.id(), topic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lessons_domain::curriculum::jdbc;

    fn registry() -> CatalogRegistry {
        let mut builder = CatalogRegistry::builder();
        builder.register(jdbc::catalog().clone()).unwrap();
        builder
            .register(
                Catalog::new("sql", "SQL", "Plain SQL", "table").with_topic(
                    Topic::new("select", "SELECT", "Reading rows")
                        .with_content("SELECT picks columns.")
                        .with_code("SELECT * FROM t;"),
                ),
            )
            .unwrap();
        builder.build()
    }

    #[test]
    fn test_falls_back_to_first_catalog() {
        let registry = registry();
        let browse = BrowseCatalogUseCase::new(&registry);
        assert_eq!(browse.catalog(None).unwrap().id(), "jdbc");
    }

    #[test]
    fn test_configured_default_wins_over_first() {
        let registry = registry();
        let browse = BrowseCatalogUseCase::new(&registry).with_default_catalog("sql");
        assert_eq!(browse.list_topics(None).unwrap().len(), 1);
        assert_eq!(browse.catalog(Some("jdbc")).unwrap().id(), "jdbc");
    }

    #[test]
    fn test_list_topics_in_order() {
        let registry = registry();
        let browse = BrowseCatalogUseCase::new(&registry);
        let topics = browse.list_topics(Some("jdbc")).unwrap();
        assert_eq!(topics[0].id(), "intro");
        assert_eq!(topics[1].id(), "drivers");
    }

    #[test]
    fn test_show_topic() {
        let registry = registry();
        let browse = BrowseCatalogUseCase::new(&registry);
        let topic = browse.show_topic(None, "transactions").unwrap();
        assert_eq!(topic.title(), "Transactions");

        let err = browse.show_topic(Some("sql"), "transactions").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_empty_registry_has_no_catalog() {
        let registry = CatalogRegistry::default();
        let browse = BrowseCatalogUseCase::new(&registry);
        assert!(browse.catalog(None).unwrap_err().is_not_found());
        assert!(browse.list_catalogs().is_empty());
    }
}
