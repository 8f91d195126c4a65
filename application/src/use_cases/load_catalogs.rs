//! Load catalogs use case
//!
//! Pulls catalogs from every configured [`CatalogSource`], validates them and
//! assembles the [`CatalogRegistry`]. Loading is all-or-nothing: the first
//! source error or fatal content issue aborts the whole load.

use crate::ports::catalog_source::{CatalogSource, CatalogSourceError};
use crate::registry::CatalogRegistry;
use lessons_domain::{CatalogIssue, CatalogIssueCode, DomainError, Severity, has_errors};
use std::collections::HashSet;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur while loading catalogs
#[derive(Error, Debug)]
pub enum LoadCatalogsError {
    #[error("Catalog source '{name}' failed: {source}")]
    Source {
        name: String,
        #[source]
        source: CatalogSourceError,
    },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Input for the LoadCatalogs use case
#[derive(Debug, Clone, Default)]
pub struct LoadCatalogsInput {
    /// Promote validation warnings to errors
    pub strict: bool,
}

impl LoadCatalogsInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

/// Output of a successful load
#[derive(Debug)]
pub struct LoadCatalogsOutput {
    pub registry: CatalogRegistry,
    /// Non-fatal issues that were tolerated, in source order
    pub warnings: Vec<CatalogIssue>,
}

/// Validation report for one catalog, produced by [`LoadCatalogsUseCase::inspect`]
#[derive(Debug, Clone)]
pub struct CatalogReport {
    pub source: String,
    pub catalog_id: String,
    pub issues: Vec<CatalogIssue>,
}

impl CatalogReport {
    /// Whether this catalog would be rejected by a load with the same strictness
    pub fn is_fatal(&self, strict: bool) -> bool {
        has_errors(&self.issues) || (strict && !self.issues.is_empty())
    }
}

/// Use case for building the catalog registry at startup
pub struct LoadCatalogsUseCase {
    sources: Vec<Box<dyn CatalogSource>>,
}

impl LoadCatalogsUseCase {
    pub fn new(sources: Vec<Box<dyn CatalogSource>>) -> Self {
        Self { sources }
    }

    /// Load, validate and register every catalog
    pub fn execute(&self, input: LoadCatalogsInput) -> Result<LoadCatalogsOutput, LoadCatalogsError> {
        let mut builder = CatalogRegistry::builder().strict(input.strict);
        let mut warnings = Vec::new();

        for source in &self.sources {
            let catalogs = Self::read(source.as_ref())?;
            info!(
                source = source.name(),
                catalogs = catalogs.len(),
                "Loaded catalog source"
            );

            for catalog in catalogs {
                let tolerated = builder.register(catalog)?;
                for issue in &tolerated {
                    warn!(source = source.name(), "{}", issue.message);
                }
                warnings.extend(tolerated);
            }
        }

        let registry = builder.build();
        info!(catalogs = registry.len(), "Catalog registry ready");

        Ok(LoadCatalogsOutput { registry, warnings })
    }

    /// Validate every catalog without registering anything.
    ///
    /// Unlike [`execute`](Self::execute) this does not stop at the first bad
    /// catalog; it collects all issues for reporting. Source errors still
    /// abort, since there is nothing to inspect. A catalog id seen earlier
    /// in source order is reported as an error on the later catalog.
    pub fn inspect(&self) -> Result<Vec<CatalogReport>, LoadCatalogsError> {
        let mut reports = Vec::new();
        let mut seen = HashSet::new();

        for source in &self.sources {
            for catalog in Self::read(source.as_ref())? {
                let mut issues = catalog.validate();
                if !seen.insert(catalog.id().to_string()) {
                    issues.push(CatalogIssue {
                        severity: Severity::Error,
                        code: CatalogIssueCode::DuplicateCatalogId(catalog.id().to_string()),
                        message: format!("catalog '{}' is already loaded", catalog.id()),
                    });
                }
                reports.push(CatalogReport {
                    source: source.name().to_string(),
                    catalog_id: catalog.id().to_string(),
                    issues,
                });
            }
        }

        Ok(reports)
    }

    fn read(source: &dyn CatalogSource) -> Result<Vec<lessons_domain::Catalog>, LoadCatalogsError> {
        source.load().map_err(|e| LoadCatalogsError::Source {
            name: source.name().to_string(),
            source: e,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::catalog_source::StaticCatalogSource;
    use lessons_domain::curriculum::jdbc;
    use lessons_domain::{Catalog, PracticeQuestion, Topic};
    use std::path::PathBuf;

    struct FailingSource;

    impl CatalogSource for FailingSource {
        fn name(&self) -> &str {
            "broken"
        }

        fn load(&self) -> Result<Vec<Catalog>, CatalogSourceError> {
            Err(CatalogSourceError::UnsupportedFormat(PathBuf::from("lessons.yaml")))
        }
    }

    fn topic(id: &str) -> Topic {
        Topic::new(id, "Title", "Description")
            .with_content("Content")
            .with_code("Code")
    }

    fn builtin() -> Box<dyn CatalogSource> {
        Box::new(StaticCatalogSource::new("builtin", vec![jdbc::catalog().clone()]))
    }

    #[test]
    fn test_loads_builtin_catalog() {
        let output = LoadCatalogsUseCase::new(vec![builtin()])
            .execute(LoadCatalogsInput::new())
            .unwrap();
        assert_eq!(output.registry.len(), 1);
        assert!(output.warnings.is_empty());
        assert_eq!(output.registry.catalog("jdbc").unwrap(), jdbc::catalog());
    }

    #[test]
    fn test_loading_twice_is_deep_equal() {
        let use_case = LoadCatalogsUseCase::new(vec![builtin()]);
        let first = use_case.execute(LoadCatalogsInput::new()).unwrap();
        let second = use_case.execute(LoadCatalogsInput::new()).unwrap();
        assert_eq!(first.registry.catalogs(), second.registry.catalogs());
    }

    #[test]
    fn test_source_error_aborts_load() {
        let err = LoadCatalogsUseCase::new(vec![builtin(), Box::new(FailingSource)])
            .execute(LoadCatalogsInput::new())
            .unwrap_err();
        assert!(matches!(err, LoadCatalogsError::Source { ref name, .. } if name == "broken"));
    }

    #[test]
    fn test_invalid_catalog_aborts_load() {
        let broken = Catalog::new("broken", "Broken", "d", "book")
            .with_topic(topic("a"))
            .with_topic(Topic::new("b", "", "d"));
        let err = LoadCatalogsUseCase::new(vec![
            builtin(),
            Box::new(StaticCatalogSource::new("extra", vec![broken])),
        ])
        .execute(LoadCatalogsInput::new())
        .unwrap_err();
        assert!(matches!(
            err,
            LoadCatalogsError::Domain(DomainError::InvalidCatalog { ref id, .. }) if id == "broken"
        ));
    }

    #[test]
    fn test_warnings_are_collected() {
        let gappy = Catalog::new("gappy", "Gappy", "d", "book").with_topic(
            topic("a").with_practice_question(PracticeQuestion::new("Q", "H", " ")),
        );
        let use_case =
            LoadCatalogsUseCase::new(vec![Box::new(StaticCatalogSource::new("extra", vec![gappy]))]);

        let output = use_case.execute(LoadCatalogsInput::new()).unwrap();
        assert_eq!(output.warnings.len(), 1);

        assert!(use_case.execute(LoadCatalogsInput::new().strict(true)).is_err());
    }

    #[test]
    fn test_inspect_reports_every_catalog() {
        let broken = Catalog::new("broken", "Broken", "d", "book");
        let reports = LoadCatalogsUseCase::new(vec![
            builtin(),
            Box::new(StaticCatalogSource::new("extra", vec![broken])),
        ])
        .inspect()
        .unwrap();

        assert_eq!(reports.len(), 2);
        assert!(reports[0].issues.is_empty());
        assert_eq!(reports[1].catalog_id, "broken");
        assert_eq!(reports[1].source, "extra");
        assert_eq!(reports[1].issues.len(), 1);
    }

    #[test]
    fn test_inspect_flags_duplicate_catalog_id() {
        let use_case = LoadCatalogsUseCase::new(vec![
            builtin(),
            Box::new(StaticCatalogSource::new("files", vec![jdbc::catalog().clone()])),
        ]);

        let reports = use_case.inspect().unwrap();
        assert!(reports[0].issues.is_empty());
        assert_eq!(
            reports[1].issues[0].code,
            CatalogIssueCode::DuplicateCatalogId("jdbc".to_string())
        );
        assert!(reports[1].is_fatal(false));

        // check and load agree
        assert!(use_case.execute(LoadCatalogsInput::new()).is_err());
    }

    #[test]
    fn test_report_is_fatal() {
        let warning = CatalogIssue {
            severity: Severity::Warning,
            code: CatalogIssueCode::EmptyCatalog,
            message: "catalog 'x' has no topics".to_string(),
        };
        let report = |issues: Vec<CatalogIssue>| CatalogReport {
            source: "files".to_string(),
            catalog_id: "x".to_string(),
            issues,
        };

        assert!(!report(vec![]).is_fatal(true));
        assert!(!report(vec![warning.clone()]).is_fatal(false));
        assert!(report(vec![warning.clone()]).is_fatal(true));
        assert!(report(vec![warning.promoted()]).is_fatal(false));
    }
}
