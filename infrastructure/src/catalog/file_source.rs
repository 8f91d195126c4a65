//! Catalog documents on the local file system
//!
//! Each file holds exactly one catalog, using the same field names as the
//! JSON export (`practiceQuestions`, `starterCode`). The format is chosen by
//! file extension.
//!
//! # Example
//!
//! ```toml
//! id = "sql"
//! title = "SQL"
//! description = "Querying relational data"
//! icon = "table"
//!
//! [[topics]]
//! id = "select"
//! title = "SELECT"
//! description = "Reading rows"
//! content = "..."
//! code = "SELECT * FROM books;"
//! practiceQuestions = []
//! ```

use lessons_application::{CatalogSource, CatalogSourceError};
use lessons_domain::Catalog;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Supported catalog file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Toml,
}

impl CatalogFormat {
    /// Detect the format from the file extension (case-insensitive)
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }

    fn parse(self, text: &str) -> Result<Catalog, String> {
        match self {
            Self::Json => serde_json::from_str(text).map_err(|e| e.to_string()),
            Self::Toml => toml::from_str(text).map_err(|e| e.to_string()),
        }
    }
}

/// Catalog source that reads one catalog per file, in the given order
#[derive(Debug, Clone, Default)]
pub struct FileCatalogSource {
    paths: Vec<PathBuf>,
}

impl FileCatalogSource {
    pub fn new(paths: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    fn load_file(path: &Path) -> Result<Catalog, CatalogSourceError> {
        let format = CatalogFormat::from_path(path)
            .ok_or_else(|| CatalogSourceError::UnsupportedFormat(path.to_path_buf()))?;

        let text = fs::read_to_string(path).map_err(|source| CatalogSourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = format
            .parse(&text)
            .map_err(|message| CatalogSourceError::Parse {
                path: path.to_path_buf(),
                message,
            })?;

        debug!(
            "Loaded catalog '{}' ({} topics) from {:?}",
            catalog.id(),
            catalog.len(),
            path
        );
        Ok(catalog)
    }
}

impl CatalogSource for FileCatalogSource {
    fn name(&self) -> &str {
        "files"
    }

    fn load(&self) -> Result<Vec<Catalog>, CatalogSourceError> {
        self.paths.iter().map(|p| Self::load_file(p)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lessons_domain::curriculum::jdbc;

    const SQL_TOML: &str = r#"
id = "sql"
title = "SQL"
description = "Querying relational data"
icon = "table"

[[topics]]
id = "select"
title = "SELECT"
description = "Reading rows"
content = "SELECT picks the columns you want."
code = "SELECT title FROM books;"

[[topics.practiceQuestions]]
question = "Select every book title"
hint = "Use SELECT with a single column"
starterCode = "SELECT"

[[topics]]
id = "joins"
title = "Joins"
description = "Combining tables"
content = "JOIN matches rows from two tables."
code = "SELECT * FROM books JOIN authors ON books.author_id = authors.id;"
practiceQuestions = []
"#;

    #[test]
    fn test_format_detection() {
        assert_eq!(CatalogFormat::from_path(Path::new("a.json")), Some(CatalogFormat::Json));
        assert_eq!(CatalogFormat::from_path(Path::new("a.TOML")), Some(CatalogFormat::Toml));
        assert_eq!(CatalogFormat::from_path(Path::new("a.yaml")), None);
        assert_eq!(CatalogFormat::from_path(Path::new("catalog")), None);
    }

    #[test]
    fn test_load_toml_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sql.toml");
        fs::write(&path, SQL_TOML).unwrap();

        let catalogs = FileCatalogSource::new([&path]).load().unwrap();
        assert_eq!(catalogs.len(), 1);
        let sql = &catalogs[0];
        assert_eq!(sql.id(), "sql");
        assert_eq!(sql.topic_ids(), vec!["select", "joins"]);
        assert_eq!(
            sql.topics()[0].practice_questions()[0].starter_code(),
            "SELECT"
        );
        assert!(sql.validate().is_empty());
    }

    #[test]
    fn test_json_export_loads_back_equal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jdbc.json");
        fs::write(&path, serde_json::to_string_pretty(jdbc::catalog()).unwrap()).unwrap();

        let catalogs = FileCatalogSource::new([&path]).load().unwrap();
        assert_eq!(&catalogs[0], jdbc::catalog());
    }

    #[test]
    fn test_files_load_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let toml_path = dir.path().join("sql.toml");
        let json_path = dir.path().join("jdbc.json");
        fs::write(&toml_path, SQL_TOML).unwrap();
        fs::write(&json_path, serde_json::to_string(jdbc::catalog()).unwrap()).unwrap();

        let ids: Vec<_> = FileCatalogSource::new([&json_path, &toml_path])
            .load()
            .unwrap()
            .iter()
            .map(|c| c.id().to_string())
            .collect();
        assert_eq!(ids, vec!["jdbc", "sql"]);
    }

    #[test]
    fn test_missing_field_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(
            &path,
            r#"{"id": "x", "title": "X", "description": "d", "topics": []}"#,
        )
        .unwrap();

        let err = FileCatalogSource::new([&path]).load().unwrap_err();
        assert!(matches!(err, CatalogSourceError::Parse { .. }));
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = FileCatalogSource::new([dir.path().join("absent.json")])
            .load()
            .unwrap_err();
        assert!(matches!(err, CatalogSourceError::Io { .. }));
    }

    #[test]
    fn test_unsupported_extension() {
        let err = FileCatalogSource::new(["lessons.yaml"]).load().unwrap_err();
        assert!(matches!(err, CatalogSourceError::UnsupportedFormat(_)));
    }
}
