//! Catalog entities

use super::validation::{CatalogIssue, CatalogIssueCode, Severity};
use crate::topic::Topic;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A named, ordered collection of topics for one subject (Aggregate Root)
///
/// `topics` keeps the exact order the records were composed in. Nothing is
/// sorted, filtered or deduplicated here; duplicates are reported by
/// [`Catalog::validate`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Catalog {
    id: String,
    title: String,
    description: String,
    icon: String,
    topics: Vec<Topic>,
}

impl Catalog {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            icon: icon.into(),
            topics: Vec::new(),
        }
    }

    /// Append one topic after the ones already composed
    pub fn with_topic(mut self, topic: Topic) -> Self {
        self.topics.push(topic);
        self
    }

    /// Append topics in iteration order
    pub fn with_topics(mut self, topics: impl IntoIterator<Item = Topic>) -> Self {
        self.topics.extend(topics);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// Find a topic by id (first match in display order)
    pub fn topic(&self, id: &str) -> Option<&Topic> {
        self.topics.iter().find(|t| t.id() == id)
    }

    /// Topic ids in display order
    pub fn topic_ids(&self) -> Vec<&str> {
        self.topics.iter().map(Topic::id).collect()
    }

    pub fn summary(&self) -> CatalogSummary {
        CatalogSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            icon: self.icon.clone(),
            topic_count: self.topics.len(),
        }
    }

    /// Validate catalog metadata, every topic, and topic id uniqueness.
    pub fn validate(&self) -> Vec<CatalogIssue> {
        let mut issues = Vec::new();

        let metadata = [
            ("id", &self.id),
            ("title", &self.title),
            ("description", &self.description),
            ("icon", &self.icon),
        ];
        for (field, value) in metadata {
            if value.trim().is_empty() {
                issues.push(CatalogIssue {
                    severity: Severity::Error,
                    code: CatalogIssueCode::EmptyCatalogField(field),
                    message: format!("catalog '{}': field '{}' is empty", self.id, field),
                });
            }
        }

        if self.topics.is_empty() {
            issues.push(CatalogIssue {
                severity: Severity::Warning,
                code: CatalogIssueCode::EmptyCatalog,
                message: format!("catalog '{}' has no topics", self.id),
            });
        }

        let mut seen = HashSet::new();
        for topic in &self.topics {
            issues.extend(topic.validate());

            if !topic.id().is_empty() && !seen.insert(topic.id()) {
                issues.push(CatalogIssue {
                    severity: Severity::Error,
                    code: CatalogIssueCode::DuplicateTopicId(topic.id().to_string()),
                    message: format!(
                        "catalog '{}': topic id '{}' is used more than once",
                        self.id,
                        topic.id()
                    ),
                });
            }
        }

        issues
    }
}

/// Catalog metadata without the topic bodies, for listing screens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSummary {
    pub id: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub topic_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topic(id: &str) -> Topic {
        Topic::new(id, format!("Title {id}"), format!("About {id}"))
            .with_content(format!("Content for {id}"))
            .with_code(format!("// code for {id}"))
    }

    fn catalog(ids: &[&str]) -> Catalog {
        Catalog::new("jdbc", "JDBC", "Java Database Connectivity", "database")
            .with_topics(ids.iter().map(|id| topic(id)))
    }

    #[test]
    fn test_topics_preserve_composition_order() {
        let catalog = catalog(&["c", "a", "b"]);
        assert_eq!(catalog.topic_ids(), vec!["c", "a", "b"]);
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_intro_and_drivers_positions() {
        let catalog = Catalog::new("jdbc", "JDBC", "d", "database")
            .with_topic(topic("intro"))
            .with_topic(topic("drivers"));
        assert_eq!(catalog.topics()[0].id(), "intro");
        assert_eq!(catalog.topics()[1].id(), "drivers");
    }

    #[test]
    fn test_removing_a_record_keeps_remaining_order() {
        let full = catalog(&["intro", "drivers", "connections"]);
        let reduced = catalog(&["intro", "connections"]);
        assert_eq!(reduced.len(), full.len() - 1);
        assert_eq!(reduced.topic_ids(), vec!["intro", "connections"]);
    }

    #[test]
    fn test_topic_lookup() {
        let catalog = catalog(&["intro", "drivers"]);
        assert_eq!(catalog.topic("drivers").map(Topic::title), Some("Title drivers"));
        assert!(catalog.topic("missing").is_none());
    }

    #[test]
    fn test_summary_counts_topics() {
        let summary = catalog(&["intro", "drivers"]).summary();
        assert_eq!(summary.id, "jdbc");
        assert_eq!(summary.icon, "database");
        assert_eq!(summary.topic_count, 2);
    }

    #[test]
    fn test_valid_catalog_has_no_issues() {
        assert!(catalog(&["intro", "drivers"]).validate().is_empty());
    }

    #[test]
    fn test_duplicate_topic_ids_are_kept_but_reported() {
        let catalog = catalog(&["intro", "intro"]);
        assert_eq!(catalog.len(), 2);

        let issues = catalog.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Error);
        assert_eq!(
            issues[0].code,
            CatalogIssueCode::DuplicateTopicId("intro".to_string())
        );
    }

    #[test]
    fn test_empty_catalog_warns() {
        let issues = catalog(&[]).validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert_eq!(issues[0].code, CatalogIssueCode::EmptyCatalog);
    }

    #[test]
    fn test_empty_icon_is_error() {
        let catalog = Catalog::new("jdbc", "JDBC", "d", "").with_topic(topic("intro"));
        let issues = catalog.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, CatalogIssueCode::EmptyCatalogField("icon"));
    }

    #[test]
    fn test_json_round_trip_is_deep_equal() {
        let catalog = catalog(&["intro", "drivers"]);
        let json = serde_json::to_string(&catalog).unwrap();
        let parsed: Catalog = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, catalog);
    }
}
