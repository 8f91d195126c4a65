//! Topic record entities

use crate::catalog::validation::{CatalogIssue, CatalogIssueCode, Severity};
use serde::{Deserialize, Serialize};

/// A practice exercise attached to a topic (Value Object)
///
/// All three parts are opaque text; the starter code is shown to the learner
/// as-is and never compiled or executed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PracticeQuestion {
    question: String,
    hint: String,
    starter_code: String,
}

impl PracticeQuestion {
    pub fn new(
        question: impl Into<String>,
        hint: impl Into<String>,
        starter_code: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            hint: hint.into(),
            starter_code: starter_code.into(),
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn hint(&self) -> &str {
        &self.hint
    }

    pub fn starter_code(&self) -> &str {
        &self.starter_code
    }
}

/// One lesson's display content (Entity, identified by `id`)
///
/// Built once with the `with_*` builders and read-only afterwards.
/// Deserialization rejects unknown and missing fields, so a malformed
/// record fails when it is loaded rather than when it is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Topic {
    id: String,
    title: String,
    description: String,
    content: String,
    code: String,
    practice_questions: Vec<PracticeQuestion>,
}

impl Topic {
    /// Create a topic with empty content, code and no practice questions
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            content: String::new(),
            code: String::new(),
            practice_questions: Vec::new(),
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Append a practice question; questions keep the order they were added in
    pub fn with_practice_question(mut self, question: PracticeQuestion) -> Self {
        self.practice_questions.push(question);
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

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn practice_questions(&self) -> &[PracticeQuestion] {
        &self.practice_questions
    }

    /// Check that every required field carries text.
    ///
    /// Empty required fields and practice questions without a prompt are
    /// errors. A missing hint or starter code is only a warning.
    pub fn validate(&self) -> Vec<CatalogIssue> {
        let mut issues = Vec::new();

        let required = [
            ("id", &self.id),
            ("title", &self.title),
            ("description", &self.description),
            ("content", &self.content),
            ("code", &self.code),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                issues.push(CatalogIssue {
                    severity: Severity::Error,
                    code: CatalogIssueCode::EmptyField {
                        topic: self.id.clone(),
                        field,
                    },
                    message: format!("topic '{}': field '{}' is empty", self.id, field),
                });
            }
        }

        for (index, practice) in self.practice_questions.iter().enumerate() {
            let parts = [
                ("question", &practice.question, Severity::Error),
                ("hint", &practice.hint, Severity::Warning),
                ("starterCode", &practice.starter_code, Severity::Warning),
            ];
            for (field, value, severity) in parts {
                if value.trim().is_empty() {
                    issues.push(CatalogIssue {
                        severity,
                        code: CatalogIssueCode::IncompleteQuestion {
                            topic: self.id.clone(),
                            index,
                            field,
                        },
                        message: format!(
                            "topic '{}': practice question #{} has no {}",
                            self.id,
                            index + 1,
                            field
                        ),
                    });
                }
            }
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_topic() -> Topic {
        Topic::new("intro", "Introduction", "What JDBC is")
            .with_content("JDBC is the Java database API.")
            .with_code("Connection conn = DriverManager.getConnection(url);")
            .with_practice_question(PracticeQuestion::new(
                "Open a connection",
                "Use DriverManager",
                "// your code here",
            ))
    }

    #[test]
    fn test_builder_sets_fields() {
        let topic = complete_topic();
        assert_eq!(topic.id(), "intro");
        assert_eq!(topic.title(), "Introduction");
        assert_eq!(topic.description(), "What JDBC is");
        assert!(topic.content().starts_with("JDBC"));
        assert!(topic.code().contains("DriverManager"));
        assert_eq!(topic.practice_questions().len(), 1);
        assert_eq!(topic.practice_questions()[0].hint(), "Use DriverManager");
    }

    #[test]
    fn test_practice_questions_keep_order() {
        let topic = Topic::new("t", "T", "D")
            .with_practice_question(PracticeQuestion::new("first", "h", "s"))
            .with_practice_question(PracticeQuestion::new("second", "h", "s"));
        let prompts: Vec<_> = topic
            .practice_questions()
            .iter()
            .map(|q| q.question())
            .collect();
        assert_eq!(prompts, vec!["first", "second"]);
    }

    #[test]
    fn test_complete_topic_is_valid() {
        assert!(complete_topic().validate().is_empty());
    }

    #[test]
    fn test_topic_without_questions_is_valid() {
        let topic = Topic::new("t", "T", "D").with_content("c").with_code("x");
        assert!(topic.validate().is_empty());
    }

    #[test]
    fn test_empty_fields_are_errors() {
        let issues = Topic::new("bare", "Bare", "  ").validate();
        let fields: Vec<_> = issues
            .iter()
            .map(|issue| match &issue.code {
                CatalogIssueCode::EmptyField { field, .. } => *field,
                other => panic!("unexpected issue: {other:?}"),
            })
            .collect();
        assert_eq!(fields, vec!["description", "content", "code"]);
        assert!(issues.iter().all(|i| i.severity == Severity::Error));
    }

    #[test]
    fn test_missing_hint_is_warning() {
        let topic = Topic::new("t", "T", "D")
            .with_content("c")
            .with_code("x")
            .with_practice_question(PracticeQuestion::new("Do it", "", "start"));
        let issues = topic.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert_eq!(
            issues[0].code,
            CatalogIssueCode::IncompleteQuestion {
                topic: "t".to_string(),
                index: 0,
                field: "hint",
            }
        );
    }

    #[test]
    fn test_missing_prompt_is_error() {
        let topic = Topic::new("t", "T", "D")
            .with_content("c")
            .with_code("x")
            .with_practice_question(PracticeQuestion::new("", "hint", "start"));
        let issues = topic.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Error);
        assert!(issues[0].message.contains("#1"));
    }

    #[test]
    fn test_serialize_uses_camel_case() {
        let json = serde_json::to_value(complete_topic()).unwrap();
        assert!(json.get("practiceQuestions").is_some());
        assert!(json["practiceQuestions"][0].get("starterCode").is_some());
    }

    #[test]
    fn test_deserialize_rejects_missing_field() {
        let json = r#"{
            "id": "intro",
            "title": "Intro",
            "description": "d",
            "content": "c",
            "practiceQuestions": []
        }"#;
        let result: Result<Topic, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_rejects_unknown_field() {
        let json = r#"{
            "id": "intro",
            "title": "Intro",
            "description": "d",
            "content": "c",
            "code": "x",
            "practiceQuestions": [],
            "difficulty": "easy"
        }"#;
        let result: Result<Topic, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
