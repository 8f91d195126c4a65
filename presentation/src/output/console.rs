//! Console output formatter for catalogs and topics

use colored::Colorize;
use lessons_application::CatalogReport;
use lessons_domain::{Catalog, CatalogSummary, Severity, Topic};
use serde::Serialize;

/// Formats catalogs, topics and validation reports for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the list of registered catalogs
    pub fn format_catalogs(summaries: &[CatalogSummary]) -> String {
        let mut output = Self::header("Catalogs");

        if summaries.is_empty() {
            output.push_str("\n  (no catalogs registered)\n");
            return output;
        }

        for summary in summaries {
            output.push_str(&format!(
                "\n  {} {} {}\n      {}\n",
                summary.id.cyan().bold(),
                summary.title.bold(),
                format!("[{}] {} topics", summary.icon, summary.topic_count).dimmed(),
                summary.description
            ));
        }

        output
    }

    /// Format a catalog's topics in display order
    pub fn format_topics(catalog: &Catalog) -> String {
        let mut output = Self::header(catalog.title());
        output.push_str(&format!("{}\n", catalog.description().dimmed()));

        for (index, topic) in catalog.topics().iter().enumerate() {
            output.push_str(&format!(
                "\n{:>3}. {} {}\n     {}\n",
                index + 1,
                topic.title().bold(),
                format!("({})", topic.id()).cyan(),
                topic.description()
            ));
        }

        output
    }

    /// Format a single topic in full
    pub fn format_topic(topic: &Topic) -> String {
        let mut output = Self::header(topic.title());
        output.push_str(&format!("{}\n\n", topic.description().dimmed()));

        output.push_str(topic.content());
        output.push('\n');

        output.push_str(&Self::section_header("Example"));
        output.push_str(&Self::indent(topic.code()));

        if !topic.practice_questions().is_empty() {
            output.push_str(&Self::section_header("Practice"));
            for (index, practice) in topic.practice_questions().iter().enumerate() {
                output.push_str(&format!(
                    "\n{} {}\n",
                    format!("{}.", index + 1).yellow().bold(),
                    practice.question()
                ));
                if !practice.hint().trim().is_empty() {
                    output.push_str(&format!("   {} {}\n", "Hint:".green(), practice.hint()));
                }
                if !practice.starter_code().trim().is_empty() {
                    output.push('\n');
                    output.push_str(&Self::indent(practice.starter_code()));
                }
            }
        }

        output
    }

    /// Format validation reports, one block per catalog
    pub fn format_reports(reports: &[CatalogReport]) -> String {
        let mut output = Self::header("Catalog check");

        for report in reports {
            if report.issues.is_empty() {
                output.push_str(&format!(
                    "\n  {} {} {}\n",
                    "ok".green().bold(),
                    report.catalog_id,
                    format!("({})", report.source).dimmed()
                ));
                continue;
            }

            output.push_str(&format!(
                "\n  {} {} {}\n",
                "!!".red().bold(),
                report.catalog_id,
                format!("({})", report.source).dimmed()
            ));
            for issue in &report.issues {
                let label = match issue.severity {
                    Severity::Error => "error".red().bold(),
                    Severity::Warning => "warning".yellow().bold(),
                };
                output.push_str(&format!("     {}: {}\n", label, issue.message));
            }
        }

        output
    }

    /// Format any serializable value as pretty JSON
    pub fn format_json<T: Serialize + ?Sized>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{}\n{}\n", line.cyan(), title.cyan().bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n", format!("── {} ──", title).yellow().bold())
    }

    fn indent(text: &str) -> String {
        text.lines().map(|line| format!("    {}\n", line)).collect()
    }
}
