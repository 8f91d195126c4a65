//! Presentation-level configuration
//!
//! Resolved output settings: command-line flags win over config file values.

use lessons_domain::OutputFormat;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: true,
        }
    }
}

impl OutputConfig {
    /// Merge file settings with command-line flags
    pub fn resolve(
        file_format: Option<OutputFormat>,
        file_color: bool,
        cli_format: Option<OutputFormat>,
        no_color: bool,
    ) -> Self {
        Self {
            format: cli_format.or(file_format).unwrap_or_default(),
            color: file_color && !no_color,
        }
    }

    /// Apply the color setting to the terminal styling library
    pub fn apply(&self) {
        if !self.color {
            colored::control::set_override(false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_format_wins() {
        let config = OutputConfig::resolve(
            Some(OutputFormat::Text),
            true,
            Some(OutputFormat::Json),
            false,
        );
        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.color);
    }

    #[test]
    fn test_file_format_used_without_flag() {
        let config = OutputConfig::resolve(Some(OutputFormat::Json), true, None, false);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_defaults() {
        let config = OutputConfig::resolve(None, true, None, false);
        assert_eq!(config, OutputConfig::default());
    }

    #[test]
    fn test_no_color_flag_or_file_disables_color() {
        assert!(!OutputConfig::resolve(None, true, None, true).color);
        assert!(!OutputConfig::resolve(None, false, None, false).color);
    }
}
