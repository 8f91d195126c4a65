//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable console output
    Text,
    /// JSON output
    Json,
}

impl From<OutputFormat> for lessons_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => Self::Text,
            OutputFormat::Json => Self::Json,
        }
    }
}

/// Subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List every registered catalog
    Catalogs,
    /// List the topics of a catalog in display order (default command)
    Topics,
    /// Show one topic: prose, code sample and practice questions
    Show {
        /// Topic id, e.g. `prepared-statements`
        topic: String,
    },
    /// Print a whole catalog as JSON
    Export,
    /// Validate every catalog and report all issues
    Check,
}

/// CLI arguments for lessons
#[derive(Parser, Debug)]
#[command(name = "lessons")]
#[command(author, version, about = "Browse structured programming lessons")]
#[command(long_about = r#"
Lessons serves ordered catalogs of topics: prose, an illustrative code sample
and practice questions for each topic. A JDBC curriculum is built in; more
catalogs can be added as .json or .toml files.

Configuration files are loaded from (in priority order):
1. --config <path>                 Explicit config file
2. ./lessons.toml                  Project-level config
3. ~/.config/lessons/config.toml   Global config

Example:
  lessons catalogs
  lessons topics --catalog jdbc
  lessons show transactions
  lessons export -o json > jdbc.json
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Catalog to use (defaults to catalog.default, then the first catalog)
    #[arg(short, long, global = true, value_name = "ID")]
    pub catalog: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Treat content warnings as errors
    #[arg(long, global = true)]
    pub strict: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Also write logs to this file
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// The subcommand to run, defaulting to `topics`
    pub fn selected_command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Topics)
    }
}
