//! CLI entrypoint for lessons
//!
//! This is the main binary that wires together all layers: it loads the
//! configuration, builds the catalog registry once, and dispatches the
//! selected command against it.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use lessons_application::{
    BrowseCatalogUseCase, CatalogRegistry, CatalogSource, LoadCatalogsInput, LoadCatalogsUseCase,
};
use lessons_domain::OutputFormat;
use lessons_infrastructure::{BuiltinCatalogSource, ConfigLoader, FileCatalogSource, FileConfig};
use lessons_presentation::{Cli, Command, ConsoleFormatter, OutputConfig};
use std::path::Path;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    info!("Starting lessons");

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {e}"))?
    };
    config.validate().context("Invalid configuration")?;

    let output = OutputConfig::resolve(
        config.output.format,
        config.output.color,
        cli.output.map(Into::into),
        cli.no_color,
    );
    output.apply();

    let strict = cli.strict || config.catalog.strict;
    let use_case = LoadCatalogsUseCase::new(catalog_sources(&config));
    let command = cli.selected_command();

    if command == Command::Check {
        return check(&use_case, strict);
    }

    let loaded = use_case
        .execute(LoadCatalogsInput::new().strict(strict))
        .context("Failed to load lesson catalogs")?;

    let rendered = render(
        &loaded.registry,
        &command,
        cli.catalog.as_deref(),
        config.catalog.default.as_deref(),
        output.format,
    )?;
    println!("{}", rendered);

    Ok(())
}

/// Install the tracing subscriber
///
/// Logs go to stderr so stdout stays clean for JSON output. With
/// `--log-file` they are also written, without ANSI colors, to that file.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let Some(path) = log_file else {
        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .init();
        return Ok(None);
    };

    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow!("--log-file must point to a file: {}", path.display()))?;
    let directory = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::never(directory, file_name));

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .init();

    Ok(Some(guard))
}

/// Build the catalog sources in listing order: built-ins first, then files
fn catalog_sources(config: &FileConfig) -> Vec<Box<dyn CatalogSource>> {
    let mut sources: Vec<Box<dyn CatalogSource>> = Vec::new();

    if config.catalog.builtin {
        sources.push(Box::new(BuiltinCatalogSource::new()));
    }
    if !config.catalog.paths.is_empty() {
        sources.push(Box::new(FileCatalogSource::new(
            config.catalog.paths.iter().cloned(),
        )));
    }

    sources
}

/// Validate every catalog and print a report; fails if anything is fatal
fn check(use_case: &LoadCatalogsUseCase, strict: bool) -> Result<()> {
    let reports = use_case.inspect().context("Failed to read lesson catalogs")?;
    println!("{}", ConsoleFormatter::format_reports(&reports));

    let failed = reports
        .iter()
        .filter(|r| r.is_fatal(strict))
        .count();
    if failed > 0 {
        bail!("{} of {} catalogs failed validation", failed, reports.len());
    }

    Ok(())
}

fn render(
    registry: &CatalogRegistry,
    command: &Command,
    catalog: Option<&str>,
    default_catalog: Option<&str>,
    format: OutputFormat,
) -> Result<String> {
    let mut browse = BrowseCatalogUseCase::new(registry);
    if let Some(id) = default_catalog {
        browse = browse.with_default_catalog(id);
    }

    let rendered = match (command, format) {
        (Command::Catalogs, OutputFormat::Text) => {
            ConsoleFormatter::format_catalogs(&browse.list_catalogs())
        }
        (Command::Catalogs, OutputFormat::Json) => {
            ConsoleFormatter::format_json(&browse.list_catalogs())
        }
        (Command::Topics, OutputFormat::Text) => {
            ConsoleFormatter::format_topics(browse.catalog(catalog)?)
        }
        (Command::Topics, OutputFormat::Json) => {
            ConsoleFormatter::format_json(browse.list_topics(catalog)?)
        }
        (Command::Show { topic }, OutputFormat::Text) => {
            ConsoleFormatter::format_topic(browse.show_topic(catalog, topic)?)
        }
        (Command::Show { topic }, OutputFormat::Json) => {
            ConsoleFormatter::format_json(browse.show_topic(catalog, topic)?)
        }
        (Command::Export, _) => ConsoleFormatter::format_json(browse.catalog(catalog)?),
        (Command::Check, _) => bail!("check runs before the registry is built"),
    };

    Ok(rendered)
}
