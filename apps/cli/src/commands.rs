//! CLI command definitions, routing, and tracing setup.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};
use tracing::info;

use routedoc_core::pipeline::{GenerateConfig, generate};
use routedoc_matching::InMemorySourceIndex;
use routedoc_shared::{AppConfig, init_config, load_config, load_config_from};

use crate::export::{ExportExtractor, ExportRouteMatcher, build_source_index, load_export};
use crate::writer::IndexWriter;

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// Routedoc — stage API documentation from your application's route table.
#[derive(Parser)]
#[command(
    name = "routedoc",
    version,
    about = "Generate grouped API documentation records from an exported route table.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv). Also enables full diagnostics for
    /// caught per-route errors.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Extract endpoint records, stage them, and write the docs index.
    Generate {
        /// Config file path (defaults to ./routedoc.toml).
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Discard manual edits in the rendered output.
        #[arg(long)]
        force: bool,

        /// Skip extraction and re-render the staged records as-is.
        #[arg(long)]
        no_extraction: bool,
    },

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "routedoc=info",
        1 => "routedoc=debug",
        _ => "routedoc=trace",
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Generate {
            config,
            force,
            no_extraction,
        } => run_generate(config.as_deref(), force, no_extraction, cli.verbose > 0),
        Command::Config { action } => run_config(action),
    }
}

fn run_generate(
    config_path: Option<&Path>,
    force: bool,
    no_extraction: bool,
    verbose_errors: bool,
) -> Result<()> {
    let config = match config_path {
        Some(path) => load_config_from(path)?,
        None => load_config()?,
    };

    let generate_config = GenerateConfig {
        staging_dir: PathBuf::from(&config.defaults.staging_dir),
        force,
        skip_extraction: no_extraction,
        verbose_errors,
    };

    let writer = IndexWriter::new(&config.defaults.output_dir);

    let report = if no_extraction {
        // Nothing is pulled or extracted; the staged records are reused.
        let matcher = ExportRouteMatcher::empty();
        let extractor = ExportExtractor::empty(&config.defaults.default_group);
        let index = InMemorySourceIndex::new();
        generate(&generate_config, &matcher, &extractor, &index, &writer)?
    } else {
        let export_path = PathBuf::from(&config.export.path);
        if !export_path.exists() {
            return Err(eyre!(
                "route export not found at {}; point [export].path at your \
                 application's route-table export, or pass --no-extraction",
                export_path.display()
            ));
        }

        let export = load_export(&export_path)?;
        let matcher = ExportRouteMatcher::new(&export);
        let extractor = ExportExtractor::new(&export, &config.defaults.default_group);
        let index = build_source_index(&export);
        generate(&generate_config, &matcher, &extractor, &index, &writer)?
    };

    info!(
        endpoints = report.endpoint_count,
        groups = report.group_count,
        staging_dir = %report.staging_dir.display(),
        "documentation generated"
    );

    Ok(())
}

fn run_config(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Init => {
            let path = init_config(Path::new("."))?;
            println!("created {}", path.display());
            Ok(())
        }
        ConfigAction::Show => {
            let config: AppConfig = load_config()?;
            println!("{}", toml::to_string_pretty(&config)?);
            Ok(())
        }
    }
}
