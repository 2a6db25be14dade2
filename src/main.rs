//! PRD-Harvest main entry point
//!
//! This is the command-line interface for extracting rules data from the
//! Pathfinder Reference Document.

use chrono::Utc;
use clap::Parser;
use prd_harvest::config::{load_config_with_hash, validate, Config};
use prd_harvest::fetcher::cancel_pair;
use prd_harvest::output::{print_results, write_markdown_report, RunSummary};
use prd_harvest::{BookCatalog, Fetcher, LoaderRegistry};
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// PRD-Harvest: structured rules data from the Pathfinder Reference Document
///
/// Fetches the feat index of the reference document, classifies every feat
/// by type and source book, and prints one line per feat.
#[derive(Parser, Debug)]
#[command(name = "prd-harvest")]
#[command(version)]
#[command(about = "Extracts feats from the Pathfinder Reference Document", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (defaults are used when omitted)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Override the document root URL
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Run loaders one after another instead of concurrently
    #[arg(long)]
    sequential: bool,

    /// Write a markdown report of the run to this path
    #[arg(long, value_name = "PATH", conflicts_with = "list_books")]
    markdown: Option<PathBuf>,

    /// Print the book identifiers found in the navigation menu and exit
    #[arg(long)]
    list_books: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let (config, config_hash) = load_configuration(&cli)?;

    if cli.list_books {
        handle_list_books(&config).await
    } else {
        handle_harvest(&config, config_hash, cli.markdown).await
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("prd_harvest=info,warn"),
            1 => EnvFilter::new("prd_harvest=debug,info"),
            2 => EnvFilter::new("prd_harvest=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Loads the configuration file if given and applies command-line overrides
fn load_configuration(cli: &Cli) -> Result<(Config, Option<String>), Box<dyn std::error::Error>> {
    let (mut config, hash) = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            match load_config_with_hash(path) {
                Ok((cfg, hash)) => {
                    tracing::info!("Configuration loaded successfully (hash: {})", hash);
                    (cfg, Some(hash))
                }
                Err(e) => {
                    tracing::error!("Failed to load configuration: {}", e);
                    return Err(e.into());
                }
            }
        }
        None => {
            tracing::debug!("No configuration file given, using defaults");
            (Config::default(), None)
        }
    };

    if let Some(base_url) = &cli.base_url {
        config.site.base_url = base_url.clone();
    }
    if cli.sequential {
        config.loader.concurrent = false;
    }
    validate(&config)?;

    Ok((config, hash))
}

/// Handles the --list-books mode: prints the catalog and exits
async fn handle_list_books(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let fetcher = Arc::new(Fetcher::from_config(config)?);
    let catalog = BookCatalog::new(fetcher, config.site.menu_class.clone());

    for book in catalog.list_books().await? {
        println!("{}", book);
    }

    Ok(())
}

/// Runs every loader and prints the results
async fn handle_harvest(
    config: &Config,
    config_hash: Option<String>,
    markdown: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let (cancel_handle, cancel_signal) = cancel_pair();
    let registry = LoaderRegistry::from_config(config, Some(cancel_signal))?;

    // Ctrl-C aborts in-flight fetches; loaders report them as cancelled
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Interrupted, cancelling outstanding requests");
            cancel_handle.cancel();
        }
    });

    let started_at = Utc::now();
    let results = registry.run_all().await;

    let mut summary = RunSummary::from_results(&results, config.site.base_url.clone(), started_at);
    if let Some(hash) = config_hash {
        summary = summary.with_config_hash(hash);
    }

    print_results(&results, &summary);

    if let Some(path) = markdown {
        write_markdown_report(&summary, &results, &path)?;
    }

    if summary.failed_kinds() > 0 {
        return Err(format!("{} loader(s) failed", summary.failed_kinds()).into());
    }

    Ok(())
}
