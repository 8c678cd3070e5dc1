//! Linkharvest main entry point
//!
//! Command-line surface over the library: collect the set of crawlable
//! page URLs around a seed and print them one per line, ready to pipe
//! into a document loader.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use linkharvest::config::{load_config, validate, Config};
use linkharvest::{collect_site_urls, CrawlMode};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Collects same-site page URLs reachable from a seed URL
#[derive(Parser, Debug)]
#[command(name = "linkharvest")]
#[command(version)]
#[command(about = "Collects same-site page URLs reachable from a seed URL", long_about = None)]
struct Cli {
    /// Seed URL; scheme optional, https is forced
    #[arg(value_name = "SEED")]
    seed: String,

    /// How far around the seed to wander
    #[arg(long, value_enum, default_value_t = ModeArg::Domain)]
    mode: ModeArg,

    /// Override the visit budget from the config
    #[arg(long, value_name = "N")]
    max_pages: Option<u32>,

    /// Path to TOML configuration file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ModeArg {
    /// Whole domain
    Domain,
    /// The seed page only
    Page,
    /// Seed netloc plus path prefix
    Subdomain,
}

impl From<ModeArg> for CrawlMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Domain => CrawlMode::Domain,
            ModeArg::Page => CrawlMode::ExactPage,
            ModeArg::Subdomain => CrawlMode::Subdomain,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => load_config(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::default(),
    };

    if let Some(max_pages) = cli.max_pages {
        config.crawler.max_pages = max_pages;
        validate(&config).context("invalid --max-pages override")?;
    }

    tracing::info!(
        "Collecting URLs from {} (mode: {:?}, budget: {} pages)",
        cli.seed,
        cli.mode,
        config.crawler.max_pages
    );

    let urls = collect_site_urls(&cli.seed, cli.mode.into(), config).await?;

    // Sorted for stable output; the set itself carries no order
    let mut sorted: Vec<String> = urls.into_iter().collect();
    sorted.sort();
    for url in &sorted {
        println!("{}", url);
    }

    tracing::info!("{} URLs collected", sorted.len());

    Ok(())
}

/// Sets up the tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("linkharvest=info,warn"),
            1 => EnvFilter::new("linkharvest=debug,info"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
