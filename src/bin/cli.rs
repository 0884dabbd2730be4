//! Prismiq Jobs CLI
//!
//! Runs aggregated job searches against the configured providers.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use prismiq_jobs::{
    error::Result,
    models::{Config, Origin, Provider, SearchParams},
    services::{Aggregator, HttpTransport},
};

/// Prismiq - Job Listing Aggregator
#[derive(Parser, Debug)]
#[command(
    name = "prismiq-jobs",
    version,
    about = "Aggregates job listings from LinkedIn, Naukri and Internshala"
)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search all (or one) providers and print ranked listings
    Search {
        /// Free-text query
        #[arg(short, long)]
        query: Option<String>,

        /// Location filter
        #[arg(short, long)]
        location: Option<String>,

        /// Experience filter
        #[arg(long)]
        experience: Option<String>,

        /// Job type filter
        #[arg(long)]
        job_type: Option<String>,

        /// Only query this provider (linkedin, naukri, internshala)
        #[arg(short, long)]
        provider: Option<Provider>,

        /// Result limit per provider
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Print JSON instead of formatted lines
        #[arg(long)]
        json: bool,
    },

    /// Validate the configuration file
    Validate,

    /// Show provider endpoints and credential status
    Providers,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let _ = dotenvy::dotenv();
    init_logging(cli.verbose);

    let config = Config::load_or_default(&cli.config);
    log::debug!("Loaded configuration from {}", cli.config.display());

    match cli.command {
        Command::Search {
            query,
            location,
            experience,
            job_type,
            provider,
            limit,
            json,
        } => {
            config.validate()?;
            let params = SearchParams {
                query,
                location,
                experience,
                job_type,
                limit,
                provider,
            };

            let transport = Arc::new(HttpTransport::new(&config.http)?);
            let aggregator = Aggregator::from_config(&config, transport);
            let outcome = aggregator.search(&params).await;

            if json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                for listing in &outcome.listings {
                    println!("{}", listing.format(&config.output.line_template));
                }
            }

            for report in &outcome.sources {
                match report.origin {
                    Origin::Live => {}
                    Origin::Fallback => log::warn!(
                        "{} results are sample data, the live API was unavailable",
                        report.provider
                    ),
                    Origin::Unavailable => {
                        log::warn!("{} returned no results (source failed)", report.provider)
                    }
                }
            }
            if outcome.listings.is_empty() {
                log::info!("No listings found.");
            }
        }

        Command::Validate => {
            log::info!("Validating configuration...");
            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!("✓ Config OK");
        }

        Command::Providers => {
            for provider in Provider::ALL {
                let settings = config.provider(provider);
                println!(
                    "{:<12} enabled={:<5} key={:<8} {}",
                    provider.tag(),
                    settings.enabled,
                    if settings.resolve_api_key(provider).is_some() {
                        "set"
                    } else {
                        "missing"
                    },
                    settings.base_url_for(provider)
                );
            }
        }
    }

    Ok(())
}
