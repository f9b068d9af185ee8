//! jobscout CLI
//!
//! Console entry point: single-keyword searches, full multi-category runs,
//! and config validation.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use jobscout::{
    error::Result,
    export::{ExportFormat, ExportOptions, write_report},
    models::{Config, JobPosting},
    pipeline::{CancelToken, SearchEngine},
};

/// jobscout - Job posting aggregator and ranker
#[derive(Parser, Debug)]
#[command(name = "jobscout", version, about = "Aggregates and ranks job postings")]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search for a single keyword across all enabled sources
    Search {
        /// Search keyword (e.g. "BIM Manager")
        keyword: String,

        /// Show at most this many postings
        #[arg(long, default_value_t = 20)]
        limit: usize,

        /// Export format: json, csv, xml, html, txt
        #[arg(long)]
        export: Option<String>,

        /// Export file path (default: results.<ext>)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Export only postings with a known salary
        #[arg(long)]
        salary_only: bool,
    },

    /// Run the full multi-category search
    Run {
        /// Show at most this many postings per category
        #[arg(long, default_value_t = 3)]
        limit: usize,

        /// Export format: json, csv, xml, html, txt
        #[arg(long)]
        export: Option<String>,

        /// Export file path (default: results.<ext>)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Export only postings with a known salary
        #[arg(long)]
        salary_only: bool,
    },

    /// Validate the configuration file
    Validate,
}

/// Load the configured file, falling back to defaults on failure.
fn load_config(path: &Option<PathBuf>) -> Config {
    match path {
        Some(path) => Config::load_or_default(path),
        None => Config::default(),
    }
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Print a posting to the console.
fn display_posting(posting: &JobPosting, rank: usize) {
    println!("#{rank} {}", posting.title);
    let salary = posting
        .salary_display()
        .map(|s| format!(" | {s}"))
        .unwrap_or_default();
    println!("   {} | {}{salary}", posting.company, posting.location);
    println!("   Source: {} | Score: {}", posting.source, posting.score);
    println!("   {}", posting.url);
    if !posting.description.is_empty() {
        let preview: String = posting.description.chars().take(100).collect();
        println!("   {preview}...");
    }
    println!("{}", "-".repeat(50));
}

fn export_if_requested(
    postings: &[JobPosting],
    export: Option<String>,
    output: Option<PathBuf>,
    salary_only: bool,
) -> Result<()> {
    let Some(format_str) = export else {
        return Ok(());
    };

    let format: ExportFormat = format_str.parse()?;
    let path = output.unwrap_or_else(|| PathBuf::from(format!("results.{}", format.extension())));
    let options = ExportOptions {
        include_description: true,
        salary_only,
    };
    write_report(&path, postings, format, &options)?;
    log::info!("Exported {} postings to {}", postings.len(), path.display());
    Ok(())
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Search {
            keyword,
            limit,
            export,
            output,
            salary_only,
        } => {
            let engine = SearchEngine::new(load_config(&cli.config))?;
            let cancel = CancelToken::new();
            let results = engine.search_keyword(&keyword, &cancel).await;

            println!("{} postings found for '{}'\n", results.len(), keyword);
            for (i, posting) in results.iter().take(limit).enumerate() {
                display_posting(posting, i + 1);
            }

            export_if_requested(&results, export, output, salary_only)?;
        }

        Command::Run {
            limit,
            export,
            output,
            salary_only,
        } => {
            let engine = SearchEngine::new(load_config(&cli.config))?;
            let cancel = CancelToken::new();

            let mut all_results = Vec::new();
            let categories = engine.config().categories.clone();
            for category in &categories {
                let results = engine.search_category(category, &cancel).await;

                println!("\n== {} ({} postings) ==", category.name, results.len());
                for (i, posting) in results.iter().take(limit).enumerate() {
                    display_posting(posting, i + 1);
                }
                all_results.extend(results);
            }

            println!("\n{} postings total", all_results.len());
            export_if_requested(&all_results, export, output, salary_only)?;
        }

        Command::Validate => {
            log::info!("Validating configuration...");

            // Unlike search/run, a broken config file is an error here,
            // not a fallback to defaults.
            let config = match &cli.config {
                Some(path) => match Config::load(path) {
                    Ok(config) => config,
                    Err(e) => {
                        log::error!("Config load failed from {}: {}", path.display(), e);
                        return Err(e);
                    }
                },
                None => Config::default(),
            };

            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!(
                "Config OK ({} categories, {} preferred locations)",
                config.categories.len(),
                config.preferred_locations.len()
            );
        }
    }

    Ok(())
}
