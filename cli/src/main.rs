//! CLI for repo-scout.
//!
//! Lists a user's or a topic's repositories, optionally filtered by stars,
//! printed as a table or JSON and exported to CSV.

use clap::{Args as ClapArgs, Parser, Subcommand};
use repo_scout::{
    export_to_dir, filter_min_stars, is_known_topic, ExportError, Listing, ListingShape,
    ListingStatus, RecordTable, Scraper, ScraperConfig, ScraperError, TOPICS,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Repo Scout - List repositories of a user or a topic.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a config.toml file.
    #[arg(long, env = "REPO_SCOUT_CONFIG", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every repository of a user, following all pages.
    User {
        /// User name as it appears in profile URLs.
        name: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List the repositories featured on a topic page.
    Topic {
        /// Topic slug; see `topics` for the accepted values.
        slug: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Print the accepted topic slugs.
    Topics,
}

#[derive(ClapArgs, Debug)]
struct OutputArgs {
    /// Only keep repositories with at least this many stars.
    #[arg(long, default_value_t = 0)]
    min_stars: u64,

    /// Write the results as CSV into the configured output directory.
    #[arg(long)]
    export: bool,

    /// Print records as JSON instead of a table.
    #[arg(long)]
    json: bool,
}

/// Errors that end the run before or after scraping.
#[derive(Debug, thiserror::Error)]
enum CliError {
    /// Configuration or client setup failed.
    #[error(transparent)]
    Scraper(#[from] ScraperError),

    /// Writing the CSV export failed.
    #[error(transparent)]
    Export(#[from] ExportError),

    /// The topic is not in the catalog.
    #[error("Unknown topic '{0}'; run `repo-scout topics` for the list")]
    UnknownTopic(String),

    /// Serializing records as JSON failed.
    #[error("Failed to serialize records: {0}")]
    Json(#[from] serde_json::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Parse arguments
    let args = Args::parse();

    // Run the main logic
    let outcome = run(args).await;
    if let Err(e) = &outcome {
        error!(error = %e, "Critical failure");
    }
    ExitCode::from(exit_code(&outcome))
}

/// Maps a run outcome to the process exit code.
///
/// - `0`: listed successfully, nothing found, or nothing to list
/// - `1`: a page fetch failed
/// - `2`: configuration, client, export or input error
fn exit_code(outcome: &Result<Option<Listing>, CliError>) -> u8 {
    match outcome {
        Ok(Some(listing)) if listing.status() == ListingStatus::Failed => 1,
        Ok(_) => 0,
        Err(_) => 2,
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic. Returns the listing when one was scraped.
async fn run(args: Args) -> Result<Option<Listing>, CliError> {
    let (input, shape, output) = match args.command {
        Command::Topics => {
            for topic in TOPICS {
                println!("{topic}");
            }
            return Ok(None);
        }
        Command::User { name, output } => (name, ListingShape::UserRepositories, output),
        Command::Topic { slug, output } => {
            if !is_known_topic(&slug) {
                return Err(CliError::UnknownTopic(slug));
            }
            (slug, ListingShape::TopicRepositories, output)
        }
    };

    let config = load_config(args.config.as_ref())?;
    let scraper = Scraper::new(config)?;

    let listing = match shape {
        ListingShape::UserRepositories => scraper.scrape_user(&input).await,
        ListingShape::TopicRepositories => scraper.scrape_topic(&input).await,
    };

    match listing.status() {
        ListingStatus::Failed => {
            if let Some(failure) = &listing.failure {
                warn!(
                    error = %failure,
                    "Failed to retrieve the page. Please check the name and try again."
                );
            }
            if listing.records.is_empty() {
                return Ok(Some(listing));
            }
        }
        ListingStatus::Empty => {
            println!("No repositories found.");
            return Ok(Some(listing));
        }
        ListingStatus::Complete => {}
    }

    let records = filter_min_stars(listing.records.clone(), output.min_stars);
    if records.len() < listing.records.len() {
        info!(
            kept = records.len(),
            dropped = listing.records.len() - records.len(),
            min_stars = output.min_stars,
            "Applied star filter"
        );
    }

    if output.json {
        let json = serde_json::to_string_pretty(&records)?;
        println!("{json}");
    } else {
        print_table(&RecordTable::from_records(&records, shape));
    }

    if output.export {
        let table = RecordTable::from_records(&records, shape);
        let path = export_to_dir(&scraper.config().output_dir, &input, &table)?;
        println!("\nExported {} rows to {}", table.len(), path.display());
    }

    Ok(Some(listing))
}

/// Loads the config file if given, then applies environment overrides.
fn load_config(path: Option<&PathBuf>) -> Result<ScraperConfig, ScraperError> {
    let config = match path {
        Some(path) => ScraperConfig::load(path)?,
        None => ScraperConfig::default(),
    };
    Ok(config.with_env_overrides()?)
}

/// Prints a table with left-aligned, width-fitted columns.
fn print_table(table: &RecordTable) {
    let mut widths: Vec<usize> = table.columns().iter().map(|c| c.chars().count()).collect();
    for row in table.rows() {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header: Vec<String> = table.columns().iter().map(|c| c.to_string()).collect();
    print_row(&header, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    print_row(&rule, &widths);
    for row in table.rows() {
        print_row(row, &widths);
    }
}

fn print_row(cells: &[String], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    println!("{}", line.join("  ").trim_end());
}

#[cfg(test)]
mod tests {
    use super::*;
    use repo_scout::{FetchError, RepositoryRecord};

    fn listing(records: usize, failed: bool) -> Listing {
        let mut listing = Listing::new(ListingShape::UserRepositories, "octocat");
        for i in 1..=records {
            let name = format!("repo-{i}");
            let url = format!("https://github.com/octocat/{name}");
            listing.records.push(RepositoryRecord::new(name, url, None, 1));
        }
        if failed {
            listing.failure = Some(FetchError::Status {
                url: "https://github.com/octocat?page=2&tab=repositories".to_string(),
                status: 404,
            });
        }
        listing
    }

    #[test]
    fn successful_and_empty_listings_exit_zero() {
        assert_eq!(exit_code(&Ok(Some(listing(2, false)))), 0);
        assert_eq!(exit_code(&Ok(Some(listing(0, false)))), 0);
        assert_eq!(exit_code(&Ok(None)), 0);
    }

    #[test]
    fn failed_fetch_exits_one_even_with_partial_records() {
        assert_eq!(exit_code(&Ok(Some(listing(0, true)))), 1);
        assert_eq!(exit_code(&Ok(Some(listing(3, true)))), 1);
    }

    #[test]
    fn critical_errors_exit_two() {
        let outcome = Err(CliError::UnknownTopic("cobol".to_string()));
        assert_eq!(exit_code(&outcome), 2);
    }

    #[tokio::test]
    async fn unknown_topic_is_rejected_before_fetching() {
        let args = Args::parse_from(["repo-scout", "topic", "not-a-topic"]);

        let outcome = run(args).await;

        assert!(matches!(outcome, Err(CliError::UnknownTopic(ref slug)) if slug == "not-a-topic"));
        assert_eq!(exit_code(&outcome), 2);
    }

    #[tokio::test]
    async fn topics_command_lists_without_scraping() {
        let outcome = run(Args::parse_from(["repo-scout", "topics"])).await;
        assert!(matches!(outcome, Ok(None)));
    }
}
