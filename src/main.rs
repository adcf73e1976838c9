//! Wikihop main entry point
//!
//! This is the command-line interface for the article path searcher.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use wikihop::config::{
    ExclusionPolicy, ExtractionConfig, ExtractionScope, FetchFailurePolicy, SearchConfig,
    SiteConfig,
};
use wikihop::output::{print_outcome, PathReport};
use wikihop::search::PathSearcher;
use wikihop::title::PageTitle;

/// Which exclusion rule family filters extracted links
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum ExclusionKind {
    /// Namespace-aware: excludes `Ns:` and `Ns_talk:` forms
    Namespace,
    /// Literal prefix match against a short fixed list
    Prefix,
}

/// Wikihop: shortest hyperlink path between encyclopedia articles
///
/// Searches the article link graph breadth-first, fetching pages on demand,
/// until the target article is reached or the hop budget runs out. Start
/// and end are given as the portion of the article URL after the site's
/// article path prefix, e.g. `Terence_Tao`.
#[derive(Parser, Debug)]
#[command(name = "wikihop")]
#[command(version)]
#[command(about = "Shortest hyperlink path between encyclopedia articles", long_about = None)]
struct Cli {
    /// Start article title
    #[arg(value_name = "START")]
    start: String,

    /// Target article title
    #[arg(value_name = "END")]
    end: String,

    /// How many link hops outward to search from the start article
    #[arg(value_name = "MAX_DISTANCE")]
    max_distance: u32,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress progress lines and non-error logging
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Article base URL; titles are appended to it when fetching
    #[arg(long, default_value = "https://en.wikipedia.org/wiki/")]
    article_base: String,

    /// Which links inside a page are considered
    #[arg(long, value_enum, default_value = "content")]
    scope: ExtractionScope,

    /// Exclusion rule family for non-article links
    #[arg(long, value_enum, default_value = "namespace")]
    exclusion: ExclusionKind,

    /// Extra entries for the active exclusion list (repeatable)
    #[arg(long = "exclude", value_name = "NAME")]
    exclude: Vec<String>,

    /// What a fetch failure on the page being expanded does to the search
    #[arg(long, value_enum, default_value = "fail")]
    on_fetch_error: FetchFailurePolicy,

    /// Emit a JSON report instead of the text output
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = build_config(&cli)?;
    let searcher = PathSearcher::new(config)?;

    let start = PageTitle::new(&cli.start);
    let end = PageTitle::new(&cli.end);

    tracing::info!(
        "Searching for a path from '{}' to '{}' within {} hops",
        start,
        end,
        cli.max_distance
    );

    let path = searcher
        .shortest_path(&start, &end, cli.max_distance)
        .await;

    if cli.json {
        let report = PathReport::new(&start, &end, cli.max_distance, path.as_deref());
        println!("{}", report.to_json()?);
    } else {
        print_outcome(path.as_deref());
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr; stdout is reserved for the search output itself.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("wikihop=info,warn"),
            1 => EnvFilter::new("wikihop=debug,info"),
            2 => EnvFilter::new("wikihop=trace,debug"),
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

/// Assembles the injected search configuration from CLI flags
fn build_config(cli: &Cli) -> Result<SearchConfig> {
    let site = SiteConfig::new(&cli.article_base)?;

    let mut exclusions = match cli.exclusion {
        ExclusionKind::Namespace => ExclusionPolicy::default_namespaces(),
        ExclusionKind::Prefix => ExclusionPolicy::default_prefixes(),
    };
    exclusions.extend(cli.exclude.iter().cloned());

    Ok(SearchConfig {
        site,
        extraction: ExtractionConfig {
            scope: cli.scope,
            exclusions,
        },
        on_fetch_error: cli.on_fetch_error,
        announce_progress: !cli.quiet && !cli.json,
    })
}
