use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::builder::RangedU64ValueParser;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::config::{DEFAULT_MAX_VISIBLE, FOCUS_YEAR_ENV, MAX_VISIBLE_ENV, ViewConfig};
use crate::indexer::{TweetIndex, load_export};
use crate::models::SearchResult;
use crate::utils::{format_year_bar, single_line};
use crate::views::{ViewSnapshot, year_histogram};

const TEXT_COLUMN_WIDTH: usize = 100;
const YEAR_BAR_WIDTH: usize = 40;

#[derive(Parser)]
#[command(name = "memento")]
#[command(version)]
#[command(about = "Search through a personal Twitter data export", long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show statistics about an export
    Stats {
        /// Export .zip file or extracted export directory
        export: PathBuf,
    },
    /// Search posts by case-sensitive substring
    Search(SearchArgs),
    /// Count matching posts per year
    Years {
        export: PathBuf,
        /// Substring to match; all posts when omitted
        #[arg(default_value = "")]
        query: String,
    },
    /// Print the raw exported form of one post
    Show {
        export: PathBuf,
        /// Post id
        id: String,
    },
}

#[derive(Args)]
pub struct SearchArgs {
    /// Export .zip file or extracted export directory
    pub export: PathBuf,

    /// Substring to match; all posts when omitted
    #[arg(default_value = "")]
    pub query: String,

    /// Year to anchor the visible window at (defaults to the current year)
    #[arg(long = "year", env = FOCUS_YEAR_ENV)]
    pub focus_year: Option<i32>,

    /// Maximum number of results to print
    #[arg(
        long,
        env = MAX_VISIBLE_ENV,
        default_value_t = DEFAULT_MAX_VISIBLE,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub max_visible: usize,

    /// Print the view as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Some(Commands::Stats { export }) => show_stats(export)?,
        Some(Commands::Search(args)) => search(args)?,
        Some(Commands::Years { export, query }) => show_years(export, query)?,
        Some(Commands::Show { export, id }) => show_raw(export, id)?,
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A subscriber may already be installed when run() is embedded
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn open(export: &Path) -> Result<TweetIndex> {
    load_export(export).with_context(|| format!("Failed to load export: {}", export.display()))
}

fn show_stats(export: &Path) -> Result<()> {
    let index = open(export)?;
    let account = index.account();

    println!("Export Statistics");
    println!("=================");
    if let Some(username) = &account.username {
        println!("Account: @{}", username);
    }
    if let Some(name) = &account.display_name {
        println!("Display name: {}", name);
    }
    println!("Total posts: {}", index.count());
    println!("Skipped records: {}", index.skipped_count());

    if let Some(newest) = index.newest() {
        println!("Newest post: {}", newest.created_at.format("%Y-%m-%d %H:%M:%S"));
    }
    if let Some(oldest) = index.oldest() {
        println!("Oldest post: {}", oldest.created_at.format("%Y-%m-%d %H:%M:%S"));
    }

    let years = year_histogram(index.records());
    if !years.is_empty() {
        println!();
        println!("Posts per year:");
        for bucket in years {
            println!("  {}: {}", bucket.year, bucket.count);
        }
    }

    Ok(())
}

fn search(args: &SearchArgs) -> Result<()> {
    let index = open(&args.export)?;
    let config = ViewConfig::new(args.max_visible, args.focus_year)?;
    let snapshot = ViewSnapshot::capture(&index, &args.query, &config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    println!("{} of {} posts match", snapshot.matched_count, snapshot.total_count);
    if snapshot.window.truncated_before > 0 {
        println!("… {} newer results not shown", snapshot.window.truncated_before);
    }
    for result in &snapshot.visible {
        print_result(result);
    }
    if snapshot.window.truncated_after > 0 {
        println!("… {} older results not shown", snapshot.window.truncated_after);
    }

    Ok(())
}

fn print_result(result: &SearchResult) {
    println!("{:>13}  {}", result.local_date, single_line(&result.text, TEXT_COLUMN_WIDTH));
    println!("{:>13}  {}", "", result.url);
    for media in &result.media_urls {
        println!("{:>13}  {}", "", media);
    }
}

fn show_years(export: &Path, query: &str) -> Result<()> {
    let index = open(export)?;
    let results = index.search(query);
    let years = year_histogram(&results);
    let max_count = years.iter().map(|b| b.count).max().unwrap_or(0);

    println!("{} of {} posts match", results.len(), index.count());
    for bucket in &years {
        println!(
            "{}  {:>6}  {}",
            bucket.year,
            bucket.count,
            format_year_bar(bucket.count, max_count, YEAR_BAR_WIDTH)
        );
    }

    Ok(())
}

fn show_raw(export: &Path, id: &str) -> Result<()> {
    let index = open(export)?;
    let Some(record) = index.get(id) else {
        bail!("No post with id {} in export", id);
    };

    println!("{}", serde_json::to_string_pretty(&record.raw_form)?);
    Ok(())
}
