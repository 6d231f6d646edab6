use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info};

use url_inspector::config::AppConfig;
use url_inspector::history::HistoryStore;
use url_inspector::url_parser::decompose_batch;
use url_inspector::utils::logger::init_logger;
use url_inspector::{
    decompose, diff, format_diff_report, format_diff_sides, format_json, format_parsed_url,
    DiffResult,
};

#[derive(Parser, Debug)]
#[command(name = "url-inspector")]
#[command(about = "Decompose URLs into readable JSON and diff their parameters")]
struct Cli {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// History file path (overrides the configuration)
    #[arg(long)]
    history_file: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decompose a URL into its base URL and parameters
    Parse {
        url: String,
    },
    /// Compare the parameters of two URLs
    Diff {
        old_url: String,
        new_url: String,
        /// Print the full diff as JSON
        #[arg(long)]
        json: bool,
    },
    /// Compare two URLs from the history by index
    DiffHistory {
        old_index: usize,
        new_index: usize,
        /// Print the full diff as JSON
        #[arg(long)]
        json: bool,
    },
    /// Inspect or edit the URL history
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },
    /// Decompose every URL in a file, one per line
    Batch {
        file: PathBuf,
    },
}

#[derive(Subcommand, Debug)]
enum HistoryAction {
    /// List recorded URLs, newest first
    List,
    /// Remove the entry at an index
    Delete { index: usize },
    /// Remove every entry
    Clear,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(history_file) = cli.history_file {
        config.history_file = history_file;
    }

    init_logger(config.log_dir.as_deref(), cli.verbose)?;
    debug!("Loaded configuration: {:?}", config);

    match cli.command {
        Command::Parse { url } => parse_url(&config, &url),
        Command::Diff {
            old_url,
            new_url,
            json,
        } => print_diff(&diff(&old_url, &new_url), json),
        Command::DiffHistory {
            old_index,
            new_index,
            json,
        } => {
            let history = HistoryStore::open(&config.history_file)?;
            let old_url = &history.get(old_index)?.url;
            let new_url = &history.get(new_index)?.url;
            info!("Comparing history entries {} and {}", old_index, new_index);
            print_diff(&diff(old_url, new_url), json)
        }
        Command::History { action } => manage_history(&config, action),
        Command::Batch { file } => process_url_batch(&config, &file).await,
    }
}

fn parse_url(config: &AppConfig, url: &str) -> Result<()> {
    if url.trim().is_empty() {
        bail!("URL cannot be empty");
    }

    let parsed = decompose(url);
    println!("{}", format_parsed_url(&parsed)?);

    if !parsed.is_ok() {
        bail!("URL could not be decomposed");
    }

    if config.record_history {
        let mut history = HistoryStore::open(&config.history_file)?;
        match history.find_duplicate_index(url) {
            Some(index) => debug!("URL already in history at index {}", index),
            None => {
                history.add(url)?;
            }
        }
    }

    Ok(())
}

fn print_diff(result: &DiffResult, json: bool) -> Result<()> {
    if json {
        println!("{}", format_json(result)?);
        return Ok(());
    }

    print!("{}", format_diff_report(result));

    let (old, new) = format_diff_sides(result)?;
    println!("\nOld:\n{}", old);
    println!("\nNew:\n{}", new);

    Ok(())
}

fn manage_history(config: &AppConfig, action: HistoryAction) -> Result<()> {
    let mut history = HistoryStore::open(&config.history_file)?;

    match action {
        HistoryAction::List => {
            if history.is_empty() {
                println!("History is empty");
            }
            for (i, item) in history.items().iter().enumerate() {
                println!("{:>3}  {}  {}", i, item.timestamp, item.url);
            }
        }
        HistoryAction::Delete { index } => {
            let removed = history.delete(index)?;
            println!("Deleted {}", removed.url);
        }
        HistoryAction::Clear => {
            history.clear()?;
            println!("History cleared");
        }
    }

    Ok(())
}

async fn process_url_batch(config: &AppConfig, file_path: &Path) -> Result<()> {
    let content = std::fs::read_to_string(file_path)
        .with_context(|| format!("Failed to read {}", file_path.display()))?;
    let urls: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(String::from)
        .collect();

    println!("Processing {} URLs from file: {}", urls.len(), file_path.display());

    let start = Instant::now();
    let results = decompose_batch(&urls, config.batch_concurrency).await?;
    let duration = start.elapsed();

    let successful = results.iter().filter(|parsed| parsed.is_ok()).count();
    let total_params: usize = results.iter().map(|parsed| parsed.params.len()).sum();

    println!("\nSummary:");
    println!("Processed: {} URLs", urls.len());
    println!("Successful: {} URLs", successful);
    println!("Failed: {} URLs", urls.len() - successful);
    println!("Total parameters found: {}", total_params);
    println!("Total processing time: {:?}", duration);

    let errors: Vec<(&String, &String)> = urls
        .iter()
        .zip(results.iter())
        .filter_map(|(url, parsed)| parsed.error.as_ref().map(|error| (url, error)))
        .collect();

    if !errors.is_empty() {
        println!("\nErrors:");
        for (url, error) in errors {
            println!("  URL: {}", url);
            println!("  Error: {}", error);
        }
    }

    Ok(())
}
