// ABOUTME: Main entry point for the reveal-search program.
// ABOUTME: Provides CLI interface and executes commands from the library.

use clap::{Args, Parser, Subcommand};
use log::{info, warn};
use reveal_search::{utils, Config, Document, Result, SearchError};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the extracted slide documents as JSON instead of sending them
    Extract(SourceArgs),

    /// Write "addObject" batch payloads for the extracted documents
    Batch(BatchArgs),
}

#[derive(Args)]
struct SourceArgs {
    /// Markdown file or directory walked for *.md presentations
    #[arg(short, long)]
    source: Option<PathBuf>,

    /// Use the name of each file's folder as id and URL prefix
    #[arg(long)]
    prefix_from_folder: bool,

    /// Chapter separator pattern (matched in multi-line mode)
    #[arg(long)]
    sep: Option<String>,

    /// Vertical slide separator pattern (matched in multi-line mode)
    #[arg(long)]
    vertical_sep: Option<String>,
}

#[derive(Args)]
struct BatchArgs {
    #[command(flatten)]
    source: SourceArgs,

    /// Directory the batch files are written to
    #[arg(short, long)]
    output: PathBuf,

    /// Maximum number of documents per batch
    #[arg(long)]
    batch_size: Option<usize>,
}

impl SourceArgs {
    fn config(&self, batch_size: Option<usize>) -> Config {
        Config::from_env().with_overrides(
            self.source.clone(),
            self.prefix_from_folder,
            self.sep.clone(),
            self.vertical_sep.clone(),
            batch_size,
        )
    }
}

/// Discover and extract every presentation the configuration points at
fn collect(config: &Config) -> Result<Vec<Document>> {
    // Bad patterns are fatal before any file is read
    let separators = config.separators()?;
    let sources = reveal_search::discover_sources(&config.source, config.prefix_from_folder)?;
    if sources.is_empty() {
        warn!("No markdown files found in {:?}", config.source);
    }

    let collection = reveal_search::collect_documents(&sources, &separators);
    if collection.all_failed() {
        return Err(SearchError::NoDocumentsError(collection.processed));
    }
    if !collection.failures.is_empty() {
        warn!(
            "{} of {} file(s) skipped after errors",
            collection.failures.len(),
            collection.processed
        );
    }

    Ok(collection.documents)
}

fn run_extract(args: &SourceArgs) -> Result<()> {
    let config = args.config(None);
    let documents = collect(&config)?;

    for document in &documents {
        println!("{}", serde_json::to_string_pretty(document)?);
    }

    info!("Done! {} objects extracted", documents.len());
    Ok(())
}

fn run_batch(args: &BatchArgs) -> Result<()> {
    let config = args.source.config(args.batch_size);
    let documents = collect(&config)?;

    utils::ensure_directory_exists(&args.output)?;
    let batches = reveal_search::batch_requests(&documents, config.batch_size);
    for (number, batch) in batches.iter().enumerate() {
        let path = args.output.join(format!("batch-{:04}.json", number + 1));
        fs::write(&path, serde_json::to_vec_pretty(batch)?)
            .map_err(|e| anyhow::anyhow!("Failed to write batch file {:?}: {}", path, e))?;
        info!("Wrote {} objects to {:?}", batch.requests.len(), path);
    }

    info!(
        "Done! {} objects in {} batch(es)",
        documents.len(),
        batches.len()
    );
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let result = match &cli.command {
        Some(Commands::Extract(args)) => run_extract(args),
        Some(Commands::Batch(args)) => run_batch(args),
        None => {
            println!("No command specified. Use --help for usage information.");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
