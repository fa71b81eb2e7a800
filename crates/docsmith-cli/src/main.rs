mod client;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use docsmith_generate::{
    Document, EngineOptions, GenerationError, SynthesisEngine, load_mapping, load_overrides,
    output,
};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use client::{ClientError, SearchClient};

#[derive(Debug, Error)]
enum CliError {
    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),
    #[error("search client error: {0}")]
    Client(#[from] ClientError),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ExportFormat {
    Json,
    Csv,
}

#[derive(Parser, Debug)]
#[command(
    name = "docsmith",
    version,
    about = "Generate synthetic documents from a search index mapping"
)]
struct Cli {
    /// Path to the index mapping file.
    #[arg(long, value_name = "PATH")]
    mapping: PathBuf,
    /// Number of documents to generate.
    #[arg(long, default_value_t = 100, env = "DOC_COUNT")]
    count: usize,
    /// Target index name.
    #[arg(long, value_name = "NAME")]
    index: Option<String>,
    /// Delete and recreate the index before loading.
    #[arg(long, default_value_t = false)]
    reset: bool,
    /// Path to a generator override file.
    #[arg(long, value_name = "PATH")]
    overrides: Option<PathBuf>,
    /// Format for --out and interactive saves.
    #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
    format: ExportFormat,
    /// Write the generated batch to this file.
    #[arg(long, value_name = "PATH")]
    out: Option<PathBuf>,
    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
    /// Search engine base URL.
    #[arg(long, default_value = "http://localhost:9200", env = "ES_HOST")]
    es_host: String,
    /// Preview each document, then choose whether to save the batch.
    #[arg(long, short = 'i', default_value_t = false)]
    interactive: bool,
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    init_logging();

    if cli.index.is_none() && cli.out.is_none() && !cli.interactive {
        return Err(CliError::InvalidConfig(
            "nothing to do: pass --index, --out, or --interactive".to_string(),
        ));
    }

    let engine = SynthesisEngine::new(EngineOptions {
        seed: cli.seed,
        reference_time: None,
    });
    let mapping = load_mapping(&cli.mapping)?;
    let overrides = load_overrides(cli.overrides.as_deref(), engine.registry())?;
    let documents = engine.generate(&mapping, &overrides, cli.count);

    if cli.interactive {
        preview_documents(&documents, cli.format)?;
    }

    if let Some(path) = &cli.out {
        export(path, &documents, cli.format)?;
        println!("wrote {} documents to {}", documents.len(), path.display());
    }

    if let Some(index) = &cli.index {
        let search = SearchClient::new(cli.es_host.clone());
        search
            .create_or_reset_index(index, mapping.body(), cli.reset)
            .await?;
        let inserted = search.bulk_insert(index, &documents).await?;
        println!("indexed {inserted} documents into {index}");
    }

    Ok(())
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
}

fn export(
    path: &Path,
    documents: &[Document],
    format: ExportFormat,
) -> Result<(), GenerationError> {
    match format {
        ExportFormat::Json => output::write_json(path, documents),
        ExportFormat::Csv => output::csv::write_csv(path, documents),
    }
}

/// Print every document, then offer to save the batch to a file.
fn preview_documents(documents: &[Document], format: ExportFormat) -> Result<(), CliError> {
    for (position, document) in documents.iter().enumerate() {
        let rendered = serde_json::to_string_pretty(document).map_err(GenerationError::Json)?;
        println!("[Doc {}]", position + 1);
        println!("{rendered}");
    }

    print!("Save the generated documents to a file? (y/n): ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let answer = answer.trim().to_ascii_lowercase();
    if answer != "y" && answer != "yes" {
        return Ok(());
    }

    print!("Output file name: ");
    io::stdout().flush()?;
    let mut name = String::new();
    io::stdin().read_line(&mut name)?;
    let name = name.trim();
    if name.is_empty() {
        println!("no file name given; skipping save");
        return Ok(());
    }

    export(Path::new(name), documents, format)?;
    println!("wrote {} documents to {name}", documents.len());
    Ok(())
}
