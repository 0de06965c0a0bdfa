#![allow(clippy::doc_markdown)]
//! gramdex CLI - fuzzy n-gram search over text files
//!
//! Usage:
//!   `gramdex search ./items.txt "first item"`
//!   `gramdex search ./items.jsonl "first item" --format json --limit 5`
//!   `gramdex ngrams "four chars" --ngram 4`
//!   `gramdex info ./items.txt`
//!   `gramdex config`

mod load;
mod output;

use anyhow::Context;
use clap::{Parser, Subcommand};
use gramdex_core::{GramdexConfig, NgramLength};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use output::OutputFormat;

#[derive(Parser)]
#[command(name = "gramdex")]
#[command(author, version, about = "gramdex CLI - fuzzy n-gram search over text files")]
#[command(propagate_version = true)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true, env = "GRAMDEX_CONFIG", default_value = "gramdex.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Index a file and rank its items against a query
    Search {
        /// Path to input file (plain text, or .jsonl)
        file: PathBuf,

        /// Query text
        query: String,

        /// N-gram length (overrides configuration)
        #[arg(short, long)]
        ngram: Option<usize>,

        /// Maximum number of results (overrides configuration)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Show the n-gram windows and fingerprints of a text
    Ngrams {
        /// Text to split
        text: String,

        /// N-gram length (overrides configuration)
        #[arg(short, long)]
        ngram: Option<usize>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Show index statistics for a file
    Info {
        /// Path to input file (plain text, or .jsonl)
        file: PathBuf,

        /// N-gram length (overrides configuration)
        #[arg(short, long)]
        ngram: Option<usize>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Print the effective configuration as TOML
    Config,
}

impl Commands {
    /// Writes command-line overrides into the loaded configuration so they
    /// go through the same validation as file and environment values.
    fn apply_overrides(&self, config: &mut GramdexConfig) {
        let (ngram, limit) = match self {
            Self::Search { ngram, limit, .. } => (*ngram, *limit),
            Self::Ngrams { ngram, .. } | Self::Info { ngram, .. } => (*ngram, None),
            Self::Config => (None, None),
        };
        if let Some(n) = ngram {
            config.index.ngram_length = n;
        }
        if let Some(limit) = limit {
            config.search.max_results = limit;
        }
    }
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = GramdexConfig::load_from_path(&cli.config)
        .with_context(|| format!("Failed to load configuration {}", cli.config.display()))?;
    cli.command.apply_overrides(&mut config);
    config.validate()?;
    init_tracing(&config.logging.level);

    let ngram_length = NgramLength::new(config.index.ngram_length)?;

    match cli.command {
        Commands::Search {
            file, query, format, ..
        } => {
            let (index, _) = load::load_file(&file, ngram_length)?;
            let results = index.search_top(&query, config.search.max_results);
            tracing::debug!(query = %query, results = results.len(), "search complete");
            output::print_results(&results, format)?;
        }
        Commands::Ngrams { text, format, .. } => {
            let rows = output::ngram_rows(&text, ngram_length);
            output::print_ngrams(&rows, format)?;
        }
        Commands::Info { file, format, .. } => {
            let (index, stats) = load::load_file(&file, ngram_length)?;
            output::print_info(&stats, &index.stats(), format)?;
        }
        Commands::Config => {
            print!("{}", config.to_toml()?);
        }
    }

    Ok(())
}
