use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use litmus::config::Config;
use litmus::model::SentimentModel;
use litmus::scoring::sentiment::ModelScorer;
use litmus::scoring::traits::SentimentScorer;

/// Litmus: sentiment scoring service for short texts.
///
/// Loads a pre-trained classifier artifact and exposes it over HTTP:
/// POST a text, get back a -100..100 sentiment score and the words that
/// drove it.
#[derive(Parser)]
#[command(name = "litmus", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Bind address (overrides LITMUS_BIND)
        #[arg(long)]
        bind: Option<String>,

        /// Port (overrides LITMUS_PORT)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Score a single text in the terminal
    Analyze {
        /// The text to score
        text: String,

        /// Skip keyword extraction
        #[arg(long)]
        no_keywords: bool,
    },

    /// Show a summary of the loaded classifier artifact
    Inspect,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("litmus=info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { bind, port } => {
            let config = Config::load()?;
            let bind = bind.unwrap_or_else(|| config.bind.clone());
            let port = port.unwrap_or(config.port);

            // Artifact problems are fatal here: a server without a model
            // cannot answer anything, so fail loudly before binding.
            let scorer = load_scorer(&config)?;

            litmus::web::run_server(scorer, &bind, port).await?;
        }

        Commands::Analyze { text, no_keywords } => {
            let config = Config::load()?;
            let scorer = load_scorer(&config)?;

            let analysis = scorer.analyze(&text, !no_keywords).await?;
            litmus::output::terminal::display_analysis(&text, &analysis);
        }

        Commands::Inspect => {
            let config = Config::load()?;
            config.require_model()?;
            let model = SentimentModel::load(&config.model_path)?;

            let (lo, hi) = model.ngram_range();
            println!("\n{}", "=== Classifier Artifact ===".bold());
            println!("  Path: {}", config.model_path.display());
            println!("  Vocabulary terms: {}", model.vocabulary_size());
            println!("  Word n-grams: {lo}..={hi}");
            println!("  Classes: negative, positive");
        }
    }

    Ok(())
}

/// Load the classifier artifact and wrap it in the production scorer.
fn load_scorer(config: &Config) -> Result<Arc<dyn SentimentScorer>> {
    config.require_model()?;
    let model = Arc::new(SentimentModel::load(&config.model_path)?);
    info!(
        vocabulary = model.vocabulary_size(),
        "Classifier artifact loaded"
    );
    Ok(Arc::new(ModelScorer::new(model)))
}
