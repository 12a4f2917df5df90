//! vivaprep CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "vivaprep", version, about = "AI interview practice from your terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a one-pass practice round with full per-answer feedback
    Drill {
        /// Path to the question dataset CSV (overrides config)
        #[arg(long)]
        dataset: Option<PathBuf>,

        /// Embedding backend to use (overrides config default)
        #[arg(long)]
        provider: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Run an interactive session with restart support
    Practice {
        /// Path to the question dataset CSV (overrides config)
        #[arg(long)]
        dataset: Option<PathBuf>,

        /// Embedding backend to use (overrides config default)
        #[arg(long)]
        provider: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List dataset categories with question counts
    Categories {
        /// Path to the question dataset CSV (overrides config)
        #[arg(long)]
        dataset: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Check that the dataset loads and report its contents
    Validate {
        /// Path to the question dataset CSV (overrides config)
        #[arg(long)]
        dataset: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create starter config and example dataset
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("vivaprep=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Drill {
            dataset,
            provider,
            config,
        } => commands::drill::execute(dataset, provider, config).await,
        Commands::Practice {
            dataset,
            provider,
            config,
        } => commands::practice::execute(dataset, provider, config).await,
        Commands::Categories { dataset, config } => commands::categories::execute(dataset, config),
        Commands::Validate { dataset, config } => commands::validate::execute(dataset, config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
