//! Main entry point for Gemini Batch Translator CLI

#![forbid(unsafe_code)]

use clap::Parser;
use dotenvy::dotenv;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gemini_batch_translator::cli::commands::{self, ConflictChoice};

/// Gemini Batch Translator - Markdown directory translation tool
#[derive(Parser, Debug)]
#[command(name = "gemini-batch-translator", version, about, long_about = None)]
struct Args {
    /// API key for Gemini (optional, defaults to GEMINI_API_KEY env var)
    #[arg(long)]
    api_key: Option<String>,

    /// Root directory holding promt.md and the original folder
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// What to do with output files that already exist
    #[arg(long, value_enum, default_value_t = ConflictChoice::Prompt)]
    on_conflict: ConflictChoice,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}={}", env!("CARGO_CRATE_NAME"), log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    commands::handle_run(&args.root, args.api_key, args.on_conflict).await
}
