//! OpenClaw CLI — the main entry point.
//!
//! Commands:
//! - `chat`    — Interactive chat or single-message mode
//! - `status`  — Show configuration and backend health
//! - `memory`  — Inspect or search long-term memory
//! - `todo`    — Show the to-do lists

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "openclaw",
    about = "OpenClaw — a local-first personal AI assistant",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Chat with the assistant
    Chat {
        /// Send a single message instead of entering interactive mode
        #[arg(short, long)]
        message: Option<String>,
    },

    /// Show configuration and backend health
    Status,

    /// Inspect long-term memory
    Memory {
        /// Search instead of listing everything
        #[arg(short, long)]
        query: Option<String>,

        /// Delete a record by ID
        #[arg(short, long)]
        delete: Option<String>,
    },

    /// Show the to-do lists
    Todo,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    match cli.command {
        Commands::Chat { message } => commands::chat::run(message).await?,
        Commands::Status => commands::status::run().await?,
        Commands::Memory { query, delete } => commands::memory::run(query, delete).await?,
        Commands::Todo => commands::todo::run().await?,
    }

    Ok(())
}
