//! Fluxy CLI binary.
//!
//! One invocation is one publish cycle; scheduling belongs to cron or the CI
//! runner invoking this binary. `check` prints the resolved configuration
//! without touching the network.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use fluxy::{diagnostics, run};
use fluxy_core::FluxyConfig;

#[derive(Parser)]
#[command(name = "fluxy", about = "Scheduled blog-publishing bot", version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Path to a fluxy.toml configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one publish cycle (the default)
    Run,
    /// Print the resolved configuration and exit without network calls
    Check,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    let config = match &cli.config {
        Some(path) => FluxyConfig::from_file(path)?.with_env(),
        None => FluxyConfig::from_env(),
    };

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            let post = run::run_once(&config).await?;
            println!("Published post {} at {}", post.id, post.link);
        }
        Commands::Check => {
            print!("{}", diagnostics::describe(&config));
        }
    }

    Ok(())
}
