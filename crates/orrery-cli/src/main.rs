use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use orrery_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "orrery")]
#[command(author, version, about = "A scroll-driven terminal reader for a universe of small planets")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory of post files to read (overrides the configured universe)
    #[arg(short = 'u', long = "universe", global = true)]
    universe: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the TUI
    Run,
    /// List the posts in the universe without starting the TUI
    List,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load()?;
    let universe = cli.universe.unwrap_or_else(|| config.universe_dir());
    info!(universe = %universe.display(), "universe selected");

    match cli.command {
        Some(Commands::Run) | None => commands::run::run(config, &universe),
        Some(Commands::List) => commands::list::run(&universe),
    }
}
