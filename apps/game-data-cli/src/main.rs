//! `game-data`: bootstrap and inspect quest and item data files.

mod commands;
mod config;

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::Kind;
use crate::config::CliConfig;

/// Quest and item data tool.
#[derive(Parser, Debug)]
#[command(name = "game-data", version, about)]
struct Cli {
    /// Directory holding quests.txt and items.txt (overrides GAME_DATA_DIR).
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Create default data files if they are missing.
    Init,
    /// Load both data files and list their ids.
    List {
        /// Print full records as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Validate a single data file.
    Check {
        #[arg(value_enum)]
        kind: Kind,
        path: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = CliConfig::load(cli.data_dir);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Commands::Init => commands::init(&config, &mut stdout),
        Commands::List { json } => commands::list(&config, json, &mut stdout),
        Commands::Check { kind, path } => commands::check(kind, &path, &mut stdout),
    }
}
