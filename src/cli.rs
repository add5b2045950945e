// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "cake-factory")]
#[command(about = "Timed cake-matching minigame", long_about = None)]
pub struct Cli {
    /// JSON file with game settings
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Seed for target orders, for reproducible rounds
    #[arg(long)]
    pub seed: Option<u64>,

    /// Session length in seconds
    #[arg(long)]
    pub duration: Option<u32>,
}
