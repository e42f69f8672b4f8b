//! Command-line interface for cube_draft.

use clap::{Args, Parser, Subcommand};
use cube_draft::BotStrategy;
use std::path::PathBuf;

/// Cube Draft - booster draft simulator for a custom card cube
#[derive(Parser, Debug)]
#[command(name = "cube_draft")]
#[command(about = "Simulate booster drafts against bots", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, global = true, default_value = "cube_draft.toml")]
    pub config: PathBuf,

    /// Cube API base URL (overrides config and CUBE_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by the draft commands.
#[derive(Args, Debug, Clone)]
pub struct DraftArgs {
    /// Number of bots at the table
    #[arg(short, long)]
    pub bots: Option<usize>,

    /// Draw packs from a local cube list (JSON) instead of the API
    #[arg(long)]
    pub cube: Option<PathBuf>,

    /// Seed for bots and cube shuffles
    #[arg(long)]
    pub seed: Option<u64>,

    /// Bot pick policy
    #[arg(long, value_enum)]
    pub strategy: Option<BotStrategy>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Draft interactively against bots
    Draft(DraftArgs),

    /// Run a whole draft with the human seat taking the first card each pick
    Simulate(DraftArgs),

    /// Generate a random pack and show its breakdown
    Pack {
        /// Number of cards (1-30)
        #[arg(short, long, default_value = "15")]
        size: usize,

        /// Draw from a local cube list (JSON) instead of the API
        #[arg(long)]
        cube: Option<PathBuf>,

        /// Seed for cube shuffles
        #[arg(long)]
        seed: Option<u64>,
    },
}
