//! Cube Draft - Unified CLI
//!
//! Booster draft simulator with interactive and automatic modes.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, DraftArgs};
use cube_draft::{
    CubePackSource, DraftConfig, DraftController, PackSource, RestPackSource, format_colors,
    generate_pack, render_summary, run_autopilot, run_interactive,
};
use std::path::{Path, PathBuf};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = DraftConfig::load_or_default(&cli.config)?.apply_env();
    if let Some(url) = cli.api_url {
        config = config.with_api_url(url);
    }

    match cli.command {
        Command::Draft(args) => run_draft(config, args, false).await,
        Command::Simulate(args) => run_draft(config, args, true).await,
        Command::Pack { size, cube, seed } => run_pack(config, size, cube, seed).await,
    }
}

/// Builds the pack source: a local cube list when given, the API otherwise.
#[instrument(skip(config))]
fn build_source(
    config: &DraftConfig,
    cube: Option<&Path>,
    seed: Option<u64>,
) -> Result<Box<dyn PackSource>> {
    match cube {
        Some(path) => {
            let source = CubePackSource::from_file(path, seed)?;
            info!(cards = source.len(), "Using local cube list");
            Ok(Box::new(source))
        }
        None => {
            let source = RestPackSource::new(config.api_url(), config.request_timeout())?;
            info!(api_url = %source.base_url(), "Using cube API");
            Ok(Box::new(source))
        }
    }
}

/// Runs a draft, interactively or on autopilot.
#[instrument(skip(config))]
async fn run_draft(mut config: DraftConfig, args: DraftArgs, autopilot: bool) -> Result<()> {
    if let Some(bots) = args.bots {
        config = config.with_num_bots(bots);
    }
    if let Some(strategy) = args.strategy {
        config = config.with_bot_strategy(strategy);
    }
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let source = build_source(&config, args.cube.as_deref(), *config.seed())?;
    let picker = config.bot_strategy().build(*config.seed());
    let mut controller = DraftController::new(source, picker);

    controller
        .start_draft(*config.num_bots())
        .await
        .context("Failed to start draft")?;

    if autopilot {
        match run_autopilot(&mut controller) {
            Some(summary) => print!("{}", render_summary(&summary, controller.seats())),
            None => println!("Draft stopped before completion."),
        }
        Ok(())
    } else {
        run_interactive(&mut controller).await
    }
}

/// Generates one random pack and prints it with its breakdown.
#[instrument(skip(config))]
async fn run_pack(
    config: DraftConfig,
    size: usize,
    cube: Option<PathBuf>,
    seed: Option<u64>,
) -> Result<()> {
    let source = build_source(&config, cube.as_deref(), seed.or(*config.seed()))?;
    let generated = generate_pack(source.as_ref(), size)
        .await
        .context("Failed to generate pack")?;

    for (i, card) in generated.cards.iter().enumerate() {
        println!("{}", cube_draft::card_line(i + 1, card));
    }

    let metadata = &generated.metadata;
    println!();
    println!("{} cards (requested {})", metadata.size, metadata.requested_size);
    for (color, count) in &metadata.colors {
        println!("  {}: {}", format_colors(&[*color]), count);
    }
    println!("  colorless: {}", metadata.colorless);
    println!("  multicolor: {}", metadata.multicolor);
    for (rarity, count) in &metadata.rarities {
        println!("  {}: {}", rarity, count);
    }
    Ok(())
}
