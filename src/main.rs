use adventure::core::{read_player_name, run, GameState};
use adventure::items::Catalog;
use adventure::ui::Console;
use anyhow::{Context, Result};
use clap::Parser;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::io;
use std::path::PathBuf;
use tracing::info;

/// A small text adventure: gear up in the village, then slay the dragon.
#[derive(Debug, Parser)]
#[command(name = "adventure", version, about)]
struct Args {
    /// Player name (skips the name prompt)
    #[arg(long)]
    name: Option<String>,

    /// Seed for the combat dice, for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file replacing the built-in shop catalog
    #[arg(long, value_name = "PATH")]
    catalog: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let catalog = match &args.catalog {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("failed to load catalog from {}", path.display()))?,
        None => Catalog::default(),
    };

    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    info!(seed, "combat dice seeded");

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout().lock());

    let name = match args.name {
        Some(name) => name,
        None => read_player_name(&mut console)?,
    };
    let mut state = GameState::new(name);

    let end = run(&mut state, &catalog, &mut console, &mut rng)?;
    info!(?end, health = state.player.health(), gold = state.player.gold(), "exiting");
    Ok(())
}
