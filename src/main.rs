//! War Mission - Entry Point
//!
//! Sets up logging, loads configuration, seeds the random generator once and
//! runs the interactive menu over stdin/stdout.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;

use war_mission::console::Console;
use war_mission::core::config::GameConfig;
use war_mission::core::error::Result;
use war_mission::game::{Game, GameEnd};

/// War Mission - conquer territories and complete your secret mission
#[derive(Parser, Debug)]
#[command(name = "war-mission")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Random seed for a reproducible game (default: wall clock)
    #[arg(long)]
    seed: Option<u64>,

    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Your army color
    #[arg(long)]
    player_color: Option<String>,

    /// Number of territories on the map
    #[arg(long)]
    territories: Option<usize>,

    /// Wait for Enter after each action
    #[arg(long)]
    pause: bool,
}

fn main() -> ExitCode {
    // Logs go to stderr so they never mix with the game screen
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("war_mission=warn")),
        )
        .with_writer(io::stderr)
        .init();

    match run(Args::parse()) {
        Ok(end) => {
            tracing::info!(?end, "session finished");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "fatal error");
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}

fn run(args: Args) -> Result<GameEnd> {
    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if let Some(color) = args.player_color {
        config.player_color = color;
    }
    if let Some(count) = args.territories {
        config.territory_count = count;
    }
    if args.pause {
        config.pause_after_action = true;
    }

    let seed = args.seed.unwrap_or_else(clock_seed);
    tracing::debug!(seed, "random generator seeded");
    let mut game = Game::new(config, ChaCha8Rng::seed_from_u64(seed))?;

    println!("\n=== WAR: SECRET MISSIONS ===");
    println!("You command the {} army.", game.player().color);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());
    let end = game.run(&mut console)?;

    game.finish();
    Ok(end)
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}
