use std::io;

use anyhow::Result;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use guessing_game::cli::Cli;
use guessing_game::config::GameConfig;
use guessing_game::core::terminal::TerminalContext;
use guessing_game::games::rand_num;
use guessing_game::telemetry;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. Config file (if any), then CLI flags on top
    let config = cli.apply(GameConfig::load(cli.config.as_deref())?);
    telemetry::init(config.log_level.as_deref())?;

    // 2. Explicit RNG so a seed reproduces the game
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    // 3. Play until the number is guessed
    let stdin = io::stdin();
    let mut ctx = TerminalContext::stdout();
    rand_num::run_game(&config, &mut rng, stdin.lock(), &mut ctx)?;

    Ok(())
}
