pub mod game;
pub use game::{
    compare, validate, GameState, Guess, GuessError, GuessOutcome, NumberGame, SecretNumber,
    SECRET_MAX, SECRET_MIN,
};

use std::io::{BufRead, Write};

use rand_core::RngCore;

use crate::config::GameConfig;
use crate::core::{engine::Engine, error::EngineError, terminal::TerminalContext};

/// Game runner for Number Guessing
pub fn run_game<R, I, W>(
    config: &GameConfig,
    rng: &mut R,
    input: I,
    ctx: &mut TerminalContext<W>,
) -> Result<NumberGame, EngineError>
where
    R: RngCore,
    I: BufRead,
    W: Write,
{
    let game = NumberGame::new(config, rng);
    let engine = Engine::new(game, input);
    engine.run(ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::io::Cursor;

    #[test]
    fn sweeping_the_range_always_wins() {
        let sweep: String = (SECRET_MIN..=SECRET_MAX).map(|n| format!("{}\n", n)).collect();
        let config = GameConfig::default();

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut ctx = TerminalContext::new(Vec::new());
            let game = run_game(&config, &mut rng, Cursor::new(sweep.as_str()), &mut ctx).unwrap();

            assert_eq!(game.state(), GameState::Won);
            assert_eq!(game.attempts(), game.secret().value());
        }
    }
}
