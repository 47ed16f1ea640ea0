use std::cmp::Ordering;
use std::fmt;
use std::io::{self, Write};
use std::num::IntErrorKind;

use rand::Rng;
use rand_core::RngCore;
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::core::game::Game;
use crate::core::terminal::TerminalContext;

pub const SECRET_MIN: u32 = 1;
pub const SECRET_MAX: u32 = 100;

const GREETING: &str = "Guess the number!";
const REJECTED: &str = "Please type a number!";

/// The value to guess, always inside `SECRET_MIN..=SECRET_MAX`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecretNumber(u32);

impl SecretNumber {
    /// Uniform draw over the whole range
    pub fn draw<R: RngCore>(rng: &mut R) -> Self {
        Self(rng.random_range(SECRET_MIN..=SECRET_MAX))
    }

    pub fn new(value: u32) -> Option<Self> {
        (SECRET_MIN..=SECRET_MAX).contains(&value).then_some(Self(value))
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for SecretNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated guess. Values past `u64::MAX` saturate, they are too big either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guess(u64);

impl Guess {
    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum GuessError {
    #[error("not a number: {0:?}")]
    InvalidFormat(String),
    #[error("the game is already won")]
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    TooSmall,
    TooBig,
    Correct,
}

impl GuessOutcome {
    pub fn message(self) -> &'static str {
        match self {
            GuessOutcome::TooSmall => "Too small!",
            GuessOutcome::TooBig => "Too big!",
            GuessOutcome::Correct => "You win!",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Won,
}

/// Accepts only a non-empty run of ASCII digits. No sign, no decimal point, no whitespace.
pub fn validate(raw: &str) -> Result<Guess, GuessError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(GuessError::InvalidFormat(raw.to_string()));
    }

    match raw.parse::<u64>() {
        Ok(n) => Ok(Guess(n)),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Ok(Guess(u64::MAX)),
        Err(_) => Err(GuessError::InvalidFormat(raw.to_string())),
    }
}

pub fn compare(guess: Guess, secret: SecretNumber) -> GuessOutcome {
    match guess.0.cmp(&u64::from(secret.0)) {
        Ordering::Less => GuessOutcome::TooSmall,
        Ordering::Greater => GuessOutcome::TooBig,
        Ordering::Equal => GuessOutcome::Correct,
    }
}

pub struct NumberGame {
    secret: SecretNumber,
    reveal_secret: bool,
    state: GameState,
    attempts: u32,
}

impl NumberGame {
    pub fn new<R: RngCore>(config: &GameConfig, rng: &mut R) -> Self {
        Self::with_secret(SecretNumber::draw(rng), config.debug_reveal)
    }

    pub fn with_secret(secret: SecretNumber, reveal_secret: bool) -> Self {
        debug!(%secret, reveal_secret, "new number game");
        Self {
            secret,
            reveal_secret,
            state: GameState::Playing,
            attempts: 0,
        }
    }

    pub fn secret(&self) -> SecretNumber {
        self.secret
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Accepted guesses so far; rejected input does not count
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// One turn without any output. Rejected input leaves the game untouched.
    pub fn guess(&mut self, raw: &str) -> Result<GuessOutcome, GuessError> {
        if self.state == GameState::Won {
            return Err(GuessError::GameOver);
        }

        let guess = validate(raw)?;
        self.attempts = self.attempts.saturating_add(1);

        let outcome = compare(guess, self.secret);
        if outcome == GuessOutcome::Correct {
            self.state = GameState::Won;
            info!(attempts = self.attempts, "number guessed");
        }
        Ok(outcome)
    }
}

impl Game for NumberGame {
    const PROMPT: &'static str = "Please input your guess: ";

    fn greeting<W: Write>(&self, ctx: &mut TerminalContext<W>) -> io::Result<()> {
        ctx.print_line(GREETING)?;
        if self.reveal_secret {
            ctx.print_line(&format!("(Debug) The secret number is: {}", self.secret))?;
        }
        Ok(())
    }

    fn handle_input<W: Write>(&mut self, line: &str, ctx: &mut TerminalContext<W>) -> io::Result<()> {
        match self.guess(line) {
            Ok(outcome) => ctx.print_line(outcome.message()),
            Err(GuessError::InvalidFormat(raw)) => {
                debug!(input = %raw, "rejected guess");
                ctx.print_line(REJECTED)
            }
            Err(GuessError::GameOver) => Ok(()),
        }
    }

    fn is_finished(&self) -> bool {
        self.state == GameState::Won
    }
}
