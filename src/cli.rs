use std::path::PathBuf;

use clap::Parser;

use crate::config::GameConfig;

#[derive(Parser, Debug)]
#[command(name = "guessing_game")]
#[command(about = "Guess the secret number between 1 and 100")]
#[command(version)]
pub struct Cli {
    /// Seed for the random number generator (reproducible secret)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Do not print the secret number at startup
    #[arg(long)]
    pub hide_secret: bool,

    /// JSON config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log filter written to stderr, e.g. "debug"
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Cli {
    /// Flags given on the command line win over the config file
    pub fn apply(&self, mut config: GameConfig) -> GameConfig {
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.hide_secret {
            config.debug_reveal = false;
        }
        if self.log_level.is_some() {
            config.log_level = self.log_level.clone();
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_keeps_defaults() {
        let cli = Cli::try_parse_from(["guessing_game"]).unwrap();
        assert_eq!(cli.apply(GameConfig::default()), GameConfig::default());
    }

    #[test]
    fn flags_override_file_values() {
        let from_file = GameConfig {
            debug_reveal: true,
            seed: Some(1),
            log_level: Some("info".into()),
        };
        let cli = Cli::try_parse_from([
            "guessing_game",
            "--seed",
            "9",
            "--hide-secret",
            "--log-level",
            "debug",
        ])
        .unwrap();

        let cfg = cli.apply(from_file);
        assert_eq!(cfg.seed, Some(9));
        assert!(!cfg.debug_reveal);
        assert_eq!(cfg.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn unset_flags_leave_file_values() {
        let from_file = GameConfig {
            debug_reveal: false,
            seed: Some(3),
            log_level: None,
        };
        let cli = Cli::try_parse_from(["guessing_game"]).unwrap();
        assert_eq!(cli.apply(from_file.clone()), from_file);
    }

    #[test]
    fn rejects_bad_seed() {
        assert!(Cli::try_parse_from(["guessing_game", "--seed", "-1"]).is_err());
    }
}
