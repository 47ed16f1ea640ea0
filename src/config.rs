//! Game configuration: defaults, optional JSON file, then CLI overrides.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Print the secret right after the greeting
    pub debug_reveal: bool,
    /// Fixed RNG seed; drawn from the OS when absent
    pub seed: Option<u64>,
    /// tracing filter directive, e.g. "debug" or "guessing_game=trace"
    pub log_level: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            debug_reveal: true,
            seed: None,
            log_level: None,
        }
    }
}

impl GameConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_config(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "guessing_game_{}_{}.json",
            name,
            std::process::id()
        ));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn missing_fields_take_defaults() {
        let cfg: GameConfig = serde_json::from_str(r#"{ "seed": 5 }"#).unwrap();
        assert_eq!(
            cfg,
            GameConfig {
                seed: Some(5),
                ..GameConfig::default()
            }
        );
        assert!(cfg.debug_reveal);
    }

    #[test]
    fn range_is_not_configurable() {
        let err = serde_json::from_str::<GameConfig>(r#"{ "max": 1000 }"#);
        assert!(err.is_err());
    }

    #[test]
    fn loads_from_file() {
        let path = temp_config("load", r#"{ "debug_reveal": false, "log_level": "debug" }"#);
        let cfg = GameConfig::load(Some(path.as_path())).unwrap();
        fs::remove_file(&path).ok();

        assert!(!cfg.debug_reveal);
        assert_eq!(cfg.log_level.as_deref(), Some("debug"));
        assert_eq!(cfg.seed, None);
    }

    #[test]
    fn reports_bad_files() {
        let missing = std::env::temp_dir().join("guessing_game_does_not_exist.json");
        assert!(matches!(
            GameConfig::from_file(&missing),
            Err(ConfigError::Read { .. })
        ));

        let path = temp_config("bad", "not json");
        let res = GameConfig::from_file(&path);
        fs::remove_file(&path).ok();
        assert!(matches!(res, Err(ConfigError::Parse { .. })));
    }
}
