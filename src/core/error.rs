use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum EngineError {
    #[error("input closed before the number was guessed")]
    InputClosed,
    #[error("terminal I/O error (error: {0})")]
    Io(#[from] std::io::Error),
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Could not read config file {path} (error: {source})")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Malformed config file {path} (error: {source})")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}
