use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("Unable to read log {}: {source}", path.display())]
    LogUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed comparison on line {line_number}: '{line}' (expected '<received> -> <approved>')")]
    MalformedRecord { line_number: usize, line: String },
}
