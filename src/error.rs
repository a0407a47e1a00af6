use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort a generation run.
///
/// Per-file tag problems never show up here; they are downgraded to empty
/// metadata by the scanner.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to load config: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("music directory {} does not exist or is not a directory", .0.display())]
    MissingRoot(PathBuf),

    #[error("failed to walk music directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("failed to resolve {}: {source}", path.display())]
    Resolve {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write manifest to {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to serialize manifest: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
