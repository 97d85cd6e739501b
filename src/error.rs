use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to read config file {path:?}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("logging setup failed: {0}")]
    Logging(String),

    #[error("cannot rename {path:?}: {reason}")]
    Rename { path: PathBuf, reason: String },

    #[error("not found: {0:?}")]
    NotFound(PathBuf),
}

pub type Result<T> = std::result::Result<T, AppError>;
