use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GoodsError {
    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration directory not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Logging setup failed: {0}")]
    Logging(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GoodsError>;
