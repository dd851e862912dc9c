use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("No content provided")]
    NoContent,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("State store failed: {0}")]
    Store(String),

    #[error("Emit failed: {0}")]
    Emit(String),
}

pub type Result<T> = std::result::Result<T, Error>;
