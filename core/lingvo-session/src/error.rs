use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("history I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("failed to archive history: {0}")]
    Archive(String),
    #[error("history snapshot is corrupt: {0}")]
    Corrupt(String),
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SessionError>;
