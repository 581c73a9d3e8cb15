use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("storage is unavailable: {0}")]
    Unavailable(String),

    #[error("storage file corrupted: {0}")]
    Corrupted(String),

    #[error("cannot access storage directory: {0}")]
    AccessDenied(std::path::PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StorageError>;
