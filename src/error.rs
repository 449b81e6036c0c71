use thiserror::Error;

#[derive(Error, Debug)]
pub enum Hi3510Error {
    #[error("Transport error: {0}")]
    TransportError(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Storage error: {0}")]
    StorageError(String),
}

pub type Result<T> = std::result::Result<T, Hi3510Error>;
