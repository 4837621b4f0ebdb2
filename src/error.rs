use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("Store file not found: {}", .0.display())]
    StoreMissing(PathBuf),

    #[error("Product not found: {0}")]
    ProductNotFound(String),

    #[error("Malformed store data: {0}")]
    Malformed(#[from] csv::Error),

    #[error("Price not in 'x.xx' format: {0:?}")]
    InvalidPrice(String),

    #[error("Cannot write store file {}: {source}", .path.display())]
    WriteFailure {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Store error: {0}")]
    Store(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Input ended before a valid value was supplied")]
    PromptExhausted,
}

pub type Result<T> = std::result::Result<T, InventoryError>;
