use thiserror::Error;

use crate::models::AvailableItems;

#[derive(Debug, Error)]
pub enum MenuError {
    #[error("Insufficient menu items: need at least one main, side, and drink")]
    EmptyCategory(AvailableItems),

    #[error("Malformed catalog row at line {line}: {reason}")]
    MalformedRow { line: u64, reason: String },

    #[error("Duplicate item name in catalog: {0}")]
    DuplicateItem(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, MenuError>;
