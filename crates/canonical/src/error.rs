use thiserror::Error;

/// Errors that can occur while tokenizing an item.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenizeError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("input text empty after normalization")]
    EmptyInput,
}
