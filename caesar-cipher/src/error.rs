//! Error types for Caesar cipher operations

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CaesarError {
    #[error("Cannot compute letter frequencies of an empty symbol sequence")]
    EmptySequence,

    #[error("Malformed dictionary record {record}: {reason}")]
    Format { record: usize, reason: String },

    #[error("Invalid key {0:?} (expected a letter A-Z or a number 0-25)")]
    InvalidKey(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CaesarError>;
