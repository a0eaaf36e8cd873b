//! Error types for harness generation

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenError {
    /// The trailing digit run of a message spec does not fit a variant count.
    #[error("message spec {spec:?} has count suffix {digits} which is out of range")]
    CountOutOfRange { spec: String, digits: String },

    #[error("failed to write harness: {0}")]
    Io(#[from] std::io::Error),
}

pub type GenResult<T> = std::result::Result<T, GenError>;
