//! Chain client errors.

use thiserror::Error;

/// Error raised by the chain client.
#[derive(Error, Debug)]
pub enum ChainError {
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with a JSON-RPC error object. `data` carries the
    /// raw `error.data` payload when present (revert bytes for failed calls).
    #[error("rpc error {code}: {message}")]
    Rpc {
        code: i64,
        message: String,
        data: Option<String>,
    },

    #[error("malformed rpc response: {0}")]
    Decode(String),

    #[error("signing failed: {0}")]
    Signer(String),
}

impl ChainError {
    /// Revert payload attached to an RPC error, if the endpoint provided one.
    pub fn revert_data(&self) -> Option<&str> {
        match self {
            ChainError::Rpc { data, .. } => data.as_deref(),
            _ => None,
        }
    }
}

/// Result type for chain operations
pub type ChainResult<T> = Result<T, ChainError>;
