//! Structured error types for the launcher CLI.
//!
//! The library crates keep their own taxonomies; this type adds the purely
//! CLI-side failure modes (configuration, wallet file, artifacts) and carries
//! library errors through verbatim. Exit-code translation happens in `main`
//! via `run_cli`'s returned `Result` — the core never terminates the process.

use thiserror::Error;

/// Launcher CLI error types
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Failed to load wallet from {path}: {reason}")]
    WalletLoadFailed { path: String, reason: String },

    #[error("Unknown network '{0}'. Use: base, base-sepolia, or configure one in cli.toml")]
    UnknownNetwork(String),

    #[error("Deployment failed: {0}")]
    DeploymentFailed(String),

    #[error(transparent)]
    Issuance(#[from] lib_issuance::IssuanceError),

    #[error("Chain client error: {0}")]
    Chain(#[from] lib_chain::ChainError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl From<String> for CliError {
    fn from(s: String) -> Self {
        CliError::Other(s)
    }
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
