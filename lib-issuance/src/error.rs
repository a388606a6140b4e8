//! Issuance error taxonomy.
//!
//! Every failure is surfaced to the caller with its kind and underlying
//! cause; there are no silent retries and no fee-bump resubmission. A missing
//! token address on a confirmed creation is deliberately *not* an error — see
//! [`IssuanceResult`](crate::orchestrator::IssuanceResult).

use lib_chain::ChainError;
use thiserror::Error;

/// Rejected launch parameters. Never reaches the network.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("token name must not be empty")]
    EmptyName,

    #[error("token symbol must not be empty")]
    EmptySymbol,

    #[error("{which} royalty {bps} bps exceeds the 10000 bps cap")]
    RoyaltyOutOfRange { which: &'static str, bps: u16 },

    #[error("curve needs at least one step")]
    EmptyCurve,

    #[error("step count mismatch: {ranges} ranges vs {prices} prices")]
    StepLengthMismatch { ranges: usize, prices: usize },

    #[error("step ranges must be strictly increasing (violation at index {index})")]
    NonIncreasingRanges { index: usize },

    #[error("final step range {last_range} must equal max supply {max_supply}")]
    FinalRangeMismatch { last_range: u128, max_supply: u128 },
}

/// Terminal failure of one issuance run.
#[derive(Error, Debug)]
pub enum IssuanceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Read-path failure: the fee snapshot or a receipt poll could not be
    /// completed.
    #[error("chain read failed: {0}")]
    ChainRead(#[source] ChainError),

    /// Broadcast rejected before inclusion (insufficient balance, nonce
    /// conflict, RPC rejection). No transaction hash exists in this case.
    #[error("submission rejected: {0}")]
    Submission(#[source] ChainError),

    /// The creation transaction was included and reverted.
    #[error("token creation reverted on-chain: {}", reason.as_deref().unwrap_or("no revert reason"))]
    ExecutionReverted { reason: Option<String> },

    /// No terminal inclusion status within the caller-supplied deadline. The
    /// transaction may still confirm later; reconciliation is up to the caller.
    #[error("no confirmation within {timeout_secs}s")]
    ConfirmationTimeout { timeout_secs: u64 },
}
