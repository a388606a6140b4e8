//! Creation-fee oracle.
//!
//! The factory's creation fee is protocol-governed and mutable, so it is read
//! fresh immediately before each submission and never cached. A snapshot is
//! stale the moment a new block lands; callers re-fetch per attempt instead
//! of reusing one.

use crate::abi;
use crate::error::IssuanceError;
use alloy::primitives::{Address, U256};
use lib_chain::ChainClient;

/// Point-in-time snapshot of the protocol creation fee, in native wei.
/// Valid only for the immediately following submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreationFee {
    pub wei: U256,
}

/// Read the current creation fee from the factory. Single attempt, no retry;
/// retry policy, if any, belongs to the caller.
pub async fn fetch_creation_fee<C: ChainClient>(
    client: &C,
    factory: Address,
) -> Result<CreationFee, IssuanceError> {
    let raw = client
        .read_call(factory, abi::encode_creation_fee())
        .await
        .map_err(IssuanceError::ChainRead)?;

    let wei = abi::decode_creation_fee(&raw).map_err(|e| {
        IssuanceError::ChainRead(lib_chain::ChainError::Decode(format!(
            "creationFee() returned malformed data: {e}"
        )))
    })?;

    tracing::debug!(%factory, fee_wei = %wei, "creation fee snapshot");
    Ok(CreationFee { wei })
}
