//! Issuance orchestration.
//!
//! One run walks a linear phase sequence: build the fee-carrying payload,
//! broadcast it, wait (bounded) for a terminal inclusion status, then scan
//! the logs for the created token. Exactly one transaction is submitted per
//! run that reaches broadcast; nothing is submitted when validation or the
//! fee read fails upstream. There is no resubmission and no cancellation path
//! for an already-broadcast transaction.

use crate::abi;
use crate::error::IssuanceError;
use crate::fee::CreationFee;
use crate::params::{BondingCurveConfig, TokenIdentity};
use alloy::primitives::{Address, Bytes, TxKind, B256};
use lib_chain::{ChainClient, ChainError};
use std::time::Duration;

/// Phases of one issuance run, in order. `Failed` is terminal alongside
/// `Resolved`; a run never revisits an earlier phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssuancePhase {
    Idle,
    FeeAttached,
    Submitted,
    Confirmed,
    Resolved,
    Failed,
}

/// Outcome of a confirmed creation.
///
/// `token_address` comes from best-effort log scanning and is `None` when the
/// expected log shape was not found. That is degraded success, distinct from
/// every [`IssuanceError`] kind: the transaction itself confirmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuanceResult {
    pub transaction_hash: B256,
    pub block_number: u64,
    pub token_address: Option<Address>,
}

/// Drives a single token creation against one factory deployment.
pub struct IssuanceOrchestrator<'a, C: ChainClient> {
    client: &'a C,
    factory: Address,
    confirmation_timeout: Duration,
}

impl<'a, C: ChainClient> IssuanceOrchestrator<'a, C> {
    pub fn new(client: &'a C, factory: Address, confirmation_timeout: Duration) -> Self {
        Self {
            client,
            factory,
            confirmation_timeout,
        }
    }

    /// Run the creation flow once. The fee snapshot is attached verbatim as
    /// the transaction value — no rounding, no substitution.
    pub async fn run(
        &self,
        identity: &TokenIdentity,
        curve: &BondingCurveConfig,
        fee: CreationFee,
    ) -> Result<IssuanceResult, IssuanceError> {
        // Idle -> FeeAttached: pure payload construction, no I/O.
        let payload = abi::encode_create_token(identity, curve);
        tracing::debug!(
            phase = ?IssuancePhase::FeeAttached,
            symbol = %identity.symbol,
            fee_wei = %fee.wei,
            "creation payload built"
        );

        // FeeAttached -> Submitted: single-shot broadcast.
        let hash = self
            .client
            .submit_transaction(TxKind::Call(self.factory), payload.clone(), fee.wei)
            .await
            .map_err(IssuanceError::Submission)?;
        tracing::info!(phase = ?IssuancePhase::Submitted, %hash, "creation transaction broadcast");

        // Submitted -> Confirmed, bounded by the caller-supplied timeout.
        let receipt = self
            .client
            .wait_for_receipt(hash, self.confirmation_timeout)
            .await
            .map_err(IssuanceError::ChainRead)?
            .ok_or(IssuanceError::ConfirmationTimeout {
                timeout_secs: self.confirmation_timeout.as_secs(),
            })?;

        if !receipt.succeeded() {
            let reason = self.recover_revert_reason(payload).await;
            tracing::warn!(phase = ?IssuancePhase::Failed, %hash, ?reason, "creation reverted");
            return Err(IssuanceError::ExecutionReverted { reason });
        }
        tracing::debug!(
            phase = ?IssuancePhase::Confirmed,
            block = receipt.block_number(),
            "creation confirmed"
        );

        // Confirmed -> Resolved: best-effort address extraction.
        let token_address = abi::extract_created_address(self.factory, &receipt.logs);
        if token_address.is_none() {
            tracing::warn!(%hash, "no token-creation log found; reporting success without address");
        }
        tracing::info!(phase = ?IssuancePhase::Resolved, ?token_address, "issuance resolved");

        Ok(IssuanceResult {
            transaction_hash: receipt.transaction_hash,
            block_number: receipt.block_number(),
            token_address,
        })
    }

    /// Replay the creation calldata as a read call and mine the resulting RPC
    /// error for a revert reason. Purely diagnostic; any failure here just
    /// yields `None`.
    async fn recover_revert_reason(&self, payload: Bytes) -> Option<String> {
        match self.client.read_call(self.factory, payload).await {
            Err(ChainError::Rpc { message, data, .. }) => data
                .as_deref()
                .and_then(|hex| alloy::hex::decode(hex.trim_start_matches("0x")).ok())
                .and_then(|bytes| abi::decode_revert_reason(&bytes))
                .or_else(|| reason_from_message(&message)),
            _ => None,
        }
    }
}

fn reason_from_message(message: &str) -> Option<String> {
    let rest = message.strip_prefix("execution reverted")?;
    let rest = rest.trim_start_matches(':').trim();
    if rest.is_empty() {
        None
    } else {
        Some(rest.to_string())
    }
}
