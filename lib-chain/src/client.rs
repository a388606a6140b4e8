//! Chain client capability and its JSON-RPC implementation.
//!
//! [`ChainClient`] is the seam between the issuance flow and the network:
//! a read call, a signed single-shot submission, and a bounded receipt wait.
//! [`HttpChainClient`] implements it against one JSON-RPC endpoint with a
//! locally held signing key. There is no retry, fee-bumping or endpoint
//! rotation here; a failed call is surfaced as-is.

use crate::error::{ChainError, ChainResult};
use crate::receipt::Receipt;
use crate::rpc::JsonRpcClient;
use alloy::consensus::{SignableTransaction, TxEip1559, TxEnvelope};
use alloy::eips::eip2718::Encodable2718;
use alloy::eips::eip2930::AccessList;
use alloy::network::TxSignerSync;
use alloy::primitives::{Address, Bytes, TxKind, B256, U256, U64};
use alloy::signers::local::PrivateKeySigner;
use serde_json::json;
use std::time::Duration;
use tokio::time::{sleep, Instant};

/// Network capability consumed by the issuance orchestrator.
///
/// Implementations are expected to be single-attempt: one RPC round-trip per
/// read or submission, and a poll loop bounded by the caller's timeout for
/// receipts. `wait_for_receipt` resolves to `Ok(None)` on a clean deadline
/// expiry so callers can distinguish "not confirmed in time" from transport
/// failure.
#[allow(async_fn_in_trait)]
pub trait ChainClient {
    /// Read-only `eth_call` against the latest block.
    async fn read_call(&self, to: Address, data: Bytes) -> ChainResult<Bytes>;

    /// Sign and broadcast a transaction carrying `value` native wei.
    /// `TxKind::Create` deploys `data` as contract code.
    async fn submit_transaction(&self, to: TxKind, data: Bytes, value: U256) -> ChainResult<B256>;

    /// Poll for the receipt of `hash` until `timeout` elapses.
    async fn wait_for_receipt(&self, hash: B256, timeout: Duration) -> ChainResult<Option<Receipt>>;
}

const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(3);

/// JSON-RPC chain client with local EIP-1559 signing.
pub struct HttpChainClient {
    rpc: JsonRpcClient,
    signer: PrivateKeySigner,
    chain_id: u64,
    poll_interval: Duration,
}

impl HttpChainClient {
    /// Connect to `rpc_url` and pin the endpoint's chain id for signing.
    pub async fn connect(rpc_url: &str, signer: PrivateKeySigner) -> ChainResult<Self> {
        let rpc = JsonRpcClient::new(rpc_url)?;
        let chain_id: U64 = rpc.request("eth_chainId", json!([])).await?;
        tracing::debug!(rpc_url, chain_id = chain_id.to::<u64>(), "chain client connected");
        Ok(Self {
            rpc,
            signer,
            chain_id: chain_id.to::<u64>(),
            poll_interval: DEFAULT_POLL_INTERVAL,
        })
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Address of the signing account.
    pub fn sender(&self) -> Address {
        self.signer.address()
    }

    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    async fn sign_raw(&self, to: TxKind, data: &Bytes, value: U256) -> ChainResult<String> {
        let sender = self.signer.address();
        let nonce: U64 = self
            .rpc
            .request("eth_getTransactionCount", json!([sender, "pending"]))
            .await?;

        let mut call = json!({
            "from": sender,
            "value": value,
            "data": data,
        });
        if let TxKind::Call(addr) = to {
            call["to"] = json!(addr);
        }
        let gas_limit: U64 = self.rpc.request("eth_estimateGas", json!([call])).await?;

        // eth_gasPrice already reflects the current base fee; doubled so the
        // transaction stays valid while it waits in the pool.
        let gas_price: U256 = self.rpc.request("eth_gasPrice", json!([])).await?;
        let tip: U256 = self
            .rpc
            .request("eth_maxPriorityFeePerGas", json!([]))
            .await?;
        let max_fee = gas_price.saturating_mul(U256::from(2));
        let priority = tip.min(max_fee);

        let mut tx = TxEip1559 {
            chain_id: self.chain_id,
            nonce: nonce.to::<u64>(),
            gas_limit: gas_limit.to::<u64>(),
            max_fee_per_gas: max_fee.to::<u128>(),
            max_priority_fee_per_gas: priority.to::<u128>(),
            to,
            value,
            access_list: AccessList::default(),
            input: data.clone(),
        };

        let signature = self
            .signer
            .sign_transaction_sync(&mut tx)
            .map_err(|e| ChainError::Signer(e.to_string()))?;
        let envelope = TxEnvelope::from(tx.into_signed(signature));
        Ok(format!("0x{}", alloy::hex::encode(envelope.encoded_2718())))
    }
}

impl ChainClient for HttpChainClient {
    async fn read_call(&self, to: Address, data: Bytes) -> ChainResult<Bytes> {
        self.rpc
            .request("eth_call", json!([{ "to": to, "data": data }, "latest"]))
            .await
    }

    async fn submit_transaction(&self, to: TxKind, data: Bytes, value: U256) -> ChainResult<B256> {
        let raw = self.sign_raw(to, &data, value).await?;
        let hash: B256 = self
            .rpc
            .request("eth_sendRawTransaction", json!([raw]))
            .await?;
        tracing::info!(%hash, "transaction broadcast");
        Ok(hash)
    }

    async fn wait_for_receipt(&self, hash: B256, timeout: Duration) -> ChainResult<Option<Receipt>> {
        let deadline = Instant::now() + timeout;
        loop {
            let receipt: Option<Receipt> = self
                .rpc
                .request_opt("eth_getTransactionReceipt", json!([hash]))
                .await?;
            if let Some(receipt) = receipt {
                tracing::debug!(%hash, block = receipt.block_number(), "receipt found");
                return Ok(Some(receipt));
            }
            if Instant::now() + self.poll_interval > deadline {
                tracing::debug!(%hash, "confirmation deadline reached without receipt");
                return Ok(None);
            }
            sleep(self.poll_interval).await;
        }
    }
}
