//! Transaction confirmation records as returned by `eth_getTransactionReceipt`.

use alloy::primitives::{Address, Bytes, B256, U64};
use serde::Deserialize;

/// One emitted event log.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    /// Contract that emitted the log.
    pub address: Address,
    #[serde(default)]
    pub topics: Vec<B256>,
    #[serde(default)]
    pub data: Bytes,
}

/// Confirmation record for a mined transaction.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub transaction_hash: B256,
    /// `0x1` on success, `0x0` on revert.
    pub status: U64,
    pub block_number: U64,
    /// Set only for contract-creation transactions.
    #[serde(default)]
    pub contract_address: Option<Address>,
    #[serde(default)]
    pub logs: Vec<LogEntry>,
}

impl Receipt {
    pub fn succeeded(&self) -> bool {
        self.status == U64::from(1)
    }

    pub fn block_number(&self) -> u64 {
        self.block_number.to::<u64>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receipt_deserializes_from_rpc_shape() {
        let raw = r#"{
            "transactionHash": "0x1111111111111111111111111111111111111111111111111111111111111111",
            "status": "0x1",
            "blockNumber": "0x1a2b3c",
            "contractAddress": null,
            "logs": [{
                "address": "0xc5a076cad94176c2996b32d8466be1ce757faa27",
                "topics": [
                    "0x2222222222222222222222222222222222222222222222222222222222222222"
                ],
                "data": "0x"
            }]
        }"#;
        let receipt: Receipt = serde_json::from_str(raw).unwrap();
        assert!(receipt.succeeded());
        assert_eq!(receipt.block_number(), 0x1a2b3c);
        assert!(receipt.contract_address.is_none());
        assert_eq!(receipt.logs.len(), 1);
        assert_eq!(receipt.logs[0].topics.len(), 1);
    }

    #[test]
    fn test_reverted_receipt_status() {
        let raw = r#"{
            "transactionHash": "0x1111111111111111111111111111111111111111111111111111111111111111",
            "status": "0x0",
            "blockNumber": "0x10",
            "logs": []
        }"#;
        let receipt: Receipt = serde_json::from_str(raw).unwrap();
        assert!(!receipt.succeeded());
    }
}
