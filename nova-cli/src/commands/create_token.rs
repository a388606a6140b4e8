//! `create-token` handler: launch $NOVA through the Mint Club V2 factory.

use crate::argument_parsing::format_output;
use crate::cli_config::{self, ResolvedConfig};
use crate::error::CliResult;
use crate::output::Output;
use crate::profile;
use alloy::primitives::{utils::format_ether, Address};
use lib_chain::{ChainClient, HttpChainClient};
use lib_issuance::{fetch_creation_fee, IssuanceError, IssuanceOrchestrator};
use serde_json::json;
use std::time::Duration;

pub async fn handle_create_token(
    resolved: &ResolvedConfig,
    output: &dyn Output,
) -> CliResult<()> {
    let signer = cli_config::load_signer(&resolved.wallet_path)?;
    let client = HttpChainClient::connect(&resolved.rpc_url, signer).await?;
    let sender = client.sender();
    run_create_token(
        &client,
        sender,
        resolved.confirm_timeout,
        &resolved.format,
        output,
    )
    .await
}

/// The full creation flow against an already-connected client. Split out from
/// the handler so it can run against a scripted chain in tests.
pub async fn run_create_token<C: ChainClient>(
    client: &C,
    sender: Address,
    confirm_timeout: Duration,
    format: &str,
    output: &dyn Output,
) -> CliResult<()> {
    let (identity, curve) = profile::launch_profile().map_err(IssuanceError::from)?;

    output.print(&format!("Creating {} (${})...", identity.name, identity.symbol))?;
    output.print(&format!("Wallet: {}", sender))?;

    let fee = fetch_creation_fee(client, profile::MCV2_BOND).await?;
    output.print(&format!("Creation fee: {} ETH", format_ether(fee.wei)))?;

    output.print("")?;
    output.print("Token Config:")?;
    output.print(&format!("  Name: {}", identity.name))?;
    output.print(&format!("  Symbol: {}", identity.symbol))?;
    output.print(&format!(
        "  Max Supply: {}",
        profile::max_supply_display(&curve)
    ))?;
    output.print("  Reserve: $OPENWORK")?;

    output.print("")?;
    output.print("Creating token...")?;
    let orchestrator = IssuanceOrchestrator::new(client, profile::MCV2_BOND, confirm_timeout);
    let result = orchestrator.run(&identity, &curve, fee).await?;

    output.print(&format!("TX: {}", result.transaction_hash))?;
    output.success(&format!("Token created in block: {}", result.block_number))?;

    match result.token_address {
        Some(address) => {
            output.print("")?;
            output.print(&format!("🎉 ${} Token Address: {}", identity.symbol, address))?;
            output.print("")?;
            output.print(&format!(
                "Mint Club URL: {}",
                profile::mint_club_url(&identity.symbol)
            ))?;
        }
        None => {
            output.warning(
                "Confirmed, but no token-creation log was found; \
                 look the transaction up on a block explorer for the address.",
            )?;
        }
    }

    if format == "json" {
        let summary = json!({
            "name": identity.name,
            "symbol": identity.symbol,
            "transaction_hash": result.transaction_hash,
            "block_number": result.block_number,
            "token_address": result.token_address,
            "creation_fee_wei": fee.wei,
        });
        output.print(&format_output(&summary, format)?)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::testing::MockOutput;
    use alloy::primitives::{Bytes, TxKind, B256, U256, U64};
    use alloy::sol_types::{SolEvent, SolValue};
    use lib_chain::{ChainResult, LogEntry, Receipt};
    use lib_issuance::abi;
    use std::sync::Mutex;

    const ETHER: u128 = 1_000_000_000_000_000_000;

    fn sender() -> Address {
        "0x2222222222222222222222222222222222222222".parse().unwrap()
    }

    fn token() -> Address {
        "0x1111111111111111111111111111111111111111".parse().unwrap()
    }

    fn tx_hash() -> B256 {
        "0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb"
            .parse()
            .unwrap()
    }

    /// Chain double scripted for one fee read and one creation.
    struct ScriptedChain {
        fee_wei: U256,
        receipt: Mutex<Option<Receipt>>,
    }

    impl ScriptedChain {
        fn confirming(fee_wei: U256, logs: Vec<LogEntry>) -> Self {
            Self {
                fee_wei,
                receipt: Mutex::new(Some(Receipt {
                    transaction_hash: tx_hash(),
                    status: U64::from(1),
                    block_number: U64::from(9_876),
                    contract_address: None,
                    logs,
                })),
            }
        }
    }

    impl ChainClient for ScriptedChain {
        async fn read_call(&self, _to: Address, _data: Bytes) -> ChainResult<Bytes> {
            Ok(Bytes::from(self.fee_wei.abi_encode()))
        }

        async fn submit_transaction(
            &self,
            _to: TxKind,
            _data: Bytes,
            _value: U256,
        ) -> ChainResult<B256> {
            Ok(tx_hash())
        }

        async fn wait_for_receipt(
            &self,
            _hash: B256,
            _timeout: std::time::Duration,
        ) -> ChainResult<Option<Receipt>> {
            Ok(self.receipt.lock().unwrap().take())
        }
    }

    fn created_log() -> LogEntry {
        LogEntry {
            address: profile::MCV2_BOND,
            topics: vec![abi::TokenCreated::SIGNATURE_HASH, token().into_word()],
            data: Bytes::new(),
        }
    }

    #[tokio::test]
    async fn test_full_narration_on_success() {
        let chain = ScriptedChain::confirming(U256::from(ETHER / 100), vec![created_log()]);
        let output = MockOutput::new();

        run_create_token(&chain, sender(), Duration::from_secs(60), "table", &output)
            .await
            .unwrap();

        output.assert_printed("Creating NovaGuardian Token ($NOVA)...");
        output.assert_printed("Wallet: 0x2222222222222222222222222222222222222222");
        output.assert_printed("Creation fee: 0.01");
        output.assert_printed("Max Supply: 1,000,000 NOVA");
        output.assert_printed("Token created in block: 9876");
        output.assert_printed("$NOVA Token Address: 0x1111111111111111111111111111111111111111");
        output.assert_printed("https://mint.club/token/base/NOVA");
    }

    #[tokio::test]
    async fn test_degraded_success_warns_instead_of_failing() {
        let chain = ScriptedChain::confirming(U256::ZERO, vec![]);
        let output = MockOutput::new();

        run_create_token(&chain, sender(), Duration::from_secs(60), "table", &output)
            .await
            .unwrap();

        output.assert_printed("Token created in block: 9876");
        output.assert_printed("no token-creation log was found");
    }

    #[tokio::test]
    async fn test_json_format_emits_summary() {
        let chain = ScriptedChain::confirming(U256::from(ETHER / 100), vec![created_log()]);
        let output = MockOutput::new();

        run_create_token(&chain, sender(), Duration::from_secs(60), "json", &output)
            .await
            .unwrap();

        output.assert_printed("\"token_address\"");
        output.assert_printed("\"block_number\": 9876");
    }

    #[tokio::test]
    async fn test_timeout_surfaces_as_error() {
        let chain = ScriptedChain {
            fee_wei: U256::ZERO,
            receipt: Mutex::new(None),
        };
        let output = MockOutput::new();

        let err = run_create_token(&chain, sender(), Duration::from_secs(60), "table", &output)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "no confirmation within 60s");
    }
}
