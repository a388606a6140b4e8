//! `deploy` handler: put the NovaGuardian contract on chain from a compiled
//! bytecode artifact.

use crate::cli_config::{self, ResolvedConfig};
use crate::error::{CliError, CliResult};
use crate::output::Output;
use alloy::primitives::{Bytes, TxKind, U256};
use lib_chain::{ChainClient, HttpChainClient};
use std::fs;
use std::path::Path;
use std::time::Duration;

pub async fn handle_deploy(
    artifact: &Path,
    resolved: &ResolvedConfig,
    output: &dyn Output,
) -> CliResult<()> {
    let bytecode = load_artifact(artifact)?;
    let signer = cli_config::load_signer(&resolved.wallet_path)?;
    let client = HttpChainClient::connect(&resolved.rpc_url, signer).await?;
    run_deploy(&client, bytecode, resolved.confirm_timeout, output).await
}

/// Read a creation-bytecode artifact: plain hex, optionally 0x-prefixed,
/// surrounding whitespace ignored.
fn load_artifact(path: &Path) -> CliResult<Bytes> {
    let raw = fs::read_to_string(path)?;
    let hex = raw.trim().trim_start_matches("0x");
    if hex.is_empty() {
        return Err(CliError::DeploymentFailed(format!(
            "artifact {} is empty",
            path.display()
        )));
    }
    let bytes = alloy::hex::decode(hex).map_err(|e| {
        CliError::DeploymentFailed(format!("artifact {} is not hex: {}", path.display(), e))
    })?;
    Ok(Bytes::from(bytes))
}

pub async fn run_deploy<C: ChainClient>(
    client: &C,
    bytecode: Bytes,
    confirm_timeout: Duration,
    output: &dyn Output,
) -> CliResult<()> {
    output.print("Deploying NovaGuardian...")?;

    let hash = client
        .submit_transaction(TxKind::Create, bytecode, U256::ZERO)
        .await?;
    output.print(&format!("TX: {}", hash))?;

    let receipt = client
        .wait_for_receipt(hash, confirm_timeout)
        .await?
        .ok_or_else(|| {
            CliError::DeploymentFailed(format!(
                "no confirmation within {}s",
                confirm_timeout.as_secs()
            ))
        })?;

    if !receipt.succeeded() {
        return Err(CliError::DeploymentFailed(format!(
            "deployment transaction {} reverted",
            hash
        )));
    }

    let address = receipt.contract_address.ok_or_else(|| {
        CliError::DeploymentFailed("receipt carried no contract address".to_string())
    })?;

    output.success(&format!("NovaGuardian deployed to: {}", address))?;
    output.print(&format!("Deployed in block: {}", receipt.block_number()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::testing::MockOutput;
    use alloy::primitives::{Address, B256, U64};
    use lib_chain::{ChainResult, Receipt};
    use std::sync::Mutex;

    fn tx_hash() -> B256 {
        "0xcccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccccc"
            .parse()
            .unwrap()
    }

    fn guardian() -> Address {
        "0x3333333333333333333333333333333333333333".parse().unwrap()
    }

    struct ScriptedChain {
        receipt: Mutex<Option<Receipt>>,
        deployments: Mutex<Vec<(TxKind, Bytes, U256)>>,
    }

    impl ScriptedChain {
        fn with_receipt(receipt: Option<Receipt>) -> Self {
            Self {
                receipt: Mutex::new(receipt),
                deployments: Mutex::new(Vec::new()),
            }
        }
    }

    impl ChainClient for ScriptedChain {
        async fn read_call(&self, _to: Address, _data: Bytes) -> ChainResult<Bytes> {
            Ok(Bytes::new())
        }

        async fn submit_transaction(
            &self,
            to: TxKind,
            data: Bytes,
            value: U256,
        ) -> ChainResult<B256> {
            self.deployments.lock().unwrap().push((to, data, value));
            Ok(tx_hash())
        }

        async fn wait_for_receipt(
            &self,
            _hash: B256,
            _timeout: Duration,
        ) -> ChainResult<Option<Receipt>> {
            Ok(self.receipt.lock().unwrap().take())
        }
    }

    fn deployed_receipt(status: u64, contract_address: Option<Address>) -> Receipt {
        Receipt {
            transaction_hash: tx_hash(),
            status: U64::from(status),
            block_number: U64::from(777),
            contract_address,
            logs: vec![],
        }
    }

    #[tokio::test]
    async fn test_deploy_reports_contract_address() {
        let chain = ScriptedChain::with_receipt(Some(deployed_receipt(1, Some(guardian()))));
        let output = MockOutput::new();

        run_deploy(
            &chain,
            Bytes::from(vec![0x60, 0x80, 0x60, 0x40]),
            Duration::from_secs(60),
            &output,
        )
        .await
        .unwrap();

        let deployments = chain.deployments.lock().unwrap().clone();
        assert_eq!(deployments.len(), 1);
        assert_eq!(deployments[0].0, TxKind::Create);
        assert_eq!(deployments[0].2, U256::ZERO);

        output.assert_printed("NovaGuardian deployed to: 0x3333333333333333333333333333333333333333");
        output.assert_printed("Deployed in block: 777");
    }

    #[tokio::test]
    async fn test_reverted_deploy_fails() {
        let chain = ScriptedChain::with_receipt(Some(deployed_receipt(0, None)));
        let output = MockOutput::new();

        let err = run_deploy(&chain, Bytes::from(vec![0x00]), Duration::from_secs(60), &output)
            .await
            .unwrap_err();
        assert!(matches!(err, CliError::DeploymentFailed(_)));
        assert!(err.to_string().contains("reverted"));
    }

    #[tokio::test]
    async fn test_unconfirmed_deploy_fails() {
        let chain = ScriptedChain::with_receipt(None);
        let output = MockOutput::new();

        let err = run_deploy(&chain, Bytes::from(vec![0x00]), Duration::from_secs(45), &output)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("no confirmation within 45s"));
    }

    #[test]
    fn test_load_artifact_accepts_prefixed_hex() {
        let dir = std::env::temp_dir().join("nova-cli-artifact-test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("guardian.hex");
        fs::write(&path, "0x608060405234\n").unwrap();

        let bytecode = load_artifact(&path).unwrap();
        assert_eq!(bytecode.as_ref(), &[0x60, 0x80, 0x60, 0x40, 0x52, 0x34]);
    }

    #[test]
    fn test_load_artifact_rejects_garbage() {
        let dir = std::env::temp_dir().join("nova-cli-artifact-test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("bad.hex");
        fs::write(&path, "not hex at all").unwrap();

        assert!(matches!(
            load_artifact(&path).unwrap_err(),
            CliError::DeploymentFailed(_)
        ));
    }
}
