//! CLI configuration loader and network resolution.
//!
//! Precedence for the RPC endpoint, highest first: `--rpc-url`, the selected
//! `--network` looked up in `~/.nova/cli.toml`, then the built-in network
//! table. Wallet path resolution mirrors this: `--wallet`, config file, then
//! `~/.config/clawnch/wallet.json`.

use crate::error::{CliError, CliResult};
use alloy::signers::local::PrivateKeySigner;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default CLI config filename under ~/.nova/
pub const DEFAULT_CONFIG_FILENAME: &str = "cli.toml";

/// Wallet file relative to the home directory when nothing else is given.
pub const DEFAULT_WALLET_RELATIVE: &str = ".config/clawnch/wallet.json";

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct CliConfig {
    pub defaults: Option<CliDefaults>,
    #[serde(default)]
    pub networks: HashMap<String, NetworkSpec>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct CliDefaults {
    pub network: Option<String>,
    pub wallet: Option<String>,
    pub confirm_timeout: Option<u64>,
    pub format: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum NetworkSpec {
    Url(String),
    Detailed(NetworkProfile),
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct NetworkProfile {
    pub rpc_url: String,
    pub wallet: Option<String>,
}

impl NetworkSpec {
    pub fn rpc_url(&self) -> &str {
        match self {
            NetworkSpec::Url(url) => url.as_str(),
            NetworkSpec::Detailed(profile) => profile.rpc_url.as_str(),
        }
    }

    pub fn wallet(&self) -> Option<&str> {
        match self {
            NetworkSpec::Detailed(profile) => profile.wallet.as_deref(),
            _ => None,
        }
    }
}

/// Fully resolved runtime settings for one invocation.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub rpc_url: String,
    pub wallet_path: PathBuf,
    pub confirm_timeout: Duration,
    pub format: String,
}

pub fn default_config_path() -> PathBuf {
    if let Some(home) = dirs::home_dir() {
        home.join(".nova").join(DEFAULT_CONFIG_FILENAME)
    } else {
        PathBuf::from("./nova-cli.toml")
    }
}

pub fn default_wallet_path() -> PathBuf {
    if let Some(home) = dirs::home_dir() {
        home.join(DEFAULT_WALLET_RELATIVE)
    } else {
        PathBuf::from("./wallet.json")
    }
}

pub fn load_config(path: Option<&str>) -> CliResult<CliConfig> {
    let config_path = path.map(PathBuf::from).unwrap_or_else(default_config_path);

    if !config_path.exists() {
        if path.is_some() {
            return Err(CliError::ConfigError(format!(
                "Configuration file not found: {}",
                config_path.display()
            )));
        }
        return Ok(CliConfig::default());
    }

    let raw = fs::read_to_string(&config_path)
        .map_err(|e| CliError::ConfigError(format!("Failed to read config: {}", e)))?;

    toml::from_str(&raw)
        .map_err(|e| CliError::ConfigError(format!("Invalid CLI config: {}", e)))
}

/// Built-in endpoints for networks the launcher knows out of the box.
fn builtin_rpc_url(network: &str) -> Option<&'static str> {
    match network {
        "base" => Some("https://mainnet.base.org"),
        "base-sepolia" => Some("https://sepolia.base.org"),
        _ => None,
    }
}

/// Merge CLI flags, the config file and built-in defaults into one view.
///
/// `None` for an option means the user gave nothing on the command line or
/// the environment, so the config file's `[defaults]` section applies before
/// the built-in fallback.
pub fn resolve(
    config: &CliConfig,
    rpc_url: Option<&str>,
    network: Option<&str>,
    wallet: Option<&str>,
    confirm_timeout: Option<u64>,
    format: Option<&str>,
) -> CliResult<ResolvedConfig> {
    let defaults = config.defaults.as_ref();

    let network = network
        .or_else(|| defaults.and_then(|d| d.network.as_deref()))
        .unwrap_or("base");
    let network_spec = config.networks.get(network);

    let rpc_url = match rpc_url {
        Some(url) => url.to_string(),
        None => network_spec
            .map(|spec| spec.rpc_url().to_string())
            .or_else(|| builtin_rpc_url(network).map(String::from))
            .ok_or_else(|| CliError::UnknownNetwork(network.to_string()))?,
    };

    let wallet_path = wallet
        .map(PathBuf::from)
        .or_else(|| network_spec.and_then(|spec| spec.wallet().map(PathBuf::from)))
        .or_else(|| defaults.and_then(|d| d.wallet.as_ref().map(PathBuf::from)))
        .unwrap_or_else(default_wallet_path);

    let confirm_timeout = confirm_timeout
        .or_else(|| defaults.and_then(|d| d.confirm_timeout))
        .unwrap_or(180);
    let format = format
        .map(String::from)
        .or_else(|| defaults.and_then(|d| d.format.clone()))
        .unwrap_or_else(|| "table".to_string());

    Ok(ResolvedConfig {
        rpc_url,
        wallet_path,
        confirm_timeout: Duration::from_secs(confirm_timeout),
        format,
    })
}

#[derive(Debug, Deserialize)]
struct WalletFile {
    #[serde(rename = "privateKey")]
    private_key: String,
}

/// Load the signing key from a `{"privateKey": "0x..."}` JSON wallet file.
pub fn load_signer(path: &Path) -> CliResult<PrivateKeySigner> {
    let raw = fs::read_to_string(path).map_err(|e| CliError::WalletLoadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let wallet: WalletFile =
        serde_json::from_str(&raw).map_err(|e| CliError::WalletLoadFailed {
            path: path.display().to_string(),
            reason: format!("invalid wallet file: {}", e),
        })?;

    wallet
        .private_key
        .parse::<PrivateKeySigner>()
        .map_err(|e| CliError::WalletLoadFailed {
            path: path.display().to_string(),
            reason: format!("invalid private key: {}", e),
        })
}
