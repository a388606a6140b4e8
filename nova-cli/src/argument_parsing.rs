//! NovaGuardian Launcher CLI
//!
//! Command-line interface for the NovaGuardian launch tooling: creating the
//! $NOVA bonding-curve token on Mint Club V2 and deploying the guardian
//! contract.

use crate::commands;

use anyhow::Result;
use clap::parser::ValueSource;
use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use serde_json::Value;
use std::path::PathBuf;

/// NovaGuardian Launcher CLI
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(name = "nova")]
pub struct NovaCli {
    /// JSON-RPC endpoint (overrides --network)
    #[arg(long, env = "NOVA_RPC_URL")]
    pub rpc_url: Option<String>,

    /// Named network (built-in: base, base-sepolia; more via cli.toml)
    #[arg(short, long, default_value = "base", env = "NOVA_NETWORK")]
    pub network: String,

    /// Wallet JSON file holding the signing key
    #[arg(short, long, env = "NOVA_WALLET")]
    pub wallet: Option<String>,

    /// Seconds to wait for transaction confirmation
    #[arg(long, default_value = "180", env = "NOVA_CONFIRM_TIMEOUT")]
    pub confirm_timeout: u64,

    /// Configuration file path
    #[arg(short, long, env = "NOVA_CONFIG")]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(short, long, env = "NOVA_VERBOSE")]
    pub verbose: bool,

    /// Output format (json, table)
    #[arg(short, long, default_value = "table", env = "NOVA_FORMAT")]
    pub format: String,

    #[command(subcommand)]
    pub command: NovaCommand,
}

/// Launcher commands
#[derive(Subcommand, Debug, Clone)]
pub enum NovaCommand {
    /// Create the $NOVA bonding-curve token via Mint Club V2
    CreateToken,

    /// Deploy the NovaGuardian contract from a compiled bytecode artifact
    Deploy {
        /// Hex bytecode file (0x-prefixed or raw hex)
        #[arg(short, long)]
        artifact: PathBuf,
    },
}

/// Was the argument given by the user, rather than filled from clap's
/// default? Config-file defaults sit between those two in precedence.
fn given(matches: &ArgMatches, id: &str) -> bool {
    matches!(
        matches.value_source(id),
        Some(ValueSource::CommandLine) | Some(ValueSource::EnvVariable)
    )
}

/// Main CLI runner
pub async fn run_cli() -> Result<()> {
    let matches = NovaCli::command().get_matches();
    let cli = NovaCli::from_arg_matches(&matches)?;

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let config = crate::cli_config::load_config(cli.config.as_deref())?;
    let resolved = crate::cli_config::resolve(
        &config,
        cli.rpc_url.as_deref(),
        given(&matches, "network").then_some(cli.network.as_str()),
        cli.wallet.as_deref(),
        given(&matches, "confirm_timeout").then_some(cli.confirm_timeout),
        given(&matches, "format").then_some(cli.format.as_str()),
    )?;

    let output = crate::output::ConsoleOutput;

    match &cli.command {
        NovaCommand::CreateToken => {
            commands::create_token::handle_create_token(&resolved, &output)
                .await
                .map_err(anyhow::Error::from)
        }
        NovaCommand::Deploy { artifact } => {
            commands::deploy::handle_deploy(artifact, &resolved, &output)
                .await
                .map_err(anyhow::Error::from)
        }
    }
}

/// Format output based on CLI format preference
pub fn format_output(data: &Value, format: &str) -> crate::error::CliResult<String> {
    match format {
        "json" => Ok(serde_json::to_string_pretty(data)?),
        "table" => {
            if let Some(obj) = data.as_object() {
                let mut result = String::new();
                for (key, value) in obj {
                    result.push_str(&format!("{:<20} {}\n", key, value));
                }
                Ok(result)
            } else {
                Ok(data.to_string())
            }
        }
        _ => Err(crate::error::CliError::ConfigError(format!(
            "Unsupported output format: {}",
            format
        ))),
    }
}
