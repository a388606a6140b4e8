//! NovaGuardian launcher binary.
//!
//! Parses command-line arguments and delegates to the command handlers.

use nova_cli::run_cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    run_cli().await
}
