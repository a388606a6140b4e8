//! NovaGuardian Launcher CLI
//!
//! Command-line front end over `lib-issuance`: one command creates the $NOVA
//! bonding-curve token through the Mint Club V2 factory, the other deploys
//! the auxiliary NovaGuardian contract. Business logic stays in the library
//! crates; this crate owns argument parsing, configuration resolution,
//! output and exit-code translation.

pub mod argument_parsing;
pub mod cli_config;
pub mod commands;
pub mod error;
pub mod output;
pub mod profile;

pub use argument_parsing::{format_output, run_cli, NovaCli, NovaCommand};
pub use error::{CliError, CliResult};
pub use output::Output;

/// CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
