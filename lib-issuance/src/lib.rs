//! Token issuance core for the NovaGuardian launcher.
//!
//! Pure parameter resolution, a point-in-time creation-fee snapshot, and the
//! linear orchestration that turns both into one on-chain token creation.
//! All network access goes through the `lib-chain` [`ChainClient`] seam; the
//! bonding-curve pricing itself lives in the deployed factory contract and is
//! only parameterised here, never computed.
//!
//! # Key Types
//!
//! - [`TokenIdentity`] / [`BondingCurveConfig`]: validated launch parameters
//! - [`CreationFee`]: fee snapshot, valid for the immediately following submission
//! - [`IssuanceOrchestrator`]: submit, confirm, extract the token address
//! - [`IssuanceResult`]: confirmation record plus best-effort token address
//! - [`IssuanceError`]: validation, read, submission, revert and timeout kinds
//!
//! [`ChainClient`]: lib_chain::ChainClient

pub mod abi;
pub mod error;
pub mod fee;
pub mod orchestrator;
pub mod params;

pub use error::{IssuanceError, ValidationError};
pub use fee::{fetch_creation_fee, CreationFee};
pub use orchestrator::{IssuanceOrchestrator, IssuancePhase, IssuanceResult};
pub use params::{BondingCurveConfig, TokenIdentity, MAX_ROYALTY_BPS};
