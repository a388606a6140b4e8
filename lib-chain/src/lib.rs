//! EVM chain client for the NovaGuardian launcher.
//!
//! This crate is the only place that talks to the network. It exposes a
//! deliberately small capability — read calls, signed transaction submission
//! and bounded receipt polling — behind the [`ChainClient`] trait so the
//! issuance core can be exercised against a scripted double.
//!
//! # Key Types
//!
//! - [`ChainClient`]: the capability consumed by `lib-issuance`
//! - [`HttpChainClient`]: production implementation over JSON-RPC + local signing
//! - [`Receipt`] / [`LogEntry`]: confirmation record and emitted event logs
//! - [`ChainError`]: transport, RPC and signing failures
//!
//! Connection pooling, endpoint rotation and retry policy are out of scope;
//! every call is a single attempt against one endpoint.

pub mod client;
pub mod error;
pub mod receipt;
pub mod rpc;

pub use client::{ChainClient, HttpChainClient};
pub use error::{ChainError, ChainResult};
pub use receipt::{LogEntry, Receipt};
pub use rpc::JsonRpcClient;
