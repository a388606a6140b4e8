//! Factory contract ABI surface.
//!
//! The encoding here must stay bit-exact against the deployed MCV2_Bond
//! factory; field widths and ordering are dictated by the protocol, not by
//! us. Log matching for the created token lives behind
//! [`extract_created_address`] so a protocol-side event change only ever
//! touches this module.

use crate::params::{BondingCurveConfig, TokenIdentity};
use alloy::primitives::{Address, Bytes, U256};
use alloy::sol;
use alloy::sol_types::{sol_data, Revert, SolCall, SolError, SolEvent, SolType};
use lib_chain::LogEntry;

sol! {
    /// Token name/symbol tuple as the factory expects it.
    struct TokenParams {
        string name;
        string symbol;
    }

    /// Bonding-curve parameter block of the factory's creation entry point.
    struct BondParams {
        uint16 mintRoyalty;
        uint16 burnRoyalty;
        address reserveToken;
        uint128 maxSupply;
        uint128[] stepRanges;
        uint128[] stepPrices;
    }

    function createToken(TokenParams tokenParams, BondParams bondParams) external payable returns (address);

    function creationFee() external view returns (uint256);

    event TokenCreated(address indexed token, string name, string symbol, address indexed reserveToken);
}

/// Calldata for the payable creation entry point.
pub fn encode_create_token(identity: &TokenIdentity, curve: &BondingCurveConfig) -> Bytes {
    let call = createTokenCall {
        tokenParams: TokenParams {
            name: identity.name.clone(),
            symbol: identity.symbol.clone(),
        },
        bondParams: BondParams {
            mintRoyalty: curve.mint_royalty_bps,
            burnRoyalty: curve.burn_royalty_bps,
            reserveToken: curve.reserve_asset,
            maxSupply: curve.max_supply,
            stepRanges: curve.step_ranges.clone(),
            stepPrices: curve.step_prices.clone(),
        },
    };
    call.abi_encode().into()
}

/// Calldata for the fee-read entry point.
pub fn encode_creation_fee() -> Bytes {
    creationFeeCall {}.abi_encode().into()
}

/// Decode the `uint256` returned by `creationFee()`.
pub fn decode_creation_fee(data: &[u8]) -> Result<U256, alloy::sol_types::Error> {
    <sol_data::Uint<256>>::abi_decode(data)
}

/// Find the factory's `TokenCreated` log and pull the token address out of
/// its first indexed topic. Returns `None` when no log matches — callers
/// treat that as degraded success, never as failure.
pub fn extract_created_address(factory: Address, logs: &[LogEntry]) -> Option<Address> {
    logs.iter()
        .filter(|log| log.address == factory)
        .find(|log| log.topics.first() == Some(&TokenCreated::SIGNATURE_HASH))
        .and_then(|log| log.topics.get(1))
        .map(|topic| Address::from_word(*topic))
}

/// Best-effort decode of a standard `Error(string)` revert payload.
pub fn decode_revert_reason(data: &[u8]) -> Option<String> {
    Revert::abi_decode(data).ok().map(|revert| revert.reason)
}
