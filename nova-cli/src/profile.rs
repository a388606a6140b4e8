//! Launch profile for the NovaGuardian platform token.
//!
//! The $NOVA token is backed by $OPENWORK and sold on a three-band bonding
//! curve through the Mint Club V2 bond contract on Base. Everything here is
//! a constant of the launch; only the endpoint and wallet vary per run.

use alloy::primitives::{address, Address};
use lib_issuance::{BondingCurveConfig, TokenIdentity, ValidationError};

/// Mint Club V2 bond contract (Base mainnet).
pub const MCV2_BOND: Address = address!("c5a076cad94176c2996B32d8466Be1cE757FAa27");

/// $OPENWORK, the reserve asset backing the curve (Base mainnet).
pub const OPENWORK: Address = address!("299c30DD5974BF4D5bFE42C340CA40462816AB07");

const ETHER: u128 = 1_000_000_000_000_000_000;

pub const TOKEN_NAME: &str = "NovaGuardian Token";
pub const TOKEN_SYMBOL: &str = "NOVA";

/// Royalty charged on both mint and burn, in basis points (1%).
pub const ROYALTY_BPS: u16 = 100;

/// The fixed $NOVA identity and curve.
///
/// Three price bands: the first 100K tokens at 0.001 OPENWORK each, up to
/// 500K at 0.005, and the rest of the 1M supply at 0.01.
pub fn launch_profile() -> Result<(TokenIdentity, BondingCurveConfig), ValidationError> {
    let identity = TokenIdentity::new(TOKEN_NAME, TOKEN_SYMBOL)?;
    let curve = BondingCurveConfig::new(
        ROYALTY_BPS,
        ROYALTY_BPS,
        OPENWORK,
        1_000_000 * ETHER,
        vec![100_000 * ETHER, 500_000 * ETHER, 1_000_000 * ETHER],
        vec![ETHER / 1_000, 5 * ETHER / 1_000, ETHER / 100],
    )?;
    Ok((identity, curve))
}

/// Trading page for a launched token.
pub fn mint_club_url(symbol: &str) -> String {
    format!("https://mint.club/token/base/{}", symbol)
}

/// Human-readable max supply, for narration.
pub fn max_supply_display(curve: &BondingCurveConfig) -> String {
    let whole = curve.max_supply / ETHER;
    format!("{} {}", group_thousands(whole), TOKEN_SYMBOL)
}

fn group_thousands(mut n: u128) -> String {
    let mut groups = Vec::new();
    loop {
        let rem = n % 1_000;
        n /= 1_000;
        if n == 0 {
            groups.push(rem.to_string());
            break;
        }
        groups.push(format!("{:03}", rem));
    }
    groups.reverse();
    groups.join(",")
}
