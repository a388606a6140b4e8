//! Parameter resolution for a bonding-curve token launch.
//!
//! Pure functions of their inputs: no network access, no side effects. The
//! constructors validate internal consistency only — symbol uniqueness within
//! the factory deployment is enforced on-chain and surfaces as a transaction
//! failure, not here.

use crate::error::ValidationError;
use alloy::primitives::Address;

/// Royalty values are basis points; the factory caps them at 100 %.
pub const MAX_ROYALTY_BPS: u16 = 10_000;

/// Immutable name/symbol pair for the token being created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenIdentity {
    pub name: String,
    pub symbol: String,
}

impl TokenIdentity {
    pub fn new(name: impl Into<String>, symbol: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        let symbol = symbol.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if symbol.trim().is_empty() {
            return Err(ValidationError::EmptySymbol);
        }
        Ok(Self { name, symbol })
    }
}

/// Validated bonding-curve shape handed to the factory verbatim.
///
/// Amounts are 18-decimal fixed point, matching the factory's `uint128`
/// widths. `step_prices[i]` is the per-unit price for supply minted up to
/// `step_ranges[i]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BondingCurveConfig {
    pub mint_royalty_bps: u16,
    pub burn_royalty_bps: u16,
    /// Token deposited to mint, and returned on burn of, the new token.
    pub reserve_asset: Address,
    pub max_supply: u128,
    pub step_ranges: Vec<u128>,
    pub step_prices: Vec<u128>,
}

impl BondingCurveConfig {
    pub fn new(
        mint_royalty_bps: u16,
        burn_royalty_bps: u16,
        reserve_asset: Address,
        max_supply: u128,
        step_ranges: Vec<u128>,
        step_prices: Vec<u128>,
    ) -> Result<Self, ValidationError> {
        let config = Self {
            mint_royalty_bps,
            burn_royalty_bps,
            reserve_asset,
            max_supply,
            step_ranges,
            step_prices,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.mint_royalty_bps > MAX_ROYALTY_BPS {
            return Err(ValidationError::RoyaltyOutOfRange {
                which: "mint",
                bps: self.mint_royalty_bps,
            });
        }
        if self.burn_royalty_bps > MAX_ROYALTY_BPS {
            return Err(ValidationError::RoyaltyOutOfRange {
                which: "burn",
                bps: self.burn_royalty_bps,
            });
        }
        if self.step_ranges.is_empty() {
            return Err(ValidationError::EmptyCurve);
        }
        if self.step_ranges.len() != self.step_prices.len() {
            return Err(ValidationError::StepLengthMismatch {
                ranges: self.step_ranges.len(),
                prices: self.step_prices.len(),
            });
        }
        for (i, window) in self.step_ranges.windows(2).enumerate() {
            if window[1] <= window[0] {
                return Err(ValidationError::NonIncreasingRanges { index: i + 1 });
            }
        }
        // Safe to index: emptiness checked above.
        let last = self.step_ranges[self.step_ranges.len() - 1];
        if last != self.max_supply {
            return Err(ValidationError::FinalRangeMismatch {
                last_range: last,
                max_supply: self.max_supply,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reserve() -> Address {
        "0x299c30DD5974BF4D5bFE42C340CA40462816AB07"
            .parse()
            .unwrap()
    }

    fn three_band_curve() -> BondingCurveConfig {
        BondingCurveConfig::new(
            100,
            100,
            reserve(),
            1_000_000,
            vec![100_000, 500_000, 1_000_000],
            vec![1, 5, 10],
        )
        .unwrap()
    }

    #[test]
    fn test_accepts_three_band_curve() {
        let config = three_band_curve();
        assert_eq!(config.step_ranges.len(), config.step_prices.len());
        assert_eq!(*config.step_ranges.last().unwrap(), config.max_supply);
    }

    #[test]
    fn test_rejects_length_mismatch() {
        let err = BondingCurveConfig::new(
            100,
            100,
            reserve(),
            1_000_000,
            vec![100_000, 1_000_000],
            vec![1],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ValidationError::StepLengthMismatch { ranges: 2, prices: 1 }
        ));
    }

    #[test]
    fn test_rejects_non_increasing_ranges() {
        let err = BondingCurveConfig::new(
            100,
            100,
            reserve(),
            1_000_000,
            vec![500_000, 500_000, 1_000_000],
            vec![1, 5, 10],
        )
        .unwrap_err();
        assert!(matches!(err, ValidationError::NonIncreasingRanges { index: 1 }));
    }

    #[test]
    fn test_rejects_final_range_not_max_supply() {
        let err = BondingCurveConfig::new(
            100,
            100,
            reserve(),
            2_000_000,
            vec![100_000, 1_000_000],
            vec![1, 5],
        )
        .unwrap_err();
        assert!(matches!(err, ValidationError::FinalRangeMismatch { .. }));
    }

    #[test]
    fn test_rejects_royalty_above_cap() {
        let err = BondingCurveConfig::new(
            10_001,
            100,
            reserve(),
            1_000_000,
            vec![1_000_000],
            vec![1],
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ValidationError::RoyaltyOutOfRange { which: "mint", bps: 10_001 }
        ));
    }

    #[test]
    fn test_rejects_empty_curve() {
        let err =
            BondingCurveConfig::new(100, 100, reserve(), 0, vec![], vec![]).unwrap_err();
        assert!(matches!(err, ValidationError::EmptyCurve));
    }

    #[test]
    fn test_identity_rejects_blank_fields() {
        assert!(matches!(
            TokenIdentity::new("", "NOVA"),
            Err(ValidationError::EmptyName)
        ));
        assert!(matches!(
            TokenIdentity::new("NovaGuardian Token", "  "),
            Err(ValidationError::EmptySymbol)
        ));
        assert!(TokenIdentity::new("NovaGuardian Token", "NOVA").is_ok());
    }
}
