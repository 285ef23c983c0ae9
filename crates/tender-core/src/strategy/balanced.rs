//! Balanced spread across denomination bands ("Balanced mix").
//!
//! ## Allocation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  amount ──┬── high band (≥ high_min)   target = amount × 50%           │
//! │           ├── mid band  (≥ mid_min)    target = amount × 30%           │
//! │           └── low band  (rest)         everything not yet covered      │
//! │                                                                         │
//! │  High and mid take notes up to their target, never over it. The low    │
//! │  band then covers the leftover exactly, which absorbs both its own     │
//! │  share and whatever integer division or note sizes left behind.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::denomination::DenominationSet;
use crate::error::{CoreError, CoreResult};
use crate::strategy::{fill_largest_first, merge_lines, take_up_to, Strategy};
use crate::types::{BreakdownLine, StrategyId};
use crate::validation::validate_bands;

// =============================================================================
// Band Configuration
// =============================================================================

/// Band boundaries and weights for `BalancedSpread`.
///
/// Boundaries are face values in the smallest currency unit. Weights are
/// percentages of the amount and must sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandConfig {
    /// Notes at or above this value form the high band.
    #[serde(default = "default_high_min")]
    pub high_min: u64,

    /// Notes at or above this value (and below `high_min`) form the mid band.
    #[serde(default = "default_mid_min")]
    pub mid_min: u64,

    #[serde(default = "default_high_weight")]
    pub high_weight: u8,

    #[serde(default = "default_mid_weight")]
    pub mid_weight: u8,

    #[serde(default = "default_low_weight")]
    pub low_weight: u8,
}

fn default_high_min() -> u64 {
    500
}
fn default_mid_min() -> u64 {
    100
}
fn default_high_weight() -> u8 {
    50
}
fn default_mid_weight() -> u8 {
    30
}
fn default_low_weight() -> u8 {
    20
}

impl Default for BandConfig {
    fn default() -> Self {
        BandConfig {
            high_min: default_high_min(),
            mid_min: default_mid_min(),
            high_weight: default_high_weight(),
            mid_weight: default_mid_weight(),
            low_weight: default_low_weight(),
        }
    }
}

impl BandConfig {
    /// Validates boundaries and weights.
    pub fn validate(&self) -> CoreResult<()> {
        validate_bands(
            self.high_min,
            self.mid_min,
            [self.high_weight, self.mid_weight, self.low_weight],
        )?;
        Ok(())
    }

    fn share(amount: u64, weight: u8) -> u64 {
        (u128::from(amount) * u128::from(weight) / 100) as u64
    }
}

// =============================================================================
// Strategy
// =============================================================================

/// Splits the amount across high, mid and low bands for a visibly different
/// note mix than the greedy breakdown.
#[derive(Debug, Clone, Copy, Default)]
pub struct BalancedSpread {
    bands: BandConfig,
}

impl BalancedSpread {
    pub fn new(bands: BandConfig) -> Self {
        BalancedSpread { bands }
    }
}

impl Strategy for BalancedSpread {
    fn id(&self) -> StrategyId {
        StrategyId::BalancedSpread
    }

    fn apply(&self, amount: u64, denominations: &DenominationSet) -> CoreResult<Vec<BreakdownLine>> {
        let bands = &self.bands;
        let high = denominations.band(bands.high_min, u64::MAX);
        let mid = denominations.band(bands.mid_min, bands.high_min);
        let low = denominations.band(0, bands.mid_min);

        // band targets never exceed what is left of the amount, whatever the weights
        let high_target = BandConfig::share(amount, bands.high_weight).min(amount);
        let (high_lines, high_covered) = take_up_to(high_target, &high);
        let mid_target = BandConfig::share(amount, bands.mid_weight).min(amount - high_covered);
        let (mid_lines, mid_covered) = take_up_to(mid_target, &mid);
        let leftover = amount - high_covered - mid_covered;

        let tail = fill_largest_first(leftover, &low)
            .or_else(|| fill_largest_first(leftover, denominations.values()));

        match tail {
            Some(tail) => Ok(merge_lines(high_lines.into_iter().chain(mid_lines).chain(tail))),
            // the band picks left a leftover nothing can cover exactly
            None => fill_largest_first(amount, denominations.values())
                .ok_or(CoreError::Unrepresentable { amount }),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::denomination::DEFAULT_DENOMINATIONS;

    fn standard() -> DenominationSet {
        DenominationSet::new(&DEFAULT_DENOMINATIONS).unwrap()
    }

    #[test]
    fn test_small_amount_falls_into_low_band() {
        // 50% of 135 = 67 (no 500 fits), 30% = 40 (no 250/100 fits)
        let lines = BalancedSpread::default().apply(135, &standard()).unwrap();
        assert_eq!(
            lines,
            vec![
                BreakdownLine::new(50, 2),
                BreakdownLine::new(25, 1),
                BreakdownLine::new(10, 1),
            ]
        );
    }

    #[test]
    fn test_spreads_across_all_bands() {
        // high 500 → 500×1, mid 300 → 250×1, low covers 250
        let lines = BalancedSpread::default().apply(1_000, &standard()).unwrap();
        assert_eq!(
            lines,
            vec![
                BreakdownLine::new(500, 1),
                BreakdownLine::new(250, 1),
                BreakdownLine::new(50, 5),
            ]
        );
    }

    #[test]
    fn test_empty_low_band_uses_full_catalogue() {
        let set = DenominationSet::new(&[1_000, 500, 200]).unwrap();
        let lines = BalancedSpread::default().apply(1_400, &set).unwrap();
        let total: u64 = lines.iter().map(|line| line.total).sum();
        assert_eq!(total, 1_400);
    }

    #[test]
    fn test_custom_boundaries() {
        let bands = BandConfig {
            high_min: 100,
            mid_min: 25,
            ..BandConfig::default()
        };
        // high 67 → nothing, mid 40 → 25×1 (50 > 40), low covers 110
        let lines = BalancedSpread::new(bands).apply(135, &standard()).unwrap();
        assert_eq!(
            lines,
            vec![
                BreakdownLine::new(25, 1),
                BreakdownLine::new(10, 11),
            ]
        );
    }

    #[test]
    fn test_oversized_weights_stay_within_amount() {
        let greedy_high = BandConfig {
            high_weight: 100,
            mid_weight: 100,
            low_weight: 0,
            ..BandConfig::default()
        };
        let lines = BalancedSpread::new(greedy_high).apply(1_000, &standard()).unwrap();
        assert_eq!(lines, vec![BreakdownLine::new(500, 2)]);

        let saturated = BandConfig {
            high_weight: u8::MAX,
            mid_weight: u8::MAX,
            low_weight: u8::MAX,
            ..BandConfig::default()
        };
        let lines = BalancedSpread::new(saturated).apply(135, &standard()).unwrap();
        assert_eq!(
            lines,
            vec![
                BreakdownLine::new(100, 1),
                BreakdownLine::new(25, 1),
                BreakdownLine::new(10, 1),
            ]
        );
    }

    #[test]
    fn test_band_config_validate() {
        assert!(BandConfig::default().validate().is_ok());
        let bad = BandConfig {
            high_weight: 90,
            ..BandConfig::default()
        };
        assert!(bad.validate().is_err());
    }
}
