//! # Max Representable Amount
//!
//! Finds the largest amount not above the target that the catalogue can
//! cover exactly. The difference is the remainder the cashier cannot hand
//! back in notes.
//!
//! ## Algorithm
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  g  = gcd(denominations)                                               │
//! │  g₀ = amount - (amount mod g)          every reachable amount is a     │
//! │                                        multiple of g                   │
//! │                                                                         │
//! │  canonical set (all multiples of the smallest note)                    │
//! │      └──► g₀ is reachable with the smallest note alone                 │
//! │                                                                         │
//! │  otherwise, in units of g (a_min, a_max = smallest/largest)            │
//! │      units ≥ (a_min - 1)(a_max - 1)   Schur bound, always reachable    │
//! │      units <  bound                   reachability table, walk down    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use tender_core::representable::max_representable;
//!
//! assert_eq!(max_representable(137, &[5, 10, 25, 50, 100, 250, 500]), 135);
//! assert_eq!(max_representable(3, &[5, 10, 25, 100]), 0);
//!
//! // 15 is a multiple of gcd(10, 25) but no mix of 10s and 25s makes it.
//! assert_eq!(max_representable(15, &[10, 25]), 10);
//! ```

use crate::denomination::DenominationSet;
use crate::error::{CoreError, CoreResult};
use crate::generator::DEFAULT_MAX_AMOUNT;

/// Largest `g ≤ amount` expressible with the given face values.
///
/// Zero face values are ignored; an empty catalogue can represent nothing
/// and yields `0`. Non-canonical catalogues build a table sized by the
/// amount, so untrusted input should go through [`try_max_representable`],
/// which enforces a ceiling.
pub fn max_representable(amount: u64, denominations: &[u64]) -> u64 {
    let mut values: Vec<u64> = denominations
        .iter()
        .copied()
        .filter(|&value| value > 0)
        .collect();
    values.sort_unstable_by(|a, b| b.cmp(a));
    values.dedup();

    match DenominationSet::from_sorted(values) {
        Ok(set) => set.max_representable(amount),
        Err(_) => 0,
    }
}

/// Checked form of [`max_representable`] with the default ceiling of
/// [`DEFAULT_MAX_AMOUNT`].
///
/// ## Errors
/// - `amount < 0` → `InvalidAmount` (never clamped to zero)
/// - `amount` above the ceiling → `AmountTooLarge`
/// - empty catalogue → `NoDenominationsAvailable`
/// - zero or duplicate face value → `Validation`
pub fn try_max_representable(amount: i64, denominations: &[u64]) -> CoreResult<u64> {
    try_max_representable_within(amount, denominations, Some(DEFAULT_MAX_AMOUNT))
}

/// Checked form of [`max_representable`] with an explicit ceiling.
/// `None` disables the ceiling check.
pub fn try_max_representable_within(
    amount: i64,
    denominations: &[u64],
    max_amount: Option<u64>,
) -> CoreResult<u64> {
    if amount < 0 {
        return Err(CoreError::InvalidAmount { amount });
    }
    let amount = amount.unsigned_abs();
    check_ceiling(amount, max_amount)?;

    let set = DenominationSet::new(denominations)?;
    Ok(set.max_representable(amount))
}

/// Rejects amounts above `max_amount`.
///
/// Table sizes grow with the amount, so every checked entry point runs
/// this before building one.
pub(crate) fn check_ceiling(amount: u64, max_amount: Option<u64>) -> CoreResult<()> {
    match max_amount {
        Some(max) if amount > max => Err(CoreError::AmountTooLarge { amount, max }),
        _ => Ok(()),
    }
}

impl DenominationSet {
    /// Largest `g ≤ amount` this catalogue covers exactly.
    pub fn max_representable(&self, amount: u64) -> u64 {
        let step = self.gcd();
        let units = amount / step;
        if units == 0 {
            return 0;
        }

        if self.is_canonical() {
            return units * step;
        }

        let scaled: Vec<u64> = self.values().iter().map(|value| value / step).collect();
        let a_min = scaled.iter().copied().min().unwrap_or(1);
        let a_max = scaled.iter().copied().max().unwrap_or(1);
        let schur_bound = (a_min - 1).saturating_mul(a_max - 1);
        if units >= schur_bound {
            return units * step;
        }

        // one entry per unit below the Schur bound; checked callers cap units
        let table = reachable_table(units as usize, &scaled);
        let best = (0..table.len()).rev().find(|&v| table[v]).unwrap_or(0);
        best as u64 * step
    }
}

/// `table[v]` is true when `v` is a non-negative combination of `units`.
pub(crate) fn reachable_table(limit: usize, units: &[u64]) -> Vec<bool> {
    let mut table = vec![false; limit + 1];
    table[0] = true;

    for &unit in units {
        let unit = unit as usize;
        if unit == 0 || unit > limit {
            continue;
        }
        for v in unit..=limit {
            if table[v - unit] {
                table[v] = true;
            }
        }
    }

    table
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::denomination::DEFAULT_DENOMINATIONS;

    #[test]
    fn test_exact_multiple() {
        assert_eq!(max_representable(135, &DEFAULT_DENOMINATIONS), 135);
    }

    #[test]
    fn test_non_exact_amount() {
        assert_eq!(max_representable(137, &DEFAULT_DENOMINATIONS), 135);
        assert_eq!(max_representable(4, &DEFAULT_DENOMINATIONS), 0);
    }

    #[test]
    fn test_zero_amount() {
        assert_eq!(max_representable(0, &DEFAULT_DENOMINATIONS), 0);
    }

    #[test]
    fn test_empty_catalogue_represents_nothing() {
        assert_eq!(max_representable(100, &[]), 0);
        assert_eq!(max_representable(100, &[0]), 0);
    }

    #[test]
    fn test_uses_gcd_not_smallest() {
        // gcd(4, 6) = 2: 7 → 6, but 2 itself is unreachable
        assert_eq!(max_representable(7, &[4, 6]), 6);
        assert_eq!(max_representable(3, &[4, 6]), 0);
        assert_eq!(max_representable(5, &[4, 6]), 4);
    }

    #[test]
    fn test_non_canonical_gaps() {
        // reachable with {10, 25}: 0, 10, 20, 25, 30, 35, 40, 45, 50, ...
        assert_eq!(max_representable(15, &[10, 25]), 10);
        assert_eq!(max_representable(24, &[10, 25]), 20);
        assert_eq!(max_representable(29, &[10, 25]), 25);
        assert_eq!(max_representable(1_003, &[10, 25]), 1_000);
    }

    #[test]
    fn test_try_max_representable_rejects_negative() {
        assert_eq!(
            try_max_representable(-5, &DEFAULT_DENOMINATIONS).unwrap_err(),
            CoreError::InvalidAmount { amount: -5 }
        );
    }

    #[test]
    fn test_try_max_representable_rejects_empty() {
        assert_eq!(
            try_max_representable(5, &[]).unwrap_err(),
            CoreError::NoDenominationsAvailable
        );
    }

    #[test]
    fn test_try_max_representable_ok() {
        assert_eq!(try_max_representable(137, &DEFAULT_DENOMINATIONS).unwrap(), 135);
    }

    #[test]
    fn test_try_max_representable_enforces_ceiling() {
        // coprime notes far apart: below the Schur bound the table would
        // need one entry per unit of the amount
        let wide = [1_000_003, 1_000_001];
        assert_eq!(
            try_max_representable(400_000_000, &wide).unwrap_err(),
            CoreError::AmountTooLarge {
                amount: 400_000_000,
                max: DEFAULT_MAX_AMOUNT
            }
        );
        assert_eq!(
            try_max_representable_within(5_000, &DEFAULT_DENOMINATIONS, Some(1_000)).unwrap_err(),
            CoreError::AmountTooLarge {
                amount: 5_000,
                max: 1_000
            }
        );
    }

    #[test]
    fn test_try_max_representable_within_limits() {
        assert_eq!(
            try_max_representable(1_000_000, &[1_000_003, 1_000_001]).unwrap(),
            0
        );
        assert_eq!(
            try_max_representable_within(1_000, &DEFAULT_DENOMINATIONS, Some(1_000)).unwrap(),
            1_000
        );
        assert_eq!(
            try_max_representable_within(2_000_003, &[10, 25], None).unwrap(),
            2_000_000
        );
    }

    #[test]
    fn test_reachable_table() {
        let table = reachable_table(7, &[2, 5]);
        let reachable: Vec<usize> = (0..=7).filter(|&v| table[v]).collect();
        assert_eq!(reachable, vec![0, 2, 4, 5, 6, 7]);
    }
}
