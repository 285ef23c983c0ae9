//! # Breakdown Strategies
//!
//! Each strategy turns a representable amount into a breakdown, optimizing a
//! different secondary objective.
//!
//! ## Strategy Lineup
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Priority  Strategy               Objective                            │
//! │  ────────  ─────────────────────  ───────────────────────────────────  │
//! │  1         GreedyLargestFirst     fewest notes (canonical catalogues)  │
//! │  2         BalancedSpread         spread over high/mid/low bands       │
//! │  3         MidDenominationBias    keep the largest note in the till    │
//! │  4         MathematicalOptimum    provably fewest notes (DP)           │
//! │            └─ AvoidSmallChange    fallback when 4 duplicates earlier   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every breakdown comes back sorted by denomination, largest first, with no
//! repeated denomination, so two breakdowns are the same multiset exactly
//! when they compare equal.

mod balanced;
mod greedy;
mod mid_bias;
mod optimum;

pub use balanced::{BalancedSpread, BandConfig};
pub use greedy::GreedyLargestFirst;
pub use mid_bias::MidDenominationBias;
pub use optimum::{AvoidSmallChange, MathematicalOptimum};

use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::fmt;

use crate::denomination::{gcd, DenominationSet};
use crate::error::CoreResult;
use crate::representable::reachable_table;
use crate::types::{lines_from_counts, BreakdownLine, StrategyId};

// =============================================================================
// Strategy Trait
// =============================================================================

/// One deterministic way of breaking an amount into notes.
///
/// `apply` receives an amount the catalogue can represent exactly and must
/// return lines whose totals sum to it. Strategies hold no mutable state, so
/// one instance serves any number of concurrent callers.
pub trait Strategy: fmt::Debug + Send + Sync {
    /// Identifier used for labeling and logging.
    fn id(&self) -> StrategyId;

    /// Breaks `amount` into notes from `denominations`.
    ///
    /// ## Errors
    /// - `NoDenominationsAvailable` when the catalogue it needs is empty
    /// - `Unrepresentable` when a restricted catalogue cannot hit `amount`
    fn apply(&self, amount: u64, denominations: &DenominationSet) -> CoreResult<Vec<BreakdownLine>>;

    /// Variant the generator tries when this strategy's output duplicates an
    /// earlier one.
    fn fallback(&self) -> Option<&dyn Strategy> {
        None
    }
}

/// The built-in lineup in priority order.
pub fn built_in(bands: BandConfig) -> Vec<Box<dyn Strategy>> {
    vec![
        Box::new(GreedyLargestFirst),
        Box::new(BalancedSpread::new(bands)),
        Box::new(MidDenominationBias),
        Box::new(MathematicalOptimum::default()),
    ]
}

// =============================================================================
// Shared Fill Helpers
// =============================================================================

/// Greedy fill that never exceeds `target`. Returns the lines taken and the
/// amount they cover.
pub(crate) fn take_up_to(target: u64, values: &[u64]) -> (Vec<BreakdownLine>, u64) {
    let mut remaining = target;
    let mut lines = Vec::new();

    for &value in values {
        let count = remaining / value;
        if count > 0 {
            lines.push(BreakdownLine::new(value, count));
            remaining -= count * value;
        }
    }

    (lines, target - remaining)
}

/// Exact largest-first fill of `amount` from `values` (descending).
///
/// Plain greedy first. When greedy strands a remainder (non-canonical
/// catalogue such as `[25, 10]` for 30) the lexicographically largest exact
/// count vector is found with suffix reachability tables instead. `None`
/// means no exact fill exists.
pub(crate) fn fill_largest_first(amount: u64, values: &[u64]) -> Option<Vec<BreakdownLine>> {
    let (lines, covered) = take_up_to(amount, values);
    if covered == amount {
        return Some(lines);
    }

    let step = values.iter().fold(0, |acc, &value| gcd(acc, value));
    if step == 0 || amount % step != 0 {
        return None;
    }

    let limit = (amount / step) as usize;
    let units: Vec<usize> = values.iter().map(|&value| (value / step) as usize).collect();

    // suffixes[i][v]: v reachable using units[i..]
    let mut suffixes = vec![reachable_table(limit, &[])];
    for i in (0..units.len()).rev() {
        let mut table = suffixes[suffixes.len() - 1].clone();
        let unit = units[i];
        if unit <= limit {
            for v in unit..=limit {
                if table[v - unit] {
                    table[v] = true;
                }
            }
        }
        suffixes.push(table);
    }
    suffixes.reverse();

    if !suffixes[0][limit] {
        return None;
    }

    let mut counts = vec![0u64; units.len()];
    let mut v = limit;
    for (i, &unit) in units.iter().enumerate() {
        let rest = &suffixes[i + 1];
        let count = (0..=v / unit).rev().find(|&c| rest[v - c * unit])?;
        counts[i] = count as u64;
        v -= count * unit;
    }

    Some(lines_from_counts(values, &counts))
}

/// Merges lines that may repeat a denomination into one sorted breakdown.
pub(crate) fn merge_lines(lines: impl IntoIterator<Item = BreakdownLine>) -> Vec<BreakdownLine> {
    let mut counts: BTreeMap<Reverse<u64>, u64> = BTreeMap::new();
    for line in lines {
        *counts.entry(Reverse(line.denomination)).or_insert(0) += line.count;
    }

    counts
        .into_iter()
        .map(|(Reverse(denomination), count)| BreakdownLine::new(denomination, count))
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn amount_of(lines: &[BreakdownLine]) -> u64 {
        lines.iter().map(|line| line.total).sum()
    }

    #[test]
    fn test_take_up_to_never_exceeds_target() {
        let (lines, covered) = take_up_to(67, &[500]);
        assert!(lines.is_empty());
        assert_eq!(covered, 0);

        let (lines, covered) = take_up_to(300, &[250, 100]);
        assert_eq!(lines, vec![BreakdownLine::new(250, 1)]);
        assert_eq!(covered, 250);
    }

    #[test]
    fn test_fill_largest_first_canonical() {
        let lines = fill_largest_first(135, &[500, 250, 100, 50, 25, 10, 5]).unwrap();
        assert_eq!(
            lines,
            vec![BreakdownLine::new(100, 1), BreakdownLine::new(25, 1), BreakdownLine::new(10, 1)]
        );
    }

    #[test]
    fn test_fill_largest_first_recovers_from_greedy_dead_end() {
        // greedy takes 25 and strands 5
        let lines = fill_largest_first(30, &[25, 10]).unwrap();
        assert_eq!(lines, vec![BreakdownLine::new(10, 3)]);

        // 25 + 10×2 keeps as many 25s as an exact fill allows
        let lines = fill_largest_first(45, &[25, 10]).unwrap();
        assert_eq!(lines, vec![BreakdownLine::new(25, 1), BreakdownLine::new(10, 2)]);
        assert_eq!(amount_of(&lines), 45);
    }

    #[test]
    fn test_fill_largest_first_impossible() {
        assert!(fill_largest_first(15, &[25, 10]).is_none());
        assert!(fill_largest_first(5, &[]).is_none());
        assert_eq!(fill_largest_first(0, &[]), Some(Vec::new()));
    }

    #[test]
    fn test_merge_lines() {
        let merged = merge_lines(vec![
            BreakdownLine::new(25, 1),
            BreakdownLine::new(100, 1),
            BreakdownLine::new(25, 2),
        ]);
        assert_eq!(merged, vec![BreakdownLine::new(100, 1), BreakdownLine::new(25, 3)]);
    }

    #[test]
    fn test_built_in_priority_order() {
        let ids: Vec<StrategyId> = built_in(BandConfig::default()).iter().map(|s| s.id()).collect();
        assert_eq!(
            ids,
            vec![
                StrategyId::GreedyLargestFirst,
                StrategyId::BalancedSpread,
                StrategyId::MidDenominationBias,
                StrategyId::MathematicalOptimum,
            ]
        );
    }
}
