//! Minimum note-count breakdown by dynamic programming ("Optimized"), and its
//! "Avoids small change" fallback.
//!
//! ## Table Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Work in units of g = gcd(catalogue), so 135 with g = 5 is 27 units.   │
//! │                                                                         │
//! │  Layers run smallest note → largest. For layer i and value v:          │
//! │                                                                         │
//! │    with[v] = best of  with[v - dᵢ] + one more dᵢ                       │
//! │                       after[v - dᵢ] + first dᵢ   (one more kind)       │
//! │    best[v] = best of  after[v]        (no dᵢ)                          │
//! │                       with[v]                                          │
//! │                                                                         │
//! │  "best" compares (notes, kinds) and on a tie prefers more dᵢ, so the   │
//! │  largest notes win ties. Only the dᵢ count per (i, v) is kept for the  │
//! │  walk back: O(units × |catalogue|) memory and time.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::denomination::{gcd, DenominationSet};
use crate::error::{CoreError, CoreResult};
use crate::strategy::Strategy;
use crate::types::{lines_from_counts, BreakdownLine, StrategyId};

// =============================================================================
// Strategies
// =============================================================================

/// Provably minimal note count over the full catalogue.
///
/// Ties are broken by fewer distinct notes, then by larger notes. On the
/// standard catalogue this usually matches `GreedyLargestFirst`; the
/// generator then tries [`AvoidSmallChange`] instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct MathematicalOptimum {
    avoid_small_change: AvoidSmallChange,
}

impl Strategy for MathematicalOptimum {
    fn id(&self) -> StrategyId {
        StrategyId::MathematicalOptimum
    }

    fn apply(&self, amount: u64, denominations: &DenominationSet) -> CoreResult<Vec<BreakdownLine>> {
        solve(amount, denominations.values())
    }

    fn fallback(&self) -> Option<&dyn Strategy> {
        Some(&self.avoid_small_change)
    }
}

/// Minimal note count using every note except the smallest.
#[derive(Debug, Clone, Copy, Default)]
pub struct AvoidSmallChange;

impl Strategy for AvoidSmallChange {
    fn id(&self) -> StrategyId {
        StrategyId::AvoidSmallChange
    }

    fn apply(&self, amount: u64, denominations: &DenominationSet) -> CoreResult<Vec<BreakdownLine>> {
        let reduced = denominations.without_smallest()?;
        solve(amount, reduced.values())
    }
}

fn solve(amount: u64, values: &[u64]) -> CoreResult<Vec<BreakdownLine>> {
    min_note_counts(amount, values)
        .map(|counts| lines_from_counts(values, &counts))
        .ok_or(CoreError::Unrepresentable { amount })
}

// =============================================================================
// Dynamic Program
// =============================================================================

#[derive(Debug, Clone, Copy)]
struct Cell {
    notes: u64,
    kinds: u64,
    /// How many of the current layer's note this cell uses.
    lead: u64,
}

impl Cell {
    fn beats(&self, other: &Cell) -> bool {
        match (self.notes, self.kinds).cmp(&(other.notes, other.kinds)) {
            std::cmp::Ordering::Less => true,
            std::cmp::Ordering::Greater => false,
            std::cmp::Ordering::Equal => self.lead > other.lead,
        }
    }
}

fn pick(a: Option<Cell>, b: Option<Cell>) -> Option<Cell> {
    match (a, b) {
        (Some(x), Some(y)) if y.beats(&x) => Some(y),
        (Some(x), _) => Some(x),
        (None, y) => y,
    }
}

/// Count per note (parallel to `values`, descending) for the minimal
/// breakdown of `amount`, or `None` when `amount` is unreachable.
pub(crate) fn min_note_counts(amount: u64, values: &[u64]) -> Option<Vec<u64>> {
    let step = values.iter().fold(0, |acc, &value| gcd(acc, value));
    if step == 0 {
        return (amount == 0).then(Vec::new);
    }
    if amount % step != 0 {
        return None;
    }

    let limit = (amount / step) as usize;
    let units: Vec<usize> = values.iter().map(|&value| (value / step) as usize).collect();

    let mut after: Vec<Option<Cell>> = vec![None; limit + 1];
    after[0] = Some(Cell {
        notes: 0,
        kinds: 0,
        lead: 0,
    });
    let mut leads: Vec<Vec<u64>> = vec![Vec::new(); units.len()];

    for (i, &unit) in units.iter().enumerate().rev() {
        let mut with: Vec<Option<Cell>> = vec![None; limit + 1];
        let mut best: Vec<Option<Cell>> = Vec::with_capacity(limit + 1);
        let mut lead_row = vec![0u64; limit + 1];

        for v in 0..=limit {
            if v >= unit {
                let extend = with[v - unit].map(|c| Cell {
                    notes: c.notes + 1,
                    kinds: c.kinds,
                    lead: c.lead + 1,
                });
                let start = after[v - unit].map(|c| Cell {
                    notes: c.notes + 1,
                    kinds: c.kinds + 1,
                    lead: 1,
                });
                with[v] = pick(extend, start);
            }

            let skip = after[v].map(|c| Cell { lead: 0, ..c });
            let cell = pick(skip, with[v]);
            lead_row[v] = cell.map_or(0, |c| c.lead);
            best.push(cell);
        }

        leads[i] = lead_row;
        after = best;
    }

    after[limit]?;

    let mut counts = vec![0u64; units.len()];
    let mut v = limit;
    for (i, &unit) in units.iter().enumerate() {
        let count = leads[i][v];
        counts[i] = count;
        v -= count as usize * unit;
    }

    Some(counts)
}

// =============================================================================
// Unit Tests
// =============================================================================
