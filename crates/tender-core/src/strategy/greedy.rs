//! Greedy largest-first breakdown ("Fewest notes").

use crate::denomination::DenominationSet;
use crate::error::{CoreError, CoreResult};
use crate::strategy::{fill_largest_first, Strategy};
use crate::types::{BreakdownLine, StrategyId};

/// Repeatedly takes the largest note that still fits.
///
/// Optimal in note count for canonical catalogues (each note roughly at
/// least double the previous), which covers the standard catalogue. For other
/// catalogues `MathematicalOptimum` is the exact answer.
///
/// ## Example
/// ```rust
/// use tender_core::denomination::DenominationSet;
/// use tender_core::strategy::{GreedyLargestFirst, Strategy};
///
/// let set = DenominationSet::new(&[5, 10, 25, 50, 100, 250, 500]).unwrap();
/// let lines = GreedyLargestFirst.apply(135, &set).unwrap();
/// let notes: Vec<(u64, u64)> = lines.iter().map(|l| (l.denomination, l.count)).collect();
/// assert_eq!(notes, vec![(100, 1), (25, 1), (10, 1)]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyLargestFirst;

impl Strategy for GreedyLargestFirst {
    fn id(&self) -> StrategyId {
        StrategyId::GreedyLargestFirst
    }

    fn apply(&self, amount: u64, denominations: &DenominationSet) -> CoreResult<Vec<BreakdownLine>> {
        fill_largest_first(amount, denominations.values()).ok_or(CoreError::Unrepresentable { amount })
    }
}
