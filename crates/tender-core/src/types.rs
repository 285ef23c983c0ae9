//! # Domain Types
//!
//! Result types produced by the change-making engine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Result Types                                    │
//! │                                                                         │
//! │  ┌──────────────────────┐                                              │
//! │  │  GenerationResult    │                                              │
//! │  │  ──────────────────  │      ┌──────────────────────┐                │
//! │  │  combinations[] ─────┼─────►│     Combination      │                │
//! │  │  remainder           │      │  ──────────────────  │                │
//! │  │  givable_amount      │      │  strategy_id         │                │
//! │  └──────────────────────┘      │  strategy_name       │                │
//! │                                │  description         │                │
//! │                                │  lines[] ────────────┼──┐             │
//! │                                │  total_notes         │  │             │
//! │                                │  total_amount        │  │             │
//! │                                │  remainder           │  │             │
//! │                                └──────────────────────┘  │             │
//! │                                ┌──────────────────────┐  │             │
//! │                                │    BreakdownLine     │◄─┘             │
//! │                                │  denomination        │                │
//! │                                │  count (≥ 1)         │                │
//! │                                │  total               │                │
//! │                                └──────────────────────┘                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything here is built fresh per call and never mutated afterwards.
//! Field names serialize as camelCase for the checkout UI.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Strategy Identifier
// =============================================================================

/// Identifies which algorithm produced a combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum StrategyId {
    /// Classic greedy: largest note first.
    GreedyLargestFirst,
    /// Amount split across high/mid/low denomination bands.
    BalancedSpread,
    /// Greedy without the largest note.
    MidDenominationBias,
    /// Dynamic-programming minimum note count.
    MathematicalOptimum,
    /// Minimum note count without the smallest note.
    AvoidSmallChange,
    /// Synthetic entry for amounts below the smallest denomination.
    BelowMinimum,
}

impl StrategyId {
    /// Short label shown on the UI tab.
    pub const fn name(&self) -> &'static str {
        match self {
            StrategyId::GreedyLargestFirst => "Fewest notes",
            StrategyId::BalancedSpread => "Balanced mix",
            StrategyId::MidDenominationBias => "Medium notes",
            StrategyId::MathematicalOptimum => "Optimized",
            StrategyId::AvoidSmallChange => "Avoids small change",
            StrategyId::BelowMinimum => "Below smallest denomination",
        }
    }

    /// One-line explanation shown under the tab.
    pub const fn description(&self) -> &'static str {
        match self {
            StrategyId::GreedyLargestFirst => {
                "Hands back the largest notes first for the fewest notes overall"
            }
            StrategyId::BalancedSpread => {
                "Spreads the amount across large, medium and small notes"
            }
            StrategyId::MidDenominationBias => {
                "Keeps the largest note in the till and uses medium notes instead"
            }
            StrategyId::MathematicalOptimum => {
                "Provably minimal note count, preferring fewer kinds of notes"
            }
            StrategyId::AvoidSmallChange => {
                "Minimal note count without using the smallest note"
            }
            StrategyId::BelowMinimum => {
                "The amount is less than the smallest denomination"
            }
        }
    }
}

impl std::fmt::Display for StrategyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Breakdown Line
// =============================================================================

/// One denomination and how many notes of it to hand back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownLine {
    /// Face value in the smallest currency unit.
    pub denomination: u64,
    /// Number of notes, always at least 1.
    pub count: u64,
    /// `denomination × count`.
    pub total: u64,
}

impl BreakdownLine {
    /// Creates a line, deriving `total`.
    #[inline]
    pub const fn new(denomination: u64, count: u64) -> Self {
        BreakdownLine {
            denomination,
            count,
            total: denomination * count,
        }
    }
}

/// Builds breakdown lines from parallel denomination/count slices,
/// skipping zero counts. The input order (descending) is preserved.
pub fn lines_from_counts(denominations: &[u64], counts: &[u64]) -> Vec<BreakdownLine> {
    denominations
        .iter()
        .zip(counts)
        .filter(|(_, &count)| count > 0)
        .map(|(&denomination, &count)| BreakdownLine::new(denomination, count))
        .collect()
}

// =============================================================================
// Combination
// =============================================================================

/// One way to hand back the givable part of the amount owed.
///
/// ## Invariants
/// - `total_notes = Σ lines.count`
/// - `total_amount = Σ lines.total`
/// - `total_amount + remainder = amount owed`
/// - `lines` is sorted descending and empty only when `total_amount = 0`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Combination {
    pub strategy_id: StrategyId,
    pub strategy_name: String,
    pub description: String,
    pub lines: Vec<BreakdownLine>,
    pub total_notes: u64,
    pub total_amount: u64,
    pub remainder: u64,
}

impl Combination {
    /// Labels a breakdown and derives its totals.
    pub fn new(strategy_id: StrategyId, lines: Vec<BreakdownLine>, remainder: u64) -> Self {
        let total_notes = lines.iter().map(|line| line.count).sum();
        let total_amount = lines.iter().map(|line| line.total).sum();

        Combination {
            strategy_id,
            strategy_name: strategy_id.name().to_string(),
            description: strategy_id.description().to_string(),
            lines,
            total_notes,
            total_amount,
            remainder,
        }
    }

    /// The "amount is less than the smallest denomination" entry.
    pub fn below_minimum(amount_owed: u64) -> Self {
        Combination::new(StrategyId::BelowMinimum, Vec::new(), amount_owed)
    }
}

// =============================================================================
// Generation Result
// =============================================================================

/// Output of one `generate` call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    pub combinations: Vec<Combination>,
    /// Part of the amount owed that no combination of notes can cover.
    pub remainder: u64,
    /// Largest amount ≤ the amount owed that notes can cover exactly.
    pub givable_amount: u64,
}

impl GenerationResult {
    /// The "no change due" result.
    pub fn empty() -> Self {
        GenerationResult::default()
    }

    /// Checks if there is nothing to show.
    pub fn is_empty(&self) -> bool {
        self.combinations.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
