//! Medium-note breakdown ("Medium notes").

use crate::denomination::DenominationSet;
use crate::error::{CoreError, CoreResult};
use crate::strategy::{fill_largest_first, Strategy};
use crate::types::{BreakdownLine, StrategyId};

/// Largest-first fill without the single largest note.
///
/// Hands back more notes but keeps the biggest bill in the till. Falls back
/// to the full catalogue when the largest note is the only one, or when the
/// rest cannot represent the amount.
#[derive(Debug, Clone, Copy, Default)]
pub struct MidDenominationBias;

impl Strategy for MidDenominationBias {
    fn id(&self) -> StrategyId {
        StrategyId::MidDenominationBias
    }

    fn apply(&self, amount: u64, denominations: &DenominationSet) -> CoreResult<Vec<BreakdownLine>> {
        if let Ok(rest) = denominations.without_largest() {
            if let Some(lines) = fill_largest_first(amount, rest.values()) {
                return Ok(lines);
            }
        }

        fill_largest_first(amount, denominations.values()).ok_or(CoreError::Unrepresentable { amount })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::denomination::DEFAULT_DENOMINATIONS;

    #[test]
    fn test_skips_largest_note() {
        let set = DenominationSet::new(&DEFAULT_DENOMINATIONS).unwrap();
        let lines = MidDenominationBias.apply(1_000, &set).unwrap();
        assert_eq!(lines, vec![BreakdownLine::new(250, 4)]);
    }

    #[test]
    fn test_single_note_catalogue_falls_back() {
        let set = DenominationSet::new(&[50]).unwrap();
        let lines = MidDenominationBias.apply(150, &set).unwrap();
        assert_eq!(lines, vec![BreakdownLine::new(50, 3)]);
    }

    #[test]
    fn test_falls_back_when_rest_cannot_represent() {
        // without 25 only 10s remain, which cannot make 35
        let set = DenominationSet::new(&[25, 10]).unwrap();
        let lines = MidDenominationBias.apply(35, &set).unwrap();
        assert_eq!(lines, vec![BreakdownLine::new(25, 1), BreakdownLine::new(10, 1)]);
    }
}
