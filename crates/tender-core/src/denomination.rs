//! # Denomination Catalogue
//!
//! `DenominationSet` is the validated, descending-ordered catalogue every
//! strategy works from.
//!
//! ## Example
//! ```rust
//! use tender_core::denomination::DenominationSet;
//!
//! let set = DenominationSet::new(&[5, 100, 25, 10]).unwrap();
//! assert_eq!(set.values(), &[100, 25, 10, 5]);
//! assert_eq!(set.gcd(), 5);
//! assert!(set.is_canonical());
//! ```

use crate::error::{CoreError, CoreResult};
use crate::validation::validate_denominations;

/// The standard note catalogue used when the embedding app supplies none.
pub const DEFAULT_DENOMINATIONS: [u64; 7] = [500, 250, 100, 50, 25, 10, 5];

/// A non-empty set of positive face values, sorted descending, no duplicates.
///
/// The engine never mutates a catalogue; restricted views (`without_largest`,
/// `without_smallest`, `band`) build new sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenominationSet {
    values: Vec<u64>,
}

impl DenominationSet {
    /// Validates and sorts a catalogue.
    ///
    /// ## Errors
    /// - Empty input → `NoDenominationsAvailable`
    /// - Zero or duplicate face value → `Validation`
    pub fn new(values: &[u64]) -> CoreResult<Self> {
        if values.is_empty() {
            return Err(CoreError::NoDenominationsAvailable);
        }
        validate_denominations(values)?;

        let mut sorted = values.to_vec();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        Ok(DenominationSet { values: sorted })
    }

    /// Builds a set from values already known to be valid and descending.
    pub(crate) fn from_sorted(values: Vec<u64>) -> CoreResult<Self> {
        if values.is_empty() {
            return Err(CoreError::NoDenominationsAvailable);
        }
        Ok(DenominationSet { values })
    }

    /// Face values, largest first.
    #[inline]
    pub fn values(&self) -> &[u64] {
        &self.values
    }

    #[inline]
    pub fn smallest(&self) -> u64 {
        self.values[self.values.len() - 1]
    }

    /// Greatest common divisor of all face values.
    pub fn gcd(&self) -> u64 {
        self.values.iter().fold(0, |acc, &value| gcd(acc, value))
    }

    /// True when every face value is a multiple of the smallest one.
    ///
    /// For such catalogues every multiple of the smallest note is reachable
    /// and plain greedy always lands exactly.
    pub fn is_canonical(&self) -> bool {
        let smallest = self.smallest();
        self.values.iter().all(|value| value % smallest == 0)
    }

    /// The set minus its largest face value.
    pub fn without_largest(&self) -> CoreResult<Self> {
        Self::from_sorted(self.values[1..].to_vec())
    }

    /// The set minus its smallest face value.
    pub fn without_smallest(&self) -> CoreResult<Self> {
        Self::from_sorted(self.values[..self.values.len() - 1].to_vec())
    }

    /// Face values in `[min, max)`, largest first. May be empty.
    pub fn band(&self, min: u64, max: u64) -> Vec<u64> {
        self.values
            .iter()
            .copied()
            .filter(|&value| value >= min && value < max)
            .collect()
    }
}

/// Euclid's algorithm. `gcd(0, n) == n`.
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

// =============================================================================
// Unit Tests
// =============================================================================
