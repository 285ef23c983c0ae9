//! # Change Combination Generator
//!
//! Runs every strategy against the givable amount, drops duplicates, labels
//! the survivors and packages them with the remainder.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  amount_owed ≤ 0 ───────────────────────────────► { [], 0, 0 }         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ceiling check ─────────────────────────────────► AmountTooLarge       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DenominationSet::new ──────────────────────────► NoDenominations /    │
//! │       │                                           Validation            │
//! │       ▼                                                                 │
//! │  givable = max_representable(amount_owed)                              │
//! │  remainder = amount_owed - givable                                     │
//! │       │                                                                 │
//! │       ├── givable == 0 ─────────────────────────► [below_minimum]      │
//! │       ▼                                                                 │
//! │  Greedy → Balanced → MidBias → Optimum (→ AvoidSmallChange)            │
//! │       │   failing strategy: logged and skipped                         │
//! │       │   duplicate breakdown: dropped (or its fallback tried)         │
//! │       ▼                                                                 │
//! │  cap at max_combinations ───────────────────────► GenerationResult     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use tender_core::generate;
//!
//! let result = generate(137, &[5, 10, 25, 50, 100, 250, 500]).unwrap();
//! assert_eq!(result.givable_amount, 135);
//! assert_eq!(result.remainder, 2);
//!
//! let fewest = &result.combinations[0];
//! assert_eq!(fewest.total_notes, 3);
//! assert_eq!(fewest.total_amount + fewest.remainder, 137);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::denomination::DenominationSet;
use crate::error::CoreResult;
use crate::representable::{check_ceiling, try_max_representable_within};
use crate::strategy::{built_in, BandConfig, Strategy};
use crate::types::{BreakdownLine, Combination, GenerationResult, StrategyId};
use crate::validation::validate_max_combinations;

// =============================================================================
// Generator Configuration
// =============================================================================

/// Default number of combinations returned, one per UI tab.
pub const DEFAULT_MAX_COMBINATIONS: usize = 4;

/// Default ceiling on the amount owed, in the smallest currency unit.
///
/// ## Business Reason
/// The optimum strategy's table grows with `amount / gcd`. A till never
/// hands back this much change; anything above it is a typo or abuse.
pub const DEFAULT_MAX_AMOUNT: u64 = 1_000_000;

/// Settings for [`ChangeGenerator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Maximum number of combinations per result (at least 1).
    #[serde(default = "default_max_combinations")]
    pub max_combinations: usize,

    /// Ceiling on the amount owed; `None` disables the check.
    #[serde(default = "default_max_amount")]
    pub max_amount: Option<u64>,

    /// Band settings for the balanced strategy.
    #[serde(default)]
    pub bands: BandConfig,
}

fn default_max_combinations() -> usize {
    DEFAULT_MAX_COMBINATIONS
}
fn default_max_amount() -> Option<u64> {
    Some(DEFAULT_MAX_AMOUNT)
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            max_combinations: default_max_combinations(),
            max_amount: default_max_amount(),
            bands: BandConfig::default(),
        }
    }
}

impl GeneratorConfig {
    /// Validates the cap and the band settings.
    pub fn validate(&self) -> CoreResult<()> {
        validate_max_combinations(self.max_combinations)?;
        self.bands.validate()
    }
}

// =============================================================================
// Generator
// =============================================================================

/// Produces the distinct ways to hand back an amount.
///
/// Holds only immutable settings and stateless strategies; share one
/// instance across threads freely.
#[derive(Debug)]
pub struct ChangeGenerator {
    config: GeneratorConfig,
    strategies: Vec<Box<dyn Strategy>>,
}

impl Default for ChangeGenerator {
    fn default() -> Self {
        let config = GeneratorConfig::default();
        ChangeGenerator {
            strategies: built_in(config.bands),
            config,
        }
    }
}

impl ChangeGenerator {
    /// Creates a generator with the default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator with validated settings.
    pub fn with_config(config: GeneratorConfig) -> CoreResult<Self> {
        config.validate()?;
        Ok(ChangeGenerator {
            strategies: built_in(config.bands),
            config,
        })
    }

    /// Generates the combinations for `amount_owed`.
    ///
    /// ## Errors
    /// Never for `amount_owed ≤ 0` (that is "no change due"). Otherwise:
    /// - `AmountTooLarge` above the configured ceiling
    /// - `NoDenominationsAvailable` / `Validation` for a malformed catalogue
    pub fn generate(&self, amount_owed: i64, denominations: &[u64]) -> CoreResult<GenerationResult> {
        if amount_owed <= 0 {
            debug!(amount_owed, "no change due");
            return Ok(GenerationResult::empty());
        }
        let amount = amount_owed.unsigned_abs();
        check_ceiling(amount, self.config.max_amount)?;

        let set = DenominationSet::new(denominations)?;
        Ok(self.generate_for_set(amount, &set))
    }

    /// Largest amount `≤ amount` the catalogue covers exactly, under this
    /// generator's ceiling.
    ///
    /// ## Errors
    /// Same as [`try_max_representable_within`] with the configured
    /// `max_amount`.
    pub fn max_representable(&self, amount: i64, denominations: &[u64]) -> CoreResult<u64> {
        try_max_representable_within(amount, denominations, self.config.max_amount)
    }

    /// Generates combinations for a positive amount against a validated
    /// catalogue. Skips the ceiling check.
    pub fn generate_for_set(&self, amount: u64, set: &DenominationSet) -> GenerationResult {
        if amount == 0 {
            return GenerationResult::empty();
        }

        let givable = set.max_representable(amount);
        let remainder = amount - givable;
        debug!(amount, givable, remainder, "computed givable amount");

        if givable == 0 {
            return GenerationResult {
                combinations: vec![Combination::below_minimum(amount)],
                remainder: amount,
                givable_amount: 0,
            };
        }

        let mut combinations: Vec<Combination> = Vec::new();
        for strategy in &self.strategies {
            if combinations.len() >= self.config.max_combinations {
                break;
            }
            if let Some((id, lines)) = run_strategy(strategy.as_ref(), givable, set, &combinations) {
                combinations.push(Combination::new(id, lines, remainder));
            }
        }

        if combinations.is_empty() {
            warn!(amount, "every strategy failed");
            return GenerationResult {
                combinations,
                remainder: amount,
                givable_amount: 0,
            };
        }

        GenerationResult {
            combinations,
            remainder,
            givable_amount: givable,
        }
    }
}

/// Runs a strategy, trying its fallback when the output duplicates an
/// accepted combination. A failing strategy is dropped.
fn run_strategy(
    strategy: &dyn Strategy,
    amount: u64,
    set: &DenominationSet,
    accepted: &[Combination],
) -> Option<(StrategyId, Vec<BreakdownLine>)> {
    let mut candidate = Some(strategy);

    while let Some(current) = candidate {
        let id = current.id();
        match current.apply(amount, set) {
            Ok(lines) => {
                debug_assert_eq!(lines.iter().map(|line| line.total).sum::<u64>(), amount);
                if !accepted.iter().any(|combination| combination.lines == lines) {
                    debug!(strategy = ?id, lines = lines.len(), "strategy accepted");
                    return Some((id, lines));
                }
                debug!(strategy = ?id, "duplicate breakdown dropped");
            }
            Err(err) => {
                warn!(strategy = ?id, error = %err, "strategy failed, dropping it");
                return None;
            }
        }
        candidate = current.fallback();
    }

    None
}

/// Generates combinations with the default settings.
///
/// See [`ChangeGenerator::generate`].
pub fn generate(amount_owed: i64, denominations: &[u64]) -> CoreResult<GenerationResult> {
    ChangeGenerator::default().generate(amount_owed, denominations)
}

// =============================================================================
// Unit Tests
// =============================================================================
