//! # Validation Module
//!
//! Input validation for denomination catalogues and generator settings.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Config loading (tender-cli)                                  │
//! │  ├── TOML / env parsing                                                │
//! │  └── Calls into THIS MODULE before the first request                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: DenominationSet::new / ChangeGenerator::with_config          │
//! │  └── THIS MODULE again, so library callers get the same checks         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tender_core::validation::validate_denominations;
//!
//! assert!(validate_denominations(&[500, 100, 25]).is_ok());
//! assert!(validate_denominations(&[25, 0]).is_err());
//! assert!(validate_denominations(&[25, 25]).is_err());
//! ```

use std::collections::BTreeSet;

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Catalogue Validators
// =============================================================================

/// Validates a denomination catalogue.
///
/// ## Rules
/// - Every face value must be positive
/// - No face value may appear twice
///
/// Emptiness is not a validation failure here; it surfaces as
/// `CoreError::NoDenominationsAvailable` from `DenominationSet::new`.
pub fn validate_denominations(values: &[u64]) -> ValidationResult<()> {
    let mut seen = BTreeSet::new();

    for &value in values {
        if value == 0 {
            return Err(ValidationError::MustBePositive {
                field: "denomination".to_string(),
            });
        }

        if !seen.insert(value) {
            return Err(ValidationError::Duplicate {
                field: "denomination".to_string(),
                value: value.to_string(),
            });
        }
    }

    Ok(())
}

// =============================================================================
// Settings Validators
// =============================================================================

/// Validates the maximum number of combinations returned per call.
pub fn validate_max_combinations(max: usize) -> ValidationResult<()> {
    if max == 0 {
        return Err(ValidationError::MustBePositive {
            field: "max_combinations".to_string(),
        });
    }
    Ok(())
}

/// Validates the balanced-spread band settings.
///
/// ## Rules
/// - `high_min` must be strictly above `mid_min`
/// - Weights are percentages and must sum to exactly 100
pub fn validate_bands(
    high_min: u64,
    mid_min: u64,
    weights: [u8; 3],
) -> ValidationResult<()> {
    if high_min <= mid_min {
        return Err(ValidationError::Inconsistent {
            field: "bands".to_string(),
            reason: format!("high_min ({high_min}) must be greater than mid_min ({mid_min})"),
        });
    }

    let sum: u64 = weights.iter().map(|&w| u64::from(w)).sum();
    if sum != 100 {
        return Err(ValidationError::OutOfRange {
            field: "band weights total".to_string(),
            min: 100,
            max: 100,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_denominations() {
        assert!(validate_denominations(&[5, 10, 25, 50, 100, 250, 500]).is_ok());
        assert!(validate_denominations(&[]).is_ok());
        assert!(matches!(
            validate_denominations(&[5, 0]),
            Err(ValidationError::MustBePositive { .. })
        ));
        assert!(matches!(
            validate_denominations(&[10, 5, 10]),
            Err(ValidationError::Duplicate { value, .. }) if value == "10"
        ));
    }

    #[test]
    fn test_validate_max_combinations() {
        assert!(validate_max_combinations(4).is_ok());
        assert!(validate_max_combinations(0).is_err());
    }

    #[test]
    fn test_validate_bands() {
        assert!(validate_bands(500, 100, [50, 30, 20]).is_ok());
        assert!(matches!(
            validate_bands(100, 100, [50, 30, 20]),
            Err(ValidationError::Inconsistent { .. })
        ));
        assert!(matches!(
            validate_bands(500, 100, [50, 30, 30]),
            Err(ValidationError::OutOfRange { .. })
        ));
    }
}
