//! # Error Types
//!
//! Domain-specific error types for tender-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  tender-core errors (this file)                                        │
//! │  ├── CoreError        - Change-making failures                         │
//! │  └── ValidationError  - Malformed catalogue or settings                │
//! │                                                                         │
//! │  tender-cli errors (separate crate)                                    │
//! │  └── CliError         - Config loading, argument and output failures   │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → stderr + exit code     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending values in error messages
//! 3. Errors are enum variants, never String
//! 4. Nothing is silently coerced: a negative amount is an error, not zero

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Change-making errors.
///
/// All variants are local, recoverable-by-caller conditions. The operations
/// are pure, so retrying with the same inputs yields the same error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A negative amount was passed where a non-negative one is required.
    #[error("Invalid amount: {amount} (must not be negative)")]
    InvalidAmount { amount: i64 },

    /// The denomination catalogue is empty.
    ///
    /// ## When This Occurs
    /// - The embedding app supplied an empty catalogue
    /// - A strategy restricted the catalogue down to nothing
    #[error("No denominations available")]
    NoDenominationsAvailable,

    /// The owed amount exceeds the configured ceiling.
    ///
    /// ## User Workflow
    /// ```text
    /// generate(50_000_000)
    ///      │
    ///      ▼
    /// ceiling: 1_000_000
    ///      │
    ///      ▼
    /// AmountTooLarge { amount: 50000000, max: 1000000 }
    ///      │
    ///      ▼
    /// Caller shrinks or rejects the request (no retry)
    /// ```
    #[error("Amount {amount} exceeds the maximum of {max}")]
    AmountTooLarge { amount: u64, max: u64 },

    /// A strategy's restricted catalogue cannot represent the amount exactly.
    ///
    /// Only raised by strategies; the generator drops that strategy.
    #[error("Amount {amount} cannot be represented with the available denominations")]
    Unrepresentable { amount: u64 },

    /// Cash tendered does not cover the sale total.
    #[error("Tendered {tendered} does not cover total {total}")]
    InsufficientTender { total: i64, tendered: i64 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors for catalogues and generator settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: u64, max: u64 },

    /// Duplicate value (e.g., the same denomination listed twice).
    #[error("{field} '{value}' is listed more than once")]
    Duplicate { field: String, value: String },

    /// Two settings contradict each other.
    #[error("{field} is inconsistent: {reason}")]
    Inconsistent { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
