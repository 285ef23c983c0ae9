//! # Money Module
//!
//! Provides the `Money` type and the change-due calculation that feeds the
//! change-making engine.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Denominations are integers in the smallest currency unit, so the      │
//! │  amount owed must be one too. A float amount like 134.99999 would      │
//! │  never match a breakdown exactly and the conservation check            │
//! │  (given + remainder == owed) would drift.                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tender_core::money::{change_due, Money};
//!
//! let total = Money::from_minor(1_865);
//! let tendered = Money::from_minor(2_000);
//!
//! let change = change_due(total, tendered).unwrap();
//! assert_eq!(change.minor(), 135);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit.
///
/// ## Design Decisions
/// - **i64 (signed)**: a sale total minus tender can go negative, and that
///   case must be reported, not wrapped
/// - **Single field tuple struct**: zero-cost abstraction over i64
///
/// ## User Workflow Context
/// ```text
/// Sale.total ──┐
///              ├──► change_due() ──► amount owed ──► generate() ──► UI tabs
/// Tendered  ───┘
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from the smallest currency unit.
    #[inline]
    pub const fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    /// Returns the value in the smallest currency unit.
    #[inline]
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }
}

// =============================================================================
// Change Due
// =============================================================================

/// Computes the change owed back for a cash payment.
///
/// ## Rules
/// - `total` must not be negative (`InvalidAmount`)
/// - `tendered` must cover `total` (`InsufficientTender`)
/// - Exact tender yields zero, which the generator treats as "no change due"
///
/// ## Example
/// ```rust
/// use tender_core::error::CoreError;
/// use tender_core::money::{change_due, Money};
///
/// let short = change_due(Money::from_minor(500), Money::from_minor(400));
/// assert!(matches!(short, Err(CoreError::InsufficientTender { .. })));
/// ```
pub fn change_due(total: Money, tendered: Money) -> CoreResult<Money> {
    if total.is_negative() {
        return Err(CoreError::InvalidAmount { amount: total.0 });
    }

    if tendered < total {
        return Err(CoreError::InsufficientTender {
            total: total.0,
            tendered: tendered.0,
        });
    }

    Ok(tendered - total)
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Plain minor-unit display for logs. Currency symbols and separators are the
/// embedding app's job.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
