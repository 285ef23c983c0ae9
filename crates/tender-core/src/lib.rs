//! # tender-core: Pure Change-Making Engine
//!
//! Given the amount owed back to a customer and the note catalogue, this
//! crate lists several distinct ways to hand the amount back, plus the part
//! no combination of notes can cover.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Tender Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              Checkout UI / tender-cli (embedders)               │   │
//! │  │    total + tendered ──► change tabs ──► hand back notes         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ tender-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────┐ ┌──────────────┐ ┌──────────┐ ┌───────────┐   │   │
//! │  │   │denomination│ │representable │ │ strategy │ │ generator │   │   │
//! │  │   │ catalogue  │ │ givable amt  │ │ 4 + 1    │ │ dedup/cap │   │   │
//! │  │   └────────────┘ └──────────────┘ └──────────┘ └───────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STATE • PURE FUNCTIONS                            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`denomination`] - Validated note catalogue
//! - [`representable`] - Largest givable amount
//! - [`strategy`] - Breakdown strategies
//! - [`generator`] - Runs strategies, dedups, caps
//! - [`types`] - Result types shared with the UI
//! - [`money`] - Money type and change due
//! - [`error`] - Domain error types
//! - [`validation`] - Catalogue and settings validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input, same output, same order
//! 2. **No I/O**: logging goes through `tracing` events only
//! 3. **Integer Money**: amounts and notes are integers in the smallest unit
//! 4. **Explicit Errors**: typed errors, never panics for bad input
//!
//! ## Example Usage
//!
//! ```rust
//! use tender_core::{generate, StrategyId};
//!
//! let result = generate(135, &[5, 10, 25, 50, 100, 250, 500]).unwrap();
//!
//! let fewest = &result.combinations[0];
//! assert_eq!(fewest.strategy_id, StrategyId::GreedyLargestFirst);
//! assert_eq!(fewest.total_notes, 3);
//! assert_eq!(result.remainder, 0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod denomination;
pub mod error;
pub mod generator;
pub mod money;
pub mod representable;
pub mod strategy;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use denomination::{DenominationSet, DEFAULT_DENOMINATIONS};
pub use error::{CoreError, CoreResult, ValidationError};
pub use generator::{generate, ChangeGenerator, GeneratorConfig};
pub use money::{change_due, Money};
pub use representable::{max_representable, try_max_representable, try_max_representable_within};
pub use strategy::{BandConfig, Strategy};
pub use types::*;
