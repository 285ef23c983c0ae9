//! Property tests for the change-making engine.
//!
//! ## Running
//!
//! ```bash
//! cargo test -p tender-core --test properties
//! ```

use std::collections::BTreeSet;

use proptest::prelude::*;
use tender_core::denomination::gcd;
use tender_core::{
    generate, max_representable, ChangeGenerator, CoreError, GeneratorConfig, StrategyId,
};

// ============================================================================
// Generators
// ============================================================================

/// Catalogues where every note is a multiple of the smallest, e.g. a base
/// unit times a subset of {1, 2, 5, 10, 20, 50, 100}.
fn canonical_catalogue() -> impl Strategy<Value = Vec<u64>> {
    (
        1u64..=10,
        prop::sample::subsequence(vec![1u64, 2, 5, 10, 20, 50, 100], 1..=7),
    )
        .prop_map(|(base, multipliers)| multipliers.into_iter().map(|m| m * base).collect())
}

/// Arbitrary catalogues, including non-canonical ones such as {10, 25}.
fn any_catalogue() -> impl Strategy<Value = Vec<u64>> {
    prop::collection::btree_set(1u64..=60, 1..=5)
        .prop_map(|values: BTreeSet<u64>| values.into_iter().rev().collect())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// Property: given + remainder == owed for every combination.
    #[test]
    fn conservation_holds(amount in 1i64..20_000, catalogue in any_catalogue()) {
        let result = generate(amount, &catalogue).unwrap();
        prop_assert_eq!(result.givable_amount + result.remainder, amount as u64);

        for combination in &result.combinations {
            prop_assert_eq!(combination.total_amount + combination.remainder, amount as u64);
            prop_assert_eq!(combination.remainder, result.remainder);
        }
    }

    /// Property: lines are exact, positive, sorted and never repeat a note.
    #[test]
    fn breakdowns_are_exact(amount in 1i64..20_000, catalogue in any_catalogue()) {
        let result = generate(amount, &catalogue).unwrap();

        for combination in &result.combinations {
            let mut total = 0;
            let mut notes = 0;
            for line in &combination.lines {
                prop_assert!(line.count >= 1);
                prop_assert_eq!(line.total, line.denomination * line.count);
                prop_assert!(catalogue.contains(&line.denomination));
                total += line.total;
                notes += line.count;
            }
            prop_assert_eq!(total, combination.total_amount);
            prop_assert_eq!(notes, combination.total_notes);

            for pair in combination.lines.windows(2) {
                prop_assert!(pair[0].denomination > pair[1].denomination);
            }

            if combination.lines.is_empty() {
                prop_assert_eq!(combination.total_amount, 0);
                prop_assert_eq!(combination.strategy_id, StrategyId::BelowMinimum);
            } else {
                prop_assert_eq!(combination.total_amount, result.givable_amount);
            }
        }
    }

    /// Property: two calls with the same input give identical output.
    #[test]
    fn generation_is_deterministic(amount in -100i64..20_000, catalogue in any_catalogue()) {
        let first = generate(amount, &catalogue).unwrap();
        let second = generate(amount, &catalogue).unwrap();
        prop_assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    /// Property: no two combinations in one result share a breakdown.
    #[test]
    fn combinations_are_distinct(amount in 1i64..20_000, catalogue in any_catalogue()) {
        let result = generate(amount, &catalogue).unwrap();
        for (i, a) in result.combinations.iter().enumerate() {
            for b in &result.combinations[i + 1..] {
                prop_assert_ne!(&a.lines, &b.lines);
            }
        }
    }

    /// Property: on canonical catalogues the remainder is `amount mod gcd`.
    #[test]
    fn canonical_remainder_is_gcd_modulo(amount in 0u64..1_000_000, catalogue in canonical_catalogue()) {
        let step = catalogue.iter().fold(0, |acc, &value| gcd(acc, value));
        prop_assert_eq!(max_representable(amount, &catalogue), amount - amount % step);
    }

    /// Property: the givable amount never exceeds the request and is a
    /// multiple of the catalogue's gcd.
    #[test]
    fn givable_is_bounded(amount in 0u64..5_000, catalogue in any_catalogue()) {
        let step = catalogue.iter().fold(0, |acc, &value| gcd(acc, value));
        let givable = max_representable(amount, &catalogue);
        prop_assert!(givable <= amount);
        prop_assert_eq!(givable % step, 0);
    }

    /// Property: the result never exceeds the configured cap.
    #[test]
    fn cap_is_respected(
        amount in 1i64..20_000,
        catalogue in any_catalogue(),
        cap in 1usize..=4,
    ) {
        let generator = ChangeGenerator::with_config(GeneratorConfig {
            max_combinations: cap,
            ..GeneratorConfig::default()
        }).unwrap();
        let result = generator.generate(amount, &catalogue).unwrap();
        prop_assert!(result.combinations.len() <= cap);
        prop_assert!(!result.combinations.is_empty());
    }

    /// Property: zero and negative amounts are the empty "no change due" result.
    #[test]
    fn non_positive_amounts_are_empty(amount in i64::MIN..=0, catalogue in any_catalogue()) {
        let result = generate(amount, &catalogue).unwrap();
        prop_assert!(result.combinations.is_empty());
        prop_assert_eq!(result.remainder, 0);
        prop_assert_eq!(result.givable_amount, 0);
    }
}

#[test]
fn oversized_amount_is_rejected() {
    let err = generate(i64::MAX, &[5, 10]).unwrap_err();
    assert!(matches!(err, CoreError::AmountTooLarge { .. }));
}
