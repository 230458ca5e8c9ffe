//! Property-based tests for the Outcome laws.
//!
//! - **Match**: `fold` on a success yields the value through `on_ok` only, and
//!   on a failure yields the error through `on_err` only
//! - **Functor Identity**: `outcome.map(|x| x) == outcome`
//! - **Functor Composition**: `outcome.map(f).map(g) == outcome.map(|x| g(f(x)))`
//! - **Monad Left Identity**: `success(a).flat_map(f) == f(a)`
//! - **Monad Right Identity**: `outcome.flat_map(success) == outcome`
//! - **Monad Associativity**:
//!   `outcome.flat_map(f).flat_map(g) == outcome.flat_map(|x| f(x).flat_map(g))`
//!
//! Using proptest, we generate random inputs to verify these laws across a
//! wide range of values.

use proptest::prelude::*;
use railway::collect;
use railway::outcome::{Outcome, failure, success};

fn outcome_strategy() -> impl Strategy<Value = Outcome<i32, String>> {
    prop::result::maybe_ok(any::<i32>(), any::<String>()).prop_map(Outcome::from)
}

fn halve_even(value: i32) -> Outcome<i32, String> {
    if value % 2 == 0 {
        success(value / 2)
    } else {
        failure(format!("{value} is odd"))
    }
}

fn below_limit(value: i32) -> Outcome<i32, String> {
    if value < 1_000 {
        success(value.wrapping_add(7))
    } else {
        failure(format!("{value} is too large"))
    }
}

// =============================================================================
// Match and Construction
// =============================================================================

proptest! {
    #[test]
    fn prop_fold_success_uses_on_ok(value in any::<i32>()) {
        let outcome: Outcome<i32, String> = success(value);
        let folded = outcome.fold(|x| x, |_| panic!("on_err invoked for a success"));
        prop_assert_eq!(folded, value);
    }

    #[test]
    fn prop_fold_failure_uses_on_err(error in any::<String>()) {
        let outcome: Outcome<i32, String> = failure(error.clone());
        let folded = outcome.fold(|_| panic!("on_ok invoked for a failure"), |e| e);
        prop_assert_eq!(folded, error);
    }

    #[test]
    fn prop_map_success(value in any::<i32>()) {
        let function = |n: i32| n.wrapping_mul(3);
        let outcome: Outcome<i32, String> = success(value);
        prop_assert_eq!(outcome.map(function), success(function(value)));
    }

    #[test]
    fn prop_map_failure_skips_function(error in any::<String>()) {
        let outcome: Outcome<i32, String> = failure(error.clone());
        let mapped = outcome.map(|_: i32| -> i32 { panic!("map invoked for a failure") });
        prop_assert_eq!(mapped, failure(error));
    }

    #[test]
    fn prop_unwrap_or(value in any::<i32>(), fallback in any::<i32>(), error in any::<String>()) {
        let ok: Outcome<i32, String> = success(value);
        let err: Outcome<i32, String> = failure(error);
        prop_assert_eq!(ok.unwrap_or(fallback), value);
        prop_assert_eq!(err.unwrap_or(fallback), fallback);
    }
}

// =============================================================================
// Functor Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_identity_law(outcome in outcome_strategy()) {
        prop_assert_eq!(outcome.clone().map(|x| x), outcome);
    }

    #[test]
    fn prop_composition_law(outcome in outcome_strategy()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left = outcome.clone().map(function1).map(function2);
        let right = outcome.map(|x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Monad Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_left_identity(value in any::<i32>()) {
        let outcome: Outcome<i32, String> = success(value);
        prop_assert_eq!(outcome.flat_map(halve_even), halve_even(value));
    }

    #[test]
    fn prop_right_identity(outcome in outcome_strategy()) {
        prop_assert_eq!(outcome.clone().flat_map(success), outcome);
    }

    #[test]
    fn prop_associativity(outcome in outcome_strategy()) {
        let left = outcome.clone().flat_map(halve_even).flat_map(below_limit);
        let right = outcome.flat_map(|x| halve_even(x).flat_map(below_limit));
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Collection Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_partition_preserves_every_element(outcomes in prop::collection::vec(outcome_strategy(), 0..20)) {
        let expected_successes: Vec<i32> = outcomes.iter().filter_map(|o| o.clone().ok()).collect();
        let expected_failures: Vec<String> = outcomes.iter().filter_map(|o| o.clone().err()).collect();

        let (successes, failures) = collect::partition(outcomes);

        prop_assert_eq!(successes, expected_successes);
        prop_assert_eq!(failures, expected_failures);
    }

    #[test]
    fn prop_all_agrees_with_first_failure(outcomes in prop::collection::vec(outcome_strategy(), 0..20)) {
        let first_failure = outcomes.iter().find_map(|o| o.clone().err());
        let successes: Vec<i32> = outcomes.iter().filter_map(|o| o.clone().ok()).collect();
        let combined = collect::all(outcomes);

        match first_failure {
            Some(error) => prop_assert_eq!(combined, failure(error)),
            None => prop_assert_eq!(combined, success(successes)),
        }
    }

    #[test]
    fn prop_any_agrees_with_first_success(outcomes in prop::collection::vec(outcome_strategy(), 1..20)) {
        let first_success = outcomes.iter().find_map(|o| o.clone().ok());
        let last_failure = outcomes.last().and_then(|o| o.clone().err());
        let combined = collect::any(outcomes).map_err(|error| error.into_failure());

        match first_success {
            Some(value) => prop_assert_eq!(combined, success(value)),
            None => prop_assert_eq!(combined, failure(last_failure)),
        }
    }
}
