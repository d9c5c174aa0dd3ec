//! Property-based tests for the toolkit using proptest
//!
//! These tests verify invariants that must hold for every input, not just
//! the worked examples in each module.

use crate::parallel::{parallel_map, try_parallel_map};
use crate::search::find_first;
use crate::sieve::{is_prime, primes_up_to};
use crate::workload::{fib, fib_tree};
use proptest::prelude::*;

// =========================================================================
// SIEVE PROPERTIES
// =========================================================================

proptest! {
    /// Property: every result is prime and every excluded value in [2, n] is composite
    #[test]
    fn prop_sieve_is_exact(n in 0i64..3000) {
        let primes = primes_up_to(n).unwrap();
        for p in &primes {
            prop_assert!(is_prime(*p), "{} reported prime", p);
        }
        for k in 2..=n {
            if primes.binary_search(&k).is_err() {
                prop_assert!(!is_prime(k), "{} missing from sieve", k);
            }
        }
    }

    /// Property: the result is strictly ascending, hence duplicate free
    #[test]
    fn prop_sieve_strictly_ascending(n in 0i64..3000) {
        let primes = primes_up_to(n).unwrap();
        prop_assert!(primes.windows(2).all(|w| w[0] < w[1]));
    }

    /// Property: any negative bound is rejected
    #[test]
    fn prop_sieve_rejects_negative(n in i64::MIN..0) {
        prop_assert!(primes_up_to(n).unwrap_err().is_invalid_argument());
    }
}

// =========================================================================
// SEARCH PROPERTIES
// =========================================================================

proptest! {
    /// Property: find_first agrees with a plain left-to-right scan
    #[test]
    fn prop_find_first_matches_scan(
        values in prop::collection::vec(any::<i32>(), 0..64),
        threshold in any::<i32>(),
    ) {
        let expected = values.iter().find(|v| **v > threshold);
        prop_assert_eq!(find_first(|v| **v > threshold, &values), expected);
    }
}

// =========================================================================
// PARALLEL MAP PROPERTIES
// =========================================================================

proptest! {
    /// Property: concurrency never changes the result of a pure transform
    #[test]
    fn prop_parallel_matches_sequential(
        values in prop::collection::vec(any::<i64>(), 0..300),
        workers in 1usize..16,
    ) {
        let transform = |x: &i64| x.wrapping_mul(31) ^ 0x5a5a;
        let expected: Vec<i64> = values.iter().map(transform).collect();
        prop_assert_eq!(parallel_map(transform, &values, Some(workers)).unwrap(), expected);
    }

    /// Property: one worker and eight workers agree on the fib workload
    #[test]
    fn prop_worker_count_is_unobservable(
        values in prop::collection::vec(0u64..20, 0..40),
    ) {
        let one = parallel_map(|&n: &u64| fib_tree(n), &values, Some(1)).unwrap();
        let eight = parallel_map(|&n: &u64| fib_tree(n), &values, Some(8)).unwrap();
        prop_assert_eq!(&one, &eight);
        prop_assert_eq!(one, values.iter().map(|&n| fib(n)).collect::<Vec<_>>());
    }

    /// Property: any failing element fails the whole map
    #[test]
    fn prop_any_failure_fails_map(
        len in 1usize..200,
        bad in any::<prop::sample::Index>(),
        workers in 1usize..8,
    ) {
        let bad = bad.index(len);
        let input: Vec<usize> = (0..len).collect();
        let result = try_parallel_map(
            |&i: &usize| if i == bad { Err(format!("element {i}")) } else { Ok(i) },
            &input,
            Some(workers),
        );
        prop_assert_eq!(result.unwrap_err().failed_index(), Some(bad));
    }
}

