//! 소거 체 (Elimination sieve)
//!
//! 후보 집합 `[1, n]`에서 각 인수의 배수를 차례로 걸러내어 소수를 얻습니다
//! (Derives the primes by repeatedly filtering multiples of each factor out of
//! the candidate set `[1, n]`).
//!
//! # 소거 과정 (Elimination steps), n = 25
//!
//! ```text
//! 인수 (factor) │ 남은 후보 (surviving candidates)
//! ──────────────┼──────────────────────────────────────────────────────────
//!   시작 (start)│ 1 2 3 4 5 6 7 8 9 10 11 12 ... 25
//!   2           │ 1 2 3 5 7 9 11 13 15 17 19 21 23 25
//!   3           │ 1 2 3 5 7 11 13 17 19 23 25
//!   4           │ (변화 없음, 4는 이미 제거됨 (no change, 4 is already gone))
//!   5           │ 1 2 3 5 7 11 13 17 19 23
//!   1 제거      │ 2 3 5 7 11 13 17 19 23
//! ```
//!
//! 경계 처리 (Boundary handling):
//! - 인수 목록은 `isqrt(n)`에서 멈추므로 `f * f > n`인 인수는 적용되지 않는다
//!   (the factor list stops at `isqrt(n)`, so no factor with `f * f > n` is applied)
//! - 인수 `f` 자신은 항상 후보에 남는다 (a factor `f` always survives its own pass)
//! - `1`은 마지막에 명시적으로 제거한다 (`1` is removed explicitly at the end)

use listkit_common::list::{car, cdr, enumerate_interval, filter};
use listkit_common::{Result, ToolkitError};
use tracing::{debug, trace};

/// 체에 적용되는 인수 목록 `[2, isqrt(n)]` (The factor list `[2, isqrt(n)]` applied by the sieve).
///
/// # 예시 (Examples)
/// ```
/// use listkit::sieve::sieve_factors;
/// assert_eq!(sieve_factors(25), vec![2, 3, 4, 5]);
/// assert_eq!(sieve_factors(24), vec![2, 3, 4]);
/// assert!(sieve_factors(3).is_empty());
/// ```
pub fn sieve_factors(n: i64) -> Vec<i64> {
    if n < 4 {
        return Vec::new();
    }
    enumerate_interval(2, n.isqrt())
}

/// `n` 이하의 모든 소수를 오름차순으로 반환한다
/// (Returns every prime `p` with `2 <= p <= n`, ascending).
///
/// 재귀 대신 누산기를 가진 명시적 반복으로 인수를 하나씩 소비한다
/// (Consumes the factors one at a time in an explicit loop with an accumulator
/// instead of recursing, so the stack stays flat for large `n`).
///
/// # 오류 (Errors)
///
/// `n < 0`이면 [`ToolkitError::InvalidArgument`] (Fails with `InvalidArgument` when `n < 0`).
///
/// # 예시 (Examples)
/// ```
/// use listkit::sieve::primes_up_to;
/// assert_eq!(primes_up_to(25).unwrap(), vec![2, 3, 5, 7, 11, 13, 17, 19, 23]);
/// assert!(primes_up_to(1).unwrap().is_empty());
/// assert!(primes_up_to(-1).is_err());
/// ```
pub fn primes_up_to(n: i64) -> Result<Vec<i64>> {
    if n < 0 {
        return Err(ToolkitError::invalid_argument(
            "n",
            n,
            "must be non-negative",
        ));
    }

    let factors = sieve_factors(n);
    let mut candidates = enumerate_interval(1, n);
    let mut remaining = factors.as_slice();

    while let Some(&factor) = car(remaining) {
        candidates = filter(|&c| c == factor || c % factor != 0, &candidates);
        trace!(factor, survivors = candidates.len(), "applied sieve factor");
        remaining = cdr(remaining);
    }

    let primes = filter(|&c| c != 1, &candidates);
    debug!(n, count = primes.len(), "sieve complete");
    Ok(primes)
}

/// 시범 나눗셈(trial division)을 사용한 소수 판별
/// (Primality test using trial division).
/// O(sqrt(n)) 시간 복잡도 (Time complexity O(sqrt(n))).
///
/// 체와 독립적인 기준 구현이다 (An independent reference for the sieve).
///
/// # 예시 (Examples)
/// ```
/// use listkit::sieve::is_prime;
/// assert!(is_prime(17));
/// assert!(!is_prime(15));
/// assert!(!is_prime(1));
/// ```
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    let mut divisor = 2;
    while divisor <= n / divisor {
        if n % divisor == 0 {
            return false;
        }
        divisor += 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primes_up_to_25() {
        assert_eq!(
            primes_up_to(25).unwrap(),
            vec![2, 3, 5, 7, 11, 13, 17, 19, 23]
        );
    }

    #[test]
    fn test_small_bounds() {
        assert!(primes_up_to(0).unwrap().is_empty());
        assert!(primes_up_to(1).unwrap().is_empty());
        assert_eq!(primes_up_to(2).unwrap(), vec![2]);
        assert_eq!(primes_up_to(3).unwrap(), vec![2, 3]);
        assert_eq!(primes_up_to(4).unwrap(), vec![2, 3]);
    }

    #[test]
    fn test_perfect_square_bound() {
        // 49 = 7 * 7: 인수 7이 적용되어야 한다 (factor 7 must be applied)
        let primes = primes_up_to(49).unwrap();
        assert!(!primes.contains(&49));
        assert_eq!(primes.last(), Some(&47));
    }

    #[test]
    fn test_negative_is_invalid() {
        let err = primes_up_to(-5).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(err.to_string().contains("-5"));
    }

    #[test]
    fn test_factors_are_kept() {
        // 모든 인수 중 소수는 결과에 남는다 (Prime factors stay in the result)
        let primes = primes_up_to(100).unwrap();
        for f in sieve_factors(100) {
            assert_eq!(primes.contains(&f), is_prime(f), "factor {f}");
        }
    }

    #[test]
    fn test_matches_trial_division() {
        let expected: Vec<i64> = (2..=1000).filter(|&n| is_prime(n)).collect();
        assert_eq!(primes_up_to(1000).unwrap(), expected);
        assert_eq!(expected.len(), 168);
    }

    #[test]
    fn test_is_prime() {
        let primes: Vec<i64> = (-3..50).filter(|&n| is_prime(n)).collect();
        assert_eq!(
            primes,
            vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47]
        );
    }
}
