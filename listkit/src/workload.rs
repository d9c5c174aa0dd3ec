//! 병렬 맵을 위한 CPU 부하 작업 (CPU-bound workloads for the parallel mapper)
//!
//! 트리 재귀 피보나치는 의도적으로 느립니다. 원소마다 독립적인 계산이므로
//! 병렬 분배를 시험하는 데 적합합니다
//! (Tree-recursive Fibonacci is deliberately slow. Each element is independent
//! work, which makes it a good load for exercising parallel dispatch).

/// 트리 재귀를 사용한 피보나치 (Fibonacci using tree recursion).
/// 이것은 지수 시간 복잡도 O(phi^n)를 가진다 (This has exponential time complexity O(phi^n)).
///
/// 메모이제이션하지 않는다 (Not memoized).
///
/// # 예시 (Examples)
/// ```
/// use listkit::workload::fib_tree;
/// assert_eq!(fib_tree(10), 55);
/// ```
pub fn fib_tree(n: u64) -> u64 {
    if n < 2 {
        n
    } else {
        fib_tree(n - 1) + fib_tree(n - 2)
    }
}

/// 반복 프로세스를 사용한 피보나치 (Fibonacci using an iterative process).
/// 선형 시간 O(n), 상수 공간 O(1) (Linear time O(n), constant space O(1)).
///
/// `fib_tree`의 결과를 검증하는 기준값으로 쓴다
/// (Used as the reference value when checking `fib_tree`).
///
/// # 예시 (Examples)
/// ```
/// use listkit::workload::fib;
/// assert_eq!(fib(50), 12_586_269_025);
/// ```
pub fn fib(n: u64) -> u64 {
    if n == 0 {
        return 0;
    }
    // 다음 항을 미리 계산하지 않아 F(93)까지 넘치지 않는다
    // (Never computes one term ahead, so F(93) does not overflow)
    let (mut prev, mut curr) = (0u64, 1u64);
    for _ in 1..n {
        (prev, curr) = (curr, prev + curr);
    }
    curr
}
