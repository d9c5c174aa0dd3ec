//! listkit: 함수형 리스트 처리 도구 모음 (Functional list-processing toolkit)
//!
//! 선언적 변환을 불변 시퀀스 위에서 반복하는 세 가지 알고리즘을 제공합니다
//! (Three algorithms that iterate a declarative transformation over an immutable sequence):
//! - 소거 체 (Elimination sieve): [`sieve::primes_up_to`]
//! - 첫 일치 탐색 (First-match predicate search): [`search::find_first`]
//! - 순서 보존 병렬 맵 (Order-preserving parallel map): [`parallel::parallel_map`]
//!
//! 병렬 맵의 기본 작업 부하는 [`workload::fib_tree`]입니다
//! (The default parallel workload is [`workload::fib_tree`]).

pub mod parallel;
pub mod search;
pub mod sieve;
pub mod workload;

#[cfg(test)]
mod properties;

// 자주 사용되는 항목들을 재수출한다 (Re-export commonly used items).
pub use listkit_common::{Result, ToolkitError};
pub use parallel::{MapperConfig, ParallelMapper, parallel_map, try_parallel_map};
pub use search::{find_first, find_position, try_find_first};
pub use sieve::primes_up_to;
pub use workload::fib_tree;
