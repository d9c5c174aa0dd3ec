//! 순서 보존 병렬 맵 (Order-preserving parallel map)
//!
//! 원소마다 독립적인 순수 함수를 유한한 작업자 풀로 동시에 적용하고, 결과는
//! 완료 순서와 무관하게 입력 순서대로 돌려줍니다
//! (Applies an independent pure function to every element on a bounded pool
//! of workers, and hands results back in input order whatever order the
//! workers finish in).
//!
//! # 동시성 아키텍처 (Concurrency Architecture)
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────────┐
//! │                 작업 큐 (Work queue): AtomicUsize 커서            │
//! │          fetch_add → 0, 1, 2, ... len-1  (각 인덱스는 한 번만)     │
//! ├───────────────────────────────────────────────────────────────────┤
//! │  작업자 1 (Worker 1)     작업자 2 (Worker 2)     작업자 k          │
//! │     │ next() = 0             │ next() = 1            │ next() = 2  │
//! │     ├─> transform(&xs[0])    ├─> transform(&xs[1])   ├─> ...       │
//! │     └─> slots[0].set(r)      └─> slots[1].set(r)     └─> ...       │
//! ├───────────────────────────────────────────────────────────────────┤
//! │  결과 버퍼 (Result buffer): Vec<OnceLock<R>>                      │
//! │  인덱스마다 정확히 한 번 기록, 잠금 없음 (written once per index, no lock) │
//! └───────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # 취소 정책 (Cancellation policy)
//!
//! 실행 중인 작업은 끝까지 진행한다 (In-flight work is allowed to finish).
//! 어떤 원소의 변환이 실패하면 (`Err` 또는 panic) 취소 플래그가 올라가고,
//! 작업자는 새 인덱스를 더 가져가지 않는다. 이미 시작된 원소는 완료된 뒤
//! 모든 작업자가 합류하고, 가장 작은 실패 인덱스를 담은 하나의
//! [`ToolkitError::TransformFailure`]가 반환된다. 부분 결과는 절대 반환하지 않는다
//! (When a transform fails, by `Err` or by panicking, the cancel flag is raised
//! and workers stop taking new indices. Elements already started run to
//! completion, every worker joins, and a single `TransformFailure` naming the
//! lowest failing index is returned. Partial results are never returned).

use std::any::Any;
use std::convert::Infallible;
use std::num::NonZeroUsize;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, OnceLock, PoisonError};
use std::thread;

use listkit_common::{BoxError, Result, ToolkitError};
use thiserror::Error;
use tracing::{debug, trace, warn};

/// 작업자 수를 지정하는 환경 변수 (Environment variable overriding the worker count).
pub const MAX_WORKERS_ENV: &str = "LISTKIT_MAX_WORKERS";

/// 변환 함수가 panic으로 끝났을 때 실패 원인으로 담기는 오류
/// (Source of a `TransformFailure` when the transform panicked).
#[derive(Debug, Error)]
#[error("transform panicked: {message}")]
pub struct TransformPanic {
    pub message: String,
}

impl TransformPanic {
    fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "non-string panic payload".to_string()
        };
        TransformPanic { message }
    }
}

/// 병렬 맵 설정 (Parallel mapper configuration).
///
/// `max_workers`가 `None`이면 호스트의 병렬 처리 단위 수를 쓴다
/// (`None` means the host's available parallelism).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MapperConfig {
    pub max_workers: Option<usize>,
}

impl MapperConfig {
    pub fn with_max_workers(max_workers: usize) -> Self {
        MapperConfig {
            max_workers: Some(max_workers),
        }
    }

    /// `LISTKIT_MAX_WORKERS`에서 설정을 읽는다 (Reads the configuration from `LISTKIT_MAX_WORKERS`).
    ///
    /// 변수가 없으면 기본값, 숫자가 아니거나 0이면 `InvalidArgument`
    /// (Unset gives the default; a non-numeric or zero value is `InvalidArgument`).
    pub fn from_env() -> Result<Self> {
        Self::from_env_value(std::env::var(MAX_WORKERS_ENV).ok().as_deref())
    }

    fn from_env_value(raw: Option<&str>) -> Result<Self> {
        let Some(raw) = raw else {
            return Ok(MapperConfig::default());
        };
        let max_workers = raw.trim().parse::<usize>().map_err(|_| {
            ToolkitError::invalid_argument(MAX_WORKERS_ENV, raw, "must be a positive integer")
        })?;
        let config = MapperConfig::with_max_workers(max_workers);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        match self.max_workers {
            Some(0) => Err(ToolkitError::invalid_argument(
                "max_workers",
                0,
                "must be at least 1",
            )),
            _ => Ok(()),
        }
    }

    /// 검증 후 실제 작업자 상한을 계산한다 (Validates, then resolves the effective worker limit).
    pub fn resolved_workers(&self) -> Result<usize> {
        self.validate()?;
        Ok(self.max_workers.unwrap_or_else(host_parallelism))
    }
}

fn host_parallelism() -> usize {
    thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}

/// 설정이 끝난 재사용 가능한 병렬 맵 (A configured, reusable parallel mapper).
///
/// # 예시 (Examples)
/// ```
/// use listkit::parallel::ParallelMapper;
/// use listkit::workload::fib_tree;
///
/// let mapper = ParallelMapper::with_workers(4).unwrap();
/// let fibs = mapper.map(|&n| fib_tree(n), &[10, 20, 5]).unwrap();
/// assert_eq!(fibs, vec![55, 6765, 5]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParallelMapper {
    max_workers: usize,
    // 테스트에서 OS의 스레드 생성 거부를 흉내 낸다 (lets tests emulate the OS refusing threads)
    spawn_budget: Option<usize>,
}

impl ParallelMapper {
    pub fn new(config: MapperConfig) -> Result<Self> {
        Ok(ParallelMapper {
            max_workers: config.resolved_workers()?,
            spawn_budget: None,
        })
    }

    pub fn with_workers(max_workers: usize) -> Result<Self> {
        Self::new(MapperConfig::with_max_workers(max_workers))
    }

    pub fn max_workers(&self) -> usize {
        self.max_workers
    }

    #[cfg(test)]
    fn with_spawn_budget(mut self, budget: usize) -> Self {
        self.spawn_budget = Some(budget);
        self
    }

    fn spawn_worker<'scope, 'env, B>(
        &self,
        scope: &'scope thread::Scope<'scope, 'env>,
        worker: usize,
        body: B,
    ) -> std::io::Result<thread::ScopedJoinHandle<'scope, ()>>
    where
        B: FnOnce() + Send + 'scope,
    {
        if self.spawn_budget.is_some_and(|budget| worker >= budget) {
            return Err(std::io::Error::new(
                std::io::ErrorKind::WouldBlock,
                "worker spawn budget exhausted",
            ));
        }
        thread::Builder::new()
            .name(format!("listkit-worker-{worker}"))
            .spawn_scoped(scope, body)
    }

    /// 실패하지 않는 변환을 적용한다 (Applies an infallible transform).
    ///
    /// 변환 안의 panic은 `TransformFailure`로 보고된다
    /// (A panic inside the transform is reported as `TransformFailure`).
    pub fn map<T, R, F>(&self, transform: F, sequence: &[T]) -> Result<Vec<R>>
    where
        T: Sync,
        R: Send + Sync,
        F: Fn(&T) -> R + Sync,
    {
        self.try_map(|item| Ok::<R, Infallible>(transform(item)), sequence)
    }

    /// 실패할 수 있는 변환을 적용한다 (Applies a fallible transform).
    ///
    /// 전체 결과가 입력 순서대로 나오거나, 하나의 집계된 실패가 나온다
    /// (Either the complete ordered result or one aggregated failure).
    pub fn try_map<T, R, E, F>(&self, transform: F, sequence: &[T]) -> Result<Vec<R>>
    where
        T: Sync,
        R: Send + Sync,
        E: Into<BoxError>,
        F: Fn(&T) -> std::result::Result<R, E> + Sync,
    {
        let len = sequence.len();
        if len == 0 {
            return Ok(Vec::new());
        }

        let workers = self.max_workers.min(len);
        debug!(
            len,
            max_workers = self.max_workers,
            workers,
            "starting parallel map"
        );

        let slots: Vec<OnceLock<R>> = (0..len).map(|_| OnceLock::new()).collect();
        let queue = WorkQueue::new(len);
        let first_failure: Mutex<Option<(usize, BoxError)>> = Mutex::new(None);
        let failures = AtomicUsize::new(0);

        let spawned = thread::scope(|scope| {
            let mut spawned = 0usize;
            for worker in 0..workers {
                let slots = &slots;
                let queue = &queue;
                let first_failure = &first_failure;
                let failures = &failures;
                let transform = &transform;

                let handle = self.spawn_worker(scope, worker, move || {
                    let mut processed = 0usize;
                    while let Some(index) = queue.next() {
                        processed += 1;
                        match run_transform(transform, &sequence[index]) {
                            Ok(value) => {
                                // 큐는 각 인덱스를 한 번만 내준다 (the queue hands out each index once)
                                let _ = slots[index].set(value);
                            }
                            Err(source) => {
                                queue.cancel();
                                failures.fetch_add(1, Ordering::Relaxed);
                                warn!(worker, index, error = %source, "transform failed, cancelling dispatch");
                                let mut slot = first_failure
                                    .lock()
                                    .unwrap_or_else(PoisonError::into_inner);
                                if slot.as_ref().is_none_or(|(seen, _)| index < *seen) {
                                    *slot = Some((index, source));
                                }
                            }
                        }
                    }
                    trace!(worker, processed, "worker drained");
                });
                match handle {
                    Ok(_) => spawned += 1,
                    Err(source) if spawned == 0 => return Err(source),
                    Err(source) => {
                        // 이미 뜬 작업자들이 큐를 끝까지 비운다 (the running workers drain the queue)
                        warn!(requested = workers, spawned, error = %source, "could not spawn more workers");
                        break;
                    }
                }
            }
            Ok(spawned)
        })
        .map_err(|source| ToolkitError::SpawnFailure {
            requested: workers,
            source,
        })?;

        let failure = first_failure
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some((index, source)) = failure {
            return Err(ToolkitError::TransformFailure {
                index,
                failures: failures.into_inner(),
                source,
            });
        }

        let results: Vec<R> = slots.into_iter().filter_map(OnceLock::into_inner).collect();
        if results.len() != len {
            return Err(ToolkitError::Incomplete {
                missing: len - results.len(),
            });
        }

        debug!(len, workers = spawned, "parallel map complete");
        Ok(results)
    }
}

impl Default for ParallelMapper {
    fn default() -> Self {
        ParallelMapper {
            max_workers: host_parallelism(),
            spawn_budget: None,
        }
    }
}

/// `(index, element)` 작업을 나눠 주는 잠금 없는 큐
/// (Lock-free dispenser of `(index, element)` work items).
struct WorkQueue {
    cursor: AtomicUsize,
    len: usize,
    cancelled: AtomicBool,
}

impl WorkQueue {
    fn new(len: usize) -> Self {
        WorkQueue {
            cursor: AtomicUsize::new(0),
            len,
            cancelled: AtomicBool::new(false),
        }
    }

    fn next(&self) -> Option<usize> {
        if self.cancelled.load(Ordering::Acquire) {
            return None;
        }
        let index = self.cursor.fetch_add(1, Ordering::Relaxed);
        (index < self.len).then_some(index)
    }

    fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }
}

fn run_transform<T, R, E, F>(transform: &F, item: &T) -> std::result::Result<R, BoxError>
where
    E: Into<BoxError>,
    F: Fn(&T) -> std::result::Result<R, E>,
{
    match panic::catch_unwind(AssertUnwindSafe(|| transform(item))) {
        Ok(result) => result.map_err(Into::into),
        Err(payload) => Err(Box::new(TransformPanic::from_payload(payload))),
    }
}

/// 순서를 보존하는 병렬 맵 (Order-preserving parallel map).
///
/// `max_workers`가 `None`이면 호스트의 처리 단위 수, `Some(0)`이면 `InvalidArgument`
/// (`None` uses the host's processing units, `Some(0)` is `InvalidArgument`).
///
/// # 예시 (Examples)
/// ```
/// use listkit::parallel::parallel_map;
///
/// let squares = parallel_map(|x: &i64| x * x, &[1, 2, 3, 4], Some(2)).unwrap();
/// assert_eq!(squares, vec![1, 4, 9, 16]);
///
/// let empty: Vec<i64> = parallel_map(|x: &i64| x * x, &[], None).unwrap();
/// assert!(empty.is_empty());
///
/// assert!(parallel_map(|x: &i64| x * x, &[1], Some(0)).is_err());
/// ```
pub fn parallel_map<T, R, F>(transform: F, sequence: &[T], max_workers: Option<usize>) -> Result<Vec<R>>
where
    T: Sync,
    R: Send + Sync,
    F: Fn(&T) -> R + Sync,
{
    ParallelMapper::new(MapperConfig { max_workers })?.map(transform, sequence)
}

/// 실패할 수 있는 변환을 위한 [`parallel_map`] (`parallel_map` for a fallible transform).
///
/// # 예시 (Examples)
/// ```
/// use listkit::parallel::try_parallel_map;
///
/// let parsed = try_parallel_map(|s: &&str| s.parse::<u32>(), &["1", "2", "3"], None).unwrap();
/// assert_eq!(parsed, vec![1, 2, 3]);
///
/// let err = try_parallel_map(|s: &&str| s.parse::<u32>(), &["1", "x", "3"], Some(1)).unwrap_err();
/// assert_eq!(err.failed_index(), Some(1));
/// ```
pub fn try_parallel_map<T, R, E, F>(
    transform: F,
    sequence: &[T],
    max_workers: Option<usize>,
) -> Result<Vec<R>>
where
    T: Sync,
    R: Send + Sync,
    E: Into<BoxError>,
    F: Fn(&T) -> std::result::Result<R, E> + Sync,
{
    ParallelMapper::new(MapperConfig { max_workers })?.try_map(transform, sequence)
}
