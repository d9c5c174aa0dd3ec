//! 술어 탐색 (Predicate search)
//!
//! 순서가 있는 시퀀스에서 술어를 만족하는 첫 원소를 찾습니다. 없으면 `None`이며,
//! 이것은 오류가 아니라 정상적인 결과입니다
//! (Finds the first element of an ordered sequence that satisfies a predicate.
//! Absence is `None`, a normal outcome rather than an error).
//!
//! 세 함수 모두 첫 일치 이후의 원소에는 술어를 호출하지 않는다
//! (None of the three functions call the predicate past the first match).

/// 술어를 만족하는 첫 원소를 반환한다 (Returns the first element satisfying `predicate`).
///
/// 슬라이스를 넘기면 `Option<&T>`, 소유한 컬렉션을 넘기면 `Option<T>`가 나온다
/// (Passing a slice yields `Option<&T>`, passing an owned collection yields `Option<T>`).
///
/// # 예시 (Examples)
/// ```
/// use listkit::search::find_first;
///
/// assert_eq!(find_first(|x| *x > 100, [25, 50, 100, 150, 200]), Some(150));
/// assert_eq!(find_first(|x: &i32| *x > 100, Vec::new()), None);
/// ```
pub fn find_first<I, P>(mut predicate: P, sequence: I) -> Option<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    for item in sequence {
        if predicate(&item) {
            return Some(item);
        }
    }
    None
}

/// 실패할 수 있는 술어로 첫 원소를 찾는다 (First match with a fallible predicate).
///
/// 술어의 첫 오류는 그대로 호출자에게 전달되고 탐색이 멈춘다
/// (The predicate's first error is handed back unchanged and the scan stops).
///
/// # 예시 (Examples)
/// ```
/// use listkit::search::try_find_first;
///
/// let parsed = try_find_first(|s: &&str| s.parse::<i32>().map(|v| v > 10), ["3", "12", "x"]);
/// assert_eq!(parsed, Ok(Some("12")));
///
/// let failed = try_find_first(|s: &&str| s.parse::<i32>().map(|v| v > 10), ["3", "x", "12"]);
/// assert!(failed.is_err());
/// ```
pub fn try_find_first<I, P, E>(mut predicate: P, sequence: I) -> Result<Option<I::Item>, E>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> Result<bool, E>,
{
    for item in sequence {
        if predicate(&item)? {
            return Ok(Some(item));
        }
    }
    Ok(None)
}

/// 첫 일치 원소의 인덱스 (Index of the first matching element).
///
/// # 예시 (Examples)
/// ```
/// use listkit::search::find_position;
/// assert_eq!(find_position(|x| x % 7 == 0, &[3, 5, 14, 21]), Some(2));
/// assert_eq!(find_position(|x| x % 7 == 0, &[3, 5]), None);
/// ```
pub fn find_position<T, P>(predicate: P, list: &[T]) -> Option<usize>
where
    P: FnMut(&T) -> bool,
{
    list.iter().position(predicate)
}
