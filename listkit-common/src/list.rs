//! # Functional Sequence Operations
//!
//! The small set of list primitives the toolkit algorithms are written
//! against. Sequences are plain slices going in and fresh `Vec`s coming out;
//! nothing here mutates its input.
//!
//! ## Philosophy
//!
//! A functional list toolkit is usually phrased with `head`/`tail`, `map`,
//! `filter` and interval enumeration. In idiomatic Rust:
//!
//! - Use `Vec<T>` or slices `&[T]` for sequences
//! - Use iterators (`.iter()`, `.map()`, `.filter()`) for transformations
//! - Use pattern matching on `Option` for "is there a head?"
//!
//! ## Example
//!
//! ```
//! use listkit_common::list::{car, cdr, enumerate_interval, filter};
//!
//! let lst = enumerate_interval(1, 6);
//! assert_eq!(car(&lst), Some(&1));
//! assert_eq!(cdr(&lst), &[2, 3, 4, 5, 6]);
//!
//! let odds = filter(|x| x % 2 == 1, &lst);
//! assert_eq!(odds, vec![1, 3, 5]);
//! ```

/// Returns the first element of a slice (head).
///
/// # Example
/// ```
/// use listkit_common::list::car;
/// assert_eq!(car(&[1, 2, 3]), Some(&1));
/// assert_eq!(car::<i32>(&[]), None);
/// ```
#[inline]
pub fn car<T>(list: &[T]) -> Option<&T> {
    list.first()
}

/// Returns all but the first element of a slice (tail).
///
/// The tail of an empty slice is the empty slice.
///
/// # Example
/// ```
/// use listkit_common::list::cdr;
/// assert_eq!(cdr(&[1, 2, 3]), &[2, 3]);
/// assert_eq!(cdr::<i32>(&[]), &[] as &[i32]);
/// ```
#[inline]
pub fn cdr<T>(list: &[T]) -> &[T] {
    list.get(1..).unwrap_or(&[])
}

/// Maps a function over a list.
///
/// # Example
/// ```
/// use listkit_common::list::map;
/// let squares = map(|x| x * x, &[1, 2, 3]);
/// assert_eq!(squares, vec![1, 4, 9]);
/// ```
pub fn map<T, U, F>(f: F, list: &[T]) -> Vec<U>
where
    F: Fn(&T) -> U,
{
    list.iter().map(f).collect()
}

/// Keeps the elements that satisfy `predicate`, preserving order.
///
/// This is the filter capability the sieve is built on.
///
/// # Example
/// ```
/// use listkit_common::list::filter;
/// let evens = filter(|x| x % 2 == 0, &[1, 2, 3, 4]);
/// assert_eq!(evens, vec![2, 4]);
/// ```
pub fn filter<T: Clone, F>(predicate: F, list: &[T]) -> Vec<T>
where
    F: Fn(&T) -> bool,
{
    list.iter().filter(|x| predicate(x)).cloned().collect()
}

/// Enumerates the closed interval `[low, high]`.
///
/// An inverted interval (`low > high`) is empty.
///
/// # Example
/// ```
/// use listkit_common::list::enumerate_interval;
/// assert_eq!(enumerate_interval(2, 5), vec![2, 3, 4, 5]);
/// assert!(enumerate_interval(3, 2).is_empty());
/// ```
pub fn enumerate_interval(low: i64, high: i64) -> Vec<i64> {
    (low..=high).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_car_cdr() {
        let list = vec![1, 2, 3];
        assert_eq!(car(&list), Some(&1));
        assert_eq!(cdr(&list), &[2, 3]);
        assert_eq!(cdr(cdr(cdr(&list))), &[] as &[i32]);
    }

    #[test]
    fn test_empty_list_operations() {
        let empty: &[i32] = &[];
        assert_eq!(car(empty), None);
        assert_eq!(cdr(empty), &[] as &[i32]);
        assert!(map(|x| x + 1, empty).is_empty());
        assert!(filter(|_| true, empty).is_empty());
    }

    #[test]
    fn test_map_filter() {
        let list = vec![1, 2, 3, 4, 5];

        let squared = map(|x| x * x, &list);
        assert_eq!(squared, vec![1, 4, 9, 16, 25]);

        let evens = filter(|x| x % 2 == 0, &list);
        assert_eq!(evens, vec![2, 4]);

        // Input is left untouched
        assert_eq!(list, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_enumerate_interval() {
        assert_eq!(enumerate_interval(1, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(enumerate_interval(5, 5), vec![5]);
        assert!(enumerate_interval(5, 4).is_empty());
        assert_eq!(enumerate_interval(-2, 1), vec![-2, -1, 0, 1]);
    }
}
