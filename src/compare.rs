//! Comparator contract shared by every queue in this crate
//!
//! A queue is parameterized by a [`Comparator`] fixed at construction time. The
//! comparator answers a single question: is `a` strictly more extreme than `b`?
//! The "most extreme" element is the one a queue hands out from `top`/`pop`.
//!
//! - [`MaxFirst`]: largest element on top (the default for every queue)
//! - [`MinFirst`]: smallest element on top
//! - [`Reversed`]: flips any other comparator
//! - any `Fn(&T, &T) -> bool` closure
//!
//! # Example
//!
//! ```rust
//! use pairing_pq::compare::{Comparator, MaxFirst, MinFirst};
//!
//! assert!(MaxFirst.more_extreme(&9, &4));
//! assert!(MinFirst.more_extreme(&4, &9));
//!
//! let by_len = |a: &&str, b: &&str| a.len() > b.len();
//! assert!(by_len.more_extreme(&"longer", &"short"));
//! ```

use std::cmp::Ordering;

/// Strict ordering predicate defining which element a queue yields first
///
/// Implementations must behave like a strict weak ordering: irreflexive
/// (`more_extreme(a, a)` is false) and transitive. Queues never check this.
pub trait Comparator<T: ?Sized> {
    /// Returns true if `a` is strictly more extreme than `b`
    fn more_extreme(&self, a: &T, b: &T) -> bool;

    /// Orders `a` relative to `b` by extremity, most extreme sorting last
    ///
    /// Useful for feeding the comparator into `slice::sort_by`.
    #[inline]
    fn extremity(&self, a: &T, b: &T) -> Ordering {
        if self.more_extreme(a, b) {
            Ordering::Greater
        } else if self.more_extreme(b, a) {
            Ordering::Less
        } else {
            Ordering::Equal
        }
    }
}

/// Largest element first, like `std::collections::BinaryHeap`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MaxFirst;

impl<T: Ord + ?Sized> Comparator<T> for MaxFirst {
    #[inline]
    fn more_extreme(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

/// Smallest element first
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MinFirst;

impl<T: Ord + ?Sized> Comparator<T> for MinFirst {
    #[inline]
    fn more_extreme(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Inverts the wrapped comparator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Reversed<C>(pub C);

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Reversed<C> {
    #[inline]
    fn more_extreme(&self, a: &T, b: &T) -> bool {
        self.0.more_extreme(b, a)
    }
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn more_extreme(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_and_min_first() {
        assert!(MaxFirst.more_extreme(&3, &1));
        assert!(!MaxFirst.more_extreme(&1, &3));
        assert!(!MaxFirst.more_extreme(&2, &2));

        assert!(MinFirst.more_extreme(&1, &3));
        assert!(!MinFirst.more_extreme(&3, &1));
        assert!(!MinFirst.more_extreme(&2, &2));
    }

    #[test]
    fn test_reversed() {
        let cmp = Reversed(MaxFirst);
        assert!(cmp.more_extreme(&1, &3));
        assert!(!cmp.more_extreme(&3, &1));
    }

    #[test]
    fn test_closure_comparator() {
        let by_abs = |a: &i32, b: &i32| a.abs() > b.abs();
        assert!(by_abs.more_extreme(&-10, &5));
        assert!(!by_abs.more_extreme(&5, &-10));
    }

    #[test]
    fn test_extremity_ordering() {
        let mut values = vec![5, 1, 4, 2, 3];
        values.sort_by(|a, b| MaxFirst.extremity(a, b));
        assert_eq!(values, vec![1, 2, 3, 4, 5]);

        values.sort_by(|a, b| MinFirst.extremity(a, b));
        assert_eq!(values, vec![5, 4, 3, 2, 1]);

        assert_eq!(MaxFirst.extremity(&7, &7), Ordering::Equal);
    }
}
