//! Sorted-vector backend
//!
//! Keeps every element in a vector sorted by extremity, least extreme first,
//! so the most extreme element sits at the tail. Reads and pops are trivial;
//! insertion pays for a shift.
//!
//! # Time Complexity
//!
//! | Operation           | Complexity       |
//! |---------------------|------------------|
//! | `push`              | O(n)             |
//! | `pop`               | O(1) amortized   |
//! | `top`               | O(1)             |
//! | `update_priorities` | O(n log n)       |

use crate::compare::{Comparator, MaxFirst};
use crate::error::InvariantError;
use crate::traits::PriorityQueue;

/// A priority queue backed by a fully sorted vector
///
/// # Example
///
/// ```rust
/// use pairing_pq::PriorityQueue;
/// use pairing_pq::sorted::SortedPq;
///
/// let queue: SortedPq<i32> = [4, 2, 9, 1].into_iter().collect();
/// assert_eq!(queue.top(), Some(&9));
/// assert_eq!(queue.as_slice(), &[1, 2, 4, 9]);
/// ```
#[derive(Debug, Clone)]
pub struct SortedPq<T, C = MaxFirst> {
    data: Vec<T>,
    cmp: C,
}

impl<T: Ord> SortedPq<T> {
    /// Creates an empty max-first queue
    pub fn new() -> Self {
        Self::with_comparator(MaxFirst)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, MaxFirst)
    }
}

impl<T, C: Comparator<T>> SortedPq<T, C> {
    /// Creates an empty queue ordered by `cmp`
    pub fn with_comparator(cmp: C) -> Self {
        Self::with_capacity_and_comparator(0, cmp)
    }

    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            cmp,
        }
    }

    /// Builds a queue from `iter` with a single sort
    pub fn from_iter_with<I: IntoIterator<Item = T>>(iter: I, cmp: C) -> Self {
        let mut queue = Self {
            data: iter.into_iter().collect(),
            cmp,
        };
        log::debug!("sorted queue: bulk build of {} elements", queue.data.len());
        queue.update_priorities();
        queue
    }

    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// The elements, least extreme first
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Iterates mutably over the elements
    ///
    /// Call [`PriorityQueue::update_priorities`] after editing.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Verifies that the vector is sorted by extremity
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        match self
            .data
            .windows(2)
            .position(|pair| self.cmp.more_extreme(&pair[0], &pair[1]))
        {
            Some(i) => Err(InvariantError::new(format!(
                "element {} is more extreme than its successor",
                i
            ))),
            None => Ok(()),
        }
    }
}

impl<T, C: Comparator<T>> PriorityQueue<T> for SortedPq<T, C> {
    fn push(&mut self, value: T) {
        // First slot whose element is at least as extreme as `value`
        let index = self
            .data
            .partition_point(|existing| self.cmp.more_extreme(&value, existing));
        self.data.insert(index, value);
    }

    fn pop(&mut self) -> Option<T> {
        self.data.pop()
    }

    fn top(&self) -> Option<&T> {
        self.data.last()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn update_priorities(&mut self) {
        let cmp = &self.cmp;
        self.data.sort_by(|a, b| cmp.extremity(a, b));
    }

    fn clear(&mut self) {
        self.data.clear();
    }
}

impl<T, C: Comparator<T> + Default> Default for SortedPq<T, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T, C: Comparator<T> + Default> FromIterator<T> for SortedPq<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_iter_with(iter, C::default())
    }
}

impl<T, C: Comparator<T>> Extend<T> for SortedPq<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::MinFirst;

    #[test]
    fn test_basic_operations() {
        let mut queue = SortedPq::new();
        queue.push(5);
        queue.push(3);
        queue.push(8);
        queue.push(1);

        assert_eq!(queue.as_slice(), &[1, 3, 5, 8]);
        assert_eq!(queue.top(), Some(&8));
        assert_eq!(queue.pop(), Some(8));
        assert_eq!(queue.top(), Some(&5));
        assert_eq!(queue.pop(), Some(5));
        assert_eq!(queue.pop(), Some(3));
        assert_eq!(queue.pop(), Some(1));
        assert!(queue.is_empty());
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn test_min_first_keeps_smallest_at_tail() {
        let mut queue = SortedPq::with_comparator(MinFirst);
        queue.extend([4, 2, 9, 1]);
        assert_eq!(queue.as_slice(), &[9, 4, 2, 1]);
        assert_eq!(queue.top(), Some(&1));
        assert!(queue.check_invariants().is_ok());
    }

    #[test]
    fn test_push_duplicates() {
        let mut queue = SortedPq::new();
        for v in [2, 2, 1, 2, 3, 1] {
            queue.push(v);
        }
        assert_eq!(queue.as_slice(), &[1, 1, 2, 2, 2, 3]);
    }

    #[test]
    fn test_update_priorities_resorts() {
        let mut queue: SortedPq<i32> = (1..=5).collect();
        for v in queue.iter_mut() {
            *v = -*v;
        }
        assert!(queue.check_invariants().is_err());

        queue.update_priorities();
        assert!(queue.check_invariants().is_ok());
        assert_eq!(queue.top(), Some(&-1));
    }
}
