//! Binary Heap backend
//!
//! An implicit binary heap stored in a contiguous, zero-indexed vector. The
//! node at index `i` has its parent at `(i - 1) / 2` and its children at
//! `2i + 1` and `2i + 2`.
//!
//! This backend does not hand out handles. For in-place priority updates use
//! [`PairingHeap`](crate::pairing::PairingHeap).
//!
//! # Time Complexity
//!
//! | Operation           | Complexity |
//! |---------------------|------------|
//! | `push`              | O(log n)   |
//! | `pop`               | O(log n)   |
//! | `top`               | O(1)       |
//! | `update_priorities` | O(n)       |
//!
//! # Example
//!
//! ```rust
//! use pairing_pq::PriorityQueue;
//! use pairing_pq::binary::BinaryHeapPq;
//! use pairing_pq::compare::MinFirst;
//!
//! let mut heap = BinaryHeapPq::with_comparator(MinFirst);
//! heap.push(3);
//! heap.push(1);
//! heap.push(2);
//!
//! assert_eq!(heap.top(), Some(&1));
//! assert_eq!(heap.pop(), Some(1));
//! assert_eq!(heap.pop(), Some(2));
//! assert_eq!(heap.pop(), Some(3));
//! assert_eq!(heap.pop(), None);
//! ```

use crate::compare::{Comparator, MaxFirst};
use crate::error::InvariantError;
use crate::traits::PriorityQueue;

/// A binary heap ordered by a caller-supplied comparator
#[derive(Debug, Clone)]
pub struct BinaryHeapPq<T, C = MaxFirst> {
    /// The heap data, root at index 0
    data: Vec<T>,
    cmp: C,
}

impl<T: Ord> BinaryHeapPq<T> {
    /// Creates an empty max-first heap
    pub fn new() -> Self {
        Self::with_comparator(MaxFirst)
    }

    /// Creates an empty max-first heap with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, MaxFirst)
    }
}

impl<T, C: Comparator<T>> BinaryHeapPq<T, C> {
    /// Creates an empty heap ordered by `cmp`
    pub fn with_comparator(cmp: C) -> Self {
        Self::with_capacity_and_comparator(0, cmp)
    }

    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            cmp,
        }
    }

    /// Builds a heap from `iter` in O(n) with bottom-up heapify
    pub fn from_iter_with<I: IntoIterator<Item = T>>(iter: I, cmp: C) -> Self {
        let mut heap = Self {
            data: iter.into_iter().collect(),
            cmp,
        };
        log::debug!("binary heap: bulk build of {} elements", heap.data.len());
        heap.update_priorities();
        heap
    }

    /// Returns the comparator this heap was built with
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Iterates over the elements in storage order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Iterates mutably over the elements in storage order
    ///
    /// Call [`PriorityQueue::update_priorities`] after editing.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Verifies that no element is more extreme than its parent
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        for i in 1..self.data.len() {
            let parent = (i - 1) / 2;
            if self.cmp.more_extreme(&self.data[i], &self.data[parent]) {
                return Err(InvariantError::new(format!(
                    "heap order violated between index {} and its parent {}",
                    i, parent
                )));
            }
        }
        Ok(())
    }

    /// Move element at index up to maintain heap property
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.cmp.more_extreme(&self.data[index], &self.data[parent]) {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down to maintain heap property
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut best = index;

            if left < len && self.cmp.more_extreme(&self.data[left], &self.data[best]) {
                best = left;
            }
            if right < len && self.cmp.more_extreme(&self.data[right], &self.data[best]) {
                best = right;
            }

            if best != index {
                self.data.swap(index, best);
                index = best;
            } else {
                break;
            }
        }
    }
}

impl<T, C: Comparator<T>> PriorityQueue<T> for BinaryHeapPq<T, C> {
    fn push(&mut self, value: T) {
        self.data.push(value);
        self.sift_up(self.data.len() - 1);
    }

    fn pop(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }

        // The last element takes over the root slot
        let result = self.data.swap_remove(0);

        if !self.data.is_empty() {
            self.sift_down(0);
        }

        Some(result)
    }

    fn top(&self) -> Option<&T> {
        self.data.first()
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn update_priorities(&mut self) {
        for index in (0..self.data.len() / 2).rev() {
            self.sift_down(index);
        }
    }

    fn clear(&mut self) {
        self.data.clear();
    }
}

impl<T, C: Comparator<T> + Default> Default for BinaryHeapPq<T, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T, C: Comparator<T> + Default> FromIterator<T> for BinaryHeapPq<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_iter_with(iter, C::default())
    }
}

impl<T, C: Comparator<T>> Extend<T> for BinaryHeapPq<T, C> {
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
        let mut heap = BinaryHeapPq::new();

        assert!(heap.is_empty());
        assert_eq!(heap.len(), 0);

        heap.push(5);
        heap.push(3);
        heap.push(8);
        heap.push(1);

        assert!(!heap.is_empty());
        assert_eq!(heap.len(), 4);
        assert_eq!(heap.top(), Some(&8));

        assert_eq!(heap.pop(), Some(8));
        assert_eq!(heap.pop(), Some(5));
        assert_eq!(heap.pop(), Some(3));
        assert_eq!(heap.pop(), Some(1));
        assert_eq!(heap.pop(), None);
        assert!(heap.is_empty());
    }

    #[test]
    fn test_duplicate_values() {
        let mut heap = BinaryHeapPq::new();

        heap.push(1);
        heap.push(1);
        heap.push(1);

        assert_eq!(heap.len(), 3);
        assert_eq!(heap.pop(), Some(1));
        assert_eq!(heap.pop(), Some(1));
        assert_eq!(heap.pop(), Some(1));
    }

    #[test]
    fn test_bulk_build() {
        let heap: BinaryHeapPq<i32> = BinaryHeapPq::from_iter_with(vec![4, 2, 9, 1], MaxFirst);
        assert_eq!(heap.top(), Some(&9));
        assert!(heap.check_invariants().is_ok());
        assert_eq!(heap.into_sorted_vec(), vec![9, 4, 2, 1]);
    }

    #[test]
    fn test_update_priorities_after_mutation() {
        let mut heap: BinaryHeapPq<i32, MinFirst> = (0..50).collect();
        for v in heap.iter_mut() {
            *v = 100 - *v;
        }
        heap.update_priorities();
        assert!(heap.check_invariants().is_ok());
        assert_eq!(heap.top(), Some(&51));
    }

    #[test]
    fn test_ascending_insertion() {
        let mut heap = BinaryHeapPq::with_comparator(MinFirst);

        for i in 0..100 {
            heap.push(i);
        }

        for i in 0..100 {
            assert_eq!(heap.pop(), Some(i));
        }
    }

    #[test]
    fn test_descending_insertion() {
        let mut heap = BinaryHeapPq::with_comparator(MinFirst);

        for i in (0..100).rev() {
            heap.push(i);
        }

        for i in 0..100 {
            assert_eq!(heap.pop(), Some(i));
        }
    }

    #[test]
    fn test_extend_and_clear() {
        let mut heap = BinaryHeapPq::<i32>::with_capacity(4);
        heap.extend([3, 7, 5]);
        assert_eq!(heap.top(), Some(&7));
        heap.clear();
        assert!(heap.is_empty());
        assert_eq!(heap.top(), None);
    }
}
