//! Common traits for the priority queues in this crate
//!
//! This module provides a two-tier trait hierarchy:
//!
//! - [`PriorityQueue`]: the capability set every backend implements
//! - [`AddressableQueue`]: adds handles and in-place priority improvement
//!
//! [`PriorityQueue`] is object safe, so a backend chosen at runtime can be held
//! as `Box<dyn PriorityQueue<T>>`.

use crate::error::HeapError;

/// A handle to an element in an addressable queue
///
/// This is an opaque type that identifies a specific element. A handle is a
/// weak reference: it does not keep its element alive, and it stops resolving
/// once that element has been popped.
pub trait Handle: Copy + Eq {}

/// Base trait for priority queues
///
/// The ordering is not fixed by the element type: each queue carries a
/// [`Comparator`](crate::compare::Comparator) chosen at construction, and
/// `top`/`pop` always yield the most extreme element under it.
///
/// # Example
///
/// ```rust
/// use pairing_pq::PriorityQueue;
/// use pairing_pq::binary::BinaryHeapPq;
///
/// let mut queue = BinaryHeapPq::new();
/// queue.push(5);
/// queue.push(3);
/// queue.push(8);
///
/// assert_eq!(queue.top(), Some(&8));
/// assert_eq!(queue.pop(), Some(8));
/// assert_eq!(queue.len(), 2);
/// ```
pub trait PriorityQueue<T> {
    /// Inserts an element
    fn push(&mut self, value: T);

    /// Removes and returns the most extreme element, or `None` if empty
    fn pop(&mut self) -> Option<T>;

    /// Returns the most extreme element without removing it
    ///
    /// The view is immutable: editing it in place could break the ordering.
    fn top(&self) -> Option<&T>;

    /// Returns the number of elements in the queue
    fn len(&self) -> usize;

    /// Returns true if the queue is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Re-establishes the ordering invariant after elements were mutated
    /// in place (through `iter_mut` or `get_mut`)
    fn update_priorities(&mut self);

    /// Removes every element
    fn clear(&mut self);

    /// Drains the queue, returning the elements most extreme first
    fn into_sorted_vec(mut self) -> Vec<T>
    where
        Self: Sized,
    {
        let mut out = Vec::with_capacity(self.len());
        while let Some(value) = self.pop() {
            out.push(value);
        }
        out
    }
}

/// Extended queue trait with handles and `update_elt`
///
/// # Example
///
/// ```rust
/// use pairing_pq::{AddressableQueue, PriorityQueue};
/// use pairing_pq::pairing::PairingHeap;
///
/// let mut heap = PairingHeap::new();
/// let _h1 = heap.add_node(10);
/// let h2 = heap.add_node(2);
/// heap.update_elt(&h2, 20).unwrap();
/// assert_eq!(heap.top(), Some(&20));
/// ```
pub trait AddressableQueue<T>: PriorityQueue<T> {
    /// The handle type for this queue
    type Handle: Handle;

    /// Inserts an element, returning a handle to it
    ///
    /// The handle stays valid until the element is popped, regardless of any
    /// restructuring in between.
    fn add_node(&mut self, value: T) -> Self::Handle;

    /// Replaces the element behind `handle` with a value at least as extreme
    ///
    /// # Errors
    /// - [`HeapError::InvalidHandle`] if the element was already removed
    /// - [`HeapError::PriorityNotImproved`] if `new_value` is less extreme
    ///   than the current value
    ///
    /// On error the queue is unchanged.
    fn update_elt(&mut self, handle: &Self::Handle, new_value: T) -> Result<(), HeapError>;

    /// Returns the element behind `handle`, if it is still live
    fn get(&self, handle: &Self::Handle) -> Option<&T>;

    /// Returns the element behind `handle` for unrestricted editing
    ///
    /// Any change that makes the element less extreme must be followed by
    /// [`PriorityQueue::update_priorities`] before the next `top`/`pop`.
    fn get_mut(&mut self, handle: &Self::Handle) -> Option<&mut T>;

    /// Returns true if `handle` still refers to a live element
    fn contains(&self, handle: &Self::Handle) -> bool {
        self.get(handle).is_some()
    }
}
