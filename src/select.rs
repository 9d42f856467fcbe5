//! Runtime backend selection
//!
//! [`QueueKind`] names one of the three backends and parses from the strings
//! `"binary"`, `"sorted"` and `"pairing"`, so an application can pick a
//! backend from its own configuration. [`AnyQueue`] is the resulting sum type;
//! it implements [`PriorityQueue`] by delegating to whichever variant it holds.
//!
//! # Example
//!
//! ```rust
//! use pairing_pq::PriorityQueue;
//! use pairing_pq::compare::MaxFirst;
//! use pairing_pq::select::{AnyQueue, QueueKind};
//!
//! let kind: QueueKind = "sorted".parse().unwrap();
//! let mut queue = AnyQueue::from_iter_with(kind, [4, 2, 9, 1], MaxFirst);
//! assert_eq!(queue.kind(), QueueKind::Sorted);
//! assert_eq!(queue.top(), Some(&9));
//! ```

use crate::binary::BinaryHeapPq;
use crate::compare::{Comparator, MaxFirst};
use crate::pairing::PairingHeap;
use crate::sorted::SortedPq;
use crate::traits::PriorityQueue;
use std::fmt;
use std::str::FromStr;

/// The available queue backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueueKind {
    /// [`BinaryHeapPq`]
    Binary,
    /// [`SortedPq`]
    Sorted,
    /// [`PairingHeap`]
    Pairing,
}

impl QueueKind {
    pub const ALL: [QueueKind; 3] = [QueueKind::Binary, QueueKind::Sorted, QueueKind::Pairing];

    pub fn name(self) -> &'static str {
        match self {
            QueueKind::Binary => "binary",
            QueueKind::Sorted => "sorted",
            QueueKind::Pairing => "pairing",
        }
    }
}

impl fmt::Display for QueueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown backend name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseQueueKindError(String);

impl fmt::Display for ParseQueueKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown queue kind {:?} (expected binary, sorted or pairing)",
            self.0
        )
    }
}

impl std::error::Error for ParseQueueKindError {}

impl FromStr for QueueKind {
    type Err = ParseQueueKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QueueKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseQueueKindError(s.to_string()))
    }
}

/// One of the three backends, chosen at construction time
#[derive(Debug)]
pub enum AnyQueue<T, C = MaxFirst> {
    Binary(BinaryHeapPq<T, C>),
    Sorted(SortedPq<T, C>),
    Pairing(PairingHeap<T, C>),
}

impl<T, C: Comparator<T>> AnyQueue<T, C> {
    /// Creates an empty queue of the given kind
    pub fn new(kind: QueueKind, cmp: C) -> Self {
        match kind {
            QueueKind::Binary => AnyQueue::Binary(BinaryHeapPq::with_comparator(cmp)),
            QueueKind::Sorted => AnyQueue::Sorted(SortedPq::with_comparator(cmp)),
            QueueKind::Pairing => AnyQueue::Pairing(PairingHeap::with_comparator(cmp)),
        }
    }

    /// Bulk-builds a queue of the given kind
    pub fn from_iter_with<I: IntoIterator<Item = T>>(kind: QueueKind, iter: I, cmp: C) -> Self {
        match kind {
            QueueKind::Binary => AnyQueue::Binary(BinaryHeapPq::from_iter_with(iter, cmp)),
            QueueKind::Sorted => AnyQueue::Sorted(SortedPq::from_iter_with(iter, cmp)),
            QueueKind::Pairing => AnyQueue::Pairing(PairingHeap::from_iter_with(iter, cmp)),
        }
    }

    /// Creates an empty queue of the given kind behind a trait object
    pub fn boxed<'a>(kind: QueueKind, cmp: C) -> Box<dyn PriorityQueue<T> + 'a>
    where
        T: 'a,
        C: 'a,
    {
        match kind {
            QueueKind::Binary => Box::new(BinaryHeapPq::with_comparator(cmp)),
            QueueKind::Sorted => Box::new(SortedPq::with_comparator(cmp)),
            QueueKind::Pairing => Box::new(PairingHeap::with_comparator(cmp)),
        }
    }

    pub fn kind(&self) -> QueueKind {
        match self {
            AnyQueue::Binary(_) => QueueKind::Binary,
            AnyQueue::Sorted(_) => QueueKind::Sorted,
            AnyQueue::Pairing(_) => QueueKind::Pairing,
        }
    }

    /// Returns the pairing heap, if this is one, for handle-based access
    pub fn as_pairing_mut(&mut self) -> Option<&mut PairingHeap<T, C>> {
        match self {
            AnyQueue::Pairing(heap) => Some(heap),
            _ => None,
        }
    }

    fn as_dyn(&self) -> &dyn PriorityQueue<T> {
        match self {
            AnyQueue::Binary(q) => q,
            AnyQueue::Sorted(q) => q,
            AnyQueue::Pairing(q) => q,
        }
    }

    fn as_dyn_mut(&mut self) -> &mut dyn PriorityQueue<T> {
        match self {
            AnyQueue::Binary(q) => q,
            AnyQueue::Sorted(q) => q,
            AnyQueue::Pairing(q) => q,
        }
    }
}

impl<T, C: Comparator<T>> PriorityQueue<T> for AnyQueue<T, C> {
    fn push(&mut self, value: T) {
        self.as_dyn_mut().push(value)
    }

    fn pop(&mut self) -> Option<T> {
        self.as_dyn_mut().pop()
    }

    fn top(&self) -> Option<&T> {
        self.as_dyn().top()
    }

    fn len(&self) -> usize {
        self.as_dyn().len()
    }

    fn is_empty(&self) -> bool {
        self.as_dyn().is_empty()
    }

    fn update_priorities(&mut self) {
        self.as_dyn_mut().update_priorities()
    }

    fn clear(&mut self) {
        self.as_dyn_mut().clear()
    }
}

impl<T: Clone, C: Comparator<T> + Clone> Clone for AnyQueue<T, C> {
    fn clone(&self) -> Self {
        match self {
            AnyQueue::Binary(q) => AnyQueue::Binary(q.clone()),
            AnyQueue::Sorted(q) => AnyQueue::Sorted(q.clone()),
            AnyQueue::Pairing(q) => AnyQueue::Pairing(q.clone()),
        }
    }
}

impl<T, C: Comparator<T>> Extend<T> for AnyQueue<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        match self {
            AnyQueue::Binary(q) => q.extend(iter),
            AnyQueue::Sorted(q) => q.extend(iter),
            AnyQueue::Pairing(q) => q.extend(iter),
        }
    }
}
