//! Priority Queues for Rust
//!
//! This crate provides one priority-queue contract, [`PriorityQueue`], with
//! three interchangeable backends. Every queue is ordered by a
//! [`Comparator`](compare::Comparator) fixed at construction, and always yields
//! the most extreme element under it.
//!
//! # Backends
//!
//! - **Binary Heap** ([`binary::BinaryHeapPq`]): O(log n) push and pop; O(n) rebuild
//! - **Sorted Vector** ([`sorted::SortedPq`]): O(n) push; O(1) pop; O(n log n) rebuild
//! - **Pairing Heap** ([`pairing::PairingHeap`]): O(1) push; O(log n) amortized pop;
//!   stable handles and in-place priority improvement through [`AddressableQueue`]
//!
//! [`select::AnyQueue`] picks one of the three at runtime.
//!
//! # Example
//!
//! ```rust
//! use pairing_pq::pairing::PairingHeap;
//! use pairing_pq::{AddressableQueue, PriorityQueue};
//!
//! let mut heap = PairingHeap::new();
//! let handle1 = heap.add_node(10);
//! let handle2 = heap.add_node(2);
//! heap.update_elt(&handle2, 20).unwrap();
//! assert_eq!(heap.top(), Some(&20));
//! assert_eq!(heap.get(&handle1), Some(&10));
//! ```

pub mod binary;
pub mod compare;
pub mod error;
pub mod pairing;
pub mod select;
pub mod sorted;
pub mod storage;
pub mod traits;

// Re-export the main traits for convenience
pub use error::{HeapError, InvariantError};
pub use traits::{AddressableQueue, Handle, PriorityQueue};
