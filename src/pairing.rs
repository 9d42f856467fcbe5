//! Pairing Heap implementation
//!
//! A pairing heap is a heap-ordered multiway tree maintained through a single
//! union primitive, `meld`:
//! - O(1) insert
//! - O(log n) amortized pop
//! - `update_elt` (decrease-key) costs one unlink plus one meld
//!
//! Nodes live in a [`NodeArena`] and are linked by arena keys: `child` points
//! at the eldest child, `sibling` at the next child of the same parent and
//! `parent` at the parent (none for the root). A node keeps its key for its
//! whole life, which is what makes a [`PairingHandle`] stable across every
//! restructuring short of popping that node.

use crate::compare::{Comparator, MaxFirst};
use crate::error::{HeapError, InvariantError};
use crate::storage::{NodeArena, NodeKey};
use crate::traits::{AddressableQueue, Handle, PriorityQueue};
use std::collections::VecDeque;
use std::fmt;

/// Handle to an element in a [`PairingHeap`]
///
/// A handle is tied to the heap that issued it. It stops resolving once its
/// element is popped; operations given a stale handle report
/// [`HeapError::InvalidHandle`] instead of touching another element.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct PairingHandle {
    key: NodeKey,
}

impl Handle for PairingHandle {}

struct Node<T> {
    value: T,
    child: Option<NodeKey>,
    sibling: Option<NodeKey>,
    parent: Option<NodeKey>,
}

impl<T> Node<T> {
    fn singleton(value: T) -> Self {
        Node {
            value,
            child: None,
            sibling: None,
            parent: None,
        }
    }

    fn unlink(&mut self) {
        self.child = None;
        self.sibling = None;
        self.parent = None;
    }
}

/// Pairing Heap
///
/// # Example
///
/// ```rust
/// use pairing_pq::{AddressableQueue, PriorityQueue};
/// use pairing_pq::compare::MinFirst;
/// use pairing_pq::pairing::PairingHeap;
///
/// let mut heap = PairingHeap::with_comparator(MinFirst);
/// let handle = heap.add_node(5);
/// heap.push(3);
/// heap.update_elt(&handle, 1).unwrap();
/// assert_eq!(heap.top(), Some(&1));
/// ```
pub struct PairingHeap<T, C = MaxFirst> {
    nodes: NodeArena<Node<T>>,
    root: Option<NodeKey>,
    cmp: C,
}

impl<T: Ord> PairingHeap<T> {
    /// Creates an empty max-first heap
    pub fn new() -> Self {
        Self::with_comparator(MaxFirst)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_comparator(capacity, MaxFirst)
    }
}

impl<T, C: Comparator<T>> PairingHeap<T, C> {
    /// Creates an empty heap ordered by `cmp`
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            nodes: NodeArena::new(),
            root: None,
            cmp,
        }
    }

    pub fn with_capacity_and_comparator(capacity: usize, cmp: C) -> Self {
        Self {
            nodes: NodeArena::with_capacity(capacity),
            root: None,
            cmp,
        }
    }

    /// Builds a heap by inserting every element of `iter`
    pub fn from_iter_with<I: IntoIterator<Item = T>>(iter: I, cmp: C) -> Self {
        let mut heap = Self::with_comparator(cmp);
        heap.extend(iter);
        log::debug!("pairing heap: bulk build of {} elements", heap.len());
        heap
    }

    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Iterates over the elements in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.nodes.values().map(|node| &node.value)
    }

    /// Iterates mutably over the elements in arbitrary order
    ///
    /// Call [`PriorityQueue::update_priorities`] after editing. Handles are
    /// not affected.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> + '_ {
        self.nodes.values_mut().map(|node| &mut node.value)
    }

    /// Melds two detached trees, returning the root of the result
    ///
    /// The less extreme root becomes the eldest child of the other. On a tie
    /// `b` is the one demoted.
    fn meld(&mut self, a: NodeKey, b: NodeKey) -> NodeKey {
        let (winner, loser) = if self.cmp.more_extreme(&self.nodes[b].value, &self.nodes[a].value)
        {
            (b, a)
        } else {
            (a, b)
        };

        let eldest = self.nodes[winner].child;
        let loser_node = &mut self.nodes[loser];
        loser_node.sibling = eldest;
        loser_node.parent = Some(winner);
        self.nodes[winner].child = Some(loser);
        winner
    }

    /// Melds a detached tree into the main tree
    fn meld_into_root(&mut self, tree: NodeKey) {
        self.root = Some(match self.root {
            Some(root) => self.meld(root, tree),
            None => tree,
        });
    }

    /// Removes `key` from its parent's child list
    ///
    /// The list is singly linked, so the predecessor is found by scanning
    /// from the parent's eldest child.
    fn cut(&mut self, key: NodeKey, parent: NodeKey) {
        let next = self.nodes[key].sibling;

        if self.nodes[parent].child == Some(key) {
            self.nodes[parent].child = next;
        } else {
            let mut cursor = self.nodes[parent].child;
            while let Some(prev) = cursor {
                let after = self.nodes[prev].sibling;
                if after == Some(key) {
                    self.nodes[prev].sibling = next;
                    break;
                }
                cursor = after;
            }
        }

        let node = &mut self.nodes[key];
        node.sibling = None;
        node.parent = None;
    }

    /// Melds a queue of detached trees front-pair by front-pair, pushing each
    /// result to the back, until one tree remains
    fn combine(&mut self, mut trees: VecDeque<NodeKey>) -> Option<NodeKey> {
        while trees.len() > 1 {
            if let (Some(a), Some(b)) = (trees.pop_front(), trees.pop_front()) {
                let merged = self.meld(a, b);
                trees.push_back(merged);
            }
        }
        trees.pop_front()
    }

    /// Visits every node reachable from the root, breadth first
    fn breadth_first(&self) -> Vec<NodeKey> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut pending: VecDeque<NodeKey> = self.root.into_iter().collect();

        while let Some(key) = pending.pop_front() {
            order.push(key);
            let mut child = self.nodes[key].child;
            while let Some(c) = child {
                pending.push_back(c);
                child = self.nodes[c].sibling;
            }
        }
        order
    }

    /// Verifies heap order, link consistency and the element count
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let root = match self.root {
            Some(root) => root,
            None if self.nodes.is_empty() => return Ok(()),
            None => {
                return Err(InvariantError::new(format!(
                    "no root but {} live nodes",
                    self.nodes.len()
                )))
            }
        };

        let root_node = self
            .nodes
            .get(root)
            .ok_or_else(|| InvariantError::new("root key is stale"))?;
        if root_node.parent.is_some() || root_node.sibling.is_some() {
            return Err(InvariantError::new("root has a parent or sibling"));
        }

        let mut reached = 1;
        let mut pending = vec![root];
        while let Some(key) = pending.pop() {
            let node = &self.nodes[key];
            let mut child = node.child;
            while let Some(c) = child {
                let child_node = self
                    .nodes
                    .get(c)
                    .ok_or_else(|| InvariantError::new("child link to a stale key"))?;
                if child_node.parent != Some(key) {
                    return Err(InvariantError::new("child does not point back at its parent"));
                }
                if self.cmp.more_extreme(&child_node.value, &node.value) {
                    return Err(InvariantError::new("child is more extreme than its parent"));
                }
                reached += 1;
                if reached > self.nodes.len() {
                    return Err(InvariantError::new("cycle in child/sibling links"));
                }
                pending.push(c);
                child = child_node.sibling;
            }
        }

        if reached != self.nodes.len() {
            return Err(InvariantError::new(format!(
                "{} nodes reachable from root, {} live",
                reached,
                self.nodes.len()
            )));
        }
        Ok(())
    }
}

impl<T, C: Comparator<T>> PriorityQueue<T> for PairingHeap<T, C> {
    fn push(&mut self, value: T) {
        self.add_node(value);
    }

    fn pop(&mut self) -> Option<T> {
        let root = self.root.take()?;
        let node = self.nodes.remove(root)?;

        let mut trees = VecDeque::new();
        let mut child = node.child;
        while let Some(c) = child {
            let child_node = &mut self.nodes[c];
            child = child_node.sibling.take();
            child_node.parent = None;
            trees.push_back(c);
        }

        log::trace!("pairing heap: pop melds {} subtrees", trees.len());
        self.root = self.combine(trees);
        Some(node.value)
    }

    fn top(&self) -> Option<&T> {
        self.root.map(|root| &self.nodes[root].value)
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    fn update_priorities(&mut self) {
        // Every node is detached in place; keys never change, so handles survive
        let keys: Vec<NodeKey> = self.nodes.keys().collect();
        for node in self.nodes.values_mut() {
            node.unlink();
        }

        log::trace!("pairing heap: rebuilding from {} nodes", keys.len());
        self.root = None;
        for key in keys {
            self.meld_into_root(key);
        }
    }

    fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }
}

impl<T, C: Comparator<T>> AddressableQueue<T> for PairingHeap<T, C> {
    type Handle = PairingHandle;

    fn add_node(&mut self, value: T) -> PairingHandle {
        let key = self.nodes.insert(Node::singleton(value));
        self.meld_into_root(key);
        PairingHandle { key }
    }

    fn update_elt(&mut self, handle: &PairingHandle, new_value: T) -> Result<(), HeapError> {
        let key = handle.key;
        let node = self.nodes.get_mut(key).ok_or(HeapError::InvalidHandle)?;

        if self.cmp.more_extreme(&node.value, &new_value) {
            return Err(HeapError::PriorityNotImproved);
        }
        node.value = new_value;

        // The root cannot lose its place by becoming more extreme
        let parent = match node.parent {
            Some(parent) => parent,
            None => return Ok(()),
        };

        if !self
            .cmp
            .more_extreme(&self.nodes[key].value, &self.nodes[parent].value)
        {
            return Ok(());
        }

        self.cut(key, parent);
        self.meld_into_root(key);
        Ok(())
    }

    fn get(&self, handle: &PairingHandle) -> Option<&T> {
        self.nodes.get(handle.key).map(|node| &node.value)
    }

    fn get_mut(&mut self, handle: &PairingHandle) -> Option<&mut T> {
        self.nodes.get_mut(handle.key).map(|node| &mut node.value)
    }

    fn contains(&self, handle: &PairingHandle) -> bool {
        self.nodes.contains(handle.key)
    }
}

/// Copies values, not shape: the clone is rebuilt by re-inserting the source's
/// elements in breadth-first order, so its handles are unrelated to the source's
impl<T: Clone, C: Comparator<T> + Clone> Clone for PairingHeap<T, C> {
    fn clone(&self) -> Self {
        let order = self.breadth_first();
        log::trace!("pairing heap: cloning {} nodes", order.len());

        let mut copy = Self::with_capacity_and_comparator(order.len(), self.cmp.clone());
        for key in order {
            copy.add_node(self.nodes[key].value.clone());
        }
        copy
    }
}

impl<T: fmt::Debug, C> fmt::Debug for PairingHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PairingHeap")
            .field("len", &self.nodes.len())
            .field("top", &self.root.map(|root| &self.nodes[root].value))
            .finish()
    }
}

impl<T, C: Comparator<T> + Default> Default for PairingHeap<T, C> {
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T, C: Comparator<T> + Default> FromIterator<T> for PairingHeap<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_iter_with(iter, C::default())
    }
}

impl<T, C: Comparator<T>> Extend<T> for PairingHeap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add_node(value);
        }
    }
}
