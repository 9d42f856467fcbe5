//! Arena storage for tree-shaped queues
//!
//! Nodes live in a [`NodeArena`] backed by `slotmap` and are addressed by
//! [`NodeKey`]s instead of pointers. Keys are generational:
//!
//! - a node never changes key while it is live, so a key can be handed out
//!   as an external handle
//! - removing a node frees its slot for reuse, and a stale key for that slot
//!   is detected rather than aliasing the new occupant
//!
//! Dropping the arena frees every node in a flat pass over the slots, so
//! teardown cost and stack depth do not depend on the tree's shape.

use slotmap::{new_key_type, SlotMap};
use std::ops::{Index, IndexMut};

new_key_type! {
    /// Key of a node in a [`NodeArena`]
    pub struct NodeKey;
}

/// Slot-map backed node storage
#[derive(Debug, Clone)]
pub struct NodeArena<N> {
    nodes: SlotMap<NodeKey, N>,
}

impl<N> Default for NodeArena<N> {
    fn default() -> Self {
        Self {
            nodes: SlotMap::with_key(),
        }
    }
}

impl<N> NodeArena<N> {
    /// Creates an empty arena
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty arena with room for `capacity` nodes
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: SlotMap::with_capacity_and_key(capacity),
        }
    }

    /// Insert a node, returning a key to reference it
    #[inline]
    pub fn insert(&mut self, node: N) -> NodeKey {
        self.nodes.insert(node)
    }

    /// Remove a node by key, returning the node if it existed
    #[inline]
    pub fn remove(&mut self, key: NodeKey) -> Option<N> {
        self.nodes.remove(key)
    }

    #[inline]
    pub fn get(&self, key: NodeKey) -> Option<&N> {
        self.nodes.get(key)
    }

    #[inline]
    pub fn get_mut(&mut self, key: NodeKey) -> Option<&mut N> {
        self.nodes.get_mut(key)
    }

    /// Returns true if `key` refers to a live node
    #[inline]
    pub fn contains(&self, key: NodeKey) -> bool {
        self.nodes.contains_key(key)
    }

    /// Number of live nodes
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Frees every node; all outstanding keys become stale
    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Iterates over live keys in slot order
    pub fn keys(&self) -> impl Iterator<Item = NodeKey> + '_ {
        self.nodes.keys()
    }

    /// Iterates over live nodes in slot order
    pub fn values(&self) -> impl Iterator<Item = &N> + '_ {
        self.nodes.values()
    }

    /// Iterates mutably over live nodes in slot order
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut N> + '_ {
        self.nodes.values_mut()
    }
}

impl<N> Index<NodeKey> for NodeArena<N> {
    type Output = N;

    #[inline]
    fn index(&self, key: NodeKey) -> &N {
        &self.nodes[key]
    }
}

impl<N> IndexMut<NodeKey> for NodeArena<N> {
    #[inline]
    fn index_mut(&mut self, key: NodeKey) -> &mut N {
        &mut self.nodes[key]
    }
}
