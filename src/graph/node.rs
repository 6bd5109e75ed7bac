//! Node identity: stable handles and value-based deduplication.
//!
//! A [`NodeRegistry`] is an arena of node values indexed by [`NodeId`], plus a
//! hash index from value to handle. Adding a value that is already present
//! returns the existing handle, so "same node" is decided in one place.
//!
//! Slots of removed nodes stay vacant and are never handed out again. Dense
//! per-call tables in the algorithms are therefore sized by
//! [`NodeRegistry::bound`] rather than by the live node count.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// Handle to a node inside one graph store.
///
/// Handles are only meaningful for the store that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(usize);

impl NodeId {
    /// Wraps a raw slot index.
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the slot index of this handle.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// Deduplicating arena of node values.
#[derive(Debug, Clone)]
pub struct NodeRegistry<V> {
    slots: Vec<Option<V>>,
    index: HashMap<V, NodeId>,
}

impl<V> NodeRegistry<V> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns true if no node is live.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// One past the largest slot index ever issued.
    pub fn bound(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if `id` refers to a live node.
    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        matches!(self.slots.get(id.index()), Some(Some(_)))
    }

    /// Returns the value of a live node.
    pub fn get(&self, id: NodeId) -> Option<&V> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    /// Iterates over live nodes in insertion order.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            inner: self.slots.iter().enumerate(),
        }
    }

    /// Iterates over live handles in insertion order.
    pub fn ids(&self) -> Ids<'_, V> {
        Ids { inner: self.iter() }
    }
}

impl<V: Eq + Hash + Clone> NodeRegistry<V> {
    /// Registers `value`, returning its handle and whether it was newly added.
    ///
    /// An equal value already present yields the existing handle and `false`.
    pub fn insert(&mut self, value: V) -> (NodeId, bool) {
        if let Some(&id) = self.index.get(&value) {
            return (id, false);
        }
        let id = NodeId(self.slots.len());
        self.index.insert(value.clone(), id);
        self.slots.push(Some(value));
        (id, true)
    }

    /// Looks up the handle of a live node by value.
    pub fn find<Q>(&self, value: &Q) -> Option<NodeId>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(value).copied()
    }

    /// Removes a live node and returns its value. Unknown handles yield `None`.
    pub fn remove(&mut self, id: NodeId) -> Option<V> {
        let value = self.slots.get_mut(id.index())?.take()?;
        self.index.remove(&value);
        Some(value)
    }
}

impl<V> Default for NodeRegistry<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over `(NodeId, &V)` for live nodes.
pub struct Iter<'a, V> {
    inner: std::iter::Enumerate<std::slice::Iter<'a, Option<V>>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (NodeId, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        for (idx, slot) in self.inner.by_ref() {
            if let Some(value) = slot {
                return Some((NodeId(idx), value));
            }
        }
        None
    }
}

/// Iterator over live [`NodeId`]s.
pub struct Ids<'a, V> {
    inner: Iter<'a, V>,
}

impl<V> Iterator for Ids<'_, V> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        self.inner.next().map(|(id, _)| id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_deduplicates_by_value() {
        let mut registry = NodeRegistry::new();
        let (a, fresh_a) = registry.insert(String::from("a"));
        let (again, fresh_again) = registry.insert(String::from("a"));

        assert!(fresh_a);
        assert!(!fresh_again);
        assert_eq!(a, again);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.find("a"), Some(a));
    }

    #[test]
    fn test_removed_slots_are_not_reused() {
        let mut registry = NodeRegistry::new();
        let (a, _) = registry.insert(1);
        let (b, _) = registry.insert(2);

        assert_eq!(registry.remove(a), Some(1));
        assert_eq!(registry.remove(a), None);
        assert!(!registry.contains(a));

        let (a2, fresh) = registry.insert(1);
        assert!(fresh);
        assert_ne!(a, a2);
        assert_eq!(registry.bound(), 3);
        assert_eq!(registry.ids().collect::<Vec<_>>(), vec![b, a2]);
    }
}
