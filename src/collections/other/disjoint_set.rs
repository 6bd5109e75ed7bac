//! Disjoint Set (Union-Find) with token-scoped lifetime.
//!
//! Elements are dense indices `0..len`. Graph algorithms allocate one element
//! per node slot, so a [`NodeId`](crate::NodeId) index doubles as the element id.
//!
//! # Performance
//!
//! - Uses `Cell<usize>` for parent pointers so `find` can compress paths
//!   through a shared reference.
//! - Path compression and union-by-rank give nearly constant time operations.

use crate::token::InvariantLifetime;
use crate::GhostToken;
use std::cell::Cell;

/// A Disjoint Set (Union-Find) data structure branded to one token scope.
pub struct BrandedDisjointSet<'brand> {
    /// Parent pointers; a root points at itself.
    parent: Vec<Cell<usize>>,
    /// Rank (depth upper bound) for union-by-rank.
    rank: Vec<u8>,
    _brand: InvariantLifetime<'brand>,
}

impl<'brand> BrandedDisjointSet<'brand> {
    /// Creates a new empty disjoint set.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates a new disjoint set with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            parent: Vec::with_capacity(capacity),
            rank: Vec::with_capacity(capacity),
            _brand: InvariantLifetime::new(),
        }
    }

    /// Creates `len` singleton sets with ids `0..len`.
    pub fn with_singletons(token: &mut GhostToken<'brand>, len: usize) -> Self {
        let mut set = Self::with_capacity(len);
        for _ in 0..len {
            set.make_set(token);
        }
        set
    }

    /// Creates a new set containing a single element.
    /// Returns the representative ID of the new set.
    pub fn make_set(&mut self, _token: &mut GhostToken<'brand>) -> usize {
        let id = self.parent.len();
        self.parent.push(Cell::new(id));
        self.rank.push(0);
        id
    }

    /// Finds the representative of the set containing `id`, with path compression.
    ///
    /// # Panics
    /// Panics if `id` was never created by [`make_set`](Self::make_set).
    pub fn find(&self, _token: &GhostToken<'brand>, id: usize) -> usize {
        let mut root = id;
        loop {
            let parent = self.parent[root].get();
            if parent == root {
                break;
            }
            root = parent;
        }

        let mut curr = id;
        while curr != root {
            let parent = self.parent[curr].get();
            self.parent[curr].set(root);
            curr = parent;
        }

        root
    }

    /// Returns `true` if `a` and `b` share a representative.
    pub fn same_set(&self, token: &GhostToken<'brand>, a: usize, b: usize) -> bool {
        self.find(token, a) == self.find(token, b)
    }

    /// Unites the sets containing `id1` and `id2`.
    /// Returns `true` if they were in different sets, `false` otherwise.
    ///
    /// The lower-rank root is attached under the higher-rank root. On a tie the
    /// root of `id1` becomes the parent and its rank grows by one.
    pub fn union(&mut self, token: &mut GhostToken<'brand>, id1: usize, id2: usize) -> bool {
        let root1 = self.find(token, id1);
        let root2 = self.find(token, id2);

        if root1 == root2 {
            return false;
        }

        let rank1 = self.rank[root1];
        let rank2 = self.rank[root2];

        if rank1 < rank2 {
            self.parent[root1].set(root2);
        } else if rank1 > rank2 {
            self.parent[root2].set(root1);
        } else {
            self.parent[root2].set(root1);
            self.rank[root1] = rank1.saturating_add(1);
        }

        true
    }

    /// Returns the rank currently recorded for `id`.
    pub fn rank(&self, _token: &GhostToken<'brand>, id: usize) -> u8 {
        self.rank[id]
    }

    /// Returns the number of elements in the disjoint set.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns true if empty.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}

impl<'brand> Default for BrandedDisjointSet<'brand> {
    fn default() -> Self {
        Self::new()
    }
}

/// A wrapper around `BrandedDisjointSet` that bundles the token for convenience.
pub struct ActiveDisjointSet<'a, 'brand> {
    inner: &'a mut BrandedDisjointSet<'brand>,
    token: &'a mut GhostToken<'brand>,
}

impl<'a, 'brand> ActiveDisjointSet<'a, 'brand> {
    /// Creates a new active disjoint set.
    pub fn new(
        inner: &'a mut BrandedDisjointSet<'brand>,
        token: &'a mut GhostToken<'brand>,
    ) -> Self {
        Self { inner, token }
    }

    /// Creates a new set.
    pub fn make_set(&mut self) -> usize {
        self.inner.make_set(self.token)
    }

    /// Finds the representative.
    pub fn find(&self, id: usize) -> usize {
        self.inner.find(&*self.token, id)
    }

    /// Unites two sets.
    pub fn union(&mut self, id1: usize, id2: usize) -> bool {
        self.inner.union(self.token, id1, id2)
    }

    /// Returns `true` if both ids share a representative.
    pub fn same_set(&self, a: usize, b: usize) -> bool {
        self.inner.same_set(&*self.token, a, b)
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if empty.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
