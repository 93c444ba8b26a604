//! The generic ordered container over interchangeable engines.
//!
//! [`Tree`] owns the node arena, the cached root/min/max indices, the
//! comparator, and the key projection; everything engine-specific goes
//! through the [`TreeOps`] callback trait, so the same container code
//! serves the plain, AVL, red-black, and splay engines.

pub mod algebra;

use std::fmt;
use std::marker::PhantomData;

use crate::error::TreeError;
use crate::types::KvNode;
use crate::util::{self, build, IndexIter, RevIndexIter};

/// Engine callbacks required by [`Tree`].
pub trait TreeOps<K, V, N>
where
    N: KvNode<K, V>,
{
    fn new_node(key: K, value: V) -> N;

    /// Inserts an already-allocated node whose key is absent from the
    /// tree. Returns the new root.
    fn insert<C: Fn(&K, &K) -> i32>(
        arena: &mut Vec<N>,
        root: Option<u32>,
        node: u32,
        comparator: &C,
    ) -> Option<u32>;

    /// Unlinks `node` from the tree. Returns the new root. The node's
    /// arena slot is reclaimed by the container afterwards.
    fn remove<C: Fn(&K, &K) -> i32>(
        arena: &mut Vec<N>,
        root: Option<u32>,
        node: u32,
        comparator: &C,
    ) -> Option<u32>;

    /// Key lookup that is allowed to restructure the tree (the splay
    /// engine brings the accessed key to the root). Returns the new root
    /// and the matched node, if any.
    fn access<C: Fn(&K, &K) -> i32>(
        arena: &mut Vec<N>,
        root: Option<u32>,
        key: &K,
        comparator: &C,
    ) -> (Option<u32>, Option<u32>) {
        let found = util::find(arena, root, key, |n| n.key(), |a, b| comparator(a, b));
        (root, found)
    }

    /// Recomputes engine metadata (heights, colors) after a bulk build.
    fn finalize_build(_arena: &mut [N], _root: Option<u32>) {}

    /// Checks every structural invariant the engine maintains.
    fn validate<C: Fn(&K, &K) -> i32>(
        arena: &[N],
        root: Option<u32>,
        comparator: &C,
    ) -> Result<(), String>;
}

/// Three-way comparator over `PartialOrd`, the default ordering.
pub fn default_comparator<K: PartialOrd>(a: &K, b: &K) -> i32 {
    if a == b {
        0
    } else if a < b {
        -1
    } else {
        1
    }
}

/// Identity key projection for element-keyed (set-style) trees.
pub fn identity_key<K: Clone>(v: &K) -> K {
    v.clone()
}

/// Placeholder projection for trees built with [`Tree::map`]. Such trees
/// key every entry explicitly through [`Tree::insert`], so deriving a key
/// from a bare value is a caller error.
pub fn no_key_projection<K, V>(_: &V) -> K {
    panic!("tree has no key projection; insert entries with an explicit key")
}

/// Arena-backed ordered container.
///
/// The arena is kept dense: removing a node extracts its slot with
/// `swap_remove` and patches the moved node's neighbors, so a removal
/// invalidates only the highest live index. Indices returned by queries
/// stay valid across lookups and rotations, but not across removals.
///
/// Upsert contract: [`Tree::insert`] never overwrites. Inserting a present
/// key returns the existing node's index unmodified; callers that want
/// map-style replacement write through [`Tree::value_mut`].
pub struct Tree<K, V, N, O, C = fn(&K, &K) -> i32, P = fn(&V) -> K>
where
    N: KvNode<K, V>,
    O: TreeOps<K, V, N>,
    C: Fn(&K, &K) -> i32,
    P: Fn(&V) -> K,
{
    arena: Vec<N>,
    root: Option<u32>,
    min: Option<u32>,
    max: Option<u32>,
    comparator: C,
    key_of: P,
    _ops: PhantomData<(K, V, O)>,
}

impl<K, N, O> Tree<K, K, N, O, fn(&K, &K) -> i32, fn(&K) -> K>
where
    K: PartialOrd + Clone,
    N: KvNode<K, K>,
    O: TreeOps<K, K, N>,
{
    /// Empty tree over the natural order, keyed by the element itself.
    pub fn new() -> Self {
        Self::with_parts(default_comparator::<K>, identity_key::<K>)
    }

    /// Balanced-by-construction bulk build: deduplicate by key, sort,
    /// then wire by recursive midpoint bisection.
    pub fn from_iter<I: IntoIterator<Item = K>>(values: I) -> Self {
        let mut tree = Self::new();
        let entries = values.into_iter().map(|v| (v.clone(), v)).collect();
        tree.bulk_build(entries);
        tree
    }
}

impl<K, V, N, O, C, P> fmt::Debug for Tree<K, V, N, O, C, P>
where
    K: fmt::Debug,
    V: fmt::Debug,
    N: KvNode<K, V>,
    O: TreeOps<K, V, N>,
    C: Fn(&K, &K) -> i32,
    P: Fn(&V) -> K,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, N, O> Default for Tree<K, K, N, O, fn(&K, &K) -> i32, fn(&K) -> K>
where
    K: PartialOrd + Clone,
    N: KvNode<K, K>,
    O: TreeOps<K, K, N>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, N, O, C> Tree<K, K, N, O, C, fn(&K) -> K>
where
    K: Clone,
    N: KvNode<K, K>,
    O: TreeOps<K, K, N>,
    C: Fn(&K, &K) -> i32,
{
    /// Empty element-keyed tree over a custom order.
    pub fn with_comparator(comparator: C) -> Self {
        Self::with_parts(comparator, identity_key::<K>)
    }
}

impl<K, V, N, O> Tree<K, V, N, O, fn(&K, &K) -> i32, fn(&V) -> K>
where
    K: PartialOrd,
    N: KvNode<K, V>,
    O: TreeOps<K, V, N>,
{
    /// Empty map over the natural key order. Entries are keyed explicitly
    /// through [`Tree::insert`]; [`Tree::add`] is unavailable because the
    /// tree carries no key projection.
    pub fn map() -> Self {
        Self::with_parts(default_comparator::<K>, no_key_projection::<K, V>)
    }
}

impl<K, V, N, O, P> Tree<K, V, N, O, fn(&K, &K) -> i32, P>
where
    K: PartialOrd,
    N: KvNode<K, V>,
    O: TreeOps<K, V, N>,
    P: Fn(&V) -> K,
{
    /// Empty tree over the natural order with an explicit key projection.
    pub fn with_key(key_of: P) -> Self {
        Self::with_parts(default_comparator::<K>, key_of)
    }

    /// Bulk build of keyed payloads through `key_of`.
    pub fn from_iter_with_key<I: IntoIterator<Item = V>>(values: I, key_of: P) -> Self {
        let mut tree = Self::with_key(key_of);
        let entries = values
            .into_iter()
            .map(|v| ((tree.key_of)(&v), v))
            .collect();
        tree.bulk_build(entries);
        tree
    }
}

impl<K, V, N, O, C, P> Tree<K, V, N, O, C, P>
where
    N: KvNode<K, V>,
    O: TreeOps<K, V, N>,
    C: Fn(&K, &K) -> i32,
    P: Fn(&V) -> K,
{
    pub fn with_parts(comparator: C, key_of: P) -> Self {
        Self {
            arena: Vec::new(),
            root: None,
            min: None,
            max: None,
            comparator,
            key_of,
            _ops: PhantomData,
        }
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn root_index(&self) -> Option<u32> {
        self.root
    }

    pub fn arena(&self) -> &[N] {
        &self.arena
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    pub fn node(&self, idx: u32) -> &N {
        &self.arena[idx as usize]
    }

    pub fn key(&self, idx: u32) -> &K {
        self.node(idx).key()
    }

    pub fn value(&self, idx: u32) -> &V {
        self.node(idx).value()
    }

    pub fn value_mut(&mut self, idx: u32) -> &mut V {
        self.arena[idx as usize].value_mut()
    }

    /// Height of the tree, `-1` when empty, `0` for a single node.
    pub fn height(&self) -> i32 {
        util::height(&self.arena, self.root)
    }

    fn find_index(&self, key: &K) -> Option<u32> {
        util::find(&self.arena, self.root, key, |n| n.key(), |a, b| {
            (self.comparator)(a, b)
        })
    }

    /// Inserts `(key, value)`, creating a node only when the key is
    /// absent. Returns the node index and whether a node was created; a
    /// present key's node is returned unmodified.
    ///
    /// The presence check goes through the engine, so a self-adjusting
    /// engine restructures around the key even when it is already there.
    pub fn insert(&mut self, key: K, value: V) -> (u32, bool) {
        let (root, found) = O::access(&mut self.arena, self.root, &key, &self.comparator);
        self.root = root;
        if let Some(i) = found {
            return (i, false);
        }
        self.arena.push(O::new_node(key, value));
        let idx = (self.arena.len() - 1) as u32;
        self.root = O::insert(&mut self.arena, self.root, idx, &self.comparator);

        match self.min {
            None => {
                self.min = Some(idx);
                self.max = Some(idx);
            }
            Some(m) => {
                if (self.comparator)(self.arena[idx as usize].key(), self.arena[m as usize].key())
                    < 0
                {
                    self.min = Some(idx);
                }
                let mx = self.max.expect("min and max are cached together");
                if (self.comparator)(self.arena[idx as usize].key(), self.arena[mx as usize].key())
                    > 0
                {
                    self.max = Some(idx);
                }
            }
        }
        (idx, true)
    }

    /// Set-style insert: projects the key out of the value. A duplicate
    /// is a silent no-op.
    pub fn add(&mut self, value: V) -> (u32, bool) {
        let key = (self.key_of)(&value);
        self.insert(key, value)
    }

    /// Remove-if-present. Returns whether a node was removed. The lookup
    /// goes through the engine, so an absent key still restructures a
    /// self-adjusting tree around its nearest neighbor.
    pub fn discard(&mut self, key: &K) -> bool {
        let (root, found) = O::access(&mut self.arena, self.root, key, &self.comparator);
        self.root = root;
        match found {
            Some(i) => {
                self.remove_at(i);
                true
            }
            None => false,
        }
    }

    /// Remove-or-fail. Presence is checked before any link is unhooked.
    pub fn remove(&mut self, key: &K) -> Result<(K, V), TreeError> {
        let (root, found) = O::access(&mut self.arena, self.root, key, &self.comparator);
        self.root = root;
        let i = found.ok_or(TreeError::KeyNotFound)?;
        Ok(self.remove_at(i))
    }

    /// Removes and returns the maximum entry.
    pub fn pop(&mut self) -> Result<(K, V), TreeError> {
        self.popmax()
    }

    /// Removes and returns the minimum entry.
    pub fn popmin(&mut self) -> Result<(K, V), TreeError> {
        let i = self.min.ok_or(TreeError::EmptyCollection)?;
        Ok(self.remove_at(i))
    }

    /// Removes and returns the maximum entry.
    pub fn popmax(&mut self) -> Result<(K, V), TreeError> {
        let i = self.max.ok_or(TreeError::EmptyCollection)?;
        Ok(self.remove_at(i))
    }

    fn remove_at(&mut self, idx: u32) -> (K, V) {
        if self.min == Some(idx) {
            self.min = util::next(&self.arena, idx);
        }
        if self.max == Some(idx) {
            self.max = util::prev(&self.arena, idx);
        }
        self.root = O::remove(&mut self.arena, self.root, idx, &self.comparator);
        self.detach_slot(idx).into_entry()
    }

    /// Extracts an unlinked node's slot, keeping the arena dense: the
    /// last node moves into the hole and its neighbors are re-pointed.
    fn detach_slot(&mut self, idx: u32) -> N {
        let last = (self.arena.len() - 1) as u32;
        let node = self.arena.swap_remove(idx as usize);
        if idx != last {
            let p = self.arena[idx as usize].p();
            let l = self.arena[idx as usize].l();
            let r = self.arena[idx as usize].r();
            if let Some(p) = p {
                if self.arena[p as usize].l() == Some(last) {
                    self.arena[p as usize].set_l(Some(idx));
                } else {
                    self.arena[p as usize].set_r(Some(idx));
                }
            }
            if let Some(l) = l {
                self.arena[l as usize].set_p(Some(idx));
            }
            if let Some(r) = r {
                self.arena[r as usize].set_p(Some(idx));
            }
            if self.root == Some(last) {
                self.root = Some(idx);
            }
            if self.min == Some(last) {
                self.min = Some(idx);
            }
            if self.max == Some(last) {
                self.max = Some(idx);
            }
        }
        node
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
        self.min = None;
        self.max = None;
    }

    /// Self-adjusting lookup: the splay engine brings the accessed (or
    /// nearest) key to the root; the other engines leave the tree as is.
    pub fn find(&mut self, key: &K) -> Option<u32> {
        let (root, found) = O::access(&mut self.arena, self.root, key, &self.comparator);
        self.root = root;
        found
    }

    /// Plain lookup, never restructures.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.find_index(key).map(|i| self.arena[i as usize].value())
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let idx = self.find_index(key)?;
        Some(self.arena[idx as usize].value_mut())
    }

    pub fn contains(&self, key: &K) -> bool {
        self.find_index(key).is_some()
    }

    /// Minimum node, or [`TreeError::EmptyCollection`].
    pub fn min(&self) -> Result<u32, TreeError> {
        self.min.ok_or(TreeError::EmptyCollection)
    }

    /// Maximum node, or [`TreeError::EmptyCollection`].
    pub fn max(&self) -> Result<u32, TreeError> {
        self.max.ok_or(TreeError::EmptyCollection)
    }

    pub fn first(&self) -> Option<u32> {
        self.min
    }

    pub fn last(&self) -> Option<u32> {
        self.max
    }

    /// In-order successor of `idx`: [`TreeError::InvalidNode`] for an
    /// index outside the arena, [`TreeError::KeyNotFound`] when `idx`
    /// holds the maximum.
    pub fn successor(&self, idx: u32) -> Result<u32, TreeError> {
        if idx as usize >= self.arena.len() {
            return Err(TreeError::InvalidNode);
        }
        util::next(&self.arena, idx).ok_or(TreeError::KeyNotFound)
    }

    /// In-order predecessor, the mirror of [`Tree::successor`].
    pub fn predecessor(&self, idx: u32) -> Result<u32, TreeError> {
        if idx as usize >= self.arena.len() {
            return Err(TreeError::InvalidNode);
        }
        util::prev(&self.arena, idx).ok_or(TreeError::KeyNotFound)
    }

    /// Greatest key `<=` the query.
    pub fn floor(&self, key: &K) -> Option<u32> {
        util::find_or_next_lower(&self.arena, self.root, key, |n| n.key(), |a, b| {
            (self.comparator)(a, b)
        })
    }

    /// Least key `>=` the query.
    pub fn ceiling(&self, key: &K) -> Option<u32> {
        util::find_or_next_higher(&self.arena, self.root, key, |n| n.key(), |a, b| {
            (self.comparator)(a, b)
        })
    }

    /// Forward in-order index iterator (stack-based).
    pub fn indices(&self) -> IndexIter<'_, N> {
        IndexIter::new(&self.arena, self.root)
    }

    /// Reverse in-order index iterator (stack-based).
    pub fn indices_rev(&self) -> RevIndexIter<'_, N> {
        RevIndexIter::new(&self.arena, self.root)
    }

    /// Forward in-order entry iterator.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        let arena = &self.arena;
        IndexIter::new(arena, self.root).map(move |i| {
            let n = &arena[i as usize];
            (n.key(), n.value())
        })
    }

    /// Reverse in-order entry iterator.
    pub fn iter_rev(&self) -> impl Iterator<Item = (&K, &V)> {
        let arena = &self.arena;
        RevIndexIter::new(arena, self.root).map(move |i| {
            let n = &arena[i as usize];
            (n.key(), n.value())
        })
    }

    pub fn for_each<G: FnMut(u32, &N)>(&self, mut f: G) {
        let mut curr = self.min;
        while let Some(i) = curr {
            f(i, &self.arena[i as usize]);
            curr = util::next(&self.arena, i);
        }
    }

    /// Checks every invariant the engine maintains.
    pub fn assert_valid(&self) -> Result<(), String> {
        O::validate(&self.arena, self.root, &self.comparator)
    }

    fn bulk_build(&mut self, mut entries: Vec<(K, V)>) {
        entries.sort_by(|a, b| (self.comparator)(&a.0, &b.0).cmp(&0));
        entries.dedup_by(|a, b| (self.comparator)(&a.0, &b.0) == 0);
        self.rebuild_sorted(entries);
    }

    /// Rebuilds from entries already sorted and unique by key. Arena
    /// index equals rank afterwards.
    fn rebuild_sorted(&mut self, entries: Vec<(K, V)>) {
        self.arena = entries
            .into_iter()
            .map(|(k, v)| O::new_node(k, v))
            .collect();
        let n = self.arena.len() as u32;
        self.root = build::bisect(&mut self.arena, 0, n, None);
        O::finalize_build(&mut self.arena, self.root);
        self.min = (n > 0).then_some(0);
        self.max = n.checked_sub(1);
    }
}
