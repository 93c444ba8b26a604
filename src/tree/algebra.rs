//! Set algebra over ordered trees.
//!
//! The allocating operations run a single merged in-order walk over both
//! operands using the left operand's comparator, then rebuild the result
//! by midpoint bisection, so `a OP b` costs O(n + m) comparisons and the
//! produced tree is balanced regardless of engine. The in-place variants
//! instead mutate the left operand through its own engine, one insert or
//! discard at a time, so the resulting shape is whatever that engine's
//! incremental maintenance gives. When both trees hold a key, the left
//! operand's entry wins.
//!
//! Equality and the subset partial order compare key sequences only;
//! payloads and tree shape never participate.

use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Sub, SubAssign};

use super::{Tree, TreeOps};
use crate::types::KvNode;

/// Which operand(s) a merged entry came from.
enum Source {
    Left,
    Right,
    Both,
}

impl<K, V, N, O, C, P> Tree<K, V, N, O, C, P>
where
    N: KvNode<K, V>,
    O: TreeOps<K, V, N>,
    C: Fn(&K, &K) -> i32,
    P: Fn(&V) -> K,
{
    /// Merged in-order walk over `self` and `other`, classifying each
    /// entry by provenance and keeping those `keep` accepts. Entries come
    /// out sorted and unique by key, ready for [`Tree::rebuild_sorted`].
    fn merged_entries<F>(&self, other: &Self, mut keep: F) -> Vec<(K, V)>
    where
        K: Clone,
        V: Clone,
        F: FnMut(&Source) -> bool,
    {
        let mut out = Vec::new();
        let mut a = self.indices();
        let mut b = other.indices();
        let mut x = a.next();
        let mut y = b.next();

        let mut push = |source: Source, node: &N| {
            if keep(&source) {
                out.push((node.key().clone(), node.value().clone()));
            }
        };

        loop {
            match (x, y) {
                (Some(i), Some(j)) => {
                    let na = self.node(i);
                    let nb = other.node(j);
                    let cmp = (self.comparator)(na.key(), nb.key());
                    if cmp < 0 {
                        push(Source::Left, na);
                        x = a.next();
                    } else if cmp > 0 {
                        push(Source::Right, nb);
                        y = b.next();
                    } else {
                        push(Source::Both, na);
                        x = a.next();
                        y = b.next();
                    }
                }
                (Some(i), None) => {
                    push(Source::Left, self.node(i));
                    x = a.next();
                }
                (None, Some(j)) => {
                    push(Source::Right, other.node(j));
                    y = b.next();
                }
                (None, None) => break,
            }
        }
        out
    }

    fn derived<F>(&self, other: &Self, keep: F) -> Self
    where
        K: Clone,
        V: Clone,
        C: Clone,
        P: Clone,
        F: FnMut(&Source) -> bool,
    {
        let mut result = Self::with_parts(self.comparator.clone(), self.key_of.clone());
        result.rebuild_sorted(self.merged_entries(other, keep));
        result
    }

    /// Keys in either tree. On a shared key `self`'s entry wins.
    pub fn union(&self, other: &Self) -> Self
    where
        K: Clone,
        V: Clone,
        C: Clone,
        P: Clone,
    {
        self.derived(other, |_| true)
    }

    /// Keys present in both trees, with `self`'s entries.
    pub fn intersection(&self, other: &Self) -> Self
    where
        K: Clone,
        V: Clone,
        C: Clone,
        P: Clone,
    {
        self.derived(other, |s| matches!(s, Source::Both))
    }

    /// Keys in `self` but not in `other`.
    pub fn difference(&self, other: &Self) -> Self
    where
        K: Clone,
        V: Clone,
        C: Clone,
        P: Clone,
    {
        self.derived(other, |s| matches!(s, Source::Left))
    }

    /// Keys in exactly one of the trees.
    pub fn symmetric_difference(&self, other: &Self) -> Self
    where
        K: Clone,
        V: Clone,
        C: Clone,
        P: Clone,
    {
        self.derived(other, |s| !matches!(s, Source::Both))
    }

    /// In-place union: absorbs `other`'s entries for keys `self` does not
    /// already hold, one insert at a time through the engine.
    pub fn union_with(&mut self, other: &Self)
    where
        K: Clone,
        V: Clone,
    {
        for (k, v) in other.iter() {
            if !self.contains(k) {
                self.insert(k.clone(), v.clone());
            }
        }
    }

    /// In-place intersection: drops every key absent from `other`.
    pub fn intersection_with(&mut self, other: &Self)
    where
        K: Clone,
    {
        let drop: Vec<K> = self
            .iter()
            .filter(|(k, _)| !other.contains(k))
            .map(|(k, _)| k.clone())
            .collect();
        for k in &drop {
            self.discard(k);
        }
    }

    /// In-place difference: drops every key also held by `other`.
    pub fn difference_with(&mut self, other: &Self)
    where
        K: Clone,
    {
        let drop: Vec<K> = other.iter().map(|(k, _)| k.clone()).collect();
        for k in &drop {
            self.discard(k);
        }
    }

    /// In-place symmetric difference: `other`'s keys toggle membership.
    pub fn symmetric_difference_with(&mut self, other: &Self)
    where
        K: Clone,
        V: Clone,
    {
        for (k, v) in other.iter() {
            if !self.discard(k) {
                self.insert(k.clone(), v.clone());
            }
        }
    }

    /// Every key of `self` is in `other`.
    pub fn is_subset(&self, other: &Self) -> bool {
        if self.len() > other.len() {
            return false;
        }
        self.merged_walk_all(other, |s| !matches!(s, Source::Left))
    }

    /// Every key of `other` is in `self`.
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// No key is shared. Probes the larger operand with the smaller one's
    /// keys, stopping at the first hit.
    pub fn is_disjoint(&self, other: &Self) -> bool {
        let (small, big) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small.indices().all(|i| !big.contains(small.key(i)))
    }

    /// Merged walk that only classifies, without cloning. Returns whether
    /// `pred` holds for every merged entry.
    fn merged_walk_all<F>(&self, other: &Self, mut pred: F) -> bool
    where
        F: FnMut(&Source) -> bool,
    {
        let mut a = self.indices();
        let mut b = other.indices();
        let mut x = a.next();
        let mut y = b.next();
        loop {
            let source = match (x, y) {
                (Some(i), Some(j)) => {
                    let cmp = (self.comparator)(self.key(i), other.key(j));
                    if cmp < 0 {
                        x = a.next();
                        Source::Left
                    } else if cmp > 0 {
                        y = b.next();
                        Source::Right
                    } else {
                        x = a.next();
                        y = b.next();
                        Source::Both
                    }
                }
                (Some(_), None) => {
                    x = a.next();
                    Source::Left
                }
                (None, Some(_)) => {
                    y = b.next();
                    Source::Right
                }
                (None, None) => return true,
            };
            if !pred(&source) {
                return false;
            }
        }
    }
}

impl<K, V, N, O, C, P> PartialEq for Tree<K, V, N, O, C, P>
where
    N: KvNode<K, V>,
    O: TreeOps<K, V, N>,
    C: Fn(&K, &K) -> i32,
    P: Fn(&V) -> K,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .indices()
                .zip(other.indices())
                .all(|(i, j)| (self.comparator)(self.key(i), other.key(j)) == 0)
    }
}

/// Subset ordering: `a < b` when `a` is a proper subset of `b`. Trees
/// with overlapping but incomparable key sets return `None`.
impl<K, V, N, O, C, P> PartialOrd for Tree<K, V, N, O, C, P>
where
    N: KvNode<K, V>,
    O: TreeOps<K, V, N>,
    C: Fn(&K, &K) -> i32,
    P: Fn(&V) -> K,
{
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        use std::cmp::Ordering;
        match (self.is_subset(other), other.is_subset(self)) {
            (true, true) => Some(Ordering::Equal),
            (true, false) => Some(Ordering::Less),
            (false, true) => Some(Ordering::Greater),
            (false, false) => None,
        }
    }
}

impl<K, V, N, O, C, P> BitOr for &Tree<K, V, N, O, C, P>
where
    K: Clone,
    V: Clone,
    N: KvNode<K, V>,
    O: TreeOps<K, V, N>,
    C: Fn(&K, &K) -> i32 + Clone,
    P: Fn(&V) -> K + Clone,
{
    type Output = Tree<K, V, N, O, C, P>;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl<K, V, N, O, C, P> BitAnd for &Tree<K, V, N, O, C, P>
where
    K: Clone,
    V: Clone,
    N: KvNode<K, V>,
    O: TreeOps<K, V, N>,
    C: Fn(&K, &K) -> i32 + Clone,
    P: Fn(&V) -> K + Clone,
{
    type Output = Tree<K, V, N, O, C, P>;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(rhs)
    }
}

impl<K, V, N, O, C, P> Sub for &Tree<K, V, N, O, C, P>
where
    K: Clone,
    V: Clone,
    N: KvNode<K, V>,
    O: TreeOps<K, V, N>,
    C: Fn(&K, &K) -> i32 + Clone,
    P: Fn(&V) -> K + Clone,
{
    type Output = Tree<K, V, N, O, C, P>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.difference(rhs)
    }
}

impl<K, V, N, O, C, P> BitXor for &Tree<K, V, N, O, C, P>
where
    K: Clone,
    V: Clone,
    N: KvNode<K, V>,
    O: TreeOps<K, V, N>,
    C: Fn(&K, &K) -> i32 + Clone,
    P: Fn(&V) -> K + Clone,
{
    type Output = Tree<K, V, N, O, C, P>;

    fn bitxor(self, rhs: Self) -> Self::Output {
        self.symmetric_difference(rhs)
    }
}

impl<K, V, N, O, C, P> BitOrAssign<&Tree<K, V, N, O, C, P>> for Tree<K, V, N, O, C, P>
where
    K: Clone,
    V: Clone,
    N: KvNode<K, V>,
    O: TreeOps<K, V, N>,
    C: Fn(&K, &K) -> i32,
    P: Fn(&V) -> K,
{
    fn bitor_assign(&mut self, rhs: &Tree<K, V, N, O, C, P>) {
        self.union_with(rhs);
    }
}

impl<K, V, N, O, C, P> BitAndAssign<&Tree<K, V, N, O, C, P>> for Tree<K, V, N, O, C, P>
where
    K: Clone,
    N: KvNode<K, V>,
    O: TreeOps<K, V, N>,
    C: Fn(&K, &K) -> i32,
    P: Fn(&V) -> K,
{
    fn bitand_assign(&mut self, rhs: &Tree<K, V, N, O, C, P>) {
        self.intersection_with(rhs);
    }
}

impl<K, V, N, O, C, P> SubAssign<&Tree<K, V, N, O, C, P>> for Tree<K, V, N, O, C, P>
where
    K: Clone,
    N: KvNode<K, V>,
    O: TreeOps<K, V, N>,
    C: Fn(&K, &K) -> i32,
    P: Fn(&V) -> K,
{
    fn sub_assign(&mut self, rhs: &Tree<K, V, N, O, C, P>) {
        self.difference_with(rhs);
    }
}

impl<K, V, N, O, C, P> BitXorAssign<&Tree<K, V, N, O, C, P>> for Tree<K, V, N, O, C, P>
where
    K: Clone,
    V: Clone,
    N: KvNode<K, V>,
    O: TreeOps<K, V, N>,
    C: Fn(&K, &K) -> i32,
    P: Fn(&V) -> K,
{
    fn bitxor_assign(&mut self, rhs: &Tree<K, V, N, O, C, P>) {
        self.symmetric_difference_with(rhs);
    }
}
