//! Node trait definitions shared by every tree engine.
//!
//! A tree is a `Vec<N>` arena plus an optional root index; every "pointer"
//! (parent, left, right) is an `Option<u32>` index into that arena. `None`
//! is the NIL sentinel: there is no shared empty-node object, and no
//! ownership cycle to break, because the arena owns storage and the parent
//! link is just another index.

/// Structural links (`p`, `l`, `r`) of an arena-backed binary tree node.
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// Key/value access on top of [`Node`].
///
/// Every engine node stores both key and value; the key is the comparable
/// projection of the value, cached at insertion time so comparisons never
/// re-run the projection.
pub trait KvNode<K, V>: Node {
    fn key(&self) -> &K;
    fn value(&self) -> &V;
    fn value_mut(&mut self) -> &mut V;

    /// Consumes the node, yielding its entry.
    fn into_entry(self) -> (K, V);
}
