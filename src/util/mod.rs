//! Engine-agnostic navigation and search over arena-backed trees.
//!
//! Everything here is defined against the [`Node`] link contract alone, so
//! the same functions serve all four engines. None of these functions
//! mutates the tree except [`insert`], which attaches a node without any
//! rebalancing (the unbalanced baseline; balancing engines do their own
//! descent).

pub mod build;
pub mod iter;
pub mod swap;

use crate::types::Node;

pub use iter::{IndexIter, RevIndexIter};
pub use swap::swap_with_successor;

#[inline]
pub(crate) fn parent<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].p()
}

#[inline]
pub(crate) fn left<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].l()
}

#[inline]
pub(crate) fn right<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].r()
}

#[inline]
pub(crate) fn set_parent<N: Node>(arena: &mut [N], idx: u32, to: Option<u32>) {
    arena[idx as usize].set_p(to);
}

#[inline]
pub(crate) fn set_left<N: Node>(arena: &mut [N], idx: u32, to: Option<u32>) {
    arena[idx as usize].set_l(to);
}

#[inline]
pub(crate) fn set_right<N: Node>(arena: &mut [N], idx: u32, to: Option<u32>) {
    arena[idx as usize].set_r(to);
}

/// Leftmost node under `root` (the tree minimum).
pub fn first<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut at = root?;
    while let Some(l) = left(arena, at) {
        at = l;
    }
    Some(at)
}

/// Rightmost node under `root` (the tree maximum).
pub fn last<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut at = root?;
    while let Some(r) = right(arena, at) {
        at = r;
    }
    Some(at)
}

/// In-order successor of `node`: leftmost of the right subtree when one
/// exists, otherwise the first ancestor entered from its left child.
pub fn next<N: Node>(arena: &[N], node: u32) -> Option<u32> {
    if let Some(r) = right(arena, node) {
        return first(arena, Some(r));
    }
    let mut child = node;
    while let Some(p) = parent(arena, child) {
        if left(arena, p) == Some(child) {
            return Some(p);
        }
        child = p;
    }
    None
}

/// In-order predecessor, the mirror of [`next`].
pub fn prev<N: Node>(arena: &[N], node: u32) -> Option<u32> {
    if let Some(l) = left(arena, node) {
        return last(arena, Some(l));
    }
    let mut child = node;
    while let Some(p) = parent(arena, child) {
        if right(arena, p) == Some(child) {
            return Some(p);
        }
        child = p;
    }
    None
}

/// Number of nodes under `root`.
pub fn size<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    let mut pending: Vec<u32> = root.into_iter().collect();
    let mut count = 0;
    while let Some(i) = pending.pop() {
        count += 1;
        pending.extend(left(arena, i));
        pending.extend(right(arena, i));
    }
    count
}

/// Height of the subtree under `root`, with the empty tree at `-1` and a
/// single node at `0`.
pub fn height<N: Node>(arena: &[N], root: Option<u32>) -> i32 {
    match root {
        None => -1,
        Some(i) => 1 + height(arena, left(arena, i)).max(height(arena, right(arena, i))),
    }
}

/// Finds a node by key.
pub fn find<N, K, F, C>(
    arena: &[N],
    root: Option<u32>,
    key: &K,
    key_of: F,
    comparator: C,
) -> Option<u32>
where
    N: Node,
    F: Fn(&N) -> &K,
    C: Fn(&K, &K) -> i32,
{
    let mut at = root;
    while let Some(i) = at {
        at = match comparator(key, key_of(&arena[i as usize])) {
            0 => return Some(i),
            c if c < 0 => left(arena, i),
            _ => right(arena, i),
        };
    }
    None
}

/// Finds the node with the greatest key `<=` the query (the floor, or
/// infimum). A threshold descent keeping the best candidate seen so far.
pub fn find_or_next_lower<N, K, F, C>(
    arena: &[N],
    root: Option<u32>,
    key: &K,
    key_of: F,
    comparator: C,
) -> Option<u32>
where
    N: Node,
    F: Fn(&N) -> &K,
    C: Fn(&K, &K) -> i32,
{
    let mut candidate = None;
    let mut at = root;
    while let Some(i) = at {
        let cmp = comparator(key, key_of(&arena[i as usize]));
        if cmp == 0 {
            return Some(i);
        }
        at = if cmp > 0 {
            candidate = Some(i);
            right(arena, i)
        } else {
            left(arena, i)
        };
    }
    candidate
}

/// Finds the node with the least key `>=` the query (the ceiling, or
/// supremum). Mirror of [`find_or_next_lower`].
pub fn find_or_next_higher<N, K, F, C>(
    arena: &[N],
    root: Option<u32>,
    key: &K,
    key_of: F,
    comparator: C,
) -> Option<u32>
where
    N: Node,
    F: Fn(&N) -> &K,
    C: Fn(&K, &K) -> i32,
{
    let mut candidate = None;
    let mut at = root;
    while let Some(i) = at {
        let cmp = comparator(key, key_of(&arena[i as usize]));
        if cmp == 0 {
            return Some(i);
        }
        at = if cmp < 0 {
            candidate = Some(i);
            left(arena, i)
        } else {
            right(arena, i)
        };
    }
    candidate
}

/// Plain BST insert: descend by key, attach `node` at the reached NIL.
/// Returns the new root. No rebalancing is performed.
pub fn insert<N, K, F, C>(
    arena: &mut [N],
    root: Option<u32>,
    node: u32,
    key_of: F,
    comparator: C,
) -> Option<u32>
where
    N: Node,
    F: Fn(&N) -> &K,
    C: Fn(&K, &K) -> i32,
{
    let Some(mut at) = root else {
        return Some(node);
    };

    loop {
        let goes_left = {
            let key = key_of(&arena[node as usize]);
            comparator(key, key_of(&arena[at as usize])) < 0
        };
        let step = if goes_left {
            left(arena, at)
        } else {
            right(arena, at)
        };
        let Some(child) = step else {
            if goes_left {
                set_left(arena, at, Some(node));
            } else {
                set_right(arena, at, Some(node));
            }
            set_parent(arena, node, Some(at));
            return root;
        };
        at = child;
    }
}

/// Checks BST ordering and parent-link integrity under `root`.
///
/// Shared by the engines without an extra structural invariant (binary,
/// splay); the balanced engines layer their own checks on top.
pub fn assert_bst<N, K, F, C>(
    arena: &[N],
    root: Option<u32>,
    key_of: F,
    comparator: C,
) -> Result<(), String>
where
    N: Node,
    F: Fn(&N) -> &K,
    C: Fn(&K, &K) -> i32,
{
    let Some(root) = root else {
        return Ok(());
    };

    if parent(arena, root).is_some() {
        return Err("Root has parent".to_string());
    }

    fn links<N: Node>(arena: &[N], node: u32) -> Result<(), String> {
        if let Some(l) = left(arena, node) {
            if parent(arena, l) != Some(node) {
                return Err("Broken parent link on left child".to_string());
            }
            links(arena, l)?;
        }
        if let Some(r) = right(arena, node) {
            if parent(arena, r) != Some(node) {
                return Err("Broken parent link on right child".to_string());
            }
            links(arena, r)?;
        }
        Ok(())
    }
    links(arena, root)?;

    let mut at = first(arena, Some(root));
    let mut before: Option<u32> = None;
    while let Some(i) = at {
        if let Some(b) = before {
            let cmp = comparator(key_of(&arena[b as usize]), key_of(&arena[i as usize]));
            if cmp >= 0 {
                return Err("Node order violated".to_string());
            }
        }
        before = Some(i);
        at = next(arena, i);
    }

    Ok(())
}
