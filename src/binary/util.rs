//! Unbalanced baseline engine: plain BST attach and splice, no
//! restructuring beyond the removal itself.

use crate::types::KvNode;
use crate::util::{self, left, parent, right, set_left, set_parent, set_right};

/// Descend by key and attach `n` at the reached NIL. Returns the new root.
pub fn insert<K, V, N, C>(arena: &mut [N], root: Option<u32>, n: u32, comparator: &C) -> Option<u32>
where
    N: KvNode<K, V>,
    C: Fn(&K, &K) -> i32,
{
    util::insert(arena, root, n, |node| node.key(), |a, b| comparator(a, b))
}

/// Remove `n` from the tree rooted at `root`. Returns the new root.
///
/// A node with at most one child is spliced out directly. With two
/// children, the in-order predecessor is detached from its own position
/// and grafted into the removed node's place; no rebalancing follows.
pub fn remove<N: crate::types::Node>(arena: &mut [N], root: Option<u32>, n: u32) -> Option<u32> {
    let p = parent(arena, n);
    let l = left(arena, n);
    let r = right(arena, n);
    set_parent(arena, n, None);
    set_left(arena, n, None);
    set_right(arena, n, None);

    let replacement = match (l, r) {
        (None, None) => None,
        (Some(c), None) | (None, Some(c)) => {
            set_parent(arena, c, p);
            Some(c)
        }
        (Some(l), Some(r)) => {
            let mut pred = l;
            while let Some(rr) = right(arena, pred) {
                pred = rr;
            }
            if pred != l {
                let pp = parent(arena, pred).expect("predecessor below left child has parent");
                let pl = left(arena, pred);
                set_right(arena, pp, pl);
                if let Some(pl) = pl {
                    set_parent(arena, pl, Some(pp));
                }
                set_left(arena, pred, Some(l));
                set_parent(arena, l, Some(pred));
            }
            set_right(arena, pred, Some(r));
            set_parent(arena, r, Some(pred));
            set_parent(arena, pred, p);
            Some(pred)
        }
    };

    match p {
        Some(p) => {
            if left(arena, p) == Some(n) {
                set_left(arena, p, replacement);
            } else {
                set_right(arena, p, replacement);
            }
            root
        }
        None => replacement,
    }
}
