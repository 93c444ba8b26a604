//! Self-adjusting engine: a single top-down splay per access.
//!
//! The classic header-node formulation is expressed here as two assembly
//! trees (`l_root`/`l_tail` for everything known to be below the target,
//! `r_root`/`r_tail` for everything above). The walk descends comparing
//! keys, performs the zig-zig rotation when two consecutive steps go the
//! same way, peels the current node onto an assembly tree, and finally
//! reattaches both assemblies under the node that ends up on top.

use crate::types::{KvNode, Node};
use crate::util::{left, right, set_left, set_parent, set_right};

/// Splays the node selected by `cmp_at` (negative: go left, positive: go
/// right, zero: stop) to the root of the subtree rooted at `root`.
/// Returns the new subtree root: the matched node, or the last node on
/// the search path when no exact match exists.
fn splay_by<N, F>(arena: &mut [N], root: u32, cmp_at: F) -> u32
where
    N: Node,
    F: Fn(&[N], u32) -> i32,
{
    let mut t = root;
    let mut l_root: Option<u32> = None;
    let mut l_tail: Option<u32> = None;
    let mut r_root: Option<u32> = None;
    let mut r_tail: Option<u32> = None;

    loop {
        let c = cmp_at(arena, t);
        if c < 0 {
            let Some(mut child) = left(arena, t) else {
                break;
            };
            if cmp_at(arena, child) < 0 {
                // Zig-zig: promote the left child over t before linking.
                let b = right(arena, child);
                set_left(arena, t, b);
                if let Some(b) = b {
                    set_parent(arena, b, Some(t));
                }
                set_right(arena, child, Some(t));
                set_parent(arena, t, Some(child));
                set_parent(arena, child, None);
                t = child;
                let Some(nxt) = left(arena, t) else {
                    break;
                };
                child = nxt;
            }
            // Link t (with its right subtree) onto the right assembly.
            set_left(arena, t, None);
            set_parent(arena, child, None);
            match r_tail {
                Some(rt) => {
                    set_left(arena, rt, Some(t));
                    set_parent(arena, t, Some(rt));
                }
                None => {
                    r_root = Some(t);
                    set_parent(arena, t, None);
                }
            }
            r_tail = Some(t);
            t = child;
        } else if c > 0 {
            let Some(mut child) = right(arena, t) else {
                break;
            };
            if cmp_at(arena, child) > 0 {
                let b = left(arena, child);
                set_right(arena, t, b);
                if let Some(b) = b {
                    set_parent(arena, b, Some(t));
                }
                set_left(arena, child, Some(t));
                set_parent(arena, t, Some(child));
                set_parent(arena, child, None);
                t = child;
                let Some(nxt) = right(arena, t) else {
                    break;
                };
                child = nxt;
            }
            set_right(arena, t, None);
            set_parent(arena, child, None);
            match l_tail {
                Some(lt) => {
                    set_right(arena, lt, Some(t));
                    set_parent(arena, t, Some(lt));
                }
                None => {
                    l_root = Some(t);
                    set_parent(arena, t, None);
                }
            }
            l_tail = Some(t);
            t = child;
        } else {
            break;
        }
    }

    // Reassemble both halves around the final top node.
    let tl = left(arena, t);
    let tr = right(arena, t);
    if let Some(lt) = l_tail {
        set_right(arena, lt, tl);
        if let Some(tl) = tl {
            set_parent(arena, tl, Some(lt));
        }
        let lr = l_root.expect("left assembly has a root");
        set_left(arena, t, Some(lr));
        set_parent(arena, lr, Some(t));
    }
    if let Some(rt) = r_tail {
        set_left(arena, rt, tr);
        if let Some(tr) = tr {
            set_parent(arena, tr, Some(rt));
        }
        let rr = r_root.expect("right assembly has a root");
        set_right(arena, t, Some(rr));
        set_parent(arena, rr, Some(t));
    }
    set_parent(arena, t, None);
    t
}

/// Splays the node holding `key` (or the nearest node on the search path)
/// to the root. Returns the new root.
pub fn splay<K, V, N, C>(
    arena: &mut [N],
    root: Option<u32>,
    key: &K,
    comparator: &C,
) -> Option<u32>
where
    N: KvNode<K, V>,
    C: Fn(&K, &K) -> i32,
{
    let root = root?;
    Some(splay_by(arena, root, |a, i| {
        comparator(key, a[i as usize].key())
    }))
}

/// Insert `n` (whose key must be absent). Splays toward the key first;
/// the splay isolates the split point, so the new node just takes the old
/// root's two halves as children, with no further rotation.
pub fn insert<K, V, N, C>(
    arena: &mut Vec<N>,
    root: Option<u32>,
    n: u32,
    comparator: &C,
) -> Option<u32>
where
    N: KvNode<K, V>,
    C: Fn(&K, &K) -> i32,
{
    let Some(root) = root else {
        return Some(n);
    };

    let top = splay_by(arena, root, |a, i| {
        comparator(a[n as usize].key(), a[i as usize].key())
    });
    let cmp = comparator(arena[n as usize].key(), arena[top as usize].key());
    if cmp < 0 {
        let tl = left(arena, top);
        set_left(arena, n, tl);
        if let Some(tl) = tl {
            set_parent(arena, tl, Some(n));
        }
        set_left(arena, top, None);
        set_right(arena, n, Some(top));
        set_parent(arena, top, Some(n));
    } else {
        let tr = right(arena, top);
        set_right(arena, n, tr);
        if let Some(tr) = tr {
            set_parent(arena, tr, Some(n));
        }
        set_right(arena, top, None);
        set_left(arena, n, Some(top));
        set_parent(arena, top, Some(n));
    }
    set_parent(arena, n, None);
    Some(n)
}

/// Remove `n`: splay it to the root, detach it, then merge the halves by
/// splaying the left subtree's maximum to its own root and hanging the
/// right subtree there.
pub fn remove<K, V, N, C>(
    arena: &mut Vec<N>,
    root: Option<u32>,
    n: u32,
    comparator: &C,
) -> Option<u32>
where
    N: KvNode<K, V>,
    C: Fn(&K, &K) -> i32,
{
    let root = root?;
    let top = splay_by(arena, root, |a, i| {
        comparator(a[n as usize].key(), a[i as usize].key())
    });
    debug_assert_eq!(top, n, "splaying a resident key lands on its node");

    let l = left(arena, n);
    let r = right(arena, n);
    set_parent(arena, n, None);
    set_left(arena, n, None);
    set_right(arena, n, None);

    match (l, r) {
        (None, None) => None,
        (None, Some(r)) => {
            set_parent(arena, r, None);
            Some(r)
        }
        (Some(l), None) => {
            set_parent(arena, l, None);
            Some(l)
        }
        (Some(l), Some(r)) => {
            set_parent(arena, l, None);
            // Every key on the left is below n's key, so splaying toward
            // it lands on the left subtree's maximum, which then has no
            // right child.
            let lm = splay_by(arena, l, |a, i| {
                comparator(a[n as usize].key(), a[i as usize].key())
            });
            set_right(arena, lm, Some(r));
            set_parent(arena, r, Some(lm));
            Some(lm)
        }
    }
}
