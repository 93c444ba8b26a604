//! Height-balanced engine.
//!
//! The height field is denormalized and maintained incrementally: insert
//! retraces ancestors until the first unchanged height (no ancestor above
//! can be affected once a subtree height is stable) and restores balance
//! with at most one single or double rotation; deletion retraces all the
//! way up, rotating at every unbalanced ancestor it finds.

use std::fmt::Debug;

use crate::util::{first, left, next, parent, right, set_left, set_parent, set_right, swap_with_successor};

use super::types::AvlNodeLike;

#[inline]
fn h<K, V, N>(arena: &[N], i: Option<u32>) -> i32
where
    N: AvlNodeLike<K, V>,
{
    i.map_or(-1, |i| arena[i as usize].h())
}

#[inline]
fn set_h<K, V, N>(arena: &mut [N], i: u32, v: i32)
where
    N: AvlNodeLike<K, V>,
{
    arena[i as usize].set_h(v);
}

/// Recomputes the height of `i` from its children; true when it changed.
fn update_height<K, V, N>(arena: &mut [N], i: u32) -> bool
where
    N: AvlNodeLike<K, V>,
{
    let nh = 1 + h(arena, left(arena, i)).max(h(arena, right(arena, i)));
    if nh == arena[i as usize].h() {
        false
    } else {
        set_h(arena, i, nh);
        true
    }
}

#[inline]
fn balance<K, V, N>(arena: &[N], i: u32) -> i32
where
    N: AvlNodeLike<K, V>,
{
    h(arena, left(arena, i)) - h(arena, right(arena, i))
}

/// Rotates left around `n`, returning the promoted node. Heights are
/// recomputed bottom-up for the two nodes whose subtrees changed.
pub fn rotate_left<K, V, N>(arena: &mut [N], n: u32) -> u32
where
    N: AvlNodeLike<K, V>,
{
    let r = right(arena, n).expect("left rotation requires a right child");
    let rl = left(arena, r);
    let p = parent(arena, n);

    set_right(arena, n, rl);
    if let Some(rl) = rl {
        set_parent(arena, rl, Some(n));
    }
    set_left(arena, r, Some(n));
    set_parent(arena, n, Some(r));
    set_parent(arena, r, p);
    if let Some(p) = p {
        if left(arena, p) == Some(n) {
            set_left(arena, p, Some(r));
        } else {
            set_right(arena, p, Some(r));
        }
    }

    update_height(arena, n);
    update_height(arena, r);
    r
}

/// Mirror of [`rotate_left`].
pub fn rotate_right<K, V, N>(arena: &mut [N], n: u32) -> u32
where
    N: AvlNodeLike<K, V>,
{
    let l = left(arena, n).expect("right rotation requires a left child");
    let lr = right(arena, l);
    let p = parent(arena, n);

    set_left(arena, n, lr);
    if let Some(lr) = lr {
        set_parent(arena, lr, Some(n));
    }
    set_right(arena, l, Some(n));
    set_parent(arena, n, Some(l));
    set_parent(arena, l, p);
    if let Some(p) = p {
        if left(arena, p) == Some(n) {
            set_left(arena, p, Some(l));
        } else {
            set_right(arena, p, Some(l));
        }
    }

    update_height(arena, n);
    update_height(arena, l);
    l
}

/// Restores balance at `n` (`|bf| > 1`), orienting the single or double
/// rotation by the signs of `n`'s and its heavier child's balance factors.
/// Returns the subtree's new root.
fn rebalance<K, V, N>(arena: &mut [N], n: u32) -> u32
where
    N: AvlNodeLike<K, V>,
{
    if balance(arena, n) > 1 {
        let l = left(arena, n).expect("left-heavy node has left child");
        if balance(arena, l) < 0 {
            rotate_left(arena, l);
        }
        rotate_right(arena, n)
    } else {
        let r = right(arena, n).expect("right-heavy node has right child");
        if balance(arena, r) > 0 {
            rotate_right(arena, r);
        }
        rotate_left(arena, n)
    }
}

/// Insert `n` and rebalance. Returns the new root.
pub fn insert<K, V, N, C>(
    arena: &mut Vec<N>,
    root: Option<u32>,
    n: u32,
    comparator: &C,
) -> Option<u32>
where
    N: AvlNodeLike<K, V>,
    C: Fn(&K, &K) -> i32,
{
    let Some(mut curr) = root else {
        return Some(n);
    };

    loop {
        let cmp = comparator(arena[n as usize].key(), arena[curr as usize].key());
        let step = if cmp < 0 {
            left(arena, curr)
        } else {
            right(arena, curr)
        };
        match step {
            Some(nxt) => curr = nxt,
            None => {
                if cmp < 0 {
                    set_left(arena, curr, Some(n));
                } else {
                    set_right(arena, curr, Some(n));
                }
                set_parent(arena, n, Some(curr));
                break;
            }
        }
    }

    // Retrace: stop at the first ancestor whose height is unchanged; one
    // rotation is enough to absorb a single insertion.
    let mut at = parent(arena, n);
    while let Some(a) = at {
        if !update_height(arena, a) {
            return root;
        }
        if balance(arena, a).abs() > 1 {
            let top = rebalance(arena, a);
            return if parent(arena, top).is_some() {
                root
            } else {
                Some(top)
            };
        }
        at = parent(arena, a);
    }
    root
}

/// Remove `n` and rebalance. Returns the new root.
///
/// The two-child case moves the in-order successor into `n`'s position,
/// then splices `n` out at the successor's old spot.
pub fn remove<K, V, N>(arena: &mut Vec<N>, root: Option<u32>, n: u32) -> Option<u32>
where
    N: AvlNodeLike<K, V>,
{
    let mut root = root;

    if left(arena, n).is_some() && right(arena, n).is_some() {
        let mut s = right(arena, n).expect("two-child node has right child");
        while let Some(sl) = left(arena, s) {
            s = sl;
        }
        // Heights belong to positions, not entries.
        let (hn, hs) = (arena[n as usize].h(), arena[s as usize].h());
        set_h(arena, n, hs);
        set_h(arena, s, hn);
        let ri = root.expect("two-child node implies non-empty tree");
        root = Some(swap_with_successor(arena, ri, n, s));
    }

    let p = parent(arena, n);
    let c = left(arena, n).or(right(arena, n));
    if let Some(c) = c {
        set_parent(arena, c, p);
    }
    match p {
        Some(p) => {
            if left(arena, p) == Some(n) {
                set_left(arena, p, c);
            } else {
                set_right(arena, p, c);
            }
        }
        None => root = c,
    }
    set_parent(arena, n, None);
    set_left(arena, n, None);
    set_right(arena, n, None);

    retrace_delete(arena, p, root)
}

/// Walks from `at` to the root, recomputing heights and rotating at every
/// ancestor found unbalanced. Deletion, unlike insertion, can demand
/// rotations at several levels.
fn retrace_delete<K, V, N>(arena: &mut Vec<N>, mut at: Option<u32>, mut root: Option<u32>) -> Option<u32>
where
    N: AvlNodeLike<K, V>,
{
    while let Some(a) = at {
        update_height(arena, a);
        let top = if balance(arena, a).abs() > 1 {
            rebalance(arena, a)
        } else {
            a
        };
        if parent(arena, top).is_none() {
            root = Some(top);
        }
        at = parent(arena, top);
    }
    root
}

/// Recomputes every height under `root` after a bulk build.
pub fn fix_heights<K, V, N>(arena: &mut [N], root: Option<u32>) -> i32
where
    N: AvlNodeLike<K, V>,
{
    let Some(i) = root else {
        return -1;
    };
    let lh = fix_heights(arena, left(arena, i));
    let rh = fix_heights(arena, right(arena, i));
    let nh = 1 + lh.max(rh);
    set_h(arena, i, nh);
    nh
}

pub fn assert_avl_tree<K, V, N, C>(
    arena: &[N],
    root: Option<u32>,
    comparator: &C,
) -> Result<(), String>
where
    N: AvlNodeLike<K, V>,
    C: Fn(&K, &K) -> i32,
{
    let Some(root) = root else {
        return Ok(());
    };

    if parent(arena, root).is_some() {
        return Err("Root has parent".to_string());
    }

    fn validate<K, V, N>(arena: &[N], node: u32) -> Result<i32, String>
    where
        N: AvlNodeLike<K, V>,
    {
        let l = left(arena, node);
        let r = right(arena, node);

        if let Some(l) = l {
            if parent(arena, l) != Some(node) {
                return Err("Broken parent link on left child".to_string());
            }
        }
        if let Some(r) = r {
            if parent(arena, r) != Some(node) {
                return Err("Broken parent link on right child".to_string());
            }
        }

        let lh = l.map_or(Ok(-1), |l| validate(arena, l))?;
        let rh = r.map_or(Ok(-1), |r| validate(arena, r))?;

        let expected = 1 + lh.max(rh);
        let actual = arena[node as usize].h();
        if actual != expected {
            return Err(format!("Height mismatch: expected {expected}, got {actual}"));
        }
        if !(-1..=1).contains(&(lh - rh)) {
            return Err("AVL balance violated".to_string());
        }
        Ok(actual)
    }
    validate(arena, root)?;

    let mut curr = first(arena, Some(root));
    let mut prev_node: Option<u32> = None;
    while let Some(i) = curr {
        if let Some(prev) = prev_node {
            let cmp = comparator(arena[prev as usize].key(), arena[i as usize].key());
            if cmp >= 0 {
                return Err("Node order violated".to_string());
            }
        }
        prev_node = Some(i);
        curr = next(arena, i);
    }

    Ok(())
}

/// Debug printer for AVL trees.
pub fn print<K, V, N>(arena: &[N], node: Option<u32>, tab: &str) -> String
where
    K: Debug,
    V: Debug,
    N: AvlNodeLike<K, V>,
{
    match node {
        None => "∅".to_string(),
        Some(i) => {
            let n = &arena[i as usize];
            let left = print::<K, V, N>(arena, n.l(), &format!("{tab}  "));
            let right = print::<K, V, N>(arena, n.r(), &format!("{tab}  "));
            format!(
                "Node[{i}] [h={}] {{ {:?} = {:?} }}\n{tab}L={left}\n{tab}R={right}",
                n.h(),
                n.key(),
                n.value()
            )
        }
    }
}
