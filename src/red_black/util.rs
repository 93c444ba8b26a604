//! Color-balanced engine.
//!
//! Insert attaches red and resolves red-red violations walking upward:
//! red uncle recolors and continues from the grandparent, black uncle
//! rotates (inner rotation first when the new node sits inside the path)
//! and terminates. Delete records the color spliced out of the structure;
//! losing a black creates a double-black deficiency resolved by the four
//! sibling-case transformations, mirrored for both orientations.

use std::fmt::Debug;

use crate::util::{first, left, next, parent, right, set_left, set_parent, set_right, swap_with_successor};

use super::types::RbNodeLike;

#[inline]
fn is_black<K, V, N>(arena: &[N], i: u32) -> bool
where
    N: RbNodeLike<K, V>,
{
    arena[i as usize].is_black()
}

#[inline]
fn black_or_nil<K, V, N>(arena: &[N], i: Option<u32>) -> bool
where
    N: RbNodeLike<K, V>,
{
    i.map_or(true, |i| arena[i as usize].is_black())
}

#[inline]
fn set_black<K, V, N>(arena: &mut [N], i: u32, v: bool)
where
    N: RbNodeLike<K, V>,
{
    arena[i as usize].set_black(v);
}

/// Rotates left around `n`, returning the promoted node.
fn rotate_left<K, V, N>(arena: &mut [N], n: u32) -> u32
where
    N: RbNodeLike<K, V>,
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
    r
}

/// Mirror of [`rotate_left`].
fn rotate_right<K, V, N>(arena: &mut [N], n: u32) -> u32
where
    N: RbNodeLike<K, V>,
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
    l
}

/// Insert `n` (constructed red) and restore the color invariants.
/// Returns the new root, forced black regardless of the path taken.
pub fn insert<K, V, N, C>(
    arena: &mut Vec<N>,
    root: Option<u32>,
    n: u32,
    comparator: &C,
) -> Option<u32>
where
    N: RbNodeLike<K, V>,
    C: Fn(&K, &K) -> i32,
{
    let Some(mut curr) = root else {
        set_black(arena, n, true);
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

    let mut x = n;
    loop {
        let Some(p) = parent(arena, x) else {
            break;
        };
        if is_black(arena, p) {
            break;
        }
        let g = parent(arena, p).expect("red parent is not the root");
        let p_left = left(arena, g) == Some(p);
        let uncle = if p_left {
            right(arena, g)
        } else {
            left(arena, g)
        };

        if !black_or_nil(arena, uncle) {
            let u = uncle.expect("red uncle exists");
            set_black(arena, p, true);
            set_black(arena, u, true);
            set_black(arena, g, false);
            x = g;
            continue;
        }

        // Black uncle: inner rotation first when x is inside the path,
        // then the outer rotation at the grandparent.
        if p_left {
            let top = if right(arena, p) == Some(x) {
                rotate_left(arena, p)
            } else {
                p
            };
            set_black(arena, top, true);
            set_black(arena, g, false);
            rotate_right(arena, g);
        } else {
            let top = if left(arena, p) == Some(x) {
                rotate_right(arena, p)
            } else {
                p
            };
            set_black(arena, top, true);
            set_black(arena, g, false);
            rotate_left(arena, g);
        }
        break;
    }

    let mut r = n;
    while let Some(p) = parent(arena, r) {
        r = p;
    }
    set_black(arena, r, true);
    Some(r)
}

/// Remove `n` and restore the color invariants. Returns the new root.
pub fn remove<K, V, N>(arena: &mut Vec<N>, root: Option<u32>, n: u32) -> Option<u32>
where
    N: RbNodeLike<K, V>,
{
    let mut root = root;

    if left(arena, n).is_some() && right(arena, n).is_some() {
        let mut s = right(arena, n).expect("two-child node has right child");
        while let Some(sl) = left(arena, s) {
            s = sl;
        }
        // Colors belong to positions, not entries.
        let (nb, sb) = (is_black(arena, n), is_black(arena, s));
        set_black(arena, n, sb);
        set_black(arena, s, nb);
        let ri = root.expect("two-child node implies non-empty tree");
        root = Some(swap_with_successor(arena, ri, n, s));
    }

    // n now has at most one child; the color removed from the structure
    // is n's current color.
    let p = parent(arena, n);
    let c = left(arena, n).or(right(arena, n));

    if let Some(c) = c {
        set_parent(arena, c, p);
        match p {
            Some(p) => {
                if left(arena, p) == Some(n) {
                    set_left(arena, p, Some(c));
                } else {
                    set_right(arena, p, Some(c));
                }
            }
            None => root = Some(c),
        }
        if is_black(arena, n) {
            if !is_black(arena, c) {
                set_black(arena, c, true);
            } else {
                root = fix_double_black(arena, root, c);
            }
        }
    } else {
        match p {
            Some(_) => {
                // Leaf removal: resolve the deficiency with n still linked
                // as the placeholder, then unlink it.
                if is_black(arena, n) {
                    root = fix_double_black(arena, root, n);
                }
                let p = parent(arena, n).expect("leaf keeps its parent through fixup");
                if left(arena, p) == Some(n) {
                    set_left(arena, p, None);
                } else {
                    set_right(arena, p, None);
                }
            }
            None => root = None,
        }
    }

    set_parent(arena, n, None);
    set_left(arena, n, None);
    set_right(arena, n, None);

    if let Some(rt) = root {
        set_black(arena, rt, true);
    }
    root
}

/// Resolves a one-black deficiency rooted at `x`, examining the sibling's
/// color and the sibling's children: recolor-and-continue-upward, or
/// rotate-and-terminate, mirrored for both orientations.
fn fix_double_black<K, V, N>(arena: &mut Vec<N>, mut root: Option<u32>, mut x: u32) -> Option<u32>
where
    N: RbNodeLike<K, V>,
{
    loop {
        if !is_black(arena, x) {
            // A red node absorbs the extra black.
            set_black(arena, x, true);
            return root;
        }
        let Some(p) = parent(arena, x) else {
            // The deficiency reached the root and vanishes.
            return root;
        };
        let x_left = left(arena, p) == Some(x);

        let mut w = if x_left {
            right(arena, p)
        } else {
            left(arena, p)
        }
        .expect("double-black node has a sibling");

        if !is_black(arena, w) {
            // Red sibling: rotate it over the parent to expose a black one.
            set_black(arena, w, true);
            set_black(arena, p, false);
            let top = if x_left {
                rotate_left(arena, p)
            } else {
                rotate_right(arena, p)
            };
            if parent(arena, top).is_none() {
                root = Some(top);
            }
            w = if x_left {
                right(arena, p)
            } else {
                left(arena, p)
            }
            .expect("sibling exists after rotation");
        }

        let wl = left(arena, w);
        let wr = right(arena, w);
        if black_or_nil(arena, wl) && black_or_nil(arena, wr) {
            // Both nephews black: push the deficiency to the parent.
            set_black(arena, w, false);
            x = p;
            continue;
        }

        if x_left {
            let w = if black_or_nil(arena, wr) {
                // Near nephew red: rotate it over the sibling.
                let wl = wl.expect("near nephew is red");
                set_black(arena, wl, true);
                set_black(arena, w, false);
                rotate_right(arena, w)
            } else {
                w
            };
            let pb = is_black(arena, p);
            set_black(arena, w, pb);
            set_black(arena, p, true);
            let far = right(arena, w).expect("far nephew is red");
            set_black(arena, far, true);
            let top = rotate_left(arena, p);
            if parent(arena, top).is_none() {
                root = Some(top);
            }
        } else {
            let w = if black_or_nil(arena, wl) {
                let wr = wr.expect("near nephew is red");
                set_black(arena, wr, true);
                set_black(arena, w, false);
                rotate_left(arena, w)
            } else {
                w
            };
            let pb = is_black(arena, p);
            set_black(arena, w, pb);
            set_black(arena, p, true);
            let far = left(arena, w).expect("far nephew is red");
            set_black(arena, far, true);
            let top = rotate_right(arena, p);
            if parent(arena, top).is_none() {
                root = Some(top);
            }
        }
        return root;
    }
}

/// Recolors a bulk-built tree: the deepest level red, everything else
/// black, which keeps the black count equal on every root-to-NIL path.
pub fn fix_colors<K, V, N>(arena: &mut [N], root: Option<u32>)
where
    N: RbNodeLike<K, V>,
{
    fn height<K, V, N>(arena: &[N], node: Option<u32>) -> i32
    where
        N: RbNodeLike<K, V>,
    {
        match node {
            None => -1,
            Some(i) => {
                1 + height(arena, left(arena, i)).max(height(arena, right(arena, i)))
            }
        }
    }

    fn paint<K, V, N>(arena: &mut [N], node: Option<u32>, depth: i32, red_depth: i32)
    where
        N: RbNodeLike<K, V>,
    {
        let Some(i) = node else {
            return;
        };
        set_black(arena, i, depth != red_depth);
        paint(arena, left(arena, i), depth + 1, red_depth);
        paint(arena, right(arena, i), depth + 1, red_depth);
    }

    let h = height(arena, root);
    let red_depth = if h > 0 { h } else { -1 };
    paint(arena, root, 0, red_depth);
}

/// Black-node count on every root-to-NIL path, or an error when the count
/// differs between paths or another color invariant is broken.
pub fn black_height<K, V, N>(arena: &[N], node: Option<u32>) -> Result<usize, String>
where
    N: RbNodeLike<K, V>,
{
    let Some(node) = node else {
        return Ok(0);
    };

    let l = left(arena, node);
    let r = right(arena, node);

    if let Some(li) = l {
        if parent(arena, li) != Some(node) {
            return Err("Broken parent link on left child".to_string());
        }
    }
    if let Some(ri) = r {
        if parent(arena, ri) != Some(node) {
            return Err("Broken parent link on right child".to_string());
        }
    }

    if !is_black(arena, node) {
        if !black_or_nil(arena, l) {
            return Err("Red node has red left child".to_string());
        }
        if !black_or_nil(arena, r) {
            return Err("Red node has red right child".to_string());
        }
    }

    let lh = black_height(arena, l)?;
    let rh = black_height(arena, r)?;
    if lh != rh {
        return Err("Black height mismatch".to_string());
    }

    Ok(lh + usize::from(is_black(arena, node)))
}

pub fn assert_red_black_tree<K, V, N, C>(
    arena: &[N],
    root: Option<u32>,
    comparator: &C,
) -> Result<(), String>
where
    N: RbNodeLike<K, V>,
    C: Fn(&K, &K) -> i32,
{
    let Some(root) = root else {
        return Ok(());
    };

    if parent(arena, root).is_some() {
        return Err("Root has parent".to_string());
    }
    if !is_black(arena, root) {
        return Err("Root is not black".to_string());
    }

    black_height(arena, Some(root))?;

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

/// Debug printer for red-black trees.
pub fn print<K, V, N>(arena: &[N], node: Option<u32>, tab: &str) -> String
where
    K: Debug,
    V: Debug,
    N: RbNodeLike<K, V>,
{
    match node {
        None => "∅".to_string(),
        Some(i) => {
            let n = &arena[i as usize];
            let left = print::<K, V, N>(arena, n.l(), &format!("{tab}  "));
            let right = print::<K, V, N>(arena, n.r(), &format!("{tab}  "));
            let color = if n.is_black() { "B" } else { "R" };
            format!(
                "Node[{i}] [{color}] {{ {:?} = {:?} }}\n{tab}L={left}\n{tab}R={right}",
                n.key(),
                n.value()
            )
        }
    }
}
