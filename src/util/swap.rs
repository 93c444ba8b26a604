//! Successor substitution for two-child deletion.

use crate::types::Node;

use super::{left, parent, right, set_left, set_parent, set_right};

/// Exchanges the tree positions of `x` and its in-order successor `y`,
/// leaving keys and values in their slots. Callers pick `y` as the
/// leftmost node of `x`'s right subtree, so `y` never has a left child
/// and the exchange collapses to two cases: `y` is `x`'s right child,
/// or `y` sits deeper on that subtree's left spine. Returns the root,
/// which changes only when `x` was the root.
///
/// Afterwards `x` occupies `y`'s old position with at most one (right)
/// child, ready to be spliced out.
pub fn swap_with_successor<N: Node>(arena: &mut [N], root: u32, x: u32, y: u32) -> u32 {
    debug_assert_eq!(left(arena, y), None, "successor has a left child");

    let xp = parent(arena, x);
    let xl = left(arena, x).expect("substituted node has two children");
    let xr = right(arena, x).expect("substituted node has two children");
    let yr = right(arena, y);

    // x's left subtree follows y unconditionally; y had no left child,
    // so x ends up without one.
    set_left(arena, y, Some(xl));
    set_parent(arena, xl, Some(y));
    set_left(arena, x, None);

    // x inherits y's right subtree, if any.
    set_right(arena, x, yr);
    if let Some(yr) = yr {
        set_parent(arena, yr, Some(x));
    }

    if xr == y {
        // Adjacent: y hangs x directly as its right child.
        set_right(arena, y, Some(x));
        set_parent(arena, x, Some(y));
    } else {
        // y was a left child somewhere down x's right subtree.
        let yp = parent(arena, y).expect("deep successor has a parent");
        set_left(arena, yp, Some(x));
        set_parent(arena, x, Some(yp));
        set_right(arena, y, Some(xr));
        set_parent(arena, xr, Some(y));
    }

    set_parent(arena, y, xp);
    match xp {
        Some(xp) => {
            if left(arena, xp) == Some(x) {
                set_left(arena, xp, Some(y));
            } else {
                set_right(arena, xp, Some(y));
            }
            root
        }
        None => y,
    }
}
