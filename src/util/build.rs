//! Balanced-by-construction bulk build.
//!
//! Nodes are laid out in the arena in sorted key order; [`bisect`] then
//! wires links by recursive midpoint bisection, so arena index equals rank
//! and the result has height `ceil(log2(n + 1)) - 1`. The recursion depth
//! is O(log n) and is kept recursive rather than converted to an explicit
//! work stack.

use crate::types::Node;

use super::{set_left, set_parent, set_right};

/// Wires `arena[lo..hi]` (already sorted, unique by key) into a balanced
/// subtree hanging off `parent`. Returns the subtree root.
pub fn bisect<N: Node>(arena: &mut [N], lo: u32, hi: u32, parent: Option<u32>) -> Option<u32> {
    if lo >= hi {
        return None;
    }
    let mid = lo + (hi - lo) / 2;
    set_parent(arena, mid, parent);
    let l = bisect(arena, lo, mid, Some(mid));
    set_left(arena, mid, l);
    let r = bisect(arena, mid + 1, hi, Some(mid));
    set_right(arena, mid, r);
    Some(mid)
}
