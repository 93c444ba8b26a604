//! Red-black tree engine.

pub mod types;
pub mod util;

pub use types::{RbNode, RbNodeLike};
pub use util::{assert_red_black_tree, black_height, print};

use crate::tree::TreeOps;

pub struct RbOps;

impl<K, V> TreeOps<K, V, RbNode<K, V>> for RbOps {
    fn new_node(key: K, value: V) -> RbNode<K, V> {
        RbNode::new(key, value)
    }

    fn insert<C: Fn(&K, &K) -> i32>(
        arena: &mut Vec<RbNode<K, V>>,
        root: Option<u32>,
        node: u32,
        comparator: &C,
    ) -> Option<u32> {
        util::insert(arena, root, node, comparator)
    }

    fn remove<C: Fn(&K, &K) -> i32>(
        arena: &mut Vec<RbNode<K, V>>,
        root: Option<u32>,
        node: u32,
        _comparator: &C,
    ) -> Option<u32> {
        util::remove(arena, root, node)
    }

    fn finalize_build(arena: &mut [RbNode<K, V>], root: Option<u32>) {
        util::fix_colors(arena, root);
    }

    fn validate<C: Fn(&K, &K) -> i32>(
        arena: &[RbNode<K, V>],
        root: Option<u32>,
        comparator: &C,
    ) -> Result<(), String> {
        util::assert_red_black_tree(arena, root, comparator)
    }
}
