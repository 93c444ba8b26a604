//! AVL (height-balanced) tree engine.

pub mod types;
pub mod util;

pub use types::{AvlNode, AvlNodeLike};
pub use util::{assert_avl_tree, print};

use crate::tree::TreeOps;

pub struct AvlOps;

impl<K, V> TreeOps<K, V, AvlNode<K, V>> for AvlOps {
    fn new_node(key: K, value: V) -> AvlNode<K, V> {
        AvlNode::new(key, value)
    }

    fn insert<C: Fn(&K, &K) -> i32>(
        arena: &mut Vec<AvlNode<K, V>>,
        root: Option<u32>,
        node: u32,
        comparator: &C,
    ) -> Option<u32> {
        util::insert(arena, root, node, comparator)
    }

    fn remove<C: Fn(&K, &K) -> i32>(
        arena: &mut Vec<AvlNode<K, V>>,
        root: Option<u32>,
        node: u32,
        _comparator: &C,
    ) -> Option<u32> {
        util::remove(arena, root, node)
    }

    fn finalize_build(arena: &mut [AvlNode<K, V>], root: Option<u32>) {
        util::fix_heights(arena, root);
    }

    fn validate<C: Fn(&K, &K) -> i32>(
        arena: &[AvlNode<K, V>],
        root: Option<u32>,
        comparator: &C,
    ) -> Result<(), String> {
        util::assert_avl_tree(arena, root, comparator)
    }
}
