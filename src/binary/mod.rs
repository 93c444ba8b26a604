//! Plain (unbalanced) binary search tree engine.

pub mod types;
pub mod util;

pub use types::BinaryNode;

use crate::tree::TreeOps;
use crate::util::assert_bst;

pub struct BinaryOps;

impl<K, V> TreeOps<K, V, BinaryNode<K, V>> for BinaryOps {
    fn new_node(key: K, value: V) -> BinaryNode<K, V> {
        BinaryNode::new(key, value)
    }

    fn insert<C: Fn(&K, &K) -> i32>(
        arena: &mut Vec<BinaryNode<K, V>>,
        root: Option<u32>,
        node: u32,
        comparator: &C,
    ) -> Option<u32> {
        util::insert(arena, root, node, comparator)
    }

    fn remove<C: Fn(&K, &K) -> i32>(
        arena: &mut Vec<BinaryNode<K, V>>,
        root: Option<u32>,
        node: u32,
        _comparator: &C,
    ) -> Option<u32> {
        util::remove(arena, root, node)
    }

    fn validate<C: Fn(&K, &K) -> i32>(
        arena: &[BinaryNode<K, V>],
        root: Option<u32>,
        comparator: &C,
    ) -> Result<(), String> {
        assert_bst(arena, root, |n| &n.k, |a, b| comparator(a, b))
    }
}
