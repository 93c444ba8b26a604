//! Splay (self-adjusting) tree engine.

pub mod types;
pub mod util;

pub use types::SplayNode;
pub use util::splay;

use crate::tree::TreeOps;
use crate::types::KvNode;
use crate::util::assert_bst;

pub struct SplayOps;

impl<K, V> TreeOps<K, V, SplayNode<K, V>> for SplayOps {
    fn new_node(key: K, value: V) -> SplayNode<K, V> {
        SplayNode::new(key, value)
    }

    fn insert<C: Fn(&K, &K) -> i32>(
        arena: &mut Vec<SplayNode<K, V>>,
        root: Option<u32>,
        node: u32,
        comparator: &C,
    ) -> Option<u32> {
        util::insert(arena, root, node, comparator)
    }

    fn remove<C: Fn(&K, &K) -> i32>(
        arena: &mut Vec<SplayNode<K, V>>,
        root: Option<u32>,
        node: u32,
        comparator: &C,
    ) -> Option<u32> {
        util::remove(arena, root, node, comparator)
    }

    fn access<C: Fn(&K, &K) -> i32>(
        arena: &mut Vec<SplayNode<K, V>>,
        root: Option<u32>,
        key: &K,
        comparator: &C,
    ) -> (Option<u32>, Option<u32>) {
        let root = util::splay(arena, root, key, comparator);
        let found = root.filter(|&i| comparator(key, arena[i as usize].key()) == 0);
        (root, found)
    }

    fn validate<C: Fn(&K, &K) -> i32>(
        arena: &[SplayNode<K, V>],
        root: Option<u32>,
        comparator: &C,
    ) -> Result<(), String> {
        assert_bst(arena, root, |n| n.key(), |a, b| comparator(a, b))
    }
}
