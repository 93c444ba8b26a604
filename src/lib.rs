//! Ordered associative containers over arena-backed binary search trees.
//!
//! One generic container, [`Tree`], runs on four interchangeable
//! engines that differ only in how they keep the tree shallow:
//!
//! - [`BinaryTree`] — plain BST, no rebalancing (the baseline).
//! - [`AvlTree`] — height-balanced, sibling heights differ by at most 1.
//! - [`RbTree`] — red-black, equal black counts on every root-leaf path.
//! - [`SplayTree`] — self-adjusting, accessed keys rotate to the root.
//!
//! Instead of raw pointers, all links are `Option<u32>` indices into a
//! dense `Vec<N>` arena owned by the tree; `None` is the NIL sentinel.
//! Ordering comes from a three-way comparator (`Fn(&K, &K) -> i32`), and
//! a key projection lets trees act as sets over keyed payloads. On top of
//! navigation (min/max, successor/predecessor, floor/ceiling, in-order
//! iteration) the containers carry set algebra: union, intersection,
//! difference, symmetric difference, and subset comparison, all as a
//! single merged walk per operation.
//!
//! ```
//! use ordered_forest::AvlTree;
//!
//! let mut tree: AvlTree<i32, i32> = AvlTree::new();
//! for v in [5, 3, 8, 1, 4, 7, 9] {
//!     tree.add(v);
//! }
//! assert_eq!(tree.height(), 2);
//! assert!(tree.contains(&4));
//!
//! let (min, _) = tree.popmin().unwrap();
//! assert_eq!(min, 1);
//!
//! let other = AvlTree::from_iter([4, 5, 100]);
//! let both = tree.intersection(&other);
//! let keys: Vec<i32> = both.iter().map(|(k, _)| *k).collect();
//! assert_eq!(keys, [4, 5]);
//! ```

pub mod avl;
pub mod binary;
pub mod error;
pub mod red_black;
pub mod splay;
pub mod tree;
pub mod types;
pub mod util;

pub use avl::{AvlNode, AvlNodeLike, AvlOps};
pub use binary::{BinaryNode, BinaryOps};
pub use error::TreeError;
pub use red_black::{RbNode, RbNodeLike, RbOps};
pub use splay::{SplayNode, SplayOps};
pub use tree::{default_comparator, Tree, TreeOps};
pub use types::{KvNode, Node};

/// Unbalanced binary search tree.
pub type BinaryTree<K, V, C = fn(&K, &K) -> i32, P = fn(&V) -> K> =
    Tree<K, V, BinaryNode<K, V>, BinaryOps, C, P>;

/// Height-balanced AVL tree.
pub type AvlTree<K, V, C = fn(&K, &K) -> i32, P = fn(&V) -> K> =
    Tree<K, V, AvlNode<K, V>, AvlOps, C, P>;

/// Red-black tree.
pub type RbTree<K, V, C = fn(&K, &K) -> i32, P = fn(&V) -> K> =
    Tree<K, V, RbNode<K, V>, RbOps, C, P>;

/// Self-adjusting splay tree.
pub type SplayTree<K, V, C = fn(&K, &K) -> i32, P = fn(&V) -> K> =
    Tree<K, V, SplayNode<K, V>, SplayOps, C, P>;
