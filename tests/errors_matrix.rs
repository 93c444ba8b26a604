use ordered_forest::{AvlTree, BinaryTree, RbTree, SplayTree, TreeError};

macro_rules! error_tests {
    ($name:ident, $tree:ident) => {
        mod $name {
            use super::*;

            #[test]
            fn empty_collection_errors() {
                let mut tree = $tree::<i32, i32>::new();
                assert_eq!(tree.min(), Err(TreeError::EmptyCollection));
                assert_eq!(tree.max(), Err(TreeError::EmptyCollection));
                assert_eq!(tree.pop().unwrap_err(), TreeError::EmptyCollection);
                assert_eq!(tree.popmin().unwrap_err(), TreeError::EmptyCollection);
                assert_eq!(tree.popmax().unwrap_err(), TreeError::EmptyCollection);
            }

            #[test]
            fn key_not_found_on_remove() {
                let mut tree = $tree::<i32, i32>::new();
                tree.add(1);
                assert_eq!(tree.remove(&2).unwrap_err(), TreeError::KeyNotFound);
                // a failed remove must not disturb the tree
                assert_eq!(tree.len(), 1);
                assert!(tree.contains(&1));
            }

            #[test]
            fn neighbor_errors() {
                let mut tree = $tree::<i32, i32>::new();
                tree.add(1);
                tree.add(2);

                let max = tree.max().unwrap();
                assert_eq!(tree.successor(max), Err(TreeError::KeyNotFound));
                let min = tree.min().unwrap();
                assert_eq!(tree.predecessor(min), Err(TreeError::KeyNotFound));

                // out-of-range index is reported as invalid, not missing
                assert_eq!(tree.successor(99), Err(TreeError::InvalidNode));
                assert_eq!(tree.predecessor(99), Err(TreeError::InvalidNode));
            }

            #[test]
            fn errors_after_drain() {
                let mut tree = $tree::<i32, i32>::new();
                for v in 0..8 {
                    tree.add(v);
                }
                while tree.popmin().is_ok() {}
                assert_eq!(tree.min(), Err(TreeError::EmptyCollection));
                assert_eq!(tree.pop().unwrap_err(), TreeError::EmptyCollection);
            }
        }
    };
}

error_tests!(binary, BinaryTree);
error_tests!(avl, AvlTree);
error_tests!(red_black, RbTree);
error_tests!(splay, SplayTree);

#[test]
fn error_messages() {
    assert_eq!(
        TreeError::EmptyCollection.to_string(),
        "operation requires a non-empty tree"
    );
    assert_eq!(TreeError::KeyNotFound.to_string(), "key not found in tree");
    assert_eq!(
        TreeError::InvalidNode.to_string(),
        "node does not belong to this tree"
    );
}
