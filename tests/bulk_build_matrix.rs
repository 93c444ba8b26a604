//! Bulk (balanced-by-construction) builds and key-projected payloads.

use ordered_forest::{AvlTree, BinaryTree, RbTree, SplayTree};

macro_rules! bulk_build_tests {
    ($name:ident, $tree:ident) => {
        mod $name {
            use super::*;

            #[test]
            fn seven_values_build_to_height_two() {
                let tree = $tree::<i32, i32>::from_iter([9, 5, 1, 7, 3, 8, 4]);
                tree.assert_valid().unwrap();
                assert_eq!(tree.len(), 7);
                assert_eq!(tree.height(), 2);

                let keys: Vec<i32> = tree.iter().map(|(k, _)| *k).collect();
                assert_eq!(keys, vec![1, 3, 4, 5, 7, 8, 9]);
                assert_eq!(*tree.key(tree.min().unwrap()), 1);
                assert_eq!(*tree.key(tree.max().unwrap()), 9);
            }

            #[test]
            fn duplicates_keep_first_occurrence() {
                let tree = $tree::<i32, i32>::from_iter([3, 1, 3, 2, 1, 3]);
                tree.assert_valid().unwrap();
                assert_eq!(tree.len(), 3);
                let keys: Vec<i32> = tree.iter().map(|(k, _)| *k).collect();
                assert_eq!(keys, vec![1, 2, 3]);
            }

            #[test]
            fn empty_and_single_builds() {
                let empty = $tree::<i32, i32>::from_iter([]);
                assert!(empty.is_empty());
                assert_eq!(empty.height(), -1);
                empty.assert_valid().unwrap();

                let one = $tree::<i32, i32>::from_iter([42]);
                assert_eq!(one.len(), 1);
                assert_eq!(one.height(), 0);
                one.assert_valid().unwrap();
            }

            #[test]
            fn large_build_is_logarithmic() {
                let tree = $tree::<i32, i32>::from_iter(0..4095);
                tree.assert_valid().unwrap();
                assert_eq!(tree.height(), 11);
            }

            #[test]
            fn built_tree_accepts_mutation() {
                let mut tree = $tree::<i32, i32>::from_iter(0..100);
                for k in (0..100).step_by(7) {
                    assert!(tree.discard(&k));
                    tree.assert_valid().unwrap();
                }
                tree.add(1000);
                tree.assert_valid().unwrap();
                assert_eq!(*tree.key(tree.max().unwrap()), 1000);
            }
        }
    };
}

bulk_build_tests!(binary, BinaryTree);
bulk_build_tests!(avl, AvlTree);
bulk_build_tests!(red_black, RbTree);
bulk_build_tests!(splay, SplayTree);

#[derive(Debug, Clone, PartialEq)]
struct Event {
    at: u64,
    name: &'static str,
}

#[test]
fn keyed_payloads_project_their_key() {
    let mut tree = AvlTree::<u64, Event, _, _>::with_key(|e: &Event| e.at);
    tree.add(Event { at: 30, name: "c" });
    tree.add(Event { at: 10, name: "a" });
    tree.add(Event { at: 20, name: "b" });
    let (_, created) = tree.add(Event { at: 10, name: "dup" });
    assert!(!created);

    let names: Vec<&str> = tree.iter().map(|(_, e)| e.name).collect();
    assert_eq!(names, vec!["a", "b", "c"]);
    assert_eq!(tree.get(&20).map(|e| e.name), Some("b"));
    tree.assert_valid().unwrap();
}

#[test]
fn explicitly_keyed_map_needs_no_projection() {
    let mut tree = RbTree::<u64, Event>::map();
    tree.insert(30, Event { at: 30, name: "c" });
    tree.insert(10, Event { at: 10, name: "a" });
    tree.insert(20, Event { at: 20, name: "b" });
    let (_, created) = tree.insert(10, Event { at: 10, name: "dup" });
    assert!(!created);

    assert_eq!(tree.len(), 3);
    assert_eq!(tree.get(&10).map(|e| e.name), Some("a"));
    assert_eq!(tree.remove(&20).map(|(_, e)| e.name), Ok("b"));
    tree.assert_valid().unwrap();
}

#[test]
fn keyed_payloads_bulk_build() {
    let events = [
        Event { at: 5, name: "e" },
        Event { at: 1, name: "a" },
        Event { at: 3, name: "c" },
        Event { at: 1, name: "dup" },
    ];
    let mut tree = RbTree::<u64, Event, _, _>::from_iter_with_key(events, |e: &Event| e.at);
    tree.assert_valid().unwrap();
    assert_eq!(tree.len(), 3);
    assert_eq!(tree.get(&1).map(|e| e.name), Some("a"));

    let mut drained = Vec::new();
    while let Ok((k, _)) = tree.popmax() {
        drained.push(k);
    }
    assert_eq!(drained, vec![5, 3, 1]);
}
