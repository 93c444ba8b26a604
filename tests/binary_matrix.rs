use ordered_forest::BinaryTree;

#[test]
fn binary_smoke_matrix() {
    let mut tree = BinaryTree::<i32, i32>::new();
    for v in [50, 30, 80, 10, 40, 70, 90] {
        tree.add(v);
        tree.assert_valid().unwrap();
    }
    assert_eq!(tree.len(), 7);
    assert!(tree.contains(&70));
    assert!(!tree.contains(&71));

    let keys: Vec<i32> = tree.iter().map(|(k, _)| *k).collect();
    assert_eq!(keys, vec![10, 30, 40, 50, 70, 80, 90]);
}

#[test]
fn binary_degenerates_on_sorted_input_matrix() {
    let mut tree = BinaryTree::<i32, i32>::new();
    for i in 0..50 {
        tree.add(i);
    }
    // no rebalancing: sorted input produces a right spine
    assert_eq!(tree.height(), 49);
    tree.assert_valid().unwrap();

    let keys: Vec<i32> = tree.iter().map(|(k, _)| *k).collect();
    assert_eq!(keys, (0..50).collect::<Vec<_>>());
}

#[test]
fn binary_remove_grafts_predecessor_matrix() {
    // two-child removal replaces the node with its in-order predecessor
    let mut tree = BinaryTree::<i32, i32>::new();
    for v in [50, 30, 80, 10, 40, 70, 90, 35, 45] {
        tree.add(v);
    }

    let (k, _) = tree.remove(&50).unwrap();
    assert_eq!(k, 50);
    tree.assert_valid().unwrap();

    let root = tree.root_index().unwrap();
    assert_eq!(*tree.key(root), 45);

    let keys: Vec<i32> = tree.iter().map(|(k, _)| *k).collect();
    assert_eq!(keys, vec![10, 30, 35, 40, 45, 70, 80, 90]);
}

#[test]
fn binary_remove_leaf_and_single_child_matrix() {
    let mut tree = BinaryTree::<i32, i32>::new();
    for v in [50, 30, 80, 10, 70] {
        tree.add(v);
    }

    assert!(tree.discard(&10)); // leaf
    tree.assert_valid().unwrap();
    assert!(tree.discard(&80)); // single (left) child
    tree.assert_valid().unwrap();
    assert!(!tree.discard(&80));

    let keys: Vec<i32> = tree.iter().map(|(k, _)| *k).collect();
    assert_eq!(keys, vec![30, 50, 70]);
}

#[test]
fn binary_remove_root_until_empty_matrix() {
    let mut tree = BinaryTree::<i32, i32>::new();
    for v in [50, 30, 80, 10, 40, 70, 90] {
        tree.add(v);
    }
    while let Some(root) = tree.root_index() {
        let k = *tree.key(root);
        tree.remove(&k).unwrap();
        tree.assert_valid().unwrap();
    }
    assert!(tree.is_empty());
}
