use ordered_forest::AvlTree;

#[test]
fn avl_smoke_matrix() {
    let mut tree = AvlTree::<f64, f64>::new();
    for v in [1.0, 3.0, 4.0, 4.1, 44.0] {
        tree.add(v);
    }
    let (_, created) = tree.add(3.0);
    assert!(!created);

    assert_eq!(tree.len(), 5);
    assert_eq!(tree.get(&44.0), Some(&44.0));

    let mut keys = Vec::new();
    tree.for_each(|_i, n| keys.push(n.k));
    assert_eq!(keys, vec![1.0, 3.0, 4.0, 4.1, 44.0]);
    tree.assert_valid().unwrap();
}

#[test]
fn avl_map_insert_does_not_overwrite_matrix() {
    let mut tree = AvlTree::<String, String>::new();
    let (i, created) = tree.insert("a".to_string(), "first".to_string());
    assert!(created);
    let (j, created) = tree.insert("a".to_string(), "second".to_string());
    assert!(!created);
    assert_eq!(i, j);
    assert_eq!(tree.get(&"a".to_string()), Some(&"first".to_string()));

    *tree.value_mut(j) = "second".to_string();
    assert_eq!(tree.get(&"a".to_string()), Some(&"second".to_string()));
}

#[test]
fn avl_iteration_matrix() {
    let mut tree = AvlTree::<String, String>::new();
    assert_eq!(tree.first(), None);

    for s in ["b", "a", "c"] {
        tree.add(s.to_string());
    }

    let mut list = Vec::new();
    let mut entry = tree.first();
    while let Some(i) = entry {
        list.push(tree.key(i).clone());
        entry = tree.successor(i).ok();
    }
    assert_eq!(list, vec!["a", "b", "c"]);

    let forward: Vec<String> = tree.iter().map(|(k, _)| k.clone()).collect();
    assert_eq!(forward, vec!["a", "b", "c"]);

    let backward: Vec<String> = tree.iter_rev().map(|(k, _)| k.clone()).collect();
    assert_eq!(backward, vec!["c", "b", "a"]);
}

#[test]
fn avl_seven_node_shape_matrix() {
    let mut tree = AvlTree::<i32, i32>::new();
    for v in [5, 3, 8, 1, 4, 7, 9] {
        tree.add(v);
        tree.assert_valid().unwrap();
    }
    assert_eq!(tree.len(), 7);
    assert_eq!(tree.height(), 2);

    let root = tree.root_index().unwrap();
    assert_eq!(*tree.key(root), 5);
}

#[test]
fn avl_ladder_insert_delete_matrix() {
    let mut tree = AvlTree::<i32, i32>::new();

    for i in 0..300 {
        tree.insert(i, i * 2);
        tree.assert_valid().unwrap();
    }
    assert_eq!(tree.len(), 300);
    // ladder insert is the AVL worst case; height stays logarithmic
    assert!(tree.height() <= 9);

    for i in (0..300).step_by(3) {
        assert!(tree.discard(&i));
        tree.assert_valid().unwrap();
    }
    assert_eq!(tree.len(), 200);

    for i in 0..300 {
        assert_eq!(tree.contains(&i), i % 3 != 0);
    }

    for i in 0..300 {
        tree.discard(&i);
        tree.assert_valid().unwrap();
    }
    assert!(tree.is_empty());
    assert_eq!(tree.height(), -1);
}

#[test]
fn avl_descending_insert_matrix() {
    let mut tree = AvlTree::<i32, i32>::new();
    for i in (0..100).rev() {
        tree.add(i);
        tree.assert_valid().unwrap();
    }
    let keys: Vec<i32> = tree.iter().map(|(k, _)| *k).collect();
    assert_eq!(keys, (0..100).collect::<Vec<_>>());
}

#[test]
fn avl_custom_comparator_matrix() {
    // reverse numeric order
    let mut tree = AvlTree::<i32, i32, _>::with_comparator(|a: &i32, b: &i32| {
        if a == b {
            0
        } else if a > b {
            -1
        } else {
            1
        }
    });
    for v in [1, 5, 3, 2, 4] {
        tree.add(v);
        tree.assert_valid().unwrap();
    }
    let keys: Vec<i32> = tree.iter().map(|(k, _)| *k).collect();
    assert_eq!(keys, vec![5, 4, 3, 2, 1]);
    assert_eq!(*tree.key(tree.min().unwrap()), 5);
    assert_eq!(*tree.key(tree.max().unwrap()), 1);
}
