use ordered_forest::red_black::black_height;
use ordered_forest::RbTree;

#[test]
fn red_black_smoke_matrix() {
    let mut tree = RbTree::<i32, i32>::new();
    for v in [41, 38, 31, 12, 19, 8] {
        tree.add(v);
        tree.assert_valid().unwrap();
    }
    assert_eq!(tree.len(), 6);

    let keys: Vec<i32> = tree.iter().map(|(k, _)| *k).collect();
    assert_eq!(keys, vec![8, 12, 19, 31, 38, 41]);

    let root = tree.root_index().unwrap();
    assert!(tree.node(root).black);
}

#[test]
fn red_black_delete_root_keeps_black_height_matrix() {
    let mut tree = RbTree::<i32, i32>::new();
    for v in [10, 5, 15, 3, 7, 12, 20] {
        tree.add(v);
        tree.assert_valid().unwrap();
    }

    let before = black_height(tree.arena(), tree.root_index()).unwrap();

    let (k, _) = tree.remove(&10).unwrap();
    assert_eq!(k, 10);
    tree.assert_valid().unwrap();

    let root = tree.root_index().unwrap();
    assert!(tree.node(root).black);
    let after = black_height(tree.arena(), tree.root_index()).unwrap();
    assert_eq!(after, before);
}

#[test]
fn red_black_ladder_insert_delete_matrix() {
    let mut tree = RbTree::<i32, i32>::new();

    for i in 0..300 {
        tree.insert(i, i);
        tree.assert_valid().unwrap();
    }
    assert_eq!(tree.len(), 300);
    // red-black height is at most 2 * log2(n + 1)
    assert!(tree.height() <= 17);

    for i in (0..300).step_by(2) {
        assert!(tree.discard(&i));
        tree.assert_valid().unwrap();
    }
    assert_eq!(tree.len(), 150);

    for i in 0..300 {
        assert_eq!(tree.contains(&i), i % 2 == 1);
    }

    for i in (1..300).step_by(2) {
        assert!(tree.discard(&i));
        tree.assert_valid().unwrap();
    }
    assert!(tree.is_empty());
}

#[test]
fn red_black_descending_and_interleaved_matrix() {
    let mut tree = RbTree::<i32, i32>::new();
    for i in (0..128).rev() {
        tree.add(i);
        tree.assert_valid().unwrap();
    }
    for i in (0..128).step_by(3) {
        tree.discard(&i);
        tree.assert_valid().unwrap();
    }
    for i in (0..128).step_by(3) {
        tree.add(i);
        tree.assert_valid().unwrap();
    }
    let keys: Vec<i32> = tree.iter().map(|(k, _)| *k).collect();
    assert_eq!(keys, (0..128).collect::<Vec<_>>());
}

#[test]
fn red_black_bulk_build_coloring_matrix() {
    let tree = RbTree::<i32, i32>::from_iter(0..1000);
    tree.assert_valid().unwrap();
    assert_eq!(tree.len(), 1000);
    assert_eq!(tree.height(), 9);

    let root = tree.root_index().unwrap();
    assert!(tree.node(root).black);
    black_height(tree.arena(), tree.root_index()).unwrap();
}
