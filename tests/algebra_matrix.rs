//! Set algebra exercised under every engine.

use ordered_forest::{AvlTree, BinaryTree, RbTree, SplayTree};

fn keys<T: Clone>(pairs: impl Iterator<Item = (T, T)>) -> Vec<T> {
    pairs.map(|(k, _)| k).collect()
}

macro_rules! algebra_tests {
    ($name:ident, $tree:ident) => {
        mod $name {
            use super::*;

            #[test]
            fn union_intersection_difference() {
                let a = $tree::<i32, i32>::from_iter([1, 2, 3, 4]);
                let b = $tree::<i32, i32>::from_iter([3, 4, 5, 6]);

                let u = a.union(&b);
                u.assert_valid().unwrap();
                assert_eq!(
                    keys(u.iter().map(|(k, v)| (*k, *v))),
                    vec![1, 2, 3, 4, 5, 6]
                );

                let i = a.intersection(&b);
                i.assert_valid().unwrap();
                assert_eq!(keys(i.iter().map(|(k, v)| (*k, *v))), vec![3, 4]);

                let d = a.difference(&b);
                d.assert_valid().unwrap();
                assert_eq!(keys(d.iter().map(|(k, v)| (*k, *v))), vec![1, 2]);

                let s = a.symmetric_difference(&b);
                s.assert_valid().unwrap();
                assert_eq!(keys(s.iter().map(|(k, v)| (*k, *v))), vec![1, 2, 5, 6]);
            }

            #[test]
            fn operator_sugar() {
                let a = $tree::<i32, i32>::from_iter([1, 2, 3, 4]);
                let b = $tree::<i32, i32>::from_iter([3, 4, 5, 6]);

                assert_eq!(&a | &b, a.union(&b));
                assert_eq!(&a & &b, a.intersection(&b));
                assert_eq!(&a - &b, a.difference(&b));
                assert_eq!(&a ^ &b, a.symmetric_difference(&b));

                let mut c = $tree::<i32, i32>::from_iter([1, 2, 3, 4]);
                c |= &b;
                assert_eq!(c, a.union(&b));

                let mut c = $tree::<i32, i32>::from_iter([1, 2, 3, 4]);
                c &= &b;
                assert_eq!(c, a.intersection(&b));

                let mut c = $tree::<i32, i32>::from_iter([1, 2, 3, 4]);
                c -= &b;
                c.assert_valid().unwrap();
                assert_eq!(c, a.difference(&b));

                let mut c = $tree::<i32, i32>::from_iter([1, 2, 3, 4]);
                c ^= &b;
                assert_eq!(c, a.symmetric_difference(&b));
            }

            #[test]
            fn subset_relations() {
                let small = $tree::<i32, i32>::from_iter([2, 3]);
                let big = $tree::<i32, i32>::from_iter([1, 2, 3, 4]);
                let other = $tree::<i32, i32>::from_iter([3, 9]);
                let empty = $tree::<i32, i32>::new();

                assert!(small.is_subset(&big));
                assert!(big.is_superset(&small));
                assert!(!big.is_subset(&small));
                assert!(!small.is_subset(&other));
                assert!(empty.is_subset(&small));
                assert!(empty.is_subset(&empty));

                assert!(small < big);
                assert!(big > small);
                assert!(small.partial_cmp(&other).is_none());
                assert_eq!(
                    big.partial_cmp(&$tree::<i32, i32>::from_iter([4, 3, 2, 1])),
                    Some(std::cmp::Ordering::Equal)
                );
            }

            #[test]
            fn disjointness() {
                let a = $tree::<i32, i32>::from_iter([1, 3, 5]);
                let b = $tree::<i32, i32>::from_iter([2, 4, 6]);
                let c = $tree::<i32, i32>::from_iter([5, 6]);
                let empty = $tree::<i32, i32>::new();

                assert!(a.is_disjoint(&b));
                assert!(!a.is_disjoint(&c));
                assert!(a.is_disjoint(&empty));
                assert!(empty.is_disjoint(&empty));
            }

            #[test]
            fn equality_ignores_shape() {
                let mut a = $tree::<i32, i32>::new();
                for v in [5, 1, 4, 2, 3] {
                    a.add(v);
                }
                let b = $tree::<i32, i32>::from_iter(1..=5);
                assert_eq!(a, b);

                a.discard(&3);
                assert_ne!(a, b);
            }

            #[test]
            fn left_operand_wins_on_shared_key() {
                let mut a = $tree::<i32, i32>::new();
                a.insert(1, 100);
                a.insert(2, 200);
                let mut b = $tree::<i32, i32>::new();
                b.insert(2, -2);
                b.insert(3, -3);

                let u = a.union(&b);
                assert_eq!(u.get(&1), Some(&100));
                assert_eq!(u.get(&2), Some(&200));
                assert_eq!(u.get(&3), Some(&-3));

                let i = a.intersection(&b);
                assert_eq!(i.get(&2), Some(&200));
            }

            #[test]
            fn algebra_identities() {
                let a = $tree::<i32, i32>::from_iter([1, 2, 3, 4, 5]);
                let b = $tree::<i32, i32>::from_iter([4, 5, 6, 7]);

                // A xor B == (A - B) union (B - A)
                let lhs = a.symmetric_difference(&b);
                let rhs = a.difference(&b).union(&b.difference(&a));
                assert_eq!(lhs, rhs);

                // (A and B) subset of A subset of (A or B)
                let i = a.intersection(&b);
                let u = a.union(&b);
                assert!(i.is_subset(&a));
                assert!(a.is_subset(&u));

                // absorption and difference laws
                assert_eq!(a.intersection(&u), a);
                assert_eq!(a.difference(&a.difference(&b)), i);

                // commutativity up to key set
                assert_eq!(a.union(&b), b.union(&a));
                assert_eq!(a.intersection(&b), b.intersection(&a));
                assert_eq!(a.symmetric_difference(&b), b.symmetric_difference(&a));

                // A - A is empty, A or A == A, A xor A is empty
                assert!(a.difference(&a).is_empty());
                assert_eq!(a.union(&a), a);
                assert!(a.symmetric_difference(&a).is_empty());
                assert_eq!(a.intersection(&a), a);
            }

            #[test]
            fn results_are_balanced() {
                let a = $tree::<i32, i32>::from_iter(0..512);
                let b = $tree::<i32, i32>::from_iter(256..768);
                let u = a.union(&b);
                assert_eq!(u.len(), 768);
                // rebuilt by bisection no matter the engine
                assert_eq!(u.height(), 9);
                u.assert_valid().unwrap();
            }
        }
    };
}

algebra_tests!(binary, BinaryTree);
algebra_tests!(avl, AvlTree);
algebra_tests!(red_black, RbTree);
algebra_tests!(splay, SplayTree);
