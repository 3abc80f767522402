use ordered_tree::{Order, Tree};
use quickcheck_macros::quickcheck;

use std::collections::BTreeSet;

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and erases we have the same keys in both. Every insert and erase
/// must also report the same outcome as the set did.
fn do_ops<K>(ops: &[Op<K>], bst: &mut Tree<K>, set: &mut BTreeSet<K>)
where
    K: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(k) => {
                assert_eq!(bst.insert(k.clone()), set.insert(k.clone()));
            }
            Op::Erase(k) => {
                assert_eq!(bst.erase(k), set.remove(k));
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.traverse(Order::Inorder) == set.into_iter().collect::<Vec<_>>()
}

#[quickcheck]
fn inorder_is_strictly_ascending(xs: Vec<i32>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();

    tree.traverse(Order::Inorder)
        .windows(2)
        .all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn traversals_are_permutations(xs: Vec<i16>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let inorder = tree.traverse(Order::Inorder);

    [Order::Preorder, Order::Postorder].into_iter().all(|order| {
        let mut keys = tree.traverse(order);
        keys.sort_unstable();
        keys == inorder && keys.len() == tree.len()
    })
}

#[quickcheck]
fn duplicate_insert_is_rejected(xs: Vec<i8>, x: i8) -> bool {
    let mut tree: Tree<_> = xs.into_iter().collect();
    tree.insert(x);
    let len = tree.len();
    let before = tree.clone();

    !tree.insert(x) && tree.len() == len && tree == before
}

#[quickcheck]
fn erase_absent_leaves_tree_unchanged(xs: Vec<i8>, x: i8) -> bool {
    let mut tree: Tree<_> = xs.into_iter().filter(|key| *key != x).collect();
    let before = tree.traverse(Order::Inorder);

    !tree.erase(&x) && tree.traverse(Order::Inorder) == before
}

#[quickcheck]
fn with_erasures(xs: Vec<i8>, erasures: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for erase in &erasures {
        tree.erase(erase);
    }

    erasures.iter().all(|x| !tree.contains(x))
        && xs
            .iter()
            .filter(|x| !erasures.contains(*x))
            .all(|x| tree.contains(x))
}

#[quickcheck]
fn copies_do_not_alias(xs: Vec<i8>, ops: Vec<Op<i8>>) -> bool {
    let original: Tree<_> = xs.into_iter().collect();
    let snapshot = original.traverse(Order::Preorder);

    let mut copy = Tree::new();
    copy.clone_from(&original);
    let copied_fine = Order::ALL
        .into_iter()
        .all(|order| copy.traverse(order) == original.traverse(order));

    let mut scratch: BTreeSet<_> = copy.traverse(Order::Inorder).into_iter().collect();
    do_ops(&ops, &mut copy, &mut scratch);

    copied_fine && original.traverse(Order::Preorder) == snapshot
}

#[quickcheck]
fn swap_exchanges_contents(xs: Vec<i8>, ys: Vec<i8>) -> bool {
    let mut a: Tree<_> = xs.into_iter().collect();
    let mut b: Tree<_> = ys.into_iter().collect();
    let (a_keys, b_keys) = (a.traverse(Order::Preorder), b.traverse(Order::Preorder));

    a.swap(&mut b);

    a.traverse(Order::Preorder) == b_keys && b.traverse(Order::Preorder) == a_keys
}
