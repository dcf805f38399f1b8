use searchtree::{BinarySearchTree, Node};

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a vec.
/// This way we can ensure that after a random smattering of inserts
/// and clears the tree holds exactly the values the vec does.
fn do_ops<T>(ops: &[Op<T>], tree: &mut BinarySearchTree<T>, values: &mut Vec<T>)
where
    T: Ord + Copy,
{
    for op in ops {
        match op {
            Op::Insert(x) => {
                tree.insert(*x);
                values.push(*x);
            }
            Op::Find(x) => {
                assert_eq!(tree.find(x), values.contains(x));
            }
            Op::Clear => {
                tree.clear();
                values.clear();
            }
        }
    }
}

/// Counts the nodes with at least one child by walking the borrowed views.
fn count_branches<T>(node: Option<&Node<T>>) -> usize {
    match node {
        Some(node) if !node.is_leaf() => {
            1 + count_branches(node.left()) + count_branches(node.right())
        }
        _ => 0,
    }
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut tree = BinarySearchTree::new();
        let mut values = Vec::new();
        do_ops(&ops, &mut tree, &mut values);

        values.sort();
        tree.in_order().copied().collect::<Vec<_>>() == values
    }

    fn contains(xs: Vec<i8>) -> bool {
        let tree = BinarySearchTree::from_sequence(xs.iter().copied());
        xs.iter().all(|x| tree.find(x))
    }

    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree = BinarySearchTree::from_sequence(xs.iter().copied());
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| !tree.find(x))
    }

    fn leaves_and_branches_partition_the_nodes(xs: Vec<i8>) -> bool {
        let tree = BinarySearchTree::from_sequence(xs.iter().copied());
        // The subtree views start below the root, so the root's own
        // children decide whether it counts as a branch.
        let root_is_branch = tree.left_subtree().is_some() || tree.right_subtree().is_some();
        let branches = usize::from(root_is_branch)
            + count_branches(tree.left_subtree())
            + count_branches(tree.right_subtree());

        tree.count_leaves() + branches == tree.size()
    }

    fn traversals_agree_on_membership(xs: Vec<i8>) -> bool {
        let tree = BinarySearchTree::from_sequence(xs.iter().copied());

        let in_order: Vec<_> = tree.in_order().copied().collect();
        let mut pre: Vec<_> = tree.pre_order().copied().collect();
        let mut post: Vec<_> = tree.post_order().copied().collect();
        let mut level: Vec<_> = tree.level_order().copied().collect();
        pre.sort();
        post.sort();
        level.sort();

        pre == in_order && post == in_order && level == in_order
    }

    fn clone_preserves_shape_and_values(xs: Vec<i8>) -> bool {
        let tree = BinarySearchTree::from_sequence(xs.iter().copied());
        let copy = tree.clone();

        copy.pre_order().eq(tree.pre_order()) && copy.level_order().eq(tree.level_order())
    }

    fn unique_set_construction_agrees_with_a_btree_set(xs: Vec<i8>) -> bool {
        let tree = BinarySearchTree::from_unique_set(xs.iter().copied());
        let set: BTreeSet<_> = xs.into_iter().collect();

        tree.size() == set.len() && tree.in_order().copied().eq(set.into_iter())
    }
}
