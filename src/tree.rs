//! An in-place, comparison-ordered BST. Operations that modify the tree
//! (`insert`, `set_root_value`, `clear`) take `&mut self`; everything else
//! borrows the tree immutably and never changes its shape.
//!
//! # Examples
//!
//! ```
//! use searchtree::BinarySearchTree;
//!
//! let mut tree = BinarySearchTree::from_value(10);
//!
//! tree.insert(5);
//! tree.insert(15);
//! tree.insert(2);
//! tree.insert(7);
//!
//! assert!(tree.find(&7));
//! assert!(!tree.find(&100));
//! assert_eq!(tree.find_minimum(), Some(&2));
//! assert_eq!(tree.size(), 5);
//!
//! // In-order traversal visits values in sorted order.
//! let sorted: Vec<_> = tree.in_order().copied().collect();
//! assert_eq!(sorted, vec![2, 5, 7, 10, 15]);
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::source::Source;
use crate::traverse::{InOrder, LevelOrder, PostOrder, PreOrder};

/// An ownership unit holding one value and two optional children. A
/// `Node`'s subtree is exclusively owned by that `Node`: no sharing, no
/// back references, no cycles.
///
/// Callers never build `Node`s directly. They are created by insertion and
/// released by [`BinarySearchTree::clear`] (or by dropping the tree), and
/// escape the crate only as borrowed views through
/// [`BinarySearchTree::left_subtree`] and
/// [`BinarySearchTree::right_subtree`].
#[derive(Debug)]
pub struct Node<T> {
    value: T,
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,
}

impl<T> Node<T> {
    fn boxed(value: T) -> Box<Self> {
        Box::new(Node {
            value,
            left: None,
            right: None,
        })
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The left child, holding values strictly less than this node's.
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    /// The right child, holding values greater than or equal to this
    /// node's.
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Renders this subtree into `out`, right subtree above the node and
    /// left subtree below, one line per node.
    fn render(&self, is_right: bool, prefix: &str, out: &mut String)
    where
        T: fmt::Display,
    {
        if let Some(right) = self.right.as_deref() {
            let above = if is_right { "    " } else { "│   " };
            right.render(true, &format!("{}{}", prefix, above), out);
        }
        out.push_str(prefix);
        out.push_str(if is_right { "┌── " } else { "└── " });
        out.push_str(&self.value.to_string());
        out.push('\n');
        if let Some(left) = self.left.as_deref() {
            let below = if is_right { "│   " } else { "    " };
            left.render(false, &format!("{}{}", prefix, below), out);
        }
    }
}

/// A comparison-ordered binary search tree.
///
/// The tree is an unbalanced, in-memory ordered container: insertion
/// order alone decides its shape, duplicates are kept (a multiset), and
/// there is no node removal short of [`clear`](BinarySearchTree::clear).
#[derive(Debug)]
pub struct BinarySearchTree<T> {
    root: Option<Box<Node<T>>>,
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for BinarySearchTree<T> {
    // Dropping a chain of `Box<Node>`s link by link would recurse once
    // per level, so a degenerate tree could overflow the call stack.
    // `clear` detaches iteratively.
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Clone for BinarySearchTree<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        let mut clone = Self::new();
        let mut stack = Vec::new();
        if let Some(root) = self.root.as_deref() {
            stack.push((root, &mut clone.root));
        }
        // Copies link by link with an explicit stack for the same reason
        // `clear` uses one.
        while let Some((source, slot)) = stack.pop() {
            let copy = slot.get_or_insert(Node::boxed(source.value.clone()));
            if let Some(left) = source.left.as_deref() {
                stack.push((left, &mut copy.left));
            }
            if let Some(right) = source.right.as_deref() {
                stack.push((right, &mut copy.right));
            }
        }
        clone
    }
}

impl<T> BinarySearchTree<T> {
    /// Generates a new, empty tree.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Builds a tree holding a single value as its root.
    pub fn from_value(value: T) -> Self {
        Self {
            root: Some(Node::boxed(value)),
        }
    }

    /// Builds a tree from an ordered sequence. The first element becomes
    /// the root and the rest are inserted one at a time, in sequence
    /// order, so the order decides the final shape but not the membership.
    ///
    /// # Examples
    ///
    /// ```
    /// use searchtree::BinarySearchTree;
    ///
    /// let tree = BinarySearchTree::from_sequence(vec![5, 3, 8, 1, 4]);
    ///
    /// assert_eq!(tree.pre_order().copied().collect::<Vec<_>>(), vec![5, 3, 1, 4, 8]);
    /// assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), vec![1, 3, 4, 5, 8]);
    /// ```
    pub fn from_sequence<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Ord,
    {
        let mut tree = Self::new();
        for value in values {
            tree.insert(value);
        }
        tree
    }

    /// Builds a tree from unordered unique elements by sorting them
    /// ascending (and dropping any duplicates) before applying the
    /// sequence construction of [`from_sequence`](Self::from_sequence).
    ///
    /// # Examples
    ///
    /// ```
    /// use searchtree::BinarySearchTree;
    ///
    /// let tree = BinarySearchTree::from_unique_set(vec![3, 1, 3, 2]);
    ///
    /// // Sorted before insertion, so the tree is a right chain.
    /// assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    /// assert!(tree.is_degenerate());
    /// ```
    pub fn from_unique_set<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Ord,
    {
        let mut values: Vec<T> = values.into_iter().collect();
        values.sort();
        values.dedup();
        Self::from_sequence(values)
    }

    /// Builds a tree from the values of a keyed mapping, inserted in the
    /// mapping's pair order. The keys are discarded.
    pub fn from_keyed<K, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, T)>,
        T: Ord,
    {
        Self::from_sequence(pairs.into_iter().map(|(_, value)| value))
    }

    /// Builds a tree from any [`Source`], dispatching to the matching
    /// constructor. Empty sequences, sets, and mappings yield the empty
    /// tree; construction never fails.
    pub fn from_source<K>(source: Source<T, K>) -> Self
    where
        T: Ord,
    {
        match source {
            Source::Scalar(value) => Self::from_value(value),
            Source::Sequence(values) => Self::from_sequence(values),
            Source::UniqueSet(values) => Self::from_unique_set(values),
            Source::Keyed(pairs) => Self::from_keyed(pairs),
        }
    }

    /// Inserts the given value into the tree. Insertion always succeeds:
    /// values strictly less than a node descend left, everything else
    /// (ties included) descends right, and a new leaf is attached where
    /// the descent falls off the tree. Exactly one previously-absent
    /// child link is set; no rebalancing is performed.
    ///
    /// The descent is a loop over child links, so it holds at any depth,
    /// chains included.
    ///
    /// # Examples
    ///
    /// ```
    /// use searchtree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    ///
    /// tree.insert(8);
    /// tree.insert(3);
    /// tree.insert(8);
    ///
    /// // Duplicates are kept: the tree is a multiset.
    /// assert_eq!(tree.size(), 3);
    /// assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), vec![3, 8, 8]);
    /// ```
    pub fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        let mut current = &mut self.root;
        while let Some(node) = current {
            // Ties descend right, so the first of several equal values is
            // the one a descent from the root reaches first.
            current = match value.cmp(&node.value) {
                Ordering::Less => &mut node.left,
                Ordering::Equal | Ordering::Greater => &mut node.right,
            };
        }
        *current = Some(Node::boxed(value));
    }

    /// Whether the given value appears in the tree.
    ///
    /// Absence is normal control flow, not an error: the return value is
    /// a plain `bool`.
    ///
    /// # Examples
    ///
    /// ```
    /// use searchtree::BinarySearchTree;
    ///
    /// let tree = BinarySearchTree::from_sequence(vec![5, 3, 8]);
    ///
    /// assert!(tree.find(&3));
    /// assert!(!tree.find(&42));
    /// ```
    pub fn find(&self, value: &T) -> bool
    where
        T: Ord,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match value.cmp(&node.value) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return true,
                Ordering::Greater => node.right.as_deref(),
            };
        }
        false
    }

    /// The smallest value in the tree, found by walking the left spine
    /// from the root. Returns `None` for an empty tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use searchtree::BinarySearchTree;
    ///
    /// let tree = BinarySearchTree::from_sequence(vec![20, 10, 30, 25, 5]);
    /// assert_eq!(tree.find_minimum(), Some(&5));
    ///
    /// let empty: BinarySearchTree<i32> = BinarySearchTree::new();
    /// assert_eq!(empty.find_minimum(), None);
    /// ```
    pub fn find_minimum(&self) -> Option<&T> {
        let mut current = self.root.as_deref()?;
        while let Some(left) = current.left.as_deref() {
            current = left;
        }
        Some(&current.value)
    }

    /// Looks a value up by a comparator instead of by `Ord`, descending
    /// left or right as the comparator directs.
    ///
    /// The comparator reports how each stored value compares to the
    /// sought one (the [`slice::binary_search_by`] contract). When the
    /// tree holds several matching values the first one on the descent
    /// path is returned, which for duplicates inserted through
    /// [`insert`](Self::insert) is the first inserted.
    ///
    /// # Examples
    ///
    /// ```
    /// use searchtree::BinarySearchTree;
    ///
    /// let tree = BinarySearchTree::from_sequence(vec![(2, "b"), (1, "a"), (3, "c")]);
    ///
    /// assert_eq!(tree.get_by(|(id, _)| id.cmp(&3)), Some(&(3, "c")));
    /// assert_eq!(tree.get_by(|(id, _)| id.cmp(&9)), None);
    /// ```
    pub fn get_by<F>(&self, mut compare: F) -> Option<&T>
    where
        F: FnMut(&T) -> Ordering,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match compare(&node.value) {
                Ordering::Less => node.right.as_deref(),
                Ordering::Equal => return Some(&node.value),
                Ordering::Greater => node.left.as_deref(),
            };
        }
        None
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The total number of nodes (`1 + size(left) + size(right)` at
    /// every node), `0` for the empty tree.
    pub fn size(&self) -> usize {
        let mut count = 0;
        let mut stack = Vec::new();
        stack.extend(self.root.as_deref());
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.left());
            stack.extend(node.right());
        }
        count
    }

    /// The number of nodes with no children. An empty tree has none; a
    /// single-root tree has exactly one, the root itself.
    pub fn count_leaves(&self) -> usize {
        let mut count = 0;
        let mut stack = Vec::new();
        stack.extend(self.root.as_deref());
        while let Some(node) = stack.pop() {
            if node.is_leaf() {
                count += 1;
            }
            stack.extend(node.left());
            stack.extend(node.right());
        }
        count
    }

    /// Whether every node has at most one child, making the tree a chain
    /// equivalent in shape to a linked list. An empty subtree is
    /// vacuously degenerate.
    ///
    /// # Examples
    ///
    /// ```
    /// use searchtree::BinarySearchTree;
    ///
    /// let chain = BinarySearchTree::from_sequence(vec![10, 20, 30, 40]);
    /// assert!(chain.is_degenerate());
    ///
    /// let bushy = BinarySearchTree::from_sequence(vec![10, 5, 15]);
    /// assert!(!bushy.is_degenerate());
    /// ```
    pub fn is_degenerate(&self) -> bool {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            if node.left().is_some() && node.right().is_some() {
                return false;
            }
            // While every node seen so far has at most one child, this
            // walk covers the whole tree.
            current = node.left().or(node.right());
        }
        true
    }

    /// The value stored in the root node, or `None` for an empty tree.
    pub fn root_value(&self) -> Option<&T> {
        self.root.as_deref().map(Node::value)
    }

    /// Overwrites the root node's value in place. On an empty tree this
    /// creates a new single-node tree instead of failing.
    ///
    /// Overwriting does not re-order the tree, so keeping the ordering
    /// invariant valid is the caller's job.
    ///
    /// # Examples
    ///
    /// ```
    /// use searchtree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    ///
    /// tree.set_root_value(7);
    /// assert_eq!(tree.root_value(), Some(&7));
    ///
    /// // The overwrite leaves child subtrees where they are.
    /// tree.insert(3);
    /// tree.set_root_value(1);
    /// assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), vec![3, 1]);
    /// ```
    pub fn set_root_value(&mut self, value: T) {
        match self.root.as_deref_mut() {
            Some(root) => root.value = value,
            None => self.root = Some(Node::boxed(value)),
        }
    }

    /// A borrowed view of the root's left child, or `None` if the tree is
    /// empty or the root has no left child. The view aliases this tree's
    /// structure; it is not an independent tree with its own lifecycle.
    pub fn left_subtree(&self) -> Option<&Node<T>> {
        self.root.as_deref().and_then(Node::left)
    }

    /// A borrowed view of the root's right child. See
    /// [`left_subtree`](Self::left_subtree).
    pub fn right_subtree(&self) -> Option<&Node<T>> {
        self.root.as_deref().and_then(Node::right)
    }

    /// Detaches and releases every node, leaving the tree empty. Clearing
    /// an already-empty tree is a no-op.
    ///
    /// # Examples
    ///
    /// ```
    /// use searchtree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::from_sequence(vec![2, 1, 3]);
    ///
    /// tree.clear();
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.size(), 0);
    /// ```
    pub fn clear(&mut self) {
        let mut stack = Vec::new();
        stack.extend(self.root.take());
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }

    /// An iterator visiting each value before the values in its subtrees.
    pub fn pre_order(&self) -> PreOrder<'_, T> {
        PreOrder::new(self.root.as_deref())
    }

    /// An iterator visiting the left subtree, then the value, then the
    /// right subtree. For a valid tree this yields values in
    /// non-decreasing sorted order, which is the defining correctness
    /// property of the whole structure.
    ///
    /// # Examples
    ///
    /// ```
    /// use searchtree::BinarySearchTree;
    ///
    /// let tree = BinarySearchTree::from_sequence(vec![5, 3, 8, 1, 4]);
    /// assert_eq!(tree.in_order().copied().collect::<Vec<_>>(), vec![1, 3, 4, 5, 8]);
    /// ```
    pub fn in_order(&self) -> InOrder<'_, T> {
        InOrder::new(self.root.as_deref())
    }

    /// An iterator visiting the values in both subtrees before the value
    /// itself.
    pub fn post_order(&self) -> PostOrder<'_, T> {
        PostOrder::new(self.root.as_deref())
    }

    /// A breadth-first iterator visiting values strictly by depth, root
    /// first, left to right within a level.
    ///
    /// # Examples
    ///
    /// ```
    /// use searchtree::BinarySearchTree;
    ///
    /// let tree = BinarySearchTree::from_sequence(vec![5, 3, 8, 1, 4]);
    /// assert_eq!(tree.level_order().copied().collect::<Vec<_>>(), vec![5, 3, 8, 1, 4]);
    /// ```
    pub fn level_order(&self) -> LevelOrder<'_, T> {
        LevelOrder::new(self.root.as_deref())
    }

    /// Renders the tree as a 2D indented diagram, one node per line, with
    /// the right subtree printed above its parent and the left below.
    /// Purely for human inspection, not a stable machine format. The
    /// rendering recurses once per level of the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use searchtree::BinarySearchTree;
    ///
    /// let tree = BinarySearchTree::from_sequence(vec![10, 5, 15]);
    ///
    /// let diagram = tree.diagram();
    /// let lines: Vec<_> = diagram.lines().collect();
    /// assert_eq!(lines, ["│   ┌── 15", "└── 10", "    └── 5"]);
    /// ```
    pub fn diagram(&self) -> String
    where
        T: fmt::Display,
    {
        let mut out = String::new();
        if let Some(root) = self.root.as_deref() {
            root.render(false, "", &mut out);
        }
        out
    }
}

/// Renders the tree as its sorted list of values, e.g. `[1, 3, 4]`.
impl<T> fmt::Display for BinarySearchTree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        let mut values = self.in_order();
        if let Some(first) = values.next() {
            write!(f, "{}", first)?;
        }
        for value in values {
            write!(f, ", {}", value)?;
        }
        f.write_str("]")
    }
}


#[cfg(test)]
mod quicktests {
    use super::*;
    use crate::test::quick::Op;

    /// Applies a set of operations to a tree and a Vec model. This way we
    /// can ensure that after a random smattering of inserts and clears
    /// the tree agrees with a model that is trivially correct.
    fn do_ops(ops: &[Op<i8>], tree: &mut BinarySearchTree<i8>, model: &mut Vec<i8>) {
        for op in ops {
            match op {
                Op::Insert(x) => {
                    tree.insert(*x);
                    model.push(*x);
                }
                Op::Find(x) => {
                    assert_eq!(tree.find(x), model.contains(x));
                }
                Op::Clear => {
                    tree.clear();
                    model.clear();
                }
            }
        }
    }

    quickcheck::quickcheck! {
        fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
            let mut tree = BinarySearchTree::new();
            let mut model = Vec::new();
            do_ops(&ops, &mut tree, &mut model);

            model.sort();
            tree.in_order().copied().collect::<Vec<_>>() == model
        }
    }

    quickcheck::quickcheck! {
        fn in_order_is_sorted(xs: Vec<i8>) -> bool {
            let tree = BinarySearchTree::from_sequence(xs);
            let in_order: Vec<_> = tree.in_order().copied().collect();
            in_order.windows(2).all(|pair| pair[0] <= pair[1])
        }
    }

    quickcheck::quickcheck! {
        fn size_counts_every_insertion(xs: Vec<i8>) -> bool {
            let tree = BinarySearchTree::from_sequence(xs.iter().copied());
            tree.size() == xs.len() && tree.in_order().count() == xs.len()
        }
    }

    quickcheck::quickcheck! {
        fn minimum_agrees_with_in_order(xs: Vec<i8>) -> bool {
            let tree = BinarySearchTree::from_sequence(xs.iter().copied());
            tree.find_minimum() == tree.in_order().next()
        }
    }

    quickcheck::quickcheck! {
        fn leaves_never_outnumber_nodes(xs: Vec<i8>) -> bool {
            let tree = BinarySearchTree::from_sequence(xs.iter().copied());
            let leaves = tree.count_leaves();
            leaves <= tree.size() && (xs.is_empty() || leaves >= 1)
        }
    }
}
