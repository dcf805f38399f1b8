//! Borrowing iterators over a tree's values in the four classic orders.
//!
//! Each iterator is created by the matching [`BinarySearchTree`] method
//! and yields `&T` without changing the tree, so several traversals can
//! run over the same tree at once. All four walk the tree with an
//! explicit stack or queue rather than recursion, so a degenerate chain
//! of any length traverses without overflowing the call stack.
//!
//! [`BinarySearchTree`]: crate::tree::BinarySearchTree

use std::collections::VecDeque;

use crate::tree::Node;

/// Depth-first iterator yielding each value before the values in its
/// subtrees. Created by [`BinarySearchTree::pre_order`].
///
/// [`BinarySearchTree::pre_order`]: crate::tree::BinarySearchTree::pre_order
pub struct PreOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> PreOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right is pushed first so left pops first.
        if let Some(right) = node.right() {
            self.stack.push(right);
        }
        if let Some(left) = node.left() {
            self.stack.push(left);
        }
        Some(node.value())
    }
}

/// Depth-first iterator yielding the left subtree's values, then the
/// node's, then the right subtree's. On a valid tree this is
/// non-decreasing sorted order. Created by
/// [`BinarySearchTree::in_order`].
///
/// [`BinarySearchTree::in_order`]: crate::tree::BinarySearchTree::in_order
pub struct InOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
    current: Option<&'a Node<T>>,
}

impl<'a, T> InOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: Vec::new(),
            current: root,
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.current {
            self.stack.push(node);
            self.current = node.left();
        }
        let node = self.stack.pop()?;
        self.current = node.right();
        Some(node.value())
    }
}

/// Depth-first iterator yielding the values in both subtrees before the
/// node's own. Created by [`BinarySearchTree::post_order`].
///
/// [`BinarySearchTree::post_order`]: crate::tree::BinarySearchTree::post_order
pub struct PostOrder<'a, T> {
    // The flag records whether the node's subtrees are already on the
    // stack; a node is yielded only on its second visit.
    stack: Vec<(&'a Node<T>, bool)>,
}

impl<'a, T> PostOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: root.into_iter().map(|node| (node, false)).collect(),
        }
    }
}

impl<'a, T> Iterator for PostOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                return Some(node.value());
            }
            self.stack.push((node, true));
            if let Some(right) = node.right() {
                self.stack.push((right, false));
            }
            if let Some(left) = node.left() {
                self.stack.push((left, false));
            }
        }
    }
}

/// Breadth-first iterator yielding values strictly by depth, the root
/// first, then each level left to right. Created by
/// [`BinarySearchTree::level_order`].
///
/// [`BinarySearchTree::level_order`]: crate::tree::BinarySearchTree::level_order
pub struct LevelOrder<'a, T> {
    queue: VecDeque<&'a Node<T>>,
}

impl<'a, T> LevelOrder<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            queue: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for LevelOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        if let Some(left) = node.left() {
            self.queue.push_back(left);
        }
        if let Some(right) = node.right() {
            self.queue.push_back(right);
        }
        Some(node.value())
    }
}
