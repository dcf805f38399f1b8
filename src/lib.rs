//! This crate exposes a comparison-ordered Binary Search Tree (BST) and a
//! small dual-key index application built on top of it.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and traverse stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will store some sort
//! of value (the value that was inserted, for example) and will sometimes
//! have child `Node`s. The most important invariants of the tree in this
//! crate are:
//!
//! 1. For every `Node` in the tree, all the `Node`s in its left subtree
//!    have a value strictly less than its own value.
//! 2. For every `Node` in the tree, all the `Node`s in its right subtree
//!    have a value greater than or equal to its own value (ties descend
//!    right, so the tree stores duplicates like a multiset).
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The benefits of these invariants are many. For instance, searching for
//! a value takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`), and in-order iteration
//! visits values in sorted order by walking the left subtree, then the
//! subtree root, then the right subtree. No rebalancing is ever performed:
//! the shape of the tree is decided entirely by insertion order, so
//! inserting in ascending order produces a chain one node wide.
//! [`BinarySearchTree::is_degenerate`] reports when that has happened.
//!
//! ## Dual-key index
//!
//! [`DualKeyIndex`] keeps two independent trees over a single set of
//! records so the same record can be found through either its primary or
//! its secondary key. See the [`index`] module documentation for a worked
//! example.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod index;
pub mod source;
pub mod traverse;
pub mod tree;

pub use index::{DualKeyIndex, Record};
pub use source::Source;
pub use tree::{BinarySearchTree, Node};

#[cfg(test)]
mod test;
