//! Tagged construction input for [`BinarySearchTree::from_source`].
//!
//! Each variant names the shape of the data a tree can be built from, so
//! the construction rules live with the input instead of behind runtime
//! inspection of it. A caller who has a plain value, an ordered sequence,
//! a set of unique elements, or a keyed mapping wraps it in the matching
//! variant and every wrapped input produces a tree.
//!
//! # Examples
//!
//! ```
//! use searchtree::{BinarySearchTree, Source};
//!
//! let tree = BinarySearchTree::from_source(Source::sequence(vec![5, 3, 8]));
//! assert_eq!(tree.root_value(), Some(&5));
//!
//! // A keyed mapping contributes its values; the keys are dropped.
//! let tree = BinarySearchTree::from_source(Source::keyed(vec![("b", 2), ("a", 1)]));
//! assert_eq!(tree.root_value(), Some(&2));
//! ```
//!
//! [`BinarySearchTree::from_source`]: crate::tree::BinarySearchTree::from_source

use std::collections::{BTreeMap, BTreeSet};

/// One unit of construction input, tagged with how its elements should be
/// fed into a tree.
///
/// The key type `K` only matters for [`Keyed`](Source::Keyed) input and
/// defaults to `()` everywhere else.
#[derive(Debug, Clone, PartialEq)]
pub enum Source<T, K = ()> {
    /// A single value, becoming the tree's only node.
    Scalar(T),
    /// An ordered run of values, inserted first to last. The order
    /// decides the tree's shape.
    Sequence(Vec<T>),
    /// Unique values with no meaningful order. They are sorted (and
    /// deduplicated) before insertion, so equal collections build equal
    /// trees no matter how they were ordered.
    UniqueSet(Vec<T>),
    /// Key-value pairs whose values are inserted in pair order. The keys
    /// are carried only to be discarded, for callers whose data arrives
    /// as a mapping.
    Keyed(Vec<(K, T)>),
}

impl<T> Source<T> {
    /// Wraps a single value.
    pub fn scalar(value: T) -> Self {
        Source::Scalar(value)
    }

    /// Collects an ordered run of values.
    pub fn sequence<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Source::Sequence(values.into_iter().collect())
    }

    /// Collects unordered unique values.
    pub fn unique_set<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Source::UniqueSet(values.into_iter().collect())
    }
}

impl<T, K> Source<T, K> {
    /// Collects key-value pairs.
    pub fn keyed<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, T)>,
    {
        Source::Keyed(pairs.into_iter().collect())
    }
}

impl<T> From<Vec<T>> for Source<T> {
    fn from(values: Vec<T>) -> Self {
        Source::Sequence(values)
    }
}

impl<T> From<BTreeSet<T>> for Source<T> {
    fn from(values: BTreeSet<T>) -> Self {
        Source::UniqueSet(values.into_iter().collect())
    }
}

impl<T, K> From<BTreeMap<K, T>> for Source<T, K> {
    fn from(pairs: BTreeMap<K, T>) -> Self {
        Source::Keyed(pairs.into_iter().collect())
    }
}
