//! A dual-key index: one record store searchable through two
//! independently ordered trees.
//!
//! Every record carries a primary key, a secondary key, and a payload.
//! The records themselves live in one append-only store; each tree holds
//! lightweight postings (a key clone plus the record's position) so the
//! two orderings never disagree about which records exist. Looking a
//! record up by either key costs one tree descent, and walking either
//! tree in order lists every record sorted by that key.
//!
//! # Examples
//!
//! ```
//! use searchtree::DualKeyIndex;
//!
//! let mut index = DualKeyIndex::new();
//! index.add_record("E105".to_string(), 185, "Zadi");
//! index.add_record("E113".to_string(), 195, "Youssef");
//!
//! let by_id = index.find_by_primary("E105").unwrap();
//! assert_eq!(by_id.data(), &"Zadi");
//!
//! let by_mark = index.find_by_secondary(&195).unwrap();
//! assert_eq!(by_mark.primary(), "E113");
//! ```

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;

use crate::tree::BinarySearchTree;

/// One indexed record: a primary key, a secondary key, and the payload
/// they describe.
///
/// Records are created by [`DualKeyIndex::add_record`] and handed back
/// by the index's lookups and listings; they are never removed or
/// reordered, so a borrowed `Record` stays valid for as long as the
/// index is borrowed.
#[derive(Debug, Clone)]
pub struct Record<P, S, D> {
    primary: P,
    secondary: S,
    data: D,
}

impl<P, S, D> Record<P, S, D> {
    /// The record's primary key.
    pub fn primary(&self) -> &P {
        &self.primary
    }

    /// The record's secondary key.
    pub fn secondary(&self) -> &S {
        &self.secondary
    }

    /// The record's payload.
    pub fn data(&self) -> &D {
        &self.data
    }
}

/// A key clone plus the position of its record in the store. Postings
/// order and equate on the key alone so the trees sort records by key,
/// while the position rides along to reach the full record afterwards.
#[derive(Debug, Clone)]
struct Posting<K> {
    key: K,
    slot: usize,
}

impl<K: Ord> Ord for Posting<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl<K: Ord> PartialOrd for Posting<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> PartialEq for Posting<K> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<K: Ord> Eq for Posting<K> {}

impl<K: fmt::Display> fmt::Display for Posting<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.key.fmt(f)
    }
}

/// A record store searchable by two keys at once.
///
/// `P` and `S` are the two key types, `D` the payload. Adding a record
/// appends it to the store and inserts one posting per key tree;
/// duplicate keys are allowed, and lookups on a duplicated key return
/// the record added first.
#[derive(Debug, Clone)]
pub struct DualKeyIndex<P, S, D> {
    records: Vec<Record<P, S, D>>,
    by_primary: BinarySearchTree<Posting<P>>,
    by_secondary: BinarySearchTree<Posting<S>>,
}

impl<P, S, D> Default for DualKeyIndex<P, S, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P, S, D> DualKeyIndex<P, S, D> {
    /// Generates a new, empty index.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            by_primary: BinarySearchTree::new(),
            by_secondary: BinarySearchTree::new(),
        }
    }

    /// Adds one record and posts it under both of its keys. The record
    /// is kept even when either key is already present.
    pub fn add_record(&mut self, primary: P, secondary: S, data: D)
    where
        P: Ord + Clone,
        S: Ord + Clone,
    {
        let primary_key = primary.clone();
        let secondary_key = secondary.clone();
        // The record lands before its postings so a posting's slot always
        // points at a stored record, even when a key comparison panics
        // partway through an addition.
        let slot = self.records.len();
        self.records.push(Record {
            primary,
            secondary,
            data,
        });
        self.by_primary.insert(Posting {
            key: primary_key,
            slot,
        });
        self.by_secondary.insert(Posting {
            key: secondary_key,
            slot,
        });
    }

    /// The number of records in the store.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the index holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Finds the record with the given primary key, or `None` if no
    /// record has it. When several records share the key, the one added
    /// first is returned.
    ///
    /// The key can be queried through any borrowed form, so a
    /// `DualKeyIndex<String, _, _>` is searchable with a plain `&str`.
    pub fn find_by_primary<Q>(&self, key: &Q) -> Option<&Record<P, S, D>>
    where
        P: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.by_primary
            .get_by(|posting| posting.key.borrow().cmp(key))
            .map(|posting| self.record(posting.slot))
    }

    /// Finds the record with the given secondary key. See
    /// [`find_by_primary`](Self::find_by_primary).
    pub fn find_by_secondary<Q>(&self, key: &Q) -> Option<&Record<P, S, D>>
    where
        S: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.by_secondary
            .get_by(|posting| posting.key.borrow().cmp(key))
            .map(|posting| self.record(posting.slot))
    }

    /// Iterates every record ordered by primary key, records sharing a
    /// key appearing in the order they were added.
    pub fn records_by_primary(&self) -> impl Iterator<Item = &Record<P, S, D>> + '_ {
        self.by_primary
            .in_order()
            .map(move |posting| self.record(posting.slot))
    }

    /// Iterates every record ordered by secondary key. See
    /// [`records_by_primary`](Self::records_by_primary).
    pub fn records_by_secondary(&self) -> impl Iterator<Item = &Record<P, S, D>> + '_ {
        self.by_secondary
            .in_order()
            .map(move |posting| self.record(posting.slot))
    }

    /// Renders the primary-key tree as a 2D diagram of its keys, showing
    /// the shape this index's insertion order produced.
    pub fn primary_diagram(&self) -> String
    where
        P: fmt::Display,
    {
        self.by_primary.diagram()
    }

    /// Renders the secondary-key tree. See
    /// [`primary_diagram`](Self::primary_diagram).
    pub fn secondary_diagram(&self) -> String
    where
        S: fmt::Display,
    {
        self.by_secondary.diagram()
    }

    fn record(&self, slot: usize) -> &Record<P, S, D> {
        // add_record pushes the record before posting its keys, and
        // records are never removed, so every posted slot indexes a live
        // record.
        &self.records[slot]
    }
}
