//! A short tour of the crate: builds a few trees, runs every traversal,
//! then indexes a student roster by id and by course average at once.

use std::cmp::Ordering;
use std::fmt;

use searchtree::{BinarySearchTree, DualKeyIndex, Source};

/// A student's course average. Wraps the float so records can be ordered
/// by it: `total_cmp` gives a total order over every `f64`.
#[derive(Debug, Clone, Copy)]
struct Average(f64);

impl PartialEq for Average {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Average {}

impl PartialOrd for Average {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Average {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for Average {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

fn tree_walkthrough() {
    println!("== Ordered tree basics ==");

    let mut tree = BinarySearchTree::from_value(10);
    for value in [5, 15, 2, 7] {
        tree.insert(value);
    }

    println!("values in order: {}", tree);
    println!("pre-order:   {:?}", tree.pre_order().collect::<Vec<_>>());
    println!("post-order:  {:?}", tree.post_order().collect::<Vec<_>>());
    println!("level-order: {:?}", tree.level_order().collect::<Vec<_>>());
    println!("size {}, leaves {}", tree.size(), tree.count_leaves());
    println!(
        "contains 7? {}; contains 100? {}",
        tree.find(&7),
        tree.find(&100)
    );
    if let Some(minimum) = tree.find_minimum() {
        println!("minimum: {}", minimum);
    }
    print!("{}", tree.diagram());

    let tree = BinarySearchTree::from_source(Source::sequence(vec![20, 10, 30, 25, 5]));
    println!("sequence-built tree:");
    print!("{}", tree.diagram());

    let tree = BinarySearchTree::from_source(Source::unique_set(vec![3, 1, 3, 2]));
    println!("set-built tree holds {} unique values: {}", tree.size(), tree);

    let tree = BinarySearchTree::from_source(Source::keyed(vec![("a", 3), ("b", 1), ("c", 2)]));
    println!("keyed-built tree: {}", tree);

    let chain = BinarySearchTree::from_sequence(vec![1, 2, 3, 4]);
    println!(
        "ascending inserts degenerate into a chain: {}",
        chain.is_degenerate()
    );
}

fn roster_walkthrough() {
    println!("== Student roster, indexed two ways ==");

    let students = [
        ("E115", "Samir", 15.5),
        ("E104", "Khalid", 12.0),
        ("E120", "Loubna", 18.0),
        ("E101", "Aziz", 10.5),
        ("E118", "Redone", 16.7),
        ("E106", "Oussama", 14.2),
        ("E113", "Youssef", 19.5),
        ("E108", "Abir", 11.0),
        ("E117", "Khadija", 13.5),
        ("E102", "Rim", 17.8),
        ("E110", "Salim", 12.3),
        ("E112", "ahmed", 15.0),
        ("E105", "Zadi", 18.5),
        ("E114", "Karim", 14.0),
        ("E109", "Rabiaa", 16.0),
        ("E103", "Sanawsar", 10.0),
        ("E119", "soundouss", 13.0),
        ("E107", "Soulaimane", 19.0),
        ("E111", "Radi", 11.5),
        ("E116", "Ibrahim", 17.0),
    ];

    let mut roster = DualKeyIndex::new();
    for (id, name, average) in students {
        roster.add_record(id.to_string(), Average(average), name);
    }

    match roster.find_by_primary("E105") {
        Some(record) => println!(
            "E105 -> {} with average {}",
            record.data(),
            record.secondary()
        ),
        None => println!("E105 is not enrolled"),
    }

    match roster.find_by_secondary(&Average(19.5)) {
        Some(record) => println!("average 19.5 -> {} ({})", record.data(), record.primary()),
        None => println!("no student averages 19.5"),
    }

    println!("roster by id:");
    for record in roster.records_by_primary() {
        println!(
            "  {}  {:<12} {}",
            record.primary(),
            record.data(),
            record.secondary()
        );
    }

    println!("roster by average:");
    for record in roster.records_by_secondary() {
        println!(
            "  {:>4}  {} ({})",
            record.secondary(),
            record.data(),
            record.primary()
        );
    }

    println!("id tree:");
    print!("{}", roster.primary_diagram());
    println!("average tree:");
    print!("{}", roster.secondary_diagram());
}

fn main() {
    tree_walkthrough();
    println!();
    roster_walkthrough();
}
