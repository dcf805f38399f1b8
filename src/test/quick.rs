use quickcheck::{Arbitrary, Gen};

/// An enum for the various kinds of "things" to do to
/// binary search trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<T> {
    /// Insert the value into the tree
    Insert(T),
    /// Look the value up in the tree
    Find(T),
    /// Empty the tree
    Clear,
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        // Insertion appears four times so generated runs grow trees
        // worth checking instead of clearing them as fast as they form.
        match g.choose(&[0, 0, 0, 0, 1, 2]).unwrap() {
            0 => Op::Insert(T::arbitrary(g)),
            1 => Op::Find(T::arbitrary(g)),
            2 => Op::Clear,
            _ => unreachable!(),
        }
    }
}
