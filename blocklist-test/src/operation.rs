//! Operations on a list of blocks.

use proptest::prelude::*;

/// Operation.
///
/// Blocks are designated by their identifier, an index within a pool of distinct blocks owned by the test.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Operation {
    /// Appends the block.
    PushBack(usize),
    /// Prepends the block.
    PushFront(usize),
    /// Inserts the block (second) at the index (first).
    InsertAt(usize, usize),
    /// Looks up the node at the index.
    NodeAt(usize),
    /// Looks up the block at the index.
    BlockAt(usize),
    /// Looks up the index of the block.
    IndexOf(usize),
    /// Removes the node at the index, by reference.
    ///
    /// If there is no such node, a reference which does not belong to the list is used instead.
    Remove(usize),
    /// Removes the node at the index, by position.
    RemoveAt(usize),
    /// Removes the first node holding the block.
    RemoveBlock(usize),
    /// Removes the first node.
    PopFront,
    /// Removes all nodes.
    Clear,
}

/// Returns a strategy generating a single operation over a pool of `pool` blocks, with indexes up to `index`.
///
/// Insertions are favored, so that lists grow over a sequence.
///
/// #   Panics
///
/// -   If `pool` is 0.
pub fn any_operation(pool: usize, index: usize) -> impl Strategy<Value = Operation> {
    assert!(pool > 0);

    let block = 0..pool;
    let index = 0..=index;

    prop_oneof![
        4 => block.clone().prop_map(Operation::PushBack),
        3 => block.clone().prop_map(Operation::PushFront),
        3 => (index.clone(), block.clone()).prop_map(|(i, b)| Operation::InsertAt(i, b)),
        1 => index.clone().prop_map(Operation::NodeAt),
        1 => index.clone().prop_map(Operation::BlockAt),
        1 => block.clone().prop_map(Operation::IndexOf),
        2 => index.clone().prop_map(Operation::Remove),
        2 => index.prop_map(Operation::RemoveAt),
        2 => block.prop_map(Operation::RemoveBlock),
        1 => Just(Operation::PopFront),
        1 => Just(Operation::Clear),
    ]
}

/// Returns a strategy generating up to `length` operations, see `any_operation`.
pub fn operations(pool: usize, index: usize, length: usize) -> impl Strategy<Value = Vec<Operation>> {
    prop::collection::vec(any_operation(pool, index), 0..=length)
}
