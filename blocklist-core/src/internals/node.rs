//! Node of a BlockList.

use super::arena::SlotIndex;

/// Node.
///
/// A Node owns exactly one block, and links to its successor within the same Arena, if any.
pub(crate) struct Node<B> {
    block: B,
    next: Option<SlotIndex>,
}

impl<B> Node<B> {
    /// Creates an instance, with the given successor.
    pub(crate) fn new(block: B, next: Option<SlotIndex>) -> Self { Self { block, next } }

    /// Returns a reference to the block.
    pub(crate) fn block(&self) -> &B { &self.block }

    /// Returns the block, consuming the node.
    pub(crate) fn into_block(self) -> B { self.block }

    /// Returns the successor, if any.
    pub(crate) fn next(&self) -> Option<SlotIndex> { self.next }

    /// Sets the successor.
    pub(crate) fn set_next(&mut self, next: Option<SlotIndex>) { self.next = next; }
}

// mod tests
