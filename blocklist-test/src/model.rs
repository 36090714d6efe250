//! Reference model of a list of blocks.

use crate::Operation;

/// Outcome of an Operation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// The operation succeeded, and returned nothing of interest.
    Done,
    /// The operation returned, or removed, this block.
    Block(usize),
    /// The node lookup returned the node holding this block, or the end of the list.
    Node(Option<usize>),
    /// The index lookup returned this index, if any.
    Index(Option<usize>),
    /// The pop removed this block, if any.
    Popped(Option<usize>),
    /// The index was out of range for a list of length `len`.
    OutOfRange {
        /// Offending index.
        index: usize,
        /// Length of the list.
        len: usize,
    },
    /// No node matched.
    NotFound,
}

/// Model.
///
/// The sequence of block identifiers a list should hold.
#[derive(Clone, Debug, Default)]
pub struct Model {
    blocks: Vec<usize>,
}

impl Model {
    /// Creates an empty instance.
    pub fn new() -> Self { Self::default() }

    /// Returns the number of blocks.
    pub fn len(&self) -> usize { self.blocks.len() }

    /// Returns whether there is no block.
    pub fn is_empty(&self) -> bool { self.blocks.is_empty() }

    /// Returns the blocks, in order.
    pub fn blocks(&self) -> &[usize] { &self.blocks }

    /// Applies the operation, and returns its expected outcome.
    ///
    /// A failed operation leaves the model unchanged.
    pub fn apply(&mut self, operation: Operation) -> Outcome {
        let len = self.blocks.len();

        match operation {
            Operation::PushBack(block) => {
                self.blocks.push(block);
                Outcome::Done
            },
            Operation::PushFront(block) => {
                self.blocks.insert(0, block);
                Outcome::Done
            },
            Operation::InsertAt(index, _) if index > len => Outcome::OutOfRange { index, len },
            Operation::InsertAt(index, block) => {
                self.blocks.insert(index, block);
                Outcome::Done
            },
            Operation::NodeAt(index) if index > len => Outcome::OutOfRange { index, len },
            Operation::NodeAt(index) => Outcome::Node(self.blocks.get(index).copied()),
            Operation::BlockAt(index) if index >= len => Outcome::OutOfRange { index, len },
            Operation::BlockAt(index) => Outcome::Block(self.blocks[index]),
            Operation::IndexOf(block) => Outcome::Index(self.position(block)),
            Operation::Remove(index) if index >= len => Outcome::NotFound,
            Operation::Remove(index) => Outcome::Block(self.blocks.remove(index)),
            Operation::RemoveAt(index) if index >= len => Outcome::OutOfRange { index, len },
            Operation::RemoveAt(index) => Outcome::Block(self.blocks.remove(index)),
            Operation::RemoveBlock(block) => match self.position(block) {
                Some(index) => Outcome::Block(self.blocks.remove(index)),
                None => Outcome::NotFound,
            },
            Operation::PopFront if len == 0 => Outcome::Popped(None),
            Operation::PopFront => Outcome::Popped(Some(self.blocks.remove(0))),
            Operation::Clear => {
                self.blocks.clear();
                Outcome::Done
            },
        }
    }

    fn position(&self, block: usize) -> Option<usize> { self.blocks.iter().position(|b| *b == block) }
}

// mod tests
