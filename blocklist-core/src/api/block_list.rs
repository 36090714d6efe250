//! Block List.
//!
//! A BlockList is an ordered registry of blocks, as used by a memory manager to track its allocated or free regions.
//!
//! The list is singly-linked: each node links to its successor, and the list records its head, its tail and its length.
//! Both ends support insertion in O(1); any other position requires walking from the head.
//!
//! The nodes are stored in a generational Arena owned by the list, rather than individually allocated. As a result:
//!
//! -   A `NodeRef` is a plain index, checked for membership in O(1), and never dangles.
//! -   Dropping a list of any length does not recurse.

use core::{fmt, iter::FromIterator, marker::PhantomData};

use tracing::{debug, trace};

use crate::internals::{arena::{Arena, SlotIndex}, node::Node};

use super::{Configuration, Cursor, DefaultConfiguration, Identity, Iter, ListError, NodeRef};
use super::node_ref::ListId;

/// BlockList.
///
/// An ordered, singly-linked, list of blocks.
///
/// #   Invariants
///
/// -   `len == 0` if and only if there is neither head nor tail.
/// -   Following the successor links from the head `len - 1` times reaches the tail, whose successor is none.
/// -   Every node is reachable exactly once from the head.
///
/// All operations either succeed, or fail without modifying the list.
pub struct BlockList<B, C = DefaultConfiguration> {
    id: ListId,
    nodes: Arena<Node<B>>,
    head: Option<SlotIndex>,
    tail: Option<SlotIndex>,
    len: usize,
    //  Number of structural modifications, used by cursors to detect interleaved mutations.
    modifications: u64,
    _configuration: PhantomData<fn() -> C>,
}

impl<B, C> BlockList<B, C>
    where
        C: Configuration
{
    /// Creates an empty list, reserving `C::INITIAL_CAPACITY` nodes.
    pub fn new() -> Self { Self::with_capacity(C::INITIAL_CAPACITY) }

    /// Creates an empty list, reserving `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            id: ListId::next(),
            nodes: Arena::with_capacity(capacity),
            head: None,
            tail: None,
            len: 0,
            modifications: 0,
            _configuration: PhantomData,
        }
    }
}

impl<B, C> BlockList<B, C> {
    /// Returns the number of blocks in the list; O(1).
    pub fn len(&self) -> usize { self.len }

    /// Returns whether the list is empty.
    pub fn is_empty(&self) -> bool { self.len == 0 }

    /// Returns the number of nodes the list can hold without reallocating.
    pub fn capacity(&self) -> usize { self.nodes.capacity() }

    /// Returns the first node of the list, if any.
    pub fn first(&self) -> Option<NodeRef> { self.head.map(|slot| self.node_ref(slot)) }

    /// Returns the last node of the list, if any.
    pub fn last(&self) -> Option<NodeRef> { self.tail.map(|slot| self.node_ref(slot)) }

    /// Returns the node at `index`; O(index).
    ///
    /// An `index` equal to the length of the list designates the end of the list, and yields `None`.
    ///
    /// #   Errors
    ///
    /// -   `ListError::OutOfRange` if `index > len`.
    pub fn node_at(&self, index: usize) -> Result<Option<NodeRef>, ListError> {
        if index > self.len {
            return Err(self.out_of_range(index));
        }

        Ok(self.slot_at(index).map(|slot| self.node_ref(slot)))
    }

    /// Returns the block at `index`; O(index).
    ///
    /// #   Errors
    ///
    /// -   `ListError::OutOfRange` if `index >= len`.
    pub fn block_at(&self, index: usize) -> Result<&B, ListError> {
        if index >= self.len {
            return Err(self.out_of_range(index));
        }

        self.slot_at(index)
            .and_then(|slot| self.nodes.get(slot))
            .map(Node::block)
            .ok_or_else(|| self.not_found())
    }

    /// Returns the block held by `node`; O(1).
    ///
    /// #   Errors
    ///
    /// -   `ListError::NotFound` if `node` does not belong to this list, or was removed.
    pub fn block(&self, node: NodeRef) -> Result<&B, ListError> {
        let slot = self.resolve(node)?;

        self.nodes.get(slot).map(Node::block).ok_or_else(|| self.not_found())
    }

    /// Returns the successor of `node`, or `None` if it is the last node; O(1).
    ///
    /// #   Errors
    ///
    /// -   `ListError::NotFound` if `node` does not belong to this list, or was removed.
    pub fn successor(&self, node: NodeRef) -> Result<Option<NodeRef>, ListError> {
        let slot = self.resolve(node)?;

        Ok(self.successor_of(slot).map(|next| self.node_ref(next)))
    }

    /// Inserts `block` so that it becomes the element at `index`, shifting subsequent elements.
    ///
    /// O(1) if `index` is either 0 or the length of the list, O(index) otherwise.
    ///
    /// Returns the node holding `block`.
    ///
    /// #   Errors
    ///
    /// -   `ListError::OutOfRange` if `index > len`; `block` is dropped.
    pub fn insert_at(&mut self, index: usize, block: B) -> Result<NodeRef, ListError> {
        if index > self.len {
            return Err(self.out_of_range(index));
        }

        if index == 0 {
            return Ok(self.push_front(block));
        }

        if index == self.len {
            return Ok(self.push_back(block));
        }

        let predecessor = self.slot_at(index - 1).ok_or_else(|| self.not_found())?;
        let next = self.successor_of(predecessor);

        let slot = self.nodes.insert(Node::new(block, next));
        self.link(predecessor, Some(slot));

        self.grow();

        trace!(index, len = self.len, "inserted block");

        Ok(self.node_ref(slot))
    }

    /// Appends `block` at the end of the list; O(1).
    ///
    /// Returns the node holding `block`.
    pub fn push_back(&mut self, block: B) -> NodeRef {
        let slot = self.nodes.insert(Node::new(block, None));

        match self.tail {
            None => self.head = Some(slot),
            Some(tail) => self.link(tail, Some(slot)),
        }

        self.tail = Some(slot);
        self.grow();

        trace!(len = self.len, "pushed block at the back");

        self.node_ref(slot)
    }

    /// Prepends `block` at the start of the list; O(1).
    ///
    /// Returns the node holding `block`.
    pub fn push_front(&mut self, block: B) -> NodeRef {
        let slot = self.nodes.insert(Node::new(block, self.head));

        if self.tail.is_none() {
            self.tail = Some(slot);
        }

        self.head = Some(slot);
        self.grow();

        trace!(len = self.len, "pushed block at the front");

        self.node_ref(slot)
    }

    /// Removes the node `node`, and returns its block.
    ///
    /// O(1) if `node` is the first node, O(len) otherwise, as its predecessor must be found.
    ///
    /// #   Errors
    ///
    /// -   `ListError::NotFound` if `node` does not belong to this list, or was removed.
    pub fn remove(&mut self, node: NodeRef) -> Result<B, ListError> {
        let slot = self.resolve(node)?;

        let predecessor = if self.head == Some(slot) { None } else { Some(self.predecessor_of(slot)?) };

        self.unlink(predecessor, slot)
    }

    /// Removes the node at `index`, and returns its block; O(index).
    ///
    /// #   Errors
    ///
    /// -   `ListError::OutOfRange` if `index >= len`.
    pub fn remove_at(&mut self, index: usize) -> Result<B, ListError> {
        if index >= self.len {
            return Err(self.out_of_range(index));
        }

        let predecessor = match index {
            0 => None,
            _ => Some(self.slot_at(index - 1).ok_or_else(|| self.not_found())?),
        };

        let slot = match predecessor {
            None => self.head,
            Some(predecessor) => self.successor_of(predecessor),
        };

        let slot = slot.ok_or_else(|| self.not_found())?;

        self.unlink(predecessor, slot)
    }

    /// Removes the first node, if any, and returns its block; O(1).
    pub fn pop_front(&mut self) -> Option<B> {
        let head = self.head?;

        self.unlink(None, head).ok()
    }

    /// Removes all nodes.
    ///
    /// All outstanding `NodeRef` to this list become stale.
    pub fn clear(&mut self) {
        self.nodes.clear();

        self.head = None;
        self.tail = None;
        self.len = 0;
        self.modifications = self.modifications.wrapping_add(1);

        trace!("cleared list");
    }

    /// Returns an iterator over the blocks, from first to last.
    pub fn iter(&self) -> Iter<'_, B, C> { Iter::new(self) }

    /// Returns a cursor anchored at the first node.
    ///
    /// Unlike `Iter`, a `Cursor` does not borrow the list.
    pub fn cursor(&self) -> Cursor { Cursor::new(self.id, self.head, self.modifications) }

    pub(crate) fn id(&self) -> ListId { self.id }

    pub(crate) fn head_slot(&self) -> Option<SlotIndex> { self.head }

    pub(crate) fn modifications(&self) -> u64 { self.modifications }

    pub(crate) fn node(&self, slot: SlotIndex) -> Option<&Node<B>> { self.nodes.get(slot) }
}

impl<B, C> BlockList<B, C>
    where
        B: Identity
{
    /// Returns the index of the first node holding `block`, compared by identity; O(len).
    pub fn index_of(&self, block: &B) -> Option<usize> { self.iter().position(|candidate| candidate.is_same(block)) }

    /// Returns whether a node holds `block`, compared by identity; O(len).
    pub fn contains(&self, block: &B) -> bool { self.index_of(block).is_some() }

    /// Removes the first node holding `block`, compared by identity, and returns its block; O(len).
    ///
    /// #   Errors
    ///
    /// -   `ListError::NotFound` if no node holds `block`.
    pub fn remove_block(&mut self, block: &B) -> Result<B, ListError> {
        let mut predecessor = None;
        let mut current = self.head;

        while let Some(slot) = current {
            let node = match self.nodes.get(slot) {
                Some(node) => node,
                None => break,
            };

            if node.block().is_same(block) {
                return self.unlink(predecessor, slot);
            }

            predecessor = Some(slot);
            current = node.next();
        }

        Err(self.not_found())
    }
}

impl<B, C> Default for BlockList<B, C>
    where
        C: Configuration
{
    fn default() -> Self { Self::new() }
}

impl<B, C> fmt::Debug for BlockList<B, C>
    where
        B: fmt::Debug
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.debug_list().entries(self.iter()).finish() }
}

impl<B, C> Extend<B> for BlockList<B, C> {
    fn extend<I>(&mut self, iter: I)
        where
            I: IntoIterator<Item = B>
    {
        for block in iter {
            self.push_back(block);
        }
    }
}

impl<B, C> FromIterator<B> for BlockList<B, C>
    where
        C: Configuration
{
    fn from_iter<I>(iter: I) -> Self
        where
            I: IntoIterator<Item = B>
    {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<'a, B, C> IntoIterator for &'a BlockList<B, C> {
    type Item = &'a B;
    type IntoIter = Iter<'a, B, C>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

//
//  Implementation
//

impl<B, C> BlockList<B, C> {
    fn node_ref(&self, slot: SlotIndex) -> NodeRef { NodeRef::new(self.id, slot) }

    //  Returns the slot of `node`, if it is a live node of this list.
    fn resolve(&self, node: NodeRef) -> Result<SlotIndex, ListError> {
        if node.list() != self.id || !self.nodes.contains(node.slot()) {
            return Err(self.not_found());
        }

        Ok(node.slot())
    }

    fn successor_of(&self, slot: SlotIndex) -> Option<SlotIndex> { self.nodes.get(slot).and_then(Node::next) }

    //  Returns the slot at `index`, or None if `index >= len`.
    fn slot_at(&self, index: usize) -> Option<SlotIndex> {
        let mut current = self.head;

        for _ in 0..index {
            current = self.successor_of(current?);
        }

        current
    }

    //  Returns the slot whose successor is `slot`.
    //
    //  The walk is bounded by the length of the list, even if `slot` is not part of the chain.
    fn predecessor_of(&self, slot: SlotIndex) -> Result<SlotIndex, ListError> {
        let mut current = self.head;

        for _ in 0..self.len {
            let candidate = match current {
                Some(candidate) => candidate,
                None => break,
            };

            let next = self.successor_of(candidate);

            if next == Some(slot) {
                return Ok(candidate);
            }

            current = next;
        }

        Err(self.not_found())
    }

    fn link(&mut self, slot: SlotIndex, next: Option<SlotIndex>) {
        let node = self.nodes.get_mut(slot);

        debug_assert!(node.is_some(), "Linking from a stale slot");

        if let Some(node) = node {
            node.set_next(next);
        }
    }

    //  Removes `slot`, whose predecessor is `predecessor`, from the chain.
    //
    //  -   Head: the head advances to its successor; the tail is cleared if the list becomes empty.
    //  -   Tail: the predecessor becomes the tail.
    //  -   Interior: the predecessor links to the successor.
    fn unlink(&mut self, predecessor: Option<SlotIndex>, slot: SlotIndex) -> Result<B, ListError> {
        debug_assert!(predecessor.map_or(self.head == Some(slot), |p| self.successor_of(p) == Some(slot)));

        let node = self.nodes.remove(slot).ok_or_else(|| self.not_found())?;
        let next = node.next();

        match predecessor {
            None => self.head = next,
            Some(predecessor) => self.link(predecessor, next),
        }

        if self.tail == Some(slot) {
            self.tail = predecessor;
        }

        self.len -= 1;
        self.modifications = self.modifications.wrapping_add(1);

        trace!(len = self.len, "removed block");

        Ok(node.into_block())
    }

    fn grow(&mut self) {
        self.len += 1;
        self.modifications = self.modifications.wrapping_add(1);

        debug_assert_eq!(self.len, self.nodes.len());
    }

    fn out_of_range(&self, index: usize) -> ListError {
        debug!(index, len = self.len, "index out of range");

        ListError::OutOfRange { index, len: self.len }
    }

    fn not_found(&self) -> ListError {
        debug!(len = self.len, "no matching node");

        ListError::NotFound
    }
}

// mod tests
