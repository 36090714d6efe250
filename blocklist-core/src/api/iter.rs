//! Iteration over a BlockList.
//!
//! Two flavors are provided:
//!
//! -   `Iter`, which borrows the list, and therefore statically prevents any modification while alive.
//! -   `Cursor`, which does not borrow the list, and instead detects modifications dynamically.

use core::iter::FusedIterator;

use tracing::debug;

use crate::internals::arena::SlotIndex;

use super::{BlockList, Configuration, ListError};
use super::node_ref::ListId;

/// Iter.
///
/// Iterates over the blocks of a `BlockList`, from first to last.
pub struct Iter<'a, B, C> {
    list: &'a BlockList<B, C>,
    next: Option<SlotIndex>,
    remaining: usize,
}

impl<'a, B, C> Iter<'a, B, C> {
    pub(crate) fn new(list: &'a BlockList<B, C>) -> Self {
        Self { list, next: list.head_slot(), remaining: list.len() }
    }
}

impl<'a, B, C> Clone for Iter<'a, B, C> {
    fn clone(&self) -> Self { Self { list: self.list, next: self.next, remaining: self.remaining } }
}

impl<'a, B, C> Iterator for Iter<'a, B, C> {
    type Item = &'a B;

    fn next(&mut self) -> Option<&'a B> {
        if self.remaining == 0 {
            return None;
        }

        let node = self.list.node(self.next?)?;

        self.next = node.next();
        self.remaining -= 1;

        Some(node.block())
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.remaining, Some(self.remaining)) }
}

impl<'a, B, C> ExactSizeIterator for Iter<'a, B, C> {}

impl<'a, B, C> FusedIterator for Iter<'a, B, C> {}

/// Cursor.
///
/// Iterates over the blocks of a `BlockList`, from first to last, without borrowing it between steps.
///
/// A Cursor is tied to the list which created it. Whether modifications of the list between steps are tolerated
/// depends on `Configuration::CHECK_MODIFICATIONS`:
///
/// -   If true, any structural modification of the list after the creation of the cursor is reported.
/// -   If false, the cursor follows the chain from the node it is anchored on, and only reports the removal of that node.
#[derive(Clone, Debug)]
pub struct Cursor {
    list: ListId,
    next: Option<SlotIndex>,
    modifications: u64,
}

impl Cursor {
    pub(crate) fn new(list: ListId, next: Option<SlotIndex>, modifications: u64) -> Self {
        Self { list, next, modifications }
    }

    /// Returns whether a call to `next` would yield a block.
    pub fn has_next<B, C>(&self, list: &BlockList<B, C>) -> bool
        where
            C: Configuration
    {
        self.check(list).is_ok() && self.next.map_or(false, |slot| list.node(slot).is_some())
    }

    /// Returns the next block, if any, and advances.
    ///
    /// #   Errors
    ///
    /// -   `ListError::NotFound` if `list` is not the list which created the cursor.
    /// -   `ListError::ConcurrentModification` if the list was modified in a way the configuration does not tolerate.
    pub fn next<'a, B, C>(&mut self, list: &'a BlockList<B, C>) -> Result<Option<&'a B>, ListError>
        where
            C: Configuration
    {
        self.check(list)?;

        let slot = match self.next {
            Some(slot) => slot,
            None => return Ok(None),
        };

        let node = match list.node(slot) {
            Some(node) => node,
            None => {
                debug!("cursor anchored on a removed node");
                return Err(ListError::ConcurrentModification);
            },
        };

        self.next = node.next();

        Ok(Some(node.block()))
    }

    fn check<B, C>(&self, list: &BlockList<B, C>) -> Result<(), ListError>
        where
            C: Configuration
    {
        if self.list != list.id() {
            debug!("cursor used with another list");
            return Err(ListError::NotFound);
        }

        if C::CHECK_MODIFICATIONS && self.modifications != list.modifications() {
            debug!(expected = self.modifications, actual = list.modifications(), "list modified during iteration");
            return Err(ListError::ConcurrentModification);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {

use alloc::vec::Vec;

use super::*;

struct Lenient;

impl Configuration for Lenient {
    const INITIAL_CAPACITY: usize = 0;
    const CHECK_MODIFICATIONS: bool = false;
}

#[test]
fn iter_order() {
    let list: BlockList<u32> = [1, 2, 3].iter().copied().collect();

    let iter = list.iter();
    assert_eq!(3, iter.len());

    let blocks: Vec<_> = iter.copied().collect();
    assert_eq!(alloc::vec![1, 2, 3], blocks);
}

#[test]
fn iter_restartable() {
    let list: BlockList<u32> = [1, 2, 3].iter().copied().collect();

    let first: Vec<_> = list.iter().collect();
    let second: Vec<_> = (&list).into_iter().collect();

    assert_eq!(first, second);
}

#[test]
fn iter_independent() {
    let list: BlockList<u32> = [1, 2, 3].iter().copied().collect();

    let mut a = list.iter();
    a.next();

    let mut b = a.clone();

    assert_eq!(Some(&2), a.next());
    assert_eq!(Some(&3), a.next());
    assert_eq!(None, a.next());
    assert_eq!(None, a.next());

    assert_eq!(Some(&2), b.next());
    assert_eq!(Some(&1), list.iter().next());
}

#[test]
fn iter_empty() {
    let list = BlockList::<u32>::new();

    assert_eq!(None, list.iter().next());
    assert_eq!((0, Some(0)), list.iter().size_hint());
}

#[test]
fn cursor_order() {
    let list: BlockList<u32> = [1, 2].iter().copied().collect();

    let mut cursor = list.cursor();

    assert!(cursor.has_next(&list));
    assert_eq!(Ok(Some(&1)), cursor.next(&list));
    assert_eq!(Ok(Some(&2)), cursor.next(&list));

    assert!(!cursor.has_next(&list));
    assert_eq!(Ok(None), cursor.next(&list));
}

#[test]
fn cursor_other_list() {
    let list: BlockList<u32> = [1].iter().copied().collect();
    let other: BlockList<u32> = [1].iter().copied().collect();

    let mut cursor = list.cursor();

    assert!(!cursor.has_next(&other));
    assert_eq!(Err(ListError::NotFound), cursor.next(&other));
    assert_eq!(Ok(Some(&1)), cursor.next(&list));
}

#[test]
fn cursor_fail_fast() {
    let mut list: BlockList<u32> = [1, 2, 3].iter().copied().collect();

    let mut cursor = list.cursor();
    assert_eq!(Ok(Some(&1)), cursor.next(&list));

    list.push_back(4);

    assert!(!cursor.has_next(&list));
    assert_eq!(Err(ListError::ConcurrentModification), cursor.next(&list));

    //  A fresh cursor sees the new state.
    let blocks: Vec<_> = {
        let mut cursor = list.cursor();
        core::iter::from_fn(|| cursor.next(&list).unwrap()).copied().collect()
    };

    assert_eq!(alloc::vec![1, 2, 3, 4], blocks);
}

#[test]
fn cursor_lenient_follows_chain() {
    let mut list: BlockList<u32, Lenient> = [1, 2, 3].iter().copied().collect();

    let mut cursor = list.cursor();
    assert_eq!(Ok(Some(&1)), cursor.next(&list));

    //  Removing an already visited node, and appending, is tolerated.
    list.remove_at(0).unwrap();
    list.push_back(4);

    assert_eq!(Ok(Some(&2)), cursor.next(&list));
    assert_eq!(Ok(Some(&3)), cursor.next(&list));
    assert_eq!(Ok(Some(&4)), cursor.next(&list));
    assert_eq!(Ok(None), cursor.next(&list));
}

#[test]
fn cursor_lenient_anchor_removed() {
    let mut list: BlockList<u32, Lenient> = [1, 2, 3].iter().copied().collect();

    let mut cursor = list.cursor();
    assert_eq!(Ok(Some(&1)), cursor.next(&list));

    //  The cursor is anchored on 2.
    list.remove_at(1).unwrap();

    assert!(!cursor.has_next(&list));
    assert_eq!(Err(ListError::ConcurrentModification), cursor.next(&list));
}

} // mod tests
