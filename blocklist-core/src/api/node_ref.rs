//! Node References.
//!
//! A NodeRef designates a node of a specific `BlockList`. It remains valid until the node is removed; afterwards it is
//! stale, and any operation given it fails with `ListError::NotFound` rather than designating another node.

use core::sync::atomic::{AtomicUsize, Ordering};

use crate::internals::arena::SlotIndex;

/// NodeRef.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct NodeRef {
    list: ListId,
    slot: SlotIndex,
}

impl NodeRef {
    pub(crate) fn new(list: ListId, slot: SlotIndex) -> Self { Self { list, slot } }

    pub(crate) fn list(&self) -> ListId { self.list }

    pub(crate) fn slot(&self) -> SlotIndex { self.slot }
}

/// ListId.
///
/// Unique per `BlockList` instance, for the lifetime of the process.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub(crate) struct ListId(usize);

impl ListId {
    /// Returns a new, never returned before, identifier.
    pub(crate) fn next() -> Self {
        static NEXT: AtomicUsize = AtomicUsize::new(0);

        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

// mod tests
