//! Identity of blocks.
//!
//! A `BlockList` never inspects the content of its blocks: lookups and removals by block compare handles by identity,
//! so that two distinct descriptors holding equal values are never confused for one another.

use core::ptr::{self, NonNull};

use alloc::{rc::Rc, sync::Arc};

/// Identity
///
/// Implemented by handles whose identity is the address of what they point to.
pub trait Identity {
    /// Returns whether `self` and `other` designate the very same block.
    fn is_same(&self, other: &Self) -> bool;
}

impl<'a, T: ?Sized> Identity for &'a T {
    fn is_same(&self, other: &Self) -> bool { ptr::eq(*self, *other) }
}

impl<T: ?Sized> Identity for NonNull<T> {
    fn is_same(&self, other: &Self) -> bool { self == other }
}

impl<T: ?Sized> Identity for Rc<T> {
    fn is_same(&self, other: &Self) -> bool { Rc::ptr_eq(self, other) }
}

impl<T: ?Sized> Identity for Arc<T> {
    fn is_same(&self, other: &Self) -> bool { Arc::ptr_eq(self, other) }
}

// mod tests
