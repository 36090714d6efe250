//! Memory Block descriptor.

use core::fmt;

/// MemoryBlock
///
/// Describes a contiguous region of memory: `length` bytes starting at `base_address`.
///
/// A descriptor is a plain value; it is tracked in a `BlockList` through a handle (`&MemoryBlock`, `Rc<MemoryBlock>`,
/// ...) which provides its identity.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct MemoryBlock {
    base_address: usize,
    length: usize,
}

impl MemoryBlock {
    /// Creates an instance.
    pub const fn new(base_address: usize, length: usize) -> Self { Self { base_address, length } }

    /// Returns the address of the first byte of the block.
    pub const fn base_address(&self) -> usize { self.base_address }

    /// Returns the number of bytes in the block.
    pub const fn length(&self) -> usize { self.length }

    /// Returns the address one past the last byte of the block, or None if it overflows.
    pub const fn end_address(&self) -> Option<usize> { self.base_address.checked_add(self.length) }

    /// Returns whether `address` lies within the block.
    pub fn contains_address(&self, address: usize) -> bool {
        address >= self.base_address && address - self.base_address < self.length
    }
}

impl fmt::Display for MemoryBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} , {})", self.base_address, self.length)
    }
}

// mod tests
