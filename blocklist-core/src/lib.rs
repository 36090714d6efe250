#![no_std]

#![deny(missing_docs)]

//! An ordered registry of memory blocks.
//!
//! blocklist-core provides the bookkeeping structure a memory manager uses to track its allocated or free regions:
//! -   `BlockList`, a singly-linked list of blocks, supporting positional insertion, O(1) insertion at both ends, lookup
//!     by position or by identity, and removal by node, position, or identity.
//! -   `MemoryBlock`, a plain descriptor of a region of memory.
//! -   `Identity`, the trait by which blocks are compared.
//!
//! The list is intended for single-threaded, single-owner use, and performs no internal synchronization.

extern crate alloc;

mod api;
mod internals;

pub use api::*;
