//! The internals of blocklist-core.
//!
//! The internals provide the storage of the nodes: a generational Arena, and the Node it holds.

pub(crate) mod arena;
pub(crate) mod node;
