//! The API of blocklist-core.

mod block_list;
mod configuration;
mod error;
mod identity;
mod iter;
mod memory_block;
mod node_ref;

pub use block_list::BlockList;
pub use configuration::{Configuration, DefaultConfiguration};
pub use error::ListError;
pub use identity::Identity;
pub use iter::{Cursor, Iter};
pub use memory_block::MemoryBlock;
pub use node_ref::NodeRef;
