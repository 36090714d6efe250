//! The configuration of blocklist-core.
//!
//! A Configuration is selected at compile-time, as a type parameter of `BlockList`, and tunes:
//!
//! -   The initial reservation of nodes, to avoid reallocations in lists of known typical size.
//! -   The strictness of `Cursor`, which may either fail on any modification of the list, or only on the removal of the
//!     node it is anchored on.

/// Configuration
///
/// The Configuration instance allows adjusting the behavior of a `BlockList`.
pub trait Configuration {
    /// The number of nodes reserved by `BlockList::new`.
    ///
    /// 0 means that an empty list does not allocate.
    const INITIAL_CAPACITY: usize;

    /// Whether a `Cursor` fails with `ListError::ConcurrentModification` as soon as the list is modified after its
    /// creation.
    ///
    /// If false, a `Cursor` keeps following the chain, and only fails if the node it is about to yield was removed.
    const CHECK_MODIFICATIONS: bool;
}

/// DefaultConfiguration
///
/// Lazily allocates, and fails fast on modifications during iteration.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultConfiguration;

impl Configuration for DefaultConfiguration {
    const INITIAL_CAPACITY: usize = 0;
    const CHECK_MODIFICATIONS: bool = true;
}
