//! Test utilities for blocklist.
//!
//! -   `Model`, a reference implementation of the positional semantics of a list of blocks, over a `Vec`.
//! -   `Operation`, `any_operation` and `operations`, to generate sequences of operations with proptest.
//! -   `init_tracing`, to route the events emitted during a test to the test output.

mod model;
mod operation;

pub use model::{Model, Outcome};
pub use operation::{Operation, any_operation, operations};

use tracing_subscriber::EnvFilter;

/// Installs a global subscriber, filtered by `RUST_LOG`, writing to the test output.
///
/// Only the first call has any effect.
pub fn init_tracing() {
    //  RUST_LOG=blocklist_core=trace
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_test_writer()
        .try_init();
}
