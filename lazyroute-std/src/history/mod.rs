//! History implementations.
//!
//! Browser bindings implement [`History`](lazyroute_core::History) over the
//! platform's session history. [`MemoryHistory`] keeps the stack in memory
//! for tests, server-side rendering and headless use.

mod memory;

pub use memory::MemoryHistory;
