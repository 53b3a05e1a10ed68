//! # lazyroute-std
//!
//! Standard implementations for the lazyroute client-side navigator.
//!
//! This crate provides:
//! - **Route table**: [`RouteTable`](table::RouteTable) and its builder
//! - **Navigator**: [`Navigator`](navigator::Navigator), last-navigation-wins
//!   dispatch with deferred loading
//! - **History**: [`MemoryHistory`](history::MemoryHistory)
//! - **Fallback**: [`LoggingFallback`](fallback::LoggingFallback)
//! - **Loader decorators**: `TimeoutLoader` (feature `timeout`)
//! - **Testing**: recording collaborators and a gated loader

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use lazyroute_core;

// Modules
pub mod fallback;
pub mod history;
pub mod loaders;
pub mod navigator;
pub mod table;
pub mod testing;
