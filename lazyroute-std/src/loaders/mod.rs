//! Loader decorators.
//!
//! Wrappers that add loading policy around any
//! [`Loader`](lazyroute_core::Loader). The core defines no timeouts of its
//! own; a deployment that wants one wraps its chunk loaders here.

#[cfg(feature = "timeout")]
mod timeout;

#[cfg(feature = "timeout")]
pub use timeout::TimeoutLoader;
