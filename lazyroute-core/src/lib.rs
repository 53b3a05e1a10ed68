//! # lazyroute-core
//!
//! Core traits and types for the lazyroute client-side navigator.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! view crates and platform bindings that don't need the full
//! `lazyroute-std` implementation.
//!
//! # Building Blocks
//!
//! ## Routes ([`RouteEntry`], [`Resolver`])
//!
//! A route associates a path pattern and a unique name with a resolver. The
//! resolver is an exhaustive choice between a component that ships with the
//! application ([`Resolver::Direct`]) and one fetched on first visit
//! ([`Resolver::Deferred`]).
//!
//! ## Loading ([`Loader`])
//!
//! Deferred components are produced by loaders returning `'static` futures,
//! so a pending navigation owns its load and can be polled from any executor.
//!
//! ## Views ([`ResolvedView`])
//!
//! The immutable result of a committed navigation: component, matched entry,
//! path and captured [`Params`].
//!
//! ## Collaborators ([`Renderer`], [`Fallback`], [`History`])
//!
//! The rendering engine, the not-found/error presentation and the session
//! history are external. The navigator talks to them only through these
//! traits.
//!
//! # Error Types
//!
//! - [`LazyrouteError`] - Top-level error type
//! - [`ConfigError`] - Invalid route configuration
//! - [`LoadError`] - Deferred load failures
//! - [`HrefError`] - Named route path building

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod collaborator;
mod error;
mod loader;
pub mod path;
mod route;
mod view;

// Re-exports
pub use collaborator::{Fallback, History, Renderer};
pub use error::{BoxError, ConfigError, HrefError, LazyrouteError, LoadError, LoadTimeout};
pub use loader::{FnLoader, Loader};
pub use route::{Deferred, Resolver, RouteEntry};
pub use view::{Params, ResolvedView};
