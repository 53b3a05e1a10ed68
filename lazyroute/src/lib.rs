//! # lazyroute - Client-Side Navigation with On-Demand Views
//!
//! `lazyroute` maps URL paths to view components for a single-page
//! application and decides whether a view ships with the main bundle or is
//! fetched the first time its route is visited.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use lazyroute::prelude::*;
//!
//! let table = RouteTable::register([
//!     RouteEntry::direct("/", "home", View::Home),
//!     RouteEntry::deferred("/reports", "reports", || async {
//!         fetch_reports_chunk().await
//!     }),
//! ])?;
//!
//! let navigator = Navigator::builder(table).renderer(dom_renderer).build()?;
//!
//! // Committed before `navigate` returns.
//! navigator.navigate("/");
//!
//! // Pending until the chunk arrives; a later navigation would supersede it.
//! let outcome = navigator.navigate("/reports").await;
//! ```
//!
//! ## Features
//!
//! - `matchit` (default): `{param}` and `{*rest}` path patterns
//! - `tracing`: navigation events through `tracing`
//! - `timeout`: [`loaders::TimeoutLoader`] on the tokio timer

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub mod app;

pub use lazyroute_core::{
    // Error types
    BoxError,
    ConfigError,
    // Collaborators
    Fallback,
    // Loading
    FnLoader,
    History,
    HrefError,
    LazyrouteError,
    LoadError,
    LoadTimeout,
    Loader,
    // Views
    Params,
    Renderer,
    ResolvedView,
    // Routes
    Deferred,
    Resolver,
    RouteEntry,
    path,
};

// Route table
pub use lazyroute_std::table::{RouteMatch, RouteResult, RouteTable, RouteTableBuilder};

// Navigation
pub use lazyroute_std::navigator::{
    Attempt, NavigationOutcome, NavigationPhase, Navigator, NavigatorBuilder, NavigatorConfig,
    PendingLoad, Spawner, UnmatchedPolicy,
};

/// History implementations.
pub mod history {
    pub use lazyroute_std::history::MemoryHistory;
}

/// Fallback implementations.
pub mod fallback {
    pub use lazyroute_std::fallback::LoggingFallback;
}

/// Loader decorators.
pub mod loaders {
    #![allow(clippy::wildcard_imports)]
    pub use lazyroute_std::loaders::*;
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use lazyroute_std::testing::*;
}

/// Prelude module - common imports for lazyroute.
///
/// # Usage
///
/// ```rust,ignore
/// use lazyroute::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Attempt, ConfigError, Fallback, FnLoader, History, Loader, NavigationOutcome,
        NavigationPhase, Navigator, Params, Renderer, ResolvedView, Resolver, RouteEntry,
        RouteTable, UnmatchedPolicy,
    };
}
