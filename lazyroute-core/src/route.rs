//! # Route Entries
//!
//! A [`RouteEntry`] associates a path pattern and a unique name with a
//! [`Resolver`], which is either the component itself or a [`Deferred`]
//! loader that fetches it on first visit.
//!
//! ```rust,ignore
//! let routes = vec![
//!     RouteEntry::direct("/", "home", View::Home),
//!     RouteEntry::deferred("/settings", "settings", || async {
//!         Ok::<_, ChunkError>(View::Settings)
//!     }),
//! ];
//! ```

use crate::{
    error::BoxError,
    loader::{FnLoader, Loader},
};
use futures::future::BoxFuture;
use std::{
    fmt,
    future::Future,
    sync::{Arc, OnceLock},
};

/// How a route obtains its component.
pub enum Resolver<C> {
    /// The component is bundled with the application and available immediately.
    Direct(C),
    /// The component is fetched the first time the route is visited.
    Deferred(Deferred<C>),
}

impl<C> Resolver<C> {
    /// Returns true if the component must be loaded before it can be rendered.
    pub fn is_deferred(&self) -> bool {
        matches!(self, Resolver::Deferred(_))
    }
}

impl<C> fmt::Debug for Resolver<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolver::Direct(_) => f.write_str("Direct"),
            Resolver::Deferred(deferred) => deferred.fmt(f),
        }
    }
}

/// A component produced by a [`Loader`] and kept once it has loaded.
///
/// Only a successful load is kept; a failure leaves the slot empty so the
/// next visit loads again.
pub struct Deferred<C> {
    loader: Arc<dyn Loader<C>>,
    loaded: OnceLock<C>,
}

impl<C: 'static> Deferred<C> {
    /// Create a deferred resolver around a loader.
    pub fn new<L: Loader<C>>(loader: L) -> Self {
        Self {
            loader: Arc::new(loader),
            loaded: OnceLock::new(),
        }
    }

    /// The component, if a previous load already produced it.
    pub fn loaded(&self) -> Option<&C> {
        self.loaded.get()
    }

    /// Start a fresh load.
    pub fn load(&self) -> BoxFuture<'static, Result<C, BoxError>> {
        self.loader.load()
    }

    /// Keep a loaded component. The first stored component wins.
    pub fn store(&self, component: C) -> &C {
        self.loaded.get_or_init(|| component)
    }
}

impl<C> fmt::Debug for Deferred<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deferred")
            .field("loaded", &self.loaded.get().is_some())
            .finish()
    }
}

/// A declared association between a path pattern and a view.
#[derive(Debug)]
pub struct RouteEntry<C> {
    path: String,
    name: String,
    resolver: Resolver<C>,
}

impl<C: 'static> RouteEntry<C> {
    /// Create an entry with an explicit resolver.
    pub fn new(path: impl Into<String>, name: impl Into<String>, resolver: Resolver<C>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            resolver,
        }
    }

    /// Create an entry whose component is available immediately.
    pub fn direct(path: impl Into<String>, name: impl Into<String>, component: C) -> Self {
        Self::new(path, name, Resolver::Direct(component))
    }

    /// Create an entry whose component is loaded by `loader` on first visit.
    pub fn lazy<L: Loader<C>>(path: impl Into<String>, name: impl Into<String>, loader: L) -> Self {
        Self::new(path, name, Resolver::Deferred(Deferred::new(loader)))
    }

    /// Create an entry whose component is loaded by an async closure on first visit.
    pub fn deferred<E, F, Fut>(path: impl Into<String>, name: impl Into<String>, func: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<C, E>> + Send + 'static,
        E: Into<BoxError>,
    {
        Self::lazy(path, name, FnLoader::new(func))
    }

    /// The declared path pattern.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The unique route name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// How the component is obtained.
    pub fn resolver(&self) -> &Resolver<C> {
        &self.resolver
    }
}
