//! Error types for lazyroute.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`LazyrouteError`] - Top-level error type for all lazyroute operations
//! - [`ConfigError`] - Broken route configuration, fatal at startup
//! - [`LoadError`] - A deferred view failed to load
//! - [`HrefError`] - A path could not be built for a named route

use std::time::Duration;
use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all lazyroute operations.
#[derive(Error, Debug)]
pub enum LazyrouteError {
    /// The route configuration is invalid.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A deferred view failed to load.
    #[error("load error: {0}")]
    Load(#[from] LoadError),

    /// A path could not be built for a named route.
    #[error("href error: {0}")]
    Href(#[from] HrefError),

    /// A custom error occurred.
    #[error(transparent)]
    Custom(BoxError),
}

/// Errors raised while building a route table or navigator.
///
/// These indicate a broken deployment rather than a runtime condition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Two entries declare the same path.
    #[error("duplicate route path: {0}")]
    DuplicatePath(String),

    /// Two entries declare the same name.
    #[error("duplicate route name: {0}")]
    DuplicateName(String),

    /// A path pattern could not be parsed.
    #[error("invalid route pattern `{path}`: {reason}")]
    InvalidPattern {
        /// The offending pattern.
        path: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A policy refers to a route name that is not registered.
    #[error("unknown route name: {0}")]
    UnknownRoute(String),
}

/// A deferred view could not be produced.
#[derive(Error, Debug)]
#[error("failed to load view for route `{route}`")]
pub struct LoadError {
    route: String,
    #[source]
    source: BoxError,
}

impl LoadError {
    /// Create a load error for the given route name.
    pub fn new(route: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self {
            route: route.into(),
            source: source.into(),
        }
    }

    /// Name of the route whose view failed to load.
    pub fn route(&self) -> &str {
        &self.route
    }

    /// The underlying loader failure.
    pub fn cause(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        self.source.as_ref()
    }
}

/// A loader did not settle in time.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("view load timed out after {0:?}")]
pub struct LoadTimeout(pub Duration);

/// Errors that can occur while building a path for a named route.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HrefError {
    /// No route carries the requested name.
    #[error("no route named `{0}`")]
    UnknownRoute(String),

    /// A parameter the pattern needs was not supplied.
    #[error("route `{route}` requires parameter `{param}`")]
    MissingParam {
        /// The route name.
        route: String,
        /// The missing parameter.
        param: String,
    },
}

// Convenience conversions
impl From<BoxError> for LazyrouteError {
    fn from(err: BoxError) -> Self {
        LazyrouteError::Custom(err)
    }
}
