//! Timeout Loader - Time-limited loading wrapper.
//!
//! **Note**: This module requires the `tokio` runtime's timer.

use futures::future::{BoxFuture, FutureExt};
use lazyroute_core::{BoxError, LoadTimeout, Loader};
use std::time::Duration;

/// A [`Loader`] that fails with [`LoadTimeout`] if the inner load does not
/// settle within the configured duration.
///
/// # Example
///
/// ```rust,ignore
/// use lazyroute::loaders::TimeoutLoader;
///
/// // Give the chunk fetch five seconds
/// let loader = TimeoutLoader::secs(FnLoader::new(fetch_settings_chunk), 5);
/// let entry = RouteEntry::lazy("/settings", "settings", loader);
/// ```
pub struct TimeoutLoader<L> {
    inner: L,
    duration: Duration,
}

impl<L> TimeoutLoader<L> {
    /// Create a new `TimeoutLoader` wrapping the given loader.
    pub fn new(inner: L, duration: Duration) -> Self {
        Self { inner, duration }
    }

    /// Create a `TimeoutLoader` with the timeout specified in seconds.
    pub fn secs(inner: L, seconds: u64) -> Self {
        Self::new(inner, Duration::from_secs(seconds))
    }

    /// Create a `TimeoutLoader` with the timeout specified in milliseconds.
    pub fn millis(inner: L, millis: u64) -> Self {
        Self::new(inner, Duration::from_millis(millis))
    }

    /// Get the configured timeout duration.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Get a reference to the inner loader.
    pub fn inner(&self) -> &L {
        &self.inner
    }
}

impl<C, L> Loader<C> for TimeoutLoader<L>
where
    C: Send + 'static,
    L: Loader<C>,
{
    fn load(&self) -> BoxFuture<'static, Result<C, BoxError>> {
        let duration = self.duration;
        let load = self.inner.load();
        async move {
            match tokio::time::timeout(duration, load).await {
                Ok(result) => result,
                Err(_) => Err(Box::new(LoadTimeout(duration)) as BoxError),
            }
        }
        .boxed()
    }
}
