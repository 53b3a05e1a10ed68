//! # Deferred Loading
//!
//! A [`Loader`] produces a view component asynchronously, the way a code-split
//! chunk is fetched the first time its route is visited.
//!
//! Loaders return `'static` futures so a pending navigation can own its load
//! and be polled from any executor, independently of the route table that
//! declared it.
//!
//! ```rust,ignore
//! let loader = FnLoader::new(|| async {
//!     let chunk = fetch_chunk("settings").await?;
//!     Ok::<_, ChunkError>(chunk.view())
//! });
//! ```

use crate::error::BoxError;
use futures::future::{BoxFuture, FutureExt};
use std::future::Future;

/// Asynchronous producer of a view component.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot load views of type `{C}`",
    label = "missing `Loader` implementation",
    note = "Wrap a closure with `FnLoader::new` or implement `Loader<{C}>`."
)]
pub trait Loader<C>: Send + Sync + 'static {
    /// Start loading the component.
    ///
    /// Each call starts a fresh load; completion is observed exactly once by
    /// whoever polls the returned future.
    fn load(&self) -> BoxFuture<'static, Result<C, BoxError>>;
}

/// Adapts a closure returning a future into a [`Loader`].
#[derive(Clone)]
pub struct FnLoader<F> {
    func: F,
}

impl<F> FnLoader<F> {
    /// Wrap a loading closure.
    pub const fn new(func: F) -> Self {
        Self { func }
    }
}

impl<C, E, F, Fut> Loader<C> for FnLoader<F>
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<C, E>> + Send + 'static,
    E: Into<BoxError>,
{
    fn load(&self) -> BoxFuture<'static, Result<C, BoxError>> {
        (self.func)().map(|res| res.map_err(Into::into)).boxed()
    }
}

impl<C, L> Loader<C> for std::sync::Arc<L>
where
    L: Loader<C> + ?Sized,
{
    fn load(&self) -> BoxFuture<'static, Result<C, BoxError>> {
        (**self).load()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    #[tokio::test]
    async fn test_fn_loader_invokes_closure_per_load() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let loader = FnLoader::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            async { Ok::<_, std::io::Error>("view") }
        });

        assert_eq!(loader.load().await.unwrap(), "view");
        assert_eq!(loader.load().await.unwrap(), "view");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_fn_loader_boxes_errors() {
        let loader = FnLoader::new(|| async {
            Err::<&str, _>(std::io::Error::other("chunk unavailable"))
        });

        let err = loader.load().await.unwrap_err();
        assert_eq!(err.to_string(), "chunk unavailable");
    }

    #[tokio::test]
    async fn test_dyn_loader_through_arc() {
        let loader: Arc<dyn Loader<u8>> = Arc::new(FnLoader::new(|| async { Ok::<_, BoxError>(7) }));
        assert_eq!(loader.load().await.unwrap(), 7);
    }
}
