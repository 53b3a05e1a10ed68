//! Testing utilities for lazyroute.
//!
//! This module provides collaborators that record what the navigator does,
//! and a loader whose completion the test controls.
//!
//! # Features
//!
//! - [`RecordingRenderer`]: records every committed view
//! - [`RecordingFallback`]: records unmatched paths and failed loads
//! - [`GatedLoader`]: a loader that settles only when its [`Gate`] is released

use futures::{
    channel::oneshot,
    future::{BoxFuture, FutureExt},
};
use lazyroute_core::{BoxError, Fallback, LoadError, Loader, Renderer, ResolvedView};
use std::sync::{
    Arc, Mutex, PoisonError,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Recording Renderer
// ============================================================================

/// A renderer that records every view it is handed.
///
/// # Example
///
/// ```rust,ignore
/// let renderer = RecordingRenderer::new();
/// let navigator = Navigator::builder(table).renderer(renderer.clone()).build()?;
///
/// navigator.navigate("/");
/// assert_eq!(renderer.names(), vec!["home"]);
/// ```
pub struct RecordingRenderer<C> {
    views: Arc<Mutex<Vec<Arc<ResolvedView<C>>>>>,
    clears: Arc<AtomicUsize>,
}

impl<C: 'static> RecordingRenderer<C> {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self {
            views: Arc::new(Mutex::new(Vec::new())),
            clears: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Every rendered view, oldest first.
    pub fn views(&self) -> Vec<Arc<ResolvedView<C>>> {
        self.views.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Route names of every rendered view, oldest first.
    pub fn names(&self) -> Vec<String> {
        self.views
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|view| view.name().to_string())
            .collect()
    }

    /// Number of rendered views.
    pub fn count(&self) -> usize {
        self.views.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Number of times the slot was cleared.
    pub fn clears(&self) -> usize {
        self.clears.load(Ordering::SeqCst)
    }
}

impl<C: 'static> Default for RecordingRenderer<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Clone for RecordingRenderer<C> {
    fn clone(&self) -> Self {
        Self {
            views: self.views.clone(),
            clears: self.clears.clone(),
        }
    }
}

impl<C: Send + Sync + 'static> Renderer<C> for RecordingRenderer<C> {
    fn render(&self, view: &Arc<ResolvedView<C>>) {
        self.views.lock().unwrap_or_else(PoisonError::into_inner).push(view.clone());
    }

    fn clear(&self) {
        self.clears.fetch_add(1, Ordering::SeqCst);
    }
}

// ============================================================================
// Recording Fallback
// ============================================================================

/// A fallback that records what it was told.
#[derive(Clone, Default)]
pub struct RecordingFallback {
    not_found: Arc<Mutex<Vec<String>>>,
    load_failed: Arc<Mutex<Vec<(String, String)>>>,
}

impl RecordingFallback {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Paths reported as unmatched.
    pub fn not_found_paths(&self) -> Vec<String> {
        self.not_found.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// `(path, route)` pairs reported as failed loads.
    pub fn load_failures(&self) -> Vec<(String, String)> {
        self.load_failed.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl Fallback for RecordingFallback {
    fn not_found(&self, path: &str) {
        self.not_found.lock().unwrap_or_else(PoisonError::into_inner).push(path.to_string());
    }

    fn load_failed(&self, path: &str, error: &LoadError) {
        self.load_failed
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((path.to_string(), error.route().to_string()));
    }
}

// ============================================================================
// Gated Loader
// ============================================================================

/// A loader that settles only when the test releases its [`Gate`].
///
/// Each call to [`gated`] covers a single load; a second load, or a load
/// whose gate was dropped, fails.
///
/// # Example
///
/// ```rust,ignore
/// let (loader, gate) = gated::<View>();
/// let entry = RouteEntry::lazy("/slow", "slow", loader);
///
/// let pending = navigator.navigate("/slow");
/// gate.open(View::Slow);
/// pending.await;
/// ```
pub struct GatedLoader<C> {
    receiver: Mutex<Option<oneshot::Receiver<Result<C, String>>>>,
    loads: AtomicUsize,
}

/// Releases a [`GatedLoader`].
pub struct Gate<C> {
    sender: oneshot::Sender<Result<C, String>>,
}

/// Create a gated loader and the gate that releases it.
pub fn gated<C>() -> (GatedLoader<C>, Gate<C>) {
    let (sender, receiver) = oneshot::channel();
    (
        GatedLoader {
            receiver: Mutex::new(Some(receiver)),
            loads: AtomicUsize::new(0),
        },
        Gate { sender },
    )
}

impl<C> GatedLoader<C> {
    /// Number of loads started.
    pub fn loads(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

impl<C> Gate<C> {
    /// Let the load succeed with `component`.
    pub fn open(self, component: C) {
        let _ = self.sender.send(Ok(component));
    }

    /// Let the load fail with `message`.
    pub fn fail(self, message: impl Into<String>) {
        let _ = self.sender.send(Err(message.into()));
    }
}

impl<C: Send + 'static> Loader<C> for GatedLoader<C> {
    fn load(&self) -> BoxFuture<'static, Result<C, BoxError>> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        let receiver = self.receiver.lock().unwrap_or_else(PoisonError::into_inner).take();
        async move {
            let Some(receiver) = receiver else {
                return Err::<C, BoxError>("gated loader already used".into());
            };
            match receiver.await {
                Ok(Ok(component)) => Ok(component),
                Ok(Err(message)) => Err(message.into()),
                Err(_) => Err("gate dropped".into()),
            }
        }
        .boxed()
    }
}
