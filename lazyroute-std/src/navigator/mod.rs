//! # Navigator
//!
//! Mediates between a path change and a rendered view.
//!
//! [`Navigator::navigate`] matches the path and, when the component is
//! already available, commits the view to the [`Renderer`] before returning.
//! A deferred component comes back as a pending [`Attempt`]. With a
//! [`spawner`](NavigatorBuilder::spawner) the load runs in the background
//! and commits on its own; without one, awaiting the attempt drives it. The
//! rest of the application keeps running either way.
//!
//! # Last Navigation Wins
//!
//! Every attempt takes the next generation token. A deferred load only
//! commits if its token is still the latest when it settles; otherwise the
//! outcome is [`NavigationOutcome::Superseded`] and the component is dropped
//! (it is still kept in its route entry, so the next visit is immediate).
//!
//! ```rust,ignore
//! let navigator = Navigator::builder(table)
//!     .renderer(dom_renderer)
//!     .fallback(error_banner)
//!     .base("/app")
//!     .spawner(|load| { tokio::spawn(load); })
//!     .build()?;
//!
//! let slow = navigator.navigate("/socket-optimisation"); // Pending
//! let _ = navigator.navigate("/");                       // committed now
//! assert!(slow.await.is_superseded());
//! ```

mod attempt;

pub use attempt::{Attempt, NavigationOutcome, NavigationPhase, PendingLoad};

use crate::{fallback::LoggingFallback, table::RouteTable};
use attempt::LoadTask;
use futures::{
    channel::oneshot,
    future::{self, BoxFuture, FutureExt},
    stream::{self, StreamExt},
};
use lazyroute_core::{
    BoxError, ConfigError, Fallback, History, HrefError, LoadError, Params, Renderer, Resolver,
    ResolvedView, RouteEntry, path,
};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// What the navigator does when no route matches.
///
/// The fallback collaborator is told about every unmatched path regardless
/// of the policy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UnmatchedPolicy {
    /// Leave the current view displayed.
    #[default]
    KeepCurrent,
    /// Empty the view slot.
    Clear,
    /// Show the named route instead, as part of the same attempt.
    Redirect(String),
}

/// Runs a deferred load in the background, e.g. `tokio::spawn` or
/// `wasm_bindgen_futures::spawn_local`.
pub type Spawner = Arc<dyn Fn(BoxFuture<'static, ()>) + Send + Sync>;

/// Navigator settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigatorConfig {
    /// Base path the application is served under, e.g. `/app/`.
    pub base: String,
    /// Handling of paths no route matches.
    pub unmatched: UnmatchedPolicy,
}

/// Builder for [`Navigator`].
pub struct NavigatorBuilder<C> {
    table: Arc<RouteTable<C>>,
    renderer: Arc<dyn Renderer<C>>,
    fallback: Arc<dyn Fallback>,
    spawner: Option<Spawner>,
    config: NavigatorConfig,
}

impl<C> NavigatorBuilder<C>
where
    C: Clone + Send + Sync + 'static,
{
    /// Start from a route table, with no renderer and a [`LoggingFallback`].
    pub fn new(table: impl Into<Arc<RouteTable<C>>>) -> Self {
        Self {
            table: table.into(),
            renderer: Arc::new(()),
            fallback: Arc::new(LoggingFallback),
            spawner: None,
            config: NavigatorConfig::default(),
        }
    }

    /// Set the rendering collaborator.
    pub fn renderer<R: Renderer<C>>(mut self, renderer: R) -> Self {
        self.renderer = Arc::new(renderer);
        self
    }

    /// Set the fallback collaborator.
    pub fn fallback<F: Fallback>(mut self, fallback: F) -> Self {
        self.fallback = Arc::new(fallback);
        self
    }

    /// Run deferred loads on `spawner`.
    ///
    /// With a spawner, a navigation settles even if its [`Attempt`] is
    /// dropped. Without one, the caller must await pending attempts.
    ///
    /// ```rust,ignore
    /// let navigator = Navigator::builder(table)
    ///     .spawner(|load| {
    ///         tokio::spawn(load);
    ///     })
    ///     .build()?;
    /// ```
    pub fn spawner<S>(mut self, spawner: S) -> Self
    where
        S: Fn(BoxFuture<'static, ()>) + Send + Sync + 'static,
    {
        self.spawner = Some(Arc::new(spawner));
        self
    }

    /// Set the base path.
    pub fn base(mut self, base: impl Into<String>) -> Self {
        self.config.base = base.into();
        self
    }

    /// Set the unmatched-path policy.
    pub fn unmatched(mut self, policy: UnmatchedPolicy) -> Self {
        self.config.unmatched = policy;
        self
    }

    /// Replace all settings at once.
    pub fn config(mut self, config: NavigatorConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the navigator.
    ///
    /// Fails if the redirect target of the unmatched policy is not a
    /// registered route without parameters.
    pub fn build(self) -> Result<Navigator<C>, ConfigError> {
        let redirect = match &self.config.unmatched {
            UnmatchedPolicy::Redirect(name) => {
                let target = self
                    .table
                    .href(name, &Params::new())
                    .map_err(|_| ConfigError::UnknownRoute(name.clone()))?;
                Some(target)
            }
            _ => None,
        };

        Ok(Navigator {
            shared: Arc::new(Shared {
                table: self.table,
                renderer: self.renderer,
                fallback: self.fallback,
                spawner: self.spawner,
                config: self.config,
                redirect,
                slot: Mutex::new(Slot::default()),
                render: Mutex::new(()),
            }),
        })
    }
}

/// The single mutable piece of navigation state.
struct Slot<C> {
    current: Option<Arc<ResolvedView<C>>>,
    phase: NavigationPhase,
    generation: u64,
}

impl<C> Default for Slot<C> {
    fn default() -> Self {
        Self {
            current: None,
            phase: NavigationPhase::Idle,
            generation: 0,
        }
    }
}

struct Shared<C> {
    table: Arc<RouteTable<C>>,
    renderer: Arc<dyn Renderer<C>>,
    fallback: Arc<dyn Fallback>,
    spawner: Option<Spawner>,
    config: NavigatorConfig,
    redirect: Option<String>,
    slot: Mutex<Slot<C>>,
    // Held across a slot update and its renderer call, so the renderer sees
    // commits in order while the slot itself stays readable.
    render: Mutex<()>,
}

impl<C> Shared<C>
where
    C: Clone + Send + Sync + 'static,
{
    fn lock(&self) -> MutexGuard<'_, Slot<C>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Open a new attempt, superseding any outstanding one.
    fn start(&self) -> u64 {
        let mut slot = self.lock();
        slot.generation += 1;
        slot.phase = NavigationPhase::Matching;
        slot.generation
    }

    fn set_phase(&self, token: u64, phase: NavigationPhase) -> bool {
        let mut slot = self.lock();
        if slot.generation != token {
            return false;
        }
        slot.phase = phase;
        true
    }

    fn commit(
        &self,
        token: u64,
        component: C,
        entry: Arc<RouteEntry<C>>,
        path: String,
        params: Params,
    ) -> NavigationOutcome<C> {
        let _render = self.render.lock().unwrap_or_else(PoisonError::into_inner);
        let view = {
            let mut slot = self.lock();
            if slot.generation != token {
                #[cfg(feature = "tracing")]
                tracing::debug!(token, route = entry.name(), %path, "discarding superseded view");
                return NavigationOutcome::Superseded { path };
            }

            let view = Arc::new(ResolvedView::new(component, entry, path, params, token));
            slot.current = Some(view.clone());
            slot.phase = NavigationPhase::RenderReady;
            view
        };
        self.renderer.render(&view);

        #[cfg(feature = "tracing")]
        tracing::debug!(token, route = view.name(), path = view.path(), "view committed");
        NavigationOutcome::Rendered(view)
    }

    fn resolve(
        self: &Arc<Self>,
        token: u64,
        entry: Arc<RouteEntry<C>>,
        path: String,
        params: Params,
    ) -> Attempt<C> {
        let ready = match entry.resolver() {
            Resolver::Direct(component) => Ok(component.clone()),
            Resolver::Deferred(deferred) => deferred.loaded().cloned().ok_or_else(|| deferred.load()),
        };

        match ready {
            Ok(component) => Attempt::Settled(self.commit(token, component, entry, path, params)),
            Err(load) => {
                if !self.set_phase(token, NavigationPhase::Loading) {
                    return Attempt::Settled(NavigationOutcome::Superseded { path });
                }

                #[cfg(feature = "tracing")]
                tracing::debug!(token, route = entry.name(), %path, "loading deferred view");
                let shared = Arc::clone(self);
                let (finish_entry, finish_path) = (Arc::clone(&entry), path.clone());
                let settle = async move {
                    let result = load.await;
                    shared.finish_load(token, finish_entry, finish_path, params, result)
                }
                .boxed();

                let task = match &self.spawner {
                    Some(spawn) => {
                        let (sender, receiver) = oneshot::channel();
                        spawn(
                            async move {
                                let _ = sender.send(settle.await);
                            }
                            .boxed(),
                        );
                        LoadTask::Spawned(receiver)
                    }
                    None => LoadTask::Inline(settle),
                };
                Attempt::Pending(PendingLoad {
                    token,
                    entry,
                    path,
                    task,
                })
            }
        }
    }

    fn unmatched(self: &Arc<Self>, token: u64, path: String) -> Attempt<C> {
        #[cfg(feature = "tracing")]
        tracing::debug!(token, %path, "no route matched");
        self.fallback.not_found(&path);

        match (&self.config.unmatched, &self.redirect) {
            (UnmatchedPolicy::Redirect(name), Some(target)) => {
                if let Some(entry) = self.table.lookup_name(name) {
                    return self.resolve(token, entry.clone(), target.clone(), Params::new());
                }
            }
            (UnmatchedPolicy::Clear, _) => {
                let _render = self.render.lock().unwrap_or_else(PoisonError::into_inner);
                let cleared = {
                    let mut slot = self.lock();
                    let latest = slot.generation == token;
                    if latest {
                        slot.current = None;
                        slot.phase = NavigationPhase::Unmatched;
                    }
                    latest
                };
                if cleared {
                    self.renderer.clear();
                }
                return Attempt::Settled(NavigationOutcome::Unmatched { path });
            }
            _ => {}
        }

        self.set_phase(token, NavigationPhase::Unmatched);
        Attempt::Settled(NavigationOutcome::Unmatched { path })
    }

    fn finish_load(
        &self,
        token: u64,
        entry: Arc<RouteEntry<C>>,
        path: String,
        params: Params,
        result: Result<C, BoxError>,
    ) -> NavigationOutcome<C> {
        match result {
            Ok(component) => {
                if let Resolver::Deferred(deferred) = entry.resolver() {
                    deferred.store(component.clone());
                }
                self.commit(token, component, entry, path, params)
            }
            Err(source) => {
                let error = LoadError::new(entry.name(), source);
                if !self.set_phase(token, NavigationPhase::LoadFailed) {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(token, route = entry.name(), %path, "discarding superseded load failure");
                    return NavigationOutcome::Superseded { path };
                }

                #[cfg(feature = "tracing")]
                tracing::warn!(token, route = entry.name(), %path, error = %error.cause(), "deferred view failed to load");
                self.fallback.load_failed(&path, &error);
                NavigationOutcome::LoadFailed { path, error }
            }
        }
    }
}

/// Runtime navigation over an immutable [`RouteTable`].
///
/// Cloning a navigator is cheap; clones share the same view slot.
pub struct Navigator<C> {
    shared: Arc<Shared<C>>,
}

impl<C> Clone for Navigator<C> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<C> Navigator<C>
where
    C: Clone + Send + Sync + 'static,
{
    /// Start building a navigator over `table`.
    pub fn builder(table: impl Into<Arc<RouteTable<C>>>) -> NavigatorBuilder<C> {
        NavigatorBuilder::new(table)
    }

    /// Navigate to an application path (without the base).
    ///
    /// Matching and, for views that are already available, the render
    /// handoff happen before this returns. Any outstanding deferred load is
    /// superseded.
    pub fn navigate(&self, path: &str) -> Attempt<C> {
        let token = self.shared.start();
        let path = self.shared.table.normalize(path).into_owned();

        #[cfg(feature = "tracing")]
        tracing::debug!(token, %path, "navigation started");
        let found = self
            .shared
            .table
            .lookup(&path)
            .matched()
            .map(|m| (Arc::clone(m.entry), m.params));

        match found {
            Some((entry, params)) => self.shared.resolve(token, entry, path, params),
            None => self.shared.unmatched(token, path),
        }
    }

    /// Navigate to a location as reported by the history, base included.
    ///
    /// A location outside the base path is unmatched.
    pub fn navigate_location(&self, location: &str) -> Attempt<C> {
        match path::strip_base(location, &self.shared.config.base) {
            Some(relative) => self.navigate(relative),
            None => {
                let token = self.shared.start();
                self.shared.unmatched(token, location.to_string())
            }
        }
    }

    /// Navigate to a named route.
    pub fn navigate_named(&self, name: &str, params: &Params) -> Result<Attempt<C>, HrefError> {
        let path = self.shared.table.href(name, params)?;
        Ok(self.navigate(&path))
    }

    /// Add a history entry for `path` and navigate to it.
    pub fn push<H: History + ?Sized>(&self, history: &H, path: &str) -> Attempt<C> {
        history.push(&path::join_base(&self.shared.config.base, path));
        self.navigate(path)
    }

    /// Replace the current history entry with `path` and navigate to it.
    pub fn replace<H: History + ?Sized>(&self, history: &H, path: &str) -> Attempt<C> {
        history.replace(&path::join_base(&self.shared.config.base, path));
        self.navigate(path)
    }

    /// Follow a history until its change stream ends.
    ///
    /// Navigates to the current location first, then to every reported
    /// change. Attempts begin in the order the changes arrive and their loads
    /// settle concurrently, so a slow load never delays a later navigation.
    pub async fn listen<H: History + ?Sized>(&self, history: &H) {
        let changes = history.changes();
        let initial = self.navigate_location(&history.location());

        stream::once(future::ready(initial))
            .chain(changes.map(|location| self.navigate_location(&location)))
            .for_each_concurrent(None, |attempt| async move {
                attempt.settle().await;
            })
            .await;
    }

    /// Path of a named route, base included, for links.
    pub fn href(&self, name: &str, params: &Params) -> Result<String, HrefError> {
        let path = self.shared.table.href(name, params)?;
        Ok(path::join_base(&self.shared.config.base, &path))
    }

    /// The view currently displayed.
    pub fn current(&self) -> Option<Arc<ResolvedView<C>>> {
        self.shared.lock().current.clone()
    }

    /// Phase of the most recent attempt.
    pub fn phase(&self) -> NavigationPhase {
        self.shared.lock().phase
    }

    /// Generation token of the most recent attempt.
    pub fn generation(&self) -> u64 {
        self.shared.lock().generation
    }

    /// The route table.
    pub fn table(&self) -> &Arc<RouteTable<C>> {
        &self.shared.table
    }

    /// The navigator settings.
    pub fn config(&self) -> &NavigatorConfig {
        &self.shared.config
    }
}
