//! A single navigation attempt and its terminal outcomes.

use futures::{channel::oneshot, future::BoxFuture};
use lazyroute_core::{LoadError, ResolvedView, RouteEntry};
use std::{fmt, future::IntoFuture, sync::Arc};

/// Phase of the most recent navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavigationPhase {
    /// No navigation has started yet.
    #[default]
    Idle,
    /// The path is being matched against the route table.
    Matching,
    /// A deferred view is being fetched.
    Loading,
    /// The view was committed to the renderer.
    RenderReady,
    /// No route matched.
    Unmatched,
    /// The deferred view failed to load.
    LoadFailed,
}

/// How a navigation attempt ended.
pub enum NavigationOutcome<C> {
    /// The view was committed and handed to the renderer.
    Rendered(Arc<ResolvedView<C>>),
    /// No route matches the path.
    Unmatched {
        /// The requested path.
        path: String,
    },
    /// The deferred view failed to load; the previous view is still displayed.
    LoadFailed {
        /// The requested path.
        path: String,
        /// Why the load failed.
        error: LoadError,
    },
    /// A newer navigation began before this one settled; its result was dropped.
    Superseded {
        /// The requested path.
        path: String,
    },
}

impl<C: 'static> NavigationOutcome<C> {
    /// The committed view, if any.
    pub fn view(&self) -> Option<&Arc<ResolvedView<C>>> {
        match self {
            NavigationOutcome::Rendered(view) => Some(view),
            _ => None,
        }
    }

    /// Returns true if a view was committed.
    pub fn is_rendered(&self) -> bool {
        matches!(self, NavigationOutcome::Rendered(_))
    }

    /// Returns true if no route matched.
    pub fn is_unmatched(&self) -> bool {
        matches!(self, NavigationOutcome::Unmatched { .. })
    }

    /// Returns true if the deferred load failed.
    pub fn is_load_failed(&self) -> bool {
        matches!(self, NavigationOutcome::LoadFailed { .. })
    }

    /// Returns true if the result was discarded in favour of a newer navigation.
    pub fn is_superseded(&self) -> bool {
        matches!(self, NavigationOutcome::Superseded { .. })
    }
}

impl<C: 'static> fmt::Debug for NavigationOutcome<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationOutcome::Rendered(view) => f
                .debug_tuple("Rendered")
                .field(&view.name())
                .field(&view.path())
                .finish(),
            NavigationOutcome::Unmatched { path } => {
                f.debug_struct("Unmatched").field("path", path).finish()
            }
            NavigationOutcome::LoadFailed { path, error } => f
                .debug_struct("LoadFailed")
                .field("path", path)
                .field("error", error)
                .finish(),
            NavigationOutcome::Superseded { path } => {
                f.debug_struct("Superseded").field("path", path).finish()
            }
        }
    }
}

/// A navigation that has started.
///
/// Matching, and the render handoff of views that are already available,
/// happen before the attempt is returned. Only a deferred load is left
/// [`Pending`](Attempt::Pending).
///
/// When the navigator was built with a
/// [`spawner`](super::NavigatorBuilder::spawner) the load already runs on
/// its own and the attempt may be dropped; awaiting it only reports the
/// outcome. Without one, awaiting the attempt is what drives the load, and
/// dropping it abandons the load with the phase left at `Loading`.
#[must_use = "a pending attempt only loads when awaited, unless the navigator has a spawner"]
pub enum Attempt<C> {
    /// The attempt reached its outcome synchronously.
    Settled(NavigationOutcome<C>),
    /// A deferred view is loading.
    Pending(PendingLoad<C>),
}

impl<C> Attempt<C>
where
    C: Clone + Send + Sync + 'static,
{
    /// Returns true if a deferred load is outstanding.
    pub fn is_pending(&self) -> bool {
        matches!(self, Attempt::Pending(_))
    }

    /// The outcome, if the attempt already settled.
    pub fn outcome(&self) -> Option<&NavigationOutcome<C>> {
        match self {
            Attempt::Settled(outcome) => Some(outcome),
            Attempt::Pending(_) => None,
        }
    }

    /// Drive the attempt to its outcome.
    pub async fn settle(self) -> NavigationOutcome<C> {
        match self {
            Attempt::Settled(outcome) => outcome,
            Attempt::Pending(pending) => pending.settle().await,
        }
    }
}

impl<C> IntoFuture for Attempt<C>
where
    C: Clone + Send + Sync + 'static,
{
    type Output = NavigationOutcome<C>;
    type IntoFuture = BoxFuture<'static, NavigationOutcome<C>>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(self.settle())
    }
}

impl<C: 'static> fmt::Debug for Attempt<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Attempt::Settled(outcome) => f.debug_tuple("Settled").field(outcome).finish(),
            Attempt::Pending(pending) => f.debug_tuple("Pending").field(pending).finish(),
        }
    }
}

pub(super) enum LoadTask<C> {
    /// Driven by whoever awaits the attempt.
    Inline(BoxFuture<'static, NavigationOutcome<C>>),
    /// Running on the navigator's spawner.
    Spawned(oneshot::Receiver<NavigationOutcome<C>>),
}

/// An outstanding deferred load, tagged with the generation of its navigation.
#[must_use = "a pending load only runs when awaited, unless the navigator has a spawner"]
pub struct PendingLoad<C> {
    pub(super) token: u64,
    pub(super) entry: Arc<RouteEntry<C>>,
    pub(super) path: String,
    pub(super) task: LoadTask<C>,
}

impl<C> PendingLoad<C>
where
    C: Clone + Send + Sync + 'static,
{
    /// Generation token of this navigation.
    pub fn token(&self) -> u64 {
        self.token
    }

    /// The requested path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Name of the route being loaded.
    pub fn route(&self) -> &str {
        self.entry.name()
    }

    /// Returns true if the load runs on the navigator's spawner.
    pub fn is_spawned(&self) -> bool {
        matches!(self.task, LoadTask::Spawned(_))
    }

    /// Wait for the load and commit its view, unless a newer navigation began.
    pub async fn settle(self) -> NavigationOutcome<C> {
        let PendingLoad {
            entry, path, task, ..
        } = self;

        match task {
            LoadTask::Inline(settle) => settle.await,
            LoadTask::Spawned(receiver) => match receiver.await {
                Ok(outcome) => outcome,
                Err(oneshot::Canceled) => NavigationOutcome::LoadFailed {
                    error: LoadError::new(entry.name(), "load task dropped before settling"),
                    path,
                },
            },
        }
    }
}

impl<C: 'static> fmt::Debug for PendingLoad<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingLoad")
            .field("token", &self.token)
            .field("route", &self.entry.name())
            .field("path", &self.path)
            .field("spawned", &matches!(self.task, LoadTask::Spawned(_)))
            .finish()
    }
}
