//! # Collaborator Contracts
//!
//! The navigator is wired to three external collaborators it does not
//! implement itself:
//!
//! - [`Renderer`] turns the committed [`ResolvedView`] into output
//! - [`Fallback`] surfaces unmatched paths and failed loads to the user
//! - [`History`] owns the location and reports changes made outside the router
//!
//! Browser bindings implement these over the DOM and the History API; the
//! standard crate ships in-memory versions for tests and headless use.

use crate::{error::LoadError, view::ResolvedView};
use futures::stream::BoxStream;
use std::sync::Arc;

/// Displays the view the navigator commits.
///
/// Views reach the renderer in commit order. The navigator's state is
/// already updated when `render` runs, so reading the current view or phase
/// from inside it sees the new view. Navigating from inside `render` blocks;
/// queue the request on the event loop instead.
pub trait Renderer<C>: Send + Sync + 'static {
    /// Display a newly committed view.
    fn render(&self, view: &Arc<ResolvedView<C>>);

    /// Empty the view slot.
    fn clear(&self) {}
}

impl<C> Renderer<C> for () {
    fn render(&self, _view: &Arc<ResolvedView<C>>) {}
}

/// Receives navigation failures.
///
/// Both methods default to doing nothing, so a fallback only implements the
/// conditions it presents.
pub trait Fallback: Send + Sync + 'static {
    /// No route matches `path`.
    fn not_found(&self, path: &str) {
        let _ = path;
    }

    /// A deferred view failed to load. The previous view stays displayed.
    fn load_failed(&self, path: &str, error: &LoadError) {
        let _ = (path, error);
    }
}

impl Fallback for () {}

/// Session history the navigator reads from and writes to.
///
/// `push` and `replace` come from the router itself and must not be echoed
/// on [`changes`](History::changes), which only reports locations changed
/// outside the router (back/forward buttons, manual edits).
pub trait History: Send + Sync + 'static {
    /// The current location, including any base path.
    fn location(&self) -> String;

    /// Add a new history entry without reloading the document.
    fn push(&self, location: &str);

    /// Replace the current history entry without reloading the document.
    fn replace(&self, location: &str);

    /// Stream of locations entered outside the router.
    fn changes(&self) -> BoxStream<'static, String>;
}
