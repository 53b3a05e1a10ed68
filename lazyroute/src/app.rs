//! The application's route table.
//!
//! Two views: the virtual scroll demo ships in the main bundle, the socket
//! optimisation demo is split into its own chunk and fetched the first time
//! `/socket-optimisation` is visited.

use crate::{
    ConfigError, FnLoader, LazyrouteError, Loader, Navigator, Renderer, RouteEntry, RouteTable,
};
use futures::future::BoxFuture;
use std::convert::Infallible;

/// Name of the eagerly loaded root view.
pub const VIRTUAL_SCROLL: &str = "virtual-scroll";
/// Name of the view fetched on demand.
pub const SOCKET_OPTIMISATION: &str = "socket-optimisation";

/// The application's views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppView {
    /// Virtual scrolling demo, bundled with the application.
    VirtualScroll,
    /// WebSocket optimisation demo, loaded from a separate chunk.
    SocketOptimisation,
}

/// Route entries with the default chunk loader for the socket view.
pub fn routes() -> Vec<RouteEntry<AppView>> {
    routes_with(FnLoader::new(|| async {
        #[cfg(feature = "tracing")]
        tracing::debug!(chunk = SOCKET_OPTIMISATION, "fetching view chunk");
        Ok::<_, Infallible>(AppView::SocketOptimisation)
    }))
}

/// Route entries with a custom loader for the socket view.
///
/// Platform bindings pass the loader that fetches the split chunk.
pub fn routes_with<L: Loader<AppView>>(socket_loader: L) -> Vec<RouteEntry<AppView>> {
    vec![
        RouteEntry::direct("/", VIRTUAL_SCROLL, AppView::VirtualScroll),
        RouteEntry::lazy("/socket-optimisation", SOCKET_OPTIMISATION, socket_loader),
    ]
}

/// The application's route table.
pub fn route_table() -> Result<RouteTable<AppView>, ConfigError> {
    RouteTable::register(routes())
}

/// The application's navigator over [`route_table`].
///
/// `spawner` runs the socket chunk load in the background, so a navigation
/// settles without anyone awaiting it.
pub fn navigator<R, S>(renderer: R, spawner: S) -> Result<Navigator<AppView>, LazyrouteError>
where
    R: Renderer<AppView>,
    S: Fn(BoxFuture<'static, ()>) + Send + Sync + 'static,
{
    let navigator = Navigator::builder(route_table()?)
        .renderer(renderer)
        .spawner(spawner)
        .build()?;
    Ok(navigator)
}
