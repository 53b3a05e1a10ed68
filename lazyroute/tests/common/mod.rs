#![allow(dead_code)]

use lazyroute::{
    Loader, Navigator, NavigatorBuilder, RouteTable,
    app::{self, AppView},
    testing::{RecordingFallback, RecordingRenderer},
};
use std::time::Duration;

// ============================================================================
// Fixtures
// ============================================================================

pub struct Harness {
    pub navigator: Navigator<AppView>,
    pub renderer: RecordingRenderer<AppView>,
    pub fallback: RecordingFallback,
}

/// The application table with `socket_loader` fetching the socket view.
pub fn app_table<L: Loader<AppView>>(socket_loader: L) -> RouteTable<AppView> {
    RouteTable::register(app::routes_with(socket_loader)).unwrap()
}

/// Wire recording collaborators into a navigator builder.
pub fn harness_with(
    table: RouteTable<AppView>,
    configure: impl FnOnce(NavigatorBuilder<AppView>) -> NavigatorBuilder<AppView>,
) -> Harness {
    let renderer = RecordingRenderer::new();
    let fallback = RecordingFallback::new();
    let builder = Navigator::builder(table)
        .renderer(renderer.clone())
        .fallback(fallback.clone());
    let navigator = configure(builder).build().unwrap();
    Harness {
        navigator,
        renderer,
        fallback,
    }
}

pub fn harness<L: Loader<AppView>>(socket_loader: L) -> Harness {
    harness_with(app_table(socket_loader), |builder| builder)
}

// ============================================================================
// Loaders
// ============================================================================

/// Socket loader that settles after `delay`.
pub fn delayed_socket(delay: Duration) -> impl Loader<AppView> {
    lazyroute::FnLoader::new(move || async move {
        tokio::time::sleep(delay).await;
        Ok::<_, std::convert::Infallible>(AppView::SocketOptimisation)
    })
}

/// Socket loader that always fails.
pub fn broken_socket() -> impl Loader<AppView> {
    lazyroute::FnLoader::new(|| async {
        Err::<AppView, _>(std::io::Error::other("chunk request failed"))
    })
}
