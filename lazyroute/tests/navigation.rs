use lazyroute::{
    NavigationPhase,
    app::{self, AppView, SOCKET_OPTIMISATION, VIRTUAL_SCROLL},
    testing::gated,
};
use std::{sync::Arc, time::Duration};

mod common;
use common::{broken_socket, delayed_socket, harness};

#[test]
fn test_root_resolves_synchronously() {
    let (loader, _gate) = gated();
    let h = harness(loader);

    let attempt = h.navigator.navigate("/");

    assert!(!attempt.is_pending());
    let view = h.navigator.current().unwrap();
    assert_eq!(view.name(), VIRTUAL_SCROLL);
    assert_eq!(*view.component(), AppView::VirtualScroll);
    assert_eq!(h.renderer.names(), vec![VIRTUAL_SCROLL]);
}

#[tokio::test]
async fn test_socket_view_loads_on_demand() {
    let (loader, gate) = gated();
    let loader = Arc::new(loader);
    let h = harness(loader.clone());

    let attempt = h.navigator.navigate("/socket-optimisation");
    assert!(attempt.is_pending());
    assert_eq!(h.navigator.phase(), NavigationPhase::Loading);
    assert_eq!(h.renderer.count(), 0);
    assert_eq!(loader.loads(), 1);

    gate.open(AppView::SocketOptimisation);
    let outcome = attempt.await;

    assert_eq!(outcome.view().unwrap().name(), SOCKET_OPTIMISATION);
    assert_eq!(h.navigator.current().unwrap().name(), SOCKET_OPTIMISATION);
    assert_eq!(h.navigator.phase(), NavigationPhase::RenderReady);
}

#[tokio::test]
async fn test_unknown_path_leaves_view_untouched() {
    let (loader, _gate) = gated();
    let h = harness(loader);

    let _ = h.navigator.navigate("/");
    let before = h.navigator.current().unwrap();

    let outcome = h.navigator.navigate("/unknown").await;

    assert!(outcome.is_unmatched());
    assert!(outcome.view().is_none());
    assert!(Arc::ptr_eq(&before, &h.navigator.current().unwrap()));
    assert_eq!(h.renderer.count(), 1);
    assert_eq!(h.fallback.not_found_paths(), vec!["/unknown"]);
}

#[tokio::test]
async fn test_late_socket_load_is_discarded() {
    let (loader, gate) = gated();
    let h = harness(loader);

    let socket = h.navigator.navigate("/socket-optimisation");
    let _ = h.navigator.navigate("/");
    assert_eq!(h.navigator.current().unwrap().name(), VIRTUAL_SCROLL);

    gate.open(AppView::SocketOptimisation);
    let outcome = socket.await;

    assert!(outcome.is_superseded());
    assert_eq!(h.navigator.current().unwrap().name(), VIRTUAL_SCROLL);
    assert_eq!(h.renderer.names(), vec![VIRTUAL_SCROLL]);
    assert_eq!(h.navigator.phase(), NavigationPhase::RenderReady);
}

#[tokio::test]
async fn test_slow_load_loses_to_later_navigation() {
    let h = harness(delayed_socket(Duration::from_millis(30)));

    let slow = h.navigator.navigate("/socket-optimisation");
    let fast = h.navigator.navigate("/");
    let (slow, fast) = tokio::join!(slow.settle(), fast.settle());

    assert!(slow.is_superseded());
    assert_eq!(fast.view().unwrap().name(), VIRTUAL_SCROLL);
    assert_eq!(h.navigator.current().unwrap().name(), VIRTUAL_SCROLL);
}

#[tokio::test]
async fn test_newer_deferred_navigation_wins() {
    let h = harness(delayed_socket(Duration::from_millis(5)));

    let first = h.navigator.navigate("/socket-optimisation");
    let second = h.navigator.navigate("/socket-optimisation");
    let (first, second) = tokio::join!(first.settle(), second.settle());

    assert!(first.is_superseded());
    let view = second.view().unwrap();
    assert_eq!(view.name(), SOCKET_OPTIMISATION);
    assert_eq!(view.generation(), h.navigator.generation());
    assert_eq!(h.renderer.count(), 1);
}

#[tokio::test]
async fn test_every_registered_path_resolves_to_its_name() {
    let table = app::route_table().unwrap();
    let h = common::harness_with(table, |builder| builder);

    for path in ["/", "/socket-optimisation"] {
        let expected = h.navigator.table().lookup(path).matched().unwrap().entry.name().to_string();
        let outcome = h.navigator.navigate(path).await;
        assert_eq!(outcome.view().unwrap().name(), expected);
    }
}

#[tokio::test]
async fn test_absent_paths_never_produce_a_view() {
    let table = app::route_table().unwrap();
    let h = common::harness_with(table, |builder| builder);

    for path in ["/unknown", "/socket", "/socket-optimisation/extra", "/virtual-scroll"] {
        let outcome = h.navigator.navigate(path).await;
        assert!(outcome.is_unmatched(), "{path} should be unmatched");
    }
    assert!(h.navigator.current().is_none());
    assert_eq!(h.renderer.count(), 0);
}

#[tokio::test]
async fn test_repeated_navigation_is_idempotent() {
    let table = app::route_table().unwrap();
    let h = common::harness_with(table, |builder| builder);

    let first = h.navigator.navigate("/socket-optimisation").await;
    let second = h.navigator.navigate("/socket-optimisation").await;

    let (first, second) = (first.view().unwrap(), second.view().unwrap());
    assert_eq!(first.name(), second.name());
    assert_eq!(first.component(), second.component());
    assert_eq!(first.path(), second.path());
    assert!(Arc::ptr_eq(first.entry(), second.entry()));
}

#[tokio::test]
async fn test_failed_load_is_retried_on_next_visit() {
    let h = harness(broken_socket());

    let _ = h.navigator.navigate("/");
    let outcome = h.navigator.navigate("/socket-optimisation").await;

    assert!(outcome.is_load_failed());
    assert_eq!(h.navigator.phase(), NavigationPhase::LoadFailed);
    assert_eq!(h.navigator.current().unwrap().name(), VIRTUAL_SCROLL);

    let retry = h.navigator.navigate("/socket-optimisation");
    assert!(retry.is_pending());
    assert!(retry.await.is_load_failed());
    assert_eq!(h.fallback.load_failures().len(), 2);
}

#[tokio::test]
async fn test_trailing_slash_and_query_are_ignored() {
    let table = app::route_table().unwrap();
    let h = common::harness_with(table, |builder| builder);

    let outcome = h.navigator.navigate("/socket-optimisation/?debug=1").await;
    let view = outcome.view().unwrap();
    assert_eq!(view.name(), SOCKET_OPTIMISATION);
    assert_eq!(view.path(), "/socket-optimisation");
}
