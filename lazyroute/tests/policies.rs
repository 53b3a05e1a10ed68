use lazyroute::{
    NavigationPhase, UnmatchedPolicy,
    app::{SOCKET_OPTIMISATION, VIRTUAL_SCROLL},
    testing::gated,
};

mod common;
use common::{app_table, harness_with};

#[tokio::test]
async fn test_clear_policy_empties_slot() {
    let (loader, _gate) = gated();
    let h = harness_with(app_table(loader), |builder| {
        builder.unmatched(UnmatchedPolicy::Clear)
    });

    let _ = h.navigator.navigate("/");
    let outcome = h.navigator.navigate("/missing").await;

    assert!(outcome.is_unmatched());
    assert!(h.navigator.current().is_none());
    assert_eq!(h.navigator.phase(), NavigationPhase::Unmatched);
    assert_eq!(h.renderer.clears(), 1);
    assert_eq!(h.fallback.not_found_paths(), vec!["/missing"]);
}

#[tokio::test]
async fn test_redirect_policy_renders_named_route() {
    let (loader, _gate) = gated();
    let h = harness_with(app_table(loader), |builder| {
        builder.unmatched(UnmatchedPolicy::Redirect(VIRTUAL_SCROLL.to_string()))
    });

    let outcome = h.navigator.navigate("/missing").await;

    let view = outcome.view().unwrap();
    assert_eq!(view.name(), VIRTUAL_SCROLL);
    assert_eq!(view.path(), "/");
    assert_eq!(h.fallback.not_found_paths(), vec!["/missing"]);
}

#[tokio::test]
async fn test_redirect_to_deferred_route_is_superseded_like_any_load() {
    let (loader, gate) = gated();
    let h = harness_with(app_table(loader), |builder| {
        builder.unmatched(UnmatchedPolicy::Redirect(SOCKET_OPTIMISATION.to_string()))
    });

    let redirected = h.navigator.navigate("/missing");
    assert!(redirected.is_pending());

    let _ = h.navigator.navigate("/");
    gate.open(lazyroute::app::AppView::SocketOptimisation);

    assert!(redirected.await.is_superseded());
    assert_eq!(h.navigator.current().unwrap().name(), VIRTUAL_SCROLL);
}

#[tokio::test]
async fn test_navigate_named() {
    let (loader, gate) = gated();
    let h = harness_with(app_table(loader), |builder| builder);

    let attempt = h
        .navigator
        .navigate_named(SOCKET_OPTIMISATION, &lazyroute::Params::new())
        .unwrap();
    gate.open(lazyroute::app::AppView::SocketOptimisation);

    assert_eq!(attempt.await.view().unwrap().name(), SOCKET_OPTIMISATION);
    assert!(
        h.navigator
            .navigate_named("nope", &lazyroute::Params::new())
            .is_err()
    );
}

#[cfg(feature = "matchit")]
mod patterns {
    use lazyroute::{Navigator, Params, RouteEntry, RouteTable, testing::RecordingRenderer};

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum View {
        Home,
        User,
        Docs,
    }

    fn navigator() -> (Navigator<View>, RecordingRenderer<View>) {
        let table = RouteTable::register([
            RouteEntry::direct("/", "home", View::Home),
            RouteEntry::deferred("/users/{id}", "user", || async {
                Ok::<_, std::convert::Infallible>(View::User)
            }),
            RouteEntry::direct("/docs/{*page}", "docs", View::Docs),
        ])
        .unwrap();
        let renderer = RecordingRenderer::new();
        let navigator = Navigator::builder(table)
            .renderer(renderer.clone())
            .build()
            .unwrap();
        (navigator, renderer)
    }

    #[tokio::test]
    async fn test_params_reach_the_view() {
        let (navigator, _) = navigator();

        let outcome = navigator.navigate("/users/42").await;
        let view = outcome.view().unwrap();
        assert_eq!(view.name(), "user");
        assert_eq!(view.params().get("id"), Some("42"));

        let outcome = navigator.navigate("/docs/guide/routing").await;
        assert_eq!(outcome.view().unwrap().params().get("page"), Some("guide/routing"));
    }

    #[tokio::test]
    async fn test_named_navigation_fills_params() {
        let (navigator, renderer) = navigator();

        let params = Params::new().with("id", "7");
        assert_eq!(navigator.href("user", &params).unwrap(), "/users/7");

        let outcome = navigator.navigate_named("user", &params).unwrap().await;
        assert_eq!(outcome.view().unwrap().path(), "/users/7");
        assert!(navigator.navigate_named("user", &Params::new()).is_err());
        assert_eq!(renderer.names(), vec!["user"]);
    }
}
