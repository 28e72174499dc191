use orchid_router::{RouteRegistrar, Router};

#[test]
fn router_when_priorities_differ_then_higher_priority_wins() {
    let mut router = Router::new(None);
    router
        .map(orchid_router::HttpMethod::Get, "/dup", "low", 0)
        .expect("low priority route should register");
    router
        .map(orchid_router::HttpMethod::Get, "/dup", "high", 10)
        .expect("high priority route should register");

    for _ in 0..3 {
        let matched = router
            .dispatch_parts("GET", "/dup")
            .expect("route should match");
        assert_eq!(matched.handler().as_handler(), Some(&"high"));
        assert_eq!(matched.route().priority(), 10);
    }
}

#[test]
fn router_when_priorities_tie_then_registration_order_wins() {
    let mut router = Router::new(None);
    router.get("/a/:id", "param").expect("param route should register");
    router.get("/a/b", "literal").expect("literal route should register");

    let matched = router
        .dispatch_parts("GET", "/a/b")
        .expect("route should match");
    assert_eq!(matched.handler().as_handler(), Some(&"param"));
    assert_eq!(matched.params().get("id"), Some("b"));
}

#[test]
fn router_when_literal_has_higher_priority_then_it_shadows_parameter_route() {
    let mut router = Router::new(None);
    router.get("/a/:id", "param").expect("param route should register");
    router
        .map(orchid_router::HttpMethod::Get, "/a/b", "literal", 1)
        .expect("literal route should register");

    let literal = router.dispatch_parts("GET", "/a/b").expect("should match");
    assert_eq!(literal.handler().as_handler(), Some(&"literal"));

    let param = router.dispatch_parts("GET", "/a/c").expect("should match");
    assert_eq!(param.handler().as_handler(), Some(&"param"));
}

#[test]
fn router_when_routes_listed_then_follow_dispatch_order() {
    let mut router = Router::new(None);
    router.map(orchid_router::HttpMethod::Get, "/zero", "zero", 0).unwrap();
    router.map(orchid_router::HttpMethod::Get, "/neg", "neg", -5).unwrap();
    router.map(orchid_router::HttpMethod::Get, "/five", "five", 5).unwrap();
    router.map(orchid_router::HttpMethod::Get, "/also-zero", "also", 0).unwrap();

    let patterns: Vec<_> = router.routes().map(|route| route.pattern()).collect();
    assert_eq!(patterns, vec!["/five", "/zero", "/also-zero", "/neg"]);

    let ids: Vec<_> = router.routes().map(|route| route.id()).collect();
    assert_eq!(ids, vec![2, 0, 3, 1]);
}

#[test]
fn router_when_dispatched_repeatedly_then_result_is_stable() {
    let mut router = Router::new(None);
    router.get("/files/*", "files").expect("route should register");
    router.get("/files/:name", "named").expect("route should register");

    let first = router
        .dispatch_parts("GET", "/files/report")
        .expect("should match")
        .route()
        .id();
    for _ in 0..5 {
        let again = router
            .dispatch_parts("GET", "/files/report")
            .expect("should match")
            .route()
            .id();
        assert_eq!(again, first);
    }
}
