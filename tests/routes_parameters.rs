use orchid_router::{
    MatchStrategy, RouteRegistrar, Router, RouterError, pattern::PatternError,
};

#[test]
fn router_when_parameter_route_registered_then_extracts_values() {
    let mut router = Router::new(None);
    let id = router
        .get("/user/:id/edit", "edit_user")
        .expect("parameter route should register")
        .id();

    let matched = router
        .dispatch_parts("GET", "/user/17/edit")
        .expect("parameter route should match");

    assert_eq!(matched.route().id(), id);
    assert_eq!(matched.strategy(), MatchStrategy::Named);
    assert_eq!(matched.params().len(), 1);
    assert_eq!(matched.params().get("id"), Some("17"));
}

#[test]
fn router_when_literal_segment_differs_then_parameter_route_misses() {
    let mut router = Router::new(None);
    router
        .get("/user/:id/edit", "edit_user")
        .expect("parameter route should register");

    let err = router.dispatch_parts("GET", "/user/17/view");
    assert!(matches!(
        err.expect_err("literal segment must match"),
        RouterError::RouteNotFound { .. }
    ));
}

#[test]
fn router_when_segment_count_differs_then_parameter_route_misses() {
    let mut router = Router::new(None);
    router
        .get("/user/:id", "show_user")
        .expect("parameter route should register");

    assert!(router.dispatch_parts("GET", "/user/17/extra").is_err());
    assert!(router.dispatch_parts("GET", "/user").is_err());
}

#[test]
fn router_when_multiple_parameters_then_binds_each_by_position() {
    let mut router = Router::new(None);
    router
        .get("/blog/:year/:slug", "post")
        .expect("parameter route should register");

    let matched = router
        .dispatch_parts("GET", "/blog/2024/hello-world")
        .expect("parameter route should match");

    let params = matched.params();
    assert_eq!(params.get("year"), Some("2024"));
    assert_eq!(params.get("slug"), Some("hello-world"));
    let names: Vec<_> = params.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["year", "slug"]);
}

#[test]
fn router_when_earlier_parameter_route_fails_then_bindings_do_not_leak() {
    let mut router = Router::new(None);
    router
        .get("/a/:first/x", "first")
        .expect("first route should register");
    router
        .get("/a/:second/y", "second")
        .expect("second route should register");

    let matched = router
        .dispatch_parts("GET", "/a/1/y")
        .expect("second route should match");

    assert_eq!(matched.params().get("second"), Some("1"));
    assert_eq!(matched.params().get("first"), None);
}

#[test]
fn router_when_parameter_name_missing_then_returns_error() {
    let mut router: Router<&str> = Router::new(None);
    let err = router.get("/user/:", "broken");

    match err.expect_err("expected missing name error") {
        RouterError::InvalidPattern(PatternError::ParameterMissingName { index, .. }) => {
            assert_eq!(index, 1);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn router_when_duplicate_parameter_names_used_then_returns_error() {
    let mut router: Router<&str> = Router::new(None);
    let err = router.get("/:id/:id", "broken");

    match err.expect_err("expected duplicate parameter error") {
        RouterError::InvalidPattern(PatternError::DuplicateParamName { name, .. }) => {
            assert_eq!(name, "id");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(router.is_empty());
}
