mod common;

use common::{MockRouter, empty};
use puente::{Method, RouteBuilder};

#[test]
fn test_new() {
    let router = MockRouter::new();
    assert_eq!(router.registered_routes().len(), 0);
}

#[test]
fn test_get() {
    let mut router = MockRouter::new();
    router.get("/path", empty);

    let routes = router.registered_routes();
    assert_eq!(routes.len(), 1);
    assert_eq!(routes[0].path(), "/path");
    assert_eq!(routes[0].method(), Method::Get);
    assert_eq!(routes[0].method().as_str(), puente::HTTP_METHOD_GET);
}

#[test]
fn test_post() {
    let mut router = MockRouter::new();
    router.post("/path", empty);

    let routes = router.registered_routes();
    assert_eq!(routes.len(), 1);
    assert_eq!(routes[0].path(), "/path");
    assert_eq!(routes[0].method(), Method::Post);
}

#[test]
fn test_put() {
    let mut router = MockRouter::new();
    router.put("/path", empty);

    let routes = router.registered_routes();
    assert_eq!(routes.len(), 1);
    assert_eq!(routes[0].path(), "/path");
    assert_eq!(routes[0].method(), Method::Put);
}

#[test]
fn test_patch() {
    let mut router = MockRouter::new();
    router.patch("/path", empty);

    let routes = router.registered_routes();
    assert_eq!(routes.len(), 1);
    assert_eq!(routes[0].path(), "/path");
    assert_eq!(routes[0].method(), Method::Patch);
}

#[test]
fn test_delete() {
    let mut router = MockRouter::new();
    router.delete("/path", empty);

    let routes = router.registered_routes();
    assert_eq!(routes.len(), 1);
    assert_eq!(routes[0].path(), "/path");
    assert_eq!(routes[0].method(), Method::Delete);
}

#[test]
fn test_register_route_stores_path_verbatim() {
    let mut router = MockRouter::new();
    router
        .register_route(Method::Get, "no-leading-slash", empty)
        .register_route(Method::Get, "/trailing/", empty)
        .register_route(Method::Get, "", empty);

    let paths: Vec<_> = router.registered_routes().iter().map(|r| r.path()).collect();
    assert_eq!(paths, vec!["no-leading-slash", "/trailing/", ""]);
}

#[test]
fn test_route_matcher() {
    let mut router = MockRouter::new();
    router.get("/path", empty);

    let route = router.route_matcher("/path", "GET").expect("route should match");
    assert_eq!(route.path(), "/path");
    assert_eq!(route.method(), Method::Get);
}

#[test]
fn test_route_matcher_not_found() {
    let router = MockRouter::new();
    assert!(router.route_matcher("/path", "GET").is_none());
}

#[test]
fn test_route_matcher_other_method() {
    let mut router = MockRouter::new();
    router.get("/path", empty);

    assert!(router.route_matcher("/path", "POST").is_none());
    assert!(router.route_matcher("/path", "get").is_none());
}

#[test]
fn test_route_matcher_with_parameters() {
    let mut router = MockRouter::new();
    router.get("/path/:id", empty);

    let route = router
        .route_matcher("/path/123", "GET")
        .expect("parameter route should match");
    assert_eq!(route.path(), "/path/:id");
    assert_eq!(route.method(), Method::Get);
}

#[test]
fn test_route_matcher_with_parameters_not_found() {
    let mut router = MockRouter::new();
    router.get("/path/:id", empty);

    assert!(router.route_matcher("/path", "GET").is_none());
}

#[test]
fn test_route_matcher_scan_order() {
    let mut router = MockRouter::new();
    router.get("/literal", empty).get("/literal", empty);

    let first = router.route_matcher("/literal", "GET").unwrap();
    assert!(std::ptr::eq(first, &router.registered_routes()[0]));
}

#[test]
fn test_literal_registered_first_takes_priority() {
    let mut router = MockRouter::new();
    router.get("/users/me", empty).get("/users/:id", empty);

    assert_eq!(router.route_matcher("/users/me", "GET").unwrap().path(), "/users/me");
    assert_eq!(router.route_matcher("/users/7", "GET").unwrap().path(), "/users/:id");
}
