mod common;

use common::{MockRouter, empty, test_response};
use puente::{Method, RouteBuilder, testing::MockRequest};

fn group_route(method: Method) -> (String, Method) {
    let mut router = MockRouter::new();
    router.group("/group").register_route(method, "/path", empty);

    let routes = router.registered_routes();
    assert_eq!(routes.len(), 1);
    (routes[0].path().to_string(), routes[0].method())
}

#[test]
fn test_group_get() {
    let mut router = MockRouter::new();
    let mut group = router.group("/group");
    group.get("/path", empty);

    let routes = router.registered_routes();
    assert_eq!(routes.len(), 1);
    assert_eq!(routes[0].path(), "/group/path");
    assert_eq!(routes[0].method(), Method::Get);
}

#[test]
fn test_group_post() {
    let mut router = MockRouter::new();
    router.group("/group").post("/path", empty);

    let routes = router.registered_routes();
    assert_eq!(routes[0].path(), "/group/path");
    assert_eq!(routes[0].method(), Method::Post);
}

#[test]
fn test_group_every_verb() {
    for method in Method::ALL {
        assert_eq!(group_route(method), ("/group/path".to_string(), method));
    }
}

#[test]
fn test_group_group() {
    let mut router = MockRouter::new();
    let mut group = router.group("/group");
    let mut sub_group = group.group("/sub-group");
    sub_group.get("/path", empty);

    let routes = router.registered_routes();
    assert_eq!(routes.len(), 1);
    assert_eq!(routes[0].path(), "/group/sub-group/path");
    assert_eq!(routes[0].method(), Method::Get);
}

#[test]
fn test_groups_share_one_list() {
    let mut router = MockRouter::new();
    router.get("/root", empty);
    router.group("/a").get("/one", empty);
    router.get("/root2", empty);
    router.group("/b").group("/c").delete("/two", empty);

    let paths: Vec<_> = router.registered_routes().iter().map(|r| r.path()).collect();
    assert_eq!(paths, vec!["/root", "/a/one", "/root2", "/b/c/two"]);
}

#[test]
fn test_group_without_separator() {
    let mut router = MockRouter::new();
    router.group("group/").get("/path", empty);

    // No normalization: the double slash is kept.
    assert_eq!(router.registered_routes()[0].path(), "group//path");
    assert!(router.route_matcher("group/path", "GET").is_none());
}

#[test]
fn test_group_listen() {
    let mut router = MockRouter::new();
    router.group("/group").get("/path", test_response);

    let res = router.listen(MockRequest::get("/group/path"));
    assert_eq!(res.status_code, 200);
    assert_eq!(res.body, "test response");
}

#[test]
fn test_group_parameter_route() {
    let mut router = MockRouter::new();
    router.group("/orders").group("/:order").get("/items/:item", test_response);

    assert!(router.route_matcher("/orders/9/items/3", "GET").is_some());
    assert!(router.route_matcher("/orders/9/items", "GET").is_none());
}
