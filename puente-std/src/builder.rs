//! # Registration Capability
//!
//! [`RouteBuilder`] is the set of registration operations shared by the
//! [`Router`] and every [`Group`] derived from it. Implementors provide
//! [`register_route`] and [`group`]; the per-verb methods are defined on
//! top of them.
//!
//! [`Router`]: crate::Router
//! [`Group`]: crate::Group
//! [`register_route`]: RouteBuilder::register_route
//! [`group`]: RouteBuilder::group

use crate::group::Group;
use puente_core::{Handler, Method};

/// Registers routes and derives prefixed groups.
///
/// # Example
///
/// ```rust
/// use puente_std::{RouteBuilder, Router, testing::{MockRequest, MockResponse}};
///
/// let mut router: Router<MockRequest, MockResponse> = Router::new();
/// router
///     .get("/health", |_req: MockRequest| MockResponse::ok("up"))
///     .post("/items", |_req: MockRequest| MockResponse::new(201, "created"));
///
/// let mut api = router.group("/api");
/// api.delete("/items/:id", |_req: MockRequest| MockResponse::new(204, ""));
///
/// assert_eq!(router.registered_routes().len(), 3);
/// assert_eq!(router.registered_routes()[2].path(), "/api/items/:id");
/// ```
pub trait RouteBuilder<Req, Res> {
    /// Append a route for `method` on `path`.
    ///
    /// The path is stored as given (after any group prefix); it is never
    /// validated.
    fn register_route<H>(&mut self, method: Method, path: &str, handler: H) -> &mut Self
    where
        H: Handler<Req, Res>;

    /// Derive a group whose routes are registered under `prefix`.
    ///
    /// The prefix is concatenated as-is, no separator is inserted.
    fn group(&mut self, prefix: &str) -> Group<'_, Req, Res>;

    /// Register a `GET` route.
    fn get<H>(&mut self, path: &str, handler: H) -> &mut Self
    where
        H: Handler<Req, Res>,
    {
        self.register_route(Method::Get, path, handler)
    }

    /// Register a `POST` route.
    fn post<H>(&mut self, path: &str, handler: H) -> &mut Self
    where
        H: Handler<Req, Res>,
    {
        self.register_route(Method::Post, path, handler)
    }

    /// Register a `PUT` route.
    fn put<H>(&mut self, path: &str, handler: H) -> &mut Self
    where
        H: Handler<Req, Res>,
    {
        self.register_route(Method::Put, path, handler)
    }

    /// Register a `PATCH` route.
    fn patch<H>(&mut self, path: &str, handler: H) -> &mut Self
    where
        H: Handler<Req, Res>,
    {
        self.register_route(Method::Patch, path, handler)
    }

    /// Register a `DELETE` route.
    fn delete<H>(&mut self, path: &str, handler: H) -> &mut Self
    where
        H: Handler<Req, Res>,
    {
        self.register_route(Method::Delete, path, handler)
    }
}
