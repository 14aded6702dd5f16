//! # Router
//!
//! The [`Router`] owns the ordered, append-only list of routes and the error
//! handler used when nothing matches.
//!
//! # Lookup Order
//!
//! Lookup is a linear scan in registration order and the first matching
//! route wins. Specificity plays no part: a parameterized route registered
//! before a literal one at the same path shadows it. Register literal
//! routes first when they should take priority.
//!
//! # Sharing
//!
//! Registration takes `&mut self` and dispatch takes `&self`. Once setup is
//! done the router can be shared for concurrent dispatch (for example in a
//! `static` built at cold start), provided the request and response types
//! allow it.

use crate::{builder::RouteBuilder, group::Group, log, route::Route};
use puente_core::{
    DefaultErrorHandler, ErrorHandler, Handler, Method, Request, Response, RouterError,
};
use std::fmt;

/// The routing table and dispatcher.
pub struct Router<Req, Res> {
    routes: Vec<Route<Req, Res>>,
    on_error: Box<dyn ErrorHandler<Res>>,
}

impl<Req, Res> Router<Req, Res>
where
    Req: Request,
    Res: Response,
{
    /// Create an empty router with the [`DefaultErrorHandler`] installed.
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            on_error: Box::new(DefaultErrorHandler),
        }
    }

    /// The registered routes, in registration order.
    pub fn registered_routes(&self) -> &[Route<Req, Res>] {
        &self.routes
    }

    /// Get the number of routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Check if the router is empty.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Replace the error handler. The last call wins.
    pub fn on_error<E>(&mut self, handler: E) -> &mut Self
    where
        E: ErrorHandler<Res>,
    {
        self.on_error = Box::new(handler);
        self
    }

    /// Find the first route answering `method` on `path`.
    ///
    /// `None` is not an error by itself; only [`listen`](Self::listen)
    /// treats it as the not-found condition.
    pub fn route_matcher(&self, path: &str, method: &str) -> Option<&Route<Req, Res>> {
        self.routes.iter().find(|route| route.matches(path, method))
    }

    /// Dispatch `request` to the first matching route.
    ///
    /// The handler's response is returned unchanged. When no route matches
    /// the installed error handler is invoked with [`RouterError::NotFound`]
    /// and its response is returned unchanged.
    pub fn listen(&self, request: Req) -> Res {
        let Some(route) = self.route_matcher(request.path(), request.method()) else {
            log::route_missed(request.method(), request.path());
            return self.on_error.handle(&RouterError::NotFound);
        };

        log::route_matched(request.method(), request.path(), route.path());
        let response = route.call(request);
        log::dispatched(response.status_code());
        response
    }

    /// Resolve an application error through the installed error handler.
    pub fn respond_error(&self, error: &RouterError) -> Res {
        self.on_error.handle(error)
    }
}

impl<Req, Res> Default for Router<Req, Res>
where
    Req: Request,
    Res: Response,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<Req, Res> RouteBuilder<Req, Res> for Router<Req, Res>
where
    Req: Request,
    Res: Response,
{
    fn register_route<H>(&mut self, method: Method, path: &str, handler: H) -> &mut Self
    where
        H: Handler<Req, Res>,
    {
        self.routes.push(Route::new(method, path.to_string(), handler));
        log::route_registered(method, path, self.routes.len());
        self
    }

    fn group(&mut self, prefix: &str) -> Group<'_, Req, Res> {
        Group::new(self, prefix.to_string())
    }
}

impl<Req, Res> fmt::Debug for Router<Req, Res> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("routes", &self.routes)
            .finish_non_exhaustive()
    }
}
