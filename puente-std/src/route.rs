//! A single registered route.

use crate::routing::match_dynamic_route;
use puente_core::{Handler, Method};
use std::fmt;

/// A path pattern and method bound to a handler.
///
/// Routes are created by a registration call and never change afterwards.
pub struct Route<Req, Res> {
    path: String,
    method: Method,
    handler: Box<dyn Handler<Req, Res>>,
}

impl<Req: 'static, Res: 'static> Route<Req, Res> {
    pub(crate) fn new<H>(method: Method, path: String, handler: H) -> Self
    where
        H: Handler<Req, Res>,
    {
        Self {
            path,
            method,
            handler: Box::new(handler),
        }
    }

    /// The path pattern exactly as it was registered.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The method this route answers to.
    pub fn method(&self) -> Method {
        self.method
    }

    /// Invoke the route's handler.
    pub fn call(&self, request: Req) -> Res {
        self.handler.call(request)
    }

    /// Check whether this route answers `method` on `path`.
    ///
    /// The method comparison is exact and case-sensitive. An exact path match
    /// is tried before the segment-wise one.
    pub fn matches(&self, path: &str, method: &str) -> bool {
        if self.method.as_str() != method {
            return false;
        }
        self.path == path || match_dynamic_route(&self.path, path)
    }
}

impl<Req, Res> fmt::Debug for Route<Req, Res> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("method", &self.method)
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}
