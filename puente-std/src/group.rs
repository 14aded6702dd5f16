//! Path-prefixed registration views.

use crate::{builder::RouteBuilder, router::Router};
use puente_core::{Handler, Method, Request, Response};
use std::fmt;

/// A registration view bound to a path prefix.
///
/// A group stores nothing but its prefix and a borrow of the router. Every
/// route registered through it lands in the router's single list with the
/// prefix prepended. Groups can be dropped at any time; the routes stay.
pub struct Group<'r, Req, Res> {
    prefix: String,
    router: &'r mut Router<Req, Res>,
}

impl<'r, Req, Res> Group<'r, Req, Res> {
    pub(crate) fn new(router: &'r mut Router<Req, Res>, prefix: String) -> Self {
        Self { prefix, router }
    }

    /// The full prefix, including every parent group's prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl<Req, Res> RouteBuilder<Req, Res> for Group<'_, Req, Res>
where
    Req: Request,
    Res: Response,
{
    fn register_route<H>(&mut self, method: Method, path: &str, handler: H) -> &mut Self
    where
        H: Handler<Req, Res>,
    {
        let full_path = format!("{}{}", self.prefix, path);
        self.router.register_route(method, &full_path, handler);
        self
    }

    fn group(&mut self, prefix: &str) -> Group<'_, Req, Res> {
        Group::new(&mut *self.router, format!("{}{}", self.prefix, prefix))
    }
}

impl<Req, Res> fmt::Debug for Group<'_, Req, Res> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Group")
            .field("prefix", &self.prefix)
            .finish_non_exhaustive()
    }
}
