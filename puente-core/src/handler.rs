//! # Handlers
//!
//! A [`Handler`] is the terminal endpoint of a route: it receives the
//! original request by value and returns the response that `listen` hands
//! back verbatim. An [`ErrorHandler`] turns a [`RouterError`] into a
//! response.
//!
//! # Usage Patterns
//!
//! 1. **Direct closure**: `|req: MyRequest| MyResponse::ok(...)`
//! 2. **Struct implementation**: `impl Handler<MyRequest, MyResponse> for MyHandler`

use crate::{
    error::{ERROR_NOT_FOUND, RouterError},
    message::Response,
};

/// The endpoint invoked for a matched route.
///
/// Handlers have no error channel. A failing handler builds an error-shaped
/// response itself; the router never inspects or wraps what it returns.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot handle requests of type `{Req}`",
    label = "missing `Handler<{Req}, {Res}>` implementation",
    note = "Handlers must implement `call(request) -> response` for `{Req}`."
)]
pub trait Handler<Req, Res>: Send + Sync + 'static {
    /// Executes the handler logic.
    fn call(&self, request: Req) -> Res;
}

// Blanket impl for closures
impl<F, Req, Res> Handler<Req, Res> for F
where
    F: Fn(Req) -> Res + Send + Sync + 'static,
{
    fn call(&self, request: Req) -> Res {
        (self)(request)
    }
}

/// Turns an error condition into a response.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot produce `{Res}` from a router error",
    label = "missing `ErrorHandler<{Res}>` implementation"
)]
pub trait ErrorHandler<Res>: Send + Sync + 'static {
    /// Build the response for `error`.
    fn handle(&self, error: &RouterError) -> Res;
}

impl<F, Res> ErrorHandler<Res> for F
where
    F: Fn(&RouterError) -> Res + Send + Sync + 'static,
{
    fn handle(&self, error: &RouterError) -> Res {
        (self)(error)
    }
}

/// The error handler a router starts with.
///
/// - description equal to [`ERROR_NOT_FOUND`] → `404` with the token as body
/// - anything else → `500` with the description as body
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultErrorHandler;

impl<Res: Response> ErrorHandler<Res> for DefaultErrorHandler {
    fn handle(&self, error: &RouterError) -> Res {
        let description = error.to_string();
        let status = if description == ERROR_NOT_FOUND { 404 } else { 500 };
        Res::from_parts(status, description)
    }
}
