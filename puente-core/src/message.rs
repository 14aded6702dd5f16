//! Request and response envelope contracts.

/// An inbound request envelope.
///
/// The router only ever reads the path and the method; every other field is
/// opaque and passed through to the matched handler.
///
/// # Example
///
/// ```rust
/// use puente_core::Request;
///
/// struct Invocation {
///     path: String,
///     method: String,
/// }
///
/// impl Request for Invocation {
///     fn path(&self) -> &str {
///         &self.path
///     }
///
///     fn method(&self) -> &str {
///         &self.method
///     }
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid Request",
    label = "missing `Request` implementation",
    note = "Requests must expose a path and an http method string."
)]
pub trait Request: Send + Sync + 'static {
    /// The raw request path, e.g. `/users/42`.
    fn path(&self) -> &str;

    /// The http method as a string, e.g. `GET`.
    fn method(&self) -> &str;
}

/// An outbound response envelope.
///
/// Handlers build responses themselves; the router only synthesizes one via
/// [`Response::from_parts`] in the default error handler.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid Response",
    label = "missing `Response` implementation",
    note = "Responses must be constructible from a status code and a body."
)]
pub trait Response: Send + 'static {
    /// Build a response from a status code and a body.
    fn from_parts(status: u16, body: String) -> Self;

    /// The numeric status code.
    fn status_code(&self) -> u16;
}
