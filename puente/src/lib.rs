//! # puente - Path/Method Router for Function Handlers
//!
//! `puente` dispatches a single inbound request to the handler registered for
//! its path and method, falling back to a configurable error responder when
//! nothing matches. It is meant to sit between a function runtime and the
//! application's handlers.
//!
//! ## Quick Start
//!
//! ```rust
//! use puente::prelude::*;
//! use puente::testing::{MockRequest, MockResponse};
//!
//! let mut router: Router<MockRequest, MockResponse> = Router::new();
//! router.get("/health", |_req: MockRequest| MockResponse::ok("up"));
//!
//! let mut users = router.group("/users");
//! users.get("/:id", |req: MockRequest| {
//!     let params = extract_params("/users/:id", &req.path).unwrap_or_default();
//!     MockResponse::ok(params.get("id").unwrap_or_default())
//! });
//!
//! assert_eq!(router.listen(MockRequest::get("/users/42")).body, "42");
//! assert_eq!(router.listen(MockRequest::get("/nope")).status_code, 404);
//! ```
//!
//! ## Matching
//!
//! Routes are scanned in registration order and the first match wins. A
//! pattern segment starting with `:` matches any single path segment; the
//! segment counts must agree. See [`routing`] for details.
//!
//! ## Features
//!
//! - `tracing`: emit registration and dispatch events through `tracing`
//! - `apigw`: `Request`/`Response` for AWS API Gateway proxy events

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use puente_core::{
    // Error types
    BoxError,
    // Handlers
    DefaultErrorHandler,
    ERROR_NOT_FOUND,
    ErrorHandler,
    // Verbs
    HTTP_METHOD_DELETE,
    HTTP_METHOD_GET,
    HTTP_METHOD_PATCH,
    HTTP_METHOD_POST,
    HTTP_METHOD_PUT,
    Handler,
    Method,
    ParseMethodError,
    // Envelopes
    Request,
    Response,
    RouterError,
};

// Routing table
pub use puente_std::{Group, Route, RouteBuilder, Router};

/// Path matching helpers.
pub mod routing {
    pub use puente_std::routing::{
        PARAM_MARKER, PathParams, extract_params, match_dynamic_route,
    };
}

pub use routing::{PathParams, extract_params};

/// Envelope integrations for third-party event types.
pub mod integrations {
    #[cfg(feature = "apigw")]
    pub use puente_std::integrations::apigw;
    #[cfg(feature = "apigw")]
    pub use puente_std::integrations::{ApiGatewayRouter, ApiGatewayV2Router};
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use puente_std::testing::*;
}

/// Prelude module - common imports for Puente.
///
/// # Usage
///
/// ```rust,ignore
/// use puente::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        ErrorHandler, Handler, Method, PathParams, Request, Response, RouteBuilder, Router,
        RouterError, extract_params,
    };
}
