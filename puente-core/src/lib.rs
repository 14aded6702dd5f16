//! # puente-core
//!
//! Core traits for the Puente request router.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! integrations that only need to describe requests, responses and handlers
//! without pulling in the router itself.
//!
//! # Contracts
//!
//! - [`Request`]: an inbound envelope exposing a path and a method string.
//!   Everything else about the request is opaque and handed to the handler
//!   untouched.
//! - [`Response`]: an outbound envelope with a status code and a body.
//! - [`Handler`]: `(request) -> response`, synchronous, no error channel.
//! - [`ErrorHandler`]: `(error condition) -> response`, used when no route
//!   matches or when an application funnels its own condition through the
//!   router.
//!
//! # Integrations
//!
//! The `apigw` feature implements the envelope traits for AWS API Gateway
//! proxy events, see [`integrations`].
//!
//! # Error Types
//!
//! - [`RouterError`] - The error condition handed to an [`ErrorHandler`]
//! - [`ParseMethodError`] - An unknown verb string

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;
mod handler;
pub mod integrations;
mod message;
mod method;

// Re-exports
pub use error::{BoxError, ERROR_NOT_FOUND, ParseMethodError, RouterError};
pub use handler::{DefaultErrorHandler, ErrorHandler, Handler};
pub use message::{Request, Response};
pub use method::{
    HTTP_METHOD_DELETE, HTTP_METHOD_GET, HTTP_METHOD_PATCH, HTTP_METHOD_POST, HTTP_METHOD_PUT,
    Method,
};
