//! # puente-std
//!
//! Standard implementations for the Puente request router.
//!
//! This crate provides:
//! - **Routing table**: [`Router`] owns the ordered route list and the error handler
//! - **Groups**: [`Group`] registers through a shared path prefix
//! - **Registration capability**: [`RouteBuilder`], implemented by both
//! - **Matching**: the segment matcher and the [`extract_params`] helper
//! - **Testing utilities**: [`testing`]
//! - **Integrations**: API Gateway envelopes behind the `apigw` feature

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use puente_core;

// Modules
pub mod builder;
pub mod group;
pub mod integrations;
mod log;
pub mod route;
pub mod router;
pub mod routing;
pub mod testing;

pub use builder::RouteBuilder;
pub use group::Group;
pub use route::Route;
pub use router::Router;
pub use routing::{PathParams, extract_params, match_dynamic_route};
