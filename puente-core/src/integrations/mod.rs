//! # Envelope Integrations
//!
//! [`Request`] and [`Response`] implementations for third-party event types.
//!
//! | Feature | Types |
//! |---------|-------|
//! | `apigw` | API Gateway REST (v1) and HTTP API (v2) proxy events |
//!
//! [`Request`]: crate::Request
//! [`Response`]: crate::Response

#[cfg(feature = "apigw")]
pub mod apigw;
