//! # Envelope Integrations
//!
//! Router aliases over the envelope types `puente-core` supports.
//!
//! | Feature | Aliases |
//! |---------|---------|
//! | `apigw` | [`ApiGatewayRouter`], [`ApiGatewayV2Router`] |

#[cfg(feature = "apigw")]
pub mod apigw;

#[cfg(feature = "apigw")]
pub use apigw::{ApiGatewayRouter, ApiGatewayV2Router};
