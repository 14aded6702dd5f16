//! Logging glue for router events.
//!
//! With the `tracing` feature disabled every function here is a no-op.

use puente_core::Method;

pub(crate) fn route_registered(method: Method, path: &str, count: usize) {
    #[cfg(feature = "tracing")]
    {
        tracing::debug!(%method, path, count, "route registered");
    }
    #[cfg(not(feature = "tracing"))]
    {
        let _ = (method, path, count);
    }
}

pub(crate) fn route_matched(method: &str, path: &str, pattern: &str) {
    #[cfg(feature = "tracing")]
    {
        tracing::debug!(method, path, pattern, "route matched");
    }
    #[cfg(not(feature = "tracing"))]
    {
        let _ = (method, path, pattern);
    }
}

pub(crate) fn route_missed(method: &str, path: &str) {
    #[cfg(feature = "tracing")]
    {
        tracing::debug!(method, path, "no route matched");
    }
    #[cfg(not(feature = "tracing"))]
    {
        let _ = (method, path);
    }
}

pub(crate) fn dispatched(status: u16) {
    #[cfg(feature = "tracing")]
    {
        tracing::trace!(status, "request dispatched");
    }
    #[cfg(not(feature = "tracing"))]
    {
        let _ = status;
    }
}
