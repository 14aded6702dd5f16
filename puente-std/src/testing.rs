//! Testing utilities for Puente.
//!
//! This module provides small envelope types and handlers that make testing
//! routers easier without depending on a real request format.
//!
//! # Features
//!
//! - [`MockRequest`]: a request with a path, a method and an opaque body
//! - [`MockResponse`]: a response with a status code and a body
//! - [`RecordingHandler`]: a handler that records the requests it receives

use puente_core::{Handler, Request, Response};
use std::sync::{
    Arc, Mutex, PoisonError,
    atomic::{AtomicUsize, Ordering},
};

// ============================================================================
// Mock Envelopes
// ============================================================================

/// A minimal request envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MockRequest {
    /// The request path.
    pub path: String,
    /// The http method string.
    pub method: String,
    /// An opaque payload the router never reads.
    pub body: Option<String>,
}

impl MockRequest {
    /// Create a request for `method` on `path`.
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method: method.into(),
            body: None,
        }
    }

    /// Create a `GET` request for `path`.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new("GET", path)
    }

    /// Attach an opaque body.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

impl Request for MockRequest {
    fn path(&self) -> &str {
        &self.path
    }

    fn method(&self) -> &str {
        &self.method
    }
}

/// A minimal response envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MockResponse {
    /// The status code.
    pub status_code: u16,
    /// The response body.
    pub body: String,
}

impl MockResponse {
    /// Create a response with the given status and body.
    pub fn new(status_code: u16, body: impl Into<String>) -> Self {
        Self {
            status_code,
            body: body.into(),
        }
    }

    /// Create a `200` response.
    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(200, body)
    }
}

impl Response for MockResponse {
    fn from_parts(status: u16, body: String) -> Self {
        Self::new(status, body)
    }

    fn status_code(&self) -> u16 {
        self.status_code
    }
}

// ============================================================================
// Recording Handler
// ============================================================================

/// A handler that records every request it receives.
///
/// Clones share the same record, so keep one clone for assertions and
/// register the other.
///
/// # Example
///
/// ```rust
/// use puente_std::{RouteBuilder, Router, testing::{MockRequest, MockResponse, RecordingHandler}};
///
/// let recorder = RecordingHandler::ok("hello");
/// let mut router: Router<MockRequest, MockResponse> = Router::new();
/// router.get("/greet", recorder.clone());
///
/// router.listen(MockRequest::get("/greet"));
/// assert_eq!(recorder.count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct RecordingHandler {
    requests: Arc<Mutex<Vec<MockRequest>>>,
    calls: Arc<AtomicUsize>,
    response: MockResponse,
}

impl RecordingHandler {
    /// Create a recording handler that answers with `response`.
    pub fn new(response: MockResponse) -> Self {
        Self {
            requests: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(AtomicUsize::new(0)),
            response,
        }
    }

    /// Create a recording handler that answers `200` with `body`.
    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(MockResponse::ok(body))
    }

    /// Get the number of calls.
    pub fn count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Get a clone of the recorded requests.
    pub fn requests(&self) -> Vec<MockRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Get the paths of the recorded requests.
    pub fn paths(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.path).collect()
    }

    /// Clear all recorded requests.
    pub fn clear(&self) {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        self.calls.store(0, Ordering::SeqCst);
    }
}

impl Handler<MockRequest, MockResponse> for RecordingHandler {
    fn call(&self, request: MockRequest) -> MockResponse {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);
        self.response.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_handler_shares_state() {
        let recorder = RecordingHandler::new(MockResponse::new(202, "queued"));
        let registered = recorder.clone();

        let res = registered.call(MockRequest::new("POST", "/jobs").with_body("{}"));
        assert_eq!(res, MockResponse::new(202, "queued"));
        assert_eq!(recorder.count(), 1);
        assert_eq!(recorder.requests()[0].body.as_deref(), Some("{}"));

        recorder.clear();
        assert_eq!(recorder.count(), 0);
        assert!(recorder.requests().is_empty());
    }
}
